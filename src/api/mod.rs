//! API service modules for CloudConnexa endpoints.
//!
//! Each service covers one resource kind and holds a handle to the shared
//! transport core; obtain them from
//! [`CloudConnexaClient`](crate::CloudConnexaClient).

mod access_groups;
mod connectors;
mod devices;
mod dns_records;
mod hosts;
mod location_contexts;
mod networks;
mod regions;
mod routes;
mod sessions;
mod settings;
mod user_groups;
mod users;

pub use access_groups::AccessGroupsService;
pub use connectors::{ConnectorOwner, ConnectorsService};
pub use devices::DevicesService;
pub use dns_records::DnsRecordsService;
pub use hosts::HostsService;
pub use location_contexts::LocationContextsService;
pub use networks::NetworksService;
pub use regions::RegionsService;
pub use routes::RoutesService;
pub use sessions::SessionsService;
pub use settings::SettingsService;
pub use user_groups::UserGroupsService;
pub use users::UsersService;
