//! Data models for the CloudConnexa API.
//!
//! - [`enums`] - Enumerations shared across resources
//! - [`network`] - Networks, hosts, connectors and routes
//! - [`user`] - Users, user groups and devices
//! - [`session`] - VPN session history
//! - [`dns`] - Private DNS records
//! - [`access`] - Access groups and location contexts
//! - [`region`] - VPN regions

pub mod access;
pub mod dns;
pub mod enums;
pub mod network;
pub mod region;
pub mod session;
pub mod user;

pub use access::*;
pub use dns::*;
pub use enums::*;
pub use network::*;
pub use region::*;
pub use session::*;
pub use user::*;
