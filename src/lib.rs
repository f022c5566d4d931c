//! # cloudconnexa-rs
//!
//! An async Rust client for the CloudConnexa VPN management API.
//!
//! The crate is split into a small transport core and one service per
//! resource kind. The core authenticates once with OAuth2 client
//! credentials, throttles requests with separate read and write token
//! buckets that follow the server's advertised budget, bounds response
//! sizes, and maps non-2xx responses to [`Error::Api`]. Services build
//! escaped endpoint URLs and walk paginated collections on top of it.
//!
//! ## Features
//!
//! - **Authentication**: OAuth2 client-credentials bootstrap, HTTPS enforced
//! - **Rate Limiting**: Independent read/write budgets, tuned from
//!   `X-RateLimit-*` response headers
//! - **Resources**: Networks, hosts, connectors, routes, users, user groups,
//!   devices, sessions, DNS records, access groups, location contexts,
//!   regions and settings
//! - **Pagination**: Whole-collection listing, lookup by name, or lazy streams
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cloudconnexa::CloudConnexaClient;
//!
//! #[tokio::main]
//! async fn main() -> cloudconnexa::Result<()> {
//!     let client = CloudConnexaClient::new(
//!         "https://acme.api.openvpn.com",
//!         "client-id",
//!         "client-secret",
//!     ).await?;
//!
//!     let networks = client.networks().list().await?;
//!     println!("Found {} networks", networks.len());
//!
//!     match client.users().get_by_username("alice").await {
//!         Ok(user) => println!("alice is {:?}", user.role),
//!         Err(e) if e.is_not_found() => println!("no such user"),
//!         Err(e) => return Err(e),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Local Development
//!
//! Plain `http` is refused unless the host is a loopback address and the
//! client was configured to allow it:
//!
//! ```rust,no_run
//! use cloudconnexa::{CloudConnexaClient, ClientConfig};
//!
//! # async fn example() -> cloudconnexa::Result<()> {
//! let client = CloudConnexaClient::with_config(
//!     "http://localhost:8080",
//!     "client-id",
//!     "client-secret",
//!     ClientConfig::default().with_insecure_loopback(true),
//! ).await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

pub use auth::Credentials;
pub use client::{build_url, ClientConfig, CloudConnexaClient, RateLimit};
pub use error::{Error, Result};

/// Prelude module for convenient imports.
///
/// ```rust
/// use cloudconnexa::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, CloudConnexaClient, Page, RateLimit};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AccessGroup, AccessItem, AccessItemType, Connector, ConnectorRequest, Device, DnsRecord,
        Host, InternetAccess, LocationContext, Network, NetworkRequest, Route, RouteRequest,
        RouteType, Session, SessionsQuery, User, UserGroup, UserRequest, UserRole, VpnRegion,
    };
}
