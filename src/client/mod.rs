//! Transport core for the CloudConnexa API.
//!
//! [`CloudConnexaClient`] owns the HTTP connection pool, the bearer token and
//! two rate limiters. Every request, whatever service issues it, goes through
//! the same executor: wait for the read or write limiter, attach headers,
//! read the body up to a fixed bound, map non-2xx responses to
//! [`Error::Api`](crate::Error::Api), and re-tune the limiter from the
//! server's rate limit headers.
//!
//! # Example
//!
//! ```no_run
//! use cloudconnexa::{CloudConnexaClient, ClientConfig};
//!
//! # async fn example() -> cloudconnexa::Result<()> {
//! let client = CloudConnexaClient::with_config(
//!     "https://acme.api.openvpn.com",
//!     "client-id",
//!     "client-secret",
//!     ClientConfig::default(),
//! ).await?;
//!
//! let users = client.users().list().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod endpoint;
mod http;
pub mod paginated;
pub mod rate_limit;

pub use config::{
    ClientConfig, RateLimit, DEFAULT_MAX_RESPONSE_SIZE, DEFAULT_MAX_TOKEN_RESPONSE_SIZE,
};
pub use endpoint::{build_url, escape_segment, normalize_base_url, API_V1_PATH};
pub use http::CloudConnexaClient;
pub use paginated::{
    collect_pages, find_in_pages, Page, PaginatedStream, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE,
};
pub use rate_limit::{RateLimiter, RequestClass};

pub(crate) use endpoint::ensure_id;
pub(crate) use http::{read_bounded, ClientInner};
pub(crate) use paginated::PageQuery;
