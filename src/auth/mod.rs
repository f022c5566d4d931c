//! OAuth2 client-credentials authentication.
//!
//! The API issues a bearer token in exchange for a client ID and secret.
//! The token is fetched once, when the client is built, and is never
//! refreshed: if it expires, calls start failing with a 401
//! [`Error::Api`](crate::Error::Api) and the caller builds a new client.
//!
//! ```no_run
//! use cloudconnexa::CloudConnexaClient;
//!
//! # async fn example() -> cloudconnexa::Result<()> {
//! let client = CloudConnexaClient::new(
//!     "https://acme.api.openvpn.com",
//!     "your-client-id",
//!     "your-client-secret",
//! ).await?;
//! # Ok(())
//! # }
//! ```

mod token;

pub use token::Credentials;
pub(crate) use token::fetch_token;
