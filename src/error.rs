//! Error types for the CloudConnexa API client.
//!
//! Every failure the client can produce is a variant of [`Error`], so callers
//! can match on the kind of failure instead of comparing strings.

use thiserror::Error;

/// A specialized `Result` type for CloudConnexa operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all CloudConnexa API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport failed (DNS, connect, TLS, timeout).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Client ID or client secret was empty.
    #[error("client ID and client secret are required")]
    CredentialsRequired,

    /// The base URL is malformed or carries parts that are not allowed.
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The base URL does not use HTTPS and is not an allowed loopback address.
    #[error("HTTPS is required: {0}")]
    HttpsRequired(String),

    /// A response body exceeded the configured size bound.
    #[error("response body exceeds maximum size of {limit} bytes")]
    ResponseTooLarge {
        /// The bound that was exceeded, in bytes
        limit: usize,
    },

    /// An empty resource identifier was passed to an operation.
    #[error("resource ID must not be empty")]
    EmptyId,

    /// API returned a non-2xx response.
    #[error("API error: status={status}, body={body}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body as text, with invalid UTF-8 replaced
        body: String,
        /// Response body exactly as received
        raw: Vec<u8>,
    },

    /// A lookup by name walked every page without finding a match.
    #[error("{resource} not found: {key}")]
    NotFound {
        /// Kind of resource that was searched
        resource: &'static str,
        /// Name, username or ID that was searched for
        key: String,
    },

    /// Invalid input provided to a function
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Token acquisition failed.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Waiting for a rate limiter token exceeded the configured bound.
    #[error("timed out waiting for rate limiter")]
    Timeout,
}

impl Error {
    /// Returns the HTTP status code for API errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if this is an authentication-related error.
    ///
    /// Tokens are never refreshed, so a 401 mid-session means the caller
    /// has to build a new client.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Error::Authentication(_) | Error::CredentialsRequired => true,
            Error::Api { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => (400..500).contains(status),
            Error::EmptyId
            | Error::InvalidInput(_)
            | Error::InvalidBaseUrl(_)
            | Error::HttpsRequired(_)
            | Error::CredentialsRequired => true,
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns `true` for client-side lookup misses and API 404s.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::Api { status, .. } => *status == 404,
            _ => false,
        }
    }

    /// The raw body of an API error response.
    pub fn body_bytes(&self) -> Option<&[u8]> {
        match self {
            Error::Api { raw, .. } => Some(raw),
            _ => None,
        }
    }

    pub(crate) fn api(status: u16, raw: Vec<u8>) -> Self {
        Error::Api {
            status,
            body: String::from_utf8_lossy(&raw).into_owned(),
            raw,
        }
    }

    pub(crate) fn not_found(resource: &'static str, key: impl Into<String>) -> Self {
        Error::NotFound {
            resource,
            key: key.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_auth() {
        assert!(Error::CredentialsRequired.is_auth_error());
        assert!(Error::Authentication("failed".into()).is_auth_error());
        assert!(Error::api(401, Vec::new()).is_auth_error());
        assert!(!Error::Timeout.is_auth_error());
    }

    #[test]
    fn test_error_classification() {
        let err = Error::api(404, br#"{"message":"missing"}"#.to_vec());
        assert!(err.is_client_error());
        assert!(err.is_not_found());
        assert!(!err.is_server_error());
        assert_eq!(err.status(), Some(404));

        let err = Error::api(503, Vec::new());
        assert!(err.is_server_error());
        assert!(!err.is_client_error());

        assert!(Error::EmptyId.is_client_error());
        assert_eq!(Error::EmptyId.status(), None);
    }

    #[test]
    fn test_not_found_display() {
        let err = Error::not_found("user", "alice");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "user not found: alice");
    }

    #[test]
    fn test_api_error_keeps_body() {
        let err = Error::api(400, br#"{"errorCode":"VALIDATION"}"#.to_vec());
        assert!(err.to_string().contains("VALIDATION"));
        assert_eq!(err.body_bytes(), Some(&br#"{"errorCode":"VALIDATION"}"#[..]));
    }

    #[test]
    fn test_api_error_keeps_invalid_utf8() {
        let raw = vec![b'o', b'k', 0xff, 0xfe, b'!'];
        let err = Error::api(502, raw.clone());
        assert_eq!(err.body_bytes(), Some(raw.as_slice()));
        match err {
            Error::Api { body, .. } => assert_eq!(body, "ok\u{fffd}\u{fffd}!"),
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(Error::Timeout.body_bytes(), None);
    }
}
