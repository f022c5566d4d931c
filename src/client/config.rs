//! Client configuration options.

use std::time::Duration;

/// Maximum size of a regular API response body (10 MiB).
pub const DEFAULT_MAX_RESPONSE_SIZE: usize = 10 * 1024 * 1024;

/// Maximum size of the OAuth token response body (1 MiB).
pub const DEFAULT_MAX_TOKEN_RESPONSE_SIZE: usize = 1024 * 1024;

/// Configuration for the CloudConnexa client.
///
/// # Example
///
/// ```
/// use cloudconnexa::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_user_agent("my-app/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout for API calls
    pub timeout: Duration,
    /// Request timeout for the OAuth token exchange
    pub token_timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Permit plain `http` when the base URL host is a loopback address
    pub allow_insecure_loopback: bool,
    /// Initial budget for GET requests
    pub read_limit: RateLimit,
    /// Initial budget for POST/PUT/DELETE requests
    pub write_limit: RateLimit,
    /// Upper bound on an API response body, in bytes
    pub max_response_size: usize,
    /// Upper bound on the token response body, in bytes
    pub max_token_response_size: usize,
    /// Upper bound on waiting for a rate limiter token; unbounded if `None`
    pub rate_limit_wait_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            token_timeout: Duration::from_secs(30),
            user_agent: format!("cloudconnexa-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            allow_insecure_loopback: false,
            read_limit: RateLimit::new(Duration::from_millis(100), 10),
            write_limit: RateLimit::new(Duration::from_millis(200), 5),
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
            max_token_response_size: DEFAULT_MAX_TOKEN_RESPONSE_SIZE,
            rate_limit_wait_timeout: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the token exchange timeout.
    pub fn with_token_timeout(mut self, timeout: Duration) -> Self {
        self.token_timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Allow `http://localhost`, `http://127.x.x.x` and `http://[::1]` base
    /// URLs. Intended for local development and tests only.
    pub fn with_insecure_loopback(mut self, allow: bool) -> Self {
        self.allow_insecure_loopback = allow;
        self
    }

    /// Set the initial read (GET) budget.
    pub fn with_read_limit(mut self, limit: RateLimit) -> Self {
        self.read_limit = limit;
        self
    }

    /// Set the initial write (POST/PUT/DELETE) budget.
    pub fn with_write_limit(mut self, limit: RateLimit) -> Self {
        self.write_limit = limit;
        self
    }

    /// Set the maximum accepted API response body size.
    pub fn with_max_response_size(mut self, bytes: usize) -> Self {
        self.max_response_size = bytes;
        self
    }

    /// Set the maximum accepted token response body size.
    pub fn with_max_token_response_size(mut self, bytes: usize) -> Self {
        self.max_token_response_size = bytes;
        self
    }

    /// Bound how long a request may wait for a rate limiter token.
    pub fn with_rate_limit_wait_timeout(mut self, timeout: Duration) -> Self {
        self.rate_limit_wait_timeout = Some(timeout);
        self
    }
}

/// A token bucket budget: one token every `interval`, at most `burst` stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    /// Time between successive token grants
    pub interval: Duration,
    /// Bucket capacity
    pub burst: u32,
}

impl RateLimit {
    /// Create a new budget.
    pub fn new(interval: Duration, burst: u32) -> Self {
        Self { interval, burst }
    }

    /// A budget of `n` requests per second with a burst of `n`.
    pub fn per_second(n: u32) -> Self {
        let n = n.max(1);
        Self {
            interval: Duration::from_secs(1) / n,
            burst: n,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.token_timeout, Duration::from_secs(30));
        assert!(!config.allow_insecure_loopback);
        assert_eq!(config.max_response_size, 10 * 1024 * 1024);
        assert_eq!(config.max_token_response_size, 1024 * 1024);
        assert!(config.rate_limit_wait_timeout.is_none());
    }

    #[test]
    fn test_reads_are_cheaper_than_writes() {
        let config = ClientConfig::default();
        assert!(config.read_limit.interval < config.write_limit.interval);
        assert!(config.read_limit.burst > config.write_limit.burst);
    }

    #[test]
    fn test_per_second() {
        let limit = RateLimit::per_second(4);
        assert_eq!(limit.interval, Duration::from_millis(250));
        assert_eq!(limit.burst, 4);

        let limit = RateLimit::per_second(0);
        assert_eq!(limit.burst, 1);
    }
}
