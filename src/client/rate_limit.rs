//! Token bucket rate limiting for outgoing requests.
//!
//! The client keeps two independent [`RateLimiter`]s, one for reads (GET) and
//! one for writes (everything else). After each successful response the
//! limiter that admitted the request is re-tuned from the server's
//! `X-RateLimit-*` headers, see [`RateLimit::from_headers`].

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use reqwest::header::HeaderMap;
use tokio::time::{sleep, Instant};

use super::config::RateLimit;

/// Header carrying the number of tokens the server replenishes per window.
pub const HEADER_REPLENISH_RATE: &str = "X-RateLimit-Replenish-Rate";
/// Header carrying the replenish window length in seconds.
pub const HEADER_REPLENISH_TIME: &str = "X-RateLimit-Replenish-Time";
/// Header carrying the number of requests left in the current window.
pub const HEADER_REMAINING: &str = "X-RateLimit-Remaining";

/// Which limiter a request draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestClass {
    /// GET requests
    Read,
    /// POST, PUT, DELETE and any other verb
    Write,
}

impl RequestClass {
    /// Classify a request by its HTTP method.
    pub fn of(method: &reqwest::Method) -> Self {
        if method == reqwest::Method::GET {
            RequestClass::Read
        } else {
            RequestClass::Write
        }
    }
}

/// A token bucket shared by every caller of one request class.
///
/// The bucket starts full. All state sits behind one mutex that is never held
/// across an await point, so concurrent `acquire` and `set_limit` calls can't
/// observe a half-applied configuration.
#[derive(Debug)]
pub struct RateLimiter {
    state: Mutex<Bucket>,
}

#[derive(Debug)]
struct Bucket {
    interval: Duration,
    burst: u32,
    tokens: f64,
    last_refill: Instant,
}

impl Bucket {
    fn refill(&mut self, now: Instant) {
        let capacity = f64::from(self.burst);
        if self.interval.is_zero() {
            self.tokens = capacity;
        } else {
            let elapsed = now.saturating_duration_since(self.last_refill);
            let earned = elapsed.as_secs_f64() / self.interval.as_secs_f64();
            self.tokens = (self.tokens + earned).min(capacity);
        }
        self.last_refill = now;
    }

    /// Take a token, or report how long until one is available.
    fn try_take(&mut self, now: Instant) -> Option<Duration> {
        self.refill(now);
        if self.tokens >= 1.0 {
            self.tokens -= 1.0;
            None
        } else {
            let missing = 1.0 - self.tokens;
            Some(self.interval.mul_f64(missing).max(Duration::from_millis(1)))
        }
    }
}

impl RateLimiter {
    /// Create a limiter from a budget. A burst of zero is raised to one.
    pub fn new(limit: RateLimit) -> Self {
        let burst = limit.burst.max(1);
        Self {
            state: Mutex::new(Bucket {
                interval: limit.interval,
                burst,
                tokens: f64::from(burst),
                last_refill: Instant::now(),
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Bucket> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Wait until a token is available and consume it.
    ///
    /// Only the calling task is suspended. Dropping the returned future (for
    /// example via `tokio::time::timeout`) abandons the wait without taking a
    /// token.
    pub async fn acquire(&self) {
        loop {
            let wait = self.lock().try_take(Instant::now());
            match wait {
                None => return,
                Some(wait) => sleep(wait).await,
            }
        }
    }

    /// Take a token if one is available right now.
    pub fn try_acquire(&self) -> bool {
        self.lock().try_take(Instant::now()).is_none()
    }

    /// Replace the refill interval and burst in one step.
    ///
    /// Tokens earned under the old rate are kept, capped at the new burst.
    pub fn set_limit(&self, limit: RateLimit) {
        let mut bucket = self.lock();
        bucket.refill(Instant::now());
        bucket.interval = limit.interval;
        bucket.burst = limit.burst.max(1);
        bucket.tokens = bucket.tokens.min(f64::from(bucket.burst));
    }

    /// Current configuration.
    pub fn limit(&self) -> RateLimit {
        let bucket = self.lock();
        RateLimit::new(bucket.interval, bucket.burst)
    }

    /// Current refill interval.
    pub fn interval(&self) -> Duration {
        self.lock().interval
    }

    /// Current bucket capacity.
    pub fn burst(&self) -> u32 {
        self.lock().burst
    }

    /// Tokens available right now, including fractional progress.
    pub fn available(&self) -> f64 {
        let mut bucket = self.lock();
        bucket.refill(Instant::now());
        bucket.tokens
    }
}

impl RateLimit {
    /// Derive a budget from the server's rate limit headers.
    ///
    /// Returns `None` unless all three headers are present and numeric, or if
    /// the replenish rate is zero. The interval is `time / rate`; the burst is
    /// the remaining count, floored at one so the limiter can always admit
    /// another request eventually.
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        fn parse<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
            headers.get(name)?.to_str().ok()?.trim().parse().ok()
        }

        let rate: u32 = parse(headers, HEADER_REPLENISH_RATE)?;
        let time: u64 = parse(headers, HEADER_REPLENISH_TIME)?;
        let remaining: u32 = parse(headers, HEADER_REMAINING)?;

        let interval = Duration::from_secs(time).checked_div(rate)?;
        Some(RateLimit::new(interval, remaining.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;
    use std::sync::Arc;

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn test_request_class() {
        assert_eq!(RequestClass::of(&reqwest::Method::GET), RequestClass::Read);
        assert_eq!(RequestClass::of(&reqwest::Method::POST), RequestClass::Write);
        assert_eq!(RequestClass::of(&reqwest::Method::PUT), RequestClass::Write);
        assert_eq!(RequestClass::of(&reqwest::Method::DELETE), RequestClass::Write);
    }

    #[test]
    fn test_from_headers_clamps_remaining() {
        let map = headers(&[
            (HEADER_REPLENISH_RATE, "2"),
            (HEADER_REPLENISH_TIME, "10"),
            (HEADER_REMAINING, "0"),
        ]);
        let limit = RateLimit::from_headers(&map).unwrap();
        assert_eq!(limit.burst, 1);
        assert_eq!(limit.interval, Duration::from_secs(5));
    }

    #[test]
    fn test_from_headers_requires_all_three() {
        let map = headers(&[(HEADER_REPLENISH_RATE, "2"), (HEADER_REPLENISH_TIME, "10")]);
        assert!(RateLimit::from_headers(&map).is_none());

        let map = headers(&[(HEADER_REPLENISH_TIME, "10"), (HEADER_REMAINING, "3")]);
        assert!(RateLimit::from_headers(&map).is_none());
    }

    #[test]
    fn test_from_headers_rejects_garbage() {
        let map = headers(&[
            (HEADER_REPLENISH_RATE, "fast"),
            (HEADER_REPLENISH_TIME, "10"),
            (HEADER_REMAINING, "3"),
        ]);
        assert!(RateLimit::from_headers(&map).is_none());

        let map = headers(&[
            (HEADER_REPLENISH_RATE, "0"),
            (HEADER_REPLENISH_TIME, "10"),
            (HEADER_REMAINING, "3"),
        ]);
        assert!(RateLimit::from_headers(&map).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_is_immediate() {
        let limiter = RateLimiter::new(RateLimit::new(Duration::from_secs(1), 3));
        let start = Instant::now();
        for _ in 0..3 {
            limiter.acquire().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
        assert!(!limiter.try_acquire());
    }

    #[tokio::test(start_paused = true)]
    async fn test_blocks_past_burst() {
        let limiter = RateLimiter::new(RateLimit::new(Duration::from_millis(500), 2));
        limiter.acquire().await;
        limiter.acquire().await;

        let start = Instant::now();
        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "waited {:?}", elapsed);
        assert!(elapsed < Duration::from_millis(600), "waited {:?}", elapsed);
    }

    #[tokio::test(start_paused = true)]
    async fn test_refill_caps_at_burst() {
        let limiter = RateLimiter::new(RateLimit::new(Duration::from_millis(100), 4));
        for _ in 0..4 {
            limiter.acquire().await;
        }
        tokio::time::sleep(Duration::from_secs(10)).await;
        assert!((limiter.available() - 4.0).abs() < f64::EPSILON);
    }

    #[tokio::test(start_paused = true)]
    async fn test_set_limit_applies_both_fields() {
        let limiter = RateLimiter::new(RateLimit::new(Duration::from_millis(100), 10));
        limiter.set_limit(RateLimit::new(Duration::from_secs(5), 1));

        assert_eq!(limiter.interval(), Duration::from_secs(5));
        assert_eq!(limiter.burst(), 1);
        assert!(limiter.available() <= 1.0);

        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() >= Duration::from_secs(5));
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_burst_is_raised() {
        let limiter = RateLimiter::new(RateLimit::new(Duration::from_secs(1), 0));
        assert_eq!(limiter.burst(), 1);
        limiter.set_limit(RateLimit::new(Duration::from_secs(1), 0));
        assert_eq!(limiter.burst(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_keeps_tokens() {
        let limiter = RateLimiter::new(RateLimit::new(Duration::from_secs(60), 1));
        limiter.acquire().await;

        let result = tokio::time::timeout(Duration::from_millis(10), limiter.acquire()).await;
        assert!(result.is_err());
        assert!(limiter.available() < 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_acquire() {
        let limiter = Arc::new(RateLimiter::new(RateLimit::new(Duration::from_millis(100), 5)));
        let start = Instant::now();

        let mut handles = vec![];
        for _ in 0..15 {
            let limiter = Arc::clone(&limiter);
            handles.push(tokio::spawn(async move { limiter.acquire().await }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // 5 immediately, 10 more at 100ms apiece
        assert!(start.elapsed() >= Duration::from_millis(990));
        assert!(limiter.available() < 1.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_set_limit() {
        let limiter = Arc::new(RateLimiter::new(RateLimit::new(Duration::from_millis(10), 10)));

        let mut handles = vec![];
        for i in 1..=20u32 {
            let limiter = Arc::clone(&limiter);
            handles.push(tokio::spawn(async move {
                limiter.set_limit(RateLimit::new(Duration::from_millis(u64::from(i)), i));
                limiter.acquire().await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        let limit = limiter.limit();
        assert_eq!(limit.interval, Duration::from_millis(u64::from(limit.burst)));
    }
}
