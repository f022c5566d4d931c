//! HTTP client implementation for the CloudConnexa API.

use std::sync::Arc;

use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};

use crate::api::{
    AccessGroupsService, ConnectorOwner, ConnectorsService, DevicesService, DnsRecordsService,
    HostsService, LocationContextsService, NetworksService, RegionsService, RoutesService,
    SessionsService, SettingsService, UserGroupsService, UsersService,
};
use crate::auth::{fetch_token, Credentials};
use crate::{Error, Result};

use super::config::{ClientConfig, RateLimit};
use super::endpoint::{build_url, normalize_base_url, API_V1_PATH};
use super::rate_limit::{RateLimiter, RequestClass};

/// The main client for interacting with the CloudConnexa API.
///
/// Building a client performs the OAuth client-credentials exchange once.
/// Every service handle returned by this client shares the same token, HTTP
/// connection pool and rate limiters. Cloning is cheap.
///
/// # Example
///
/// ```no_run
/// use cloudconnexa::CloudConnexaClient;
///
/// # async fn example() -> cloudconnexa::Result<()> {
/// let client = CloudConnexaClient::new(
///     "https://acme.api.openvpn.com",
///     "client-id",
///     "client-secret",
/// ).await?;
///
/// let networks = client.networks().list().await?;
/// for network in networks {
///     println!("{}: {}", network.id, network.name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CloudConnexaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    token: SecretString,
    read_limiter: RateLimiter,
    write_limiter: RateLimiter,
    pub(crate) config: ClientConfig,
}

impl CloudConnexaClient {
    /// Authenticate with client credentials using the default configuration.
    pub async fn new(
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(base_url, client_id, client_secret, ClientConfig::default()).await
    }

    /// Authenticate with client credentials and a custom configuration.
    ///
    /// Credentials and the base URL are validated before any network call.
    pub async fn with_config(
        base_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let credentials = Credentials::new(client_id, client_secret)?;
        let base_url = normalize_base_url(base_url, config.allow_insecure_loopback)?;
        let http = build_http(&config)?;

        let token = fetch_token(&http, &base_url, &credentials, &config).await?;
        Ok(Self::assemble(http, base_url, token, config))
    }

    /// Create a client from a bearer token obtained elsewhere.
    ///
    /// The base URL is validated the same way as during authentication.
    pub fn with_token(
        base_url: &str,
        token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let token = token.into();
        if token.is_empty() {
            return Err(Error::CredentialsRequired);
        }
        let base_url = normalize_base_url(base_url, config.allow_insecure_loopback)?;
        let http = build_http(&config)?;
        Ok(Self::assemble(http, base_url, SecretString::from(token), config))
    }

    fn assemble(
        http: reqwest::Client,
        base_url: String,
        token: SecretString,
        config: ClientConfig,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                http,
                base_url,
                token,
                read_limiter: RateLimiter::new(config.read_limit),
                write_limiter: RateLimiter::new(config.write_limit),
                config,
            }),
        }
    }

    /// The normalized base URL, `scheme://host[:port]`.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// The root of the versioned API, e.g. `https://acme.api.openvpn.com/api/v1`.
    pub fn v1_url(&self) -> String {
        self.inner.v1_url()
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// The limiter that admits GET requests.
    pub fn read_limiter(&self) -> &RateLimiter {
        &self.inner.read_limiter
    }

    /// The limiter that admits every non-GET request.
    pub fn write_limiter(&self) -> &RateLimiter {
        &self.inner.write_limiter
    }

    /// Start a request against the underlying HTTP client.
    ///
    /// Send it with [`execute`](Self::execute) so that authentication, rate
    /// limiting and body bounds apply.
    pub fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.inner.http.request(method, url)
    }

    /// Execute an arbitrary request and return the raw response body.
    ///
    /// Non-2xx responses become [`Error::Api`] with the body preserved.
    pub async fn execute(&self, request: reqwest::Request) -> Result<Vec<u8>> {
        self.inner.execute(request).await
    }

    /// Get the networks service.
    pub fn networks(&self) -> NetworksService {
        NetworksService::new(self.inner.clone())
    }

    /// Get the network connectors service.
    pub fn network_connectors(&self) -> ConnectorsService {
        ConnectorsService::new(self.inner.clone(), ConnectorOwner::Network)
    }

    /// Get the hosts service.
    pub fn hosts(&self) -> HostsService {
        HostsService::new(self.inner.clone())
    }

    /// Get the host connectors service.
    pub fn host_connectors(&self) -> ConnectorsService {
        ConnectorsService::new(self.inner.clone(), ConnectorOwner::Host)
    }

    /// Get the network routes service.
    pub fn routes(&self) -> RoutesService {
        RoutesService::new(self.inner.clone())
    }

    /// Get the users service.
    pub fn users(&self) -> UsersService {
        UsersService::new(self.inner.clone())
    }

    /// Get the user groups service.
    pub fn user_groups(&self) -> UserGroupsService {
        UserGroupsService::new(self.inner.clone())
    }

    /// Get the devices service.
    pub fn devices(&self) -> DevicesService {
        DevicesService::new(self.inner.clone())
    }

    /// Get the sessions service.
    pub fn sessions(&self) -> SessionsService {
        SessionsService::new(self.inner.clone())
    }

    /// Get the DNS records service.
    pub fn dns_records(&self) -> DnsRecordsService {
        DnsRecordsService::new(self.inner.clone())
    }

    /// Get the access groups service.
    pub fn access_groups(&self) -> AccessGroupsService {
        AccessGroupsService::new(self.inner.clone())
    }

    /// Get the location contexts service.
    pub fn location_contexts(&self) -> LocationContextsService {
        LocationContextsService::new(self.inner.clone())
    }

    /// Get the VPN regions service.
    pub fn regions(&self) -> RegionsService {
        RegionsService::new(self.inner.clone())
    }

    /// Get the settings service.
    pub fn settings(&self) -> SettingsService {
        SettingsService::new(self.inner.clone())
    }
}

fn build_http(config: &ClientConfig) -> Result<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .timeout(config.timeout)
        .user_agent(&config.user_agent)
        .build()?)
}

/// Read a response body, failing once it grows past `limit` bytes.
pub(crate) async fn read_bounded(mut response: reqwest::Response, limit: usize) -> Result<Vec<u8>> {
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(Error::ResponseTooLarge { limit });
        }
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(Error::ResponseTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body)
}

impl ClientInner {
    pub(crate) fn v1_url(&self) -> String {
        format!("{}{}", self.base_url, API_V1_PATH)
    }

    /// Build an escaped endpoint URL under `/api/v1`.
    pub(crate) fn url(&self, segments: &[&str]) -> String {
        build_url(&self.v1_url(), segments)
    }

    fn limiter(&self, class: RequestClass) -> &RateLimiter {
        match class {
            RequestClass::Read => &self.read_limiter,
            RequestClass::Write => &self.write_limiter,
        }
    }

    async fn wait_for_token(&self, limiter: &RateLimiter) -> Result<()> {
        match self.config.rate_limit_wait_timeout {
            Some(bound) => tokio::time::timeout(bound, limiter.acquire())
                .await
                .map_err(|_| Error::Timeout),
            None => {
                limiter.acquire().await;
                Ok(())
            }
        }
    }

    fn authorization(&self) -> Result<HeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token.expose_secret()))
            .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Send one request with authentication, rate limiting and body bounds.
    pub(crate) async fn execute(&self, mut request: reqwest::Request) -> Result<Vec<u8>> {
        let class = RequestClass::of(request.method());
        let limiter = self.limiter(class);
        self.wait_for_token(limiter).await?;

        let authorization = self.authorization()?;
        let headers = request.headers_mut();
        headers.insert(AUTHORIZATION, authorization);
        if let Ok(agent) = HeaderValue::from_str(&self.config.user_agent) {
            headers.insert(USER_AGENT, agent);
        }
        if !headers.contains_key(CONTENT_TYPE) {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }

        tracing::debug!(method = %request.method(), url = %request.url(), "sending request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let response_headers = response.headers().clone();
        let body = read_bounded(response, self.config.max_response_size).await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "received response");

        if !status.is_success() {
            return Err(Error::api(status.as_u16(), body));
        }

        if let Some(limit) = RateLimit::from_headers(&response_headers) {
            tracing::trace!(
                ?class,
                interval_ms = limit.interval.as_millis() as u64,
                burst = limit.burst,
                "applying server rate limit"
            );
            limiter.set_limit(limit);
        }

        Ok(body)
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http.request(method, url)
    }

    /// Build and execute a request, returning the raw body.
    pub(crate) async fn send(&self, builder: RequestBuilder) -> Result<Vec<u8>> {
        let request = builder.build()?;
        self.execute(request).await
    }

    /// Build and execute a request, decoding the body as JSON.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T> {
        let body = self.send(builder).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a GET request.
    pub(crate) async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.send_json(self.request(Method::GET, url)).await
    }

    /// Make a GET request with query parameters.
    pub(crate) async fn get_with_query<T: DeserializeOwned, Q: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<T> {
        self.send_json(self.request(Method::GET, url).query(query)).await
    }

    /// Make a GET request and return the body as text.
    pub(crate) async fn get_text(&self, url: &str) -> Result<String> {
        let body = self.send(self.request(Method::GET, url)).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Make a POST request.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(self.request(Method::POST, url).json(body)).await
    }

    /// Make a POST request with query parameters.
    pub(crate) async fn post_with_query<T, B, Q>(&self, url: &str, query: &Q, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
        Q: Serialize + ?Sized,
    {
        self.send_json(self.request(Method::POST, url).query(query).json(body))
            .await
    }

    /// Make a POST request without a body and return the response as text.
    pub(crate) async fn post_for_text(&self, url: &str) -> Result<String> {
        let body = self.send(self.request(Method::POST, url)).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Make a PUT request.
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(self.request(Method::PUT, url).json(body)).await
    }

    /// Make a PUT request with a `text/plain` body.
    pub(crate) async fn put_text(&self, url: &str, body: &str) -> Result<String> {
        let builder = self
            .request(Method::PUT, url)
            .header(CONTENT_TYPE, "text/plain")
            .body(body.to_string());
        let body = self.send(builder).await?;
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    /// Make a DELETE request, discarding the response body.
    pub(crate) async fn delete(&self, url: &str) -> Result<()> {
        self.send(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    /// Make a DELETE request with query parameters.
    pub(crate) async fn delete_with_query<Q: Serialize + ?Sized>(
        &self,
        url: &str,
        query: &Q,
    ) -> Result<()> {
        self.send(self.request(Method::DELETE, url).query(query)).await?;
        Ok(())
    }
}

impl Clone for CloudConnexaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for CloudConnexaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudConnexaClient")
            .field("base_url", &self.inner.base_url)
            .field("token", &"[REDACTED]")
            .field("config", &self.inner.config)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> CloudConnexaClient {
        let config = ClientConfig::default().with_insecure_loopback(true);
        CloudConnexaClient::with_token(base, "tok", config).unwrap()
    }

    #[test]
    fn test_v1_url() {
        let client = client("https://acme.api.openvpn.com/ignored?x=1");
        assert_eq!(client.base_url(), "https://acme.api.openvpn.com");
        assert_eq!(client.v1_url(), "https://acme.api.openvpn.com/api/v1");
        assert_eq!(
            client.inner.url(&["users", "a/b"]),
            "https://acme.api.openvpn.com/api/v1/users/a%2Fb"
        );
    }

    #[test]
    fn test_with_token_validates() {
        assert!(matches!(
            CloudConnexaClient::with_token("https://h", "", ClientConfig::default()),
            Err(Error::CredentialsRequired)
        ));
        assert!(matches!(
            CloudConnexaClient::with_token("http://h.example.com", "t", ClientConfig::default()),
            Err(Error::HttpsRequired(_))
        ));
    }

    #[test]
    fn test_debug_redacts_token() {
        let client = CloudConnexaClient::with_token(
            "https://h.example.com",
            "super-secret-token",
            ClientConfig::default(),
        )
        .unwrap();
        let debug_str = format!("{:?}", client);
        assert!(!debug_str.contains("super-secret-token"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_limiters_start_from_config() {
        let config = ClientConfig::default()
            .with_read_limit(RateLimit::per_second(7))
            .with_write_limit(RateLimit::per_second(3));
        let client = CloudConnexaClient::with_token("https://h.example.com", "t", config).unwrap();
        assert_eq!(client.read_limiter().burst(), 7);
        assert_eq!(client.write_limiter().burst(), 3);
    }
}
