//! Client-credentials token exchange.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::client::{read_bounded, ClientConfig, API_V1_PATH};
use crate::{Error, Result};

/// OAuth client credentials. The secret is redacted from `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: SecretString,
}

impl Credentials {
    /// Build credentials, rejecting an empty ID or secret.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Result<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        if client_id.is_empty() || client_secret.is_empty() {
            return Err(Error::CredentialsRequired);
        }
        Ok(Self {
            client_id,
            client_secret: SecretString::from(client_secret),
        })
    }

    /// The OAuth client ID.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[allow(dead_code)]
    #[serde(default)]
    token_type: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    expires_in: Option<i64>,
}

/// Exchange client credentials for a bearer token.
///
/// `base_url` must already be normalized. The response body is read through
/// the token size bound before it is parsed.
pub(crate) async fn fetch_token(
    http: &reqwest::Client,
    base_url: &str,
    credentials: &Credentials,
    config: &ClientConfig,
) -> Result<SecretString> {
    let url = format!("{base_url}{API_V1_PATH}/oauth/token");
    tracing::debug!(url = %url, client_id = %credentials.client_id, "requesting access token");

    let response = http
        .post(&url)
        .query(&[("grant_type", "client_credentials"), ("scope", "default")])
        .basic_auth(&credentials.client_id, Some(credentials.client_secret.expose_secret()))
        .timeout(config.token_timeout)
        .send()
        .await?;

    let status = response.status();
    let body = read_bounded(response, config.max_token_response_size).await?;

    if !status.is_success() {
        return Err(Error::api(status.as_u16(), body));
    }

    let token: TokenResponse = serde_json::from_slice(&body)?;
    if token.access_token.is_empty() {
        return Err(Error::Authentication(
            "token response contained an empty access_token".to_string(),
        ));
    }

    tracing::debug!("access token acquired");
    Ok(SecretString::from(token.access_token))
}
