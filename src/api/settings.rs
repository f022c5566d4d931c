//! Organization settings service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::ConnectAuth;
use crate::Result;

/// Service for organization-wide settings.
///
/// Most settings are single JSON values; the default DNS suffix is read and
/// written as `text/plain`.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let settings = client.settings();
/// settings.set_default_dns_suffix("corp.example.com").await?;
/// if !settings.two_factor_auth().await? {
///     settings.set_two_factor_auth(true).await?;
/// }
/// # Ok(())
/// # }
/// ```
pub struct SettingsService {
    inner: Arc<ClientInner>,
}

impl SettingsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn url(&self, group: &str, name: &str) -> String {
        self.inner.url(&["settings", group, name])
    }

    /// Whether users may mark devices as trusted.
    pub async fn trusted_devices_allowed(&self) -> Result<bool> {
        self.inner.get(&self.url("auth", "trusted-devices-allowed")).await
    }

    /// Allow or forbid trusted devices.
    pub async fn set_trusted_devices_allowed(&self, allowed: bool) -> Result<bool> {
        self.inner
            .put(&self.url("auth", "trusted-devices-allowed"), &allowed)
            .await
    }

    /// Whether two-factor authentication is enforced.
    pub async fn two_factor_auth(&self) -> Result<bool> {
        self.inner.get(&self.url("auth", "two-factor-auth")).await
    }

    /// Enforce or relax two-factor authentication.
    pub async fn set_two_factor_auth(&self, enabled: bool) -> Result<bool> {
        self.inner
            .put(&self.url("auth", "two-factor-auth"), &enabled)
            .await
    }

    /// Search suffix appended to unqualified names.
    pub async fn default_dns_suffix(&self) -> Result<String> {
        self.inner.get_text(&self.url("dns", "default-suffix")).await
    }

    /// Set the search suffix appended to unqualified names.
    pub async fn set_default_dns_suffix(&self, suffix: &str) -> Result<String> {
        self.inner
            .put_text(&self.url("dns", "default-suffix"), suffix)
            .await
    }

    /// Re-authentication policy for new user groups.
    pub async fn default_connect_auth(&self) -> Result<ConnectAuth> {
        self.inner
            .get(&self.url("user", "default-connect-auth"))
            .await
    }

    /// Set the re-authentication policy for new user groups.
    pub async fn set_default_connect_auth(&self, auth: ConnectAuth) -> Result<ConnectAuth> {
        self.inner
            .put(&self.url("user", "default-connect-auth"), &auth)
            .await
    }

    /// Device limit for new users.
    pub async fn default_device_allowance(&self) -> Result<u32> {
        self.inner
            .get(&self.url("user", "default-device-allowance"))
            .await
    }

    /// Set the device limit for new users.
    pub async fn set_default_device_allowance(&self, allowance: u32) -> Result<u32> {
        self.inner
            .put(&self.url("user", "default-device-allowance"), &allowance)
            .await
    }
}
