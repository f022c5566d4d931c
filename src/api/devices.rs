//! Devices service.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::{collect_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{Device, DeviceUpdate};
use crate::Result;

/// Service for device operations.
pub struct DevicesService {
    inner: Arc<ClientInner>,
}

impl DevicesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of devices, optionally only those of one user.
    pub async fn list_page(
        &self,
        user_id: Option<&str>,
        page: u32,
        size: u32,
    ) -> Result<Page<Device>> {
        let query = PageQuery::new(page, size)?;
        let mut builder = self
            .inner
            .request(Method::GET, &self.inner.url(&["devices"]))
            .query(&query);
        if let Some(user_id) = user_id {
            builder = builder.query(&[("userId", ensure_id(user_id)?)]);
        }
        self.inner.send_json(builder).await
    }

    /// List every device.
    pub async fn list(&self) -> Result<Vec<Device>> {
        collect_pages(move |page| self.list_page(None, page, DEFAULT_PAGE_SIZE)).await
    }

    /// List every device registered to a user.
    pub async fn list_for_user(&self, user_id: &str) -> Result<Vec<Device>> {
        ensure_id(user_id)?;
        collect_pages(move |page| self.list_page(Some(user_id), page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a device by ID.
    pub async fn get(&self, id: &str) -> Result<Device> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["devices", id])).await
    }

    /// Rename or re-describe a device.
    pub async fn update(&self, id: &str, device: &DeviceUpdate) -> Result<Device> {
        let id = ensure_id(id)?;
        self.inner.put(&self.inner.url(&["devices", id]), device).await
    }

    /// Delete a device.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["devices", id])).await
    }
}
