//! Hosts service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, find_in_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{Host, HostRequest};
use crate::{Error, Result};

/// Service for host operations.
pub struct HostsService {
    inner: Arc<ClientInner>,
}

impl HostsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of hosts.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<Host>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["hosts"]), &query)
            .await
    }

    /// List every host.
    pub async fn list(&self) -> Result<Vec<Host>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a host by ID.
    pub async fn get(&self, id: &str) -> Result<Host> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["hosts", id])).await
    }

    /// Find a host by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<Host> {
        find_in_pages(
            move |page| self.list_page(page, DEFAULT_PAGE_SIZE),
            |host| host.name == name,
        )
        .await?
        .ok_or_else(|| Error::not_found("host", name))
    }

    /// Create a host.
    pub async fn create(&self, host: &HostRequest) -> Result<Host> {
        self.inner.post(&self.inner.url(&["hosts"]), host).await
    }

    /// Update a host.
    pub async fn update(&self, id: &str, host: &HostRequest) -> Result<Host> {
        let id = ensure_id(id)?;
        self.inner.put(&self.inner.url(&["hosts", id]), host).await
    }

    /// Delete a host.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["hosts", id])).await
    }
}
