//! Networks service.

use std::sync::Arc;

use crate::client::paginated::{
    collect_pages, find_in_pages, Page, PaginatedStream, DEFAULT_PAGE_SIZE,
};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{Network, NetworkRequest};
use crate::{Error, Result};

/// Service for network operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let networks = client.networks().list().await?;
/// for network in networks {
///     println!("{} ({} connectors)", network.name, network.connectors.len());
/// }
///
/// let office = client.networks().get_by_name("office").await?;
/// # Ok(())
/// # }
/// ```
pub struct NetworksService {
    inner: Arc<ClientInner>,
}

impl NetworksService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of networks.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<Network>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["networks"]), &query)
            .await
    }

    /// List every network.
    pub async fn list(&self) -> Result<Vec<Network>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Stream every network, one page at a time.
    pub fn stream(&self) -> PaginatedStream<Network> {
        let url = self.inner.url(&["networks"]);
        PaginatedStream::for_url(self.inner.clone(), url, DEFAULT_PAGE_SIZE)
    }

    /// Get a network by ID.
    pub async fn get(&self, id: &str) -> Result<Network> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["networks", id])).await
    }

    /// Find a network by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<Network> {
        find_in_pages(
            move |page| self.list_page(page, DEFAULT_PAGE_SIZE),
            |network| network.name == name,
        )
        .await?
        .ok_or_else(|| Error::not_found("network", name))
    }

    /// Create a network.
    pub async fn create(&self, network: &NetworkRequest) -> Result<Network> {
        self.inner.post(&self.inner.url(&["networks"]), network).await
    }

    /// Update a network.
    pub async fn update(&self, id: &str, network: &NetworkRequest) -> Result<Network> {
        let id = ensure_id(id)?;
        self.inner.put(&self.inner.url(&["networks", id]), network).await
    }

    /// Delete a network.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["networks", id])).await
    }
}
