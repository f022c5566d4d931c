//! Network routes service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{Route, RouteRequest};
use crate::Result;

/// Service for routes advertised by networks.
///
/// Routes are listed and created under their network
/// (`/networks/{id}/routes`) but addressed directly by route ID afterwards
/// (`/networks/routes/{id}`).
///
/// # Example
///
/// ```no_run
/// use cloudconnexa::models::RouteRequest;
///
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let network = client.networks().get_by_name("office").await?;
/// let route = client
///     .routes()
///     .create(&network.id, &RouteRequest::ipv4("10.20.0.0/16").with_description("lab"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct RoutesService {
    inner: Arc<ClientInner>,
}

impl RoutesService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of a network's routes.
    pub async fn list_page(&self, network_id: &str, page: u32, size: u32) -> Result<Page<Route>> {
        let network_id = ensure_id(network_id)?;
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["networks", network_id, "routes"]), &query)
            .await
    }

    /// List every route of a network.
    pub async fn list(&self, network_id: &str) -> Result<Vec<Route>> {
        ensure_id(network_id)?;
        collect_pages(move |page| self.list_page(network_id, page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a route by ID.
    pub async fn get(&self, id: &str) -> Result<Route> {
        let id = ensure_id(id)?;
        self.inner
            .get(&self.inner.url(&["networks", "routes", id]))
            .await
    }

    /// Add a route to a network.
    pub async fn create(&self, network_id: &str, route: &RouteRequest) -> Result<Route> {
        let network_id = ensure_id(network_id)?;
        self.inner
            .post(&self.inner.url(&["networks", network_id, "routes"]), route)
            .await
    }

    /// Update a route.
    pub async fn update(&self, id: &str, route: &RouteRequest) -> Result<Route> {
        let id = ensure_id(id)?;
        self.inner
            .put(&self.inner.url(&["networks", "routes", id]), route)
            .await
    }

    /// Delete a route.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner
            .delete(&self.inner.url(&["networks", "routes", id]))
            .await
    }
}
