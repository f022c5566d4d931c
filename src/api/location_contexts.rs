//! Location contexts service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{LocationContext, LocationContextRequest};
use crate::Result;

/// Service for location context policies.
pub struct LocationContextsService {
    inner: Arc<ClientInner>,
}

impl LocationContextsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of location contexts.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<LocationContext>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["location-policies"]), &query)
            .await
    }

    /// List every location context.
    pub async fn list(&self) -> Result<Vec<LocationContext>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a location context by ID.
    pub async fn get(&self, id: &str) -> Result<LocationContext> {
        let id = ensure_id(id)?;
        self.inner
            .get(&self.inner.url(&["location-policies", id]))
            .await
    }

    /// Create a location context.
    pub async fn create(&self, context: &LocationContextRequest) -> Result<LocationContext> {
        self.inner
            .post(&self.inner.url(&["location-policies"]), context)
            .await
    }

    /// Update a location context.
    pub async fn update(
        &self,
        id: &str,
        context: &LocationContextRequest,
    ) -> Result<LocationContext> {
        let id = ensure_id(id)?;
        self.inner
            .put(&self.inner.url(&["location-policies", id]), context)
            .await
    }

    /// Delete a location context.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner
            .delete(&self.inner.url(&["location-policies", id]))
            .await
    }
}
