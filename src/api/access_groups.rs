//! Access groups service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{AccessGroup, AccessGroupRequest};
use crate::Result;

/// Service for access group operations.
pub struct AccessGroupsService {
    inner: Arc<ClientInner>,
}

impl AccessGroupsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of access groups.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<AccessGroup>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["access-groups"]), &query)
            .await
    }

    /// List every access group.
    pub async fn list(&self) -> Result<Vec<AccessGroup>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get an access group by ID.
    pub async fn get(&self, id: &str) -> Result<AccessGroup> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["access-groups", id])).await
    }

    /// Create an access group.
    pub async fn create(&self, group: &AccessGroupRequest) -> Result<AccessGroup> {
        self.inner.post(&self.inner.url(&["access-groups"]), group).await
    }

    /// Update an access group.
    pub async fn update(&self, id: &str, group: &AccessGroupRequest) -> Result<AccessGroup> {
        let id = ensure_id(id)?;
        self.inner
            .put(&self.inner.url(&["access-groups", id]), group)
            .await
    }

    /// Delete an access group.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["access-groups", id])).await
    }
}
