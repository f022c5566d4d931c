//! User groups service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, find_in_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{UserGroup, UserGroupRequest};
use crate::{Error, Result};

/// Service for user group operations.
pub struct UserGroupsService {
    inner: Arc<ClientInner>,
}

impl UserGroupsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of user groups.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<UserGroup>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["user-groups"]), &query)
            .await
    }

    /// List every user group.
    pub async fn list(&self) -> Result<Vec<UserGroup>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a user group by ID.
    pub async fn get(&self, id: &str) -> Result<UserGroup> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["user-groups", id])).await
    }

    /// Find a user group by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<UserGroup> {
        find_in_pages(
            move |page| self.list_page(page, DEFAULT_PAGE_SIZE),
            |group| group.name == name,
        )
        .await?
        .ok_or_else(|| Error::not_found("user group", name))
    }

    /// Create a user group.
    pub async fn create(&self, group: &UserGroupRequest) -> Result<UserGroup> {
        self.inner.post(&self.inner.url(&["user-groups"]), group).await
    }

    /// Update a user group.
    pub async fn update(&self, id: &str, group: &UserGroupRequest) -> Result<UserGroup> {
        let id = ensure_id(id)?;
        self.inner
            .put(&self.inner.url(&["user-groups", id]), group)
            .await
    }

    /// Delete a user group.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["user-groups", id])).await
    }
}
