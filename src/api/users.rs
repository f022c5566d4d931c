//! Users service.

use std::sync::Arc;

use crate::client::paginated::{
    collect_pages, find_in_pages, Page, PaginatedStream, DEFAULT_PAGE_SIZE,
};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{User, UserRequest};
use crate::{Error, Result};

/// Service for user operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let alice = client.users().get_by_username("alice").await?;
/// println!("{} has {} devices", alice.username, alice.devices.len());
/// # Ok(())
/// # }
/// ```
pub struct UsersService {
    inner: Arc<ClientInner>,
}

impl UsersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of users.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<User>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["users"]), &query)
            .await
    }

    /// List every user.
    pub async fn list(&self) -> Result<Vec<User>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Stream every user, one page at a time.
    pub fn stream(&self) -> PaginatedStream<User> {
        let url = self.inner.url(&["users"]);
        PaginatedStream::for_url(self.inner.clone(), url, DEFAULT_PAGE_SIZE)
    }

    /// Get a user by ID.
    pub async fn get(&self, id: &str) -> Result<User> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["users", id])).await
    }

    /// Find a user by exact username.
    pub async fn get_by_username(&self, username: &str) -> Result<User> {
        find_in_pages(
            move |page| self.list_page(page, DEFAULT_PAGE_SIZE),
            |user| user.username == username,
        )
        .await?
        .ok_or_else(|| Error::not_found("user", username))
    }

    /// Create a user.
    pub async fn create(&self, user: &UserRequest) -> Result<User> {
        self.inner.post(&self.inner.url(&["users"]), user).await
    }

    /// Update a user.
    pub async fn update(&self, id: &str, user: &UserRequest) -> Result<User> {
        let id = ensure_id(id)?;
        self.inner.put(&self.inner.url(&["users", id]), user).await
    }

    /// Delete a user.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["users", id])).await
    }
}
