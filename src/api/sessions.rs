//! Sessions service.

use std::sync::Arc;

use crate::client::ClientInner;
use crate::models::{Session, SessionsPage, SessionsQuery, MAX_SESSIONS_PAGE_SIZE};
use crate::{Error, Result};

/// Service for VPN session history.
///
/// Unlike the other collections, sessions are addressed by cursor and the
/// page size must be chosen by the caller.
///
/// # Example
///
/// ```no_run
/// use chrono::{Duration, Utc};
/// use cloudconnexa::models::SessionsQuery;
///
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let end = Utc::now();
/// let query = SessionsQuery::new(100).between(end - Duration::days(1), end);
/// let sessions = client.sessions().list(query).await?;
/// println!("{} sessions in the last day", sessions.len());
/// # Ok(())
/// # }
/// ```
pub struct SessionsService {
    inner: Arc<ClientInner>,
}

impl SessionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of sessions.
    pub async fn list_page(&self, query: &SessionsQuery) -> Result<SessionsPage> {
        if query.size == 0 || query.size > MAX_SESSIONS_PAGE_SIZE {
            return Err(Error::InvalidInput(format!(
                "sessions page size must be between 1 and {MAX_SESSIONS_PAGE_SIZE}, got {}",
                query.size
            )));
        }
        self.inner
            .get_with_query(&self.inner.url(&["sessions"]), query)
            .await
    }

    /// Follow cursors from `query` until the last page.
    pub async fn list(&self, mut query: SessionsQuery) -> Result<Vec<Session>> {
        let mut sessions = Vec::new();
        loop {
            let page = self.list_page(&query).await?;
            let fetched = page.sessions.len();
            sessions.extend(page.sessions);
            match page.next_cursor {
                Some(cursor) if !cursor.is_empty() && fetched > 0 => query.cursor = Some(cursor),
                _ => return Ok(sessions),
            }
        }
    }
}
