//! Page-numbered collections and the helpers that walk them.
//!
//! List endpoints return a [`Page`] addressed by a zero-based `page` number.
//! [`collect_pages`] walks every page into one `Vec`, [`find_in_pages`] stops
//! at the first matching item, and [`PaginatedStream`] yields items lazily.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::Stream;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::ClientInner;
use crate::{Error, Result};

/// Default number of items per page.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Largest page size the list endpoints accept.
pub const MAX_PAGE_SIZE: u32 = 1000;

/// One page of a collection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items in this page.
    #[serde(default = "Vec::new")]
    pub content: Vec<T>,
    /// Zero-based page number.
    #[serde(default)]
    pub page: u32,
    /// Requested page size.
    #[serde(default)]
    pub size: u32,
    /// Number of items in this page.
    #[serde(default)]
    pub number_of_elements: u32,
    /// Number of items across all pages.
    #[serde(default)]
    pub total_elements: u64,
    /// Number of pages.
    #[serde(default)]
    pub total_pages: u32,
    /// Whether the server reported success.
    #[serde(default)]
    pub success: bool,
}

impl<T> Page<T> {
    /// Check if there are more pages after this one.
    pub fn has_more(&self) -> bool {
        self.page
            .checked_add(1)
            .is_some_and(|next| next < self.total_pages)
    }
}

/// Query string for a page request.
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct PageQuery {
    pub page: u32,
    pub size: u32,
}

impl PageQuery {
    pub(crate) fn new(page: u32, size: u32) -> Result<Self> {
        if size == 0 || size > MAX_PAGE_SIZE {
            return Err(Error::InvalidInput(format!(
                "page size must be between 1 and {MAX_PAGE_SIZE}, got {size}"
            )));
        }
        Ok(Self { page, size })
    }
}

/// Fetch every page, starting at page 0, and concatenate their items.
///
/// After fetching page `n` the walk stops once `n + 1 >= totalPages`, so a
/// collection of P pages costs exactly P fetches (one when it is empty). The
/// first failed fetch aborts the walk and the items gathered so far are
/// dropped.
pub async fn collect_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut page = 0;
    loop {
        let response = fetch(page).await?;
        items.extend(response.content);
        page += 1;
        if page >= response.total_pages {
            return Ok(items);
        }
    }
}

/// Walk pages until an item matches, without fetching the rest.
pub async fn find_in_pages<T, F, Fut, P>(mut fetch: F, mut predicate: P) -> Result<Option<T>>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
    P: FnMut(&T) -> bool,
{
    let mut page = 0;
    loop {
        let response = fetch(page).await?;
        let total_pages = response.total_pages;
        if let Some(found) = response.content.into_iter().find(|item| predicate(item)) {
            return Ok(Some(found));
        }
        page += 1;
        if page >= total_pages {
            return Ok(None);
        }
    }
}

/// Type alias for a boxed future used internally.
type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

type PageFetcher<T> = Box<dyn Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>;

/// A stream that lazily fetches pages from a paginated endpoint.
///
/// Pages are numbered by the stream itself, starting at 0, and it stops
/// once the next number reaches `totalPages`, the same walk as
/// [`collect_pages`]. The `page` field of a response is not consulted.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
///
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let mut users = client.users().stream();
/// while let Some(user) = users.next().await {
///     println!("{}", user?.username);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    fetch_page: PageFetcher<T>,
    current_items: VecDeque<T>,
    next_page: Option<u32>,
    requested_page: u32,
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned + Send + 'static,
{
    /// Create a new paginated stream from a page fetcher.
    pub fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(u32) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: VecDeque::new(),
            next_page: Some(0),
            requested_page: 0,
            pending_fetch: None,
        }
    }

    /// Stream a collection endpoint with the given page size.
    pub(crate) fn for_url(inner: Arc<ClientInner>, url: String, size: u32) -> Self {
        Self::new(move |page| {
            let inner = inner.clone();
            let url = url.clone();
            Box::pin(async move {
                let query = PageQuery::new(page, size)?;
                inner.get_with_query::<Page<T>, _>(&url, &query).await
            })
        })
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            if let Some(item) = this.current_items.pop_front() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(response)) => {
                        this.pending_fetch = None;
                        this.next_page = this
                            .requested_page
                            .checked_add(1)
                            .filter(|next| *next < response.total_pages);
                        this.current_items = response.content.into();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            match this.next_page.take() {
                Some(page) => {
                    this.requested_page = page;
                    this.pending_fetch = Some((this.fetch_page)(page));
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}
