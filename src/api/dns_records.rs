//! DNS records service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, find_in_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{DnsRecord, DnsRecordRequest};
use crate::{Error, Result};

/// Service for private DNS records.
pub struct DnsRecordsService {
    inner: Arc<ClientInner>,
}

impl DnsRecordsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch one page of DNS records.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<DnsRecord>> {
        let query = PageQuery::new(page, size)?;
        self.inner
            .get_with_query(&self.inner.url(&["dns-records"]), &query)
            .await
    }

    /// List every DNS record.
    pub async fn list(&self) -> Result<Vec<DnsRecord>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a DNS record by ID.
    pub async fn get(&self, id: &str) -> Result<DnsRecord> {
        let id = ensure_id(id)?;
        self.inner.get(&self.inner.url(&["dns-records", id])).await
    }

    /// Find the record for a domain. Domain names compare case-insensitively.
    pub async fn get_by_domain(&self, domain: &str) -> Result<DnsRecord> {
        find_in_pages(
            move |page| self.list_page(page, DEFAULT_PAGE_SIZE),
            |record| record.domain.eq_ignore_ascii_case(domain),
        )
        .await?
        .ok_or_else(|| Error::not_found("DNS record", domain))
    }

    /// Create a DNS record.
    pub async fn create(&self, record: &DnsRecordRequest) -> Result<DnsRecord> {
        self.inner.post(&self.inner.url(&["dns-records"]), record).await
    }

    /// Update a DNS record.
    pub async fn update(&self, id: &str, record: &DnsRecordRequest) -> Result<DnsRecord> {
        let id = ensure_id(id)?;
        self.inner
            .put(&self.inner.url(&["dns-records", id]), record)
            .await
    }

    /// Delete a DNS record.
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        self.inner.delete(&self.inner.url(&["dns-records", id])).await
    }
}
