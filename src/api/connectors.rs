//! Connector services for networks and hosts.
//!
//! Network connectors live under `/networks/connectors` and host connectors
//! under `/hosts/connectors`; apart from the path and the name of the owner
//! query parameter the two APIs are identical, so one service type covers
//! both.

use std::sync::Arc;

use reqwest::Method;

use crate::client::paginated::{collect_pages, find_in_pages, Page, DEFAULT_PAGE_SIZE};
use crate::client::{ensure_id, ClientInner, PageQuery};
use crate::models::{Connector, ConnectorRequest};
use crate::{Error, Result};

/// What a connector is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectorOwner {
    /// Connectors under `/networks/connectors`
    Network,
    /// Connectors under `/hosts/connectors`
    Host,
}

impl ConnectorOwner {
    fn collection(self) -> &'static str {
        match self {
            ConnectorOwner::Network => "networks",
            ConnectorOwner::Host => "hosts",
        }
    }

    fn owner_param(self) -> &'static str {
        match self {
            ConnectorOwner::Network => "networkId",
            ConnectorOwner::Host => "hostId",
        }
    }

    fn resource(self) -> &'static str {
        match self {
            ConnectorOwner::Network => "network connector",
            ConnectorOwner::Host => "host connector",
        }
    }
}

/// Service for network or host connector operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: cloudconnexa::CloudConnexaClient) -> cloudconnexa::Result<()> {
/// let connector = client.network_connectors().get_by_name("office-gw").await?;
/// let profile = client.network_connectors().profile(&connector.id).await?;
/// std::fs::write("office-gw.ovpn", profile).ok();
/// # Ok(())
/// # }
/// ```
pub struct ConnectorsService {
    inner: Arc<ClientInner>,
    owner: ConnectorOwner,
}

impl ConnectorsService {
    pub(crate) fn new(inner: Arc<ClientInner>, owner: ConnectorOwner) -> Self {
        Self { inner, owner }
    }

    /// Which kind of connector this service manages.
    pub fn owner(&self) -> ConnectorOwner {
        self.owner
    }

    fn url(&self, rest: &[&str]) -> String {
        let mut segments = vec![self.owner.collection(), "connectors"];
        segments.extend_from_slice(rest);
        self.inner.url(&segments)
    }

    /// Fetch one page of connectors.
    pub async fn list_page(&self, page: u32, size: u32) -> Result<Page<Connector>> {
        let query = PageQuery::new(page, size)?;
        self.inner.get_with_query(&self.url(&[]), &query).await
    }

    /// List every connector.
    pub async fn list(&self) -> Result<Vec<Connector>> {
        collect_pages(move |page| self.list_page(page, DEFAULT_PAGE_SIZE)).await
    }

    /// Fetch one page of the connectors attached to a network or host.
    pub async fn list_page_for(
        &self,
        owner_id: &str,
        page: u32,
        size: u32,
    ) -> Result<Page<Connector>> {
        let owner_id = ensure_id(owner_id)?;
        let query = PageQuery::new(page, size)?;
        let builder = self
            .inner
            .request(Method::GET, &self.url(&[]))
            .query(&query)
            .query(&[(self.owner.owner_param(), owner_id)]);
        self.inner.send_json(builder).await
    }

    /// List every connector attached to a network or host.
    pub async fn list_for(&self, owner_id: &str) -> Result<Vec<Connector>> {
        ensure_id(owner_id)?;
        collect_pages(move |page| self.list_page_for(owner_id, page, DEFAULT_PAGE_SIZE)).await
    }

    /// Get a connector by ID.
    pub async fn get(&self, id: &str) -> Result<Connector> {
        let id = ensure_id(id)?;
        self.inner.get(&self.url(&[id])).await
    }

    /// Find a connector by exact name.
    pub async fn get_by_name(&self, name: &str) -> Result<Connector> {
        find_in_pages(
            move |page| self.list_page(page, DEFAULT_PAGE_SIZE),
            |connector| connector.name == name,
        )
        .await?
        .ok_or_else(|| Error::not_found(self.owner.resource(), name))
    }

    /// Create a connector attached to a network or host.
    pub async fn create(&self, owner_id: &str, connector: &ConnectorRequest) -> Result<Connector> {
        let owner_id = ensure_id(owner_id)?;
        self.inner
            .post_with_query(&self.url(&[]), &[(self.owner.owner_param(), owner_id)], connector)
            .await
    }

    /// Update a connector.
    pub async fn update(&self, id: &str, connector: &ConnectorRequest) -> Result<Connector> {
        let id = ensure_id(id)?;
        self.inner.put(&self.url(&[id]), connector).await
    }

    /// Delete a connector.
    ///
    /// The API wants the owner ID alongside the connector ID.
    pub async fn delete(&self, id: &str, owner_id: &str) -> Result<()> {
        let id = ensure_id(id)?;
        let owner_id = ensure_id(owner_id)?;
        self.inner
            .delete_with_query(&self.url(&[id]), &[(self.owner.owner_param(), owner_id)])
            .await
    }

    /// Generate an OpenVPN client profile for a connector.
    pub async fn profile(&self, id: &str) -> Result<String> {
        let id = ensure_id(id)?;
        self.inner.post_for_text(&self.url(&[id, "profile"])).await
    }
}
