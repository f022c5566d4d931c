//! VPN regions service.

use std::sync::Arc;

use crate::client::{ensure_id, ClientInner};
use crate::models::VpnRegion;
use crate::{Error, Result};

/// Service for VPN regions. The region list is small and not paginated.
pub struct RegionsService {
    inner: Arc<ClientInner>,
}

impl RegionsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List every region.
    pub async fn list(&self) -> Result<Vec<VpnRegion>> {
        self.inner.get(&self.inner.url(&["regions"])).await
    }

    /// Get a region by ID.
    pub async fn get(&self, id: &str) -> Result<VpnRegion> {
        let id = ensure_id(id)?;
        self.list()
            .await?
            .into_iter()
            .find(|region| region.id == id)
            .ok_or_else(|| Error::not_found("VPN region", id))
    }
}
