//! VPN regions.

use serde::{Deserialize, Serialize};

/// A point of presence that connectors and users can connect to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VpnRegion {
    /// Region ID, e.g. `us-east-1`
    pub id: String,
    /// Continent name
    #[serde(default)]
    pub continent: Option<String>,
    /// Country name
    #[serde(default)]
    pub country: Option<String>,
    /// ISO 3166 country code
    #[serde(default)]
    pub country_iso: Option<String>,
    /// Human readable region name
    #[serde(default)]
    pub region_name: Option<String>,
}
