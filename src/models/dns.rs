//! Private DNS records.

use serde::{Deserialize, Serialize};

/// A DNS record served to connected clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecord {
    /// Unique record ID
    pub id: String,
    /// Fully qualified domain name
    pub domain: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// IPv4 addresses the name resolves to
    #[serde(default)]
    pub ipv4_addresses: Vec<String>,
    /// IPv6 addresses the name resolves to
    #[serde(default)]
    pub ipv6_addresses: Vec<String>,
}

/// Body for creating or updating a DNS record.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsRecordRequest {
    /// Fully qualified domain name
    pub domain: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// IPv4 addresses the name resolves to
    pub ipv4_addresses: Vec<String>,
    /// IPv6 addresses the name resolves to
    pub ipv6_addresses: Vec<String>,
}
