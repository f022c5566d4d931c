//! Access groups and location contexts.

use serde::{Deserialize, Serialize};

use super::enums::AccessItemType;

/// A rule granting a set of sources access to a set of destinations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGroup {
    /// Unique access group ID
    pub id: String,
    /// Access group name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Who is granted access
    #[serde(default)]
    pub source: Vec<AccessItem>,
    /// What they are granted access to
    #[serde(default)]
    pub destination: Vec<AccessItem>,
}

/// Body for creating or updating an access group.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessGroupRequest {
    /// Access group name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Who is granted access
    pub source: Vec<AccessItem>,
    /// What they are granted access to
    pub destination: Vec<AccessItem>,
}

/// One side of an access rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessItem {
    /// Kind of item
    #[serde(rename = "type")]
    pub item_type: AccessItemType,
    /// Whether every item of this kind is covered
    #[serde(default)]
    pub all_covered: bool,
    /// Parent item, e.g. the network owning a service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    /// Specific item IDs
    #[serde(default)]
    pub children: Vec<String>,
}

impl AccessItem {
    /// Cover every item of a kind.
    pub fn all(item_type: AccessItemType) -> Self {
        Self {
            item_type,
            all_covered: true,
            parent: None,
            children: Vec::new(),
        }
    }

    /// Cover specific items of a kind.
    pub fn only(item_type: AccessItemType, children: Vec<String>) -> Self {
        Self {
            item_type,
            all_covered: false,
            parent: None,
            children,
        }
    }
}

/// Conditions on where a user connects from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContext {
    /// Unique location context ID
    pub id: String,
    /// Location context name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// User groups the policy applies to
    #[serde(default)]
    pub user_groups_ids: Vec<String>,
    /// Source IP check
    #[serde(default)]
    pub ip_check: Option<IpCheck>,
    /// Source country check
    #[serde(default)]
    pub country_check: Option<CountryCheck>,
    /// Outcome when no check matches
    #[serde(default)]
    pub default_check: Option<DefaultCheck>,
}

/// Body for creating or updating a location context.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationContextRequest {
    /// Location context name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// User groups the policy applies to
    pub user_groups_ids: Vec<String>,
    /// Source IP check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_check: Option<IpCheck>,
    /// Source country check
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_check: Option<CountryCheck>,
    /// Outcome when no check matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_check: Option<DefaultCheck>,
}

/// Allow or deny by source address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpCheck {
    /// Whether matching addresses are allowed
    pub allowed: bool,
    /// Addresses or CIDR ranges
    #[serde(default)]
    pub ips: Vec<IpEntry>,
}

/// An address in an [`IpCheck`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IpEntry {
    /// Address or CIDR range
    pub ip: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
}

/// Allow or deny by source country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryCheck {
    /// Whether matching countries are allowed
    pub allowed: bool,
    /// ISO 3166 country codes
    #[serde(default)]
    pub countries: Vec<String>,
}

/// Fallback outcome for a location context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCheck {
    /// Whether connections matching no check are allowed
    pub allowed: bool,
}
