//! Users, user groups and devices.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::{ConnectAuth, ConnectionStatus, InternetAccess, UserRole, UserStatus};

/// An organization member.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID
    pub id: String,
    /// Login name
    pub username: String,
    /// Email address
    #[serde(default)]
    pub email: Option<String>,
    /// First name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Last name
    #[serde(default)]
    pub last_name: Option<String>,
    /// Group the user belongs to
    #[serde(default)]
    pub group_id: Option<String>,
    /// Role in the organization
    #[serde(default)]
    pub role: UserRole,
    /// Account state
    #[serde(default)]
    pub status: Option<UserStatus>,
    /// Identity provider (e.g. `LOCAL`, `SAML`)
    #[serde(default)]
    pub auth_type: Option<String>,
    /// Devices registered to the user
    #[serde(default)]
    pub devices: Vec<Device>,
    /// When the user was created
    #[serde(default)]
    pub created_date_time: Option<DateTime<Utc>>,
}

/// Body for creating or updating a user.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    /// Login name
    pub username: String,
    /// Email address
    pub email: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Group the user belongs to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    /// Role in the organization
    pub role: UserRole,
}

/// A group of users sharing connection policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroup {
    /// Unique group ID
    pub id: String,
    /// Group name
    pub name: String,
    /// Regions members may connect to
    #[serde(default)]
    pub vpn_region_ids: Vec<String>,
    /// Whether every region is allowed, overriding `vpn_region_ids`
    #[serde(default)]
    pub all_regions_included: bool,
    /// Internet access mode
    #[serde(default)]
    pub internet_access: InternetAccess,
    /// Maximum devices per member
    #[serde(default)]
    pub max_device: Option<u32>,
    /// Re-authentication policy
    #[serde(default)]
    pub connect_auth: ConnectAuth,
    /// Gateways used for egress
    #[serde(default)]
    pub gateways_ids: Vec<String>,
}

/// Body for creating or updating a user group.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserGroupRequest {
    /// Group name
    pub name: String,
    /// Regions members may connect to
    pub vpn_region_ids: Vec<String>,
    /// Whether every region is allowed
    pub all_regions_included: bool,
    /// Internet access mode
    pub internet_access: InternetAccess,
    /// Maximum devices per member
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_device: Option<u32>,
    /// Re-authentication policy
    pub connect_auth: ConnectAuth,
    /// Gateways used for egress
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub gateways_ids: Vec<String>,
}

/// A client device registered to a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device ID
    pub id: String,
    /// Device name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Owning user
    #[serde(default)]
    pub user_id: Option<String>,
    /// Client-generated identifier
    #[serde(default, rename = "clientUUID")]
    pub client_uuid: Option<String>,
    /// Tunnel state
    #[serde(default)]
    pub connection_status: Option<ConnectionStatus>,
    /// Device state (e.g. `ACTIVE`, `BLOCKED`)
    #[serde(default)]
    pub status: Option<String>,
}

/// Body for updating a device.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUpdate {
    /// Device name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
