//! Enumeration types for the CloudConnexa API.
//!
//! Every enum carries an `Unknown` catch-all so that values added to the API
//! later don't break deserialization of the surrounding object.

use serde::{Deserialize, Serialize};

/// How traffic to the internet is routed for a network, host or user group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InternetAccess {
    /// Only traffic for private routes goes through the tunnel
    #[default]
    SplitTunnelOn,
    /// All traffic goes through the tunnel
    SplitTunnelOff,
    /// Internet access is blocked
    RestrictedInternet,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Tunnel protocol used by a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TunnelingProtocol {
    /// OpenVPN
    #[default]
    Openvpn,
    /// IPsec
    Ipsec,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Kind of route attached to a network or host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteType {
    /// IPv4 subnet
    #[serde(rename = "IP_V4")]
    IpV4,
    /// IPv6 subnet
    #[serde(rename = "IP_V6")]
    IpV6,
    /// DNS domain
    #[serde(rename = "DOMAIN")]
    Domain,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Whether a connector or device currently has a tunnel up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectionStatus {
    /// Tunnel is up
    Online,
    /// Tunnel is down
    Offline,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Kind of item a connector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NetworkItemType {
    /// A network
    Network,
    /// A host
    Host,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Role of a user within the organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Organization owner
    Owner,
    /// Administrator
    Admin,
    /// Regular member
    #[default]
    Member,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Lifecycle state of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    /// Invitation sent, not yet accepted
    Invited,
    /// Active account
    Active,
    /// Suspended by an administrator
    Suspended,
    /// Awaiting approval
    Pending,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// When users in a group must re-authenticate to connect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConnectAuth {
    /// No authentication on connect
    NoAuth,
    /// Reuse a prior authentication
    #[default]
    OnPriorAuth,
    /// Authenticate on every connect
    EveryTime,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// State of a VPN session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// Session is connected
    Active,
    /// Session ended normally
    Completed,
    /// Session failed to establish
    Failed,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

/// Kind of item referenced by an access group source or destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccessItemType {
    /// A user group
    UserGroup,
    /// A network
    Network,
    /// A host
    Host,
    /// A network or host service
    Service,
    /// Public internet
    Public,
    /// Unknown value
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&InternetAccess::SplitTunnelOff).unwrap(),
            "\"SPLIT_TUNNEL_OFF\""
        );
        assert_eq!(serde_json::to_string(&RouteType::IpV4).unwrap(), "\"IP_V4\"");
        assert_eq!(serde_json::to_string(&ConnectAuth::EveryTime).unwrap(), "\"EVERY_TIME\"");
        assert_eq!(serde_json::to_string(&AccessItemType::UserGroup).unwrap(), "\"USER_GROUP\"");
    }

    #[test]
    fn test_unknown_values() {
        let status: ConnectionStatus = serde_json::from_str("\"DEGRADED\"").unwrap();
        assert_eq!(status, ConnectionStatus::Unknown);
        let role: UserRole = serde_json::from_str("\"SUPPORT\"").unwrap();
        assert_eq!(role, UserRole::Unknown);
    }
}
