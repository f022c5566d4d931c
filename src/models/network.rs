//! Networks, hosts, their connectors and routes.

use serde::{Deserialize, Serialize};

use super::enums::{
    ConnectionStatus, InternetAccess, NetworkItemType, RouteType, TunnelingProtocol,
};

/// A private network reachable through one or more connectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    /// Unique network ID
    pub id: String,
    /// Network name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the network acts as an internet gateway
    #[serde(default)]
    pub egress: bool,
    /// Internet access mode
    #[serde(default)]
    pub internet_access: InternetAccess,
    /// Subnets assigned by the platform
    #[serde(default)]
    pub system_subnets: Vec<String>,
    /// Routes advertised by this network
    #[serde(default)]
    pub routes: Vec<Route>,
    /// Connectors attached to this network
    #[serde(default)]
    pub connectors: Vec<Connector>,
    /// Tunnel protocol
    #[serde(default)]
    pub tunneling_protocol: Option<TunnelingProtocol>,
    /// Gateways used for egress
    #[serde(default)]
    pub gateways_ids: Vec<String>,
}

/// Body for creating or updating a network.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRequest {
    /// Network name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the network acts as an internet gateway
    pub egress: bool,
    /// Internet access mode
    pub internet_access: InternetAccess,
    /// Connectors to create along with the network
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connectors: Vec<ConnectorRequest>,
    /// Routes to create along with the network
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteRequest>,
    /// Tunnel protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunneling_protocol: Option<TunnelingProtocol>,
}

/// A single machine reachable through one or more connectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    /// Unique host ID
    pub id: String,
    /// Host name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// DNS domain of the host
    #[serde(default)]
    pub domain: Option<String>,
    /// Internet access mode
    #[serde(default)]
    pub internet_access: InternetAccess,
    /// Subnets assigned by the platform
    #[serde(default)]
    pub system_subnets: Vec<String>,
    /// Connectors attached to this host
    #[serde(default)]
    pub connectors: Vec<Connector>,
}

/// Body for creating or updating a host.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HostRequest {
    /// Host name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// DNS domain of the host
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Internet access mode
    pub internet_access: InternetAccess,
    /// Connectors to create along with the host
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub connectors: Vec<ConnectorRequest>,
}

/// A VPN connector, attached either to a network or to a host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    /// Unique connector ID
    pub id: String,
    /// Connector name
    pub name: String,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// ID of the network or host the connector belongs to
    #[serde(default)]
    pub network_item_id: Option<String>,
    /// Whether the owner is a network or a host
    #[serde(default)]
    pub network_item_type: Option<NetworkItemType>,
    /// Region the connector terminates in
    #[serde(default)]
    pub vpn_region_id: Option<String>,
    /// Assigned IPv4 address
    #[serde(default, rename = "ipV4Address")]
    pub ipv4_address: Option<String>,
    /// Assigned IPv6 address
    #[serde(default, rename = "ipV6Address")]
    pub ipv6_address: Option<String>,
    /// Tunnel state
    #[serde(default)]
    pub connection_status: Option<ConnectionStatus>,
    /// Tunnel protocol
    #[serde(default)]
    pub tunneling_protocol: Option<TunnelingProtocol>,
}

/// Body for creating or updating a connector.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorRequest {
    /// Connector name
    pub name: String,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Region the connector terminates in
    pub vpn_region_id: String,
    /// Tunnel protocol
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tunneling_protocol: Option<TunnelingProtocol>,
}

/// A route advertised by a network.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Unique route ID
    pub id: String,
    /// Route kind
    #[serde(rename = "type")]
    pub route_type: RouteType,
    /// CIDR subnet, for IP routes
    #[serde(default)]
    pub subnet: Option<String>,
    /// Domain name, for domain routes
    #[serde(default)]
    pub domain: Option<String>,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Network the route belongs to
    #[serde(default)]
    pub network_item_id: Option<String>,
}

/// Body for creating or updating a route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRequest {
    /// Route kind
    #[serde(rename = "type")]
    pub route_type: RouteType,
    /// CIDR subnet, for IP routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    /// Domain name, for domain routes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Free-form description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RouteRequest {
    /// An IPv4 subnet route.
    pub fn ipv4(subnet: impl Into<String>) -> Self {
        Self {
            route_type: RouteType::IpV4,
            subnet: Some(subnet.into()),
            domain: None,
            description: None,
        }
    }

    /// An IPv6 subnet route.
    pub fn ipv6(subnet: impl Into<String>) -> Self {
        Self {
            route_type: RouteType::IpV6,
            subnet: Some(subnet.into()),
            domain: None,
            description: None,
        }
    }

    /// A domain route.
    pub fn domain(domain: impl Into<String>) -> Self {
        Self {
            route_type: RouteType::Domain,
            subnet: None,
            domain: Some(domain.into()),
            description: None,
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
