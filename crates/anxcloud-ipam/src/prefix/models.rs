//! Prefix records and payloads.

use anxcloud_core::de::null_as_default;
use anxcloud_core::ids::{LocationId, PrefixId, VlanId};
use anxcloud_core::types::Location;
use anxcloud_core::HasStatus;
use serde::{Deserialize, Serialize};

/// Whether a prefix is publicly routed. Encoded as `0` (public) or `1` (private).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum PrefixType {
    /// Publicly routed prefix.
    #[default]
    Public,
    /// Private prefix.
    Private,
}

impl From<PrefixType> for u8 {
    fn from(value: PrefixType) -> Self {
        match value {
            PrefixType::Public => 0,
            PrefixType::Private => 1,
        }
    }
}

impl TryFrom<u8> for PrefixType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Public),
            1 => Ok(Self::Private),
            other => Err(format!("unknown prefix type {other}")),
        }
    }
}

/// IP protocol version of a prefix. Encoded as `4` or `6`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum IpVersion {
    /// IPv4.
    #[default]
    V4,
    /// IPv6.
    V6,
}

impl From<IpVersion> for u8 {
    fn from(value: IpVersion) -> Self {
        match value {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

impl TryFrom<u8> for IpVersion {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::V4),
            6 => Ok(Self::V6),
            other => Err(format!("unknown IP version {other}")),
        }
    }
}

/// VLAN reference embedded in a prefix record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixVlan {
    /// VLAN identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: VlanId,
    /// VLAN name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Customer description of the VLAN.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
}

/// Full prefix record as returned by a get.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Prefix {
    /// Prefix identifier.
    #[serde(rename = "identifier", deserialize_with = "null_as_default")]
    pub id: PrefixId,
    /// Prefix in CIDR notation.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description visible to the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
    /// Internal description.
    #[serde(deserialize_with = "null_as_default")]
    pub description_internal: String,
    /// Prefix role.
    #[serde(rename = "role_text", deserialize_with = "null_as_default")]
    pub role: String,
    /// Provisioning status, e.g. `Pending` or `Active`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Locations the prefix is available in.
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
    /// Public or private.
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub prefix_type: PrefixType,
    /// Network mask length.
    #[serde(rename = "netmask", deserialize_with = "null_as_default")]
    pub network_mask: u8,
    /// Whether router redundancy is enabled.
    #[serde(deserialize_with = "null_as_default")]
    pub router_redundancy: bool,
    /// VLANs the prefix is attached to.
    #[serde(deserialize_with = "null_as_default")]
    pub vlans: Vec<PrefixVlan>,
}

impl HasStatus for Prefix {
    fn status(&self) -> &str {
        &self.status
    }
}

/// Prefix fields returned by list, create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefixSummary {
    /// Prefix identifier.
    #[serde(rename = "identifier", deserialize_with = "null_as_default")]
    pub id: PrefixId,
    /// Prefix in CIDR notation.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description visible to the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
    /// Prefix role.
    #[serde(rename = "role_text", deserialize_with = "null_as_default")]
    pub role: String,
}

/// Payload to create a prefix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePrefix {
    /// Location to create the prefix in.
    #[serde(rename = "location")]
    pub location_id: LocationId,
    /// IP version.
    #[serde(rename = "version")]
    pub ip_version: IpVersion,
    /// Public or private.
    #[serde(rename = "type")]
    pub prefix_type: PrefixType,
    /// Network mask length.
    #[serde(rename = "netmask")]
    pub network_mask: u8,
    /// VLAN to attach the prefix to.
    #[serde(rename = "vlan", default, skip_serializing_if = "Option::is_none")]
    pub vlan_id: Option<VlanId>,
    /// Enable router redundancy.
    #[serde(rename = "router_redundancy", default)]
    pub enable_redundancy: bool,
    /// Create the prefix without allocating addresses.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub create_empty: bool,
    /// Allow VMs to be provisioned into the prefix.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub enable_vm_provisioning: bool,
    /// Description visible to the customer.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_customer: String,
    /// Organization the prefix is created for.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub organization: String,
}

impl CreatePrefix {
    /// Create the payload with the required values.
    #[must_use]
    pub fn new(
        location_id: impl Into<LocationId>,
        vlan_id: impl Into<VlanId>,
        ip_version: IpVersion,
        prefix_type: PrefixType,
        network_mask: u8,
    ) -> Self {
        let vlan_id = vlan_id.into();
        Self {
            location_id: location_id.into(),
            ip_version,
            prefix_type,
            network_mask,
            vlan_id: (!vlan_id.is_empty()).then_some(vlan_id),
            enable_redundancy: false,
            create_empty: false,
            enable_vm_provisioning: false,
            description_customer: String::new(),
            organization: String::new(),
        }
    }

    /// Set the customer description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_customer = description.into();
        self
    }

    /// Enable router redundancy.
    #[must_use]
    pub const fn with_redundancy(mut self, enabled: bool) -> Self {
        self.enable_redundancy = enabled;
        self
    }

    /// Allow VM provisioning into the prefix.
    #[must_use]
    pub const fn with_vm_provisioning(mut self, enabled: bool) -> Self {
        self.enable_vm_provisioning = enabled;
        self
    }
}

/// Fields to change on a prefix. Empty fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdatePrefix {
    /// New customer description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_customer: String,
}
