//! Address records and payloads.

use anxcloud_core::de::null_as_default;
use anxcloud_core::ids::{AddressId, LocationId, PrefixId, VlanId};
use anxcloud_core::{HasStatus, Page};
use serde::{Deserialize, Serialize};

/// Role assigned to new addresses unless overridden.
pub const DEFAULT_ROLE: &str = "Default";

/// Full address record as returned by a get.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Address identifier.
    #[serde(rename = "identifier", deserialize_with = "null_as_default")]
    pub id: AddressId,
    /// The address itself, e.g. `10.244.2.17`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description visible to the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
    /// Internal description.
    #[serde(deserialize_with = "null_as_default")]
    pub description_internal: String,
    /// Address role.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
    /// IP version (4 or 6).
    #[serde(deserialize_with = "null_as_default")]
    pub version: u8,
    /// Provisioning status, e.g. `Pending` or `Active`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// VLAN the address belongs to.
    #[serde(rename = "vlan", deserialize_with = "null_as_default")]
    pub vlan_id: VlanId,
    /// Prefix the address belongs to.
    #[serde(rename = "prefix", deserialize_with = "null_as_default")]
    pub prefix_id: PrefixId,
}

impl HasStatus for Address {
    fn status(&self) -> &str {
        &self.status
    }
}

/// Address fields returned by list, create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressSummary {
    /// Address identifier.
    #[serde(rename = "identifier", deserialize_with = "null_as_default")]
    pub id: AddressId,
    /// The address itself.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description visible to the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
    /// Address role.
    #[serde(deserialize_with = "null_as_default")]
    pub role: String,
}

/// Payload to create an address.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAddress {
    /// Prefix to create the address in.
    #[serde(rename = "prefix")]
    pub prefix_id: PrefixId,
    /// The address to create.
    #[serde(rename = "name")]
    pub address: String,
    /// Description visible to the customer.
    pub description_customer: String,
    /// Address role.
    pub role: String,
    /// Organization the address is created for.
    pub organization: String,
}

impl CreateAddress {
    /// Create the payload with the required values and the default role.
    #[must_use]
    pub fn new(prefix_id: impl Into<PrefixId>, address: impl Into<String>) -> Self {
        Self {
            prefix_id: prefix_id.into(),
            address: address.into(),
            description_customer: String::new(),
            role: DEFAULT_ROLE.to_string(),
            organization: String::new(),
        }
    }

    /// Set the customer description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_customer = description.into();
        self
    }

    /// Set the role.
    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Set the organization.
    #[must_use]
    pub fn with_organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }
}

/// Fields to change on an address. Empty fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateAddress {
    /// New name.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// New customer description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_customer: String,
    /// New role.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub role: String,
}

/// Request to reserve a number of random free addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReserveRandom {
    /// Location to reserve in.
    #[serde(rename = "location_identifier")]
    pub location_id: LocationId,
    /// VLAN to reserve in.
    #[serde(rename = "vlan_identifier")]
    pub vlan_id: VlanId,
    /// Number of addresses to reserve.
    pub count: u32,
}

/// A single reserved address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedIp {
    /// Address identifier.
    #[serde(rename = "identifier", deserialize_with = "null_as_default")]
    pub id: AddressId,
    /// The reserved address.
    #[serde(rename = "text", deserialize_with = "null_as_default")]
    pub address: String,
    /// Prefix the address was taken from.
    #[serde(deserialize_with = "null_as_default")]
    pub prefix: PrefixId,
}

/// Reserved addresses, paginated.
pub type ReserveRandomSummary = Page<ReservedIp>;
