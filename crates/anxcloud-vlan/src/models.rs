//! VLAN data models.

use anxcloud_core::de::null_as_default;
use anxcloud_core::ids::{LocationId, VlanId};
use anxcloud_core::types::Location;
use anxcloud_core::HasStatus;
use serde::{Deserialize, Serialize};

/// Full VLAN record as returned by a get.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Vlan {
    /// VLAN identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: VlanId,
    /// VLAN name, e.g. `VLAN1234`.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description visible to the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
    /// Internal description.
    #[serde(deserialize_with = "null_as_default")]
    pub description_internal: String,
    /// VLAN role.
    #[serde(rename = "role_text", deserialize_with = "null_as_default")]
    pub role: String,
    /// Provisioning status, e.g. `Pending` or `Active`.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Locations the VLAN spans.
    #[serde(deserialize_with = "null_as_default")]
    pub locations: Vec<Location>,
    /// Whether VMs may be provisioned into the VLAN.
    #[serde(deserialize_with = "null_as_default")]
    pub vm_provisioning: bool,
}

impl HasStatus for Vlan {
    fn status(&self) -> &str {
        &self.status
    }
}

/// VLAN fields returned by list, create and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VlanSummary {
    /// VLAN identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: VlanId,
    /// VLAN name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Description visible to the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub description_customer: String,
    /// Internal description.
    #[serde(deserialize_with = "null_as_default")]
    pub description_internal: String,
}

/// Payload to create a VLAN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateVlan {
    /// Location to create the VLAN in.
    #[serde(rename = "location")]
    pub location_id: LocationId,
    /// Allow VMs to be provisioned into the VLAN.
    #[serde(default)]
    pub vm_provisioning: bool,
    /// Description visible to the customer.
    #[serde(default)]
    pub description_customer: String,
}

impl CreateVlan {
    /// Create the payload for a location.
    #[must_use]
    pub fn new(location_id: impl Into<LocationId>) -> Self {
        Self {
            location_id: location_id.into(),
            vm_provisioning: false,
            description_customer: String::new(),
        }
    }

    /// Set the customer description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description_customer = description.into();
        self
    }

    /// Allow VM provisioning.
    #[must_use]
    pub const fn with_vm_provisioning(mut self, enabled: bool) -> Self {
        self.vm_provisioning = enabled;
        self
    }
}

/// Fields to change on a VLAN. Unset fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateVlan {
    /// New customer description.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description_customer: String,
    /// Enable or disable VM provisioning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vm_provisioning: Option<bool>,
}
