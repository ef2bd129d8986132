//! Records shared between resource groups.

use crate::de::null_as_default;
use crate::ids::LocationId;
use serde::{Deserialize, Serialize};

/// A data center location as embedded in prefix and VLAN records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    /// Location identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: LocationId,
    /// Human readable name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Short location code, e.g. `ANX04`.
    #[serde(deserialize_with = "null_as_default")]
    pub code: String,
    /// Country code.
    #[serde(deserialize_with = "null_as_default")]
    pub country: String,
    /// City code.
    #[serde(deserialize_with = "null_as_default")]
    pub city_code: String,
    /// Latitude as sent by the API.
    #[serde(deserialize_with = "null_as_default")]
    pub lat: String,
    /// Longitude as sent by the API.
    #[serde(deserialize_with = "null_as_default")]
    pub lon: String,
}
