//! VM info data models.

use anxcloud_core::de::null_as_default;
use anxcloud_core::ids::VmId;
use anxcloud_core::HasStatus;
use serde::{Deserialize, Serialize};

/// Meta information about a provisioned VM.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VmInfo {
    /// Generated VM name.
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Name chosen by the customer.
    #[serde(deserialize_with = "null_as_default")]
    pub custom_name: String,
    /// VM identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub identifier: VmId,
    /// Guest operating system.
    #[serde(deserialize_with = "null_as_default")]
    pub guest_os: String,
    /// Location code.
    #[serde(deserialize_with = "null_as_default")]
    pub location_code: String,
    /// Location country.
    #[serde(deserialize_with = "null_as_default")]
    pub location_country: String,
    /// Location name.
    #[serde(deserialize_with = "null_as_default")]
    pub location_name: String,
    /// Power/provisioning status.
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    /// Installed VMware tools version.
    #[serde(deserialize_with = "null_as_default")]
    pub version_tools: String,
    /// VMware tools status.
    #[serde(deserialize_with = "null_as_default")]
    pub guest_tools_status: String,
    /// Memory in MiB.
    #[serde(deserialize_with = "null_as_default")]
    pub ram: u64,
    /// Number of CPUs.
    #[serde(deserialize_with = "null_as_default")]
    pub cpu: u32,
    /// Cores per CPU.
    #[serde(deserialize_with = "null_as_default")]
    pub cores: u32,
    /// Number of disks.
    #[serde(deserialize_with = "null_as_default")]
    pub disks: u32,
    /// Per-disk details.
    #[serde(deserialize_with = "null_as_default")]
    pub disk_info: Vec<DiskInfo>,
    /// Network interfaces.
    #[serde(deserialize_with = "null_as_default")]
    pub network: Vec<NetworkInterface>,
}

impl VmInfo {
    /// All IPv4 addresses across every interface.
    #[must_use]
    pub fn ipv4_addresses(&self) -> Vec<&str> {
        self.network
            .iter()
            .flat_map(|nic| nic.ips_v4.iter().map(String::as_str))
            .collect()
    }

    /// Total disk size in GiB.
    #[must_use]
    pub fn total_disk_gb(&self) -> u64 {
        self.disk_info.iter().map(|disk| disk.disk_gb).sum()
    }
}

impl HasStatus for VmInfo {
    fn status(&self) -> &str {
        &self.status
    }
}

/// Details of a single VM disk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskInfo {
    /// Disk type, e.g. `ENT6`.
    #[serde(deserialize_with = "null_as_default")]
    pub disk_type: String,
    /// Backing storage type.
    #[serde(deserialize_with = "null_as_default")]
    pub storage_type: String,
    /// Bus type.
    #[serde(deserialize_with = "null_as_default")]
    pub bus_type: String,
    /// Human readable bus type.
    #[serde(deserialize_with = "null_as_default")]
    pub bus_type_label: String,
    /// Size in GiB.
    #[serde(deserialize_with = "null_as_default")]
    pub disk_gb: u64,
    /// Disk number.
    #[serde(deserialize_with = "null_as_default")]
    pub disk_id: u32,
    /// Provisioned IOPS.
    #[serde(deserialize_with = "null_as_default")]
    pub iops: u32,
    /// Latency class.
    #[serde(rename = "latence", deserialize_with = "null_as_default")]
    pub latency: u32,
}

/// A VM network interface.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkInterface {
    /// Interface number.
    #[serde(deserialize_with = "null_as_default")]
    pub nic: u32,
    /// Interface identifier.
    #[serde(deserialize_with = "null_as_default")]
    pub id: u32,
    /// VLAN the interface is attached to.
    #[serde(deserialize_with = "null_as_default")]
    pub vlan: String,
    /// MAC address.
    #[serde(deserialize_with = "null_as_default")]
    pub mac_address: String,
    /// IPv4 addresses.
    #[serde(deserialize_with = "null_as_default")]
    pub ips_v4: Vec<String>,
    /// IPv6 addresses.
    #[serde(deserialize_with = "null_as_default")]
    pub ips_v6: Vec<String>,
}
