//! Asynchronous VM info client implementation.

use crate::models::VmInfo;
use crate::Result;
use anxcloud_core::ids::VmId;
use anxcloud_core::{ApiClient, Operation};

/// VM info path prefix.
pub const PATH_INFO: &str = "/api/vsphere/v1/info.json";

/// Client for `/api/vsphere/v1/info.json`.
#[derive(Clone)]
pub struct InfoClient {
    api: ApiClient,
}

impl InfoClient {
    /// Create the client on top of a shared API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Fetch information about a VM.
    ///
    /// The record is returned as-is, without a list envelope.
    pub async fn get(&self, id: &VmId) -> Result<VmInfo> {
        let operation = Operation::get("VM info get", PATH_INFO)
            .segment(id.as_str())
            .segment("info");
        self.api.send(operation).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anxcloud_core::{AnxcloudConfig, Error};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> InfoClient {
        let config = AnxcloudConfig::new(server.uri(), "test-token").unwrap();
        InfoClient::new(ApiClient::from_config(&config).unwrap())
    }

    #[tokio::test]
    async fn get_info_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_INFO}/vm1/info").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "12345-web01",
                "custom_name": "web01",
                "identifier": "vm1",
                "guest_os": "Debian GNU/Linux 12 (64-bit)",
                "status": "poweredOn",
                "ram": 4096,
                "cpu": 2,
                "cores": 1,
                "disks": 1,
                "disk_info": [{"disk_type": "ENT6", "disk_gb": 50, "disk_id": 2000, "iops": 6000, "latence": 5}],
                "network": [{"nic": 1, "id": 4000, "vlan": "v1", "mac_address": "00:50:56:aa:bb:cc", "ips_v4": ["10.0.0.4"], "ips_v6": []}]
            })))
            .mount(&server)
            .await;

        let info = client(&server).get(&VmId::new("vm1")).await.unwrap();
        assert_eq!(info.custom_name, "web01");
        assert_eq!(info.ram, 4096);
        assert_eq!(info.disk_info[0].iops, 6000);
        assert_eq!(info.network[0].mac_address, "00:50:56:aa:bb:cc");
        assert_eq!(info.ipv4_addresses(), vec!["10.0.0.4"]);
    }

    #[tokio::test]
    async fn get_info_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_INFO}/vm1/info").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
            .mount(&server)
            .await;

        let err = client(&server).get(&VmId::new("vm1")).await.unwrap_err();
        assert!(matches!(
            err,
            Error::Decode {
                operation: "VM info get",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn get_info_can_be_cancelled() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_INFO}/vm1/info").as_str()))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(30)))
            .mount(&server)
            .await;

        let info = client(&server);
        let id = VmId::new("vm1");
        let started = std::time::Instant::now();
        let outcome = tokio::time::timeout(Duration::from_millis(100), info.get(&id)).await;

        assert!(outcome.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
