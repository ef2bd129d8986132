//! Asynchronous VLAN client implementation.

use crate::models::{CreateVlan, UpdateVlan, Vlan, VlanSummary};
use crate::Result;
use anxcloud_core::ids::VlanId;
use anxcloud_core::query::QueryParams;
use anxcloud_core::{ApiClient, ListEnvelope, Operation, Page};

/// VLAN collection path.
pub const PATH_VLAN: &str = "/api/vlan/v1/vlan.json";

/// Client for `/api/vlan/v1/vlan.json`.
#[derive(Clone)]
pub struct VlanClient {
    api: ApiClient,
}

impl VlanClient {
    /// Create the client on top of a shared API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List one page of VLANs.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<VlanSummary>> {
        self.list_page(page, limit).await.map(Page::into_items)
    }

    /// List one page of VLANs including pagination metadata.
    pub async fn list_page(&self, page: u32, limit: u32) -> Result<Page<VlanSummary>> {
        let operation =
            Operation::get("vlan list", PATH_VLAN).query(QueryParams::page(page, limit));
        self.api
            .send::<ListEnvelope<VlanSummary>>(operation)
            .await
            .map(ListEnvelope::into_page)
    }

    /// Fetch a VLAN by identifier.
    pub async fn get(&self, id: &VlanId) -> Result<Vlan> {
        self.api
            .send(Operation::get("vlan get", PATH_VLAN).segment(id.as_str()))
            .await
    }

    /// Create a VLAN. It starts out `Pending` and becomes `Active` asynchronously.
    pub async fn create(&self, request: &CreateVlan) -> Result<VlanSummary> {
        let operation = Operation::post("vlan create", PATH_VLAN).json(request)?;
        self.api.send(operation).await
    }

    /// Update a VLAN. Unset fields of `request` are left unchanged.
    pub async fn update(&self, id: &VlanId, request: &UpdateVlan) -> Result<VlanSummary> {
        let operation = Operation::put("vlan update", PATH_VLAN)
            .segment(id.as_str())
            .json(request)?;
        self.api.send(operation).await
    }

    /// Delete a VLAN.
    pub async fn delete(&self, id: &VlanId) -> Result<()> {
        self.api
            .send_empty(Operation::delete("vlan delete", PATH_VLAN).segment(id.as_str()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anxcloud_core::{AnxcloudConfig, Error};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> VlanClient {
        let config = AnxcloudConfig::new(server.uri(), "test-token").unwrap();
        VlanClient::new(ApiClient::from_config(&config).unwrap())
    }

    fn summary_json(id: &str) -> serde_json::Value {
        json!({
            "identifier": id,
            "name": "VLAN4711",
            "description_customer": "integration test vlan",
            "description_internal": ""
        })
    }

    #[tokio::test]
    async fn list_vlans_respects_limit() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PATH_VLAN))
            .and(query_param("page", "1"))
            .and(query_param("limit", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"limit": 2, "page": 1, "total_items": 5, "total_pages": 3, "data": [
                    summary_json("v1"),
                    summary_json("v2")
                ]}
            })))
            .mount(&server)
            .await;

        let vlans = client(&server).list(1, 2).await.unwrap();
        assert!(vlans.len() <= 2);
        assert_eq!(vlans[1].identifier.as_str(), "v2");
    }

    #[tokio::test]
    async fn get_vlan_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_VLAN}/v1").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifier": "v1",
                "name": "VLAN4711",
                "description_customer": "integration test vlan",
                "description_internal": "",
                "role_text": "Default",
                "status": "Active",
                "locations": [{"identifier": "loc", "name": "Vienna", "code": "ANX04", "country": "AT"}],
                "vm_provisioning": true
            })))
            .mount(&server)
            .await;

        let vlan = client(&server).get(&VlanId::new("v1")).await.unwrap();
        assert_eq!(vlan.status, "Active");
        assert!(vlan.vm_provisioning);
        assert_eq!(vlan.locations[0].country, "AT");
    }

    #[tokio::test]
    async fn create_vlan_success() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH_VLAN))
            .and(body_json(json!({
                "location": "loc",
                "vm_provisioning": false,
                "description_customer": "integration test vlan"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(summary_json("v9")))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client(&server)
            .create(&CreateVlan::new("loc").with_description("integration test vlan"))
            .await
            .unwrap();
        assert_eq!(summary.identifier.as_str(), "v9");
    }

    #[tokio::test]
    async fn update_vlan_sends_only_set_fields() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{PATH_VLAN}/v1").as_str()))
            .and(body_json(json!({"description_customer": "renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifier": "v1",
                "name": "VLAN4711",
                "description_customer": "renamed",
                "description_internal": ""
            })))
            .expect(1)
            .mount(&server)
            .await;

        let update = UpdateVlan {
            description_customer: "renamed".into(),
            ..UpdateVlan::default()
        };
        let summary = client(&server)
            .update(&VlanId::new("v1"), &update)
            .await
            .unwrap();
        assert_eq!(summary.description_customer, "renamed");
    }

    #[tokio::test]
    async fn delete_vlan_unauthorized() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{PATH_VLAN}/v1").as_str()))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": {"code": 401, "message": "Invalid token"}
            })))
            .mount(&server)
            .await;

        let err = client(&server).delete(&VlanId::new("v1")).await.unwrap_err();
        assert_eq!(
            err,
            Error::Unauthorized {
                operation: "vlan delete",
                message: "Invalid token".into()
            }
        );
    }
}
