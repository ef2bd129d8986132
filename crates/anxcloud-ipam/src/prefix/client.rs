//! Asynchronous prefix client implementation.

use super::models::{CreatePrefix, Prefix, PrefixSummary, UpdatePrefix};
use crate::Result;
use anxcloud_core::ids::PrefixId;
use anxcloud_core::query::QueryParams;
use anxcloud_core::{ApiClient, ListEnvelope, Operation, Page};

/// Prefix collection path.
pub const PATH_PREFIX: &str = "/api/ipam/v1/prefix.json";

/// Client for `/api/ipam/v1/prefix.json`.
#[derive(Clone)]
pub struct PrefixClient {
    api: ApiClient,
}

impl PrefixClient {
    /// Create the client on top of a shared API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List one page of prefixes.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<PrefixSummary>> {
        self.list_page(page, limit).await.map(Page::into_items)
    }

    /// List one page of prefixes including pagination metadata.
    pub async fn list_page(&self, page: u32, limit: u32) -> Result<Page<PrefixSummary>> {
        let operation =
            Operation::get("prefix list", PATH_PREFIX).query(QueryParams::page(page, limit));
        self.api
            .send::<ListEnvelope<PrefixSummary>>(operation)
            .await
            .map(ListEnvelope::into_page)
    }

    /// Fetch a prefix by identifier.
    pub async fn get(&self, id: &PrefixId) -> Result<Prefix> {
        self.api
            .send(Operation::get("prefix get", PATH_PREFIX).segment(id.as_str()))
            .await
    }

    /// Create a prefix. It starts out `Pending` and becomes `Active` asynchronously.
    pub async fn create(&self, request: &CreatePrefix) -> Result<PrefixSummary> {
        let operation = Operation::post("prefix create", PATH_PREFIX).json(request)?;
        self.api.send(operation).await
    }

    /// Update a prefix. Empty fields of `request` are left unchanged.
    pub async fn update(&self, id: &PrefixId, request: &UpdatePrefix) -> Result<PrefixSummary> {
        let operation = Operation::put("prefix update", PATH_PREFIX)
            .segment(id.as_str())
            .json(request)?;
        self.api.send(operation).await
    }

    /// Delete a prefix.
    pub async fn delete(&self, id: &PrefixId) -> Result<()> {
        self.api
            .send_empty(Operation::delete("prefix delete", PATH_PREFIX).segment(id.as_str()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prefix::models::{IpVersion, PrefixType};
    use anxcloud_core::poll::{wait_for_status, STATUS_ACTIVE};
    use anxcloud_core::{AnxcloudConfig, Error, PollOptions};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client(server: &MockServer) -> PrefixClient {
        let config = AnxcloudConfig::new(server.uri(), "test-token").unwrap();
        PrefixClient::new(ApiClient::from_config(&config).unwrap())
    }

    fn prefix_json(status: &str) -> serde_json::Value {
        json!({
            "identifier": "p1",
            "name": "10.20.0.0/24",
            "description_customer": "",
            "description_internal": "",
            "role_text": "Default",
            "status": status,
            "locations": [{"identifier": "loc", "name": "Vienna", "code": "ANX04"}],
            "type": 1,
            "netmask": 24,
            "router_redundancy": false,
            "vlans": [{"identifier": "v1", "name": "VLAN1234"}]
        })
    }

    #[tokio::test]
    async fn list_prefixes_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(PATH_PREFIX))
            .and(query_param("page", "1"))
            .and(query_param("limit", "1000"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": {"data": [
                    {"identifier": "p1", "name": "10.20.0.0/24", "description_customer": "", "role_text": "Default"}
                ]}
            })))
            .mount(&server)
            .await;

        let prefixes = client(&server).list(1, 1000).await.unwrap();
        assert_eq!(prefixes.len(), 1);
        assert_eq!(prefixes[0].role, "Default");
    }

    #[tokio::test]
    async fn get_prefix_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_PREFIX}/p1").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(prefix_json("Active")))
            .mount(&server)
            .await;

        let prefix = client(&server).get(&PrefixId::new("p1")).await.unwrap();
        assert_eq!(prefix.prefix_type, PrefixType::Private);
        assert_eq!(prefix.network_mask, 24);
        assert_eq!(prefix.locations[0].code, "ANX04");
        assert_eq!(prefix.vlans[0].identifier.as_str(), "v1");
    }

    #[tokio::test]
    async fn create_then_wait_until_active() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(PATH_PREFIX))
            .and(body_json(json!({
                "location": "loc",
                "version": 4,
                "type": 1,
                "netmask": 24,
                "vlan": "v1",
                "router_redundancy": false
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifier": "p1",
                "name": "10.20.0.0/24",
                "description_customer": "",
                "role_text": "Default"
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_PREFIX}/p1").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(prefix_json("Pending")))
            .up_to_n_times(2)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_PREFIX}/p1").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_json(prefix_json("Active")))
            .mount(&server)
            .await;

        let prefixes = client(&server);
        let summary = prefixes
            .create(&CreatePrefix::new(
                "loc",
                "v1",
                IpVersion::V4,
                PrefixType::Private,
                24,
            ))
            .await
            .unwrap();

        let options = PollOptions::new()
            .with_interval(Duration::from_millis(10))
            .with_timeout(Duration::from_secs(5));
        let prefix = wait_for_status(options, || prefixes.get(&summary.id), STATUS_ACTIVE)
            .await
            .unwrap();
        assert_eq!(prefix.status, STATUS_ACTIVE);
    }

    #[tokio::test]
    async fn update_prefix_description() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path(format!("{PATH_PREFIX}/p1").as_str()))
            .and(body_json(json!({"description_customer": "something else"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "identifier": "p1",
                "name": "10.20.0.0/24",
                "description_customer": "something else",
                "role_text": "Default"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let summary = client(&server)
            .update(
                &PrefixId::new("p1"),
                &UpdatePrefix {
                    description_customer: "something else".into(),
                },
            )
            .await
            .unwrap();
        assert_eq!(summary.description_customer, "something else");
    }

    #[tokio::test]
    async fn delete_then_get_fails() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path(format!("{PATH_PREFIX}/p1").as_str()))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(format!("{PATH_PREFIX}/p1").as_str()))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let prefixes = client(&server);
        let id = PrefixId::new("p1");
        prefixes.delete(&id).await.unwrap();
        let err = prefixes.get(&id).await.unwrap_err();
        assert!(matches!(
            err,
            Error::NotFound {
                operation: "prefix get",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn get_rejects_empty_identifier() {
        let server = MockServer::start().await;
        let err = client(&server).get(&PrefixId::default()).await.unwrap_err();
        assert!(matches!(err, Error::RequestConstruction { .. }));
    }
}
