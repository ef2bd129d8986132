//! Asynchronous address client implementation.

use super::models::{
    Address, AddressSummary, CreateAddress, ReserveRandom, ReserveRandomSummary, UpdateAddress,
};
use crate::Result;
use anxcloud_core::ids::AddressId;
use anxcloud_core::query::QueryParams;
use anxcloud_core::{ApiClient, ListEnvelope, Operation, Page};

/// Address collection path.
pub const PATH_ADDRESS: &str = "/api/ipam/v1/address.json";

/// Random address reservation path.
pub const PATH_RESERVE_RANDOM: &str = "/api/ipam/v1/address/reserve/ip/count.json";

/// Client for `/api/ipam/v1/address.json`.
#[derive(Clone)]
pub struct AddressClient {
    api: ApiClient,
}

impl AddressClient {
    /// Create the client on top of a shared API client.
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// List one page of addresses.
    pub async fn list(&self, page: u32, limit: u32) -> Result<Vec<AddressSummary>> {
        self.list_page(page, limit).await.map(Page::into_items)
    }

    /// List one page of addresses including pagination metadata.
    pub async fn list_page(&self, page: u32, limit: u32) -> Result<Page<AddressSummary>> {
        let operation =
            Operation::get("address list", PATH_ADDRESS).query(QueryParams::page(page, limit));
        self.api
            .send::<ListEnvelope<AddressSummary>>(operation)
            .await
            .map(ListEnvelope::into_page)
    }

    /// Fetch an address by identifier.
    pub async fn get(&self, id: &AddressId) -> Result<Address> {
        let operation = Operation::get("address get", PATH_ADDRESS).segment(id.as_str());
        self.api.send(operation).await
    }

    /// Create an address.
    pub async fn create(&self, request: &CreateAddress) -> Result<AddressSummary> {
        let operation = Operation::post("address create", PATH_ADDRESS).json(request)?;
        self.api.send(operation).await
    }

    /// Update an address. Empty fields of `request` are left unchanged.
    pub async fn update(&self, id: &AddressId, request: &UpdateAddress) -> Result<AddressSummary> {
        let operation = Operation::put("address update", PATH_ADDRESS)
            .segment(id.as_str())
            .json(request)?;
        self.api.send(operation).await
    }

    /// Delete an address.
    pub async fn delete(&self, id: &AddressId) -> Result<()> {
        let operation = Operation::delete("address delete", PATH_ADDRESS).segment(id.as_str());
        self.api.send_empty(operation).await
    }

    /// Reserve `count` random free addresses in a location and VLAN.
    pub async fn reserve_random(&self, request: &ReserveRandom) -> Result<ReserveRandomSummary> {
        let operation =
            Operation::post("address reserve random", PATH_RESERVE_RANDOM).json(request)?;
        self.api.send(operation).await
    }
}
