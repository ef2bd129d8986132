//! IP address management under `/api/ipam/v1/address`.

pub mod client;
pub mod models;

pub use client::AddressClient;
pub use models::{
    Address, AddressSummary, CreateAddress, ReserveRandom, ReserveRandomSummary, ReservedIp,
    UpdateAddress,
};
