//! VLAN client and data models for the Anexia cloud API.
//!
//! Provides typed records and an asynchronous client for the VLAN endpoints.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::VlanClient;
pub use models::{CreateVlan, UpdateVlan, Vlan, VlanSummary};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = anxcloud_core::Result<T>;
