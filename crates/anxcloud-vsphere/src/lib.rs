//! vSphere client and data models for the Anexia cloud API.
//!
//! Provides typed records and an asynchronous client for querying information about
//! provisioned virtual machines.

#![deny(missing_docs)]

pub mod client;
pub mod models;

pub use client::InfoClient;
pub use models::{DiskInfo, NetworkInterface, VmInfo};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = anxcloud_core::Result<T>;
