//! IPAM client and data models for the Anexia cloud API.
//!
//! Provides typed records and asynchronous clients for the address and prefix endpoints
//! of the IP address management API.

#![deny(missing_docs)]

pub mod address;
pub mod prefix;

pub use address::{
    Address, AddressClient, AddressSummary, CreateAddress, ReserveRandom, ReserveRandomSummary,
    ReservedIp, UpdateAddress,
};
pub use prefix::{
    CreatePrefix, IpVersion, Prefix, PrefixClient, PrefixSummary, PrefixType, PrefixVlan,
    UpdatePrefix,
};

/// Convenient result alias that reuses the shared error type.
pub type Result<T> = anxcloud_core::Result<T>;
