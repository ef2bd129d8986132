//! Prefix management under `/api/ipam/v1/prefix`.

pub mod client;
pub mod models;

pub use client::PrefixClient;
pub use models::{
    CreatePrefix, IpVersion, Prefix, PrefixSummary, PrefixType, PrefixVlan, UpdatePrefix,
};
