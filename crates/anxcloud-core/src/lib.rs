//! # anxcloud-core
//!
//! Core types and utilities shared by the Anexia cloud API clients.
//!
//! This crate provides the error type, the HTTP transport seam, the generic typed
//! operation helper every resource client is built on, and a few shared records.
//!
//! ## Modules
//!
//! - [`error`] - Error types and HTTP status code mapping
//! - [`de`] - Deserialization helpers for lenient record decoding
//! - [`ids`] - Strongly-typed identifier wrappers for API resources
//! - [`types`] - Records shared between resource groups
//! - [`config`] - Client configuration and environment loading
//! - [`transport`] - The transport seam and its reqwest implementation
//! - [`client`] - The generic resource operation runner
//! - [`query`] - Query parameter and pagination helpers
//! - [`poll`] - Waiting for eventually consistent status fields

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod de;
pub mod error;
pub mod ids;
pub mod poll;
pub mod query;
pub mod transport;
pub mod types;

// Re-export commonly used types
pub use client::{ApiClient, Operation};
pub use config::AnxcloudConfig;
pub use error::{Error, Result};
pub use poll::{HasStatus, PollOptions};
pub use query::{ListEnvelope, Page};
pub use transport::{HttpRequest, HttpResponse, HttpTransport, Transport, TransportError};
