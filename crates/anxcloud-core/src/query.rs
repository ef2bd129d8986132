//! Query parameter helpers and the paginated list envelope.

use crate::de::null_as_default;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Builder for assembling query parameter pairs.
#[derive(Debug, Default, Clone)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Query parameters selecting one page of a collection.
    #[must_use]
    pub fn page(page: u32, limit: u32) -> Self {
        let mut params = Self::new();
        params.push("page", page);
        params.push("limit", limit);
        params
    }

    /// Append a key/value pair.
    pub fn push<T>(&mut self, key: &'static str, value: T)
    where
        T: Display,
    {
        self.pairs.push((key, value.to_string()));
    }

    /// Return the collected key/value pairs.
    #[must_use]
    pub fn into_pairs(self) -> Vec<(&'static str, String)> {
        self.pairs
    }
}

/// One page of a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// Page size requested.
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: u32,
    /// Page number, starting at 1.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    /// Number of items across all pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_items: u32,
    /// Number of pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    /// Items on this page.
    #[serde(default = "Vec::new", deserialize_with = "null_as_default")]
    pub data: Vec<T>,
}

impl<T> Page<T> {
    /// Consume the page, returning its items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.data
    }

    /// Returns true if pages after this one exist.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Outer wrapper of list responses: `{"data": {"data": [...]}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    /// The wrapped page.
    pub data: Page<T>,
}

impl<T> ListEnvelope<T> {
    /// Unwrap the page.
    #[must_use]
    pub fn into_page(self) -> Page<T> {
        self.data
    }
}
