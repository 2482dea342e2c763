//! Raw retrospection records as delivered by the data layer.
//!
//! Field names on the wire are camelCase (`createdAt`, `orderDate`). The
//! `created_at` string is free-form and inconsistently formatted; parsing it
//! is the aggregation engine's job, not this crate's.

use serde::{Deserialize, Serialize};

/// A single trade retrospection row.
///
/// `order_side`, `price`, `volume`, and `order_date` are opaque pass-through
/// values: the engine buckets on `created_at` and otherwise leaves the record
/// untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawRecord {
    /// Unique identifier within a company.
    pub id: i64,
    /// Buy/sell indicator, passed through unmodified.
    pub order_side: String,
    /// Price in currency minor units.
    pub price: i64,
    /// Traded volume.
    pub volume: i64,
    /// Free-form creation timestamp; drives all bucketing.
    pub created_at: String,
    /// Separate business date shown per row; never inspected by the engine.
    pub order_date: String,
}

/// One company's retrospection records, in the order the data layer sent them.
///
/// May be empty; an empty group yields no timeline entry downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyGroup {
    /// Company identifier / display name.
    pub name: String,
    /// Ordered records for this company.
    pub records: Vec<RawRecord>,
}
