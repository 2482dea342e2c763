//! Error taxonomy for the aggregation engine.

use thiserror::Error;

/// A record's `createdAt` string matched none of the recognized formats.
///
/// Not fatal: the bucketing engine quarantines the record in its `failed`
/// side channel instead of propagating this as an error, so one malformed
/// record never prevents the rest of a company's timeline from rendering.
/// Carries the original string for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized timestamp: {0:?}")]
pub struct ParseFailure(
    /// The original input that matched no format.
    pub String,
);
