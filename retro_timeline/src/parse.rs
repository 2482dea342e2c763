//! Timestamp parsing for the free-form `createdAt` field.
//!
//! Strategies are tried in order, first match wins:
//! 1. RFC-3339 with fractional seconds and an explicit offset or trailing
//!    `Z` (e.g., "2025-09-26T21:19:23.353459+00:00"), converted to UTC.
//! 2. Zone-less with fractional seconds, read as UTC.
//! 3. Zone-less without fractional seconds, read as UTC.
//!
//! The parser is pure. Reporting failures is the caller's concern; the
//! returned [`ParseFailure`] keeps the offending string for that purpose.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::errors::ParseFailure;

/// Zone-less layout with fractional seconds ("2025-09-26T21:19:23.353459").
const ZONELESS_FRACTIONAL: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Zone-less layout without fractional seconds ("2025-09-26T21:19:23").
const ZONELESS_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a raw timestamp string into a UTC instant.
pub fn parse_created_at(raw: &str) -> Result<DateTime<Utc>, ParseFailure> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    for layout in [ZONELESS_FRACTIONAL, ZONELESS_SECONDS] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, layout) {
            return Ok(naive.and_utc());
        }
    }
    Err(ParseFailure(raw.to_string()))
}
