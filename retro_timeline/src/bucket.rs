//! Calendar bucketing of retrospection records.
//!
//! Month keys are (year, month); day keys add the day of month. All keys
//! are computed in one caller-chosen reference zone so a device-local zone
//! change never moves a record across a boundary mid-session. Records whose
//! `createdAt` matches no recognized format go to the `failed` side channel
//! and never reach a bucket.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;
use journal_models::records::RawRecord;

use crate::parse::parse_created_at;

/// (year, month) calendar key in the reference zone.
pub type MonthKey = (i32, u32);

/// (year, month, day) calendar key in the reference zone.
pub type DayKey = (i32, u32, u32);

/// A record paired with its parsed instant so later stages never re-parse.
#[derive(Debug, Clone)]
pub struct DatedRecord {
    /// The original record, untouched.
    pub record: RawRecord,
    /// Parsed `createdAt` instant (UTC).
    pub instant: DateTime<Utc>,
}

/// Month buckets plus the unparseable leftovers.
#[derive(Debug, Clone, Default)]
pub struct BucketOutcome {
    /// Records grouped by the (year, month) their instant falls in.
    ///
    /// Values keep input order; an entry exists only if it has records.
    pub by_month: BTreeMap<MonthKey, Vec<DatedRecord>>,
    /// Records whose timestamp matched no recognized format, in input order.
    pub failed: Vec<RawRecord>,
}

/// Group records by calendar month of `zone`, quarantining parse failures.
pub fn bucket_records(records: &[RawRecord], zone: Tz) -> BucketOutcome {
    let mut out = BucketOutcome::default();
    for record in records {
        match parse_created_at(&record.created_at) {
            Ok(instant) => {
                let local = instant.with_timezone(&zone);
                out.by_month
                    .entry((local.year(), local.month()))
                    .or_default()
                    .push(DatedRecord {
                        record: record.clone(),
                        instant,
                    });
            }
            Err(_) => out.failed.push(record.clone()),
        }
    }
    out
}

/// Second pass: split one month's records by calendar day of `zone`.
pub fn by_day(month: &[DatedRecord], zone: Tz) -> BTreeMap<DayKey, Vec<DatedRecord>> {
    let mut days: BTreeMap<DayKey, Vec<DatedRecord>> = BTreeMap::new();
    for dated in month {
        let local = dated.instant.with_timezone(&zone);
        days.entry((local.year(), local.month(), local.day()))
            .or_default()
            .push(dated.clone());
    }
    days
}
