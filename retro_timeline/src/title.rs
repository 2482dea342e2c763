//! Relative month titles.
//!
//! A month bucket is titled "this month" when it matches the injected
//! "now", "last month" when it is exactly one calendar month earlier, and
//! with an absolute year-month label otherwise. `now` is always passed in
//! so the resolver stays a pure function.

use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::config::Labels;

/// Linear month index; makes "one month before" survive the
/// December→January rollover (2024-12 is exactly one before 2025-01).
fn month_index(year: i32, month: u32) -> i64 {
    i64::from(year) * 12 + i64::from(month) - 1
}

/// Resolve the display title for a (year, month) bucket relative to `now`.
///
/// `now` is projected into `zone` first, so the comparison uses the same
/// calendar the buckets were keyed with.
pub fn title_for(year: i32, month: u32, now: DateTime<Utc>, zone: Tz, labels: &Labels) -> String {
    let local_now = now.with_timezone(&zone);
    let bucket = month_index(year, month);
    let current = month_index(local_now.year(), local_now.month());
    if bucket == current {
        labels.this_month.clone()
    } else if bucket == current - 1 {
        labels.last_month.clone()
    } else {
        labels.absolute(year, month)
    }
}
