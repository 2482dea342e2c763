//! Derived output of the aggregation engine.
//!
//! The presentation layer renders these as-is: every level is already
//! sorted newest-first and pruned, so no re-sorting or re-filtering is
//! needed on the consumer side.

use std::fmt;

use journal_models::records::RawRecord;
use serde::Serialize;

/// One calendar day of records, newest instant first.
///
/// Invariant: never empty; all records parse to this (year, month, day)
/// in the reference zone.
#[derive(Debug, Clone, Serialize)]
pub struct DayBucket {
    /// Calendar year in the reference zone.
    pub year: i32,
    /// Calendar month, 1–12.
    pub month: u32,
    /// Day of month, 1–31.
    pub day: u32,
    /// Rendered day header (default "11월 15일"-style).
    pub label: String,
    /// Records of this day, newest `createdAt` first; ties keep input order.
    pub records: Vec<RawRecord>,
}

/// One calendar month of day buckets, newest day first.
///
/// Invariant: never empty; every day bucket shares this (year, month).
#[derive(Debug, Clone, Serialize)]
pub struct MonthBucket {
    /// Calendar year in the reference zone.
    pub year: i32,
    /// Calendar month, 1–12.
    pub month: u32,
    /// Resolved title: "this month" / "last month" label or absolute.
    pub title: String,
    /// Day buckets, newest first.
    pub days: Vec<DayBucket>,
}

/// Final per-company output: month buckets newest first.
///
/// Never constructed for a company with zero bucketable records; such
/// companies are dropped from the output entirely.
#[derive(Debug, Clone, Serialize)]
pub struct GroupedTimeline {
    /// Company identifier / display name, carried from the input group.
    pub company: String,
    /// Month buckets, newest first.
    pub months: Vec<MonthBucket>,
}

impl fmt::Display for GroupedTimeline {
    /// Sectioned plain-text rendering for logs and debugging.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}]", self.company)?;
        let mut first = true;
        for month in &self.months {
            if !first {
                writeln!(f)?;
            }
            first = false;
            writeln!(f, "{}", month.title)?;
            for _ in 0..month.title.chars().count() {
                write!(f, "-")?;
            }
            writeln!(f)?;
            for day in &month.days {
                writeln!(f, "{}", day.label)?;
                for rec in &day.records {
                    writeln!(f, "  #{} {} {} x{}", rec.id, rec.order_side, rec.price, rec.volume)?;
                }
            }
        }
        Ok(())
    }
}
