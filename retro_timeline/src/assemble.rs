//! Ordering and assembly of the final grouped structure.
//!
//! Everything here is a pure transform over the bucketing output: months
//! and days come out newest-first, records within a day newest-instant
//! first with stable ties, and empty containers are never emitted.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use journal_models::records::{CompanyGroup, RawRecord};

use crate::bucket::{BucketOutcome, bucket_records, by_day};
use crate::config::EngineConfig;
use crate::timeline::{DayBucket, GroupedTimeline, MonthBucket};
use crate::title::title_for;

/// Aggregated timelines plus the per-company parse failures.
#[derive(Debug, Clone, Default)]
pub struct AggregateOutput {
    /// One entry per company with at least one bucketable record, in the
    /// order the companies were passed in.
    pub timelines: Vec<GroupedTimeline>,
    /// Parse failures keyed by company name, input order preserved, so a
    /// caller can report data-quality problems without re-parsing.
    pub failed_by_company: IndexMap<String, Vec<RawRecord>>,
}

/// Assemble one company's month buckets, newest first.
pub fn assemble(
    outcome: &BucketOutcome,
    now: DateTime<Utc>,
    cfg: &EngineConfig,
) -> Vec<MonthBucket> {
    let mut months = Vec::with_capacity(outcome.by_month.len());
    for (&(year, month), dated) in outcome.by_month.iter().rev() {
        let days = by_day(dated, cfg.zone);
        let mut days_out = Vec::with_capacity(days.len());
        for (&(d_year, d_month, d_day), day_records) in days.iter().rev() {
            let mut records = day_records.clone();
            // sort_by is stable: equal instants keep their input order
            records.sort_by(|a, b| b.instant.cmp(&a.instant));
            days_out.push(DayBucket {
                year: d_year,
                month: d_month,
                day: d_day,
                label: cfg.labels.day_label(d_month, d_day),
                records: records.into_iter().map(|d| d.record).collect(),
            });
        }
        months.push(MonthBucket {
            year,
            month,
            title: title_for(year, month, now, cfg.zone, &cfg.labels),
            days: days_out,
        });
    }
    months
}

/// Run the full pipeline over every company, preserving company order.
///
/// Companies with no records, or whose records all fail to parse, produce
/// no [`GroupedTimeline`] entry. Parse failures land in
/// [`AggregateOutput::failed_by_company`] instead of erroring.
pub fn aggregate(
    companies: &[CompanyGroup],
    now: DateTime<Utc>,
    cfg: &EngineConfig,
) -> AggregateOutput {
    let mut out = AggregateOutput::default();
    for company in companies {
        if company.records.is_empty() {
            tracing::debug!(company = %company.name, "skipping company with no records");
            continue;
        }
        let outcome = bucket_records(&company.records, cfg.zone);
        if !outcome.failed.is_empty() {
            tracing::warn!(
                company = %company.name,
                dropped = outcome.failed.len(),
                "dropping records with unparseable timestamps"
            );
            out.failed_by_company
                .entry(company.name.clone())
                .or_default()
                .extend(outcome.failed.iter().cloned());
        }
        if outcome.by_month.is_empty() {
            tracing::debug!(company = %company.name, "no bucketable records, dropping company");
            continue;
        }
        out.timelines.push(GroupedTimeline {
            company: company.name.clone(),
            months: assemble(&outcome, now, cfg),
        });
    }
    out
}

/// Flatten timelines back into a single record list in display order
/// (newest month, newest day, newest record first).
pub fn flatten(timelines: &[GroupedTimeline]) -> Vec<RawRecord> {
    timelines
        .iter()
        .flat_map(|t| t.months.iter())
        .flat_map(|m| m.days.iter())
        .flat_map(|d| d.records.iter())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    fn rec(id: i64, created_at: &str) -> RawRecord {
        RawRecord {
            id,
            order_side: "buy".into(),
            price: 1000,
            volume: 1,
            created_at: created_at.into(),
            order_date: "2025-11-15".into(),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 11, 20, 0, 0, 0).unwrap()
    }

    #[test]
    fn months_days_and_records_come_out_newest_first() {
        let outcome = bucket_records(
            &[
                rec(1, "2025-10-01T00:00:00"),
                rec(2, "2025-11-14T08:00:00"),
                rec(3, "2025-11-15T09:00:00"),
                rec(4, "2025-11-15T10:00:00"),
            ],
            Tz::UTC,
        );
        let months = assemble(&outcome, now(), &EngineConfig::default());

        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].month), (2025, 11));
        assert_eq!((months[1].year, months[1].month), (2025, 10));

        let nov = &months[0];
        assert_eq!(nov.days.len(), 2);
        assert_eq!(nov.days[0].day, 15);
        assert_eq!(nov.days[1].day, 14);

        let ids: Vec<i64> = nov.days[0].records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 3]); // 10:00 before 09:00
    }

    #[test]
    fn equal_instants_keep_input_order() {
        let outcome = bucket_records(
            &[
                rec(1, "2025-11-15T10:00:00"),
                rec(2, "2025-11-15T10:00:00"),
                rec(3, "2025-11-15T10:00:00"),
            ],
            Tz::UTC,
        );
        let months = assemble(&outcome, now(), &EngineConfig::default());
        let ids: Vec<i64> = months[0].days[0].records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn company_order_is_preserved() {
        let companies = vec![
            CompanyGroup {
                name: "b-second-in-alphabet-first-in-input".into(),
                records: vec![rec(1, "2025-11-15T10:00:00")],
            },
            CompanyGroup {
                name: "a".into(),
                records: vec![rec(2, "2025-11-15T10:00:00")],
            },
        ];
        let out = aggregate(&companies, now(), &EngineConfig::default());
        let names: Vec<&str> = out.timelines.iter().map(|t| t.company.as_str()).collect();
        assert_eq!(names, vec!["b-second-in-alphabet-first-in-input", "a"]);
    }

    #[test]
    fn all_failed_company_is_dropped_but_reported() {
        let companies = vec![CompanyGroup {
            name: "broken".into(),
            records: vec![rec(1, "garbage")],
        }];
        let out = aggregate(&companies, now(), &EngineConfig::default());
        assert!(out.timelines.is_empty());
        assert_eq!(out.failed_by_company["broken"].len(), 1);
        assert_eq!(out.failed_by_company["broken"][0].id, 1);
    }

    #[test]
    fn empty_company_is_a_silent_no_op() {
        let companies = vec![CompanyGroup {
            name: "quiet".into(),
            records: vec![],
        }];
        let out = aggregate(&companies, now(), &EngineConfig::default());
        assert!(out.timelines.is_empty());
        assert!(out.failed_by_company.is_empty());
    }

    #[test]
    fn flatten_walks_display_order() {
        let companies = vec![CompanyGroup {
            name: "samsung".into(),
            records: vec![
                rec(1, "2025-10-01T00:00:00"),
                rec(2, "2025-11-15T09:00:00"),
                rec(3, "2025-11-15T10:00:00"),
            ],
        }];
        let out = aggregate(&companies, now(), &EngineConfig::default());
        let ids: Vec<i64> = flatten(&out.timelines).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
