//! Retrospection timeline aggregation: company → month → day → records.
//!
//! Given per-company sets of [`journal_models::records::RawRecord`] with
//! free-form `createdAt` timestamps, this crate produces a strictly ordered
//! three-level hierarchy suitable for timeline rendering: newest-first at
//! every level, human-relative month titles ("this month" / "last month" /
//! absolute year-month), and defensive quarantining of records whose
//! timestamp cannot be parsed.
//!
//! The engine is a pure transform: no I/O, no caching, no ambient clock.
//! "Now" is injected by the caller and all calendar boundaries are computed
//! in one configurable reference zone (default UTC).

#![deny(missing_docs)]

pub mod assemble;
pub mod bucket;
pub mod config;
pub mod errors;
pub mod parse;
pub mod timeline;
pub mod title;
