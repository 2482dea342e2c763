//! Wire-shaped models for the trading journal.
//!
//! These types mirror the payloads the surrounding application's data layer
//! hands over, already deserialized from transport. They are inputs to the
//! timeline aggregation engine and are never mutated by it.

pub mod records;
