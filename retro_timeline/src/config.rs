//! Engine configuration: reference zone and display labels.
//!
//! The engine needs exactly two pieces of ambient context beyond its inputs:
//! the reference zone used for every calendar boundary, and the label
//! strings used for month titles and day headers. Both live here, are
//! TOML-deserializable, and default to the origin app's behavior (UTC
//! boundaries, Korean labels).
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]

use anyhow::{Context, bail};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use toml::from_str;

/// Display strings for month titles and day headers.
///
/// `absolute_month` and `day` are patterns; the placeholders named below
/// are substituted verbatim, everything else is kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct Labels {
    /// Title for the bucket matching "now"'s (year, month).
    pub this_month: String,
    /// Title for the bucket exactly one calendar month before "now".
    pub last_month: String,
    /// Absolute title pattern; must contain `{year}` and `{month}`.
    pub absolute_month: String,
    /// Day header pattern; must contain `{month}` and `{day}`.
    pub day: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            this_month: "이번 달 회고".into(),
            last_month: "지난 달 회고".into(),
            absolute_month: "{year}년 {month}월".into(),
            day: "{month}월 {day}일".into(),
        }
    }
}

impl Labels {
    /// Render the absolute month title (rule 3 of the title resolver).
    pub fn absolute(&self, year: i32, month: u32) -> String {
        self.absolute_month
            .replace("{year}", &year.to_string())
            .replace("{month}", &month.to_string())
    }

    /// Render a day header.
    pub fn day_label(&self, month: u32, day: u32) -> String {
        self.day
            .replace("{month}", &month.to_string())
            .replace("{day}", &day.to_string())
    }
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct EngineConfig {
    /// IANA zone for every calendar boundary (month key, day key, title
    /// comparison). Default UTC.
    pub zone: Tz,
    /// Title and day-header strings.
    pub labels: Labels,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            zone: Tz::UTC,
            labels: Labels::default(),
        }
    }
}

/// Validate label patterns and fixed titles.
///
/// Errors:
/// - `this_month` / `last_month` empty after trimming
/// - a pattern missing one of its placeholders
pub fn validate_config(cfg: &EngineConfig) -> anyhow::Result<()> {
    if cfg.labels.this_month.trim().is_empty() {
        bail!("labels.this_month cannot be empty");
    }
    if cfg.labels.last_month.trim().is_empty() {
        bail!("labels.last_month cannot be empty");
    }
    for (field, pattern, placeholders) in [
        (
            "labels.absolute_month",
            &cfg.labels.absolute_month,
            ["{year}", "{month}"],
        ),
        ("labels.day", &cfg.labels.day, ["{month}", "{day}"]),
    ] {
        for ph in placeholders {
            if !pattern.contains(ph) {
                bail!("{field} must contain {ph}, got {pattern:?}");
            }
        }
    }
    Ok(())
}

/// Parse and validate an engine config from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<EngineConfig> {
    let cfg: EngineConfig = from_str(toml_str).context("failed to parse engine config TOML")?;
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Read an engine config TOML file from disk, parse, and validate it.
///
/// See [`load_config_str`] for validation details.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<EngineConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_utc_and_korean() {
        let cfg = EngineConfig::default();
        assert_eq!(cfg.zone, Tz::UTC);
        assert_eq!(cfg.labels.this_month, "이번 달 회고");
        assert_eq!(cfg.labels.absolute(2025, 1), "2025년 1월");
        assert_eq!(cfg.labels.day_label(11, 15), "11월 15일");
        validate_config(&cfg).unwrap();
    }

    #[test]
    fn toml_overrides_zone_and_labels() {
        let cfg = load_config_str(
            r#"
            zone = "Asia/Seoul"

            [labels]
            this_month = "This month's retrospections"
            last_month = "Last month's retrospections"
            absolute_month = "{month}/{year}"
            day = "Day {day} of month {month}"
        "#,
        )
        .unwrap();
        assert_eq!(cfg.zone, "Asia/Seoul".parse::<Tz>().unwrap());
        assert_eq!(cfg.labels.absolute(2024, 12), "12/2024");
        assert_eq!(cfg.labels.day_label(2, 1), "Day 1 of month 2");
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = load_config_str("zone = \"America/New_York\"").unwrap();
        assert_eq!(cfg.labels, Labels::default());
    }

    #[test]
    fn unknown_zone_is_rejected() {
        let err = load_config_str("zone = \"Mars/Olympus_Mons\"").unwrap_err();
        assert!(err.to_string().contains("failed to parse engine config"));
    }

    #[test]
    fn pattern_without_placeholder_is_rejected() {
        let err = load_config_str(
            r#"
            [labels]
            absolute_month = "sometime"
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("labels.absolute_month"));
        assert!(err.to_string().contains("{year}"));
    }

    #[test]
    fn empty_title_is_rejected() {
        let err = load_config_str(
            r#"
            [labels]
            this_month = "  "
        "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("this_month"));
    }
}
