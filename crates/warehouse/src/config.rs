//! Environment-driven configuration for the warehouse driver.

use chrono::{Local, NaiveDate};

pub const REPORT_FORMAT_VAR: &str = "STOCKROOM_REPORT_FORMAT";
pub const TODAY_VAR: &str = "STOCKROOM_TODAY";

/// How inventory listings are written.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// One `Display` line per item.
    #[default]
    Text,
    /// Pretty-printed JSON array per listing.
    Json,
}

impl ReportFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WarehouseConfig {
    pub report_format: ReportFormat,
    /// Reference date for seeded expiry dates.
    pub today: NaiveDate,
}

impl WarehouseConfig {
    /// Read configuration from the environment, warning on (and ignoring) bad values.
    pub fn from_env() -> Self {
        Self::from_values(
            std::env::var(REPORT_FORMAT_VAR).ok().as_deref(),
            std::env::var(TODAY_VAR).ok().as_deref(),
            Local::now().date_naive(),
        )
    }

    fn from_values(report_format: Option<&str>, today: Option<&str>, fallback_today: NaiveDate) -> Self {
        let report_format = match report_format {
            None => ReportFormat::default(),
            Some(raw) => ReportFormat::parse(raw).unwrap_or_else(|| {
                tracing::warn!(value = raw, "{REPORT_FORMAT_VAR} not recognised; using text");
                ReportFormat::default()
            }),
        };

        let today = match today {
            None => fallback_today,
            Some(raw) => NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").unwrap_or_else(|e| {
                tracing::warn!(value = raw, error = %e, "{TODAY_VAR} is not a YYYY-MM-DD date; using local date");
                fallback_today
            }),
        };

        Self { report_format, today }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fallback() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn defaults_when_unset() {
        let config = WarehouseConfig::from_values(None, None, fallback());
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(config.today, fallback());
    }

    #[test]
    fn reads_explicit_values() {
        let config = WarehouseConfig::from_values(Some("JSON"), Some("2025-01-31"), fallback());
        assert_eq!(config.report_format, ReportFormat::Json);
        assert_eq!(config.today, NaiveDate::from_ymd_opt(2025, 1, 31).unwrap());
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = WarehouseConfig::from_values(Some("yaml"), Some("31/01/2025"), fallback());
        assert_eq!(config.report_format, ReportFormat::Text);
        assert_eq!(config.today, fallback());
    }
}
