//! Display-string rendering for dates, times, and instants.
//!
//! Date and local-datetime output follow the deployment's configured format
//! patterns. UTC datetime output deliberately ignores them and always
//! renders `YYYY-MM-DD HH:MM:SS`, so stored and logged timestamps keep one
//! stable machine-readable shape no matter how a site configures its
//! display formats.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::config::{ClockConfig, ZoneSelector};
use crate::convert::TemporalValue;
use crate::error::{ClockError, Result};

/// Fixed rendering for UTC datetime output.
const UTC_DATETIME_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// What a formatting call should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormatOutput {
    DateTime,
    Date,
    Time,
}

/// Render a value as a display string.
///
/// Instant input is re-expressed in the zone named by `target_zone` first;
/// date and time input carry no zone and format directly. Output shapes:
///
/// - `Date` — the configured date pattern.
/// - `Time` — `HH:MM`, or `HH:MM:SS` when `seconds` is set; configured
///   patterns do not apply.
/// - `DateTime` in the local zone — the configured datetime pattern.
/// - `DateTime` in UTC — always `YYYY-MM-DD HH:MM:SS`.
///
/// `seconds` affects only `Time` output.
///
/// # Errors
///
/// [`ClockError::InvalidConversion`] for the pairings that cannot be
/// rendered: date input to time or datetime output, and time input to date
/// or datetime output. [`ClockError::Validation`] if a configured pattern
/// is not a valid `chrono` format string.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use shift_clock::{format_date_time, ClockConfig, FormatOutput, ZoneSelector};
///
/// let config = ClockConfig::new(chrono_tz::America::Denver, "%m/%d/%Y", "%m/%d/%Y %H:%M");
/// let instant = Utc.with_ymd_and_hms(2025, 1, 15, 21, 0, 0).unwrap();
/// let shown = format_date_time(
///     &instant.into(),
///     FormatOutput::DateTime,
///     ZoneSelector::Local,
///     false,
///     &config,
/// )
/// .unwrap();
/// assert_eq!(shown, "01/15/2025 14:00");
/// ```
pub fn format_date_time(
    value: &TemporalValue,
    output: FormatOutput,
    target_zone: ZoneSelector,
    seconds: bool,
    config: &ClockConfig,
) -> Result<String> {
    let time_pattern = if seconds { "%H:%M:%S" } else { "%H:%M" };

    match (value, output) {
        (TemporalValue::Date(d), FormatOutput::Date) => render(d.format(&config.date_format), &config.date_format),
        (TemporalValue::Date(d), FormatOutput::Time) => Err(ClockError::InvalidConversion(
            format!("date {d} has no time of day to render"),
        )),
        (TemporalValue::Date(d), FormatOutput::DateTime) => Err(ClockError::InvalidConversion(
            format!("date {d} has no time of day to render as a datetime"),
        )),
        (TemporalValue::Time(t), FormatOutput::Time) => {
            render(t.format(time_pattern), time_pattern)
        }
        (TemporalValue::Time(t), FormatOutput::Date | FormatOutput::DateTime) => {
            Err(ClockError::InvalidConversion(format!(
                "time of day {t} has no calendar date to render"
            )))
        }
        (TemporalValue::Instant(dt), _) => {
            let zoned = dt.with_timezone(&target_zone.resolve(config));
            match output {
                FormatOutput::Date => {
                    render(zoned.format(&config.date_format), &config.date_format)
                }
                FormatOutput::Time => render(zoned.format(time_pattern), time_pattern),
                FormatOutput::DateTime => match target_zone {
                    ZoneSelector::Utc => {
                        render(zoned.format(UTC_DATETIME_PATTERN), UTC_DATETIME_PATTERN)
                    }
                    ZoneSelector::Local => render(
                        zoned.format(&config.date_time_format),
                        &config.date_time_format,
                    ),
                },
            }
        }
    }
}

/// Materialize a delayed format, surfacing bad patterns as errors instead
/// of panicking inside `Display`.
fn render(formatted: impl std::fmt::Display, pattern: &str) -> Result<String> {
    let mut out = String::new();
    write!(out, "{formatted}")
        .map_err(|_| ClockError::Validation(format!("invalid format pattern: '{pattern}'")))?;
    Ok(out)
}

// ── Tests ───────────────────────────────────────────────────────────────────
