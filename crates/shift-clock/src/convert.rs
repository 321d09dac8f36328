//! Projection of stored UTC values into the configured local zone.
//!
//! The datastore holds instants in UTC; viewers want them in the
//! deployment's local zone. Conversion only ever projects — the underlying
//! instant is never altered, and converting back to UTC reproduces it
//! exactly, sub-second precision included.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::config::ClockConfig;
use crate::error::{ClockError, Result};

/// A date/time value as it arrives from a dynamic boundary (query results,
/// form inputs, report parameters), carrying its own kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemporalValue {
    /// An absolute instant, stored and transmitted as UTC.
    Instant(DateTime<Utc>),
    /// A calendar date with no time-of-day or zone.
    Date(NaiveDate),
    /// A time-of-day with no date or zone.
    Time(NaiveTime),
}

impl From<DateTime<Utc>> for TemporalValue {
    fn from(dt: DateTime<Utc>) -> Self {
        TemporalValue::Instant(dt)
    }
}

impl From<NaiveDate> for TemporalValue {
    fn from(d: NaiveDate) -> Self {
        TemporalValue::Date(d)
    }
}

impl From<NaiveTime> for TemporalValue {
    fn from(t: NaiveTime) -> Self {
        TemporalValue::Time(t)
    }
}

/// The representation a conversion should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
    DateTime,
    Date,
}

/// A value projected into the configured local zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalValue {
    /// The instant re-expressed in the local zone (same point in time).
    DateTime(DateTime<Tz>),
    /// The calendar date, either passed through or as observed locally.
    Date(NaiveDate),
}

/// Project a value into the configured local zone.
///
/// - date → date is a pass-through; no zone math applies to a bare date.
/// - datetime → datetime re-expresses the instant in the local zone.
/// - datetime → date takes the calendar date as observed locally, so a
///   late-UTC instant may yield the prior local day.
///
/// # Errors
///
/// [`ClockError::InvalidConversion`] for date → datetime (a bare date has
/// no time-of-day to anchor) and for time-of-day input (not a convertible
/// kind).
pub fn convert_to_local_posix(
    value: &TemporalValue,
    output: ValueKind,
    config: &ClockConfig,
) -> Result<LocalValue> {
    match (value, output) {
        (TemporalValue::Date(d), ValueKind::Date) => Ok(LocalValue::Date(*d)),
        (TemporalValue::Date(d), ValueKind::DateTime) => Err(ClockError::InvalidConversion(
            format!("date {d} has no time of day to anchor a datetime"),
        )),
        (TemporalValue::Instant(dt), ValueKind::DateTime) => {
            Ok(LocalValue::DateTime(dt.with_timezone(&config.timezone)))
        }
        (TemporalValue::Instant(dt), ValueKind::Date) => {
            Ok(LocalValue::Date(dt.with_timezone(&config.timezone).date_naive()))
        }
        (TemporalValue::Time(t), _) => Err(ClockError::InvalidConversion(format!(
            "time of day {t} is not a convertible value"
        ))),
    }
}

/// Project a batch of values element-wise, preserving order.
///
/// The first failing element aborts the whole batch.
pub fn convert_to_local_posix_all(
    values: &[TemporalValue],
    output: ValueKind,
    config: &ClockConfig,
) -> Result<Vec<LocalValue>> {
    values
        .iter()
        .map(|v| convert_to_local_posix(v, output, config))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────
