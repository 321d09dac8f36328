//! Lead-time thresholds for lookback and expiration windows.
//!
//! Certification expiry, audit lookbacks, and re-check reminders all reduce
//! to "this date plus or minus N units". Month and year steps share the
//! clamping arithmetic in [`crate::calendar`], so a threshold computed from
//! Jan 31 lands on the last day of February rather than spilling into
//! March.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{add_months_clamped, add_years_clamped};
use crate::error::{ClockError, Result};

/// The calendar unit a lead time is counted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ThresholdUnit {
    Day,
    Month,
    Year,
}

/// Shift a date by a lead time.
///
/// With `expire` unset (the default in the calling applications) the lead
/// time is subtracted, producing a lookback threshold; with it set the lead
/// time is added, producing an expiration date. Day arithmetic is exact;
/// month and year arithmetic clamp to the last valid day of the target
/// month.
///
/// # Errors
///
/// [`ClockError::Validation`] for a negative `lead_time`, a lead time too
/// large to represent, or a result outside the supported date range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shift_clock::{generate_threshold, ThresholdUnit};
///
/// let issued = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
/// let expires = generate_threshold(issued, 1, ThresholdUnit::Month, true).unwrap();
/// assert_eq!(expires, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn generate_threshold(
    date: NaiveDate,
    lead_time: i64,
    unit: ThresholdUnit,
    expire: bool,
) -> Result<NaiveDate> {
    if lead_time < 0 {
        return Err(ClockError::Validation(format!(
            "lead time must be non-negative, got {lead_time}"
        )));
    }
    let signed = if expire { lead_time } else { -lead_time };

    let shifted = match unit {
        ThresholdUnit::Day => chrono::Duration::try_days(signed)
            .and_then(|days| date.checked_add_signed(days)),
        ThresholdUnit::Month => i32::try_from(signed)
            .ok()
            .and_then(|months| add_months_clamped(date, months)),
        ThresholdUnit::Year => i32::try_from(signed)
            .ok()
            .and_then(|years| add_years_clamped(date, years)),
    };

    shifted.ok_or_else(|| {
        ClockError::Validation(format!(
            "threshold {signed} {unit:?}(s) from {date} leaves the supported date range"
        ))
    })
}

/// Shift a batch of dates element-wise, preserving order.
///
/// The first failing element aborts the whole batch.
pub fn generate_threshold_all(
    dates: &[NaiveDate],
    lead_time: i64,
    unit: ThresholdUnit,
    expire: bool,
) -> Result<Vec<NaiveDate>> {
    dates
        .iter()
        .map(|&date| generate_threshold(date, lead_time, unit, expire))
        .collect()
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_lookback_subtracts() {
        assert_eq!(
            generate_threshold(d(2025, 7, 15), 30, ThresholdUnit::Day, false).unwrap(),
            d(2025, 6, 15)
        );
        assert_eq!(
            generate_threshold(d(2025, 7, 15), 2, ThresholdUnit::Month, false).unwrap(),
            d(2025, 5, 15)
        );
    }

    #[test]
    fn test_expiration_adds() {
        assert_eq!(
            generate_threshold(d(2025, 7, 15), 30, ThresholdUnit::Day, true).unwrap(),
            d(2025, 8, 14)
        );
        assert_eq!(
            generate_threshold(d(2025, 7, 15), 2, ThresholdUnit::Year, true).unwrap(),
            d(2027, 7, 15)
        );
    }

    #[test]
    fn test_month_expiration_clamps_in_leap_year() {
        assert_eq!(
            generate_threshold(d(2024, 1, 31), 1, ThresholdUnit::Month, true).unwrap(),
            d(2024, 2, 29)
        );
    }

    #[test]
    fn test_year_lookback_clamps_leap_day() {
        assert_eq!(
            generate_threshold(d(2024, 2, 29), 1, ThresholdUnit::Year, false).unwrap(),
            d(2023, 2, 28)
        );
    }

    #[test]
    fn test_zero_lead_time_is_identity() {
        for unit in [ThresholdUnit::Day, ThresholdUnit::Month, ThresholdUnit::Year] {
            assert_eq!(
                generate_threshold(d(2025, 7, 15), 0, unit, false).unwrap(),
                d(2025, 7, 15)
            );
        }
    }

    #[test]
    fn test_negative_lead_time_rejected() {
        let err = generate_threshold(d(2025, 7, 15), -1, ThresholdUnit::Day, false).unwrap_err();
        assert!(matches!(err, ClockError::Validation(_)));
        assert!(err.to_string().contains("-1"));
    }

    #[test]
    fn test_out_of_range_result_rejected() {
        let err =
            generate_threshold(d(2025, 1, 1), i64::MAX, ThresholdUnit::Day, true).unwrap_err();
        assert!(matches!(err, ClockError::Validation(_)));
    }

    #[test]
    fn test_batch_preserves_shape_and_order() {
        let dates = [d(2024, 1, 31), d(2024, 3, 31), d(2024, 5, 31)];
        let shifted = generate_threshold_all(&dates, 1, ThresholdUnit::Month, true).unwrap();
        assert_eq!(shifted, vec![d(2024, 2, 29), d(2024, 4, 30), d(2024, 6, 30)]);
    }

    #[test]
    fn test_batch_first_error_aborts() {
        let dates = [d(2024, 1, 31)];
        assert!(generate_threshold_all(&dates, -5, ThresholdUnit::Day, false).is_err());
    }
}
