//! Assemble an absolute instant from a date and a time-of-day.
//!
//! Shift and incident forms capture the date and the time of an event in
//! separate widgets; this module glues the two halves back together while
//! refusing the wall-clock readings a DST transition makes invalid. A
//! reading inside a spring-forward gap never happened; a reading inside a
//! fall-back overlap happened twice and cannot be stored as a single
//! instant without guessing.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;

use crate::config::{ClockConfig, ZoneSelector};
use crate::dst::{classify_civil, CivilLookup};
use crate::error::{ClockError, Result};

/// The time-of-day half of a [`build_datetime`] call.
///
/// Time-picker widgets often deliver a full instant with an arbitrary
/// placeholder date attached; the [`Instant`](TimeInput::Instant) variant
/// accepts that and keeps only the time-of-day component.
#[derive(Debug, Clone)]
pub enum TimeInput {
    /// A civil time string: `HH:MM`, `HH:MM:SS`, optional fractional seconds.
    Text(String),
    /// An absolute instant whose date component is discarded.
    Instant(DateTime<Utc>),
}

impl From<&str> for TimeInput {
    fn from(s: &str) -> Self {
        TimeInput::Text(s.to_string())
    }
}

impl From<String> for TimeInput {
    fn from(s: String) -> Self {
        TimeInput::Text(s)
    }
}

impl From<DateTime<Utc>> for TimeInput {
    fn from(dt: DateTime<Utc>) -> Self {
        TimeInput::Instant(dt)
    }
}

/// Combine a date and a time-of-day into a single absolute instant.
///
/// The civil reading `date` + `time` is interpreted literally in the zone
/// named by `input_zone`, validated against that zone's DST transitions,
/// and returned expressed in `return_zone`. Seconds default to `00` when
/// the time string omits them; fractional seconds are preserved.
///
/// Pure function of its arguments and the injected configuration.
///
/// # Errors
///
/// - [`ClockError::Validation`] — the time string is unparseable.
/// - [`ClockError::AmbiguousTime`] — the reading falls in a fall-back
///   overlap and maps to two instants.
/// - [`ClockError::NonexistentTime`] — the reading falls in a
///   spring-forward gap and maps to no instant.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shift_clock::{build_datetime, ClockConfig, ZoneSelector};
///
/// let config = ClockConfig::new(chrono_tz::America::Denver, "%m/%d/%Y", "%m/%d/%Y %H:%M");
/// let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let instant = build_datetime("08:30", date, ZoneSelector::Local, ZoneSelector::Utc, &config)
///     .unwrap();
/// // 08:30 MDT (UTC-6) is 14:30 UTC.
/// assert_eq!(instant.to_string(), "2025-06-15 14:30:00 UTC");
/// ```
pub fn build_datetime(
    time: impl Into<TimeInput>,
    date: NaiveDate,
    input_zone: ZoneSelector,
    return_zone: ZoneSelector,
    config: &ClockConfig,
) -> Result<DateTime<Tz>> {
    let input_tz = input_zone.resolve(config);

    let time_of_day = match time.into() {
        TimeInput::Text(s) => parse_time_of_day(&s)?,
        TimeInput::Instant(dt) => dt.with_timezone(&input_tz).time(),
    };

    match classify_civil(date, time_of_day, input_tz) {
        CivilLookup::Unique(dt) => Ok(dt.with_timezone(&return_zone.resolve(config))),
        CivilLookup::Ambiguous { .. } => Err(ClockError::AmbiguousTime(format!(
            "{date} {time_of_day} occurs twice in {input_tz}"
        ))),
        CivilLookup::Gap => Err(ClockError::NonexistentTime(format!(
            "{date} {time_of_day} does not exist in {input_tz}"
        ))),
    }
}

/// Parse a civil time string, defaulting seconds to `00`.
fn parse_time_of_day(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    for format in ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"] {
        if let Ok(t) = NaiveTime::parse_from_str(s, format) {
            return Ok(t);
        }
    }
    Err(ClockError::Validation(format!(
        "unrecognized time of day: '{s}'"
    )))
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    fn config() -> ClockConfig {
        ClockConfig::new(chrono_tz::America::Denver, "%m/%d/%Y", "%m/%d/%Y %H:%M")
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_build_local_to_utc() {
        let instant = build_datetime(
            "14:00:00",
            d(2025, 1, 15),
            ZoneSelector::Local,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap();
        // 14:00 MST (UTC-7) is 21:00 UTC.
        assert_eq!(instant.hour(), 21);
        assert_eq!(instant.date_naive(), d(2025, 1, 15));
    }

    #[test]
    fn test_build_seconds_default_to_zero() {
        let instant = build_datetime(
            "08:30",
            d(2025, 6, 15),
            ZoneSelector::Local,
            ZoneSelector::Local,
            &config(),
        )
        .unwrap();
        assert_eq!(instant.time(), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    }

    #[test]
    fn test_build_fractional_seconds_preserved() {
        let instant = build_datetime(
            "08:30:15.250",
            d(2025, 6, 15),
            ZoneSelector::Utc,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap();
        assert_eq!(instant.time().nanosecond(), 250_000_000);
    }

    #[test]
    fn test_build_from_instant_discards_placeholder_date() {
        // A picker value carrying a placeholder date of 1970-01-01.
        let picker = Utc.with_ymd_and_hms(1970, 1, 1, 18, 30, 0).unwrap();
        let instant = build_datetime(
            picker,
            d(2025, 6, 15),
            ZoneSelector::Utc,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap();
        assert_eq!(instant.date_naive(), d(2025, 6, 15));
        assert_eq!(instant.time(), NaiveTime::from_hms_opt(18, 30, 0).unwrap());
    }

    #[test]
    fn test_build_from_instant_extracts_time_in_input_zone() {
        // 18:30 UTC reads as 12:30 in Denver (MDT, UTC-6) on a June date.
        let picker = Utc.with_ymd_and_hms(1970, 6, 1, 18, 30, 0).unwrap();
        let instant = build_datetime(
            picker,
            d(2025, 6, 15),
            ZoneSelector::Local,
            ZoneSelector::Local,
            &config(),
        )
        .unwrap();
        assert_eq!(instant.time(), NaiveTime::from_hms_opt(12, 30, 0).unwrap());
    }

    #[test]
    fn test_build_spring_forward_gap_rejected() {
        // Mar 9 2025: Denver has no 02:00-02:59.
        let err = build_datetime(
            "02:30:00",
            d(2025, 3, 9),
            ZoneSelector::Local,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, ClockError::NonexistentTime(_)));
        let msg = err.to_string();
        assert!(msg.contains("2025-03-09"), "got: {msg}");
        assert!(msg.contains("02:30:00"), "got: {msg}");
        assert!(msg.contains("Denver"), "got: {msg}");
    }

    #[test]
    fn test_build_fall_back_overlap_rejected() {
        // Nov 2 2025: Denver sees 01:00-01:59 twice.
        let err = build_datetime(
            "01:30:00",
            d(2025, 11, 2),
            ZoneSelector::Local,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap_err();
        assert!(matches!(err, ClockError::AmbiguousTime(_)));
        assert!(err.to_string().contains("01:30:00"));
    }

    #[test]
    fn test_build_gap_time_valid_in_utc_input_zone() {
        // The same reading is fine when interpreted as UTC.
        let instant = build_datetime(
            "02:30:00",
            d(2025, 3, 9),
            ZoneSelector::Utc,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap();
        assert_eq!(instant.hour(), 2);
    }

    #[test]
    fn test_build_return_zone_preserves_instant() {
        let as_utc = build_datetime(
            "14:00",
            d(2025, 1, 15),
            ZoneSelector::Local,
            ZoneSelector::Utc,
            &config(),
        )
        .unwrap();
        let as_local = build_datetime(
            "14:00",
            d(2025, 1, 15),
            ZoneSelector::Local,
            ZoneSelector::Local,
            &config(),
        )
        .unwrap();
        assert_eq!(as_utc.with_timezone(&Utc), as_local.with_timezone(&Utc));
    }

    #[test]
    fn test_build_unparseable_time_rejected() {
        for bad in ["", "2:3:4:5", "noon", "25:00", "14h30"] {
            let err = build_datetime(
                bad,
                d(2025, 1, 15),
                ZoneSelector::Local,
                ZoneSelector::Utc,
                &config(),
            )
            .unwrap_err();
            assert!(matches!(err, ClockError::Validation(_)), "input: {bad:?}");
        }
    }
}
