//! DST gap and ambiguity detection.
//!
//! A civil date + time-of-day maps to zero, one, or two UTC instants in a
//! given zone. Rather than probing UTC offsets around the transition hour
//! (the original applications assumed a North-America-style one-hour
//! fall-back at 02:00), we ask the zone database directly via
//! [`TimeZone::from_local_datetime`], which handles any transition size or
//! hour the IANA rules encode.

use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::Tz;

/// How a civil reading resolves in a zone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CivilLookup {
    /// Exactly one instant has this wall-clock reading.
    Unique(chrono::DateTime<Tz>),
    /// The reading occurs twice (fall-back overlap); both instants, in order.
    Ambiguous {
        earliest: chrono::DateTime<Tz>,
        latest: chrono::DateTime<Tz>,
    },
    /// The reading never occurs (spring-forward gap).
    Gap,
}

/// Resolve a civil date + time against a zone's transition rules.
pub fn classify_civil(date: NaiveDate, time: NaiveTime, zone: Tz) -> CivilLookup {
    match zone.from_local_datetime(&date.and_time(time)) {
        LocalResult::Single(dt) => CivilLookup::Unique(dt),
        LocalResult::Ambiguous(earliest, latest) => CivilLookup::Ambiguous { earliest, latest },
        LocalResult::None => CivilLookup::Gap,
    }
}

/// Whether a civil reading occurs twice in `zone` due to a fall-back
/// transition.
///
/// Returns `false` on non-transition days and in zones without DST.
///
/// # Examples
///
/// ```
/// use chrono::{NaiveDate, NaiveTime};
/// use shift_clock::is_ambiguous;
///
/// let fall_back = NaiveDate::from_ymd_opt(2024, 11, 3).unwrap();
/// let half_past_one = NaiveTime::from_hms_opt(1, 30, 0).unwrap();
/// assert!(is_ambiguous(fall_back, half_past_one, chrono_tz::America::Denver));
/// assert!(!is_ambiguous(fall_back, half_past_one, chrono_tz::UTC));
/// ```
pub fn is_ambiguous(date: NaiveDate, time: NaiveTime, zone: Tz) -> bool {
    matches!(classify_civil(date, time, zone), CivilLookup::Ambiguous { .. })
}

// ── Tests ───────────────────────────────────────────────────────────────────
