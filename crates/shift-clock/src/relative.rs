//! Symbolic relative-date expressions.
//!
//! Report screens describe date ranges symbolically — "current month",
//! "7 days back" — so saved reports stay meaningful as time passes. An
//! expression takes one of three forms, case-insensitive:
//!
//! - keyword: `today`
//! - snap code: `C{M|Q|Y}[±N]` — shift the reference by N months /
//!   quarters / years, then snap to the start or end of the containing
//!   period (`CM` = this month, `CQ-1` = last quarter)
//! - offset code: `{D|W|M|Y}±N` — add N days / weeks / months / years to
//!   the reference directly, no snapping (`D-7` = a week ago)
//!
//! Month and year steps clamp through [`crate::calendar`], so `M+1` from
//! Jan 31 lands on the last day of February.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{
    add_months_clamped, add_years_clamped, month_end, month_start, quarter_end, quarter_start,
    year_end, year_start,
};
use crate::config::TimeZoneClock;
use crate::error::{ClockError, Result};

/// Which edge of the snapped period a snap code resolves to.
///
/// Ignored by the `today` keyword and by offset codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PeriodEdge {
    /// First day of the period (range starts).
    #[default]
    Start,
    /// Last day of the period (range ends).
    End,
}

/// The period a snap code anchors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SnapUnit {
    Month,
    Quarter,
    Year,
}

/// Resolve a relative-date expression against an explicit reference date.
///
/// # Errors
///
/// [`ClockError::InvalidFormat`] naming the rejected string for anything
/// outside the grammar; [`ClockError::Validation`] if the arithmetic leaves
/// the representable date range.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use shift_clock::{parse_relative_date, PeriodEdge};
///
/// let ref_date = NaiveDate::from_ymd_opt(2025, 7, 15).unwrap();
/// let month_start = parse_relative_date("CM", PeriodEdge::Start, ref_date).unwrap();
/// assert_eq!(month_start, NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
/// let week_ago = parse_relative_date("D-7", PeriodEdge::Start, ref_date).unwrap();
/// assert_eq!(week_ago, NaiveDate::from_ymd_opt(2025, 7, 8).unwrap());
/// ```
pub fn parse_relative_date(
    expr: &str,
    edge: PeriodEdge,
    ref_date: NaiveDate,
) -> Result<NaiveDate> {
    let trimmed = expr.trim();
    if trimmed.is_empty() || !trimmed.is_ascii() {
        return Err(reject(expr));
    }
    let lower = trimmed.to_ascii_lowercase();

    if lower == "today" {
        return Ok(ref_date);
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some('c') => {
            let unit = match chars.next() {
                Some('m') => SnapUnit::Month,
                Some('q') => SnapUnit::Quarter,
                Some('y') => SnapUnit::Year,
                _ => return Err(reject(expr)),
            };
            let offset = parse_snap_offset(&lower[2..]).ok_or_else(|| reject(expr))?;
            snap(ref_date, unit, offset, edge)
        }
        Some(unit @ ('d' | 'w' | 'm' | 'y')) => {
            let count = parse_signed_count(&lower[1..]).ok_or_else(|| reject(expr))?;
            let shifted = match unit {
                'd' => ref_date.checked_add_signed(chrono::Duration::days(count as i64)),
                'w' => ref_date.checked_add_signed(chrono::Duration::days(7 * count as i64)),
                'm' => add_months_clamped(ref_date, count),
                'y' => add_years_clamped(ref_date, count),
                _ => unreachable!(),
            };
            shifted.ok_or_else(|| out_of_range(expr, ref_date))
        }
        _ => Err(reject(expr)),
    }
}

/// Resolve a relative-date expression anchored to the clock's "today".
pub fn resolve_relative_date(
    expr: &str,
    edge: PeriodEdge,
    clock: &TimeZoneClock,
) -> Result<NaiveDate> {
    parse_relative_date(expr, edge, clock.today())
}

/// Shift the reference by whole periods, then take the period's edge.
fn snap(ref_date: NaiveDate, unit: SnapUnit, offset: i32, edge: PeriodEdge) -> Result<NaiveDate> {
    let base = match unit {
        SnapUnit::Month => add_months_clamped(ref_date, offset),
        SnapUnit::Quarter => offset
            .checked_mul(3)
            .and_then(|months| add_months_clamped(ref_date, months)),
        SnapUnit::Year => add_years_clamped(ref_date, offset),
    }
    .ok_or_else(|| out_of_range("snap offset", ref_date))?;

    match (unit, edge) {
        (SnapUnit::Month, PeriodEdge::Start) => month_start(base),
        (SnapUnit::Month, PeriodEdge::End) => month_end(base),
        (SnapUnit::Quarter, PeriodEdge::Start) => quarter_start(base),
        (SnapUnit::Quarter, PeriodEdge::End) => quarter_end(base),
        (SnapUnit::Year, PeriodEdge::Start) => year_start(base),
        (SnapUnit::Year, PeriodEdge::End) => year_end(base),
    }
    .ok_or_else(|| out_of_range("snap edge", base))
}

/// Optional signed offset after a snap unit: empty ⇒ 0, a bare sign ⇒ 0.
fn parse_snap_offset(s: &str) -> Option<i32> {
    if s.is_empty() {
        return Some(0);
    }
    let (sign, digits) = split_sign(s)?;
    if digits.is_empty() {
        return Some(0);
    }
    digits.parse::<i32>().ok().map(|n| sign * n)
}

/// Mandatory signed count after an offset unit: sign and digits required.
fn parse_signed_count(s: &str) -> Option<i32> {
    let (sign, digits) = split_sign(s)?;
    if digits.is_empty() {
        return None;
    }
    digits.parse::<i32>().ok().map(|n| sign * n)
}

fn split_sign(s: &str) -> Option<(i32, &str)> {
    match s.as_bytes().first() {
        Some(b'+') => Some((1, &s[1..])),
        Some(b'-') => Some((-1, &s[1..])),
        _ => None,
    }
}

fn reject(expr: &str) -> ClockError {
    ClockError::InvalidFormat(format!("'{}'", expr.trim()))
}

fn out_of_range(what: &str, from: NaiveDate) -> ClockError {
    ClockError::Validation(format!("{what} from {from} leaves the supported date range"))
}

// ── Tests ───────────────────────────────────────────────────────────────────
