//! Calendar-safe month/quarter/year arithmetic and period boundaries.
//!
//! Month and year offsets clamp to the last valid day of the target month
//! (Jan 31 + 1 month → Feb 28/29, never Mar 2/3). Both the relative-date
//! grammar and the threshold calculator route through this one primitive so
//! the clamping rule cannot drift between them.
//!
//! All functions return `Option`: `None` only when the result would fall
//! outside chrono's representable date range.

use chrono::{Datelike, Months, NaiveDate};

/// Add a signed number of calendar months, clamping the day-of-month.
pub fn add_months_clamped(date: NaiveDate, months: i32) -> Option<NaiveDate> {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
}

/// Add a signed number of calendar years, clamping Feb 29 to Feb 28.
pub fn add_years_clamped(date: NaiveDate, years: i32) -> Option<NaiveDate> {
    add_months_clamped(date, years.checked_mul(12)?)
}

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1)
}

/// Last day of the month containing `date`.
pub fn month_end(date: NaiveDate) -> Option<NaiveDate> {
    let (y, m) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(y, m, 1)?.pred_opt()
}

/// First day of the quarter containing `date`.
pub fn quarter_start(date: NaiveDate) -> Option<NaiveDate> {
    let q_start_month = ((date.month() - 1) / 3) * 3 + 1;
    NaiveDate::from_ymd_opt(date.year(), q_start_month, 1)
}

/// Last day of the quarter containing `date`.
pub fn quarter_end(date: NaiveDate) -> Option<NaiveDate> {
    let q_end_month = ((date.month() - 1) / 3 + 1) * 3;
    month_end(NaiveDate::from_ymd_opt(date.year(), q_end_month, 1)?)
}

/// January 1 of the year containing `date`.
pub fn year_start(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 1, 1)
}

/// December 31 of the year containing `date`.
pub fn year_end(date: NaiveDate) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(date.year(), 12, 31)
}

// ── Tests ───────────────────────────────────────────────────────────────────
