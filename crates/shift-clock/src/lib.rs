//! # shift-clock
//!
//! Timezone-safe date/time helpers for shift and incident tracking
//! applications.
//!
//! Instants are stored in UTC and displayed in a configured local zone;
//! this crate owns the seam between the two. It builds instants from
//! separately captured date and time-of-day inputs (rejecting wall-clock
//! readings a DST transition makes nonexistent or ambiguous), projects
//! stored instants back into local display form, resolves symbolic
//! relative-date expressions, and computes lookback/expiration thresholds
//! with calendar-safe month arithmetic. Zone rules come from the IANA
//! database via `chrono-tz`; nothing here maintains its own transition
//! tables.
//!
//! Every operation is a pure, synchronous function of its arguments and an
//! immutable [`ClockConfig`], safe to call from any number of threads.
//!
//! ## Modules
//!
//! - [`config`] — immutable settings, the host settings-store contract, and the local-zone clock
//! - [`calendar`] — clamped month/quarter/year arithmetic and period boundaries
//! - [`dst`] — gap/overlap classification of civil readings
//! - [`builder`] — date + time-of-day → validated absolute instant
//! - [`convert`] — UTC ↔ local projection of stored values
//! - [`format`] — display-string rendering per configured patterns
//! - [`relative`] — symbolic relative-date expressions (`today`, `CM+1`, `D-7`)
//! - [`threshold`] — lead-time lookback and expiration windows
//! - [`error`] — error types

pub mod builder;
pub mod calendar;
pub mod config;
pub mod convert;
pub mod dst;
pub mod error;
pub mod format;
pub mod relative;
pub mod threshold;

pub use builder::{build_datetime, TimeInput};
pub use config::{ClockConfig, SettingsSource, TimeZoneClock, ZoneSelector};
pub use convert::{
    convert_to_local_posix, convert_to_local_posix_all, LocalValue, TemporalValue, ValueKind,
};
pub use dst::{classify_civil, is_ambiguous, CivilLookup};
pub use error::{ClockError, Result};
pub use format::{format_date_time, FormatOutput};
pub use relative::{parse_relative_date, resolve_relative_date, PeriodEdge};
pub use threshold::{generate_threshold, generate_threshold_all, ThresholdUnit};
