//! Configuration and the local-zone clock.
//!
//! The surrounding applications historically kept the local timezone, the
//! display format patterns, and "today" in a mutable ambient object. Here
//! that state is an immutable [`ClockConfig`] resolved once (directly or via
//! the host's settings store through [`SettingsSource`]) and passed into
//! each operation explicitly, so every call stays a pure function of its
//! inputs.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{ClockError, Result};

/// Key-value settings lookup provided by the host application.
///
/// The settings store itself (database table, config file, environment) is
/// not this crate's concern; implementations return the raw scalar for a
/// `(domain, key)` pair or an error of their choosing, which is propagated
/// unchanged to the caller.
pub trait SettingsSource {
    /// Fetch the value stored under `domain`/`key`.
    fn get_setting(&self, domain: &str, key: &str) -> Result<String>;
}

/// Immutable date/time configuration shared by all operations.
///
/// Construct directly with [`ClockConfig::new`], or resolve from the host's
/// settings store with [`ClockConfig::from_settings`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// The applications' local timezone (IANA name, e.g. `America/Denver`).
    pub timezone: Tz,
    /// `chrono` format pattern for date-only display (e.g. `"%m/%d/%Y"`).
    pub date_format: String,
    /// `chrono` format pattern for local datetime display.
    pub date_time_format: String,
}

impl ClockConfig {
    pub fn new(
        timezone: Tz,
        date_format: impl Into<String>,
        date_time_format: impl Into<String>,
    ) -> Self {
        Self {
            timezone,
            date_format: date_format.into(),
            date_time_format: date_time_format.into(),
        }
    }

    /// Resolve configuration from the host settings store.
    ///
    /// Reads `global/ltz` for the local timezone, falling back to the legacy
    /// `global/tz` key kept by older deployments, plus `global/date_format`
    /// and `global/date_time_format` for the display patterns.
    ///
    /// # Errors
    ///
    /// Propagates the collaborator's error for a missing setting, or
    /// [`ClockError::InvalidTimezone`] if the stored zone name is not a
    /// valid IANA timezone.
    pub fn from_settings(settings: &impl SettingsSource) -> Result<Self> {
        let zone_name = settings
            .get_setting("global", "ltz")
            .or_else(|_| settings.get_setting("global", "tz"))?;
        let timezone = zone_name
            .parse::<Tz>()
            .map_err(|_| ClockError::InvalidTimezone(format!("'{zone_name}'")))?;

        Ok(Self {
            timezone,
            date_format: settings.get_setting("global", "date_format")?,
            date_time_format: settings.get_setting("global", "date_time_format")?,
        })
    }

    /// A clock reading real time in this configuration's zone.
    pub fn clock(&self) -> TimeZoneClock {
        TimeZoneClock::new(self.timezone)
    }
}

impl Default for ClockConfig {
    /// UTC with ISO patterns; deployments normally override via settings.
    fn default() -> Self {
        Self::new(chrono_tz::UTC, "%Y-%m-%d", "%Y-%m-%d %H:%M")
    }
}

/// Which zone an operation interprets or renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZoneSelector {
    /// The configured local zone.
    #[default]
    Local,
    /// Coordinated Universal Time.
    Utc,
}

impl ZoneSelector {
    /// The concrete zone this selector names under `config`.
    pub fn resolve(self, config: &ClockConfig) -> Tz {
        match self {
            ZoneSelector::Local => config.timezone,
            ZoneSelector::Utc => chrono_tz::UTC,
        }
    }
}

/// Supplies "now" and "today" in a configured local zone.
///
/// [`TimeZoneClock::fixed`] pins the clock to a known instant so that
/// anything anchored to the current date (relative-date resolution in
/// particular) stays deterministic under test.
#[derive(Debug, Clone)]
pub struct TimeZoneClock {
    tz: Tz,
    fixed_now: Option<DateTime<Utc>>,
}

impl TimeZoneClock {
    /// A clock reading the system time in `tz`.
    pub fn new(tz: Tz) -> Self {
        Self {
            tz,
            fixed_now: None,
        }
    }

    /// A clock frozen at `now`, expressed in `tz`.
    pub fn fixed(tz: Tz, now: DateTime<Utc>) -> Self {
        Self {
            tz,
            fixed_now: Some(now),
        }
    }

    /// The zone this clock reports in.
    pub fn zone(&self) -> Tz {
        self.tz
    }

    /// The current instant expressed in the clock's zone.
    pub fn now(&self) -> DateTime<Tz> {
        self.fixed_now
            .unwrap_or_else(Utc::now)
            .with_timezone(&self.tz)
    }

    /// The current calendar date as observed in the clock's zone.
    pub fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

// ── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    struct MapSettings(HashMap<(&'static str, &'static str), &'static str>);

    impl SettingsSource for MapSettings {
        fn get_setting(&self, domain: &str, key: &str) -> Result<String> {
            self.0
                .iter()
                .find(|((d, k), _)| *d == domain && *k == key)
                .map(|(_, v)| v.to_string())
                .ok_or_else(|| ClockError::Settings(format!("{domain}/{key} not set")))
        }
    }

    fn settings(entries: &[((&'static str, &'static str), &'static str)]) -> MapSettings {
        MapSettings(entries.iter().copied().collect())
    }

    #[test]
    fn test_from_settings_reads_ltz() {
        let s = settings(&[
            (("global", "ltz"), "America/Denver"),
            (("global", "date_format"), "%m/%d/%Y"),
            (("global", "date_time_format"), "%m/%d/%Y %H:%M"),
        ]);
        let config = ClockConfig::from_settings(&s).unwrap();
        assert_eq!(config.timezone, chrono_tz::America::Denver);
        assert_eq!(config.date_format, "%m/%d/%Y");
    }

    #[test]
    fn test_from_settings_falls_back_to_legacy_tz_key() {
        let s = settings(&[
            (("global", "tz"), "America/Chicago"),
            (("global", "date_format"), "%Y-%m-%d"),
            (("global", "date_time_format"), "%Y-%m-%d %H:%M"),
        ]);
        let config = ClockConfig::from_settings(&s).unwrap();
        assert_eq!(config.timezone, chrono_tz::America::Chicago);
    }

    #[test]
    fn test_from_settings_invalid_zone_name() {
        let s = settings(&[
            (("global", "ltz"), "Mountain Time"),
            (("global", "date_format"), "%Y-%m-%d"),
            (("global", "date_time_format"), "%Y-%m-%d %H:%M"),
        ]);
        let err = ClockConfig::from_settings(&s).unwrap_err();
        assert!(matches!(err, ClockError::InvalidTimezone(_)));
        assert!(err.to_string().contains("Mountain Time"));
    }

    #[test]
    fn test_from_settings_missing_setting_propagates() {
        let s = settings(&[(("global", "ltz"), "UTC")]);
        let err = ClockConfig::from_settings(&s).unwrap_err();
        assert!(matches!(err, ClockError::Settings(_)));
        assert!(err.to_string().contains("date_format"));
    }

    #[test]
    fn test_fixed_clock_today_is_local_date() {
        // 2026-01-15T03:30Z is still Jan 14 in Denver (UTC-7).
        let now = Utc.with_ymd_and_hms(2026, 1, 15, 3, 30, 0).unwrap();
        let clock = TimeZoneClock::fixed(chrono_tz::America::Denver, now);
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()
        );
    }

    #[test]
    fn test_config_serde_round_trip() {
        let config = ClockConfig::new(chrono_tz::America::Denver, "%m/%d/%Y", "%m/%d/%Y %H:%M");
        let json = serde_json::to_string(&config).unwrap();
        let back: ClockConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
