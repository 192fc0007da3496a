use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AstroError, AstroResult};

/// Boundary time format, always interpreted as UTC.
pub const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC).
const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// A UTC instant with at least second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Instant(DateTime<Utc>);

impl Instant {
    /// Parse a `"YYYY-MM-DD HH:MM:SS"` string as UTC.
    pub fn parse(s: &str) -> AstroResult<Self> {
        let naive = NaiveDateTime::parse_from_str(s.trim(), INSTANT_FORMAT).map_err(|e| {
            AstroError::InvalidInstant(format!(
                "'{}' does not match YYYY-MM-DD HH:MM:SS: {}",
                s.trim(),
                e
            ))
        })?;
        Ok(Self(Utc.from_utc_datetime(&naive)))
    }

    /// Build from calendar fields (UTC).
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> AstroResult<Self> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
            .ok_or_else(|| {
                AstroError::InvalidInstant(format!(
                    "{:04}-{:02}-{:02} {:02}:{:02}:{:02} is not a valid UTC time",
                    year, month, day, hour, minute, second
                ))
            })
    }

    pub fn datetime(&self) -> DateTime<Utc> {
        self.0
    }

    /// Seconds since 1970-01-01 00:00:00 UTC, including the sub-second part.
    pub fn unix_seconds(&self) -> f64 {
        self.0.timestamp() as f64 + self.0.timestamp_subsec_nanos() as f64 / 1e9
    }

    /// Julian Date (UTC scale).
    pub fn julian_date(&self) -> f64 {
        UNIX_EPOCH_JD + self.unix_seconds() / SECONDS_PER_DAY
    }

    /// Days elapsed since J2000.0.
    pub fn days_since_j2000(&self) -> f64 {
        self.julian_date() - J2000_JD
    }

    /// Julian centuries elapsed since J2000.0.
    pub fn centuries_since_j2000(&self) -> f64 {
        self.days_since_j2000() / 36_525.0
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

impl std::str::FromStr for Instant {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(INSTANT_FORMAT))
    }
}
