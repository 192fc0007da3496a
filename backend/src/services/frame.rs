//! Observer reference frame.
//!
//! A [`GeographicFrame`] fixes an observer location and instant and carries the
//! local sidereal time derived from them. It is a plain value: a new location
//! or instant means a new frame.

use serde::{Deserialize, Serialize};

use crate::error::AstroResult;
use crate::models::{normalize_degrees, GeographicLocation, Instant};

/// Greenwich mean sidereal time in degrees, `[0, 360)`.
///
/// IAU 1982 expression in UT days/centuries since J2000.0. UT1−UTC is below
/// one second and is ignored.
pub fn greenwich_mean_sidereal_time(instant: &Instant) -> f64 {
    let d = instant.days_since_j2000();
    let t = d / 36_525.0;
    let gmst = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    normalize_degrees(gmst)
}

/// Local mean sidereal time in degrees for an east-positive longitude.
pub fn local_sidereal_time(instant: &Instant, longitude_deg: f64) -> f64 {
    normalize_degrees(greenwich_mean_sidereal_time(instant) + longitude_deg)
}

/// Horizontal reference frame of one observer at one instant.
///
/// Serializes as location and instant only; the derived values are
/// recomputed when read back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "FrameRepr", into = "FrameRepr")]
pub struct GeographicFrame {
    location: GeographicLocation,
    instant: Instant,
    local_sidereal_time: f64,
    sin_lat: f64,
    cos_lat: f64,
}

impl GeographicFrame {
    pub fn new(location: GeographicLocation, instant: Instant) -> Self {
        let lat = location.latitude();
        let (sin_lat, cos_lat) = lat.sin_cos();
        Self {
            location,
            instant,
            local_sidereal_time: local_sidereal_time(&instant, location.longitude().value()),
            sin_lat,
            cos_lat,
        }
    }

    /// Validate raw inputs and build the frame.
    ///
    /// Fails with `InvalidLocation` for out-of-range coordinates and
    /// `InvalidInstant` for a timestamp not in `YYYY-MM-DD HH:MM:SS` form.
    pub fn from_raw(latitude: f64, longitude: f64, utc_time: &str) -> AstroResult<Self> {
        let location = GeographicLocation::new(latitude, longitude)?;
        let instant = Instant::parse(utc_time)?;
        Ok(Self::new(location, instant))
    }

    pub fn location(&self) -> &GeographicLocation {
        &self.location
    }

    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Local sidereal time in degrees, `[0, 360)`.
    pub fn local_sidereal_time(&self) -> f64 {
        self.local_sidereal_time
    }

    /// `(sin φ, cos φ)` of the observer latitude.
    pub(crate) fn latitude_sin_cos(&self) -> (f64, f64) {
        (self.sin_lat, self.cos_lat)
    }
}

#[derive(Serialize, Deserialize)]
struct FrameRepr {
    location: GeographicLocation,
    instant: Instant,
}

impl From<FrameRepr> for GeographicFrame {
    fn from(repr: FrameRepr) -> Self {
        Self::new(repr.location, repr.instant)
    }
}

impl From<GeographicFrame> for FrameRepr {
    fn from(frame: GeographicFrame) -> Self {
        Self {
            location: frame.location,
            instant: frame.instant,
        }
    }
}
