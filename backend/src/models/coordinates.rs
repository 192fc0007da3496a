//! Equatorial and horizontal coordinate types.
//!
//! Equatorial coordinates are observer independent and come from providers.
//! Horizontal coordinates are tied to one observer frame; they are produced
//! by the projector, except for target directions handed to the ranker.

use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::error::{AstroError, AstroResult};

/// Wrap an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(value: f64) -> f64 {
    let wrapped = value.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees into `[-180, 180)`.
#[inline]
pub fn wrap_signed_degrees(value: f64) -> f64 {
    normalize_degrees(value + 180.0) - 180.0
}

/// Celestial position as right ascension / declination.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "EquatorialRepr", into = "EquatorialRepr")]
pub struct EquatorialCoordinate {
    right_ascension: Degrees,
    declination: Degrees,
}

impl EquatorialCoordinate {
    /// Right ascension is wrapped into `[0, 360)`; declination must lie in `[-90, 90]`.
    pub fn new(right_ascension: f64, declination: f64) -> AstroResult<Self> {
        if !right_ascension.is_finite() {
            return Err(AstroError::InvalidCoordinate(format!(
                "Right ascension must be finite, got {}",
                right_ascension
            )));
        }
        if !declination.is_finite() || !(-90.0..=90.0).contains(&declination) {
            return Err(AstroError::InvalidCoordinate(format!(
                "Declination must be between -90 and 90 degrees, got {}",
                declination
            )));
        }
        Ok(Self {
            right_ascension: Degrees::new(normalize_degrees(right_ascension)),
            declination: Degrees::new(declination),
        })
    }

    pub fn right_ascension(&self) -> Degrees {
        self.right_ascension
    }

    pub fn declination(&self) -> Degrees {
        self.declination
    }
}

/// Observer-relative position as altitude / azimuth.
///
/// Azimuth is measured from north through east.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "HorizontalRepr", into = "HorizontalRepr")]
pub struct HorizontalCoordinate {
    altitude: Degrees,
    azimuth: Degrees,
}

impl HorizontalCoordinate {
    /// Build a target direction for separation queries.
    ///
    /// Azimuth is wrapped into `[0, 360)`; altitude must lie in `[-90, 90]`.
    pub fn target(altitude: f64, azimuth: f64) -> AstroResult<Self> {
        if !altitude.is_finite() || !(-90.0..=90.0).contains(&altitude) {
            return Err(AstroError::InvalidCoordinate(format!(
                "Altitude must be between -90 and 90 degrees, got {}",
                altitude
            )));
        }
        if !azimuth.is_finite() {
            return Err(AstroError::InvalidCoordinate(format!(
                "Azimuth must be finite, got {}",
                azimuth
            )));
        }
        Ok(Self::from_projection(altitude, azimuth))
    }

    /// Projector output. Clamps altitude and wraps azimuth so the range
    /// invariants hold even with floating-point noise.
    pub(crate) fn from_projection(altitude: f64, azimuth: f64) -> Self {
        Self {
            altitude: Degrees::new(altitude.clamp(-90.0, 90.0)),
            azimuth: Degrees::new(normalize_degrees(azimuth)),
        }
    }

    pub fn altitude(&self) -> Degrees {
        self.altitude
    }

    pub fn azimuth(&self) -> Degrees {
        self.azimuth
    }

    /// Strictly above the geometric horizon. No refraction is applied, so an
    /// altitude of exactly 0° is not visible.
    pub fn is_above_horizon(&self) -> bool {
        self.altitude.value() > 0.0
    }
}

// Serialized forms in plain degrees. Deserializing goes back through the
// validating constructors.

#[derive(Serialize, Deserialize)]
struct EquatorialRepr {
    right_ascension: f64,
    declination: f64,
}

impl TryFrom<EquatorialRepr> for EquatorialCoordinate {
    type Error = AstroError;

    fn try_from(repr: EquatorialRepr) -> AstroResult<Self> {
        Self::new(repr.right_ascension, repr.declination)
    }
}

impl From<EquatorialCoordinate> for EquatorialRepr {
    fn from(coord: EquatorialCoordinate) -> Self {
        Self {
            right_ascension: coord.right_ascension.value(),
            declination: coord.declination.value(),
        }
    }
}

#[derive(Serialize, Deserialize)]
struct HorizontalRepr {
    altitude: f64,
    azimuth: f64,
}

impl TryFrom<HorizontalRepr> for HorizontalCoordinate {
    type Error = AstroError;

    fn try_from(repr: HorizontalRepr) -> AstroResult<Self> {
        Self::target(repr.altitude, repr.azimuth)
    }
}

impl From<HorizontalCoordinate> for HorizontalRepr {
    fn from(coord: HorizontalCoordinate) -> Self {
        Self {
            altitude: coord.altitude.value(),
            azimuth: coord.azimuth.value(),
        }
    }
}
