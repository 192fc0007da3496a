use qtty::Degrees;
use serde::{Deserialize, Serialize};

use crate::error::{AstroError, AstroResult};

/// Geographic location of a ground observer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "LocationRepr", into = "LocationRepr")]
pub struct GeographicLocation {
    /// Latitude in decimal degrees (-90 to 90)
    latitude: Degrees,
    /// Longitude in decimal degrees (-180 to 180), east positive
    longitude: Degrees,
}

impl GeographicLocation {
    pub fn new(latitude: f64, longitude: f64) -> AstroResult<Self> {
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AstroError::InvalidLocation(format!(
                "Latitude must be between -90 and 90 degrees, got {}",
                latitude
            )));
        }
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AstroError::InvalidLocation(format!(
                "Longitude must be between -180 and 180 degrees, got {}",
                longitude
            )));
        }
        Ok(Self {
            latitude: Degrees::new(latitude),
            longitude: Degrees::new(longitude),
        })
    }

    pub fn latitude(&self) -> Degrees {
        self.latitude
    }

    pub fn longitude(&self) -> Degrees {
        self.longitude
    }
}

/// Serialized form; read back through [`GeographicLocation::new`].
#[derive(Serialize, Deserialize)]
struct LocationRepr {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<LocationRepr> for GeographicLocation {
    type Error = AstroError;

    fn try_from(repr: LocationRepr) -> AstroResult<Self> {
        Self::new(repr.latitude, repr.longitude)
    }
}

impl From<GeographicLocation> for LocationRepr {
    fn from(location: GeographicLocation) -> Self {
        Self {
            latitude: location.latitude.value(),
            longitude: location.longitude.value(),
        }
    }
}

impl std::fmt::Display for GeographicLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "lat {:.4}°, lon {:.4}°",
            self.latitude.value(),
            self.longitude.value()
        )
    }
}
