use serde::{Deserialize, Serialize};

use super::sky::HipId;

/// Detailed astrophysical data for one catalog star.
///
/// Every field is either present or absent; which one is decided when the
/// record is built, so reading a field never fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarDetails {
    pub id: HipId,
    pub spectral_type: Option<String>,
    pub distance_pc: Option<f64>,
    pub v_magnitude: Option<f64>,
    pub color_index_bv: Option<f64>,
    pub pm_ra_mas_yr: Option<f64>,
    pub pm_dec_mas_yr: Option<f64>,
    pub parallax_mas: Option<f64>,
    pub radial_velocity_km_s: Option<f64>,
    /// Projected rotational velocity (v sin i).
    pub rotation_km_s: Option<f64>,
    pub object_types: Option<String>,
    pub other_ids: Option<String>,
}

impl StarDetails {
    pub fn new(id: HipId) -> Self {
        Self {
            id,
            spectral_type: None,
            distance_pc: None,
            v_magnitude: None,
            color_index_bv: None,
            pm_ra_mas_yr: None,
            pm_dec_mas_yr: None,
            parallax_mas: None,
            radial_velocity_km_s: None,
            rotation_km_s: None,
            object_types: None,
            other_ids: None,
        }
    }

    /// Distance from a parallax in milliarcseconds; only positive parallaxes
    /// give a distance.
    pub fn distance_from_parallax(parallax_mas: Option<f64>) -> Option<f64> {
        parallax_mas
            .filter(|p| p.is_finite() && *p > 0.0)
            .map(|p| 1000.0 / p)
    }

    /// B−V color index when both fluxes are known.
    pub fn color_index(b_flux: Option<f64>, v_flux: Option<f64>) -> Option<f64> {
        match (b_flux, v_flux) {
            (Some(b), Some(v)) => Some(b - v),
            _ => None,
        }
    }

    /// `(label, rendered value)` pairs in display order. Absent fields render
    /// as `None` so the caller decides how to show them.
    pub fn fields(&self) -> Vec<(&'static str, Option<String>)> {
        vec![
            ("Spectral Type", self.spectral_type.clone()),
            ("Distance", self.distance_pc.map(|d| format!("{:.2} pc", d))),
            ("Visual Magnitude (V)", self.v_magnitude.map(|v| format!("{}", v))),
            ("Color Index (B-V)", self.color_index_bv.map(|c| format!("{:.3}", c))),
            ("Proper Motion (RA)", self.pm_ra_mas_yr.map(|v| format!("{} mas/yr", v))),
            ("Proper Motion (Dec)", self.pm_dec_mas_yr.map(|v| format!("{} mas/yr", v))),
            ("Parallax", self.parallax_mas.map(|v| format!("{} mas", v))),
            ("Radial Velocity", self.radial_velocity_km_s.map(|v| format!("{} km/s", v))),
            ("Rotation", self.rotation_km_s.map(|v| format!("{} km/s", v))),
            ("Object Types", self.object_types.clone()),
            ("Other IDs", self.other_ids.clone()),
        ]
    }
}
