//! Analytic ephemeris.
//!
//! Geocentric equatorial positions from closed-form theories, with no I/O:
//!
//! * Sun and planets from the JPL "approximate positions of the planets"
//!   Keplerian elements (Standish, valid 1800–2050). The geocentric vector is
//!   the planet's heliocentric position minus the Earth–Moon barycenter.
//! * Moon from the low-precision lunar series of the Astronomical Almanac.
//!
//! Accuracy is a few arcminutes for the planets and a fraction of a degree
//! for the Moon, which is plenty for naked-eye visibility. Positions are
//! geometric and referred to the J2000 equator; precession, nutation,
//! aberration and light time are ignored.

use async_trait::async_trait;
use log::{debug, warn};

use super::EphemerisProvider;
use crate::error::{AstroError, AstroResult};
use crate::models::{wrap_signed_degrees, Body, EquatorialCoordinate, Instant};

/// Obliquity of the ecliptic at J2000.0 (IAU 2006), arcseconds.
const OBLIQUITY_J2000_ARCSEC: f64 = 84_381.406;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITERATIONS: usize = 30;

/// Julian centuries bracketing the element fit (1800–2050).
const VALID_CENTURIES: (f64, f64) = (-2.0, 0.5);

/// Mean orbital elements and their rates per Julian century.
///
/// Each pair is `[value at J2000, rate]`; distances in AU, angles in degrees.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    semi_major_axis: [f64; 2],
    eccentricity: [f64; 2],
    inclination: [f64; 2],
    mean_longitude: [f64; 2],
    perihelion_longitude: [f64; 2],
    node_longitude: [f64; 2],
}

const MERCURY: OrbitalElements = OrbitalElements {
    semi_major_axis: [0.387_099_27, 0.000_000_37],
    eccentricity: [0.205_635_93, 0.000_019_06],
    inclination: [7.004_979_02, -0.005_947_49],
    mean_longitude: [252.250_323_50, 149_472.674_111_75],
    perihelion_longitude: [77.457_796_28, 0.160_476_89],
    node_longitude: [48.330_765_93, -0.125_340_81],
};

const VENUS: OrbitalElements = OrbitalElements {
    semi_major_axis: [0.723_335_66, 0.000_003_90],
    eccentricity: [0.006_776_72, -0.000_041_07],
    inclination: [3.394_676_05, -0.000_788_90],
    mean_longitude: [181.979_099_50, 58_517.815_387_29],
    perihelion_longitude: [131.602_467_18, 0.002_683_29],
    node_longitude: [76.679_842_55, -0.277_694_18],
};

const EARTH_MOON_BARYCENTER: OrbitalElements = OrbitalElements {
    semi_major_axis: [1.000_002_61, 0.000_005_62],
    eccentricity: [0.016_711_23, -0.000_043_92],
    inclination: [-0.000_015_31, -0.012_946_68],
    mean_longitude: [100.464_571_66, 35_999.372_449_81],
    perihelion_longitude: [102.937_681_93, 0.323_273_64],
    node_longitude: [0.0, 0.0],
};

const MARS: OrbitalElements = OrbitalElements {
    semi_major_axis: [1.523_710_34, 0.000_018_47],
    eccentricity: [0.093_394_10, 0.000_078_82],
    inclination: [1.849_691_42, -0.008_131_31],
    mean_longitude: [-4.553_432_05, 19_140.302_684_99],
    perihelion_longitude: [-23.943_629_59, 0.444_410_88],
    node_longitude: [49.559_538_91, -0.292_573_43],
};

const JUPITER: OrbitalElements = OrbitalElements {
    semi_major_axis: [5.202_887_00, -0.000_116_07],
    eccentricity: [0.048_386_24, -0.000_132_53],
    inclination: [1.304_396_95, -0.001_837_14],
    mean_longitude: [34.396_440_51, 3_034.746_127_75],
    perihelion_longitude: [14.728_479_83, 0.212_526_68],
    node_longitude: [100.473_909_09, 0.204_691_06],
};

const SATURN: OrbitalElements = OrbitalElements {
    semi_major_axis: [9.536_675_94, -0.001_250_60],
    eccentricity: [0.053_861_79, -0.000_509_91],
    inclination: [2.485_991_87, 0.001_936_09],
    mean_longitude: [49.954_244_23, 1_222.493_622_01],
    perihelion_longitude: [92.598_878_31, -0.418_972_16],
    node_longitude: [113.662_424_48, -0.288_677_94],
};

/// Low-precision lunar longitude terms: (amplitude, phase, rate) in degrees
/// and degrees per century.
const MOON_LONGITUDE_TERMS: [(f64, f64, f64); 6] = [
    (6.29, 135.0, 477_198.87),
    (-1.27, 259.3, -413_335.36),
    (0.66, 235.7, 890_534.22),
    (0.21, 269.9, 954_397.74),
    (-0.19, 357.5, 35_999.05),
    (-0.11, 186.5, 966_404.03),
];

const MOON_LATITUDE_TERMS: [(f64, f64, f64); 4] = [
    (5.13, 93.3, 483_202.02),
    (0.28, 228.2, 960_400.89),
    (-0.28, 318.3, 6_003.15),
    (-0.17, 217.6, -407_332.21),
];

/// Ephemeris computed from analytic series.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }

    /// Geocentric equatorial position of `body` at `instant`.
    pub fn position(&self, body: Body, instant: Instant) -> AstroResult<EquatorialCoordinate> {
        let t = instant.centuries_since_j2000();
        if !(VALID_CENTURIES.0..=VALID_CENTURIES.1).contains(&t) {
            warn!(
                "{} is outside 1800-2050; {} position accuracy degrades",
                instant, body
            );
        }

        let equatorial = match body {
            Body::Moon => ecliptic_to_equatorial(moon_direction(t)),
            Body::Sun => {
                let earth = heliocentric_ecliptic(&EARTH_MOON_BARYCENTER, t);
                ecliptic_to_equatorial([-earth[0], -earth[1], -earth[2]])
            }
            planet => {
                let earth = heliocentric_ecliptic(&EARTH_MOON_BARYCENTER, t);
                let p = heliocentric_ecliptic(planet_elements(planet), t);
                ecliptic_to_equatorial([p[0] - earth[0], p[1] - earth[1], p[2] - earth[2]])
            }
        };

        let (ra, dec) = spherical_degrees(equatorial);
        debug!("{} at {}: RA {:.4}, Dec {:.4}", body, instant, ra, dec);
        EquatorialCoordinate::new(ra, dec).map_err(|e| {
            AstroError::EphemerisUnavailable(format!("{} at {}: {}", body, instant, e))
        })
    }
}

#[async_trait]
impl EphemerisProvider for AnalyticEphemeris {
    async fn position_of(
        &self,
        body: &str,
        instant: Instant,
    ) -> AstroResult<EquatorialCoordinate> {
        let known =
            Body::from_name(body).ok_or_else(|| AstroError::BodyNotFound(body.to_string()))?;
        self.position(known, instant)
    }
}

fn planet_elements(body: Body) -> &'static OrbitalElements {
    match body {
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Sun | Body::Moon => &EARTH_MOON_BARYCENTER,
    }
}

fn at(pair: [f64; 2], t: f64) -> f64 {
    pair[0] + pair[1] * t
}

/// Solve `M = E − e·sin E` for the eccentric anomaly (radians) by Newton's method.
fn eccentric_anomaly(mean_anomaly: f64, eccentricity: f64) -> f64 {
    let mut e_anom = mean_anomaly + eccentricity * mean_anomaly.sin();
    for _ in 0..KEPLER_MAX_ITERATIONS {
        let delta = (e_anom - eccentricity * e_anom.sin() - mean_anomaly)
            / (1.0 - eccentricity * e_anom.cos());
        e_anom -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    e_anom
}

/// Heliocentric position in the J2000 ecliptic frame, AU.
fn heliocentric_ecliptic(elements: &OrbitalElements, t: f64) -> [f64; 3] {
    let a = at(elements.semi_major_axis, t);
    let e = at(elements.eccentricity, t);
    let inclination = at(elements.inclination, t).to_radians();
    let mean_longitude = at(elements.mean_longitude, t);
    let perihelion = at(elements.perihelion_longitude, t);
    let node = at(elements.node_longitude, t);

    let argument_of_perihelion = (perihelion - node).to_radians();
    let mean_anomaly = wrap_signed_degrees(mean_longitude - perihelion).to_radians();
    let e_anom = eccentric_anomaly(mean_anomaly, e);

    // Position in the orbital plane, x towards perihelion
    let x_orb = a * (e_anom.cos() - e);
    let y_orb = a * (1.0 - e * e).sqrt() * e_anom.sin();

    let (sin_w, cos_w) = argument_of_perihelion.sin_cos();
    let (sin_n, cos_n) = node.to_radians().sin_cos();
    let (sin_i, cos_i) = inclination.sin_cos();

    [
        (cos_w * cos_n - sin_w * sin_n * cos_i) * x_orb
            + (-sin_w * cos_n - cos_w * sin_n * cos_i) * y_orb,
        (cos_w * sin_n + sin_w * cos_n * cos_i) * x_orb
            + (-sin_w * sin_n + cos_w * cos_n * cos_i) * y_orb,
        (sin_w * sin_i) * x_orb + (cos_w * sin_i) * y_orb,
    ]
}

/// Unit vector towards the Moon in the ecliptic frame.
fn moon_direction(t: f64) -> [f64; 3] {
    let series = |terms: &[(f64, f64, f64)]| -> f64 {
        terms
            .iter()
            .map(|(amplitude, phase, rate)| amplitude * (phase + rate * t).to_radians().sin())
            .sum()
    };

    let longitude = (218.32 + 481_267.881 * t + series(&MOON_LONGITUDE_TERMS)).to_radians();
    let latitude = series(&MOON_LATITUDE_TERMS).to_radians();

    let (sin_lon, cos_lon) = longitude.sin_cos();
    let (sin_lat, cos_lat) = latitude.sin_cos();
    [cos_lat * cos_lon, cos_lat * sin_lon, sin_lat]
}

/// Rotate about the x axis by the obliquity.
fn ecliptic_to_equatorial(ecl: [f64; 3]) -> [f64; 3] {
    let eps = (OBLIQUITY_J2000_ARCSEC / 3600.0).to_radians();
    let (sin_eps, cos_eps) = eps.sin_cos();
    [
        ecl[0],
        ecl[1] * cos_eps - ecl[2] * sin_eps,
        ecl[1] * sin_eps + ecl[2] * cos_eps,
    ]
}

/// `(RA, Dec)` in degrees of a Cartesian vector.
fn spherical_degrees(v: [f64; 3]) -> (f64, f64) {
    let ra = v[1].atan2(v[0]).to_degrees();
    let dec = v[2].atan2(v[0].hypot(v[1])).to_degrees();
    (ra, dec)
}
