//! Equatorial → horizontal projection.
//!
//! Standard spherical astronomy with the hour angle taken from the frame's
//! local sidereal time. The result is the geometric position: refraction,
//! parallax and aberration are not applied.

use crate::models::{wrap_signed_degrees, EquatorialCoordinate, HorizontalCoordinate};

use super::frame::GeographicFrame;

/// Hour angle `LST − RA` in degrees, `[-180, 180)`.
pub fn hour_angle(equatorial: &EquatorialCoordinate, frame: &GeographicFrame) -> f64 {
    wrap_signed_degrees(frame.local_sidereal_time() - equatorial.right_ascension().value())
}

/// Project an equatorial coordinate into the observer's horizontal frame.
///
/// Altitude lies in `[-90, 90]`, azimuth in `[0, 360)` measured from north
/// through east.
pub fn project(equatorial: &EquatorialCoordinate, frame: &GeographicFrame) -> HorizontalCoordinate {
    let h = hour_angle(equatorial, frame).to_radians();
    let (sin_h, cos_h) = h.sin_cos();
    let (sin_dec, cos_dec) = equatorial.declination().sin_cos();
    let (sin_lat, cos_lat) = frame.latitude_sin_cos();

    let sin_alt = (sin_dec * sin_lat + cos_dec * cos_lat * cos_h).clamp(-1.0, 1.0);
    let altitude = sin_alt.asin().to_degrees();

    let y = -sin_h * cos_dec;
    let x = cos_lat * sin_dec - sin_lat * cos_dec * cos_h;
    let azimuth = y.atan2(x).to_degrees();

    HorizontalCoordinate::from_projection(altitude, azimuth)
}

/// Project many coordinates with the same frame.
pub fn project_all<'a, I>(coordinates: I, frame: &GeographicFrame) -> Vec<HorizontalCoordinate>
where
    I: IntoIterator<Item = &'a EquatorialCoordinate>,
{
    coordinates.into_iter().map(|c| project(c, frame)).collect()
}
