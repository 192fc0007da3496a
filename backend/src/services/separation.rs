//! Nearest-star ranking around a horizontal target direction.

use log::debug;

use crate::error::AstroResult;
use crate::models::{CatalogStar, GeographicLocation, HorizontalCoordinate, Instant, RankedMatch};
use crate::providers::CatalogProvider;

use super::frame::GeographicFrame;
use super::projector::project;

/// Number of matches returned when the caller does not ask for a count.
pub const DEFAULT_NEAREST_COUNT: usize = 5;

/// Great-circle distance in degrees, `[0, 180]`.
///
/// Haversine form on (altitude, azimuth), which stays accurate for the small
/// separations the ranking cares about. Swapping the arguments gives the
/// same bits.
pub fn angular_separation(a: &HorizontalCoordinate, b: &HorizontalCoordinate) -> f64 {
    let alt_a = a.altitude().value().to_radians();
    let alt_b = b.altitude().value().to_radians();
    let d_alt = alt_b - alt_a;
    let d_az = (b.azimuth().value() - a.azimuth().value()).to_radians();

    let h = (d_alt / 2.0).sin().powi(2) + alt_a.cos() * alt_b.cos() * (d_az / 2.0).sin().powi(2);
    let central = 2.0 * h.clamp(0.0, 1.0).sqrt().asin();
    central.to_degrees().clamp(0.0, 180.0)
}

/// Project `stars` with `frame` and return the `k` closest to `target`.
///
/// Ordered by ascending separation, equal separations by ascending id. Stars
/// below the horizon are ranked like any other.
pub fn rank_nearest(
    frame: &GeographicFrame,
    stars: &[CatalogStar],
    target: &HorizontalCoordinate,
    k: usize,
) -> Vec<RankedMatch> {
    let mut matches: Vec<RankedMatch> = stars
        .iter()
        .map(|star| {
            let horizontal = project(&star.position, frame);
            RankedMatch {
                star_id: star.id,
                horizontal,
                magnitude: star.magnitude,
                separation: angular_separation(target, &horizontal),
            }
        })
        .collect();

    matches.sort_by(|a, b| {
        a.separation
            .total_cmp(&b.separation)
            .then_with(|| a.star_id.cmp(&b.star_id))
    });
    matches.truncate(k);
    matches
}

/// Rank catalog stars by angular distance from a target altitude/azimuth.
///
/// # Arguments
/// * `catalog` - Source of catalog stars
/// * `location` - Observer location
/// * `instant` - Observation time (UTC)
/// * `target_altitude` - Target altitude in degrees, `[-90, 90]`
/// * `target_azimuth` - Target azimuth in degrees, wrapped into `[0, 360)`
/// * `magnitude_limit` - Only stars with magnitude strictly below this are ranked
/// * `k` - Maximum number of matches
///
/// # Returns
/// * `Ok(Vec<RankedMatch>)` - At most `k` matches; empty for an empty catalog
/// * `Err(AstroError::InvalidCoordinate)` - If the target is out of range
/// * `Err(AstroError)` - The catalog failure, unchanged
#[allow(clippy::too_many_arguments)]
pub async fn nearest<C>(
    catalog: &C,
    location: &GeographicLocation,
    instant: Instant,
    target_altitude: f64,
    target_azimuth: f64,
    magnitude_limit: f64,
    k: usize,
) -> AstroResult<Vec<RankedMatch>>
where
    C: CatalogProvider + ?Sized,
{
    let target = HorizontalCoordinate::target(target_altitude, target_azimuth)?;
    let frame = GeographicFrame::new(*location, instant);

    let stars = catalog.query(magnitude_limit).await?;
    let ranked = rank_nearest(&frame, &stars, &target, k);

    debug!(
        "Ranked {} of {} stars around alt {:.2} az {:.2}",
        ranked.len(),
        stars.len(),
        target.altitude().value(),
        target.azimuth().value()
    );
    Ok(ranked)
}
