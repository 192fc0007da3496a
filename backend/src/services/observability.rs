//! Observable-object query.
//!
//! Fetches positions for the Sun, Moon and naked-eye planets plus the catalog
//! stars below a magnitude limit, projects everything with one frame, and
//! keeps what is strictly above the geometric horizon.
//!
//! Provider requests are issued concurrently and all of them must succeed:
//! the first failure aborts the query and is returned unchanged, so a caller
//! never sees a partially filled set.

use futures::future::try_join_all;
use log::debug;

use crate::error::AstroResult;
use crate::models::{
    Body, CatalogStar, CelestialBody, EntrySource, GeographicLocation, Instant, ObservableEntry,
    ObservableSet,
};
use crate::providers::{CatalogProvider, EphemerisProvider};

use super::frame::GeographicFrame;
use super::projector::project;

/// Default magnitude limit for catalog queries (stars brighter than Vmag 5).
pub const DEFAULT_MAGNITUDE_LIMIT: f64 = 5.0;

/// Compute every body and catalog star above the horizon.
///
/// # Arguments
/// * `ephemeris` - Source of Sun, Moon and planet positions
/// * `catalog` - Source of catalog stars
/// * `location` - Observer location
/// * `instant` - Observation time (UTC)
/// * `magnitude_limit` - Only stars with magnitude strictly below this are considered
///
/// # Returns
/// * `Ok(ObservableSet)` - Possibly empty; an empty catalog is not an error
/// * `Err(AstroError)` - The first provider failure, unchanged
pub async fn observable_objects<E, C>(
    ephemeris: &E,
    catalog: &C,
    location: &GeographicLocation,
    instant: Instant,
    magnitude_limit: f64,
) -> AstroResult<ObservableSet>
where
    E: EphemerisProvider + ?Sized,
    C: CatalogProvider + ?Sized,
{
    let frame = GeographicFrame::new(*location, instant);

    let (bodies, stars) = futures::try_join!(
        fetch_bodies(ephemeris, instant),
        catalog.query(magnitude_limit)
    )?;

    let observable = collect_observable(&frame, &bodies, &stars);
    debug!(
        "{} of {} bodies and {} stars above the horizon at {} from {}",
        observable.bodies().len(),
        bodies.len(),
        observable.stars().len(),
        instant,
        location
    );
    Ok(observable)
}

/// Request every observed body, one request per body, all in flight at once.
pub async fn fetch_bodies<E>(ephemeris: &E, instant: Instant) -> AstroResult<Vec<CelestialBody>>
where
    E: EphemerisProvider + ?Sized,
{
    let requests = Body::OBSERVED.iter().map(|body| async move {
        let position = ephemeris.position_of(body.name(), instant).await?;
        Ok(CelestialBody::new(*body, position))
    });
    try_join_all(requests).await
}

/// Project bodies and stars with `frame` and keep those above the horizon.
pub fn collect_observable(
    frame: &GeographicFrame,
    bodies: &[CelestialBody],
    stars: &[CatalogStar],
) -> ObservableSet {
    let mut observable = ObservableSet::new();

    for body in bodies {
        let horizontal = project(&body.position, frame);
        if horizontal.is_above_horizon() {
            observable.insert(ObservableEntry {
                label: body.name().to_string(),
                source: EntrySource::Body(body.body),
                horizontal,
            });
        }
    }

    for star in stars {
        let horizontal = project(&star.position, frame);
        if horizontal.is_above_horizon() {
            observable.insert(ObservableEntry {
                label: star.label(),
                source: EntrySource::Star(star.id),
                horizontal,
            });
        }
    }

    observable
}
