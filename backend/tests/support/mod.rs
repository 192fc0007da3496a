#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use astrocomp::cli::Session;
use astrocomp::models::{
    normalize_degrees, CatalogStar, EquatorialCoordinate, GeographicLocation, HipId, Instant,
    StarDetails,
};
use astrocomp::providers::config::QuerySettings;
use astrocomp::providers::{
    CatalogProvider, EphemerisProvider, Providers, StarDetailsProvider, StaticCatalog,
    StaticDetails, StaticEphemeris,
};
use astrocomp::services::GeographicFrame;
use astrocomp::{AstroError, AstroResult};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// Restores the previous values on unwind and serializes access to the
/// process environment so parallel tests do not see each other's values.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Every `ASTROCOMP_*` variable the config layer reads, all unset.
pub const CLEAN_ENV: &[(&str, Option<&str>)] = &[
    ("ASTROCOMP_CONFIG", None),
    ("ASTROCOMP_CATALOG_SOURCE", None),
    ("ASTROCOMP_CATALOG_PATH", None),
    ("ASTROCOMP_DETAILS_SOURCE", None),
    ("ASTROCOMP_MAGNITUDE_LIMIT", None),
    ("ASTROCOMP_NEAREST_COUNT", None),
    ("ASTROCOMP_TIMEOUT_SECS", None),
];

pub const SAMPLE_TIME: &str = "2024-11-26 11:00:00";

pub fn location(latitude: f64, longitude: f64) -> GeographicLocation {
    GeographicLocation::new(latitude, longitude).unwrap()
}

pub fn instant(time: &str) -> Instant {
    Instant::parse(time).unwrap()
}

pub fn frame(latitude: f64, longitude: f64, time: &str) -> GeographicFrame {
    GeographicFrame::new(location(latitude, longitude), instant(time))
}

pub fn equatorial(ra: f64, dec: f64) -> EquatorialCoordinate {
    EquatorialCoordinate::new(ra, dec).unwrap()
}

/// Equatorial position that `frame` projects to (`altitude`, `azimuth`).
pub fn equatorial_at_horizontal(
    frame: &GeographicFrame,
    altitude: f64,
    azimuth: f64,
) -> EquatorialCoordinate {
    let (sin_lat, cos_lat) = frame.location().latitude().value().to_radians().sin_cos();
    let (sin_alt, cos_alt) = altitude.to_radians().sin_cos();
    let (sin_az, cos_az) = azimuth.to_radians().sin_cos();

    let sin_dec = (sin_alt * sin_lat + cos_alt * cos_lat * cos_az).clamp(-1.0, 1.0);
    let hour_angle = (-sin_az * cos_alt)
        .atan2(cos_lat * sin_alt - sin_lat * cos_alt * cos_az)
        .to_degrees();

    let ra = normalize_degrees(frame.local_sidereal_time() - hour_angle);
    equatorial(ra, sin_dec.asin().to_degrees())
}

pub fn star(id: u32, position: EquatorialCoordinate, magnitude: f64) -> CatalogStar {
    CatalogStar::new(id, position, magnitude)
}

/// Ephemeris whose every request fails.
pub struct FailingEphemeris;

#[async_trait]
impl EphemerisProvider for FailingEphemeris {
    async fn position_of(&self, _body: &str, _instant: Instant) -> AstroResult<EquatorialCoordinate> {
        Err(AstroError::EphemerisUnavailable("service down".to_string()))
    }
}

/// Catalog whose every request fails.
pub struct FailingCatalog;

#[async_trait]
impl CatalogProvider for FailingCatalog {
    async fn query(&self, _magnitude_limit: f64) -> AstroResult<Vec<CatalogStar>> {
        Err(AstroError::CatalogUnavailable("service down".to_string()))
    }
}

/// Details provider whose every request fails.
pub struct FailingDetails;

#[async_trait]
impl StarDetailsProvider for FailingDetails {
    async fn details(&self, _id: HipId) -> AstroResult<Option<StarDetails>> {
        Err(AstroError::DetailsUnavailable("service down".to_string()))
    }
}

/// Catalog that answers after `delay`.
pub struct SlowCatalog {
    pub delay: Duration,
}

#[async_trait]
impl CatalogProvider for SlowCatalog {
    async fn query(&self, _magnitude_limit: f64) -> AstroResult<Vec<CatalogStar>> {
        tokio::time::sleep(self.delay).await;
        Ok(Vec::new())
    }
}

pub fn providers(
    ephemeris: impl EphemerisProvider + 'static,
    catalog: impl CatalogProvider + 'static,
    details: impl StarDetailsProvider + 'static,
) -> Providers {
    Providers {
        ephemeris: Arc::new(ephemeris),
        catalog: Arc::new(catalog),
        details: Arc::new(details),
    }
}

/// Session over in-memory providers with default query settings.
pub fn fixture_session(
    ephemeris: StaticEphemeris,
    catalog: StaticCatalog,
    details: StaticDetails,
) -> Session {
    Session::new(
        providers(ephemeris, catalog, details),
        QuerySettings::default(),
    )
}
