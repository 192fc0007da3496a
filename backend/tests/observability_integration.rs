//! End-to-end observable-object queries over in-memory and bundled providers.

mod support;

use astrocomp::models::{Body, EntrySource, HipId};
use astrocomp::providers::{AnalyticEphemeris, FileCatalog, StaticCatalog, StaticEphemeris};
use astrocomp::services::{observable_objects, DEFAULT_MAGNITUDE_LIMIT};
use astrocomp::AstroError;

use support::{
    equatorial, equatorial_at_horizontal, frame, instant, location, star, FailingCatalog,
    FailingEphemeris, SAMPLE_TIME,
};

/// All bodies parked well below the horizon of `frame`.
fn buried_bodies(frame: &astrocomp::services::GeographicFrame) -> StaticEphemeris {
    StaticEphemeris::uniform(equatorial_at_horizontal(frame, -60.0, 0.0))
}

#[tokio::test]
async fn test_body_at_zenith_projects_to_ninety_degrees() {
    let frame = frame(0.0, 0.0, SAMPLE_TIME);
    let zenith = equatorial(frame.local_sidereal_time(), 0.0);
    let ephemeris = buried_bodies(&frame).with(Body::Jupiter, zenith);

    let set = observable_objects(
        &ephemeris,
        &StaticCatalog::default(),
        frame.location(),
        frame.instant(),
        DEFAULT_MAGNITUDE_LIMIT,
    )
    .await
    .unwrap();

    assert_eq!(set.len(), 1);
    let jupiter = set.get("Jupiter").unwrap();
    assert_eq!(jupiter.source, EntrySource::Body(Body::Jupiter));
    assert!((jupiter.horizontal.altitude().value() - 90.0).abs() < 1e-6);
}

#[tokio::test]
async fn test_one_of_three_stars_above_horizon() {
    let frame = frame(-58.5, -34.5, SAMPLE_TIME);
    let catalog = StaticCatalog::new(vec![
        star(11, equatorial_at_horizontal(&frame, 45.0, 120.0), 2.1),
        star(12, equatorial_at_horizontal(&frame, -10.0, 200.0), 1.5),
        star(13, equatorial_at_horizontal(&frame, -45.0, 300.0), 3.7),
    ]);
    let ephemeris = buried_bodies(&frame).with(Body::Moon, equatorial_at_horizontal(&frame, 20.0, 90.0));

    let set = observable_objects(&ephemeris, &catalog, frame.location(), frame.instant(), 5.0)
        .await
        .unwrap();

    let stars = set.stars();
    assert_eq!(stars.len(), 1);
    assert_eq!(stars[0].source, EntrySource::Star(HipId(11)));
    assert_eq!(stars[0].label, "Star HIP 11");
    assert!((stars[0].horizontal.altitude().value() - 45.0).abs() < 1e-6);
    assert!((stars[0].horizontal.azimuth().value() - 120.0).abs() < 1e-6);

    let labels: Vec<&str> = set.labels().collect();
    assert_eq!(labels, vec!["Moon", "Star HIP 11"]);
}

#[tokio::test]
async fn test_stars_at_or_above_limit_are_not_considered() {
    let frame = frame(40.0, -3.7, SAMPLE_TIME);
    let overhead = equatorial_at_horizontal(&frame, 70.0, 10.0);
    let catalog = StaticCatalog::new(vec![
        star(1, overhead, 4.99),
        star(2, overhead, 5.0),
        star(3, overhead, 6.2),
    ]);

    let set = observable_objects(
        &buried_bodies(&frame),
        &catalog,
        frame.location(),
        frame.instant(),
        5.0,
    )
    .await
    .unwrap();

    assert_eq!(set.labels().collect::<Vec<_>>(), vec!["Star HIP 1"]);
}

#[tokio::test]
async fn test_empty_catalog_is_not_an_error() {
    let frame = frame(51.48, 0.0, SAMPLE_TIME);
    let set = observable_objects(
        &buried_bodies(&frame),
        &StaticCatalog::default(),
        frame.location(),
        frame.instant(),
        DEFAULT_MAGNITUDE_LIMIT,
    )
    .await
    .unwrap();

    assert!(set.is_empty());
}

#[tokio::test]
async fn test_catalog_failure_propagates_unchanged() {
    let frame = frame(10.0, 10.0, SAMPLE_TIME);
    let result = observable_objects(
        &buried_bodies(&frame),
        &FailingCatalog,
        frame.location(),
        frame.instant(),
        DEFAULT_MAGNITUDE_LIMIT,
    )
    .await;

    assert_eq!(
        result,
        Err(AstroError::CatalogUnavailable("service down".to_string()))
    );
}

#[tokio::test]
async fn test_ephemeris_failure_propagates_unchanged() {
    let result = observable_objects(
        &FailingEphemeris,
        &StaticCatalog::default(),
        &location(10.0, 10.0),
        instant(SAMPLE_TIME),
        DEFAULT_MAGNITUDE_LIMIT,
    )
    .await;

    assert!(matches!(result, Err(AstroError::EphemerisUnavailable(_))));
}

#[tokio::test]
async fn test_analytic_sky_over_drake_passage() {
    // Late-November morning at 58.5°S: the Sun is well up
    let catalog = FileCatalog::bundled().unwrap();
    let set = observable_objects(
        &AnalyticEphemeris::new(),
        &catalog,
        &location(-58.5, -34.5),
        instant(SAMPLE_TIME),
        DEFAULT_MAGNITUDE_LIMIT,
    )
    .await
    .unwrap();

    assert!(set.contains("Sun"));
    assert!(!set.stars().is_empty());
    for entry in set.iter() {
        assert!(
            entry.horizontal.altitude().value() > 0.0,
            "{} listed below the horizon",
            entry.label
        );
    }
}

#[tokio::test]
async fn test_same_inputs_give_same_set() {
    let catalog = FileCatalog::bundled().unwrap();
    let ephemeris = AnalyticEphemeris::new();
    let here = location(35.0, 139.7);
    let when = instant("2025-01-01 12:00:00");

    let first = observable_objects(&ephemeris, &catalog, &here, when, 3.0)
        .await
        .unwrap();
    let second = observable_objects(&ephemeris, &catalog, &here, when, 3.0)
        .await
        .unwrap();

    assert_eq!(first, second);
}
