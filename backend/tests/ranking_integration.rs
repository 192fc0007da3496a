//! Nearest-star ranking through the catalog provider seam.

mod support;

use astrocomp::models::HipId;
use astrocomp::providers::{FileCatalog, StaticCatalog};
use astrocomp::services::{nearest, DEFAULT_MAGNITUDE_LIMIT, DEFAULT_NEAREST_COUNT};
use astrocomp::AstroError;

use support::{equatorial_at_horizontal, frame, instant, location, star, FailingCatalog, SAMPLE_TIME};

#[tokio::test]
async fn test_star_at_target_ranks_first_with_zero_separation() {
    let frame = frame(-58.5, -34.5, SAMPLE_TIME);
    let catalog = StaticCatalog::new(vec![
        star(500, equatorial_at_horizontal(&frame, 35.0, 170.0), 2.0),
        star(32349, equatorial_at_horizontal(&frame, 31.50, 175.63), -1.44),
        star(7, equatorial_at_horizontal(&frame, 10.0, 20.0), 1.0),
    ]);

    let ranked = nearest(
        &catalog,
        frame.location(),
        frame.instant(),
        31.50,
        175.63,
        DEFAULT_MAGNITUDE_LIMIT,
        DEFAULT_NEAREST_COUNT,
    )
    .await
    .unwrap();

    assert_eq!(ranked.len(), 3);
    assert_eq!(ranked[0].star_id, HipId(32349));
    assert!(ranked[0].separation < 1e-6);
    assert!((ranked[0].horizontal.altitude().value() - 31.50).abs() < 1e-6);
    assert_eq!(ranked[0].magnitude, -1.44);
    assert_eq!(ranked[1].star_id, HipId(500));
    assert_eq!(ranked[2].star_id, HipId(7));
}

#[tokio::test]
async fn test_empty_catalog_gives_empty_ranking() {
    let ranked = nearest(
        &StaticCatalog::default(),
        &location(0.0, 0.0),
        instant(SAMPLE_TIME),
        45.0,
        90.0,
        DEFAULT_MAGNITUDE_LIMIT,
        DEFAULT_NEAREST_COUNT,
    )
    .await
    .unwrap();

    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_fewer_stars_than_requested() {
    let frame = frame(20.0, 100.0, SAMPLE_TIME);
    let catalog = StaticCatalog::new(vec![
        star(1, equatorial_at_horizontal(&frame, 60.0, 10.0), 1.0),
        star(2, equatorial_at_horizontal(&frame, -30.0, 190.0), 1.0),
    ]);

    let ranked = nearest(&catalog, frame.location(), frame.instant(), 60.0, 10.0, 5.0, 10)
        .await
        .unwrap();

    // Stars below the horizon are still ranked
    let ids: Vec<u32> = ranked.iter().map(|m| m.star_id.value()).collect();
    assert_eq!(ids, vec![1, 2]);
    assert!(ranked[0].separation <= ranked[1].separation);
}

#[tokio::test]
async fn test_equal_separations_order_by_id() {
    let frame = frame(45.0, 7.0, SAMPLE_TIME);
    let spot = equatorial_at_horizontal(&frame, 30.0, 250.0);
    let catalog = StaticCatalog::new(vec![star(9, spot, 2.0), star(4, spot, 3.0), star(6, spot, 1.0)]);

    let ranked = nearest(&catalog, frame.location(), frame.instant(), 50.0, 250.0, 5.0, 5)
        .await
        .unwrap();

    let ids: Vec<u32> = ranked.iter().map(|m| m.star_id.value()).collect();
    assert_eq!(ids, vec![4, 6, 9]);
}

#[tokio::test]
async fn test_bundled_catalog_truncates_to_k() {
    let catalog = FileCatalog::bundled().unwrap();
    let ranked = nearest(
        &catalog,
        &location(-58.5, -34.5),
        instant(SAMPLE_TIME),
        31.50,
        175.63,
        DEFAULT_MAGNITUDE_LIMIT,
        3,
    )
    .await
    .unwrap();

    assert_eq!(ranked.len(), 3);
    assert!(ranked.windows(2).all(|w| w[0].separation <= w[1].separation));
    assert!(ranked.iter().all(|m| m.magnitude < DEFAULT_MAGNITUDE_LIMIT));
}

#[tokio::test]
async fn test_zero_k_gives_empty_ranking() {
    let catalog = FileCatalog::bundled().unwrap();
    let ranked = nearest(&catalog, &location(0.0, 0.0), instant(SAMPLE_TIME), 10.0, 10.0, 5.0, 0)
        .await
        .unwrap();
    assert!(ranked.is_empty());
}

#[tokio::test]
async fn test_azimuth_outside_circle_is_wrapped() {
    let frame = frame(30.0, 30.0, SAMPLE_TIME);
    let catalog = StaticCatalog::new(vec![star(3, equatorial_at_horizontal(&frame, 40.0, 350.0), 1.0)]);

    let ranked = nearest(&catalog, frame.location(), frame.instant(), 40.0, -10.0, 5.0, 1)
        .await
        .unwrap();

    assert!(ranked[0].separation < 1e-6);
}

#[tokio::test]
async fn test_invalid_target_rejected_before_catalog_is_queried() {
    let result = nearest(
        &FailingCatalog,
        &location(0.0, 0.0),
        instant(SAMPLE_TIME),
        95.0,
        10.0,
        DEFAULT_MAGNITUDE_LIMIT,
        DEFAULT_NEAREST_COUNT,
    )
    .await;

    assert!(matches!(result, Err(AstroError::InvalidCoordinate(_))));
}

#[tokio::test]
async fn test_catalog_failure_propagates() {
    let result = nearest(
        &FailingCatalog,
        &location(0.0, 0.0),
        instant(SAMPLE_TIME),
        45.0,
        10.0,
        DEFAULT_MAGNITUDE_LIMIT,
        DEFAULT_NEAREST_COUNT,
    )
    .await;

    assert_eq!(
        result,
        Err(AstroError::CatalogUnavailable("service down".to_string()))
    );
}
