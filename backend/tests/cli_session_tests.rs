//! Command parsing and execution against in-memory providers.

mod support;

use std::time::Duration;

use astrocomp::cli::{parse_line, Command, Session, NOT_AVAILABLE};
use astrocomp::models::{Body, HipId, StarDetails};
use astrocomp::providers::config::QuerySettings;
use astrocomp::providers::{StaticCatalog, StaticDetails, StaticEphemeris};
use astrocomp::AstroError;

use support::{
    equatorial_at_horizontal, fixture_session, frame, providers, star, FailingDetails, SlowCatalog,
    SAMPLE_TIME,
};

const LAT: f64 = -58.5;
const LON: f64 = -34.5;

fn sky_session() -> Session {
    let frame = frame(LAT, LON, SAMPLE_TIME);
    let ephemeris = StaticEphemeris::uniform(equatorial_at_horizontal(&frame, -30.0, 0.0))
        .with(Body::Sun, equatorial_at_horizontal(&frame, 38.25, 75.5));
    let catalog = StaticCatalog::new(vec![
        star(32349, equatorial_at_horizontal(&frame, 31.50, 175.63), -1.44),
        star(30438, equatorial_at_horizontal(&frame, 60.0, 200.0), -0.62),
        star(91262, equatorial_at_horizontal(&frame, -20.0, 10.0), 0.03),
    ]);
    let mut sirius = StarDetails::new(HipId(32349));
    sirius.spectral_type = Some("A0mA1Va".to_string());
    sirius.parallax_mas = Some(379.21);
    sirius.distance_pc = StarDetails::distance_from_parallax(sirius.parallax_mas);

    fixture_session(ephemeris, catalog, StaticDetails::new().with(sirius))
}

#[tokio::test]
async fn test_sky_lists_bodies_then_stars() {
    let session = sky_session();
    let command = parse_line(&format!("sky {} {} {}", LAT, LON, SAMPLE_TIME)).unwrap();

    let lines = session.execute(&command).await.unwrap();

    assert_eq!(
        lines,
        vec![
            "Observable objects from lat -58.5000°, lon -34.5000° at 2024-11-26 11:00:00 UTC:",
            "  Sun: Altitude 38.25, Azimuth 75.50",
            "  Star HIP 30438: Altitude 60.00, Azimuth 200.00",
            "  Star HIP 32349: Altitude 31.50, Azimuth 175.63",
        ]
    );
}

#[tokio::test]
async fn test_locate_ranks_target_star_first() {
    let session = sky_session();
    let command = parse_line(&format!("locate {} {} {} 31.50 175.63", LAT, LON, SAMPLE_TIME)).unwrap();

    let lines = session.execute(&command).await.unwrap();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], "Nearest stars to Altitude 31.5°, Azimuth 175.63°:");
    assert_eq!(
        lines[1],
        "  Star HIP 32349: Altitude=31.50°, Azimuth=175.63°, Vmag=-1.44, Separation=0.00"
    );
    assert!(lines[2].starts_with("  Star HIP 30438:"));
    assert!(lines[3].starts_with("  Star HIP 91262:"));
}

#[tokio::test]
async fn test_research_marks_missing_fields() {
    let session = sky_session();

    let lines = session
        .execute(&Command::Research { id: HipId(32349) })
        .await
        .unwrap();

    assert_eq!(lines[0], "Information for HIP 32349:");
    assert!(lines.contains(&"  Spectral Type: A0mA1Va".to_string()));
    assert!(lines.contains(&"  Distance: 2.64 pc".to_string()));
    assert!(lines.contains(&format!("  Radial Velocity: {}", NOT_AVAILABLE)));
    assert!(lines.contains(&format!("  Rotation: {}", NOT_AVAILABLE)));
    assert_eq!(lines.len(), 12);
}

#[tokio::test]
async fn test_research_unknown_star() {
    let lines = sky_session()
        .execute(&parse_line("research HIP 1").unwrap())
        .await
        .unwrap();
    assert_eq!(lines, vec!["No information found for HIP 1"]);
}

#[tokio::test]
async fn test_details_failure_is_reported() {
    let session = Session::new(
        providers(StaticEphemeris::new(), StaticCatalog::default(), FailingDetails),
        QuerySettings::default(),
    );

    let result = session.execute(&Command::Research { id: HipId(746) }).await;
    assert!(matches!(result, Err(AstroError::DetailsUnavailable(_))));
}

#[tokio::test]
async fn test_slow_catalog_times_out() {
    let settings = QuerySettings {
        timeout_secs: 1,
        ..QuerySettings::default()
    };
    let session = Session::new(
        providers(
            StaticEphemeris::new(),
            SlowCatalog {
                delay: Duration::from_secs(10),
            },
            StaticDetails::new(),
        ),
        settings,
    );

    let command = parse_line(&format!("locate 0 0 {} 45 90", SAMPLE_TIME)).unwrap();
    let result = session.execute(&command).await;
    assert_eq!(result, Err(AstroError::Timeout(1)));
}

#[tokio::test]
async fn test_help_and_exit() {
    let session = sky_session();

    let help = session.execute(&Command::Help).await.unwrap();
    assert_eq!(help[0], "Available commands:");
    for name in ["sky", "locate", "research", "help", "exit"] {
        assert!(help.iter().any(|line| line.trim_start().starts_with(name)));
    }

    assert_eq!(session.execute(&Command::Exit).await.unwrap(), vec!["Bye"]);
}
