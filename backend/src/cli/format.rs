//! Text rendering of query results.

use crate::models::{GeographicLocation, Instant, ObservableSet, RankedMatch, StarDetails};

use super::commands::COMMANDS;

/// Shown for a detail field the source does not have.
pub const NOT_AVAILABLE: &str = "Not available";

/// `"{label}: Altitude {alt}, Azimuth {az}"`, bodies first then stars by id.
pub fn observable_lines(
    set: &ObservableSet,
    location: &GeographicLocation,
    instant: &Instant,
) -> Vec<String> {
    let mut lines = vec![format!(
        "Observable objects from {} at {} UTC:",
        location, instant
    )];
    if set.is_empty() {
        lines.push("  Nothing above the horizon".to_string());
    }
    lines.extend(set.display_order().into_iter().map(|entry| {
        format!(
            "  {}: Altitude {:.2}, Azimuth {:.2}",
            entry.label,
            entry.horizontal.altitude().value(),
            entry.horizontal.azimuth().value()
        )
    }));
    lines
}

pub fn ranked_lines(matches: &[RankedMatch], altitude: f64, azimuth: f64) -> Vec<String> {
    let mut lines = vec![format!(
        "Nearest stars to Altitude {}°, Azimuth {}°:",
        altitude, azimuth
    )];
    if matches.is_empty() {
        lines.push("  No catalog stars below the magnitude limit".to_string());
    }
    lines.extend(matches.iter().map(|m| {
        format!(
            "  Star {}: Altitude={:.2}°, Azimuth={:.2}°, Vmag={}, Separation={:.2}",
            m.star_id.designation(),
            m.horizontal.altitude().value(),
            m.horizontal.azimuth().value(),
            m.magnitude,
            m.separation
        )
    }));
    lines
}

pub fn details_lines(details: &StarDetails) -> Vec<String> {
    let mut lines = vec![format!("Information for {}:", details.id.designation())];
    lines.extend(details.fields().into_iter().map(|(label, value)| {
        format!(
            "  {}: {}",
            label,
            value.as_deref().unwrap_or(NOT_AVAILABLE)
        )
    }));
    lines
}

pub fn help_lines() -> Vec<String> {
    let width = COMMANDS.iter().map(|c| c.usage.len()).max().unwrap_or(0);
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        COMMANDS
            .iter()
            .map(|c| format!("  {:<width$}  {}", c.usage, c.summary, width = width)),
    );
    lines.push(String::new());
    lines.push("Times are UTC. Commands typed without arguments ask for each value.".to_string());
    lines
}
