use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::coordinates::{EquatorialCoordinate, HorizontalCoordinate};
use crate::define_id_type;

define_id_type!(u32, HipId, "HIP");

/// Kind of solar-system body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    Sun,
    Moon,
    Planet,
}

/// Solar-system bodies the observability query always asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Body {
    /// Sun, Moon, then the naked-eye planets in order of distance from the Sun.
    pub const OBSERVED: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
    ];

    /// Capitalized display name, also used as the observable-set label.
    pub fn name(&self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
        }
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            Body::Sun => BodyKind::Sun,
            Body::Moon => BodyKind::Moon,
            _ => BodyKind::Planet,
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Body> {
        let needle = name.trim();
        Body::OBSERVED
            .into_iter()
            .find(|body| body.name().eq_ignore_ascii_case(needle))
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A solar-system body with its equatorial position at some instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub body: Body,
    pub position: EquatorialCoordinate,
}

impl CelestialBody {
    pub fn new(body: Body, position: EquatorialCoordinate) -> Self {
        Self { body, position }
    }

    pub fn name(&self) -> &'static str {
        self.body.name()
    }

    pub fn kind(&self) -> BodyKind {
        self.body.kind()
    }
}

/// An entry of a fixed star catalog. Lower magnitude means brighter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CatalogStar {
    pub id: HipId,
    pub position: EquatorialCoordinate,
    pub magnitude: f64,
}

impl CatalogStar {
    pub fn new(id: impl Into<HipId>, position: EquatorialCoordinate, magnitude: f64) -> Self {
        Self {
            id: id.into(),
            position,
            magnitude,
        }
    }

    /// Observable-set label, e.g. `"Star HIP 32349"`.
    pub fn label(&self) -> String {
        star_label(self.id)
    }
}

pub fn star_label(id: HipId) -> String {
    format!("Star {}", id.designation())
}

/// Where an observable entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EntrySource {
    Body(Body),
    Star(HipId),
}

/// A body or star confirmed above the horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservableEntry {
    pub label: String,
    pub source: EntrySource,
    pub horizontal: HorizontalCoordinate,
}

/// Observable objects keyed by label.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObservableSet {
    entries: BTreeMap<String, ObservableEntry>,
}

impl ObservableSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, entry: ObservableEntry) {
        self.entries.insert(entry.label.clone(), entry);
    }

    pub fn get(&self, label: &str) -> Option<&ObservableEntry> {
        self.entries.get(label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.entries.contains_key(label)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObservableEntry> {
        self.entries.values()
    }

    /// Visible bodies, in `Body::OBSERVED` order.
    pub fn bodies(&self) -> Vec<&ObservableEntry> {
        let mut bodies: Vec<&ObservableEntry> = self
            .entries
            .values()
            .filter(|e| matches!(e.source, EntrySource::Body(_)))
            .collect();
        bodies.sort_by_key(|e| e.source);
        bodies
    }

    /// Visible catalog stars, by ascending identifier.
    pub fn stars(&self) -> Vec<&ObservableEntry> {
        let mut stars: Vec<&ObservableEntry> = self
            .entries
            .values()
            .filter(|e| matches!(e.source, EntrySource::Star(_)))
            .collect();
        stars.sort_by_key(|e| e.source);
        stars
    }

    /// Bodies first, then stars; the order used for display.
    pub fn display_order(&self) -> Vec<&ObservableEntry> {
        let mut all = self.bodies();
        all.extend(self.stars());
        all
    }
}

/// A catalog star ranked by angular distance from a target direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    pub star_id: HipId,
    pub horizontal: HorizontalCoordinate,
    pub magnitude: f64,
    /// Great-circle separation from the target, degrees in `[0, 180]`.
    pub separation: f64,
}
