//! In-memory providers.
//!
//! Positions, catalog rows and detail records are supplied up front instead of
//! computed or fetched. Tests use them directly; an empty [`StaticDetails`]
//! backs the `none` details source.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{CatalogProvider, EphemerisProvider, StarDetailsProvider};
use crate::error::{AstroError, AstroResult};
use crate::models::{Body, CatalogStar, EquatorialCoordinate, HipId, Instant, StarDetails};

/// Fixed body positions, independent of the instant.
#[derive(Debug, Clone, Default)]
pub struct StaticEphemeris {
    positions: HashMap<Body, EquatorialCoordinate>,
}

impl StaticEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every observed body at the same position.
    pub fn uniform(position: EquatorialCoordinate) -> Self {
        Self {
            positions: Body::OBSERVED.iter().map(|b| (*b, position)).collect(),
        }
    }

    pub fn with(mut self, body: Body, position: EquatorialCoordinate) -> Self {
        self.positions.insert(body, position);
        self
    }
}

#[async_trait]
impl EphemerisProvider for StaticEphemeris {
    async fn position_of(
        &self,
        body: &str,
        _instant: Instant,
    ) -> AstroResult<EquatorialCoordinate> {
        let known =
            Body::from_name(body).ok_or_else(|| AstroError::BodyNotFound(body.to_string()))?;
        self.positions.get(&known).copied().ok_or_else(|| {
            AstroError::EphemerisUnavailable(format!("No position recorded for {}", known))
        })
    }
}

/// Fixed list of catalog stars.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    stars: Vec<CatalogStar>,
}

impl StaticCatalog {
    pub fn new(stars: Vec<CatalogStar>) -> Self {
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for StaticCatalog {
    async fn query(&self, magnitude_limit: f64) -> AstroResult<Vec<CatalogStar>> {
        Ok(self
            .stars
            .iter()
            .filter(|star| star.magnitude < magnitude_limit)
            .copied()
            .collect())
    }
}

/// Star details keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct StaticDetails {
    records: HashMap<HipId, StarDetails>,
}

impl StaticDetails {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, details: StarDetails) -> Self {
        self.records.insert(details.id, details);
        self
    }
}

#[async_trait]
impl StarDetailsProvider for StaticDetails {
    async fn details(&self, id: HipId) -> AstroResult<Option<StarDetails>> {
        Ok(self.records.get(&id).cloned())
    }
}
