//! Ephemeris provider trait.

use async_trait::async_trait;

use crate::error::AstroResult;
use crate::models::{EquatorialCoordinate, Instant};

/// Source of apparent equatorial positions for solar-system bodies.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so one instance can be shared
/// between concurrent queries behind an `Arc`.
#[async_trait]
pub trait EphemerisProvider: Send + Sync {
    /// Position of `body` at `instant`.
    ///
    /// # Arguments
    /// * `body` - Body name, matched case-insensitively ("Sun", "moon", "Mars", ...)
    /// * `instant` - Observation time (UTC)
    ///
    /// # Returns
    /// * `Ok(EquatorialCoordinate)` - RA/Dec in degrees
    /// * `Err(AstroError::BodyNotFound)` - If the name is not recognized
    /// * `Err(AstroError::EphemerisUnavailable)` - If the source fails
    async fn position_of(&self, body: &str, instant: Instant) -> AstroResult<EquatorialCoordinate>;
}
