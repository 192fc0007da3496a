//! Star detail provider trait.

use async_trait::async_trait;

use crate::error::AstroResult;
use crate::models::{HipId, StarDetails};

/// Source of descriptive data for a single catalog star.
#[async_trait]
pub trait StarDetailsProvider: Send + Sync {
    /// Look up the star with identifier `id`.
    ///
    /// # Returns
    /// * `Ok(Some(StarDetails))` - Known star; individual fields may still be absent
    /// * `Ok(None)` - The identifier is unknown to the source
    /// * `Err(AstroError::DetailsUnavailable)` - If the source fails
    async fn details(&self, id: HipId) -> AstroResult<Option<StarDetails>>;
}
