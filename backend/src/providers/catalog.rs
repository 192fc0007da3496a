//! Star catalog provider trait.

use async_trait::async_trait;

use crate::error::AstroResult;
use crate::models::CatalogStar;

/// Source of fixed catalog stars.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Stars with magnitude strictly below `magnitude_limit`.
    ///
    /// # Returns
    /// * `Ok(Vec<CatalogStar>)` - Possibly empty
    /// * `Err(AstroError::CatalogUnavailable)` - If the source cannot be read
    async fn query(&self, magnitude_limit: f64) -> AstroResult<Vec<CatalogStar>>;
}
