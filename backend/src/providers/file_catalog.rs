//! Catalog backed by a local star table.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{info, warn};

use super::table::parse_star_table;
use super::CatalogProvider;
use crate::error::{AstroError, AstroResult};
use crate::models::CatalogStar;

/// Brightest Hipparcos stars, shipped with the crate.
const BUNDLED_TABLE: &str = include_str!("../../data/bright_stars.tsv");

/// Comment key declaring the magnitude a table is complete to.
const COMPLETENESS_KEY: &str = "#COMPLETENESS_VMAG=";

/// Star catalog read once from a table and served from memory.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    source: String,
    stars: Vec<CatalogStar>,
    complete_below: Option<f64>,
}

impl FileCatalog {
    /// Read and parse a table file.
    ///
    /// # Returns
    /// * `Ok(FileCatalog)` - Parsed catalog
    /// * `Err(AstroError::CatalogUnavailable)` - If the file cannot be read or parsed
    pub async fn load<P: AsRef<Path>>(path: P) -> AstroResult<Self> {
        let path: PathBuf = path.as_ref().to_path_buf();
        let text = tokio::fs::read_to_string(&path).await.map_err(|e| {
            AstroError::CatalogUnavailable(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let catalog = Self::from_table(&text, &path.display().to_string())?;
        info!("Loaded {} stars from {}", catalog.len(), catalog.source);
        Ok(catalog)
    }

    /// Parse an in-memory table. `source` names it in error messages.
    ///
    /// A `#COMPLETENESS_VMAG=<mag>` comment marks the table as holding every
    /// star brighter than `<mag>` and nothing guaranteed beyond it.
    pub fn from_table(text: &str, source: &str) -> AstroResult<Self> {
        Ok(Self {
            source: source.to_string(),
            stars: parse_star_table(text, source)?,
            complete_below: completeness(text),
        })
    }

    /// The bright-star table compiled into the crate.
    pub fn bundled() -> AstroResult<Self> {
        Self::from_table(BUNDLED_TABLE, "bundled bright_stars.tsv")
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Magnitude the table is complete to, if it declares one.
    pub fn complete_below(&self) -> Option<f64> {
        self.complete_below
    }

    /// Whether a query at `magnitude_limit` sees every star it should.
    pub fn covers(&self, magnitude_limit: f64) -> bool {
        self.complete_below
            .map_or(true, |complete| magnitude_limit <= complete)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

#[async_trait]
impl CatalogProvider for FileCatalog {
    async fn query(&self, magnitude_limit: f64) -> AstroResult<Vec<CatalogStar>> {
        if let Some(complete) = self.complete_below.filter(|_| !self.covers(magnitude_limit)) {
            warn!(
                "{} is complete only to Vmag {}; limit {} may miss fainter stars",
                self.source, complete, magnitude_limit
            );
        }
        Ok(self
            .stars
            .iter()
            .filter(|star| star.magnitude < magnitude_limit)
            .copied()
            .collect())
    }
}

fn completeness(text: &str) -> Option<f64> {
    text.lines()
        .filter_map(|line| line.trim().strip_prefix(COMPLETENESS_KEY))
        .find_map(|value| value.trim().parse().ok())
}
