//! Hipparcos catalog served by VizieR.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};

use super::table::parse_star_table;
use super::CatalogProvider;
use crate::error::{AstroError, AstroResult};
use crate::models::CatalogStar;

pub const VIZIER_ASU_TSV_URL: &str = "https://vizier.cds.unistra.fr/viz-bin/asu-tsv";
pub const HIPPARCOS_TABLE: &str = "I/239/hip_main";
const COLUMNS: &str = "HIP,RAICRS,DEICRS,Vmag";

/// Catalog that queries VizieR's ASU-TSV service on every call.
#[derive(Debug, Clone)]
pub struct VizierCatalog {
    client: reqwest::Client,
    endpoint: String,
    table: String,
}

impl VizierCatalog {
    /// Build a client for `endpoint` with a per-request timeout.
    pub fn new(endpoint: &str, timeout: Duration) -> AstroResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(format!("astrocomp/{}", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| {
                AstroError::CatalogUnavailable(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            table: HIPPARCOS_TABLE.to_string(),
        })
    }

    async fn fetch(&self, magnitude_limit: f64) -> AstroResult<String> {
        let constraint = format!("<{}", magnitude_limit);
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("-source", self.table.as_str()),
                ("-out", COLUMNS),
                ("-out.max", "unlimited"),
                ("Vmag", constraint.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AstroError::CatalogUnavailable(format!("VizieR request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AstroError::CatalogUnavailable(format!(
                "VizieR returned status {}",
                response.status()
            )));
        }

        response.text().await.map_err(|e| {
            AstroError::CatalogUnavailable(format!("Failed to read VizieR response: {}", e))
        })
    }
}

#[async_trait]
impl CatalogProvider for VizierCatalog {
    async fn query(&self, magnitude_limit: f64) -> AstroResult<Vec<CatalogStar>> {
        debug!("Querying {} for Vmag < {}", self.table, magnitude_limit);
        let body = self.fetch(magnitude_limit).await?;

        let mut stars = parse_star_table(&body, "VizieR")?;
        stars.retain(|star| star.magnitude < magnitude_limit);
        info!("VizieR returned {} stars below Vmag {}", stars.len(), magnitude_limit);
        Ok(stars)
    }
}
