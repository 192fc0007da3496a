//! Provider factory.
//!
//! Builds provider instances from an [`AppConfig`]. Callers get trait objects
//! and never name the concrete types.

use std::str::FromStr;
use std::sync::Arc;
#[cfg(feature = "remote")]
use std::time::Duration;

#[cfg(feature = "remote")]
use log::info;

use super::config::AppConfig;
use super::{
    AnalyticEphemeris, CatalogProvider, EphemerisProvider, FileCatalog, StarDetailsProvider,
    StaticDetails,
};
use crate::error::{AstroError, AstroResult};

/// Where catalog stars come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    /// Bright-star table compiled into the crate
    Bundled,
    /// Local table file
    File,
    /// VizieR Hipparcos service
    Vizier,
}

impl FromStr for CatalogSource {
    type Err = String;

    /// Parse a catalog source ("bundled", "file", "vizier").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bundled" | "builtin" => Ok(Self::Bundled),
            "file" => Ok(Self::File),
            "vizier" => Ok(Self::Vizier),
            _ => Err(format!("Unknown catalog source: {}", s)),
        }
    }
}

/// Where body positions come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EphemerisSource {
    Analytic,
}

impl FromStr for EphemerisSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "analytic" => Ok(Self::Analytic),
            _ => Err(format!("Unknown ephemeris source: {}", s)),
        }
    }
}

/// Where star details come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsSource {
    /// SIMBAD TAP service
    Simbad,
    /// No details; every lookup answers "unknown"
    None,
}

impl FromStr for DetailsSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simbad" => Ok(Self::Simbad),
            "none" | "off" => Ok(Self::None),
            _ => Err(format!("Unknown details source: {}", s)),
        }
    }
}

/// The provider instances one session works with.
#[derive(Clone)]
pub struct Providers {
    pub ephemeris: Arc<dyn EphemerisProvider>,
    pub catalog: Arc<dyn CatalogProvider>,
    pub details: Arc<dyn StarDetailsProvider>,
}

impl std::fmt::Debug for Providers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Providers").finish_non_exhaustive()
    }
}

/// Factory for provider instances.
pub struct ProviderFactory;

impl ProviderFactory {
    /// Build all three providers from configuration.
    ///
    /// # Returns
    /// * `Ok(Providers)` - Ready-to-use instances
    /// * `Err(AstroError)` - Invalid source, missing feature, or an unreadable catalog file
    pub async fn from_config(config: &AppConfig) -> AstroResult<Providers> {
        Ok(Providers {
            ephemeris: Self::ephemeris(config)?,
            catalog: Self::catalog(config).await?,
            details: Self::details(config)?,
        })
    }

    pub fn ephemeris(config: &AppConfig) -> AstroResult<Arc<dyn EphemerisProvider>> {
        match config.ephemeris_source()? {
            EphemerisSource::Analytic => Ok(Arc::new(AnalyticEphemeris::new())),
        }
    }

    pub async fn catalog(config: &AppConfig) -> AstroResult<Arc<dyn CatalogProvider>> {
        match config.catalog_source()? {
            CatalogSource::Bundled => Ok(Arc::new(FileCatalog::bundled()?)),
            CatalogSource::File => {
                let path = config.catalog.path.as_ref().ok_or_else(|| {
                    AstroError::Configuration(
                        "catalog source 'file' requires 'catalog.path'".to_string(),
                    )
                })?;
                Ok(Arc::new(FileCatalog::load(path).await?))
            }
            CatalogSource::Vizier => {
                #[cfg(feature = "remote")]
                {
                    info!("Using VizieR catalog at {}", config.catalog.endpoint);
                    let catalog = super::VizierCatalog::new(
                        &config.catalog.endpoint,
                        Duration::from_secs(config.query.timeout_secs),
                    )?;
                    Ok(Arc::new(catalog))
                }
                #[cfg(not(feature = "remote"))]
                {
                    Err(AstroError::Configuration(
                        "VizieR catalog requires the 'remote' feature".to_string(),
                    ))
                }
            }
        }
    }

    pub fn details(config: &AppConfig) -> AstroResult<Arc<dyn StarDetailsProvider>> {
        match config.details_source()? {
            DetailsSource::Simbad => {
                #[cfg(feature = "remote")]
                {
                    info!("Using SIMBAD details at {}", config.details.endpoint);
                    let details = super::SimbadDetails::new(
                        &config.details.endpoint,
                        Duration::from_secs(config.query.timeout_secs),
                    )?;
                    Ok(Arc::new(details))
                }
                #[cfg(not(feature = "remote"))]
                {
                    Err(AstroError::Configuration(
                        "SIMBAD details require the 'remote' feature".to_string(),
                    ))
                }
            }
            DetailsSource::None => Ok(Arc::new(StaticDetails::new())),
        }
    }
}
