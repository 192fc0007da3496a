//! Configuration file support.
//!
//! Settings come from `astrocomp.toml`, every section optional:
//!
//! ```toml
//! [catalog]
//! source = "vizier"          # bundled | file | vizier
//! path = "data/bright_stars.tsv"
//!
//! [ephemeris]
//! source = "analytic"
//!
//! [details]
//! source = "simbad"          # simbad | none
//!
//! [query]
//! magnitude_limit = 5.0
//! nearest_count = 5
//! timeout_secs = 30
//! ```
//!
//! `ASTROCOMP_*` environment variables override individual values after the
//! file is read.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

use log::{debug, info};

use super::factory::{CatalogSource, DetailsSource, EphemerisSource};
use crate::error::{AstroError, AstroResult};
use crate::services::{DEFAULT_MAGNITUDE_LIMIT, DEFAULT_NEAREST_COUNT};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "ASTROCOMP_CONFIG";

const CONFIG_FILE_NAME: &str = "astrocomp.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub ephemeris: EphemerisSettings,
    #[serde(default)]
    pub details: DetailsSettings,
    #[serde(default)]
    pub query: QuerySettings,
}

/// Star catalog source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_catalog_source")]
    pub source: String,
    /// Table file for the `file` source.
    #[serde(default)]
    pub path: Option<PathBuf>,
    #[serde(default = "default_vizier_endpoint")]
    pub endpoint: String,
}

/// Ephemeris source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EphemerisSettings {
    #[serde(default = "default_ephemeris_source")]
    pub source: String,
}

/// Star details source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailsSettings {
    #[serde(default = "default_details_source")]
    pub source: String,
    #[serde(default = "default_simbad_endpoint")]
    pub endpoint: String,
}

/// Query defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuerySettings {
    #[serde(default = "default_magnitude_limit")]
    pub magnitude_limit: f64,
    #[serde(default = "default_nearest_count")]
    pub nearest_count: usize,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

/// VizieR when the build can reach it. The bundled table is only complete
/// to Vmag 2.0, short of the default magnitude limit.
fn default_catalog_source() -> String {
    if cfg!(feature = "remote") {
        "vizier".to_string()
    } else {
        "bundled".to_string()
    }
}

fn default_vizier_endpoint() -> String {
    "https://vizier.cds.unistra.fr/viz-bin/asu-tsv".to_string()
}

fn default_ephemeris_source() -> String {
    "analytic".to_string()
}

fn default_details_source() -> String {
    if cfg!(feature = "remote") {
        "simbad".to_string()
    } else {
        "none".to_string()
    }
}

fn default_simbad_endpoint() -> String {
    "https://simbad.cds.unistra.fr/simbad/sim-tap/sync".to_string()
}

fn default_magnitude_limit() -> f64 {
    DEFAULT_MAGNITUDE_LIMIT
}

fn default_nearest_count() -> usize {
    DEFAULT_NEAREST_COUNT
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            source: default_catalog_source(),
            path: None,
            endpoint: default_vizier_endpoint(),
        }
    }
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            source: default_ephemeris_source(),
        }
    }
}

impl Default for DetailsSettings {
    fn default() -> Self {
        Self {
            source: default_details_source(),
            endpoint: default_simbad_endpoint(),
        }
    }
}

impl Default for QuerySettings {
    fn default() -> Self {
        Self {
            magnitude_limit: default_magnitude_limit(),
            nearest_count: default_nearest_count(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl QuerySettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Ok(AppConfig)` if successful
    /// * `Err(AstroError::Configuration)` if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> AstroResult<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            AstroError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Self::from_toml(&content)
    }

    /// Parse TOML text. Values are checked by [`AppConfig::validate`].
    pub fn from_toml(content: &str) -> AstroResult<Self> {
        toml::from_str(content)
            .map_err(|e| AstroError::Configuration(format!("Failed to parse config file: {}", e)))
    }

    /// Load configuration from the default location.
    ///
    /// Searches for `astrocomp.toml` in:
    /// 1. Current directory
    /// 2. `backend/` directory
    /// 3. Parent directory
    ///
    /// # Returns
    /// * `Ok(Some(AppConfig))` if found and parsed successfully
    /// * `Ok(None)` if no config file exists in those places
    /// * `Err(AstroError::Configuration)` on a read or parse error
    pub fn from_default_location() -> AstroResult<Option<Self>> {
        let search_paths = [
            PathBuf::from(CONFIG_FILE_NAME),
            PathBuf::from("backend").join(CONFIG_FILE_NAME),
            PathBuf::from("..").join(CONFIG_FILE_NAME),
        ];

        for path in search_paths {
            if path.exists() {
                debug!("Using config file {}", path.display());
                return Self::from_file(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` wins, then `ASTROCOMP_CONFIG`, then the default
    /// locations, then built-in defaults. Environment overrides apply last and
    /// the result is validated.
    pub fn load(path: Option<&Path>) -> AstroResult<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match std::env::var(CONFIG_PATH_ENV) {
                Ok(env_path) => Self::from_file(env_path)?,
                Err(_) => Self::from_default_location()?.unwrap_or_else(|| {
                    info!("No {} found, using defaults", CONFIG_FILE_NAME);
                    Self::default()
                }),
            },
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `ASTROCOMP_*` environment overrides.
    ///
    /// Recognized: `ASTROCOMP_CATALOG_SOURCE`, `ASTROCOMP_CATALOG_PATH`,
    /// `ASTROCOMP_DETAILS_SOURCE`, `ASTROCOMP_MAGNITUDE_LIMIT`,
    /// `ASTROCOMP_NEAREST_COUNT`, `ASTROCOMP_TIMEOUT_SECS`.
    pub fn apply_env_overrides(&mut self) -> AstroResult<()> {
        if let Ok(source) = std::env::var("ASTROCOMP_CATALOG_SOURCE") {
            self.catalog.source = source;
        }
        if let Ok(path) = std::env::var("ASTROCOMP_CATALOG_PATH") {
            self.catalog.path = Some(PathBuf::from(path));
        }
        if let Ok(source) = std::env::var("ASTROCOMP_DETAILS_SOURCE") {
            self.details.source = source;
        }
        if let Some(limit) = env_number("ASTROCOMP_MAGNITUDE_LIMIT")? {
            self.query.magnitude_limit = limit;
        }
        if let Some(count) = env_number("ASTROCOMP_NEAREST_COUNT")? {
            self.query.nearest_count = count;
        }
        if let Some(secs) = env_number("ASTROCOMP_TIMEOUT_SECS")? {
            self.query.timeout_secs = secs;
        }
        Ok(())
    }

    /// Check source names and query values.
    pub fn validate(&self) -> AstroResult<()> {
        let catalog = self.catalog_source()?;
        self.ephemeris_source()?;
        self.details_source()?;

        if catalog == CatalogSource::File && self.catalog.path.is_none() {
            return Err(AstroError::Configuration(
                "catalog source 'file' requires 'catalog.path'".to_string(),
            ));
        }
        if !self.query.magnitude_limit.is_finite() {
            return Err(AstroError::Configuration(
                "query.magnitude_limit must be a finite number".to_string(),
            ));
        }
        if self.query.timeout_secs == 0 {
            return Err(AstroError::Configuration(
                "query.timeout_secs must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn catalog_source(&self) -> AstroResult<CatalogSource> {
        CatalogSource::from_str(&self.catalog.source).map_err(AstroError::Configuration)
    }

    pub fn ephemeris_source(&self) -> AstroResult<EphemerisSource> {
        EphemerisSource::from_str(&self.ephemeris.source).map_err(AstroError::Configuration)
    }

    pub fn details_source(&self) -> AstroResult<DetailsSource> {
        DetailsSource::from_str(&self.details.source).map_err(AstroError::Configuration)
    }
}

fn env_number<T: FromStr>(name: &str) -> AstroResult<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().map(Some).map_err(|_| {
            AstroError::Configuration(format!("{} is not a valid number: '{}'", name, raw))
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        config.validate().unwrap();
        assert_eq!(config.ephemeris_source().unwrap(), EphemerisSource::Analytic);
        assert_eq!(config.query.magnitude_limit, 5.0);
        assert_eq!(config.query.nearest_count, 5);
    }

    #[cfg(feature = "remote")]
    #[test]
    fn test_default_catalog_reaches_magnitude_limit() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_source().unwrap(), CatalogSource::Vizier);
        assert_eq!(config.details_source().unwrap(), DetailsSource::Simbad);
    }

    #[cfg(not(feature = "remote"))]
    #[test]
    fn test_offline_default_catalog_is_bundled() {
        let config = AppConfig::default();
        assert_eq!(config.catalog_source().unwrap(), CatalogSource::Bundled);
        assert_eq!(config.details_source().unwrap(), DetailsSource::None);
        // The offline table cannot serve the default limit in full
        let bundled = crate::providers::FileCatalog::bundled().unwrap();
        assert!(!bundled.covers(config.query.magnitude_limit));
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[catalog]
source = "file"
path = "stars.tsv"

[details]
source = "none"

[query]
magnitude_limit = 3.5
nearest_count = 10
timeout_secs = 5
"#;

        let config = AppConfig::from_toml(toml).unwrap();
        config.validate().unwrap();
        assert_eq!(config.catalog_source().unwrap(), CatalogSource::File);
        assert_eq!(config.catalog.path, Some(PathBuf::from("stars.tsv")));
        assert_eq!(config.details_source().unwrap(), DetailsSource::None);
        assert_eq!(config.query.magnitude_limit, 3.5);
        assert_eq!(config.query.nearest_count, 10);
        assert_eq!(config.query.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        let config = AppConfig::from_toml("[catalog]\nsource = \"gaia\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, AstroError::Configuration(msg) if msg.contains("gaia")));
    }

    #[test]
    fn test_file_source_needs_path() {
        let config = AppConfig::from_toml("[catalog]\nsource = \"file\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let config = AppConfig::from_toml("[query]\ntimeout_secs = 0\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml_is_configuration_error() {
        assert!(matches!(
            AppConfig::from_toml("[query\nmagnitude_limit = "),
            Err(AstroError::Configuration(_))
        ));
    }
}
