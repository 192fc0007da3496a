//! Data providers.
//!
//! The engine only sees the three traits. Implementations range from pure
//! computation ([`AnalyticEphemeris`]) and local tables ([`FileCatalog`]) to
//! remote services behind the `remote` feature ([`VizierCatalog`],
//! [`SimbadDetails`]).

pub mod analytic;
pub mod catalog;
pub mod config;
pub mod details;
pub mod ephemeris;
pub mod factory;
pub mod file_catalog;
pub mod fixtures;
#[cfg(feature = "remote")]
pub mod simbad;
pub mod table;
#[cfg(feature = "remote")]
pub mod vizier;

pub use analytic::AnalyticEphemeris;
pub use catalog::CatalogProvider;
pub use config::AppConfig;
pub use details::StarDetailsProvider;
pub use ephemeris::EphemerisProvider;
pub use factory::{CatalogSource, DetailsSource, EphemerisSource, ProviderFactory, Providers};
pub use file_catalog::FileCatalog;
pub use fixtures::{StaticCatalog, StaticDetails, StaticEphemeris};
#[cfg(feature = "remote")]
pub use simbad::SimbadDetails;
pub use table::parse_star_table;
#[cfg(feature = "remote")]
pub use vizier::VizierCatalog;
