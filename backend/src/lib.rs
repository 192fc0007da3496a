//! # AstroComp
//!
//! Observability and angular-ranking engine for a ground observer.
//!
//! Given a location on Earth and a UTC instant, the crate answers two
//! questions:
//!
//! - which of the Sun, Moon, naked-eye planets and bright catalog stars are
//!   above the horizon, and where (altitude/azimuth);
//! - which catalog stars lie closest to a given altitude/azimuth.
//!
//! ## Architecture
//!
//! - [`models`]: locations, instants, coordinates and result types
//! - [`services`]: observer frame, equatorial → horizontal projection, the
//!   observability query and the separation ranking
//! - [`providers`]: ephemeris, catalog and star-detail sources, their
//!   configuration and factory
//! - [`cli`]: command table, session executor and output formatting used by
//!   the `astrocomp` binary
//!
//! Positions are geometric, without refraction correction, and an object
//! exactly on the horizon does not count as visible.

pub mod cli;
pub mod error;
pub mod models;
pub mod providers;
pub mod services;

pub use error::{AstroError, AstroResult};
