//! Sky computations.
//!
//! Everything here works on one [`GeographicFrame`] per query. Providers are
//! passed in explicitly by the caller; the services hold no state of their own.

pub mod frame;
pub mod observability;
pub mod projector;
pub mod separation;


pub use frame::{greenwich_mean_sidereal_time, local_sidereal_time, GeographicFrame};
pub use observability::{
    collect_observable, fetch_bodies, observable_objects, DEFAULT_MAGNITUDE_LIMIT,
};
pub use projector::{hour_angle, project, project_all};
pub use separation::{angular_separation, nearest, rank_nearest, DEFAULT_NEAREST_COUNT};
