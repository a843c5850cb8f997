//! Bistatic radar geometry and a synthetic RCS model.
//!
//! Transmitter, receiver, and target are geodetic points; the target carries
//! a yaw/pitch/roll attitude. The crate converts the points to ECEF, rotates
//! the station directions into the target's body frame, and feeds the
//! resulting incidence/scatter angles into a synthetic (non-physical) RCS
//! model, either per frequency or over an azimuth/elevation grid.
//!
//! All of the computation is pure and total: degenerate geometry (a station
//! coinciding with the target) produces NaN angles instead of an error, and
//! callers are expected to check for non-finite values.

pub mod attitude;
pub mod config;
pub mod geo;
pub mod geometry;
pub mod model;
pub mod sweep;

pub use attitude::Attitude;
pub use geo::GeoPoint;
pub use geometry::{geometry, BistaticGeometry};
pub use model::{bistatic_rcs, direction_grid, normalize_angle_deg};
pub use sweep::{sweep, SweepResult};
