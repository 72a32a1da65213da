//! Domain model types for load dispatch.
//!
//! Provides the core abstractions: integer points, loads with a pickup and a
//! dropoff, the load set of one problem (with its shared distance matrix and
//! per-trial completion state), driver routes and complete solutions.

mod load;
mod load_set;
mod point;
mod route;
mod solution;

pub use load::{Load, LoadId, Position};
pub use load_set::LoadSet;
pub use point::Point;
pub use route::Route;
pub use solution::Solution;
