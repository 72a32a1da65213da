//! Greedy route construction.
//!
//! - [`Neighborhood`] / [`nearest_candidates`] — bounded nearest-pickup selection, O(N·K)
//! - [`Driver`] — extends one shift load by load under the squared distance budget
//! - [`DriverStable`] — all drivers of one trial, cost and route output

mod driver;
mod neighborhood;
mod stable;

pub use driver::{Driver, Extension, Variant};
pub use neighborhood::{nearest_candidates, Neighbor, Neighborhood};
pub use stable::DriverStable;
