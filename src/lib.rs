//! # shift-dispatch
//!
//! Assigns pickup-and-dropoff loads to drivers whose shifts are bounded by a
//! squared distance budget, minimising a weighted cost of drivers used and
//! distance driven. Routes are built greedily from nearest pickups and the
//! best of several construction variants is kept.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, LoadSet, Route, Solution)
//! - [`distance`] — Squared dropoff → pickup distance matrix
//! - [`constructive`] — Nearest-candidate selection, drivers and driver stables
//! - [`solver`] — Multi-start search over deterministic and randomized variants
//! - [`reader`] — Problem file parsing
//!
//! ## Example
//!
//! ```
//! use shift_dispatch::{solve_load_set, DispatchConfig};
//! use shift_dispatch::models::{Load, LoadSet, Point};
//!
//! let loads = LoadSet::new(vec![Load::new(1, Point::new(0, 0), Point::new(1, 0))]);
//! let solution = solve_load_set(&loads, DispatchConfig::default())
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(solution.route_lines(), vec!["1"]);
//! assert_eq!(solution.cost(), 500 + 1);
//! ```

pub mod config;
pub mod constructive;
pub mod distance;
pub mod models;
pub mod reader;
pub mod solver;

pub use config::{ConfigError, DispatchConfig};
pub use solver::{solve_load_set, MultiStartSolver, SearchResult, TrialSummary};
