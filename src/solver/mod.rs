//! Multi-start search.
//!
//! - [`MultiStartSolver`] — runs every construction variant and keeps the cheapest
//! - [`solve_load_set`] — one-call convenience wrapper

mod multi_start;

pub use multi_start::{solve_load_set, MultiStartSolver, SearchResult, TrialSummary};
