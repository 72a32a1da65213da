//! Solution type.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Route;

/// A complete dispatch: one route per driver and the cost of the whole.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::{Route, Solution};
///
/// let sol = Solution::new(vec![Route::new(vec![1, 3], 10), Route::new(vec![2], 4)], 1004, 0);
/// assert_eq!(sol.num_drivers(), 2);
/// assert_eq!(sol.num_served(), 3);
/// assert_eq!(sol.route_lines(), vec!["1,3", "2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    routes: Vec<Route>,
    cost: u64,
    variant: i64,
}

impl Solution {
    /// Creates a solution.
    ///
    /// `variant` is the signed offset of the trial that produced it.
    pub fn new(routes: Vec<Route>, cost: u64, variant: i64) -> Self {
        Self {
            routes,
            cost,
            variant,
        }
    }

    /// Routes in dispatch order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.routes.len()
    }

    /// Weighted cost of drivers and distance.
    pub fn cost(&self) -> u64 {
        self.cost
    }

    /// Trial offset that produced this solution (`>= 0` ranked, `< 0` random).
    pub fn variant(&self) -> i64 {
        self.variant
    }

    /// Total number of load assignments across routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Number of distinct loads across routes. Equals
    /// [`num_served`](Solution::num_served) when no load is assigned twice.
    pub fn num_unique_served(&self) -> usize {
        self.routes
            .iter()
            .flat_map(|r| r.load_ids().iter().copied())
            .collect::<HashSet<_>>()
            .len()
    }

    /// Comma-joined route per driver.
    pub fn route_lines(&self) -> Vec<String> {
        self.routes.iter().map(Route::to_line).collect()
    }
}
