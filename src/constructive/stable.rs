//! The drivers dispatched during one trial.

use std::collections::HashSet;

use rand::Rng;
use tracing::trace;

use crate::config::DispatchConfig;
use crate::models::{LoadId, LoadSet, Solution};

use super::driver::{Driver, Extension, Variant};

/// One trial's load set and every driver dispatched to serve it.
///
/// Only the most recently dispatched driver is active; earlier ones have
/// returned home.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use shift_dispatch::DispatchConfig;
/// use shift_dispatch::constructive::{DriverStable, Variant};
/// use shift_dispatch::models::{Load, LoadSet, Point};
///
/// let loads = LoadSet::new(vec![Load::new(1, Point::new(0, 0), Point::new(1, 0))]);
/// let mut stable = DriverStable::new(loads, DispatchConfig::default());
/// let mut rng = StdRng::seed_from_u64(0);
///
/// stable.dispatch_new_driver();
/// assert!(stable.extend_active(Variant::Rank(0), &mut rng).is_extended());
/// stable.return_active_home();
///
/// assert_eq!(stable.solution_routes(), vec![vec![1]]);
/// // one driver at 500, sqrt(0 + 1 + 1) rounds to 1
/// assert_eq!(stable.calculate_cost(), 501);
/// ```
#[derive(Debug, Clone)]
pub struct DriverStable {
    loads: LoadSet,
    drivers: Vec<Driver>,
    config: DispatchConfig,
}

impl DriverStable {
    /// Creates an empty stable over `loads`.
    pub fn new(loads: LoadSet, config: DispatchConfig) -> Self {
        Self {
            loads,
            drivers: Vec::new(),
            config,
        }
    }

    /// Sends out a new driver from the depot and makes it the active one.
    pub fn dispatch_new_driver(&mut self) -> &Driver {
        trace!(
            driver = self.drivers.len(),
            remaining = self.loads.remaining(),
            "dispatching driver"
        );
        self.drivers.push(Driver::new());
        &self.drivers[self.drivers.len() - 1]
    }

    /// Asks the active driver to serve one more load.
    ///
    /// Returns [`Extension::NoCandidates`] if no driver has been dispatched.
    pub fn extend_active<R: Rng>(&mut self, variant: Variant, rng: &mut R) -> Extension {
        match self.drivers.last_mut() {
            Some(driver) => driver.find_next_load(&mut self.loads, &self.config, variant, rng),
            None => Extension::NoCandidates,
        }
    }

    /// Sends the active driver back to the depot.
    pub fn return_active_home(&mut self) {
        if let Some(driver) = self.drivers.last_mut() {
            driver.return_home(&self.loads);
        }
    }

    /// The trial's load set.
    pub fn loads(&self) -> &LoadSet {
        &self.loads
    }

    /// Drivers in dispatch order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// `drivers × cost_per_driver + round(√Σ shift) × cost_per_distance`.
    ///
    /// The square root is taken once over the summed squared shift distances
    /// of all drivers, not per driver. This is an estimate of the distance
    /// driven, not a path length.
    pub fn calculate_cost(&self) -> u64 {
        let drivers = self.drivers.len() as u64;
        let total = self
            .drivers
            .iter()
            .fold(0u64, |acc, d| acc.saturating_add(d.shift_squared_distance()));
        let distance = (total as f64).sqrt().round() as u64;

        drivers
            .saturating_mul(self.config.cost_per_driver())
            .saturating_add(distance.saturating_mul(self.config.cost_per_distance()))
    }

    /// Each driver's served loads, in dispatch order.
    pub fn solution_routes(&self) -> Vec<Vec<LoadId>> {
        self.drivers.iter().map(|d| d.completed().to_vec()).collect()
    }

    /// Returns `(total, unique)` load assignments across all drivers. The
    /// two are equal when no load was served twice.
    pub fn assignment_counts(&self) -> (usize, usize) {
        let mut unique = HashSet::new();
        let mut total = 0;
        for driver in &self.drivers {
            total += driver.completed().len();
            unique.extend(driver.completed().iter().copied());
        }
        (total, unique.len())
    }

    /// Consumes the stable into a solution tagged with its trial offset.
    pub fn into_solution(self, variant: i64) -> Solution {
        let cost = self.calculate_cost();
        let routes = self.drivers.into_iter().map(Driver::into_route).collect();
        Solution::new(routes, cost, variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Load, Point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn two_far_loads() -> LoadSet {
        LoadSet::new(vec![
            Load::new(1, Point::new(3, 0), Point::new(3, 4)),
            Load::new(2, Point::new(-3, 0), Point::new(-3, -4)),
        ])
    }

    #[test]
    fn test_extend_without_driver() {
        let mut stable = DriverStable::new(two_far_loads(), DispatchConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            stable.extend_active(Variant::Rank(0), &mut rng),
            Extension::NoCandidates
        );
        assert_eq!(stable.calculate_cost(), 0);
    }

    #[test]
    fn test_dispatch_new_driver_at_home() {
        let mut stable = DriverStable::new(two_far_loads(), DispatchConfig::default());
        let driver = stable.dispatch_new_driver();
        assert!(driver.position().is_home());
        assert_eq!(driver.shift_squared_distance(), 0);
        assert_eq!(stable.drivers().len(), 1);
    }

    #[test]
    fn test_two_drivers_cost() {
        // Each load alone: 9 + 16 + 25 = 50. Both: 9 + 16 + 52 + 16 + 25 = 118.
        let config = DispatchConfig::default().with_max_shift_squared_distance(60);
        let mut stable = DriverStable::new(two_far_loads(), config);
        let mut rng = StdRng::seed_from_u64(1);

        stable.dispatch_new_driver();
        assert!(stable.extend_active(Variant::Rank(0), &mut rng).is_extended());
        assert_eq!(
            stable.extend_active(Variant::Rank(0), &mut rng),
            Extension::Blocked
        );
        stable.return_active_home();
        stable.dispatch_new_driver();
        assert!(stable.extend_active(Variant::Rank(0), &mut rng).is_extended());
        stable.return_active_home();

        assert!(stable.loads().is_finished());
        // Equal pickup distances: the later id ranks first.
        assert_eq!(stable.solution_routes(), vec![vec![2], vec![1]]);
        assert_eq!(stable.assignment_counts(), (2, 2));
        // 2 × 500 + round(√100) × 1
        assert_eq!(stable.calculate_cost(), 1010);

        let sol = stable.into_solution(3);
        assert_eq!(sol.cost(), 1010);
        assert_eq!(sol.variant(), 3);
        assert_eq!(sol.routes()[1].shift_squared_distance(), 50);
    }

    #[test]
    fn test_cost_single_root_over_sum() {
        // Per-driver roots would give 2 × round(√50) = 14; one root gives 10.
        let config = DispatchConfig::default()
            .with_max_shift_squared_distance(60)
            .with_cost_per_driver(0)
            .with_cost_per_distance(1);
        let mut stable = DriverStable::new(two_far_loads(), config);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..2 {
            stable.dispatch_new_driver();
            stable.extend_active(Variant::Rank(0), &mut rng);
            stable.return_active_home();
        }
        assert_eq!(stable.calculate_cost(), 10);
    }
}
