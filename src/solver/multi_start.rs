//! Multi-start search over construction variants.
//!
//! # Algorithm
//!
//! For every offset `v` in `-K..K` the whole load set is constructed once:
//! a fresh copy of the loads, one driver, extend until blocked, send it home,
//! dispatch the next, until every load is served. Offsets `v >= 0` always
//! try the `v`-th nearest candidate first and are fully reproducible;
//! negative offsets pick the first candidate at random. The cheapest trial
//! wins, ties going to the earliest offset.
//!
//! Trials share nothing mutable, so they can run on the rayon pool. Each
//! trial seeds its own generator from the run seed and its index, which
//! makes the parallel and sequential modes agree for a fixed seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{ConfigError, DispatchConfig};
use crate::constructive::{DriverStable, Variant};
use crate::models::{LoadSet, Solution};

/// Cost summary of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrialSummary {
    /// Signed trial offset (`>= 0` ranked, `< 0` random).
    pub variant: i64,
    /// Trial cost.
    pub cost: u64,
    /// Drivers dispatched.
    pub drivers: usize,
}

/// The best solution of a run together with every trial's summary.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    best: Solution,
    trials: Vec<TrialSummary>,
}

impl SearchResult {
    /// The cheapest solution found.
    pub fn best(&self) -> &Solution {
        &self.best
    }

    /// Summaries in offset order, `-K` first.
    pub fn trials(&self) -> &[TrialSummary] {
        &self.trials
    }

    /// Consumes the result, keeping the best solution.
    pub fn into_best(self) -> Solution {
        self.best
    }
}

/// Runs `2K` greedy constructions and keeps the cheapest.
///
/// # Examples
///
/// ```
/// use shift_dispatch::{DispatchConfig, MultiStartSolver};
/// use shift_dispatch::models::{Load, LoadSet, Point};
///
/// let loads = LoadSet::new(vec![
///     Load::new(1, Point::new(1, 0), Point::new(2, 0)),
///     Load::new(2, Point::new(3, 0), Point::new(4, 0)),
/// ]);
/// let solver = MultiStartSolver::new(DispatchConfig::default().with_seed(1)).unwrap();
/// let result = solver.run(&loads).unwrap();
///
/// assert_eq!(result.trials().len(), 20);
/// assert_eq!(result.best().num_drivers(), 1);
/// assert!(result.trials().iter().all(|t| result.best().cost() <= t.cost));
/// ```
#[derive(Debug, Clone)]
pub struct MultiStartSolver {
    config: DispatchConfig,
}

impl MultiStartSolver {
    /// Creates a solver, rejecting configurations that cannot make progress.
    pub fn new(config: DispatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The solver's configuration.
    pub fn config(&self) -> &DispatchConfig {
        &self.config
    }

    /// Searches for the cheapest dispatch of `loads`.
    ///
    /// `loads` itself is not modified; each trial works on a reset copy.
    /// Returns `None` when there is nothing to dispatch.
    pub fn run(&self, loads: &LoadSet) -> Option<SearchResult> {
        if loads.is_empty() {
            info!("no loads to dispatch");
            return None;
        }

        // Bounded by `DispatchConfig::validate`.
        let k = i64::try_from(self.config.max_neighbors()).ok()?;
        let offsets: Vec<i64> = (-k..k).collect();
        let seed = self.config.seed().unwrap_or_else(rand::random);
        debug!(trials = offsets.len(), seed, loads = loads.len(), "starting search");

        let trial = |(index, &offset): (usize, &i64)| {
            self.run_trial(loads, offset, seed.wrapping_add(index as u64))
        };
        let solutions: Vec<Solution> = if self.config.parallel() {
            offsets.par_iter().enumerate().map(&trial).collect()
        } else {
            offsets.iter().enumerate().map(&trial).collect()
        };

        let trials: Vec<TrialSummary> = solutions
            .iter()
            .map(|s| TrialSummary {
                variant: s.variant(),
                cost: s.cost(),
                drivers: s.num_drivers(),
            })
            .collect();

        let best_index = trials
            .iter()
            .enumerate()
            .min_by_key(|(index, t)| (t.cost, *index))
            .map(|(index, _)| index)?;
        let best = solutions.into_iter().nth(best_index)?;

        info!(
            cost = best.cost(),
            drivers = best.num_drivers(),
            variant = best.variant(),
            "best dispatch found"
        );

        Some(SearchResult { best, trials })
    }

    fn run_trial(&self, loads: &LoadSet, offset: i64, seed: u64) -> Solution {
        let variant = Variant::from_offset(offset);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut stable = DriverStable::new(loads.reset_clone(), self.config.clone());

        stable.dispatch_new_driver();
        while !stable.loads().is_finished() {
            if !stable.extend_active(variant, &mut rng).is_extended() {
                stable.return_active_home();
                stable.dispatch_new_driver();
            }
        }
        stable.return_active_home();

        let solution = stable.into_solution(offset);
        debug!(
            variant = offset,
            cost = solution.cost(),
            drivers = solution.num_drivers(),
            "trial finished"
        );
        solution
    }
}

/// Solves `loads` with the given configuration, returning only the best
/// solution. `Ok(None)` means there were no loads.
pub fn solve_load_set(
    loads: &LoadSet,
    config: DispatchConfig,
) -> Result<Option<Solution>, ConfigError> {
    let solver = MultiStartSolver::new(config)?;
    Ok(solver.run(loads).map(SearchResult::into_best))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_NEIGHBORS_LIMIT;
    use crate::models::{Load, Point};

    fn square_loads() -> LoadSet {
        // Four short deliveries around the depot.
        LoadSet::new(vec![
            Load::new(1, Point::new(10, 0), Point::new(10, 5)),
            Load::new(2, Point::new(0, 10), Point::new(-5, 10)),
            Load::new(3, Point::new(-10, 0), Point::new(-10, -5)),
            Load::new(4, Point::new(0, -10), Point::new(5, -10)),
        ])
    }

    #[test]
    fn test_rejects_zero_neighbors() {
        let err = MultiStartSolver::new(DispatchConfig::default().with_max_neighbors(0));
        assert_eq!(err.err(), Some(ConfigError::ZeroNeighbors));
    }

    #[test]
    fn test_rejects_oversized_pool() {
        let err = MultiStartSolver::new(DispatchConfig::default().with_max_neighbors(usize::MAX));
        assert!(matches!(err, Err(ConfigError::TooManyNeighbors { .. })));
    }

    #[test]
    fn test_pool_larger_than_load_count() {
        let loads = LoadSet::new(vec![Load::new(1, Point::new(1, 0), Point::new(2, 0))]);
        let config = DispatchConfig::default()
            .with_max_neighbors(MAX_NEIGHBORS_LIMIT)
            .with_seed(4);
        let result = MultiStartSolver::new(config)
            .expect("valid")
            .run(&loads)
            .expect("has loads");
        assert_eq!(result.trials().len(), 2 * MAX_NEIGHBORS_LIMIT);
        assert_eq!(result.best().route_lines(), vec!["1"]);
    }

    #[test]
    fn test_empty_load_set() {
        let solver = MultiStartSolver::new(DispatchConfig::default()).expect("valid");
        assert!(solver.run(&LoadSet::new(Vec::new())).is_none());
    }

    #[test]
    fn test_trial_count_and_order() {
        let config = DispatchConfig::default().with_max_neighbors(3).with_seed(5);
        let solver = MultiStartSolver::new(config).expect("valid");
        let result = solver.run(&square_loads()).expect("has loads");
        let variants: Vec<i64> = result.trials().iter().map(|t| t.variant).collect();
        assert_eq!(variants, vec![-3, -2, -1, 0, 1, 2]);
    }

    #[test]
    fn test_best_is_minimum_first_seen() {
        let config = DispatchConfig::default().with_seed(11);
        let solver = MultiStartSolver::new(config).expect("valid");
        let result = solver.run(&square_loads()).expect("has loads");
        let min = result.trials().iter().map(|t| t.cost).min().expect("trials");
        let first = result
            .trials()
            .iter()
            .find(|t| t.cost == min)
            .expect("minimum exists");
        assert_eq!(result.best().cost(), min);
        assert_eq!(result.best().variant(), first.variant);
    }

    #[test]
    fn test_input_not_modified() {
        let loads = square_loads();
        let solver = MultiStartSolver::new(DispatchConfig::default()).expect("valid");
        solver.run(&loads).expect("has loads");
        assert_eq!(loads.remaining(), 4);
    }

    #[test]
    fn test_solve_load_set() {
        let sol = solve_load_set(&square_loads(), DispatchConfig::default().with_seed(3))
            .expect("valid config")
            .expect("has loads");
        assert_eq!(sol.num_served(), 4);
        assert_eq!(sol.num_unique_served(), 4);
        assert_eq!(sol.num_drivers(), 1);
    }
}
