//! Dispatch configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default maximum shift length in hours.
pub const DEFAULT_MAX_SHIFT_HOURS: u64 = 12;
/// Default distance units driven per hour.
pub const DEFAULT_MINUTES_PER_HOUR: u64 = 60;
/// Default candidate pool size per extension decision.
pub const DEFAULT_MAX_NEIGHBORS: usize = 10;
/// Default fixed cost of each dispatched driver.
pub const DEFAULT_COST_PER_DRIVER: u64 = 500;
/// Default cost per unit of distance.
pub const DEFAULT_COST_PER_DISTANCE: u64 = 1;
/// Largest accepted candidate pool size. The search runs `2K` trials.
pub const MAX_NEIGHBORS_LIMIT: usize = 1 << 16;

/// Invalid configuration values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No candidate would ever be considered.
    #[error("max_neighbors must be at least 1")]
    ZeroNeighbors,
    /// The candidate pool exceeds [`MAX_NEIGHBORS_LIMIT`].
    #[error("max_neighbors must be at most {limit}, got {found}")]
    TooManyNeighbors { limit: usize, found: usize },
    /// No load could ever fit in a shift.
    #[error("max_shift_squared_distance must be positive")]
    ZeroShiftBudget,
}

/// Parameters of the dispatch search.
///
/// The shift budget is kept in squared distance units and compared against
/// accumulated squared leg distances; it is never converted to a linear
/// scale.
///
/// # Examples
///
/// ```
/// use shift_dispatch::DispatchConfig;
///
/// let config = DispatchConfig::default();
/// assert_eq!(config.max_shift_squared_distance(), 518_400);
/// assert_eq!(config.max_neighbors(), 10);
///
/// let config = DispatchConfig::default()
///     .with_shift_hours(8, 60)
///     .with_max_neighbors(4)
///     .with_seed(7);
/// assert_eq!(config.max_shift_squared_distance(), 480 * 480);
/// assert_eq!(config.seed(), Some(7));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    max_shift_squared_distance: u64,
    max_neighbors: usize,
    cost_per_driver: u64,
    cost_per_distance: u64,
    seed: Option<u64>,
    parallel: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        let shift = DEFAULT_MAX_SHIFT_HOURS * DEFAULT_MINUTES_PER_HOUR;
        Self {
            max_shift_squared_distance: shift * shift,
            max_neighbors: DEFAULT_MAX_NEIGHBORS,
            cost_per_driver: DEFAULT_COST_PER_DRIVER,
            cost_per_distance: DEFAULT_COST_PER_DISTANCE,
            seed: None,
            parallel: false,
        }
    }
}

impl DispatchConfig {
    /// Sets the budget from a shift length: `(hours × minutes_per_hour)²`.
    pub fn with_shift_hours(mut self, hours: u64, minutes_per_hour: u64) -> Self {
        let shift = hours.saturating_mul(minutes_per_hour);
        self.max_shift_squared_distance = shift.saturating_mul(shift);
        self
    }

    /// Sets the budget directly in squared distance units.
    pub fn with_max_shift_squared_distance(mut self, budget: u64) -> Self {
        self.max_shift_squared_distance = budget;
        self
    }

    /// Sets the candidate pool size (K). The search runs `2K` trials.
    pub fn with_max_neighbors(mut self, k: usize) -> Self {
        self.max_neighbors = k;
        self
    }

    /// Sets the fixed cost per dispatched driver.
    pub fn with_cost_per_driver(mut self, cost: u64) -> Self {
        self.cost_per_driver = cost;
        self
    }

    /// Sets the cost per unit of distance.
    pub fn with_cost_per_distance(mut self, cost: u64) -> Self {
        self.cost_per_distance = cost;
        self
    }

    /// Fixes the seed of the randomized trials.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Runs trials on the rayon thread pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// A load may be added only while the shift total stays strictly below
    /// this value.
    pub fn max_shift_squared_distance(&self) -> u64 {
        self.max_shift_squared_distance
    }

    /// Candidate pool size per extension decision.
    pub fn max_neighbors(&self) -> usize {
        self.max_neighbors
    }

    /// Fixed cost per dispatched driver.
    pub fn cost_per_driver(&self) -> u64 {
        self.cost_per_driver
    }

    /// Cost per unit of distance.
    pub fn cost_per_distance(&self) -> u64 {
        self.cost_per_distance
    }

    /// Seed of the randomized trials; drawn per run when `None`.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether trials run concurrently.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Checks that the search can make progress with these values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_neighbors == 0 {
            return Err(ConfigError::ZeroNeighbors);
        }
        if self.max_neighbors > MAX_NEIGHBORS_LIMIT {
            return Err(ConfigError::TooManyNeighbors {
                limit: MAX_NEIGHBORS_LIMIT,
                found: self.max_neighbors,
            });
        }
        if self.max_shift_squared_distance == 0 {
            return Err(ConfigError::ZeroShiftBudget);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = DispatchConfig::default();
        assert_eq!(c.max_shift_squared_distance(), 12 * 12 * 60 * 60);
        assert_eq!(c.max_neighbors(), 10);
        assert_eq!(c.cost_per_driver(), 500);
        assert_eq!(c.cost_per_distance(), 1);
        assert!(c.seed().is_none());
        assert!(!c.parallel());
    }

    #[test]
    fn test_builder() {
        let c = DispatchConfig::default()
            .with_max_shift_squared_distance(100)
            .with_max_neighbors(3)
            .with_cost_per_driver(10)
            .with_cost_per_distance(2)
            .with_seed(1)
            .with_parallel(true);
        assert_eq!(c.max_shift_squared_distance(), 100);
        assert_eq!(c.max_neighbors(), 3);
        assert_eq!(c.cost_per_driver(), 10);
        assert_eq!(c.cost_per_distance(), 2);
        assert_eq!(c.seed(), Some(1));
        assert!(c.parallel());
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            DispatchConfig::default().with_max_neighbors(0).validate(),
            Err(ConfigError::ZeroNeighbors)
        );
        assert_eq!(
            DispatchConfig::default().with_max_neighbors(usize::MAX).validate(),
            Err(ConfigError::TooManyNeighbors {
                limit: MAX_NEIGHBORS_LIMIT,
                found: usize::MAX,
            })
        );
        assert!(DispatchConfig::default()
            .with_max_neighbors(MAX_NEIGHBORS_LIMIT)
            .validate()
            .is_ok());
        assert_eq!(
            DispatchConfig::default().with_shift_hours(0, 60).validate(),
            Err(ConfigError::ZeroShiftBudget)
        );
    }

    #[test]
    fn test_partial_json() {
        let c: DispatchConfig =
            serde_json::from_str(r#"{"max_neighbors": 4, "seed": 9}"#).expect("valid json");
        assert_eq!(c.max_neighbors(), 4);
        assert_eq!(c.seed(), Some(9));
        assert_eq!(c.cost_per_driver(), DEFAULT_COST_PER_DRIVER);
    }
}
