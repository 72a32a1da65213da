//! A single driver extending its shift one load at a time.
//!
//! # Feasibility
//!
//! A candidate `c` may be served from the current position `p` when
//!
//! ```text
//! shift + d(p, pickup c) + d(pickup c, dropoff c) + d(dropoff c, home) < budget
//! ```
//!
//! with every term a squared distance. Only the first two legs are added to
//! the shift when the load is taken; the way home is paid once, by
//! [`Driver::return_home`].

use rand::Rng;
use tracing::trace;

use crate::config::DispatchConfig;
use crate::models::{LoadId, LoadSet, Position, Route};

use super::neighborhood::{nearest_candidates, Neighbor};

/// Which candidate a driver tries first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Start with the `r`-th nearest candidate, or the farthest one held if
    /// fewer than `r + 1` exist.
    Rank(usize),
    /// Start with a uniformly random candidate.
    Random,
}

impl Variant {
    /// Maps a signed trial offset to a variant: `v >= 0` is `Rank(v)`,
    /// negative offsets are `Random`.
    pub fn from_offset(offset: i64) -> Self {
        usize::try_from(offset).map_or(Variant::Random, Variant::Rank)
    }

    fn start_index<R: Rng>(self, count: usize, rng: &mut R) -> usize {
        match self {
            Variant::Rank(rank) => rank.min(count - 1),
            Variant::Random => rng.random_range(0..count),
        }
    }
}

/// Outcome of one [`Driver::find_next_load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Extension {
    /// The load was served and the driver now stands at its dropoff.
    Extended(LoadId),
    /// Candidates exist but none fits in the remaining shift.
    Blocked,
    /// Every load is completed.
    NoCandidates,
}

impl Extension {
    /// Returns `true` if a load was served.
    pub fn is_extended(self) -> bool {
        matches!(self, Extension::Extended(_))
    }
}

/// A driver's shift: where it stands, how far it has driven, what it served.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use shift_dispatch::DispatchConfig;
/// use shift_dispatch::constructive::{Driver, Extension, Variant};
/// use shift_dispatch::models::{Load, LoadSet, Point};
///
/// let mut loads = LoadSet::new(vec![Load::new(1, Point::new(3, 4), Point::new(3, 0))]);
/// let config = DispatchConfig::default();
/// let mut rng = StdRng::seed_from_u64(0);
///
/// let mut driver = Driver::new();
/// let step = driver.find_next_load(&mut loads, &config, Variant::Rank(0), &mut rng);
/// assert_eq!(step, Extension::Extended(1));
/// driver.return_home(&loads);
/// // 25 to the pickup, 16 to the dropoff, 9 back home
/// assert_eq!(driver.shift_squared_distance(), 50);
/// ```
#[derive(Debug, Clone)]
pub struct Driver {
    shift_squared_distance: u64,
    position: Position,
    completed: Vec<LoadId>,
}

impl Driver {
    /// Creates a driver at the depot with an empty shift.
    pub fn new() -> Self {
        Self {
            shift_squared_distance: 0,
            position: Position::Home,
            completed: Vec::new(),
        }
    }

    /// Tries to serve one more load.
    ///
    /// Candidates are the `config.max_neighbors()` nearest uncompleted
    /// pickups. Starting at the index chosen by `variant`, they are scanned
    /// circularly and the first feasible one is served. When none is
    /// feasible the driver is left untouched and [`Extension::Blocked`] is
    /// returned, except on a fresh shift: a driver that has not served
    /// anything takes the starting candidate regardless, so a load that
    /// exceeds the budget on its own still gets a driver of its own.
    pub fn find_next_load<R: Rng>(
        &mut self,
        loads: &mut LoadSet,
        config: &DispatchConfig,
        variant: Variant,
        rng: &mut R,
    ) -> Extension {
        let hood = nearest_candidates(loads, self.position, config.max_neighbors());
        let count = hood.len();
        if count == 0 {
            return Extension::NoCandidates;
        }

        let start = variant.start_index(count, rng);
        let budget = config.max_shift_squared_distance();
        let feasible = hood
            .iter()
            .cycle()
            .skip(start)
            .take(count)
            .find(|n| self.is_feasible(loads, n, budget))
            .copied();

        let chosen = match (feasible, hood.get(start)) {
            (Some(n), _) => n,
            (None, Some(&n)) if self.is_fresh() => {
                trace!(load = n.item, "serving over-budget load on a dedicated shift");
                n
            }
            _ => return Extension::Blocked,
        };

        self.drive(loads, chosen);
        Extension::Extended(chosen.item)
    }

    /// Drives back to the depot, adding the final leg to the shift.
    pub fn return_home(&mut self, loads: &LoadSet) {
        self.shift_squared_distance = self
            .shift_squared_distance
            .saturating_add(loads.distance_home(self.position));
        self.position = Position::Home;
    }

    /// Sum of squared leg distances driven so far.
    pub fn shift_squared_distance(&self) -> u64 {
        self.shift_squared_distance
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Served loads in order.
    pub fn completed(&self) -> &[LoadId] {
        &self.completed
    }

    /// Converts the shift into a route.
    pub fn into_route(self) -> Route {
        Route::new(self.completed, self.shift_squared_distance)
    }

    fn is_fresh(&self) -> bool {
        self.position.is_home() && self.completed.is_empty()
    }

    fn is_feasible(&self, loads: &LoadSet, n: &Neighbor<LoadId>, budget: u64) -> bool {
        self.shift_squared_distance
            .saturating_add(n.distance)
            .saturating_add(loads.delivery_distance(n.item))
            .saturating_add(loads.distance_home(Position::At(n.item)))
            < budget
    }

    fn drive(&mut self, loads: &mut LoadSet, n: Neighbor<LoadId>) {
        self.shift_squared_distance = self
            .shift_squared_distance
            .saturating_add(n.distance)
            .saturating_add(loads.delivery_distance(n.item));
        self.position = Position::At(n.item);
        loads.mark_completed(n.item);
        self.completed.push(n.item);
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new()
    }
}
