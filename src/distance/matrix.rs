//! Dense squared distance matrix.

use crate::models::{Load, Point};

/// A dense (n+1)×(n+1) matrix of squared dropoff → pickup distances, stored
/// in row-major order.
///
/// Index 0 is the depot (pickup = dropoff = origin); index `i` is load `i`.
/// Entry `(i, j)` is the squared distance from the dropoff of `i` to the
/// pickup of `j`, so the diagonal `(i, i)` is the pickup → dropoff leg of
/// load `i` read in reverse, which has the same length.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::{Load, Point};
/// use shift_dispatch::distance::SquaredDistanceMatrix;
///
/// let loads = vec![Load::new(1, Point::new(3, 4), Point::new(6, 8))];
/// let dm = SquaredDistanceMatrix::from_loads(&loads);
/// assert_eq!(dm.size(), 2);
/// assert_eq!(dm.get(0, 1), 25); // home -> pickup of 1
/// assert_eq!(dm.get(1, 1), 25); // pickup -> dropoff of 1
/// assert_eq!(dm.get(1, 0), 100); // dropoff of 1 -> home
/// ```
#[derive(Debug, Clone)]
pub struct SquaredDistanceMatrix {
    data: Vec<u64>,
    size: usize,
}

impl SquaredDistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Computes the matrix for the depot plus the given loads.
    ///
    /// `loads[k]` must carry id `k + 1`.
    pub fn from_loads(loads: &[Load]) -> Self {
        let size = loads.len() + 1;
        let mut pickups = Vec::with_capacity(size);
        let mut dropoffs = Vec::with_capacity(size);
        pickups.push(Point::ORIGIN);
        dropoffs.push(Point::ORIGIN);
        for load in loads {
            debug_assert_eq!(load.id(), pickups.len(), "load ids must be dense from 1");
            pickups.push(load.pickup());
            dropoffs.push(load.dropoff());
        }

        let mut dm = Self::new(size);
        for (from, dropoff) in dropoffs.iter().enumerate() {
            for (to, pickup) in pickups.iter().enumerate() {
                dm.set(from, to, dropoff.squared_distance(pickup));
            }
        }
        dm
    }

    /// Returns the squared distance from the dropoff of `from` to the pickup
    /// of `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> u64 {
        self.data[from * self.size + to]
    }

    /// Sets the squared distance from `from` to `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: u64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of rows (loads plus the depot).
    pub fn size(&self) -> usize {
        self.size
    }
}
