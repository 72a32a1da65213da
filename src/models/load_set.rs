//! The complete set of loads of one problem.

use std::sync::Arc;

use crate::distance::SquaredDistanceMatrix;

use super::{Load, LoadId, Position};

/// All loads of a problem, their shared distance matrix, and the completion
/// state of one trial.
///
/// The loads and the matrix are computed once and shared (read-only) between
/// every copy produced by [`reset_clone`](LoadSet::reset_clone). Completion
/// flags belong to each copy.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::{Load, LoadSet, Point};
///
/// let mut loads = LoadSet::new(vec![
///     Load::new(1, Point::new(1, 0), Point::new(2, 0)),
///     Load::new(2, Point::new(3, 0), Point::new(4, 0)),
/// ]);
/// assert_eq!(loads.len(), 2);
///
/// loads.mark_completed(1);
/// assert_eq!(loads.remaining(), 1);
///
/// let fresh = loads.reset_clone();
/// assert_eq!(fresh.remaining(), 2);
/// assert!(loads.is_completed(1));
/// ```
#[derive(Debug, Clone)]
pub struct LoadSet {
    loads: Arc<[Load]>,
    matrix: Arc<SquaredDistanceMatrix>,
    completed: Vec<bool>,
    remaining: usize,
}

impl LoadSet {
    /// Builds a load set and its distance matrix.
    ///
    /// `loads[k]` must carry id `k + 1`; the depot is added implicitly.
    /// Callers reading external input are expected to enforce this (see
    /// [`crate::reader`]).
    pub fn new(loads: Vec<Load>) -> Self {
        let matrix = SquaredDistanceMatrix::from_loads(&loads);
        let remaining = loads.len();
        Self {
            completed: vec![false; remaining + 1],
            loads: loads.into(),
            matrix: Arc::new(matrix),
            remaining,
        }
    }

    /// Returns an independent copy in which no load is completed.
    ///
    /// Loads and the distance matrix are shared with `self`.
    pub fn reset_clone(&self) -> Self {
        Self {
            loads: Arc::clone(&self.loads),
            matrix: Arc::clone(&self.matrix),
            completed: vec![false; self.loads.len() + 1],
            remaining: self.loads.len(),
        }
    }

    /// Number of loads, excluding the depot.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if there are no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }

    /// All loads in id order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Returns the load with the given id, if it exists.
    pub fn load(&self, id: LoadId) -> Option<&Load> {
        id.checked_sub(1).and_then(|k| self.loads.get(k))
    }

    /// Iterates over every load id.
    pub fn ids(&self) -> impl Iterator<Item = LoadId> {
        1..=self.loads.len()
    }

    /// The shared squared distance matrix.
    pub fn matrix(&self) -> &SquaredDistanceMatrix {
        &self.matrix
    }

    /// Squared distance from the position `from` to the pickup of `to`.
    pub fn distance(&self, from: Position, to: LoadId) -> u64 {
        self.matrix.get(from.index(), to)
    }

    /// Squared distance from `from` back to the depot.
    pub fn distance_home(&self, from: Position) -> u64 {
        self.matrix.get(from.index(), Position::Home.index())
    }

    /// Squared length of the pickup → dropoff leg of `id`.
    pub fn delivery_distance(&self, id: LoadId) -> u64 {
        self.matrix.get(id, id)
    }

    /// Returns `true` if the load has been served in this trial.
    pub fn is_completed(&self, id: LoadId) -> bool {
        self.completed[id]
    }

    /// Marks a load as served. Id 0 is the depot and is ignored.
    pub fn mark_completed(&mut self, id: LoadId) {
        if id == Position::Home.index() {
            return;
        }
        if !self.completed[id] {
            self.completed[id] = true;
            self.remaining -= 1;
        }
    }

    /// Number of loads not yet served.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Returns `true` once every load has been served.
    pub fn is_finished(&self) -> bool {
        self.remaining == 0
    }
}
