//! Bounded nearest-candidate selection.
//!
//! Candidates are kept in ascending distance order by insertion, one pass over
//! the loads, O(K) per insert. No full sort of the candidate set is done,
//! which suits the usual case of K much smaller than the number of loads.

use crate::models::{LoadId, LoadSet, Position};

/// A candidate paired with its distance from the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor<T> {
    /// Squared distance to the candidate.
    pub distance: u64,
    /// The candidate itself.
    pub item: T,
}

/// Up to `capacity` items with the smallest distances, in ascending order.
///
/// An item inserted with the same distance as one already held is placed
/// before it. Once full, inserting a nearer item evicts the farthest.
///
/// # Examples
///
/// ```
/// use shift_dispatch::constructive::Neighborhood;
///
/// let mut hood = Neighborhood::with_capacity(2);
/// hood.insert(9, 'a');
/// hood.insert(1, 'b');
/// hood.insert(4, 'c');
/// let items: Vec<char> = hood.iter().map(|n| n.item).collect();
/// assert_eq!(items, vec!['b', 'c']);
/// ```
#[derive(Debug, Clone)]
pub struct Neighborhood<T> {
    capacity: usize,
    neighbors: Vec<Neighbor<T>>,
}

impl<T> Neighborhood<T> {
    /// Creates an empty neighborhood holding at most `capacity` items.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            neighbors: Vec::with_capacity(capacity),
        }
    }

    /// Offers an item; keeps it only if it is among the nearest `capacity`.
    pub fn insert(&mut self, distance: u64, item: T) {
        let pos = self
            .neighbors
            .iter()
            .position(|n| distance <= n.distance)
            .unwrap_or(self.neighbors.len());
        if pos >= self.capacity {
            return;
        }
        if self.neighbors.len() == self.capacity {
            self.neighbors.pop();
        }
        self.neighbors.insert(pos, Neighbor { distance, item });
    }

    /// Maximum number of items held.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of items held. Never exceeds [`capacity`](Self::capacity).
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns `true` if nothing was kept.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Returns the `rank`-th nearest item.
    pub fn get(&self, rank: usize) -> Option<&Neighbor<T>> {
        self.neighbors.get(rank)
    }

    /// Iterates from nearest to farthest.
    pub fn iter(&self) -> std::slice::Iter<'_, Neighbor<T>> {
        self.neighbors.iter()
    }
}

/// Collects the `k` uncompleted loads whose pickups are nearest to `from`.
///
/// The load the driver stands at is skipped, as is every completed load.
/// The pool shrinks to the number of loads still open when fewer than `k`
/// remain. An empty result means no candidate remains.
pub fn nearest_candidates(loads: &LoadSet, from: Position, k: usize) -> Neighborhood<LoadId> {
    let mut hood = Neighborhood::with_capacity(k.min(loads.remaining()));
    for id in loads.ids() {
        if Position::At(id) == from || loads.is_completed(id) {
            continue;
        }
        hood.insert(loads.distance(from, id), id);
    }
    hood
}
