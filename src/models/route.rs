//! Driver route type.

use serde::{Deserialize, Serialize};

use super::LoadId;

/// The ordered loads served by one driver during one shift.
///
/// A route starts and ends at the depot, which is not stored in `load_ids`.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::Route;
///
/// let route = Route::new(vec![3, 1, 2], 120);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.to_line(), "3,1,2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    load_ids: Vec<LoadId>,
    shift_squared_distance: u64,
}

impl Route {
    /// Creates a route from its load sequence and accumulated squared
    /// distance (including the return home).
    pub fn new(load_ids: Vec<LoadId>, shift_squared_distance: u64) -> Self {
        Self {
            load_ids,
            shift_squared_distance,
        }
    }

    /// Load ids in service order.
    pub fn load_ids(&self) -> &[LoadId] {
        &self.load_ids
    }

    /// Number of loads served.
    pub fn len(&self) -> usize {
        self.load_ids.len()
    }

    /// Returns `true` if the driver served nothing.
    pub fn is_empty(&self) -> bool {
        self.load_ids.is_empty()
    }

    /// Sum of squared leg distances driven during the shift.
    pub fn shift_squared_distance(&self) -> u64 {
        self.shift_squared_distance
    }

    /// Comma-joined load ids, e.g. `"4,1,7"`.
    pub fn to_line(&self) -> String {
        self.load_ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}
