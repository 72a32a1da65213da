//! Load and driver position types.

use serde::{Deserialize, Serialize};

use super::Point;

/// Identifier of a load. Ids are dense and start at 1.
pub type LoadId = usize;

/// A pickup-then-dropoff delivery task.
///
/// Loads are immutable; whether a load has been served is tracked by the
/// [`LoadSet`](super::LoadSet) of the trial that serves it.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0, 0), Point::new(3, 4));
/// assert_eq!(load.id(), 1);
/// assert_eq!(load.delivery_squared_distance(), 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Load {
    id: LoadId,
    pickup: Point,
    dropoff: Point,
}

impl Load {
    /// Creates a load.
    pub fn new(id: LoadId, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
        }
    }

    /// Load id (1-based).
    pub fn id(&self) -> LoadId {
        self.id
    }

    /// Where the load is collected.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is delivered.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Squared length of the pickup → dropoff leg.
    pub fn delivery_squared_distance(&self) -> u64 {
        self.pickup.squared_distance(&self.dropoff)
    }
}

/// Where a driver currently stands.
///
/// Home is the depot at the origin. It is not a load: it never appears in a
/// route and is never marked completed. `At(id)` means the driver is at the
/// dropoff point of load `id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    /// The depot at [`Point::ORIGIN`].
    Home,
    /// The dropoff point of a load.
    At(LoadId),
}

impl Position {
    /// Row/column of this position in the squared distance matrix.
    ///
    /// Home occupies index 0, load `id` occupies index `id`.
    pub fn index(self) -> usize {
        match self {
            Position::Home => 0,
            Position::At(id) => id,
        }
    }

    /// Returns `true` if this is the depot.
    pub fn is_home(self) -> bool {
        matches!(self, Position::Home)
    }
}
