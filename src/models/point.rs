//! Integer planar points.

use serde::{Deserialize, Serialize};

/// A location with integer coordinates.
///
/// Input coordinates are rounded once, on construction, and every distance
/// in the crate is computed on the rounded values. The error this introduces
/// is bounded per point and shrinks relative to route length as instances
/// grow.
///
/// # Examples
///
/// ```
/// use shift_dispatch::models::Point;
///
/// let p = Point::from_coordinates(-9.100071078494038, -48.89301103772511);
/// assert_eq!(p, Point::new(-9, -49));
/// assert_eq!(Point::ORIGIN.squared_distance(&Point::new(3, 4)), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// The depot location.
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    /// Creates a point from integer coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates a point by rounding floating-point coordinates.
    ///
    /// Halfway values round away from zero (`f64::round`). Values outside the
    /// `i32` range saturate; NaN becomes 0.
    pub fn from_coordinates(x: f64, y: f64) -> Self {
        Self {
            x: x.round() as i32,
            y: y.round() as i32,
        }
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Squared Euclidean distance to another point.
    ///
    /// Each axis difference is squared in `u64`; the sum saturates at
    /// `u64::MAX` for points near opposite corners of the `i32` plane.
    pub fn squared_distance(&self, other: &Point) -> u64 {
        let dx = (i64::from(other.x) - i64::from(self.x)).unsigned_abs();
        let dy = (i64::from(other.y) - i64::from(self.y)).unsigned_abs();
        (dx * dx).saturating_add(dy * dy)
    }
}
