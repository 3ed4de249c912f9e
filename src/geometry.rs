//! Viewport-space points and sizes.
//!
//! All coordinates are CSS pixels measured from the viewport's fixed origin
//! (top-left). `PartialPoint` is the shape the host sometimes delivers for the
//! initial pointer offset, where a coordinate can be missing outright.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use std::ops::Sub;

use serde::{Deserialize, Serialize};

/// A point in viewport space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The viewport origin, also the neutral parent offset.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        subtract(self, rhs)
    }
}

/// Component-wise `a - b`.
#[must_use]
pub fn subtract(a: Point, b: Point) -> Point {
    Point { x: a.x - b.x, y: a.y - b.y }
}

/// A point whose coordinates may each be missing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartialPoint {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
}

impl PartialPoint {
    #[must_use]
    pub fn new(x: Option<f64>, y: Option<f64>) -> Self {
        Self { x, y }
    }

    /// Both coordinates, if both are present and finite.
    ///
    /// A NaN or infinite coordinate is also treated as missing. This is a
    /// defensive choice; hosts are only known to omit coordinates.
    #[must_use]
    pub fn complete(self) -> Option<Point> {
        match (self.x, self.y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some(Point { x, y }),
            _ => None,
        }
    }
}

impl From<Point> for PartialPoint {
    fn from(p: Point) -> Self {
        Self { x: Some(p.x), y: Some(p.y) }
    }
}

/// Measured size of the rendered preview element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Offset from the element's top-left corner to its center.
    #[must_use]
    pub fn center(self) -> Point {
        Point { x: self.width / 2.0, y: self.height / 2.0 }
    }
}
