//! Plain rectangle math shared by every other module.
//!
//! All values are CSS pixels in the host's client coordinate space. Positions
//! name the top-left corner and may be negative; sizes are never negative once
//! they have passed through the resize calculator.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use serde::{Deserialize, Serialize};

/// A pointer location or an element offset.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Component-wise `self - origin`.
    #[must_use]
    pub fn delta_from(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// Box dimensions of an element.
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
}

/// The host element's current rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Geometry {
    pub position: Point,
    pub size: Size,
}

impl Geometry {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { position: Point::new(x, y), size: Size::new(width, height) }
    }

    /// Absolute coordinates of the four sides.
    #[must_use]
    pub fn edges(&self) -> Edges {
        Edges {
            left: self.position.x,
            top: self.position.y,
            right: self.position.x + self.size.width,
            bottom: self.position.y + self.size.height,
        }
    }
}

/// Absolute side coordinates of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edges {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}
