//! Geometric primitives for detection quadrilaterals.
//!
//! Text detectors report each candidate as a quadrilateral of four ordered
//! points (top-left, top-right, bottom-right, bottom-left). This module
//! provides the point and polygon types those quads are expressed in.

use serde::{Deserialize, Serialize};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    /// X-coordinate of the point.
    pub x: f32,
    /// Y-coordinate of the point.
    pub y: f32,
}

impl Point {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A bounding box represented by a collection of points.
///
/// For text detections this is a quadrilateral whose points are ordered
/// top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// The points that define the bounding box.
    pub points: Vec<Point>,
}

impl BoundingBox {
    /// Creates a new bounding box from a vector of points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Creates an axis-aligned bounding box from corner coordinates.
    ///
    /// # Arguments
    ///
    /// * `x1` - The x-coordinate of the top-left corner.
    /// * `y1` - The y-coordinate of the top-left corner.
    /// * `x2` - The x-coordinate of the bottom-right corner.
    /// * `y2` - The y-coordinate of the bottom-right corner.
    ///
    /// # Returns
    ///
    /// A new `BoundingBox` with four points in quadrilateral order.
    pub fn from_coords(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        let points = vec![
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        Self { points }
    }

    /// Returns the top-left corner of a quadrilateral box, if present.
    pub fn top_left(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns the bottom-right corner of a quadrilateral box, if present.
    pub fn bottom_right(&self) -> Option<Point> {
        self.points.get(2).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_coords_builds_quad_order() {
        let quad = BoundingBox::from_coords(10.0, 10.0, 60.0, 30.0);
        assert_eq!(quad.points.len(), 4);
        assert_eq!(quad.top_left(), Some(Point::new(10.0, 10.0)));
        assert_eq!(quad.bottom_right(), Some(Point::new(60.0, 30.0)));
    }

    #[test]
    fn corners_of_degenerate_box_are_absent() {
        let quad = BoundingBox::new(vec![Point::new(1.0, 1.0)]);
        assert!(quad.top_left().is_some());
        assert!(quad.bottom_right().is_none());
    }
}
