//! Axis-aligned pixel regions derived from detection quadrilaterals.

use crate::processors::BoundingBox;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangular region in image pixel coordinates.
///
/// Regions are always kept inside image bounds: `x + width <= image_width`
/// and `y + height <= image_height` hold for every region produced by
/// [`Region::from_quad`] or [`Region::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// X-coordinate of the top-left corner.
    pub x: u32,
    /// Y-coordinate of the top-left corner.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Region {
    /// Creates a new region without bounds checking.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Derives the axis-aligned region covered by a detection quadrilateral.
    ///
    /// Only the top-left and bottom-right corners are used; any rotation of
    /// the quad is discarded, so a rotated text box may be under- or
    /// over-covered. Coordinates are truncated to integers and clamped into
    /// the image bounds.
    ///
    /// # Arguments
    ///
    /// * `quad` - The detection quadrilateral.
    /// * `image_width` - Width of the source image in pixels.
    /// * `image_height` - Height of the source image in pixels.
    ///
    /// # Returns
    ///
    /// The clamped region, or `None` when the quad lacks the required
    /// corners or covers no pixels inside the image.
    pub fn from_quad(quad: &BoundingBox, image_width: u32, image_height: u32) -> Option<Self> {
        let top_left = quad.top_left()?;
        let bottom_right = quad.bottom_right()?;

        let x0 = (top_left.x as i64).max(0);
        let y0 = (top_left.y as i64).max(0);
        let x1 = (bottom_right.x as i64).min(image_width as i64);
        let y1 = (bottom_right.y as i64).min(image_height as i64);

        if x1 <= x0 || y1 <= y0 {
            return None;
        }

        Some(Self {
            x: x0 as u32,
            y: y0 as u32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }

    /// Returns this region clamped into the given image bounds.
    pub fn clamped(self, image_width: u32, image_height: u32) -> Self {
        let x = self.x.min(image_width);
        let y = self.y.min(image_height);
        Self {
            x,
            y,
            width: self.width.min(image_width - x),
            height: self.height.min(image_height - y),
        }
    }

    /// Returns true when the region covers no pixels.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::{BoundingBox, Point};

    #[test]
    fn from_quad_uses_opposite_corners() {
        let quad = BoundingBox::from_coords(10.0, 10.0, 60.0, 30.0);
        let region = Region::from_quad(&quad, 200, 100).unwrap();
        assert_eq!(region, Region::new(10, 10, 50, 20));
    }

    #[test]
    fn from_quad_clamps_negative_corners() {
        let quad = BoundingBox::from_coords(-5.0, -8.0, 20.0, 12.0);
        let region = Region::from_quad(&quad, 100, 100).unwrap();
        assert_eq!(region, Region::new(0, 0, 20, 12));
    }

    #[test]
    fn from_quad_clamps_overhanging_corners() {
        let quad = BoundingBox::from_coords(90.0, 95.0, 130.0, 140.0);
        let region = Region::from_quad(&quad, 100, 100).unwrap();
        assert_eq!(region, Region::new(90, 95, 10, 5));
        assert!(region.x + region.width <= 100);
        assert!(region.y + region.height <= 100);
    }

    #[test]
    fn from_quad_rejects_regions_outside_image() {
        let quad = BoundingBox::from_coords(150.0, 150.0, 180.0, 180.0);
        assert!(Region::from_quad(&quad, 100, 100).is_none());
    }

    #[test]
    fn from_quad_rejects_inverted_corners() {
        let quad = BoundingBox::from_coords(50.0, 50.0, 10.0, 10.0);
        assert!(Region::from_quad(&quad, 100, 100).is_none());
    }

    #[test]
    fn from_quad_ignores_rotation() {
        // A rotated quad keeps only its first and third corners.
        let quad = BoundingBox::new(vec![
            Point::new(10.0, 20.0),
            Point::new(58.0, 12.0),
            Point::new(62.0, 28.0),
            Point::new(14.0, 36.0),
        ]);
        let region = Region::from_quad(&quad, 200, 100).unwrap();
        assert_eq!(region, Region::new(10, 20, 52, 8));
    }

    #[test]
    fn clamped_never_exceeds_bounds() {
        let region = Region::new(80, 90, 50, 50).clamped(100, 100);
        assert_eq!(region, Region::new(80, 90, 20, 10));

        let outside = Region::new(120, 130, 10, 10).clamped(100, 100);
        assert!(outside.is_empty());
    }
}
