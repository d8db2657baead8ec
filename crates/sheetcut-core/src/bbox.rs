//! BoundingBox - Rectangle regions
//!
//! Rectangles are expressed in the pixel coordinate space of a raster,
//! with the origin at the upper-left corner.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A small `Copy` type. Coordinates are unsigned because every box in this
/// workspace lives inside some raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BoundingBox {
    /// Left x coordinate
    pub x: u32,
    /// Top y coordinate
    pub y: u32,
    /// Width
    pub w: u32,
    /// Height
    pub h: u32,
}

impl BoundingBox {
    /// Create a new box
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Create a box covering a whole `width` x `height` image.
    pub const fn full(width: u32, height: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            w: width,
            h: height,
        }
    }

    /// Create a box from inclusive-exclusive corner coordinates.
    ///
    /// # Errors
    ///
    /// Returns an error if `x2 < x1` or `y2 < y1`.
    pub fn from_edges(x1: u32, y1: u32, x2: u32, y2: u32) -> Result<Self> {
        if x2 < x1 || y2 < y1 {
            return Err(Error::InvalidParameter(format!(
                "box edges out of order: ({}, {}) -> ({}, {})",
                x1, y1, x2, y2
            )));
        }
        Ok(Self {
            x: x1,
            y: y1,
            w: x2 - x1,
            h: y2 - y1,
        })
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Length of the shorter side
    #[inline]
    pub fn min_side(&self) -> u32 {
        self.w.min(self.h)
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Check whether the box lies entirely inside a `width` x `height` image.
    #[inline]
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    /// Check if this box contains another box
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Check if this box overlaps with another
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Compute the intersection of two boxes
    pub fn intersect(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(BoundingBox {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Translate the box by a non-negative offset
    pub fn translate(&self, dx: u32, dy: u32) -> BoundingBox {
        BoundingBox {
            x: self.x + dx,
            y: self.y + dy,
            w: self.w,
            h: self.h,
        }
    }

    /// Clip the box to fit within bounds
    pub fn clip(&self, width: u32, height: u32) -> Option<BoundingBox> {
        self.intersect(&BoundingBox::full(width, height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let b = BoundingBox::new(10, 20, 30, 40);
        assert_eq!(b.right(), 40);
        assert_eq!(b.bottom(), 60);
        assert_eq!(b.area(), 1200);
        assert_eq!(b.min_side(), 30);
    }

    #[test]
    fn test_from_edges() {
        let b = BoundingBox::from_edges(2, 3, 12, 8).unwrap();
        assert_eq!(b, BoundingBox::new(2, 3, 10, 5));
        assert!(BoundingBox::from_edges(5, 0, 4, 1).is_err());
    }

    #[test]
    fn test_intersect_and_overlap() {
        let a = BoundingBox::new(0, 0, 10, 10);
        let b = BoundingBox::new(5, 5, 10, 10);
        let c = BoundingBox::new(10, 0, 5, 5);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert_eq!(a.intersect(&b), Some(BoundingBox::new(5, 5, 5, 5)));
        assert_eq!(a.intersect(&c), None);
    }

    #[test]
    fn test_clip_and_contains() {
        let b = BoundingBox::new(90, 90, 20, 20);
        assert_eq!(b.clip(100, 100), Some(BoundingBox::new(90, 90, 10, 10)));
        assert!(!b.fits_within(100, 100));
        let outer = BoundingBox::full(100, 100);
        assert!(outer.contains_box(&BoundingBox::new(1, 1, 98, 98)));
        assert!(!outer.contains_box(&b));
    }
}
