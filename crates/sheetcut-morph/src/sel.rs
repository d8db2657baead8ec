//! Structuring Element (SEL) for morphological operations
//!
//! Every element here is a solid rectangle ("brick"); the origin sits at
//! (`width / 2`, `height / 2`).

use crate::{MorphError, MorphResult};

/// Rectangular structuring element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sel {
    width: u32,
    height: u32,
    cx: u32,
    cy: u32,
}

impl Sel {
    /// Create a rectangular "brick" structuring element
    pub fn create_brick(width: u32, height: u32) -> MorphResult<Self> {
        if width == 0 || height == 0 {
            return Err(MorphError::InvalidSel(format!(
                "structuring element must be non-empty: {}x{}",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            cx: width / 2,
            cy: height / 2,
        })
    }

    /// Create a square structuring element
    pub fn create_square(size: u32) -> MorphResult<Self> {
        Self::create_brick(size, size)
    }

    /// Get the width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the origin x coordinate
    #[inline]
    pub fn origin_x(&self) -> u32 {
        self.cx
    }

    /// Get the origin y coordinate
    #[inline]
    pub fn origin_y(&self) -> u32 {
        self.cy
    }

    /// Number of hit elements
    pub fn hit_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether the element covers a single pixel
    pub fn is_identity(&self) -> bool {
        self.width == 1 && self.height == 1
    }
}
