//! Mask - binary foreground image
//!
//! One byte per pixel, holding 0 (background) or 1 (foreground). The
//! morphology crate operates on this type, and [`Mask::foreground_bbox`]
//! turns the result into a crop rectangle.

use crate::bbox::BoundingBox;
use crate::error::{Error, Result};

/// Binary mask, row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Mask {
    /// Create an all-background mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize],
        })
    }

    /// Create a mask by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self>
    where
        F: FnMut(u32, u32) -> bool,
    {
        let mut mask = Self::new(width, height)?;
        for y in 0..height {
            let row = mask.row_mut(y);
            for (x, v) in row.iter_mut().enumerate() {
                *v = f(x as u32, y) as u8;
            }
        }
        Ok(mask)
    }

    /// Mask width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw values, row-major
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw values, row-major
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Row `y`
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Mutable row `y`
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let w = self.width as usize;
        let start = y as usize * w;
        &mut self.data[start..start + w]
    }

    /// Whether (x, y) is foreground. Out-of-bounds reads are background.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.data[y as usize * self.width as usize + x as usize] != 0
    }

    /// Set (x, y) to foreground or background.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, on: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize * self.width as usize + x as usize,
                len: self.data.len(),
            });
        }
        self.data[y as usize * self.width as usize + x as usize] = on as u8;
        Ok(())
    }

    /// Number of foreground pixels.
    pub fn count_foreground(&self) -> u64 {
        self.data.iter().filter(|&&v| v != 0).count() as u64
    }

    /// Smallest box enclosing every foreground pixel.
    ///
    /// Returns `None` when the mask has no foreground.
    pub fn foreground_bbox(&self) -> Option<BoundingBox> {
        let has_fg = |row: &[u8]| row.iter().any(|&v| v != 0);

        let miny = (0..self.height).find(|&y| has_fg(self.row(y)))?;
        let maxy = (miny..self.height)
            .rev()
            .find(|&y| has_fg(self.row(y)))
            .unwrap_or(miny);

        let mut minx = self.width;
        let mut maxx = 0;
        for y in miny..=maxy {
            let row = self.row(y);
            if let Some(first) = row.iter().position(|&v| v != 0) {
                minx = minx.min(first as u32);
            }
            if let Some(last) = row.iter().rposition(|&v| v != 0) {
                maxx = maxx.max(last as u32);
            }
        }

        Some(BoundingBox::new(minx, miny, maxx - minx + 1, maxy - miny + 1))
    }
}
