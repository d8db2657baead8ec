//! IntensityGrid - 8-bit luminance projection
//!
//! A transient single-channel view of a raster, produced by
//! [`Raster::to_intensity`](crate::Raster::to_intensity). Provides the
//! per-line averages that drive blank-span detection.

use crate::error::{Error, Result};
use crate::span::ScanAxis;

/// Grid of 8-bit luminance values, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntensityGrid {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl IntensityGrid {
    /// Assemble a grid from raw values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero and
    /// [`Error::InvalidParameter`] if `data.len() != width * height`.
    pub fn from_parts(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        if data.len() != width as usize * height as usize {
            return Err(Error::InvalidParameter(format!(
                "intensity buffer of {} values does not match {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self::from_raw(width, height, data))
    }

    /// Caller guarantees `data.len() == width * height` with both non-zero.
    pub(crate) fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Grid width
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw values, row-major
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Value at (x, y), or `None` when out of bounds
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Number of lines along `axis` (rows for [`ScanAxis::Rows`]).
    #[inline]
    pub fn line_count(&self, axis: ScanAxis) -> u32 {
        match axis {
            ScanAxis::Rows => self.height,
            ScanAxis::Columns => self.width,
        }
    }

    /// Mean intensity of row `y`, or `None` when out of range.
    pub fn row_mean(&self, y: u32) -> Option<f64> {
        if y >= self.height {
            return None;
        }
        let w = self.width as usize;
        let start = y as usize * w;
        let sum: u64 = self.data[start..start + w].iter().map(|&v| v as u64).sum();
        Some(sum as f64 / w as f64)
    }

    /// Mean intensity of column `x`, or `None` when out of range.
    pub fn column_mean(&self, x: u32) -> Option<f64> {
        if x >= self.width {
            return None;
        }
        let sum: u64 = self
            .data
            .iter()
            .skip(x as usize)
            .step_by(self.width as usize)
            .map(|&v| v as u64)
            .sum();
        Some(sum as f64 / self.height as f64)
    }

    /// Mean intensity of line `i` along `axis`.
    pub fn line_mean(&self, axis: ScanAxis, i: u32) -> Option<f64> {
        match axis {
            ScanAxis::Rows => self.row_mean(i),
            ScanAxis::Columns => self.column_mean(i),
        }
    }

    /// Mean intensity of every line along `axis`, computed in one pass.
    pub fn line_means(&self, axis: ScanAxis) -> Vec<f64> {
        let w = self.width as usize;
        match axis {
            ScanAxis::Rows => self
                .data
                .chunks_exact(w)
                .map(|row| row.iter().map(|&v| v as u64).sum::<u64>() as f64 / w as f64)
                .collect(),
            ScanAxis::Columns => {
                let mut sums = vec![0u64; w];
                for row in self.data.chunks_exact(w) {
                    for (s, &v) in sums.iter_mut().zip(row) {
                        *s += v as u64;
                    }
                }
                sums.into_iter()
                    .map(|s| s as f64 / self.height as f64)
                    .collect()
            }
        }
    }
}
