//! Rectangle clipping operations for rasters
//!
//! Functions for extracting rectangular sub-regions. A partial clip copies
//! the selected pixels into a freshly allocated raster; a clip covering the
//! whole image returns a handle sharing the source buffer.

use super::{Raster, RasterData};
use crate::bbox::BoundingBox;
use crate::error::{Error, Result};
use std::sync::Arc;

impl Raster {
    /// Extract a rectangular sub-region from the image.
    ///
    /// If the rectangle extends beyond the image bounds, it is clipped to the
    /// valid region.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The requested width or height is 0
    /// - The rectangle origin is outside the image bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use sheetcut_core::Raster;
    ///
    /// let raster = Raster::new(100, 80).unwrap();
    /// let clipped = raster.clip_rectangle(80, 60, 50, 50).unwrap();
    /// assert_eq!(clipped.width(), 20);
    /// assert_eq!(clipped.height(), 20);
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Raster> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle has zero dimension: {}x{}",
                w, h
            )));
        }

        let src_w = self.width();
        let src_h = self.height();

        if x >= src_w || y >= src_h {
            return Err(Error::InvalidParameter(format!(
                "clip rectangle origin ({}, {}) is outside image bounds ({}x{})",
                x, y, src_w, src_h
            )));
        }

        let clip_w = w.min(src_w - x);
        let clip_h = h.min(src_h - y);

        // Whole image requested: share instead of copying
        if clip_w == src_w && clip_h == src_h {
            return Ok(self.clone());
        }

        let mut data = Vec::with_capacity(clip_w as usize * clip_h as usize);
        for row in y..y + clip_h {
            let src = self.row_data(row);
            data.extend_from_slice(&src[x as usize..(x + clip_w) as usize]);
        }

        Ok(Raster {
            inner: Arc::new(RasterData {
                width: clip_w,
                height: clip_h,
                data,
            }),
        })
    }

    /// Extract the region described by `region`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Raster::clip_rectangle`].
    pub fn clip_to_box(&self, region: &BoundingBox) -> Result<Raster> {
        self.clip_rectangle(region.x, region.y, region.w, region.h)
    }
}
