//! Synthetic product sheets
//!
//! Builders that paint flat-colour rectangles onto a flat background, which
//! is enough to exercise every stage of segmentation deterministically.

use crate::error::{TestError, TestResult};
use sheetcut_core::{BoundingBox, Raster, color};

/// A uniformly coloured raster.
pub fn solid(width: u32, height: u32, r: u8, g: u8, b: u8) -> TestResult<Raster> {
    Ok(Raster::new_filled(width, height, color::compose_rgb(r, g, b))?)
}

/// Builder for a sheet made of rectangles on a background.
///
/// Rectangles are painted in insertion order, so later ones overwrite
/// earlier ones where they overlap.
#[derive(Debug, Clone)]
pub struct SheetBuilder {
    width: u32,
    height: u32,
    background: u32,
    rects: Vec<(BoundingBox, u32)>,
}

impl SheetBuilder {
    /// Start a white sheet of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: color::WHITE,
            rects: Vec::new(),
        }
    }

    /// Set the background colour.
    pub fn background(mut self, r: u8, g: u8, b: u8) -> Self {
        self.background = color::compose_rgb(r, g, b);
        self
    }

    /// Paint a rectangle.
    #[allow(clippy::too_many_arguments)]
    pub fn rect(mut self, x: u32, y: u32, w: u32, h: u32, r: u8, g: u8, b: u8) -> Self {
        self.rects
            .push((BoundingBox::new(x, y, w, h), color::compose_rgb(r, g, b)));
        self
    }

    /// Paint a black rectangle.
    pub fn block(self, x: u32, y: u32, w: u32, h: u32) -> Self {
        self.rect(x, y, w, h, 0, 0, 0)
    }

    /// Paint `count` equal black blocks stacked vertically, separated by
    /// `gap` rows of background, starting at the top-left corner.
    pub fn stacked_blocks(self, count: u32, block_w: u32, block_h: u32, gap: u32) -> Self {
        (0..count).fold(self, |sheet, i| {
            sheet.block(0, i * (block_h + gap), block_w, block_h)
        })
    }

    /// Render the sheet.
    ///
    /// # Errors
    ///
    /// Returns [`TestError::InvalidSheet`] if a rectangle lies entirely
    /// outside the sheet, or a core error for a zero-sized sheet.
    pub fn build(&self) -> TestResult<Raster> {
        let base = Raster::new_filled(self.width, self.height, self.background)?;
        let mut canvas = base.to_mut();
        for (region, pixel) in &self.rects {
            if region.clip(self.width, self.height).is_none() {
                return Err(TestError::InvalidSheet(format!(
                    "rectangle {:?} lies outside {}x{} sheet",
                    region, self.width, self.height
                )));
            }
            canvas.fill_rect(region, *pixel);
        }
        Ok(canvas.into())
    }
}
