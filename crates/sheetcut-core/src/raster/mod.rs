//! Raster - The main image container
//!
//! A `Raster` is a 24-bit RGB image: every pixel is one packed 32-bit word
//! in `0xRRGGBBAA` order (see [`crate::color`]). Rows are stored contiguously
//! without padding.
//!
//! # Ownership model
//!
//! `Raster` uses `Arc` for cheap cloning (shared ownership).
//! To modify pixel data, convert to `RasterMut` via [`Raster::try_into_mut`]
//! or [`Raster::to_mut`], then convert back with `Into<Raster>`.

mod clip;
mod convert;

use crate::bbox::BoundingBox;
use crate::color;
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal raster data
#[derive(Debug)]
struct RasterData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Packed pixels, row-major
    data: Vec<u32>,
}

impl RasterData {
    fn alloc(width: u32, height: u32, fill: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .ok_or(Error::InvalidDimension { width, height })?;
        Ok(RasterData {
            width,
            height,
            data: vec![fill; len],
        })
    }
}

/// Raster - Main image container
///
/// # Examples
///
/// ```
/// use sheetcut_core::Raster;
///
/// let raster = Raster::new(640, 480).unwrap();
/// assert_eq!(raster.width(), 640);
/// assert_eq!(raster.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    inner: Arc<RasterData>,
}

impl Raster {
    /// Create a new black raster.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Self::new_filled(width, height, color::BLACK)
    }

    /// Create a new raster with every pixel set to `pixel`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new_filled(width: u32, height: u32, pixel: u32) -> Result<Self> {
        Ok(Raster {
            inner: Arc::new(RasterData::alloc(width, height, pixel)?),
        })
    }

    /// Build a raster from interleaved 8-bit RGB samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for zero dimensions and
    /// [`Error::InvalidParameter`] if `rgb` is not exactly `3 * width * height`
    /// bytes long.
    pub fn from_rgb_bytes(width: u32, height: u32, rgb: &[u8]) -> Result<Self> {
        let mut inner = RasterData::alloc(width, height, color::BLACK)?;
        if rgb.len() != inner.data.len() * 3 {
            return Err(Error::InvalidParameter(format!(
                "expected {} RGB bytes for {}x{}, got {}",
                inner.data.len() * 3,
                width,
                height,
                rgb.len()
            )));
        }
        for (dst, px) in inner.data.iter_mut().zip(rgb.chunks_exact(3)) {
            *dst = color::compose_rgb(px[0], px[1], px[2]);
        }
        Ok(Raster {
            inner: Arc::new(inner),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Length of the shorter side.
    #[inline]
    pub fn min_dimension(&self) -> u32 {
        self.inner.width.min(self.inner.height)
    }

    /// Box covering the whole raster.
    #[inline]
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::full(self.inner.width, self.inner.height)
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get a single row of pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data(&self, y: u32) -> &[u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &self.inner.data[start..start + w]
    }

    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.get_pixel_unchecked(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.data[y as usize * self.inner.width as usize + x as usize]
    }

    /// Get RGB values at (x, y).
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        self.get_pixel(x, y).map(color::extract_rgb)
    }

    /// The four corner pixels: top-left, top-right, bottom-left, bottom-right.
    pub fn corner_pixels(&self) -> [u32; 4] {
        let r = self.inner.width - 1;
        let b = self.inner.height - 1;
        [
            self.get_pixel_unchecked(0, 0),
            self.get_pixel_unchecked(r, 0),
            self.get_pixel_unchecked(0, b),
            self.get_pixel_unchecked(r, b),
        ]
    }

    /// Interleaved 8-bit RGB samples, row-major.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.inner.data.len() * 3);
        for &p in &self.inner.data {
            let (r, g, b) = color::extract_rgb(p);
            out.extend_from_slice(&[r, g, b]);
        }
        out
    }

    /// Number of live handles to the shared pixel data.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Create a deep copy of this raster.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Raster {
            inner: Arc::new(RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<RasterMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(RasterMut { inner: data }),
            Err(arc) => Err(Raster { inner: arc }),
        }
    }

    /// Create a mutable copy of this raster.
    pub fn to_mut(&self) -> RasterMut {
        RasterMut {
            inner: RasterData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }
}

impl PartialEq for Raster {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.width == other.inner.width
                && self.inner.height == other.inner.height
                && self.inner.data == other.inner.data)
    }
}

impl Eq for Raster {}

/// Mutable raster
///
/// Allows modification of pixel data. Convert back to an immutable
/// [`Raster`] using `Into<Raster>`.
#[derive(Debug)]
pub struct RasterMut {
    inner: RasterData,
}

impl RasterMut {
    /// Create a new black raster for filling in place.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(RasterMut {
            inner: RasterData::alloc(width, height, color::BLACK)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get raw access to the packed pixels.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.inner.data
    }

    /// Get mutable access to the packed pixels.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u32] {
        &mut self.inner.data
    }

    /// Get mutable access to a specific row.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_data_mut(&mut self, y: u32) -> &mut [u32] {
        let w = self.inner.width as usize;
        let start = y as usize * w;
        &mut self.inner.data[start..start + w]
    }

    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(self.inner.data[y as usize * self.inner.width as usize + x as usize])
    }

    /// Set a pixel value at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if x >= self.inner.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.inner.width as usize,
            });
        }
        if y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.inner.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        let idx = y as usize * self.inner.width as usize + x as usize;
        self.inner.data[idx] = val;
    }

    /// Set an RGB pixel at (x, y).
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        self.set_pixel(x, y, color::compose_rgb(r, g, b))
    }

    /// Fill the part of `region` that lies inside the raster with `pixel`.
    ///
    /// Regions entirely outside the raster are a no-op.
    pub fn fill_rect(&mut self, region: &BoundingBox, pixel: u32) {
        let Some(clipped) = region.clip(self.inner.width, self.inner.height) else {
            return;
        };
        for y in clipped.y..clipped.bottom() {
            let row = self.row_data_mut(y);
            row[clipped.x as usize..clipped.right() as usize].fill(pixel);
        }
    }

    /// Set every pixel to `pixel`.
    pub fn fill(&mut self, pixel: u32) {
        self.inner.data.fill(pixel);
    }
}

impl From<RasterMut> for Raster {
    fn from(raster_mut: RasterMut) -> Self {
        Raster {
            inner: Arc::new(raster_mut.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let r = Raster::new(100, 200).unwrap();
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 200);
        assert_eq!(r.min_dimension(), 100);
        assert_eq!(r.data().len(), 20_000);
        assert_eq!(r.get_pixel(0, 0), Some(color::BLACK));
    }

    #[test]
    fn test_raster_creation_invalid() {
        assert!(Raster::new(0, 100).is_err());
        assert!(Raster::new(100, 0).is_err());
    }

    #[test]
    fn test_raster_clone_shares_data() {
        let r1 = Raster::new(10, 10).unwrap();
        let r2 = r1.clone();
        assert_eq!(r1.ref_count(), 2);
        assert_eq!(r2.ref_count(), 2);
        let r3 = r1.deep_clone();
        assert_eq!(r3.ref_count(), 1);
        assert_eq!(r1, r3);
    }

    #[test]
    fn test_try_into_mut() {
        let r = Raster::new(4, 4).unwrap();
        let shared = r.clone();
        let r = r.try_into_mut().unwrap_err();
        drop(shared);
        let mut m = r.try_into_mut().unwrap();
        m.set_rgb(1, 2, 10, 20, 30).unwrap();
        let r: Raster = m.into();
        assert_eq!(r.get_rgb(1, 2), Some((10, 20, 30)));
    }

    #[test]
    fn test_set_pixel_out_of_bounds() {
        let mut m = Raster::new(4, 4).unwrap().to_mut();
        assert!(m.set_pixel(4, 0, 0).is_err());
        assert!(m.set_pixel(0, 4, 0).is_err());
    }

    #[test]
    fn test_rgb_bytes_roundtrip() {
        let bytes: Vec<u8> = (0..2 * 3 * 3).map(|v| v as u8 * 10).collect();
        let r = Raster::from_rgb_bytes(3, 2, &bytes).unwrap();
        assert_eq!(r.get_rgb(1, 0), Some((30, 40, 50)));
        assert_eq!(r.to_rgb_bytes(), bytes);
        assert!(Raster::from_rgb_bytes(3, 2, &bytes[1..]).is_err());
    }

    #[test]
    fn test_corner_pixels() {
        let mut m = Raster::new_filled(5, 4, color::WHITE).unwrap().to_mut();
        m.set_rgb(0, 0, 1, 0, 0).unwrap();
        m.set_rgb(4, 0, 2, 0, 0).unwrap();
        m.set_rgb(0, 3, 3, 0, 0).unwrap();
        m.set_rgb(4, 3, 4, 0, 0).unwrap();
        let r: Raster = m.into();
        let reds: Vec<u8> = r.corner_pixels().iter().map(|&p| color::red(p)).collect();
        assert_eq!(reds, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut m = Raster::new(10, 10).unwrap().to_mut();
        m.fill_rect(&BoundingBox::new(8, 8, 5, 5), color::WHITE);
        let r: Raster = m.into();
        assert_eq!(r.get_pixel(9, 9), Some(color::WHITE));
        assert_eq!(r.get_pixel(7, 7), Some(color::BLACK));
    }
}
