//! sheetcut-core - Basic data structures for sheet segmentation
//!
//! This crate provides the fundamental data structures used throughout
//! the sheetcut workspace:
//!
//! - [`Raster`] / [`RasterMut`] - 24-bit RGB image container (immutable / mutable)
//! - [`IntensityGrid`] - 8-bit luminance projection of a raster
//! - [`Mask`] - Binary foreground mask
//! - [`BoundingBox`] - Rectangle regions
//! - [`Span`] / [`ScanAxis`] - Blank runs along one axis

pub mod bbox;
pub mod error;
pub mod intensity;
pub mod mask;
pub mod raster;
pub mod span;

pub use bbox::BoundingBox;
pub use error::{Error, Result};
pub use intensity::IntensityGrid;
pub use mask::Mask;
pub use raster::{Raster, RasterMut};
pub use span::{ScanAxis, Span};

/// Color channel helpers for packed 32-bit pixels.
///
/// # Pixel format
///
/// Pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB). The alpha
/// byte is always 255 for rasters produced by this workspace.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Opaque black.
    pub const BLACK: u32 = 0x0000_00ff;
    /// Opaque white.
    pub const WHITE: u32 = 0xffff_ffff;

    /// Fixed-point BT.601 luma weights, scaled by 2^14.
    const LUMA_RED: u32 = 4899;
    const LUMA_GREEN: u32 = 9617;
    const LUMA_BLUE: u32 = 1868;
    const LUMA_SHIFT: u32 = 14;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// Luminance of an RGB triple.
    ///
    /// `Y = 0.299 R + 0.587 G + 0.114 B`, evaluated in 14-bit fixed point
    /// with rounding so the result is bit-exact across platforms.
    #[inline]
    pub fn luma(r: u8, g: u8, b: u8) -> u8 {
        let y = LUMA_RED * r as u32 + LUMA_GREEN * g as u32 + LUMA_BLUE * b as u32;
        ((y + (1 << (LUMA_SHIFT - 1))) >> LUMA_SHIFT) as u8
    }

    /// Euclidean distance between two pixels in RGB space.
    #[inline]
    pub fn distance(p1: u32, p2: u32) -> f32 {
        let (r1, g1, b1) = extract_rgb(p1);
        let (r2, g2, b2) = extract_rgb(p2);
        let dr = r1 as f32 - r2 as f32;
        let dg = g1 as f32 - g2 as f32;
        let db = b1 as f32 - b2 as f32;
        (dr * dr + dg * dg + db * db).sqrt()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_compose_extract() {
            let p = compose_rgb(12, 34, 56);
            assert_eq!(extract_rgb(p), (12, 34, 56));
            assert_eq!(p & 0xff, 255);
        }

        #[test]
        fn test_luma_extremes() {
            assert_eq!(luma(0, 0, 0), 0);
            assert_eq!(luma(255, 255, 255), 255);
        }

        #[test]
        fn test_luma_gray_is_identity() {
            for v in [1u8, 17, 100, 128, 200, 245, 254] {
                assert_eq!(luma(v, v, v), v);
            }
        }

        #[test]
        fn test_luma_primaries() {
            // 0.299 * 255 = 76.2, 0.587 * 255 = 149.7, 0.114 * 255 = 29.1
            assert_eq!(luma(255, 0, 0), 76);
            assert_eq!(luma(0, 255, 0), 150);
            assert_eq!(luma(0, 0, 255), 29);
        }

        #[test]
        fn test_distance() {
            assert_eq!(distance(WHITE, WHITE), 0.0);
            let d = distance(compose_rgb(0, 0, 0), compose_rgb(3, 4, 0));
            assert!((d - 5.0).abs() < 1e-6);
        }
    }
}
