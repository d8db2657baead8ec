//! Background cropping
//!
//! Crops a raster to its visible content. The background colour is taken
//! from the four corners, every pixel far enough from it becomes
//! foreground, and the closed foreground mask gives the crop box. A fixed
//! trim and a scan for wide blank margins then tighten the result.

use crate::{LayoutResult, SegmentOptions};
use sheetcut_core::{BoundingBox, Mask, Raster, ScanAxis, color};
use sheetcut_morph::close_brick;
use tracing::debug;

/// Estimate the background colour as the per-channel median of the four
/// corner pixels.
///
/// With four samples the median is the floor of the mean of the two middle
/// values.
pub fn estimate_background(raster: &Raster) -> u32 {
    let corners = raster.corner_pixels();
    let median = |channel: fn(u32) -> u8| {
        let mut v = corners.map(channel);
        v.sort_unstable();
        ((v[1] as u16 + v[2] as u16) / 2) as u8
    };
    color::compose_rgb(
        median(color::red),
        median(color::green),
        median(color::blue),
    )
}

/// Mark every pixel whose colour distance to `background` exceeds
/// `tolerance`.
pub fn foreground_mask(raster: &Raster, background: u32, tolerance: u32) -> LayoutResult<Mask> {
    let tolerance = tolerance as f32;
    let mut mask = Mask::new(raster.width(), raster.height())?;
    for (dst, &p) in mask.data_mut().iter_mut().zip(raster.data()) {
        *dst = (color::distance(p, background) > tolerance) as u8;
    }
    Ok(mask)
}

/// Box left after shaving `trim` pixels from every edge of a `w` x `h`
/// image, or the whole image when it is too small to trim.
pub fn trim_region(w: u32, h: u32, trim: u32) -> BoundingBox {
    let margin = trim.saturating_mul(2);
    if w > margin && h > margin {
        BoundingBox::new(trim, trim, w - margin, h - margin)
    } else {
        BoundingBox::full(w, h)
    }
}

/// Box that drops wide blank margins.
///
/// Each edge moves inward to the first row or column whose mean intensity
/// is below `threshold`; an edge with no such line stays put. When the
/// result would have a shorter side below `min_content`, the whole image is
/// kept instead.
pub fn blank_edge_region(raster: &Raster, threshold: u8, min_content: u32) -> BoundingBox {
    let grid = raster.to_intensity();
    let threshold = threshold as f64;
    let bounds = |axis: ScanAxis| {
        let means = grid.line_means(axis);
        let first = means.iter().position(|&m| m < threshold);
        let last = means.iter().rposition(|&m| m < threshold);
        match (first, last) {
            (Some(a), Some(b)) => (a as u32, b as u32 + 1),
            _ => (0, means.len() as u32),
        }
    };

    let (top, bottom) = bounds(ScanAxis::Rows);
    let (left, right) = bounds(ScanAxis::Columns);
    let region = BoundingBox::new(left, top, right - left, bottom - top);

    if region.min_side() >= min_content {
        region
    } else {
        BoundingBox::full(raster.width(), raster.height())
    }
}

/// Compute the crop box, in `raster` coordinates, that
/// [`crop_borders`] would cut out.
///
/// Returns the full image when no pixel differs from the background.
pub fn crop_region(raster: &Raster, options: &SegmentOptions) -> LayoutResult<BoundingBox> {
    let background = estimate_background(raster);
    let mask = foreground_mask(raster, background, options.tolerance)?;
    let closed = close_brick(&mask, options.close_size, options.close_size)?;

    let Some(content) = closed.foreground_bbox() else {
        debug!(
            width = raster.width(),
            height = raster.height(),
            "no foreground; keeping input"
        );
        return Ok(raster.bounds());
    };

    let trim = trim_region(content.w, content.h, options.final_trim);
    let trimmed = trim.translate(content.x, content.y);

    let cropped = raster.clip_to_box(&trimmed)?;
    let edges = blank_edge_region(&cropped, options.blank_threshold, options.min_content_size);
    let region = edges.translate(trimmed.x, trimmed.y);

    debug!(
        background = ?color::extract_rgb(background),
        ?content,
        ?region,
        "crop region"
    );
    Ok(region)
}

/// Crop a raster to its visible content.
///
/// A raster with no foreground is returned unchanged.
pub fn crop_borders(raster: &Raster, options: &SegmentOptions) -> LayoutResult<Raster> {
    let region = crop_region(raster, options)?;
    Ok(raster.clip_to_box(&region)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetcut_test::{SheetBuilder, solid};

    fn opts() -> SegmentOptions {
        SegmentOptions::default()
    }

    #[test]
    fn test_estimate_background_uniform() {
        let r = solid(10, 10, 200, 100, 50).unwrap();
        assert_eq!(
            color::extract_rgb(estimate_background(&r)),
            (200, 100, 50)
        );
    }

    #[test]
    fn test_estimate_background_median_floor() {
        // Corners: 10, 20, 31, 40 in every channel; middles 20 and 31 -> 25
        let r = SheetBuilder::new(10, 10)
            .rect(0, 0, 1, 1, 10, 10, 10)
            .rect(9, 0, 1, 1, 31, 31, 31)
            .rect(0, 9, 1, 1, 40, 40, 40)
            .rect(9, 9, 1, 1, 20, 20, 20)
            .build()
            .unwrap();
        assert_eq!(color::extract_rgb(estimate_background(&r)), (25, 25, 25));
    }

    #[test]
    fn test_estimate_background_ignores_one_outlier() {
        let r = SheetBuilder::new(10, 10)
            .background(240, 240, 240)
            .rect(9, 9, 1, 1, 0, 0, 0)
            .build()
            .unwrap();
        assert_eq!(color::extract_rgb(estimate_background(&r)), (240, 240, 240));
    }

    #[test]
    fn test_foreground_mask_strictly_greater() {
        let r = SheetBuilder::new(3, 1)
            .rect(1, 0, 1, 1, 225, 255, 255)
            .rect(2, 0, 1, 1, 224, 255, 255)
            .build()
            .unwrap();
        let mask = foreground_mask(&r, color::WHITE, 30).unwrap();
        assert!(!mask.get(0, 0));
        assert!(!mask.get(1, 0), "distance 30 is not foreground");
        assert!(mask.get(2, 0));
    }

    #[test]
    fn test_trim_region() {
        assert_eq!(trim_region(100, 50, 2), BoundingBox::new(2, 2, 96, 46));
        assert_eq!(trim_region(4, 50, 2), BoundingBox::full(4, 50));
        assert_eq!(trim_region(5, 5, 2), BoundingBox::new(2, 2, 1, 1));
        assert_eq!(trim_region(7, 9, 0), BoundingBox::full(7, 9));
    }

    #[test]
    fn test_uniform_input_unchanged() {
        let r = solid(300, 280, 12, 200, 90).unwrap();
        let out = crop_borders(&r, &opts()).unwrap();
        assert_eq!(out, r);
        assert_eq!(crop_region(&r, &opts()).unwrap(), r.bounds());
    }

    #[test]
    fn test_crop_block_on_white() {
        let r = SheetBuilder::new(400, 400).block(50, 60, 300, 280).build().unwrap();
        let region = crop_region(&r, &opts()).unwrap();
        assert_eq!(region, BoundingBox::new(52, 62, 296, 276));
        let out = crop_borders(&r, &opts()).unwrap();
        assert_eq!((out.width(), out.height()), (296, 276));
        assert!(out.data().iter().all(|&p| p == color::BLACK));
    }

    #[test]
    fn test_crop_closes_small_gaps() {
        // Two blocks 10 px apart are one piece of content after closing
        let r = SheetBuilder::new(400, 400)
            .block(50, 50, 100, 300)
            .block(160, 50, 100, 300)
            .build()
            .unwrap();
        let region = crop_region(&r, &opts()).unwrap();
        assert_eq!(region, BoundingBox::new(52, 52, 206, 296));
    }

    #[test]
    fn test_crop_region_inside_input() {
        let r = SheetBuilder::new(320, 300)
            .background(250, 250, 250)
            .rect(5, 5, 310, 290, 120, 30, 30)
            .build()
            .unwrap();
        let region = crop_region(&r, &opts()).unwrap();
        assert!(r.bounds().contains_box(&region));
    }

    #[test]
    fn test_blank_edge_removal() {
        // Content with a pale frame the colour test does not catch
        let r = SheetBuilder::new(400, 400)
            .background(250, 250, 250)
            .block(20, 30, 300, 320)
            .build()
            .unwrap();
        let region = blank_edge_region(&r, 245, 250);
        assert_eq!(region, BoundingBox::new(20, 30, 300, 320));
    }

    #[test]
    fn test_blank_edge_removal_keeps_small_content() {
        let r = SheetBuilder::new(400, 400)
            .block(100, 100, 200, 200)
            .build()
            .unwrap();
        assert_eq!(blank_edge_region(&r, 245, 250), r.bounds());
        assert_eq!(
            blank_edge_region(&r, 245, 200),
            BoundingBox::new(100, 100, 200, 200)
        );
    }

    #[test]
    fn test_blank_edge_removal_all_blank() {
        let r = solid(50, 40, 255, 255, 255).unwrap();
        assert_eq!(blank_edge_region(&r, 245, 0), r.bounds());
    }

    #[test]
    fn test_crop_is_idempotent_on_tight_content() {
        // Two-tone content: after the first crop the corners no longer agree
        // on a single colour, so the median lands between them
        let r = SheetBuilder::new(400, 400)
            .block(40, 40, 320, 160)
            .rect(40, 200, 320, 160, 250, 20, 20)
            .build()
            .unwrap();
        let once = crop_borders(&r, &opts()).unwrap();
        assert_eq!((once.width(), once.height()), (316, 316));
        let twice = crop_borders(&once, &opts()).unwrap();
        assert!(once.width() - twice.width() <= 2 * opts().final_trim);
        assert!(once.height() - twice.height() <= 2 * opts().final_trim);
    }
}
