//! Recursive two-axis splitting
//!
//! A composite is cut into horizontal strips at blank row bands, each strip
//! is cropped, and each cropped strip is cut again at blank column bands.
//! Rows always go first.

use crate::blank::find_blank_spans;
use crate::crop::crop_region;
use crate::{LayoutResult, SegmentOptions};
use sheetcut_core::{BoundingBox, Raster, ScanAxis, Span};
use tracing::debug;

/// A piece cut out of a source raster, with the box it occupies there.
#[derive(Debug, Clone)]
pub struct SegmentRegion {
    /// Cropped pixels
    pub raster: Raster,
    /// Location in the source raster
    pub region: BoundingBox,
}

/// Regions between consecutive blank spans, plus the tail after the last
/// span, as half-open `[start, end)` ranges over `0..len`.
///
/// Empty ranges are kept; callers decide what to do with them.
pub fn content_ranges(spans: &[Span], len: u32) -> Vec<(u32, u32)> {
    let mut ranges = Vec::with_capacity(spans.len() + 1);
    let mut prev = 0;
    for span in spans {
        ranges.push((prev, span.start));
        prev = span.end;
    }
    ranges.push((prev, len));
    ranges
}

/// Cut `raster` along `axis` and crop every piece large enough to keep.
///
/// `origin` is the location of `raster` in the source; the returned regions
/// are in source coordinates.
fn split_along(
    raster: &Raster,
    origin: BoundingBox,
    axis: ScanAxis,
    options: &SegmentOptions,
) -> LayoutResult<Vec<SegmentRegion>> {
    let grid = raster.to_intensity();
    let spans = find_blank_spans(
        &grid,
        axis,
        options.blank_threshold,
        options.min_blank_run,
    );
    let len = grid.line_count(axis);

    let mut pieces = Vec::new();
    for (start, end) in content_ranges(&spans, len) {
        let piece = match axis {
            ScanAxis::Rows => BoundingBox::new(0, start, raster.width(), end - start),
            ScanAxis::Columns => BoundingBox::new(start, 0, end - start, raster.height()),
        };
        if piece.is_empty() {
            continue;
        }
        if piece.min_side() < options.min_segment_size {
            debug!(?axis, ?piece, "piece below minimum size; skipped");
            continue;
        }

        let sub = raster.clip_to_box(&piece)?;
        let crop = crop_region(&sub, options)?;
        let raster = sub.clip_to_box(&crop)?;
        let region = crop
            .translate(piece.x, piece.y)
            .translate(origin.x, origin.y);
        debug!(?axis, ?region, "piece kept");
        pieces.push(SegmentRegion { raster, region });
    }
    Ok(pieces)
}

/// Split a composite into cropped segments.
///
/// Strips between blank row bands are cropped and then split between blank
/// column bands, and every column piece is cropped again. Pieces whose
/// shorter side is below `min_segment_size` are skipped before cropping.
/// Segments come back top to bottom, then left to right within a strip.
pub fn split_segments(raster: &Raster, options: &SegmentOptions) -> LayoutResult<Vec<SegmentRegion>> {
    let strips = split_along(raster, raster.bounds(), ScanAxis::Rows, options)?;
    debug!(strips = strips.len(), "row pass");

    let mut segments = Vec::new();
    for strip in strips {
        let pieces = split_along(&strip.raster, strip.region, ScanAxis::Columns, options)?;
        segments.extend(pieces);
    }
    debug!(segments = segments.len(), "column pass");
    Ok(segments)
}
