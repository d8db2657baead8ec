//! Segmentation pipeline
//!
//! Top-level driver: split a composite, then keep only segments that meet
//! the minimum size.

use crate::split::split_segments;
use crate::{LayoutResult, SegmentOptions};
use rayon::prelude::*;
use sheetcut_core::{BoundingBox, Raster};
use tracing::debug;

/// An accepted segment.
#[derive(Debug, Clone)]
pub struct Segment {
    /// Cropped pixels
    pub raster: Raster,
    /// Location in the source raster
    pub region: BoundingBox,
    /// Position among all pieces the splitter produced, before the final
    /// size gate
    pub index: usize,
}

/// Splits composites into cropped segments with a fixed set of options.
#[derive(Debug, Clone)]
pub struct SegmentPipeline {
    options: SegmentOptions,
}

impl SegmentPipeline {
    /// Create a pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`](crate::LayoutError::InvalidParameters)
    /// if the options fail [`SegmentOptions::validate`].
    pub fn new(options: SegmentOptions) -> LayoutResult<Self> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Options in use
    pub fn options(&self) -> &SegmentOptions {
        &self.options
    }

    /// Segment `raster`, returning accepted segments with their regions.
    pub fn run_with_regions(&self, raster: &Raster) -> LayoutResult<Vec<Segment>> {
        let min = self.options.min_segment_size;
        let pieces = split_segments(raster, &self.options)?;
        let total = pieces.len();

        let segments: Vec<_> = pieces
            .into_iter()
            .enumerate()
            .filter(|(_, p)| p.raster.min_dimension() >= min)
            .map(|(index, p)| Segment {
                raster: p.raster,
                region: p.region,
                index,
            })
            .collect();

        debug!(
            width = raster.width(),
            height = raster.height(),
            pieces = total,
            accepted = segments.len(),
            "segmented"
        );
        Ok(segments)
    }

    /// Segment `raster`, returning the accepted rasters in order.
    pub fn run(&self, raster: &Raster) -> LayoutResult<Vec<Raster>> {
        Ok(self
            .run_with_regions(raster)?
            .into_iter()
            .map(|s| s.raster)
            .collect())
    }
}

/// Segment one raster with `options`.
pub fn segment_image(raster: &Raster, options: &SegmentOptions) -> LayoutResult<Vec<Raster>> {
    SegmentPipeline::new(options.clone())?.run(raster)
}

/// Segment many rasters in parallel.
///
/// Results are in input order; one failure does not affect the others.
pub fn segment_batch(
    rasters: &[Raster],
    options: &SegmentOptions,
) -> LayoutResult<Vec<LayoutResult<Vec<Segment>>>> {
    let pipeline = SegmentPipeline::new(options.clone())?;
    Ok(rasters
        .par_iter()
        .map(|raster| pipeline.run_with_regions(raster))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::LayoutError;
    use sheetcut_test::{SheetBuilder, solid};

    #[test]
    fn test_invalid_options_rejected() {
        let opts = SegmentOptions::default().with_close_size(0);
        assert!(matches!(
            SegmentPipeline::new(opts),
            Err(LayoutError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_final_gate_keeps_discovery_index() {
        // Grey sheet, white column band as the separator. The left piece is
        // 278 wide before cropping but its block crops to 194 wide
        let r = SheetBuilder::new(700, 300)
            .background(200, 200, 200)
            .block(20, 20, 200, 260)
            .rect(300, 0, 40, 300, 255, 255, 255)
            .block(400, 20, 280, 260)
            .build()
            .unwrap();
        let pipeline = SegmentPipeline::new(SegmentOptions::default()).unwrap();
        let segs = pipeline.run_with_regions(&r).unwrap();
        assert_eq!(segs.len(), 1);
        assert_eq!(segs[0].index, 1);
        assert_eq!(segs[0].region, BoundingBox::new(402, 22, 274, 256));
    }

    #[test]
    fn test_small_input_yields_nothing() {
        let r = solid(100, 100, 0, 0, 0).unwrap();
        assert!(segment_image(&r, &SegmentOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_batch_preserves_order() {
        let one = SheetBuilder::new(400, 400).block(40, 40, 300, 300).build().unwrap();
        let two = SheetBuilder::new(700, 400)
            .block(20, 50, 300, 300)
            .block(380, 50, 300, 300)
            .build()
            .unwrap();
        let tiny = solid(10, 10, 0, 0, 0).unwrap();
        let inputs = vec![two.clone(), tiny, one.clone()];

        let results = segment_batch(&inputs, &SegmentOptions::default()).unwrap();
        let counts: Vec<_> = results
            .iter()
            .map(|r| r.as_ref().map(|s| s.len()).unwrap_or(usize::MAX))
            .collect();
        assert_eq!(counts, vec![2, 0, 1]);
    }
}
