//! Segmentation options

use crate::{LayoutError, LayoutResult};

/// Thresholds that drive splitting and cropping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentOptions {
    /// A line is blank when its mean intensity is at least this (default: 245)
    pub blank_threshold: u8,
    /// Shortest blank run that separates content (default: 5)
    pub min_blank_run: u32,
    /// Segments whose shorter side is below this are discarded (default: 250)
    pub min_segment_size: u32,
    /// Large blank-edge removal is rejected when it leaves a shorter side
    /// below this (default: 250)
    pub min_content_size: u32,
    /// Colour distance above which a pixel is foreground (default: 30)
    pub tolerance: u32,
    /// Pixels shaved from every edge after the bounding-box crop (default: 2)
    pub final_trim: u32,
    /// Side of the square closing element (default: 15)
    pub close_size: u32,
}

impl Default for SegmentOptions {
    fn default() -> Self {
        Self {
            blank_threshold: 245,
            min_blank_run: 5,
            min_segment_size: 250,
            min_content_size: 250,
            tolerance: 30,
            final_trim: 2,
            close_size: 15,
        }
    }
}

impl SegmentOptions {
    /// Set the blank intensity threshold
    pub fn with_blank_threshold(mut self, threshold: u8) -> Self {
        self.blank_threshold = threshold;
        self
    }

    /// Set the minimum blank run length
    pub fn with_min_blank_run(mut self, run: u32) -> Self {
        self.min_blank_run = run;
        self
    }

    /// Set the minimum segment size
    pub fn with_min_segment_size(mut self, size: u32) -> Self {
        self.min_segment_size = size;
        self
    }

    /// Set the minimum content size kept by large blank-edge removal
    pub fn with_min_content_size(mut self, size: u32) -> Self {
        self.min_content_size = size;
        self
    }

    /// Set the colour-distance tolerance
    pub fn with_tolerance(mut self, tolerance: u32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the final trim
    pub fn with_final_trim(mut self, trim: u32) -> Self {
        self.final_trim = trim;
        self
    }

    /// Set the closing element size
    pub fn with_close_size(mut self, size: u32) -> Self {
        self.close_size = size;
        self
    }

    /// Check that the options can drive the pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`LayoutError::InvalidParameters`] when the closing element
    /// size or the minimum blank run is 0.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.close_size == 0 {
            return Err(LayoutError::InvalidParameters(
                "closing element size must be at least 1".to_string(),
            ));
        }
        if self.min_blank_run == 0 {
            return Err(LayoutError::InvalidParameters(
                "minimum blank run must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = SegmentOptions::default();
        assert_eq!(opts.blank_threshold, 245);
        assert_eq!(opts.min_blank_run, 5);
        assert_eq!(opts.min_segment_size, 250);
        assert_eq!(opts.min_content_size, 250);
        assert_eq!(opts.tolerance, 30);
        assert_eq!(opts.final_trim, 2);
        assert_eq!(opts.close_size, 15);
        assert!(opts.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let opts = SegmentOptions::default()
            .with_min_segment_size(100)
            .with_final_trim(0)
            .with_tolerance(10);
        assert_eq!(opts.min_segment_size, 100);
        assert_eq!(opts.final_trim, 0);
        assert_eq!(opts.tolerance, 10);
        assert_eq!(opts.close_size, 15);
    }

    #[test]
    fn test_validate_rejects_zero() {
        let err = SegmentOptions::default().with_close_size(0).validate();
        assert!(matches!(err, Err(LayoutError::InvalidParameters(_))));
        let err = SegmentOptions::default().with_min_blank_run(0).validate();
        assert!(matches!(err, Err(LayoutError::InvalidParameters(_))));
    }
}
