//! sheetcut-layout - Composite splitting and border cropping
//!
//! Splits a composite image (for example a product sheet with several
//! photos stacked on a white page) at blank seams and crops every piece to
//! its visible content.
//!
//! # Stages
//!
//! - [`find_blank_spans`]: runs of near-white rows or columns
//! - [`crop_borders`] / [`crop_region`]: corner-estimated background,
//!   colour-distance mask, morphological closing, bounding box, fixed trim
//!   and wide blank margin removal
//! - [`split_segments`]: row pass, then column pass over each cropped strip
//! - [`SegmentPipeline`]: splitting plus the final size gate
//!
//! # Example
//!
//! ```no_run
//! use sheetcut_layout::{SegmentOptions, SegmentPipeline};
//! # fn load() -> sheetcut_core::Raster { unimplemented!() }
//!
//! let pipeline = SegmentPipeline::new(SegmentOptions::default()).unwrap();
//! for segment in pipeline.run_with_regions(&load()).unwrap() {
//!     println!("{:?}", segment.region);
//! }
//! ```

pub mod blank;
pub mod crop;
mod error;
mod options;
pub mod pipeline;
pub mod split;

pub use blank::find_blank_spans;
pub use crop::{crop_borders, crop_region, estimate_background};
pub use error::{LayoutError, LayoutResult};
pub use options::SegmentOptions;
pub use pipeline::{Segment, SegmentPipeline, segment_batch, segment_image};
pub use split::{SegmentRegion, split_segments};
