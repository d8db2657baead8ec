//! sheetcut - Split composite images at blank seams
//!
//! Takes a composite image such as a product-listing sheet with several
//! photos stacked on a white page, finds the blank bands between them,
//! and crops each piece to its visible content.
//!
//! # Overview
//!
//! - Raster, mask and geometry types (re-exported from `sheetcut-core`)
//! - Binary morphology ([`morph`])
//! - Splitting and cropping ([`layout`])
//! - Image I/O and segment output ([`io`])
//!
//! # Example
//!
//! ```
//! use sheetcut::layout::{SegmentOptions, SegmentPipeline};
//! use sheetcut::{BoundingBox, Raster, color};
//!
//! // A black 300x300 block on a white page
//! let mut page = Raster::new_filled(400, 400, color::WHITE).unwrap().to_mut();
//! page.fill_rect(&BoundingBox::new(50, 50, 300, 300), color::BLACK);
//! let page: Raster = page.into();
//!
//! let pipeline = SegmentPipeline::new(SegmentOptions::default()).unwrap();
//! let segments = pipeline.run(&page).unwrap();
//! assert_eq!(segments.len(), 1);
//! assert_eq!(segments[0].width(), 296);
//! ```

pub mod cli;

// Re-export core types (primary data structures used everywhere)
pub use sheetcut_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use sheetcut_io as io;
pub use sheetcut_layout as layout;
pub use sheetcut_morph as morph;
