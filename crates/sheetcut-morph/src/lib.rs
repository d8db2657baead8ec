//! sheetcut-morph - Morphological operations on binary masks
//!
//! This crate provides:
//!
//! - Rectangular structuring elements ([`Sel`])
//! - Binary dilation, erosion and closing with separable running-window
//!   passes, so the cost does not grow with the element size
//!
//! Pixels outside the mask never contribute to a dilation and never
//! erode, so closing is extensive even for content touching the border.

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::Sel;

pub use binary::{close_brick, dilate_brick, erode_brick};
