//! Error types for sheetcut-layout

use thiserror::Error;

/// Errors that can occur during segmentation
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] sheetcut_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] sheetcut_morph::MorphError),

    /// Options that cannot drive the pipeline
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for layout operations
pub type LayoutResult<T> = Result<T, LayoutError>;
