//! Segment output
//!
//! Writes the segments cut from one source image into a directory as
//! `<stem>_segment_<n>.<ext>`.

use crate::{IoResult, write_image_with};
use sheetcut_core::Raster;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Encoding used for segment files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Lossless PNG
    Png,
    /// JPEG at the given quality (1..=100)
    Jpeg {
        /// Encoder quality
        quality: u8,
    },
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Jpeg {
            quality: crate::DEFAULT_JPEG_QUALITY,
        }
    }
}

impl OutputFormat {
    /// File extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg { .. } => "jpg",
        }
    }
}

/// Writes numbered segment files into one directory.
#[derive(Debug, Clone)]
pub struct SegmentWriter {
    dir: PathBuf,
    format: OutputFormat,
}

impl SegmentWriter {
    /// Create a writer, creating `dir` if needed.
    pub fn new<P: AsRef<Path>>(dir: P, format: OutputFormat) -> IoResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, format })
    }

    /// Output directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Path for segment number `n` (1-based) of `stem`.
    pub fn segment_path(&self, stem: &str, n: usize) -> PathBuf {
        self.dir
            .join(format!("{}_segment_{}.{}", stem, n, self.format.extension()))
    }

    /// Write one segment as number `n` (1-based).
    pub fn write_segment(&self, stem: &str, n: usize, raster: &Raster) -> IoResult<PathBuf> {
        let path = self.segment_path(stem, n);
        write_image_with(raster, &path, self.format)?;
        info!(path = %path.display(), width = raster.width(), height = raster.height(), "saved");
        Ok(path)
    }

    /// Write `segments` numbered from 1, returning the paths written.
    pub fn write_all(&self, stem: &str, segments: &[Raster]) -> IoResult<Vec<PathBuf>> {
        segments
            .iter()
            .enumerate()
            .map(|(i, raster)| self.write_segment(stem, i + 1, raster))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_path() {
        let writer = SegmentWriter::new(std::env::temp_dir(), OutputFormat::Png).unwrap();
        let path = writer.segment_path("sheet", 3);
        assert!(path.ends_with("sheet_segment_3.png"));
    }

    #[test]
    fn test_default_format_is_jpeg_95() {
        assert_eq!(OutputFormat::default(), OutputFormat::Jpeg { quality: 95 });
        assert_eq!(OutputFormat::default().extension(), "jpg");
    }
}
