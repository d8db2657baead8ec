//! Command-line driver
//!
//! Maps flags onto [`SegmentOptions`], segments every input in parallel and
//! writes the accepted segments through a [`SegmentWriter`].

use anyhow::{Context, Result};
use clap::Parser;
use rayon::prelude::*;
use sheetcut_io::{OutputFormat, SegmentWriter, read_image};
use sheetcut_layout::{SegmentOptions, SegmentPipeline};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Split composite images at blank seams and crop each piece to its content
#[derive(Parser, Debug, Clone)]
#[command(name = "sheetcut", version, about)]
pub struct Args {
    /// Input images (PNG, JPEG or binary PNM)
    #[arg(required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory for segment files
    #[arg(short, long, default_value = "processed")]
    pub output_dir: PathBuf,

    /// Write lossless PNG instead of JPEG
    #[arg(long)]
    pub png: bool,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 95, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Mean intensity at or above which a row or column is blank
    #[arg(long, default_value_t = 245)]
    pub blank_threshold: u8,

    /// Shortest blank run that separates two pieces
    #[arg(long, default_value_t = 5)]
    pub min_blank_run: u32,

    /// Pieces whose shorter side is below this are discarded
    #[arg(long, default_value_t = 250)]
    pub min_segment_size: u32,

    /// Smallest shorter side allowed after blank margin removal
    #[arg(long, default_value_t = 250)]
    pub min_content_size: u32,

    /// Colour distance from the background above which a pixel is content
    #[arg(long, default_value_t = 30)]
    pub tolerance: u32,

    /// Pixels trimmed from every edge after cropping
    #[arg(long, default_value_t = 2)]
    pub final_trim: u32,

    /// Side of the square closing element
    #[arg(long, default_value_t = 15)]
    pub close_size: u32,
}

impl Args {
    /// Segmentation options described by the flags
    pub fn segment_options(&self) -> SegmentOptions {
        SegmentOptions::default()
            .with_blank_threshold(self.blank_threshold)
            .with_min_blank_run(self.min_blank_run)
            .with_min_segment_size(self.min_segment_size)
            .with_min_content_size(self.min_content_size)
            .with_tolerance(self.tolerance)
            .with_final_trim(self.final_trim)
            .with_close_size(self.close_size)
    }

    /// Output encoding described by the flags
    pub fn output_format(&self) -> OutputFormat {
        if self.png {
            OutputFormat::Png
        } else {
            OutputFormat::Jpeg {
                quality: self.quality,
            }
        }
    }
}

/// Outcome of a batch run
#[derive(Debug, Default)]
pub struct Summary {
    /// Files written, in input order
    pub written: Vec<PathBuf>,
    /// Inputs that failed
    pub failed: Vec<PathBuf>,
}

/// Install a `tracing` subscriber filtered by `RUST_LOG` (default `info`).
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

/// File stem of `path`, or `image` when it has none.
fn file_stem(path: &Path) -> &str {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("image")
}

/// Output stems for `inputs`, one per input and pairwise distinct.
///
/// The first input with a given file stem keeps it; later ones get `_2`,
/// `_3`, ... appended, skipping any name already taken, so inputs such as
/// `a/x.png` and `b/x.png` never write to the same segment files.
pub fn output_stems(inputs: &[PathBuf]) -> Vec<String> {
    let mut used = HashSet::new();
    inputs
        .iter()
        .map(|path| {
            let base = file_stem(path);
            let mut stem = base.to_string();
            let mut k = 2;
            while !used.insert(stem.clone()) {
                stem = format!("{}_{}", base, k);
                k += 1;
            }
            stem
        })
        .collect()
}

/// Segment one file and write its segments as `<stem>_segment_<n>`.
///
/// Segments are numbered by their position among all pieces the splitter
/// produced, so a piece rejected by the final size gate leaves a gap.
pub fn process_file(
    path: &Path,
    stem: &str,
    pipeline: &SegmentPipeline,
    writer: &SegmentWriter,
) -> Result<Vec<PathBuf>> {
    let raster = read_image(path).with_context(|| format!("failed to read {}", path.display()))?;

    let segments = pipeline
        .run_with_regions(&raster)
        .with_context(|| format!("failed to segment {}", path.display()))?;
    if segments.is_empty() {
        info!(input = %path.display(), "no segments large enough");
    }

    segments
        .iter()
        .map(|seg| {
            writer
                .write_segment(stem, seg.index + 1, &seg.raster)
                .with_context(|| format!("failed to write segment {} of {}", seg.index + 1, path.display()))
        })
        .collect()
}

/// Process every input in parallel.
///
/// A failing input is logged and recorded in [`Summary::failed`]; the others
/// still run.
pub fn run(args: &Args) -> Result<Summary> {
    let pipeline = SegmentPipeline::new(args.segment_options()).context("invalid options")?;
    let writer = SegmentWriter::new(&args.output_dir, args.output_format()).with_context(|| {
        format!("failed to create output directory {}", args.output_dir.display())
    })?;

    let stems = output_stems(&args.inputs);
    let results: Vec<_> = args
        .inputs
        .par_iter()
        .zip(stems.par_iter())
        .map(|(path, stem)| (path, process_file(path, stem, &pipeline, &writer)))
        .collect();

    let mut summary = Summary::default();
    for (path, result) in results {
        match result {
            Ok(paths) => summary.written.extend(paths),
            Err(e) => {
                error!(input = %path.display(), "{:#}", e);
                summary.failed.push(path.clone());
            }
        }
    }

    info!(
        inputs = args.inputs.len(),
        written = summary.written.len(),
        failed = summary.failed.len(),
        "done"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_segment_options() {
        let args = Args::parse_from(["sheetcut", "a.jpg"]);
        assert_eq!(args.segment_options(), SegmentOptions::default());
        assert_eq!(args.output_format(), OutputFormat::Jpeg { quality: 95 });
        assert_eq!(args.output_dir, PathBuf::from("processed"));
    }

    #[test]
    fn test_flags() {
        let args = Args::parse_from([
            "sheetcut",
            "--png",
            "--min-segment-size",
            "100",
            "--close-size",
            "9",
            "-o",
            "out",
            "a.png",
            "b.png",
        ]);
        assert_eq!(args.inputs.len(), 2);
        assert_eq!(args.output_format(), OutputFormat::Png);
        let opts = args.segment_options();
        assert_eq!(opts.min_segment_size, 100);
        assert_eq!(opts.close_size, 9);
        assert_eq!(args.output_dir, PathBuf::from("out"));
    }

    #[test]
    fn test_output_stems_unique() {
        let inputs: Vec<PathBuf> = ["a/x.png", "b/x.jpg", "x_2.png", "c/x.png", "y.png"]
            .iter()
            .map(PathBuf::from)
            .collect();
        let stems = output_stems(&inputs);
        assert_eq!(stems, vec!["x", "x_2", "x_2_2", "x_3", "y"]);
    }

    #[test]
    fn test_output_stems_repeated_path() {
        let inputs = vec![PathBuf::from("x.png"), PathBuf::from("x.png")];
        assert_eq!(output_stems(&inputs), vec!["x", "x_2"]);
    }

    #[test]
    fn test_quality_range() {
        assert!(Args::try_parse_from(["sheetcut", "--quality", "0", "a.jpg"]).is_err());
        assert!(Args::try_parse_from(["sheetcut"]).is_err());
    }
}
