//! sheetcut-io - Image I/O for sheetcut
//!
//! Decodes images into RGB [`Raster`]s and encodes rasters back to files.
//!
//! # Supported formats
//!
//! | Format | Read | Write | Feature |
//! |--------|------|-------|---------|
//! | PNG    | Yes  | Yes   | `png-format` |
//! | JPEG   | Yes  | Yes   | `jpeg` |
//! | PNM    | P5/P6 | P6   | `pnm` |
//!
//! Every decoder produces 8-bit RGB; alpha and palettes are flattened on
//! read. Segment files are written through [`SegmentWriter`].

mod error;
pub mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;
pub mod writer;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use writer::{OutputFormat, SegmentWriter};

#[cfg(feature = "jpeg")]
pub use jpeg::write_jpeg;

use sheetcut_core::Raster;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Cursor, Seek, Write};
use std::path::Path;
use tracing::debug;

/// JPEG quality used when none is given
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Read an image from a file, detecting the format from its header.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Raster> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    let file = File::open(path)?;
    let raster = read_image_format(BufReader::new(file), format)?;
    debug!(
        path = %path.display(),
        ?format,
        width = raster.width(),
        height = raster.height(),
        "decoded"
    );
    Ok(raster)
}

/// Read an image from memory, detecting the format from its header.
pub fn read_image_mem(data: &[u8]) -> IoResult<Raster> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

/// Read an image in a known format.
pub fn read_image_format<R: BufRead + Seek>(reader: R, format: ImageFormat) -> IoResult<Raster> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Encode an image in `format` to a writer.
pub fn write_image_format<W: Write>(raster: &Raster, writer: W, format: OutputFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        OutputFormat::Png => png::write_png(raster, writer),
        #[cfg(feature = "jpeg")]
        OutputFormat::Jpeg { quality } => jpeg::write_jpeg(raster, writer, quality),
        #[allow(unreachable_patterns)]
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{:?} support not enabled",
                other
            )))
        }
    }
}

/// Write an image to a file.
///
/// JPEG output uses [`DEFAULT_JPEG_QUALITY`].
pub fn write_image<P: AsRef<Path>>(raster: &Raster, path: P, format: ImageFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_to(raster, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Write an image to a file with an explicit output encoding.
pub fn write_image_with<P: AsRef<Path>>(raster: &Raster, path: P, format: OutputFormat) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_image_format(raster, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into memory.
pub fn write_image_mem(raster: &Raster, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_to(raster, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_to<W: Write>(raster: &Raster, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        ImageFormat::Png => write_image_format(raster, writer, OutputFormat::Png),
        ImageFormat::Jpeg => write_image_format(
            raster,
            writer,
            OutputFormat::Jpeg {
                quality: DEFAULT_JPEG_QUALITY,
            },
        ),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(raster, writer),
        #[cfg(not(feature = "pnm"))]
        ImageFormat::Pnm => Err(IoError::UnsupportedFormat(
            "Pnm support not enabled".to_string(),
        )),
    }
}
