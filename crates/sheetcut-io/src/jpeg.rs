//! JPEG image format support
//!
//! Decoding uses the `jpeg-decoder` crate and accepts 8- and 16-bit
//! greyscale, RGB and CMYK streams. Encoding uses `jpeg-encoder` and always
//! writes baseline RGB at the requested quality.

use crate::{IoError, IoResult};
use jpeg_decoder::{Decoder, PixelFormat};
use jpeg_encoder::{ColorType, Encoder};
use sheetcut_core::{Raster, RasterMut, color};
use std::io::{Read, Write};

/// Read a JPEG image from a reader.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Raster> {
    let mut decoder = Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        PixelFormat::CMYK32 => 4,
    };
    let expected = width as usize * height as usize * samples;
    if data.len() < expected {
        return Err(IoError::InvalidData(format!(
            "JPEG pixel buffer too short: {} < {}",
            data.len(),
            expected
        )));
    }

    let mut raster = RasterMut::new(width, height)?;
    for (pixel, px) in raster.data_mut().iter_mut().zip(data.chunks_exact(samples)) {
        *pixel = match info.pixel_format {
            // 16-bit samples are big-endian; keep the high byte
            PixelFormat::L8 | PixelFormat::L16 => color::compose_rgb(px[0], px[0], px[0]),
            PixelFormat::RGB24 => color::compose_rgb(px[0], px[1], px[2]),
            PixelFormat::CMYK32 => {
                let k = 255 - px[3] as u32;
                let channel = |c: u8| ((255 - c as u32) * k / 255) as u8;
                color::compose_rgb(channel(px[0]), channel(px[1]), channel(px[2]))
            }
        };
    }

    Ok(raster.into())
}

/// Write a raster as a baseline RGB JPEG.
///
/// # Errors
///
/// Returns [`IoError::InvalidData`] if `quality` is outside `1..=100` or
/// a dimension exceeds 65535, and [`IoError::EncodeError`] if encoding
/// fails.
pub fn write_jpeg<W: Write>(raster: &Raster, writer: W, quality: u8) -> IoResult<()> {
    if !(1..=100).contains(&quality) {
        return Err(IoError::InvalidData(format!(
            "JPEG quality must be in 1..=100, got {}",
            quality
        )));
    }
    let width = u16::try_from(raster.width()).map_err(|_| {
        IoError::InvalidData(format!("JPEG width {} exceeds 65535", raster.width()))
    })?;
    let height = u16::try_from(raster.height()).map_err(|_| {
        IoError::InvalidData(format!("JPEG height {} exceeds 65535", raster.height()))
    })?;

    let encoder = Encoder::new(writer, quality);
    encoder
        .encode(&raster.to_rgb_bytes(), width, height, ColorType::Rgb)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(())
}
