//! PNM (Portable Any Map) format support
//!
//! Reads binary PGM (P5) and PPM (P6) with a maxval up to 255, and writes
//! P6. ASCII variants and 16-bit samples are not supported.

use crate::{IoError, IoResult};
use sheetcut_core::{Raster, RasterMut, color};
use std::io::{BufRead, Read, Write};

/// Largest image accepted by the reader (2^28 pixels, 1 GiB as a raster)
const MAX_PNM_PIXELS: u64 = 1 << 28;

/// Read the next header token, skipping whitespace and `#` comments.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut in_comment = false;
    loop {
        let byte = {
            let buf = reader.fill_buf()?;
            match buf.first() {
                Some(&b) => b,
                None => break,
            }
        };
        reader.consume(1);
        if in_comment {
            in_comment = byte != b'\n';
            continue;
        }
        if byte == b'#' && token.is_empty() {
            in_comment = true;
        } else if byte.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(byte as char);
        }
    }
    if token.is_empty() {
        Err(IoError::InvalidData("truncated PNM header".to_string()))
    } else {
        Ok(token)
    }
}

fn read_number<R: BufRead>(reader: &mut R, what: &str) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM {}: {:?}", what, token)))
}

/// Read a binary PGM or PPM image.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Raster> {
    let magic = read_token(&mut reader)?;
    let samples = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM variant {:?}",
                other
            )));
        }
    };
    let width = read_number(&mut reader, "width")?;
    let height = read_number(&mut reader, "height")?;
    let maxval = read_number(&mut reader, "maxval")?;
    if maxval == 0 || maxval > 255 {
        return Err(IoError::UnsupportedFormat(format!(
            "PNM maxval {} not supported",
            maxval
        )));
    }

    let pixels = width as u64 * height as u64;
    if pixels > MAX_PNM_PIXELS {
        return Err(IoError::InvalidData(format!(
            "PNM image {}x{} exceeds the maximum of {} pixels",
            width, height, MAX_PNM_PIXELS
        )));
    }

    // Read the payload before allocating the raster, so a short stream
    // fails without reserving memory for the advertised size
    let expected = pixels * samples as u64;
    let mut data = Vec::new();
    reader.by_ref().take(expected).read_to_end(&mut data)?;
    if (data.len() as u64) < expected {
        return Err(IoError::InvalidData(format!(
            "truncated PNM data: {} of {} bytes",
            data.len(),
            expected
        )));
    }

    let mut raster = RasterMut::new(width, height)?;
    let scale = |v: u8| ((v as u32).min(maxval) * 255 / maxval) as u8;
    for (pixel, px) in raster.data_mut().iter_mut().zip(data.chunks_exact(samples)) {
        *pixel = if samples == 1 {
            let g = scale(px[0]);
            color::compose_rgb(g, g, g)
        } else {
            color::compose_rgb(scale(px[0]), scale(px[1]), scale(px[2]))
        };
    }

    Ok(raster.into())
}

/// Write a raster as binary PPM (P6).
pub fn write_pnm<W: Write>(raster: &Raster, mut writer: W) -> IoResult<()> {
    write!(writer, "P6\n{} {}\n255\n", raster.width(), raster.height())?;
    writer.write_all(&raster.to_rgb_bytes())?;
    writer.flush()?;
    Ok(())
}
