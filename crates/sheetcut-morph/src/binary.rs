//! Binary morphological operations
//!
//! Implements erosion, dilation and closing for [`Mask`] images with
//! rectangular structuring elements.
//!
//! Boundary condition: pixels outside the mask are treated as background
//! for dilation and as foreground for erosion. Both operations therefore
//! only look at in-bounds neighbors, and a closing never removes
//! foreground that touches the image edge.

use crate::{MorphResult, Sel};
use sheetcut_core::Mask;

/// Dilate with a brick (rectangular) structuring element
///
/// Separable: a horizontal pass then a vertical pass, each a running
/// window count, so the cost does not grow with the brick size.
pub fn dilate_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    let sel = Sel::create_brick(width, height)?;
    dilate_brick_oriented(mask, &sel)
}

/// Erode with a brick (rectangular) structuring element
pub fn erode_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    let sel = Sel::create_brick(width, height)?;
    erode_brick_oriented(mask, &sel)
}

/// Close with a brick structuring element
///
/// Closing = dilation followed by erosion. With the border convention of
/// this module the result always contains the input.
pub fn close_brick(mask: &Mask, width: u32, height: u32) -> MorphResult<Mask> {
    let sel = Sel::create_brick(width, height)?;
    let dilated = dilate_brick_oriented(mask, &sel)?;
    erode_brick_oriented(&dilated, &sel)
}

/// How a window of source pixels is reduced to one output pixel.
#[derive(Clone, Copy)]
enum Reduce {
    /// Set if any in-bounds pixel is set (dilation)
    Any,
    /// Set if every in-bounds pixel is set (erosion)
    All,
}

fn dilate_brick_oriented(mask: &Mask, sel: &Sel) -> MorphResult<Mask> {
    if sel.is_identity() {
        return Ok(mask.clone());
    }
    // Source window for output x is [x - (w - 1 - cx), x + cx]
    let left = sel.width() - 1 - sel.origin_x();
    let right = sel.origin_x();
    let up = sel.height() - 1 - sel.origin_y();
    let down = sel.origin_y();
    let tmp = window_pass(mask, true, left, right, Reduce::Any);
    Ok(window_pass(&tmp, false, up, down, Reduce::Any))
}

fn erode_brick_oriented(mask: &Mask, sel: &Sel) -> MorphResult<Mask> {
    if sel.is_identity() {
        return Ok(mask.clone());
    }
    // Source window for output x is [x - cx, x + (w - 1 - cx)]
    let left = sel.origin_x();
    let right = sel.width() - 1 - sel.origin_x();
    let up = sel.origin_y();
    let down = sel.height() - 1 - sel.origin_y();
    let tmp = window_pass(mask, true, left, right, Reduce::All);
    Ok(window_pass(&tmp, false, up, down, Reduce::All))
}

/// One-dimensional running-window reduction along rows or columns.
///
/// The window for position `i` is `[i - before, i + after]`, clipped to the
/// line.
fn window_pass(mask: &Mask, horizontal: bool, before: u32, after: u32, reduce: Reduce) -> Mask {
    if before == 0 && after == 0 {
        return mask.clone();
    }

    let w = mask.width() as usize;
    let h = mask.height() as usize;
    let (len, lines) = if horizontal { (w, h) } else { (h, w) };
    let index = |line: usize, i: usize| if horizontal { line * w + i } else { i * w + line };

    let src = mask.data();
    let mut out = mask.clone();
    let dst = out.data_mut();
    let mut prefix = vec![0u32; len + 1];

    for line in 0..lines {
        for i in 0..len {
            prefix[i + 1] = prefix[i] + (src[index(line, i)] != 0) as u32;
        }
        for i in 0..len {
            let lo = i.saturating_sub(before as usize);
            let hi = (i + after as usize + 1).min(len);
            let count = prefix[hi] - prefix[lo];
            let on = match reduce {
                Reduce::Any => count > 0,
                Reduce::All => count as usize == hi - lo,
            };
            dst[index(line, i)] = on as u8;
        }
    }

    out
}
