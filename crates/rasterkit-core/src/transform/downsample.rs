//! Downsampling by a factor of two with a 2x2 box filter.

use crate::error::Result;
use crate::raster::{Pixel, Raster};

/// Halve both dimensions of a raster, averaging each 2x2 block.
///
/// The output is `(rows / 2) x (cols / 2)`. Each channel of an output pixel
/// is the truncated integer mean of the four input pixels it covers. With an
/// odd row or column count, the last input row or column is dropped.
///
/// # Errors
///
/// Returns `RasterError::Allocation` if the input has fewer than two rows or
/// columns (the output would be empty) or storage cannot be obtained. The
/// raster is unchanged on error.
pub fn downsample_half(raster: &mut Raster) -> Result<()> {
    let mut output = Raster::new(raster.rows() / 2, raster.cols() / 2)?;

    for r in 0..output.rows() {
        for c in 0..output.cols() {
            let block = [
                raster.pixel(2 * r, 2 * c),
                raster.pixel(2 * r, 2 * c + 1),
                raster.pixel(2 * r + 1, 2 * c),
                raster.pixel(2 * r + 1, 2 * c + 1),
            ];
            output.set_pixel(r, c, average(&block));
        }
    }

    tracing::debug!(
        from_rows = raster.rows(),
        from_cols = raster.cols(),
        rows = output.rows(),
        cols = output.cols(),
        "downsample"
    );
    raster.replace_with(output);
    Ok(())
}

#[inline]
fn average(block: &[Pixel; 4]) -> Pixel {
    let (mut r, mut g, mut b) = (0u16, 0u16, 0u16);
    for p in block {
        r += p.r as u16;
        g += p.g as u16;
        b += p.b as u16;
    }
    Pixel::new((r / 4) as u8, (g / 4) as u8, (b / 4) as u8)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
