//! Lossless quarter-turn rotation.
//!
//! Rotating clockwise by 90° maps input `(r, c)` to output
//! `(c, new_cols - 1 - r)`, where the output has `new_rows = cols` and
//! `new_cols = rows`. The input's first column becomes the output's first
//! row read right-to-left, and the input's first row becomes the output's
//! last column.

use crate::error::Result;
use crate::raster::Raster;

/// Rotate a raster 90° clockwise, swapping its dimensions.
///
/// # Errors
///
/// Returns `RasterError::Allocation` if storage for the rotated raster
/// cannot be obtained. The raster is unchanged on error.
///
/// # Example
///
/// ```
/// use rasterkit_core::{transform::rotate_90_cw, Pixel, Raster};
///
/// let mut raster = Raster::new(2, 3).unwrap();
/// raster.set_pixel(0, 0, Pixel::WHITE);
/// rotate_90_cw(&mut raster).unwrap();
///
/// assert_eq!((raster.rows(), raster.cols()), (3, 2));
/// assert_eq!(raster.pixel(0, 1), Pixel::WHITE);
/// ```
pub fn rotate_90_cw(raster: &mut Raster) -> Result<()> {
    let mut output = Raster::new(raster.cols(), raster.rows())?;
    let last_col = output.cols() - 1;

    for r in 0..raster.rows() {
        for c in 0..raster.cols() {
            output.set_pixel(c, last_col - r, raster.pixel(r, c));
        }
    }

    tracing::debug!(rows = output.rows(), cols = output.cols(), "rotate 90 cw");
    raster.replace_with(output);
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
