//! Gradient-magnitude edge detection.
//!
//! The raster is first converted to grayscale **in place**; the caller's
//! colors do not survive. Boundary pixels (first/last row and column) keep
//! their gray value. Each interior pixel is classified from the intensity
//! differences around it:
//!
//! ```text
//! gx = (I(r, c - 1) - I(r + 1, c + 1)) / 2
//! gy = (I(r - 1, c) - I(r + 1, c)) / 2
//! magnitude = sqrt(gx^2 + gy^2)
//! ```
//!
//! Note that `gx` pairs the left neighbor with the lower-right diagonal
//! neighbor, not with the right neighbor. Pixels with `magnitude < threshold`
//! become white (not an edge); all others become black (edge).

use crate::channel::grayscale;
use crate::error::{RasterError, Result};
use crate::raster::{Pixel, Raster};

/// Classify every interior pixel as edge (black) or not (white).
///
/// # Arguments
///
/// * `raster` - The raster to process; replaced by the edge map
/// * `threshold` - Minimum gradient magnitude for an edge; `0.0` marks every
///   interior pixel as an edge
///
/// # Errors
///
/// Returns `RasterError::ArgumentRange` if `threshold` is negative or NaN,
/// and `RasterError::Allocation` if storage cannot be obtained. In both cases
/// the raster is left untouched.
pub fn detect_edges(raster: &mut Raster, threshold: f64) -> Result<()> {
    if threshold.is_nan() || threshold < 0.0 {
        return Err(RasterError::argument_range(
            "threshold",
            format!("must be non-negative, got {threshold}"),
        ));
    }

    let (rows, cols) = (raster.rows(), raster.cols());
    let mut output = Raster::new(rows, cols)?;

    grayscale(raster);

    let mut edge_count = 0usize;
    for r in 0..rows {
        for c in 0..cols {
            if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                output.set_pixel(r, c, Pixel::gray(raster.pixel(r, c).r));
                continue;
            }

            let magnitude = gradient_magnitude(raster, r, c);
            if magnitude < threshold {
                output.set_pixel(r, c, Pixel::WHITE);
            } else {
                edge_count += 1;
                output.set_pixel(r, c, Pixel::BLACK);
            }
        }
    }

    tracing::debug!(rows, cols, threshold, edge_count, "edge detection");
    raster.replace_with(output);
    Ok(())
}

/// Gradient magnitude at an interior pixel of a grayscale raster.
#[inline]
fn gradient_magnitude(gray: &Raster, r: usize, c: usize) -> f64 {
    let intensity = |row: usize, col: usize| gray.pixel(row, col).g as i32;

    let gx = (intensity(r, c - 1) - intensity(r + 1, c + 1)) as f64 / 2.0;
    let gy = (intensity(r - 1, c) - intensity(r + 1, c)) as f64 / 2.0;
    (gx * gx + gy * gy).sqrt()
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn raster_strategy() -> impl Strategy<Value = Raster> {
        (1usize..=12, 1usize..=12).prop_flat_map(|(rows, cols)| {
            prop::collection::vec(any::<u8>(), rows * cols * 3)
                .prop_map(move |bytes| Raster::from_rgb_bytes(rows, cols, &bytes).unwrap())
        })
    }

    proptest! {
        /// Property: Interior pixels are strictly black or white and the
        /// frame carries the grayscale value.
        #[test]
        fn prop_output_classification(raster in raster_strategy(), threshold in 0.0f64..200.0) {
            let mut gray = raster.clone();
            grayscale(&mut gray);

            let mut result = raster;
            detect_edges(&mut result, threshold).unwrap();

            let (rows, cols) = (result.rows(), result.cols());
            for r in 0..rows {
                for c in 0..cols {
                    let p = result.pixel(r, c);
                    if r == 0 || c == 0 || r == rows - 1 || c == cols - 1 {
                        prop_assert_eq!(p, gray.pixel(r, c));
                    } else {
                        prop_assert!(p == Pixel::WHITE || p == Pixel::BLACK);
                    }
                }
            }
        }
    }
}
