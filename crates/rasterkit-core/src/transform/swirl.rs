//! Swirl distortion by inverse mapping.
//!
//! For each output pixel at `(x, y)` = `(col, row)` the source location is the
//! output location rotated about the center by an angle that grows with the
//! distance from the center:
//!
//! ```text
//! alpha = sqrt((x - cx)^2 + (y - cy)^2) / s
//! src_x = (x - cx) * cos(alpha) - (y - cy) * sin(alpha) + cx
//! src_y = (x - cx) * sin(alpha) + (y - cy) * cos(alpha) + cy
//! ```
//!
//! Source coordinates are truncated toward zero and sampled nearest-neighbor.
//! Locations outside the raster produce black.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{RasterError, Result};
use crate::raster::{Pixel, Raster};

/// Parameters of a swirl distortion.
///
/// When deserialized, a missing, `null` or `-1` center coordinate selects
/// the geometric center.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwirlParams {
    /// Center column; `None` uses `cols / 2`.
    #[serde(default, deserialize_with = "center_coordinate")]
    pub center_x: Option<f64>,
    /// Center row; `None` uses `rows / 2`.
    #[serde(default, deserialize_with = "center_coordinate")]
    pub center_y: Option<f64>,
    /// Swirl strength. Larger magnitudes twist less; must be non-zero.
    pub strength: f64,
}

impl SwirlParams {
    pub fn new(center_x: Option<f64>, center_y: Option<f64>, strength: f64) -> Self {
        Self {
            center_x,
            center_y,
            strength,
        }
    }

    /// Swirl about the geometric center of the raster.
    pub fn centered(strength: f64) -> Self {
        Self::new(None, None, strength)
    }

    /// Resolve the center for a raster of the given size.
    ///
    /// The default center uses integer division, so a 5-column raster is
    /// centered on column 2.
    pub fn resolve_center(&self, rows: usize, cols: usize) -> (f64, f64) {
        (
            self.center_x.unwrap_or((cols / 2) as f64),
            self.center_y.unwrap_or((rows / 2) as f64),
        )
    }
}

fn center_coordinate<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<f64>::deserialize(deserializer)?;
    Ok(value.filter(|v| *v != -1.0))
}

/// Apply a swirl distortion to a raster. Dimensions are unchanged.
///
/// # Errors
///
/// Returns `RasterError::ArgumentRange` if the strength is zero or not
/// finite, and `RasterError::Allocation` if storage cannot be obtained. The
/// raster is unchanged on error.
pub fn swirl(raster: &mut Raster, params: &SwirlParams) -> Result<()> {
    if params.strength == 0.0 || !params.strength.is_finite() {
        return Err(RasterError::argument_range(
            "strength",
            format!("must be finite and non-zero, got {}", params.strength),
        ));
    }

    let (rows, cols) = (raster.rows(), raster.cols());
    let (cx, cy) = params.resolve_center(rows, cols);
    let mut output = Raster::new(rows, cols)?;

    for r in 0..rows {
        for c in 0..cols {
            let dx = c as f64 - cx;
            let dy = r as f64 - cy;
            let alpha = (dx * dx + dy * dy).sqrt() / params.strength;
            let (sin, cos) = alpha.sin_cos();

            // `as` truncates toward zero, matching integer conversion.
            let src_c = (dx * cos - dy * sin + cx) as i64;
            let src_r = (dx * sin + dy * cos + cy) as i64;

            let in_bounds =
                (0..rows as i64).contains(&src_r) && (0..cols as i64).contains(&src_c);
            let pixel = if in_bounds {
                raster.pixel(src_r as usize, src_c as usize)
            } else {
                Pixel::BLACK
            };
            output.set_pixel(r, c, pixel);
        }
    }

    tracing::debug!(rows, cols, cx, cy, strength = params.strength, "swirl");
    raster.replace_with(output);
    Ok(())
}
