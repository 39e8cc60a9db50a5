//! Geometric transforms: downsampling, rotation and swirl.
//!
//! Each transform builds a complete replacement raster and then swaps it into
//! the caller's raster in one step. If building the replacement fails, the
//! caller's raster is left untouched.
//!
//! # Coordinate System
//!
//! - `(row, col)` with the origin at the top-left corner
//! - Rows grow downward, columns grow to the right
//! - All sampling is nearest-neighbor; nothing is interpolated

mod downsample;
mod rotation;
mod swirl;

pub use downsample::downsample_half;
pub use rotation::rotate_90_cw;
pub use swirl::{swirl, SwirlParams};
