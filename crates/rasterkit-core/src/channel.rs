//! In-place per-pixel channel operations.
//!
//! These never change the raster's dimensions and never reallocate its
//! storage, so they cannot fail.

use crate::luminance::pixel_to_gray;
use crate::raster::{Pixel, Raster};

/// Convert a raster to grayscale in place.
///
/// Every pixel keeps three channels, all set to the pixel's luma.
///
/// # Example
/// ```
/// use rasterkit_core::{channel::grayscale, Pixel, Raster};
///
/// let mut raster = Raster::from_pixels(1, 1, vec![Pixel::new(100, 150, 200)]).unwrap();
/// grayscale(&mut raster);
/// assert_eq!(raster.pixel(0, 0), Pixel::gray(140));
/// ```
pub fn grayscale(raster: &mut Raster) {
    for p in raster.pixels_mut() {
        *p = Pixel::gray(pixel_to_gray(*p));
    }
    tracing::debug!(rows = raster.rows(), cols = raster.cols(), "grayscale");
}

/// Rotate the color channels of every pixel: R takes G, G takes B, B takes R.
///
/// This is a cycle of order three, so applying it three times restores the
/// original raster.
pub fn swap_channels(raster: &mut Raster) {
    for p in raster.pixels_mut() {
        let red = p.r;
        p.r = p.g;
        p.g = p.b;
        p.b = red;
    }
    tracing::debug!(rows = raster.rows(), cols = raster.cols(), "swap channels");
}

/// Invert every channel of every pixel (`v` becomes `255 - v`).
pub fn invert(raster: &mut Raster) {
    for p in raster.pixels_mut() {
        p.r = 255 - p.r;
        p.g = 255 - p.g;
        p.b = 255 - p.b;
    }
    tracing::debug!(rows = raster.rows(), cols = raster.cols(), "invert");
}


// ============================================================================
// Property-Based Tests
// ============================================================================
