//! Luma calculation using the NTSC (ITU-R BT.601) weights.
//!
//! Luma is `floor(0.30 * R + 0.59 * G + 0.11 * B)`, evaluated exactly in
//! integer arithmetic as `(30 * R + 59 * G + 11 * B) / 100`. A floating-point
//! evaluation of the same formula lands just below the integer for many gray
//! inputs (e.g. 0.30 * 1 + 0.59 * 1 + 0.11 * 1 < 1.0 in `f64`) and would
//! truncate gray level `v` to `v - 1`.

use crate::raster::Pixel;

/// NTSC weight for the red channel, in hundredths.
pub const LUMA_R: u32 = 30;

/// NTSC weight for the green channel, in hundredths.
pub const LUMA_G: u32 = 59;

/// NTSC weight for the blue channel, in hundredths.
pub const LUMA_B: u32 = 11;

const LUMA_SCALE: u32 = LUMA_R + LUMA_G + LUMA_B;

/// Convert a pixel to a single gray intensity, truncating toward zero.
#[inline]
pub fn pixel_to_gray(p: Pixel) -> u8 {
    let weighted = LUMA_R * p.r as u32 + LUMA_G * p.g as u32 + LUMA_B * p.b as u32;
    // The weights sum to LUMA_SCALE, so the quotient never exceeds 255.
    (weighted / LUMA_SCALE) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weights_sum_to_one_hundred() {
        assert_eq!(LUMA_SCALE, 100);
    }

    #[test]
    fn test_gray_pure_white_and_black() {
        assert_eq!(pixel_to_gray(Pixel::WHITE), 255);
        assert_eq!(pixel_to_gray(Pixel::BLACK), 0);
    }

    #[test]
    fn test_gray_primaries_truncate() {
        // 0.30 * 255 = 76.5
        assert_eq!(pixel_to_gray(Pixel::new(255, 0, 0)), 76);
        // 0.59 * 255 = 150.45
        assert_eq!(pixel_to_gray(Pixel::new(0, 255, 0)), 150);
        // 0.11 * 255 = 28.05
        assert_eq!(pixel_to_gray(Pixel::new(0, 0, 255)), 28);
    }

    #[test]
    fn test_gray_mixed_pixel() {
        // 30 + 88.5 + 22 = 140.5
        assert_eq!(pixel_to_gray(Pixel::new(100, 150, 200)), 140);
    }

    #[test]
    fn test_gray_of_gray_is_identity() {
        for v in 0..=255u8 {
            assert_eq!(pixel_to_gray(Pixel::gray(v)), v, "gray level {}", v);
        }
    }
}
