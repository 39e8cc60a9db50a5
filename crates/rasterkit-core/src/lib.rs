//! Rasterkit Core - RGB raster transform library
//!
//! This crate provides the core functionality for rasterkit: an owned RGB
//! raster, a binary PPM codec, and a set of pixel-level and geometric
//! transforms.
//!
//! # Data Flow
//!
//! ```text
//! bytes -> codec::decode_ppm -> Raster -> Operation::apply -> codec::encode_ppm -> bytes
//! ```
//!
//! Every transform is synchronous, single-threaded and deterministic. A
//! raster must not be transformed from two places at once; clone it to work
//! on independent copies.

pub mod channel;
pub mod codec;
pub mod edges;
pub mod error;
pub mod luminance;
pub mod operation;
pub mod raster;
pub mod transform;

pub use channel::{grayscale, invert, swap_channels};
pub use codec::{decode_ppm, encode_ppm, read_ppm, write_ppm};
pub use edges::detect_edges;
pub use error::{OperationError, RasterError, Result};
pub use luminance::pixel_to_gray;
pub use operation::Operation;
pub use raster::{Pixel, Raster};
pub use transform::{downsample_half, rotate_90_cw, swirl, SwirlParams};

#[cfg(test)]
mod tests {
    use super::*;

    /// A small raster with a distinct color in every pixel.
    fn sample() -> Raster {
        let mut raster = Raster::new(4, 6).unwrap();
        for r in 0..4 {
            for c in 0..6 {
                raster.set_pixel(r, c, Pixel::new((r * 60) as u8, (c * 40) as u8, 90));
            }
        }
        raster
    }

    #[test]
    fn test_decode_transform_encode_pipeline() {
        let bytes = encode_ppm(&sample());

        let mut raster = decode_ppm(&bytes).unwrap();
        Operation::parse("rotate-right", &[] as &[&str])
            .unwrap()
            .apply(&mut raster)
            .unwrap();
        let out = encode_ppm(&raster);

        assert!(out.starts_with(b"P6\n4 6\n255\n"));
        let back = decode_ppm(&out).unwrap();
        assert_eq!((back.rows(), back.cols()), (6, 4));
    }

    #[test]
    fn test_copy_is_independent_of_transform() {
        let original = sample();
        let mut copy = original.clone();
        invert(&mut copy);
        assert_ne!(copy, original);
        invert(&mut copy);
        assert_eq!(copy, original);
    }

    #[test]
    fn test_edges_destroy_caller_colors() {
        let mut raster = sample();
        detect_edges(&mut raster, 5.0).unwrap();
        assert!(raster.pixels().iter().all(|p| p.r == p.g && p.g == p.b));
    }
}
