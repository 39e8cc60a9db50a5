//! Binary PPM (`P6`) codec.
//!
//! This module provides functionality for:
//! - Decoding a `P6` byte stream into a [`Raster`](crate::Raster)
//! - Encoding a raster back into a `P6` byte stream
//!
//! # Format
//!
//! ```text
//! P6 <ws> width <ws> height <ws> 255 <one whitespace byte> <rows*cols*3 bytes of RGB>
//! ```
//!
//! Anywhere a header number is expected, a `#` starts a comment that runs
//! to the end of the line. Only a maximum channel value of 255 is accepted.
//!
//! # Examples
//!
//! ```ignore
//! use rasterkit_core::codec::{decode_ppm, encode_ppm};
//!
//! let bytes = std::fs::read("photo.ppm").unwrap();
//! let raster = decode_ppm(&bytes).unwrap();
//! println!("Decoded {}x{} raster", raster.cols(), raster.rows());
//! let out = encode_ppm(&raster);
//! ```

mod decode;
mod encode;

pub use decode::{decode_ppm, read_ppm};
pub use encode::{encode_ppm, write_ppm};

/// Magic token identifying a binary PPM stream.
pub const PPM_MAGIC: &str = "P6";

/// The only maximum channel value the codec accepts.
pub const PPM_MAX_VALUE: i64 = 255;
