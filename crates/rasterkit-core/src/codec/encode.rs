//! PPM encoding.

use std::io::Write;

use super::{PPM_MAGIC, PPM_MAX_VALUE};
use crate::error::Result;
use crate::raster::Raster;

/// Encode a raster as binary PPM bytes.
///
/// The header is always written as `P6\n<cols> <rows>\n255\n`, followed by
/// the raw RGB bytes in row-major order.
pub fn encode_ppm(raster: &Raster) -> Vec<u8> {
    let header = format!(
        "{PPM_MAGIC}\n{} {}\n{PPM_MAX_VALUE}\n",
        raster.cols(),
        raster.rows()
    );

    let mut bytes = Vec::with_capacity(header.len() + raster.byte_size());
    bytes.extend_from_slice(header.as_bytes());
    for p in raster.pixels() {
        bytes.extend_from_slice(&[p.r, p.g, p.b]);
    }

    tracing::debug!(
        rows = raster.rows(),
        cols = raster.cols(),
        bytes = bytes.len(),
        "encoded PPM raster"
    );
    bytes
}

/// Write a raster as binary PPM to a writer.
///
/// # Errors
///
/// Returns `RasterError::Io` if the writer cannot accept every byte.
pub fn write_ppm<W: Write>(mut writer: W, raster: &Raster) -> Result<()> {
    writer.write_all(&encode_ppm(raster))?;
    writer.flush()?;
    Ok(())
}
