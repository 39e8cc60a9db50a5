//! PPM decoding.

use std::io::Read;

use super::{PPM_MAGIC, PPM_MAX_VALUE};
use crate::error::{RasterError, Result};
use crate::raster::Raster;

/// Decode a binary PPM image from bytes.
///
/// # Errors
///
/// Returns `RasterError::Format` if the magic token is not `P6`, a header
/// field is missing or not a number, the maximum value is not 255, or a
/// dimension is not positive.
/// Returns `RasterError::TruncatedData` if fewer than `rows * cols * 3`
/// pixel bytes follow the header.
pub fn decode_ppm(bytes: &[u8]) -> Result<Raster> {
    let mut header = HeaderCursor::new(bytes);

    let magic = header.token();
    if magic != PPM_MAGIC.as_bytes() {
        return Err(RasterError::Format(format!(
            "bad magic token {:?}, expected {PPM_MAGIC}",
            String::from_utf8_lossy(magic)
        )));
    }

    // Width (columns) comes before height (rows).
    let width = header.number("width")?;
    let height = header.number("height")?;
    let max_value = header.number("maximum value")?;

    if max_value != PPM_MAX_VALUE {
        return Err(RasterError::Format(format!(
            "maximum value must be {PPM_MAX_VALUE}, got {max_value}"
        )));
    }
    if width <= 0 || height <= 0 {
        return Err(RasterError::Format(format!(
            "dimensions must be positive, got {width}x{height}"
        )));
    }

    let cols = usize::try_from(width)
        .map_err(|_| RasterError::Format(format!("width {width} is too large")))?;
    let rows = usize::try_from(height)
        .map_err(|_| RasterError::Format(format!("height {height} is too large")))?;
    let expected = rows
        .checked_mul(cols)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| RasterError::Format(format!("{width}x{height} is too large")))?;

    header.single_whitespace(expected)?;

    let data = header.rest();
    if data.len() < expected {
        return Err(RasterError::TruncatedData {
            expected,
            actual: data.len(),
        });
    }

    let raster = Raster::from_rgb_bytes(rows, cols, &data[..expected])?;
    tracing::debug!(rows, cols, "decoded PPM raster");
    Ok(raster)
}

/// Read a binary PPM image from a reader.
///
/// The reader is consumed to the end before decoding.
pub fn read_ppm<R: Read>(mut reader: R) -> Result<Raster> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_ppm(&bytes)
}

/// Cursor over the ASCII header of a PPM stream.
struct HeaderCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> HeaderCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.pos += 1;
        }
    }

    /// Skip whitespace and `#` comments that run to the end of the line.
    fn skip_separators(&mut self) {
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'#') {
                return;
            }
            while let Some(b) = self.peek() {
                self.pos += 1;
                if b == b'\n' {
                    break;
                }
            }
        }
    }

    /// The next whitespace-delimited token, after leading whitespace.
    fn token(&mut self) -> &'a [u8] {
        self.skip_whitespace();
        let start = self.pos;
        while self.peek().is_some_and(|b| !b.is_ascii_whitespace()) {
            self.pos += 1;
        }
        &self.bytes[start..self.pos]
    }

    /// An optionally signed decimal integer, after separators.
    fn number(&mut self, field: &str) -> Result<i64> {
        self.skip_separators();
        let start = self.pos;
        if matches!(self.peek(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        let digits_start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        if self.pos == digits_start {
            return Err(RasterError::Format(format!("expected {field}")));
        }

        // Only ASCII sign and digits were consumed.
        let text = std::str::from_utf8(&self.bytes[start..self.pos])
            .map_err(|_| RasterError::Format(format!("{field} is not ASCII")))?;
        text.parse::<i64>()
            .map_err(|_| RasterError::Format(format!("{field} {text} is out of range")))
    }

    /// Consume the single whitespace byte separating the header from pixel data.
    fn single_whitespace(&mut self, expected: usize) -> Result<()> {
        match self.peek() {
            Some(b) if b.is_ascii_whitespace() => {
                self.pos += 1;
                Ok(())
            }
            Some(_) => Err(RasterError::Format(
                "expected whitespace after maximum value".to_string(),
            )),
            None => Err(RasterError::TruncatedData {
                expected,
                actual: 0,
            }),
        }
    }

    fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::Pixel;

    fn ppm(header: &str, data: &[u8]) -> Vec<u8> {
        let mut bytes = header.as_bytes().to_vec();
        bytes.extend_from_slice(data);
        bytes
    }

    #[test]
    fn test_decode_minimal() {
        let bytes = ppm("P6\n2 1\n255\n", &[1, 2, 3, 4, 5, 6]);
        let raster = decode_ppm(&bytes).unwrap();

        assert_eq!(raster.rows(), 1);
        assert_eq!(raster.cols(), 2);
        assert_eq!(raster.pixel(0, 0), Pixel::new(1, 2, 3));
        assert_eq!(raster.pixel(0, 1), Pixel::new(4, 5, 6));
    }

    #[test]
    fn test_decode_width_before_height() {
        let bytes = ppm("P6 3 2 255\n", &[0u8; 18]);
        let raster = decode_ppm(&bytes).unwrap();
        assert_eq!(raster.cols(), 3);
        assert_eq!(raster.rows(), 2);
    }

    #[test]
    fn test_decode_skips_comments() {
        let bytes = ppm(
            "P6\n# created by hand\n1 # trailing comment\n1\n#another\n255\n",
            &[9, 8, 7],
        );
        let raster = decode_ppm(&bytes).unwrap();
        assert_eq!(raster.pixel(0, 0), Pixel::new(9, 8, 7));
    }

    #[test]
    fn test_decode_whitespace_pixel_bytes_are_data() {
        // Pixel bytes that happen to be ASCII whitespace must not be skipped.
        let bytes = ppm("P6\n1 1\n255\n", &[b'\n', b' ', b'\t']);
        let raster = decode_ppm(&bytes).unwrap();
        assert_eq!(raster.pixel(0, 0), Pixel::new(b'\n', b' ', b'\t'));
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let bytes = ppm("P6\n1 1\n255\n", &[1, 2, 3, 4, 5]);
        let raster = decode_ppm(&bytes).unwrap();
        assert_eq!(raster.pixel_count(), 1);
    }

    #[test]
    fn test_decode_bad_magic() {
        for header in ["P3\n1 1\n255\n", "P66\n1 1\n255\n", ""] {
            let err = decode_ppm(&ppm(header, &[0, 0, 0])).unwrap_err();
            assert!(matches!(err, RasterError::Format(_)), "{header:?}");
        }
    }

    #[test]
    fn test_decode_bad_max_value() {
        let err = decode_ppm(&ppm("P6\n1 1\n65535\n", &[0; 6])).unwrap_err();
        assert!(matches!(err, RasterError::Format(_)));

        let err = decode_ppm(&ppm("P6\n1 1\n254\n", &[0; 3])).unwrap_err();
        assert!(matches!(err, RasterError::Format(_)));
    }

    #[test]
    fn test_decode_non_positive_dimensions() {
        for header in ["P6\n0 1\n255\n", "P6\n1 0\n255\n", "P6\n-4 2\n255\n"] {
            let err = decode_ppm(&ppm(header, &[0; 24])).unwrap_err();
            assert!(matches!(err, RasterError::Format(_)), "{header:?}");
        }
    }

    #[test]
    fn test_decode_non_numeric_field() {
        let err = decode_ppm(b"P6\nwide 1\n255\n").unwrap_err();
        assert!(matches!(err, RasterError::Format(_)));

        let err = decode_ppm(b"P6\n1").unwrap_err();
        assert!(matches!(err, RasterError::Format(_)));
    }

    #[test]
    fn test_decode_truncated_data() {
        let err = decode_ppm(&ppm("P6\n2 2\n255\n", &[0; 11])).unwrap_err();
        assert!(matches!(
            err,
            RasterError::TruncatedData {
                expected: 12,
                actual: 11
            }
        ));
    }

    #[test]
    fn test_decode_missing_data_after_header() {
        let err = decode_ppm(b"P6\n1 1\n255").unwrap_err();
        assert!(matches!(err, RasterError::TruncatedData { actual: 0, .. }));
    }

    #[test]
    fn test_decode_oversized_dimensions() {
        let err = decode_ppm(b"P6\n99999999999999999999 1\n255\n").unwrap_err();
        assert!(matches!(err, RasterError::Format(_)));
    }

    #[test]
    fn test_read_ppm_from_reader() {
        let bytes = ppm("P6\n1 1\n255\n", &[10, 20, 30]);
        let raster = read_ppm(std::io::Cursor::new(bytes)).unwrap();
        assert_eq!(raster.pixel(0, 0), Pixel::new(10, 20, 30));
    }
}
