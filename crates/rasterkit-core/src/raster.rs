//! The in-memory RGB raster shared by the codec and every transform.

use crate::error::{RasterError, Result};

/// One RGB pixel with 8 bits per channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// A pixel with the same value in all three channels.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v }
    }
}

/// A rectangular grid of pixels stored in row-major order.
///
/// The pixel at `(row, col)` lives at index `row * cols + col`. A raster
/// always has at least one row and one column, and its storage holds exactly
/// `rows * cols` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    rows: usize,
    cols: usize,
    data: Vec<Pixel>,
}

impl Raster {
    /// Allocate a `rows x cols` raster with every pixel black.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::Allocation` if either dimension is zero, the
    /// pixel count overflows, or the storage cannot be reserved.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let count = checked_pixel_count(rows, cols)?;

        let mut data = Vec::new();
        data.try_reserve_exact(count)
            .map_err(|_| RasterError::Allocation { rows, cols })?;
        data.resize(count, Pixel::BLACK);

        Ok(Self { rows, cols, data })
    }

    /// Build a raster from an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns `RasterError::InvalidRaster` if a dimension is zero or the
    /// buffer length is not `rows * cols`.
    pub fn from_pixels(rows: usize, cols: usize, data: Vec<Pixel>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(RasterError::InvalidRaster(format!(
                "dimensions must be positive, got {rows}x{cols}"
            )));
        }
        let expected = rows.checked_mul(cols).ok_or_else(|| {
            RasterError::InvalidRaster(format!("{rows}x{cols} overflows the pixel count"))
        })?;
        if data.len() != expected {
            return Err(RasterError::InvalidRaster(format!(
                "expected {expected} pixels for {rows}x{cols}, got {}",
                data.len()
            )));
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a raster from packed RGB bytes (3 bytes per pixel, row-major).
    pub fn from_rgb_bytes(rows: usize, cols: usize, bytes: &[u8]) -> Result<Self> {
        if bytes.len() % 3 != 0 {
            return Err(RasterError::InvalidRaster(format!(
                "RGB buffer length {} is not a multiple of 3",
                bytes.len()
            )));
        }
        let data = bytes
            .chunks_exact(3)
            .map(|c| Pixel::new(c[0], c[1], c[2]))
            .collect();
        Self::from_pixels(rows, cols, data)
    }

    /// Create a raster from an `image::RgbImage`.
    pub fn from_rgb_image(img: &image::RgbImage) -> Result<Self> {
        let (width, height) = img.dimensions();
        Self::from_rgb_bytes(height as usize, width as usize, img.as_raw())
    }

    /// Convert to an `image::RgbImage` for interop with the `image` crate.
    ///
    /// Returns `None` if the dimensions do not fit in `u32`.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let width = u32::try_from(self.cols).ok()?;
        let height = u32::try_from(self.rows).ok()?;
        image::RgbImage::from_raw(width, height, self.to_rgb_bytes())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Size of the packed RGB representation in bytes.
    pub fn byte_size(&self) -> usize {
        self.data.len() * 3
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Pixel at `(row, col)`. Panics if out of bounds.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> Pixel {
        self.data[self.index(row, col)]
    }

    #[inline]
    pub fn pixel_mut(&mut self, row: usize, col: usize) -> &mut Pixel {
        let idx = self.index(row, col);
        &mut self.data[idx]
    }

    #[inline]
    pub fn set_pixel(&mut self, row: usize, col: usize, pixel: Pixel) {
        *self.pixel_mut(row, col) = pixel;
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Packed RGB bytes in row-major order.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.byte_size());
        for p in &self.data {
            bytes.extend_from_slice(&[p.r, p.g, p.b]);
        }
        bytes
    }

    /// Replace this raster's dimensions and storage with `other`'s.
    ///
    /// The old storage is released here. Callers build `other` completely
    /// before calling, so nobody observes a half-written or mixed-size raster.
    pub fn replace_with(&mut self, other: Raster) {
        *self = other;
    }
}

fn checked_pixel_count(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(RasterError::Allocation { rows, cols });
    }
    rows.checked_mul(cols)
        .filter(|n| n.checked_mul(std::mem::size_of::<Pixel>()).is_some())
        .ok_or(RasterError::Allocation { rows, cols })
}
