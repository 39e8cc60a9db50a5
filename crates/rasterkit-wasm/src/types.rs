//! WASM-compatible wrapper types for raster data.
//!
//! This module provides JavaScript-friendly types that wrap the core rasterkit
//! types, handling the conversion between Rust and JavaScript data representations.

use rasterkit_core::Raster;
use wasm_bindgen::prelude::*;

/// A raster wrapper for JavaScript.
///
/// The raster lives in WASM memory and is transformed in place by the
/// operation bindings. `pixels()` copies the RGB bytes out to a `Uint8Array`.
#[wasm_bindgen]
pub struct JsRaster {
    inner: Raster,
}

#[wasm_bindgen]
impl JsRaster {
    /// Create a raster from dimensions and packed RGB pixel data.
    ///
    /// # Arguments
    /// * `width` - Raster width in pixels (columns)
    /// * `height` - Raster height in pixels (rows)
    /// * `pixels` - RGB pixel data (3 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Throws if a dimension is zero or `pixels.length != width * height * 3`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsRaster, JsValue> {
        Raster::from_rgb_bytes(height as usize, width as usize, &pixels)
            .map(JsRaster::from_raster)
            .map_err(to_js_error)
    }

    /// Get the raster width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.cols() as u32
    }

    /// Get the raster height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.rows() as u32
    }

    /// Get the number of bytes in the pixel buffer (width * height * 3)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.byte_size()
    }

    /// Returns RGB pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.to_rgb_bytes()
    }

    /// Create an independent copy of this raster.
    #[wasm_bindgen(js_name = clone)]
    pub fn duplicate(&self) -> JsRaster {
        JsRaster::from_raster(self.inner.clone())
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRaster {
    pub(crate) fn from_raster(inner: Raster) -> Self {
        Self { inner }
    }

    pub(crate) fn raster(&self) -> &Raster {
        &self.inner
    }

    pub(crate) fn raster_mut(&mut self) -> &mut Raster {
        &mut self.inner
    }
}

/// Convert a core error into a JavaScript string value.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterkit_core::Pixel;

    #[test]
    fn test_js_raster_creation() {
        let img = JsRaster::from_raster(Raster::new(50, 100).unwrap());
        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.byte_length(), 15000);
    }

    #[test]
    fn test_js_raster_pixels() {
        let pixels = vec![255u8, 128, 64, 32, 16, 8]; // 2 RGB pixels
        let raster = Raster::from_rgb_bytes(1, 2, &pixels).unwrap();
        let img = JsRaster::from_raster(raster);
        assert_eq!(img.pixels(), pixels);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let mut img = JsRaster::from_raster(Raster::new(1, 1).unwrap());
        let copy = img.duplicate();
        img.raster_mut().set_pixel(0, 0, Pixel::WHITE);
        assert_eq!(copy.raster().pixel(0, 0), Pixel::BLACK);
    }
}
