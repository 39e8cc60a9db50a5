//! PPM codec WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_ppm, encode_ppm } from '@rasterkit/wasm';
//!
//! const raster = decode_ppm(new Uint8Array(await file.arrayBuffer()));
//! const bytes = encode_ppm(raster);
//! ```

use crate::types::{to_js_error, JsRaster};
use rasterkit_core::codec;
use wasm_bindgen::prelude::*;

/// Decode binary PPM bytes into a raster.
///
/// # Errors
///
/// Throws if the header is malformed or the pixel data is truncated.
#[wasm_bindgen]
pub fn decode_ppm(bytes: &[u8]) -> Result<JsRaster, JsValue> {
    codec::decode_ppm(bytes)
        .map(JsRaster::from_raster)
        .map_err(to_js_error)
}

/// Encode a raster as binary PPM bytes.
#[wasm_bindgen]
pub fn encode_ppm(image: &JsRaster) -> Vec<u8> {
    codec::encode_ppm(image.raster())
}
