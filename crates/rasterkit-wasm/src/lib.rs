//! Rasterkit WASM - WebAssembly bindings for rasterkit
//!
//! This crate provides WASM bindings to expose the rasterkit-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for rasters
//! - `codec` - PPM decode/encode bindings
//! - `transform` - In-place transform bindings and serialized operations
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_ppm, encode_ppm, apply_operation } from '@rasterkit/wasm';
//!
//! await init();
//!
//! const raster = decode_ppm(new Uint8Array(await file.arrayBuffer()));
//! apply_operation(raster, { op: 'zoom-out' });
//! console.log(`Now ${raster.width}x${raster.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod transform;
mod types;

pub use codec::{decode_ppm, encode_ppm};
pub use transform::{
    apply_operation, edge_detection, grayscale, invert, parse_operation, rotate_right,
    swap_channels, swirl, zoom_out,
};
pub use types::JsRaster;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
