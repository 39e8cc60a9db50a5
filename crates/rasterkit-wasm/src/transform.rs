//! WASM bindings for raster transforms.
//!
//! Every binding transforms the given raster in place. Geometric transforms
//! replace the raster's dimensions; on error the raster is left unchanged.

use crate::types::{to_js_error, JsRaster};
use rasterkit_core::{channel, edges, transform, Operation, SwirlParams};
use wasm_bindgen::prelude::*;

/// Convert a raster to grayscale.
#[wasm_bindgen]
pub fn grayscale(image: &mut JsRaster) {
    channel::grayscale(image.raster_mut());
}

/// Rotate color channels (R takes G, G takes B, B takes R).
#[wasm_bindgen]
pub fn swap_channels(image: &mut JsRaster) {
    channel::swap_channels(image.raster_mut());
}

/// Invert every channel.
#[wasm_bindgen]
pub fn invert(image: &mut JsRaster) {
    channel::invert(image.raster_mut());
}

/// Halve both dimensions by averaging 2x2 blocks.
#[wasm_bindgen]
pub fn zoom_out(image: &mut JsRaster) -> Result<(), JsValue> {
    transform::downsample_half(image.raster_mut()).map_err(to_js_error)
}

/// Rotate 90 degrees clockwise.
#[wasm_bindgen]
pub fn rotate_right(image: &mut JsRaster) -> Result<(), JsValue> {
    transform::rotate_90_cw(image.raster_mut()).map_err(to_js_error)
}

/// Swirl the raster about a center.
///
/// # Arguments
///
/// * `image` - Raster to distort
/// * `cx`, `cy` - Center column and row; pass `-1` for the geometric center
/// * `strength` - Non-zero swirl strength
///
/// # Example (TypeScript)
///
/// ```typescript
/// swirl(raster, -1, -1, 40);
/// ```
#[wasm_bindgen]
pub fn swirl(image: &mut JsRaster, cx: i32, cy: i32, strength: f64) -> Result<(), JsValue> {
    let params = SwirlParams::new(center(cx), center(cy), strength);
    transform::swirl(image.raster_mut(), &params).map_err(to_js_error)
}

/// Replace the raster with its edge map. The colors are lost.
#[wasm_bindgen]
pub fn edge_detection(image: &mut JsRaster, threshold: f64) -> Result<(), JsValue> {
    edges::detect_edges(image.raster_mut(), threshold).map_err(to_js_error)
}

/// Apply an operation described by a JS object.
///
/// # Example (TypeScript)
///
/// ```typescript
/// apply_operation(raster, { op: 'edge-detection', threshold: 20 });
/// apply_operation(raster, { op: 'swirl', center_x: -1, center_y: 10, strength: 40 });
/// ```
///
/// As with [`swirl`], a swirl center of `-1` (or `null`, or an omitted
/// field) selects the middle of the raster.
#[wasm_bindgen]
pub fn apply_operation(image: &mut JsRaster, operation: JsValue) -> Result<(), JsValue> {
    let op: Operation = serde_wasm_bindgen::from_value(operation).map_err(to_js_error)?;
    op.apply(image.raster_mut()).map_err(to_js_error)
}

/// Parse an operation from its command name and textual arguments into a JS object.
#[wasm_bindgen]
pub fn parse_operation(name: &str, args: Vec<String>) -> Result<JsValue, JsValue> {
    let op = Operation::parse(name, args.as_slice()).map_err(to_js_error)?;
    serde_wasm_bindgen::to_value(&op).map_err(to_js_error)
}

fn center(v: i32) -> Option<f64> {
    (v != -1).then_some(v as f64)
}
