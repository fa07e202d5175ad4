//! Outline and colored-illustration bindings.
//!
//! Edges always come from the untouched source. Settings are the defaults:
//! edge threshold 100, saturation boost 0.5, posterize step 32. Encode the
//! result with `encode_jpeg` or `encode_png`.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, outline_image, colored_image, encode_jpeg } from '@inkwell/wasm';
//!
//! const photo = decode_image(bytes);
//! const outline = encode_jpeg(outline_image(photo), 90);
//! const colored = encode_jpeg(colored_image(photo), 90);
//! ```

use crate::types::JsPixelBuffer;
use inkwell_core::{composite, edge, stylize, EdgeBackground, Rgba};
use wasm_bindgen::prelude::*;

/// Black line art on white.
#[wasm_bindgen]
pub fn outline_image(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    edge::detect(image.buffer())
        .render(EdgeBackground::White, Rgba::BLACK)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Posterized, saturation-boosted copy with black edges drawn on top.
#[wasm_bindgen]
pub fn colored_image(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    let source = image.buffer();
    let mask = edge::detect(source);
    composite::overlay_black(&stylize::apply(source), &mask)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
