//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image } from '@inkwell/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsPixelBuffer;
use inkwell_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// Decode a JPEG or PNG file into RGBA pixels.
///
/// EXIF orientation is applied, so photos come out upright.
///
/// # Errors
///
/// Returns an error if the bytes are not a supported image or are
/// corrupted or truncated.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    PixelBuffer::decode(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
