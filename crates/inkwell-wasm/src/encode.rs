//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_jpeg, encode_png } from '@inkwell/wasm';
//!
//! const jpeg = encode_jpeg(outline, 90);
//! await writable.write(new Blob([jpeg], { type: 'image/jpeg' }));
//!
//! // Keeps the alpha channel
//! const png = encode_png(outline);
//! ```

use crate::types::JsPixelBuffer;
use inkwell_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image as JPEG bytes. Alpha is dropped.
///
/// `quality` is clamped to 1-100. Outputs use 90, thumbnails 80.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.buffer(), quality).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image as PNG bytes, alpha included.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.buffer()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode_image;

    #[test]
    fn test_encode_jpeg_creates_valid_jpeg() {
        let img = JsPixelBuffer::new(10, 10, vec![128u8; 10 * 10 * 4]).unwrap();
        let jpeg = encode_jpeg(&img, 90).unwrap();
        // JPEG magic bytes
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_png_round_trip() {
        let pixels: Vec<u8> = (0..4 * 3 * 4).map(|i| (i * 5) as u8).collect();
        let img = JsPixelBuffer::new(4, 3, pixels.clone()).unwrap();

        let png = encode_png(&img).unwrap();
        assert_eq!(&png[1..4], b"PNG");
        assert_eq!(decode_image(&png).unwrap().pixels(), pixels);
    }
}
