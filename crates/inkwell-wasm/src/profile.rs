//! Template thumbnail and color profile bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, make_thumbnail, profile_images, encode_jpeg } from '@inkwell/wasm';
//!
//! const files = await Promise.all(inputs.map(f => f.arrayBuffer()));
//! const bytes = files.map(b => new Uint8Array(b));
//!
//! const thumb = encode_jpeg(make_thumbnail(decode_image(bytes[0])), 80);
//! const { dominantColor, colorCount } = profile_images(bytes);
//! ```

use crate::types::JsPixelBuffer;
use inkwell_core::profile::ColorSample;
use inkwell_core::{PixelBuffer, ProcessResult, StyleProfile, Thumbnailer};
use wasm_bindgen::prelude::*;

/// 200x200 centered-square preview.
#[wasm_bindgen]
pub fn make_thumbnail(image: &JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
    Thumbnailer::default()
        .make(image.buffer())
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Average color across encoded images.
///
/// `images` is an array of `Uint8Array`s holding JPEG or PNG files. They are
/// decoded one at a time. Returns `{ dominantColor: { r, g, b }, colorCount }`.
///
/// # Errors
///
/// Returns an error if the array is empty or any image fails to decode.
#[wasm_bindgen]
pub fn profile_images(images: js_sys::Array) -> Result<JsValue, JsValue> {
    let encoded = images
        .iter()
        .map(|value| js_sys::Uint8Array::new(&value).to_vec());
    let profile = profile_encoded(encoded).map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&profile).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn profile_encoded<I>(images: I) -> ProcessResult<StyleProfile>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    let mut sample = ColorSample::new();
    for bytes in images {
        sample.add(&PixelBuffer::decode(bytes.as_ref())?);
    }
    sample.finish()
}


/// `profile_images` needs real JS arrays and can only run on wasm32 targets.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use inkwell_core::encode::encode_png;
    use inkwell_core::{DominantColor, Rgba};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_profile_images() {
        let gray = PixelBuffer::filled(3, 3, Rgba::opaque(60, 60, 60)).unwrap();
        let png = encode_png(&gray).unwrap();
        let array = js_sys::Array::new();
        array.push(&js_sys::Uint8Array::from(png.as_slice()));
        array.push(&js_sys::Uint8Array::from(png.as_slice()));

        let value = profile_images(array).unwrap();
        let profile: StyleProfile = serde_wasm_bindgen::from_value(value).unwrap();
        assert_eq!(profile.dominant_color, DominantColor::new(60, 60, 60));
        assert_eq!(profile.color_count, 18);
    }

    #[wasm_bindgen_test]
    fn test_profile_images_empty() {
        assert!(profile_images(js_sys::Array::new()).is_err());
    }

    #[wasm_bindgen_test]
    fn test_profile_images_corrupt() {
        let array = js_sys::Array::new();
        array.push(&js_sys::Uint8Array::from(&[1u8, 2, 3][..]));
        assert!(profile_images(array).is_err());
    }
}
