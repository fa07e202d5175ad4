//! WASM-compatible wrapper around the core pixel buffer.

use inkwell_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// A decoded RGBA image held in WASM memory.
///
/// # Memory Management
///
/// `pixels()` copies the data out to a JavaScript `Uint8Array`. Keep images
/// in WASM memory between processing steps and only extract pixels for
/// display. `free()` releases the memory early; otherwise the finalizer
/// does it.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Wrap RGBA pixel data (4 bytes per pixel, row-major).
    ///
    /// Fails if either dimension is zero or the data length is not
    /// `width * height * 4`.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, pixels)
            .map(JsPixelBuffer::from_buffer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Number of bytes in the pixel data (`width * height * 4`).
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.as_raw().len()
    }

    /// RGBA pixel data as a `Uint8Array` copy.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.as_raw().to_vec()
    }

    /// Release WASM memory now instead of waiting for the finalizer.
    pub fn free(self) {}
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}
