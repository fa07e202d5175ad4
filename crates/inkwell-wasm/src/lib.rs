//! Inkwell WASM - WebAssembly bindings for Inkwell
//!
//! This crate exposes the bytes-in/bytes-out form of the inkwell-core
//! pipeline to JavaScript/TypeScript. Files stay on the JavaScript side;
//! every function here works on `Uint8Array`s and in-memory images.
//!
//! # Module Structure
//!
//! - `types` - `JsPixelBuffer`, the WASM-side RGBA image
//! - `decode` - JPEG/PNG decoding
//! - `convert` - Outline and colored illustration rendering
//! - `profile` - Template thumbnails and color profiles
//! - `encode` - JPEG/PNG encoding
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, outline_image, encode_jpeg } from '@inkwell/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const outline = encode_jpeg(outline_image(decode_image(bytes)), 90);
//! ```

use wasm_bindgen::prelude::*;

mod convert;
mod decode;
mod encode;
mod profile;
mod types;

pub use convert::{colored_image, outline_image};
pub use decode::decode_image;
pub use encode::{encode_jpeg, encode_png};
pub use profile::{make_thumbnail, profile_images};
pub use types::JsPixelBuffer;

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
