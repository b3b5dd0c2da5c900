//! Imgsink WASM - WebAssembly bindings for Imgsink
//!
//! This crate exposes the imgsink-core in-memory encoding functionality to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for raw image data
//! - `encode` - Image encoding bindings (PNG and JPEG export)
//!
//! # Usage
//!
//! ```typescript
//! import init, { encode_png, encode_jpeg } from '@imgsink/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! // Encode RGB pixel data, then hand the bytes to a Blob or file handle
//! const png = encode_png(pixels, width, height, 3, 0);
//! await writable.write(new Blob([png], { type: 'image/png' }));
//! ```

use wasm_bindgen::prelude::*;

mod encode;
mod types;

// Re-export public types
pub use encode::{
    encode_jpeg, encode_jpeg_from_image, encode_png, encode_png_from_image, encode_with_format,
};
pub use types::JsRawImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
    web_sys::console::log_1(&JsValue::from_str(&format!(
        "imgsink-wasm {} ready",
        env!("CARGO_PKG_VERSION")
    )));
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
