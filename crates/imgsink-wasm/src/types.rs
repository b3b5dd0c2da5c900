//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap raw pixel
//! buffers, handling the conversion between Rust and JavaScript data
//! representations.

use wasm_bindgen::prelude::*;

/// A raw image wrapper for JavaScript.
///
/// Holds the interleaved pixel data together with its dimensions and channel
/// count, so the encode bindings can be called with a single handle instead
/// of four loose arguments.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy
/// is made to JavaScript memory as a `Uint8Array`. The `free()` method can be
/// called to explicitly release WASM memory, but this is optional as
/// wasm-bindgen's finalizer will handle cleanup automatically.
#[wasm_bindgen]
pub struct JsRawImage {
    width: u32,
    height: u32,
    components: u8,
    pixels: Vec<u8>,
}

#[wasm_bindgen]
impl JsRawImage {
    /// Create a new JsRawImage from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `components` - Channels per pixel (1 = gray, 3 = RGB, 4 = RGBA)
    /// * `pixels` - Tightly packed pixel data, row-major order
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, components: u8, pixels: Vec<u8>) -> JsRawImage {
        JsRawImage {
            width,
            height,
            components,
            pixels,
        }
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the number of channels per pixel
    #[wasm_bindgen(getter)]
    pub fn components(&self) -> u8 {
        self.components
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.pixels.len()
    }

    /// Returns the pixel data as a Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup
    /// automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsRawImage {
    /// Borrow the pixel data without copying.
    ///
    /// Internal accessor used by the encode bindings.
    pub(crate) fn pixel_slice(&self) -> &[u8] {
        &self.pixels
    }
}
