//! Image encoding WASM bindings.
//!
//! This module exposes the imgsink-core encoding functions to JavaScript,
//! enabling the export workflow to encode pixel data as PNG or JPEG files
//! entirely in memory.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode pixel data to PNG bytes with a row stride
//! - [`encode_jpeg`] - Encode pixel data to JPEG bytes with a quality setting
//! - [`encode_with_format`] - Encode with a format descriptor object
//! - [`encode_png_from_image`] / [`encode_jpeg_from_image`] - Encode a
//!   [`JsRawImage`]
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@imgsink/wasm';
//!
//! // Encode raw RGB pixel data (stride 0 = tightly packed)
//! const png = encode_png(pixels, width, height, 3, 0);
//! const jpeg = encode_jpeg(pixels, width, height, 3, 90);
//! ```

use crate::types::JsRawImage;
use imgsink_core::encode::{self, EncodeFormat};
use wasm_bindgen::prelude::*;

/// Encode pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - Pixel data as a `Uint8Array`, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `components` - Channels per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
/// * `stride_bytes` - Distance between row starts in bytes; pass 0 for
///   tightly packed rows
///
/// # Returns
///
/// A `Uint8Array` containing the complete PNG file, or an error if encoding
/// fails.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The component count is outside 1-4
/// - The pixel buffer doesn't cover `height * stride` bytes
/// - Encoding fails internally
///
/// # Example
///
/// ```typescript
/// // Encode a 100x100 RGBA canvas snapshot
/// const png = encode_png(pixels, 100, 100, 4, 0);
/// console.log(`Encoded ${png.byteLength} bytes`);
/// ```
#[wasm_bindgen]
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: u8,
    stride_bytes: u32,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(pixels, width, height, components, stride_bytes)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - Tightly packed pixel data as a `Uint8Array`, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `components` - Channels per pixel (1 = gray, 3 = RGB)
/// * `quality` - JPEG quality (1-100, where 100 is highest, recommended: 90)
///
/// # Returns
///
/// A `Uint8Array` containing the complete JPEG file, or an error if encoding
/// fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
#[wasm_bindgen]
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: u8,
    quality: u8,
) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(pixels, width, height, components, quality)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode pixel data with a format descriptor object.
///
/// Accepts the same pixel arguments as the per-format functions, with the
/// format selected by a tagged object:
///
/// ```typescript
/// encode_with_format(pixels, w, h, 3, { format: "png", stride_bytes: 0 });
/// encode_with_format(pixels, w, h, 3, { format: "jpeg", quality: 90 });
/// ```
#[wasm_bindgen]
pub fn encode_with_format(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: u8,
    format: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let format: EncodeFormat =
        serde_wasm_bindgen::from_value(format).map_err(|e| JsValue::from_str(&e.to_string()))?;
    encode::encode_to_memory(pixels, width, height, components, format)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsRawImage to PNG bytes.
///
/// Convenience wrapper over [`encode_png`] for images already held in WASM
/// memory; rows are taken as tightly packed.
#[wasm_bindgen]
pub fn encode_png_from_image(image: &JsRawImage) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(
        image.pixel_slice(),
        image.width(),
        image.height(),
        image.components(),
        0,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode a JsRawImage to JPEG bytes.
///
/// Convenience wrapper over [`encode_jpeg`] for images already held in WASM
/// memory.
#[wasm_bindgen]
pub fn encode_jpeg_from_image(image: &JsRawImage, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(
        image.pixel_slice(),
        image.width(),
        image.height(),
        image.components(),
        quality,
    )
    .map_err(|e| JsValue::from_str(&e.to_string()))
}
