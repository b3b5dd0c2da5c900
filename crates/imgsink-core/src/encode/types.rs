//! Core types for in-memory image encoding.

use image::ExtendedColorType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for encode-to-memory operations.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Component count is outside the supported 1-4 range.
    #[error("Unsupported component count: {0} (expected 1-4)")]
    InvalidComponents(u8),

    /// Width, height, stride, and components describe a pixel buffer larger
    /// than the address space.
    #[error("Image too large: {width}x{height} with {components} components overflows the pixel buffer size")]
    DimensionsTooLarge {
        width: u32,
        height: u32,
        components: u8,
    },

    /// Row stride is smaller than one tightly packed row.
    #[error("Invalid stride: {stride} bytes is less than the {minimum}-byte row size")]
    InvalidStride { stride: usize, minimum: usize },

    /// Pixel buffer doesn't cover the declared dimensions.
    #[error("Pixel buffer too small: expected at least {expected} bytes, got {actual}")]
    PixelBufferTooSmall { expected: usize, actual: usize },

    /// The output buffer could not be grown.
    #[error("Out of memory while accumulating encoded output")]
    OutOfMemory,

    /// The encoder reported success but wrote nothing.
    #[error("Encoder produced no output")]
    EmptyOutput,

    /// The encoder itself failed.
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Output format selector with its format-specific parameter.
///
/// The two formats share all of the buffer-management glue; only the
/// parameter and the encoder invocation differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "lowercase")]
pub enum EncodeFormat {
    /// PNG with an explicit row stride in bytes. A stride of 0 means rows
    /// are tightly packed (`width * components` bytes).
    Png { stride_bytes: u32 },
    /// JPEG with quality 1-100 (values outside the range are clamped).
    Jpeg { quality: u8 },
}

/// Map a component count to the image crate's color type.
///
/// Formats that don't support a layout (e.g. JPEG with alpha) reject it at
/// encode time; this mapping only validates the 1-4 range.
pub(crate) fn color_type_for_components(components: u8) -> Result<ExtendedColorType, EncodeError> {
    match components {
        1 => Ok(ExtendedColorType::L8),
        2 => Ok(ExtendedColorType::La8),
        3 => Ok(ExtendedColorType::Rgb8),
        4 => Ok(ExtendedColorType::Rgba8),
        other => Err(EncodeError::InvalidComponents(other)),
    }
}
