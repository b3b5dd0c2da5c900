//! Shared encode-to-memory glue.
//!
//! Both output formats follow the same flow: validate the input, stand up a
//! fresh [`MemoryWriter`], run the format's encoder against it, then either
//! hand the accumulated buffer to the caller or return an error with nothing
//! escaping. Only the encoder invocation differs per format.

use std::borrow::Cow;
use std::io;

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::ImageEncoder;

use super::png::pack_rows;
use super::types::{color_type_for_components, EncodeError, EncodeFormat};
use crate::writer::MemoryWriter;

/// Encode raw pixel data to a complete in-memory image.
///
/// This is the single adapter behind [`encode_png`](super::encode_png) and
/// [`encode_jpeg`](super::encode_jpeg), keyed by [`EncodeFormat`].
///
/// # Arguments
///
/// * `pixels` - Interleaved 8-bit pixel data, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `components` - Channels per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
/// * `format` - Output format with its format-specific parameter
///
/// # Returns
///
/// The fully encoded image as an owned byte buffer. On any failure no buffer
/// escapes; partially accumulated output is dropped before returning.
pub fn encode_to_memory(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: u8,
    format: EncodeFormat,
) -> Result<Vec<u8>, EncodeError> {
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    let color = color_type_for_components(components)?;

    // Size computations are checked: dimensions that pass the zero checks can
    // still overflow usize, especially on wasm32.
    let too_large = || EncodeError::DimensionsTooLarge {
        width,
        height,
        components,
    };
    let row_bytes = (width as usize)
        .checked_mul(components as usize)
        .ok_or_else(too_large)?;
    let rows = height as usize;

    // Each format declares how much pixel data it needs and how rows are laid
    // out. PNG accepts a caller-supplied stride and is repacked to tight rows
    // for the encoder; JPEG input is always tightly packed.
    let packed: Cow<[u8]> = match format {
        EncodeFormat::Png { stride_bytes } => {
            let stride = if stride_bytes == 0 {
                row_bytes
            } else {
                stride_bytes as usize
            };
            if stride < row_bytes {
                return Err(EncodeError::InvalidStride {
                    stride,
                    minimum: row_bytes,
                });
            }
            let expected = stride.checked_mul(rows).ok_or_else(too_large)?;
            if pixels.len() < expected {
                return Err(EncodeError::PixelBufferTooSmall {
                    expected,
                    actual: pixels.len(),
                });
            }
            pack_rows(pixels, row_bytes, stride, rows)
        }
        EncodeFormat::Jpeg { .. } => {
            let expected = row_bytes.checked_mul(rows).ok_or_else(too_large)?;
            if pixels.len() < expected {
                return Err(EncodeError::PixelBufferTooSmall {
                    expected,
                    actual: pixels.len(),
                });
            }
            Cow::Borrowed(&pixels[..expected])
        }
    };

    let mut writer = MemoryWriter::new();
    let result = match format {
        EncodeFormat::Png { .. } => {
            PngEncoder::new(&mut writer).write_image(&packed, width, height, color)
        }
        EncodeFormat::Jpeg { quality } => {
            let quality = quality.clamp(1, 100);
            JpegEncoder::new_with_quality(&mut writer, quality)
                .write_image(&packed, width, height, color)
        }
    };

    match result {
        Ok(()) if writer.is_empty() => Err(EncodeError::EmptyOutput),
        Ok(()) => Ok(writer.into_bytes()),
        Err(err) => Err(classify_image_error(err)),
    }
}

/// Recover the out-of-memory signal from the encoder's error chain.
///
/// The sink reports allocation failure through `io::ErrorKind::OutOfMemory`;
/// the image crate wraps that in its own error type. Everything else is an
/// encoder failure.
fn classify_image_error(err: image::ImageError) -> EncodeError {
    if let image::ImageError::IoError(io_err) = &err {
        if io_err.kind() == io::ErrorKind::OutOfMemory {
            return EncodeError::OutOfMemory;
        }
    }
    EncodeError::EncodingFailed(err.to_string())
}
