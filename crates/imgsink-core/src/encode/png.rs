//! PNG encoding to memory.
//!
//! PNG is the format that carries a caller-supplied row stride: callers that
//! render into padded framebuffers can pass their stride instead of repacking
//! first. The encoder itself takes tightly packed rows, so padded input is
//! repacked once before encoding.

use std::borrow::Cow;

use super::adapter::encode_to_memory;
use super::types::{EncodeError, EncodeFormat};

/// Encode interleaved 8-bit pixel data to PNG bytes.
///
/// # Arguments
///
/// * `pixels` - Pixel data, row-major order, `stride_bytes` bytes per row
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `components` - Channels per pixel (1 = gray, 2 = gray+alpha, 3 = RGB, 4 = RGBA)
/// * `stride_bytes` - Distance between row starts in bytes; 0 means tightly
///   packed (`width * components`)
///
/// # Returns
///
/// The complete PNG file as an owned byte buffer, starting with the PNG
/// signature.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The component count is outside 1-4
/// - The stride is non-zero but smaller than one packed row
/// - The pixel buffer is smaller than `height * stride`
/// - The underlying encoder fails or produces no output
///
/// # Example
///
/// ```
/// use imgsink_core::encode::encode_png;
///
/// let pixels = vec![200u8; 8 * 8 * 3];
/// let png = encode_png(&pixels, 8, 8, 3, 0).unwrap();
/// assert_eq!(&png[0..4], &[0x89, b'P', b'N', b'G']);
/// ```
pub fn encode_png(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: u8,
    stride_bytes: u32,
) -> Result<Vec<u8>, EncodeError> {
    encode_to_memory(
        pixels,
        width,
        height,
        components,
        EncodeFormat::Png { stride_bytes },
    )
}

/// Repack rows with stride padding into tightly packed rows.
///
/// Borrows the input when the stride already matches the packed row size.
/// Callers have validated that `pixels` covers `stride * rows` bytes and
/// that `stride >= row_bytes`.
pub(super) fn pack_rows<'a>(
    pixels: &'a [u8],
    row_bytes: usize,
    stride: usize,
    rows: usize,
) -> Cow<'a, [u8]> {
    if stride == row_bytes {
        return Cow::Borrowed(&pixels[..row_bytes * rows]);
    }
    let mut packed = Vec::with_capacity(row_bytes * rows);
    for row in pixels.chunks(stride).take(rows) {
        packed.extend_from_slice(&row[..row_bytes]);
    }
    Cow::Owned(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// PNG file signature.
    const PNG_MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_basic() {
        let pixels = vec![128u8; 16 * 16 * 3];

        let png = encode_png(&pixels, 16, 16, 3, 0).unwrap();

        assert_eq!(&png[0..8], &PNG_MAGIC);
        assert!(png.len() > 8);
    }

    #[test]
    fn test_encode_png_one_pixel_with_explicit_stride() {
        // 1x1 RGB, solid color, stride = 3 bytes
        let pixels = [255u8, 0, 0];

        let png = encode_png(&pixels, 1, 1, 3, 3).unwrap();

        assert_eq!(&png[0..8], &PNG_MAGIC);
        assert!(!png.is_empty());
    }

    #[test]
    fn test_encode_png_grayscale_and_rgba() {
        let gray = vec![90u8; 12 * 9];
        let png = encode_png(&gray, 12, 9, 1, 0).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);

        let rgba = vec![200u8; 12 * 9 * 4];
        let png = encode_png(&rgba, 12, 9, 4, 0).unwrap();
        assert_eq!(&png[0..8], &PNG_MAGIC);
    }

    #[test]
    fn test_encode_png_padded_stride_matches_tight() {
        let width = 5usize;
        let height = 4;
        let row_bytes = width * 3;
        let stride = row_bytes + 7; // padded rows

        let mut padded = vec![0xEEu8; stride * height];
        let mut tight = Vec::with_capacity(row_bytes * height);
        for y in 0..height {
            for i in 0..row_bytes {
                let value = ((y * row_bytes + i) % 251) as u8;
                padded[y * stride + i] = value;
                tight.push(value);
            }
        }

        let from_padded = encode_png(&padded, width as u32, height as u32, 3, stride as u32);
        let from_tight = encode_png(&tight, width as u32, height as u32, 3, 0);

        assert_eq!(from_padded.unwrap(), from_tight.unwrap());
    }

    #[test]
    fn test_encode_png_stride_below_row_size_fails() {
        let pixels = vec![0u8; 100];
        let result = encode_png(&pixels, 10, 3, 3, 10); // rows are 30 bytes

        assert!(matches!(
            result,
            Err(EncodeError::InvalidStride {
                stride: 10,
                minimum: 30
            })
        ));
    }

    #[test]
    fn test_encode_png_undersized_buffer_fails() {
        // 4 rows at 32-byte stride needs 128 bytes
        let pixels = vec![0u8; 127];
        let result = encode_png(&pixels, 8, 4, 3, 32);

        assert!(matches!(
            result,
            Err(EncodeError::PixelBufferTooSmall {
                expected: 128,
                actual: 127
            })
        ));
    }

    #[test]
    fn test_encode_png_zero_dimensions_fail() {
        let result = encode_png(&[], 0, 10, 3, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));

        let result = encode_png(&[], 10, 0, 3, 0);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_deterministic() {
        let pixels: Vec<u8> = (0..6 * 6 * 3).map(|i| (i * 31 % 256) as u8).collect();

        let first = encode_png(&pixels, 6, 6, 3, 0).unwrap();
        let second = encode_png(&pixels, 6, 6, 3, 0).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_pack_rows_borrows_when_tight() {
        let pixels = [1u8, 2, 3, 4, 5, 6];
        let packed = pack_rows(&pixels, 3, 3, 2);
        assert!(matches!(packed, Cow::Borrowed(_)));
        assert_eq!(&*packed, &pixels);
    }

    #[test]
    fn test_pack_rows_strips_padding() {
        // Two rows of 2 bytes each, stride 4
        let pixels = [1u8, 2, 0xFF, 0xFF, 3, 4, 0xFF, 0xFF];
        let packed = pack_rows(&pixels, 2, 4, 2);
        assert_eq!(&*packed, &[1, 2, 3, 4]);
    }
}
