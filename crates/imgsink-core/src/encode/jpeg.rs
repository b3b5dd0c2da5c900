//! JPEG encoding to memory.

use super::adapter::encode_to_memory;
use super::types::{EncodeError, EncodeFormat};

/// Encode interleaved 8-bit pixel data to JPEG bytes.
///
/// # Arguments
///
/// * `pixels` - Tightly packed pixel data, row-major order
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `components` - Channels per pixel; 1 (gray) and 3 (RGB) are what JPEG
///   itself supports, alpha layouts are rejected by the encoder
/// * `quality` - JPEG quality (1-100, where 100 is highest; out-of-range
///   values are clamped)
///
/// # Returns
///
/// The complete JPEG file as an owned byte buffer, starting with the SOI
/// marker (`FF D8`) and ending with EOI (`FF D9`).
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The component count is outside 1-4
/// - The pixel buffer is smaller than `width * height * components`
/// - The underlying encoder fails or produces no output
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(
    pixels: &[u8],
    width: u32,
    height: u32,
    components: u8,
    quality: u8,
) -> Result<Vec<u8>, EncodeError> {
    encode_to_memory(
        pixels,
        width,
        height,
        components,
        EncodeFormat::Jpeg { quality },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_jpeg_basic() {
        let width = 100;
        let height = 100;
        let pixels = vec![128u8; width * height * 3];

        let jpeg = encode_jpeg(&pixels, width as u32, height as u32, 3, 90).unwrap();

        // SOI marker at the start, EOI marker at the end
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        let len = jpeg.len();
        assert_eq!(&jpeg[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_grayscale() {
        let pixels = vec![77u8; 20 * 20];

        let jpeg = encode_jpeg(&pixels, 20, 20, 1, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_one_pixel() {
        let pixels = [255u8, 0, 0];

        let jpeg = encode_jpeg(&pixels, 1, 1, 3, 90).unwrap();
        assert_eq!(&jpeg[0..2], &[0xFF, 0xD8]);
        assert!(jpeg.len() > 4);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let pixels = vec![128u8; 10 * 10 * 3];

        // Quality 0 is clamped to 1
        assert!(encode_jpeg(&pixels, 10, 10, 3, 0).is_ok());

        // Quality 255 is clamped to 100
        assert!(encode_jpeg(&pixels, 10, 10, 3, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_quality_affects_size() {
        // Gradient so the quality difference is visible
        let width = 64usize;
        let height = 64;
        let mut pixels = Vec::with_capacity(width * height * 3);
        for y in 0..height {
            for x in 0..width {
                pixels.push((x * 255 / width) as u8);
                pixels.push((y * 255 / height) as u8);
                pixels.push(128);
            }
        }

        let low_q = encode_jpeg(&pixels, width as u32, height as u32, 3, 20).unwrap();
        let high_q = encode_jpeg(&pixels, width as u32, height as u32, 3, 95).unwrap();

        assert!(high_q.len() > low_q.len());
    }

    #[test]
    fn test_encode_jpeg_undersized_buffer_fails() {
        let pixels = vec![128u8; 99 * 100 * 3]; // One row short

        let result = encode_jpeg(&pixels, 100, 100, 3, 90);
        assert!(matches!(
            result,
            Err(EncodeError::PixelBufferTooSmall { .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_zero_dimensions_fail() {
        let result = encode_jpeg(&[], 0, 100, 3, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));

        let result = encode_jpeg(&[], 100, 0, 3, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_deterministic() {
        let pixels: Vec<u8> = (0..32 * 32 * 3).map(|i| (i * 37 % 256) as u8).collect();

        let first = encode_jpeg(&pixels, 32, 32, 3, 85).unwrap();
        let second = encode_jpeg(&pixels, 32, 32, 3, 85).unwrap();

        assert_eq!(first, second);
    }
}
