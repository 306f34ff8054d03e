//! PNG encoding from 32-bit RGBA

use std::path::Path;

use tracing::debug;

use crate::error::EncodeError;
use crate::image::{BYTES_PER_PIXEL, Image};

/// Encode RGBA pixels as PNG bytes
///
/// Only 4-channel input is accepted, and `pixels` must hold exactly
/// `width * height * 4` bytes.
pub fn encode(
    width: u32,
    height: u32,
    channel_count: u8,
    pixels: &[u8],
) -> Result<Vec<u8>, EncodeError> {
    if channel_count as usize != BYTES_PER_PIXEL {
        return Err(EncodeError::UnsupportedChannelCount(channel_count));
    }
    if width == 0 || height == 0 {
        return Err(EncodeError::ZeroDimension { width, height });
    }

    let expected = width as usize * height as usize * BYTES_PER_PIXEL;
    if pixels.len() != expected {
        return Err(EncodeError::PixelDataLength {
            expected,
            actual: pixels.len(),
        });
    }

    let mut out = Vec::new();
    let mut encoder = png::Encoder::new(&mut out, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    let mut writer = encoder.write_header()?;
    writer.write_image_data(pixels)?;
    writer.finish()?;

    Ok(out)
}

/// Encode an [`Image`] as PNG bytes
pub fn encode_image(image: &Image) -> Result<Vec<u8>, EncodeError> {
    encode(image.width, image.height, BYTES_PER_PIXEL as u8, &image.pixels)
}

/// Encode RGBA pixels and write them to a PNG file
///
/// Nothing is written when validation or encoding fails.
pub fn write_png(
    path: &Path,
    width: u32,
    height: u32,
    channel_count: u8,
    pixels: &[u8],
) -> Result<(), EncodeError> {
    let bytes = encode(width, height, channel_count, pixels)?;
    std::fs::write(path, &bytes)?;
    debug!("Wrote {}x{} PNG to {}", width, height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode, read_png};

    fn checker(width: u32, height: u32) -> Vec<u8> {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, 255 - v, (x * 16) as u8, 200]);
            }
        }
        pixels
    }

    #[test]
    fn test_encode_then_decode_preserves_pixels() {
        let pixels = checker(5, 3);

        let bytes = encode(5, 3, 4, &pixels).unwrap();
        let image = decode(&bytes).unwrap();

        assert_eq!((image.width, image.height), (5, 3));
        assert_eq!(image.pixels, pixels);
        assert_eq!(image.pixel(1, 0), Some([0, 255, 16, 200]));
    }

    #[test]
    fn test_encode_rejects_non_rgba() {
        let result = encode(2, 2, 3, &[0; 12]);
        assert!(matches!(result, Err(EncodeError::UnsupportedChannelCount(3))));
    }

    #[test]
    fn test_encode_rejects_zero_dimensions() {
        assert!(matches!(
            encode(0, 4, 4, &[]),
            Err(EncodeError::ZeroDimension { width: 0, height: 4 })
        ));
        assert!(matches!(
            encode(4, 0, 4, &[]),
            Err(EncodeError::ZeroDimension { width: 4, height: 0 })
        ));
    }

    #[test]
    fn test_encode_rejects_short_pixel_data() {
        let result = encode(2, 2, 4, &[0; 15]);
        assert!(matches!(
            result,
            Err(EncodeError::PixelDataLength {
                expected: 16,
                actual: 15
            })
        ));
    }

    #[test]
    fn test_write_png_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.png");
        let pixels = checker(8, 8);

        write_png(&path, 8, 8, 4, &pixels).unwrap();

        let metadata = std::fs::metadata(&path).unwrap();
        assert!(metadata.len() > 0);
        assert_eq!(read_png(&path).unwrap().pixels, pixels);
    }

    #[test]
    fn test_write_png_failure_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");

        assert!(write_png(&path, 1, 1, 2, &[0, 0]).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_encode_image_round_trip() {
        let image = Image {
            width: 4,
            height: 2,
            pixels: checker(4, 2),
        };

        let bytes = encode_image(&image).unwrap();

        assert_eq!(decode(&bytes).unwrap(), image);
    }
}
