//! PNG decoding to 32-bit RGBA

use std::io::Cursor;
use std::path::Path;

use png::{BitDepth, ColorType, Transformations};
use tracing::debug;

use crate::error::DecodeError;
use crate::image::{BYTES_PER_PIXEL, Image};

/// Read and decode a PNG file
///
/// A missing file is reported as [`DecodeError::Io`] with
/// `ErrorKind::NotFound`.
pub fn read_png(path: &Path) -> Result<Image, DecodeError> {
    let bytes = std::fs::read(path)?;
    let image = decode(&bytes)?;
    debug!(
        "Read {}x{} PNG from {}",
        image.width,
        image.height,
        path.display()
    );
    Ok(image)
}

/// Decode PNG bytes to 32-bit RGBA
///
/// Palette and sub-byte inputs are expanded, 16-bit channels are stripped to
/// 8 bits, RGB gains an opaque alpha channel and grayscale is replicated
/// across RGB.
pub fn decode(bytes: &[u8]) -> Result<Image, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyFile);
    }

    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != BitDepth::Eight {
        return Err(DecodeError::UnsupportedFormat {
            color_type: info.color_type,
            bit_depth: info.bit_depth,
        });
    }

    let pixel_count = info.width as usize * info.height as usize;
    let pixels = match info.color_type {
        ColorType::Rgba => buf,
        ColorType::Rgb => expand(&buf, 3, pixel_count, |px| [px[0], px[1], px[2], 255]),
        ColorType::GrayscaleAlpha => {
            expand(&buf, 2, pixel_count, |px| [px[0], px[0], px[0], px[1]])
        }
        ColorType::Grayscale => expand(&buf, 1, pixel_count, |px| [px[0], px[0], px[0], 255]),
        ColorType::Indexed => {
            return Err(DecodeError::UnsupportedFormat {
                color_type: info.color_type,
                bit_depth: info.bit_depth,
            });
        }
    };

    Ok(Image {
        width: info.width,
        height: info.height,
        pixels,
    })
}

/// Convert packed pixels of `channels` bytes each into RGBA
fn expand(
    buf: &[u8],
    channels: usize,
    pixel_count: usize,
    to_rgba: impl Fn(&[u8]) -> [u8; 4],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixel_count * BYTES_PER_PIXEL);
    for px in buf.chunks_exact(channels).take(pixel_count) {
        out.extend_from_slice(&to_rgba(px));
    }
    out
}
