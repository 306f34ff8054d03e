//! Decoded image buffer

use std::fmt;

/// Bytes per pixel of every decoded image (RGBA8)
pub const BYTES_PER_PIXEL: usize = 4;

/// A decoded 32-bit RGBA image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Row-major RGBA8 pixels, top row first
    pub pixels: Vec<u8>,
}

impl Image {
    /// Bits per pixel (always 32)
    pub fn bit_count(&self) -> u32 {
        (BYTES_PER_PIXEL * 8) as u32
    }

    /// Size of the pixel data in bytes
    pub fn data_size(&self) -> usize {
        self.pixels.len()
    }

    /// RGBA value at (x, y), or `None` when out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let rgba = self.pixels.get(offset..offset + BYTES_PER_PIXEL)?;
        Some([rgba[0], rgba[1], rgba[2], rgba[3]])
    }
}

impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===== PNG =====")?;
        writeln!(f, "    Width: {} pixels", self.width)?;
        writeln!(f, "   Height: {} pixels", self.height)?;
        writeln!(f, "Bit Count: {} bits", self.bit_count())?;
        write!(f, "Data Size: {} bytes", self.data_size())
    }
}
