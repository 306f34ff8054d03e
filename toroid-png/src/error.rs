//! Error types for PNG read/write

use thiserror::Error;

/// Error returned when reading or decoding a PNG
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Failed to read PNG file: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG data is empty")]
    EmptyFile,

    #[error("Malformed PNG stream: {0}")]
    Png(#[from] png::DecodingError),

    #[error("Unsupported PNG output format: {color_type:?} at {bit_depth:?}")]
    UnsupportedFormat {
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },
}

/// Error returned when encoding or writing a PNG
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Unsupported channel count {0} (only 4-channel RGBA is supported)")]
    UnsupportedChannelCount(u8),

    #[error("Image dimensions must be non-zero (got {width}x{height})")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Pixel data is {actual} bytes, expected {expected}")]
    PixelDataLength { expected: usize, actual: usize },

    #[error("Failed to write PNG file: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoder failed: {0}")]
    Png(#[from] png::EncodingError),
}
