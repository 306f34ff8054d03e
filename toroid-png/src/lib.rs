//! PNG image read/write limited to 32-bit RGBA
//!
//! All codec work is delegated to the `png` crate. Decoding always yields
//! RGBA8 pixels regardless of the file's color type; encoding accepts only
//! 4-channel RGBA input.
//!
//! # Example
//! ```no_run
//! use std::path::Path;
//!
//! let image = toroid_png::read_png(Path::new("texture.png"))?;
//! println!("{image}");
//!
//! toroid_png::write_png(Path::new("copy.png"), image.width, image.height, 4, &image.pixels)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod decode;
mod encode;
mod error;
mod image;

pub use decode::{decode, read_png};
pub use encode::{encode, encode_image, write_png};
pub use error::{DecodeError, EncodeError};
pub use image::{BYTES_PER_PIXEL, Image};
