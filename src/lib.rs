//! # zenbmpv4
//!
//! Decoder for one BMP variant: uncompressed, 24 bits per pixel, with the
//! 108-byte `BITMAPV4HEADER` DIB header.
//!
//! Decoding turns a byte buffer into an [`Image`] holding the file header,
//! the leading DIB header fields and a top-down [`PixelMatrix`] of RGB
//! pixels. Bottom-up row order, 4-byte row padding and BGR channel order are
//! all undone by the decoder.
//!
//! ## Row policy
//!
//! By default ([`BmpPermissiveness::Standard`]) the number of rows comes from
//! the length of the pixel data, not from the header height, and a trailing
//! partial row is dropped. [`BmpPermissiveness::Strict`] trusts the header
//! height and rejects files whose pixel data cannot satisfy it.
//!
//! ## Non-Goals
//!
//! - Encoding
//! - RLE, bitfield, JPEG or PNG compression
//! - Bit depths other than 24, DIB headers other than 108 bytes
//! - Image processing beyond decode
//!
//! ## Usage
//!
//! ```no_run
//! use zenbmpv4::{ImageInfo, Unstoppable};
//!
//! let data: &[u8] = &[]; // your BMP bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {}", info.width, info.height, info.dib_kind);
//!
//! let image = zenbmpv4::decode_bmp(data, Unstoppable)?;
//! let top_left = image.pixels()[0][0];
//! println!("{image}\ntop-left: {top_left:?}");
//! # Ok::<(), zenbmpv4::BmpError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod image;
mod info;
mod limits;
mod pixel;

pub mod bmp;

mod decode;
#[cfg(feature = "std")]
mod fs;

// Re-exports
pub use bmp::{BmpPermissiveness, DibHeader, DibHeaderKind, FileHeader};
pub use decode::DecodeRequest;
pub use enough::{Stop, Unstoppable};
pub use error::BmpError;
#[cfg(feature = "std")]
pub use fs::load_from_file;
pub use image::Image;
pub use info::ImageInfo;
pub use limits::Limits;
pub use pixel::PixelMatrix;
pub use rgb::RGB8;

/// Decode a BMP file with default settings.
pub fn decode_bmp(data: &[u8], stop: impl Stop) -> Result<Image, BmpError> {
    DecodeRequest::new(data).decode(stop)
}
