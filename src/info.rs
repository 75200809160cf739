use crate::bmp::{self, DibHeaderKind};
use crate::error::BmpError;

/// Header-only summary of a BMP, obtained without decoding pixels.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageInfo {
    /// Width as declared by the DIB header.
    pub width: u32,
    /// Absolute height as declared by the DIB header.
    pub height: u32,
    pub top_down: bool,
    pub bits_per_pixel: u16,
    pub dib_kind: DibHeaderKind,
    pub pixel_array_offset: u32,
}

impl ImageInfo {
    /// Probe headers. Fails for the same header conditions as a full decode.
    pub fn from_bytes(data: &[u8]) -> Result<Self, BmpError> {
        let (file_header, dib_header) = bmp::parse_headers(data)?;
        Ok(Self {
            width: dib_header.width.unsigned_abs(),
            height: dib_header.height.unsigned_abs(),
            top_down: dib_header.is_top_down(),
            bits_per_pixel: dib_header.bits_per_pixel,
            dib_kind: dib_header.kind(),
            pixel_array_offset: file_header.pixel_array_offset,
        })
    }
}
