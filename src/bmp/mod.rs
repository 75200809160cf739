//! BMP header parsing and 24-bit pixel array decoding.
//!
//! Most callers want the top-level [`crate::decode_bmp`] or
//! [`crate::DecodeRequest`]; the functions here expose each stage on its own.

mod decode;
mod header;
mod utils;

pub use decode::{decode_pixel_array, decode_pixel_array_with, row_stride};
pub use header::{
    BITMAPV4HEADER_SIZE, DibHeader, DibHeaderKind, FILE_HEADER_LEN, FileHeader, parse_dib_header,
    parse_file_header,
};

pub(crate) use header::parse_headers;

use enough::Stop;

use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;
use decode::PixelGeometry;

/// Controls how strictly the decoder validates input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmpPermissiveness {
    /// Additionally require 24 bpp, one color plane, a file size field that
    /// is zero or matches the buffer, and pixel data covering every row the
    /// header height declares.
    Strict,

    /// Default behavior. Trust only what pixel decoding needs: the row count
    /// is derived from the pixel data length and the header height only
    /// selects bottom-up or top-down order.
    #[default]
    Standard,
}

/// Decode a whole BMP file into an [`Image`].
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<Image, BmpError> {
    let (file_header, dib_header) = header::parse_headers(data)?;
    if permissiveness == BmpPermissiveness::Strict {
        header::validate_strict(&file_header, &dib_header, data.len())?;
    }

    let pixel_bytes = data
        .get(file_header.pixel_array_offset as usize..)
        .ok_or(BmpError::UnexpectedEof)?;
    let geometry = PixelGeometry::new(&dib_header, pixel_bytes.len(), permissiveness)?;
    check_limits(limits, &geometry)?;

    stop.check()?;
    let pixels = decode::decode_rows(pixel_bytes, &geometry, stop)?;
    Ok(Image::new(file_header, dib_header, pixels))
}

fn check_limits(limits: Option<&Limits>, geometry: &PixelGeometry) -> Result<(), BmpError> {
    let out_bytes = geometry.output_bytes()?;
    if let Some(limits) = limits {
        limits.check(geometry.columns, geometry.rows)?;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}
