//! File header and DIB header parsing.
//!
//! Only the leading 32 bytes of the 108-byte `BITMAPV4HEADER` are decoded;
//! color masks, color space, endpoints and gamma are skipped.

use core::fmt;

use super::utils::Cursor;
use crate::error::BmpError;

/// Length of the file header at the start of every BMP.
pub const FILE_HEADER_LEN: usize = 14;

/// Size of the only DIB header variant this crate decodes.
pub const BITMAPV4HEADER_SIZE: u32 = 108;

/// `BI_RGB`: no compression.
const BI_RGB: u32 = 0;

/// The 14-byte header at the start of a BMP file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FileHeader {
    /// Total file size as declared by the file. Not checked against the
    /// actual buffer length unless decoding in strict mode.
    pub file_size: u32,
    /// Byte offset from the start of the file to the pixel array.
    pub pixel_array_offset: u32,
}

/// The retained leading fields of a `BITMAPV4HEADER`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DibHeader {
    pub size: u32,
    pub width: i32,
    /// Positive for bottom-up row storage, negative for top-down.
    pub height: i32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    /// Size of the raw pixel data. May be zero for uncompressed files.
    pub image_size: u32,
    /// Horizontal resolution in pixels per meter.
    pub x_resolution: i32,
    /// Vertical resolution in pixels per meter.
    pub y_resolution: i32,
}

impl DibHeader {
    pub fn kind(&self) -> DibHeaderKind {
        DibHeaderKind::from_size(self.size)
    }

    /// Whether the first stored row is the visual top of the image.
    pub fn is_top_down(&self) -> bool {
        self.height < 0
    }
}

/// Documented DIB header variants, identified by their declared size.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DibHeaderKind {
    /// 12 bytes, OS/2 1.x and Windows 2.x.
    Core,
    /// 16 or 64 bytes, OS/2 2.x.
    Os22x,
    /// 40 bytes.
    Info,
    /// 52 bytes, adds RGB bit masks.
    V2Info,
    /// 56 bytes, adds an alpha mask.
    V3Info,
    /// 108 bytes, adds color space and gamma.
    V4,
    /// 124 bytes, adds ICC profile data.
    V5,
    Unknown(u32),
}

impl DibHeaderKind {
    pub fn from_size(size: u32) -> Self {
        match size {
            12 => Self::Core,
            16 | 64 => Self::Os22x,
            40 => Self::Info,
            52 => Self::V2Info,
            56 => Self::V3Info,
            108 => Self::V4,
            124 => Self::V5,
            other => Self::Unknown(other),
        }
    }

    /// The Windows SDK structure name for this variant.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Core => "BITMAPCOREHEADER",
            Self::Os22x => "OS22XBITMAPHEADER",
            Self::Info => "BITMAPINFOHEADER",
            Self::V2Info => "BITMAPV2INFOHEADER",
            Self::V3Info => "BITMAPV3INFOHEADER",
            Self::V4 => "BITMAPV4HEADER",
            Self::V5 => "BITMAPV5HEADER",
            Self::Unknown(_) => "unknown DIB header",
        }
    }
}

impl fmt::Display for DibHeaderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse the file header from the first 14 bytes of `data`.
///
/// Fails with [`BmpError::UnrecognizedFormat`] unless `data` starts with `BM`.
pub fn parse_file_header(data: &[u8]) -> Result<FileHeader, BmpError> {
    if data.get(..2) != Some(b"BM".as_slice()) {
        return Err(BmpError::UnrecognizedFormat);
    }

    let mut cur = Cursor::new(data);
    cur.skip(2)?;
    let file_size = cur.get_u32_le()?;
    // Two reserved u16 fields
    cur.skip(4)?;
    let pixel_array_offset = cur.get_u32_le()?;

    Ok(FileHeader {
        file_size,
        pixel_array_offset,
    })
}

/// Parse the DIB header from `data`, which starts at file offset 14.
///
/// Only the 108-byte `BITMAPV4HEADER` with `BI_RGB` compression is accepted;
/// every other header size or compression fails with
/// [`BmpError::UnsupportedVariant`].
pub fn parse_dib_header(data: &[u8]) -> Result<DibHeader, BmpError> {
    let mut cur = Cursor::new(data);

    let size = cur.get_u32_le()?;
    if size != BITMAPV4HEADER_SIZE {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "DIB header size {size} ({}), only the {BITMAPV4HEADER_SIZE}-byte {} is supported",
            DibHeaderKind::from_size(size),
            DibHeaderKind::V4,
        )));
    }

    let header = DibHeader {
        size,
        width: cur.get_i32_le()?,
        height: cur.get_i32_le()?,
        color_planes: cur.get_u16_le()?,
        bits_per_pixel: cur.get_u16_le()?,
        compression: cur.get_u32_le()?,
        image_size: cur.get_u32_le()?,
        x_resolution: cur.get_i32_le()?,
        y_resolution: cur.get_i32_le()?,
    };

    if header.compression != BI_RGB {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "BMP compression {} unsupported, only uncompressed (0) is supported",
            header.compression
        )));
    }

    Ok(header)
}

/// Parse both headers from a whole BMP file.
pub(crate) fn parse_headers(data: &[u8]) -> Result<(FileHeader, DibHeader), BmpError> {
    let file_header = parse_file_header(data)?;
    let dib_header = parse_dib_header(
        data.get(FILE_HEADER_LEN..)
            .ok_or(BmpError::UnexpectedEof)?,
    )?;
    Ok((file_header, dib_header))
}

/// Extra checks applied by [`crate::BmpPermissiveness::Strict`].
pub(crate) fn validate_strict(
    file_header: &FileHeader,
    dib_header: &DibHeader,
    data_len: usize,
) -> Result<(), BmpError> {
    if dib_header.bits_per_pixel != 24 {
        return Err(BmpError::UnsupportedVariant(alloc::format!(
            "BMP bit depth {} unsupported, only 24 is supported",
            dib_header.bits_per_pixel
        )));
    }
    if dib_header.color_planes != 1 {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "BMP planes field is {}, expected 1",
            dib_header.color_planes
        )));
    }
    if file_header.file_size != 0 && file_header.file_size as usize != data_len {
        return Err(BmpError::InvalidHeader(alloc::format!(
            "BMP file size field ({}) doesn't match actual size ({data_len})",
            file_header.file_size
        )));
    }
    Ok(())
}
