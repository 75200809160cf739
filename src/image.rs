use core::fmt;

use crate::bmp::{DibHeader, FileHeader};
use crate::pixel::PixelMatrix;

/// A decoded bitmap: both headers plus the pixel matrix.
///
/// Built once by the decoder and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    file_header: FileHeader,
    dib_header: DibHeader,
    pixels: PixelMatrix,
}

impl Image {
    pub(crate) fn new(file_header: FileHeader, dib_header: DibHeader, pixels: PixelMatrix) -> Self {
        Self {
            file_header,
            dib_header,
            pixels,
        }
    }

    pub fn file_header(&self) -> &FileHeader {
        &self.file_header
    }

    pub fn dib_header(&self) -> &DibHeader {
        &self.dib_header
    }

    pub fn pixels(&self) -> &PixelMatrix {
        &self.pixels
    }

    /// Decoded width in pixels (may be narrower than the header declares).
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    /// Decoded height in rows (derived from the pixel data).
    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    /// Split into headers and pixels.
    pub fn into_parts(self) -> (FileHeader, DibHeader, PixelMatrix) {
        (self.file_header, self.dib_header, self.pixels)
    }
}

/// Two-line header summary.
impl fmt::Display for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fh = &self.file_header;
        let dib = &self.dib_header;
        writeln!(
            f,
            "BMP header: file size {} bytes, pixel array at offset {}",
            fh.file_size, fh.pixel_array_offset
        )?;
        write!(
            f,
            "DIB header: {} ({} bytes), {}x{}, {} plane(s), {} bpp, compression {}, \
             image size {} bytes, resolution {}x{} px/m",
            dib.kind(),
            dib.size,
            dib.width,
            dib.height,
            dib.color_planes,
            dib.bits_per_pixel,
            dib.compression,
            dib.image_size,
            dib.x_resolution,
            dib.y_resolution
        )
    }
}
