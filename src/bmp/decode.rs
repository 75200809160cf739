//! Pixel array decoder for 24-bit uncompressed rows.
//!
//! BMP stores rows bottom-up (unless the height is negative), each padded to
//! a 4-byte boundary, with pixels as `B, G, R` byte triplets. The decoder
//! yields a top-down matrix of RGB pixels.

use alloc::vec::Vec;

use enough::{Stop, Unstoppable};
use rgb::RGB8;

use super::BmpPermissiveness;
use super::header::DibHeader;
use crate::error::BmpError;
use crate::pixel::PixelMatrix;

/// Padded byte width of one pixel row: `bits_per_pixel * width` rounded up
/// to a multiple of 32 bits, in bytes.
///
/// Fails with [`BmpError::Geometry`] when the stride is not positive.
pub fn row_stride(dib: &DibHeader) -> Result<usize, BmpError> {
    let bits = i64::from(dib.bits_per_pixel) * i64::from(dib.width);
    let stride = (bits + 31).div_euclid(32) * 4;
    if stride <= 0 {
        return Err(BmpError::Geometry(alloc::format!(
            "row stride {stride} is not positive (width {}, {} bpp)",
            dib.width,
            dib.bits_per_pixel
        )));
    }
    usize::try_from(stride).map_err(|_| {
        BmpError::Geometry(alloc::format!("row stride {stride} does not fit in memory"))
    })
}

/// Shape of the matrix a pixel array decodes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PixelGeometry {
    pub stride: usize,
    pub rows: usize,
    pub columns: usize,
    pub top_down: bool,
}

impl PixelGeometry {
    /// In [`BmpPermissiveness::Standard`] the row count comes from the
    /// buffer length and any trailing partial row is dropped. In
    /// [`BmpPermissiveness::Strict`] it comes from the header height, which
    /// the buffer must satisfy.
    pub(crate) fn new(
        dib: &DibHeader,
        data_len: usize,
        permissiveness: BmpPermissiveness,
    ) -> Result<Self, BmpError> {
        let stride = row_stride(dib)?;

        let rows = match permissiveness {
            BmpPermissiveness::Standard => data_len / stride,
            BmpPermissiveness::Strict => {
                let rows = dib.height.unsigned_abs() as usize;
                let needed = rows.checked_mul(stride).ok_or_else(|| {
                    BmpError::Geometry(alloc::format!(
                        "{rows} rows of {stride} bytes overflow"
                    ))
                })?;
                if data_len < needed {
                    return Err(BmpError::Geometry(alloc::format!(
                        "header height {rows} needs {needed} bytes of pixel data, got {data_len}"
                    )));
                }
                rows
            }
        };

        // The scan stops at the row boundary and after `width` pixels, so
        // padding bytes never turn into pixels.
        let width = dib.width.unsigned_abs() as usize;
        let columns = width.min(stride / 3);

        Ok(Self {
            stride,
            rows,
            columns,
            top_down: dib.is_top_down(),
        })
    }

    pub(crate) fn output_bytes(&self) -> Result<usize, BmpError> {
        self.rows
            .checked_mul(self.columns)
            .and_then(|n| n.checked_mul(core::mem::size_of::<RGB8>()))
            .ok_or_else(|| {
                BmpError::LimitExceeded(alloc::format!(
                    "{}x{} pixel matrix overflows",
                    self.columns,
                    self.rows
                ))
            })
    }
}

/// Decode the pixel array that follows the headers.
///
/// `data` starts at the file header's pixel array offset. The row count is
/// derived from `data.len()`, so a trailing partial row is ignored.
pub fn decode_pixel_array(dib: &DibHeader, data: &[u8]) -> Result<PixelMatrix, BmpError> {
    decode_pixel_array_with(dib, data, BmpPermissiveness::Standard, &Unstoppable)
}

/// [`decode_pixel_array`] with an explicit row policy and cancellation token.
pub fn decode_pixel_array_with(
    dib: &DibHeader,
    data: &[u8],
    permissiveness: BmpPermissiveness,
    stop: &dyn Stop,
) -> Result<PixelMatrix, BmpError> {
    let geometry = PixelGeometry::new(dib, data.len(), permissiveness)?;
    decode_rows(data, &geometry, stop)
}

pub(crate) fn decode_rows(
    data: &[u8],
    geometry: &PixelGeometry,
    stop: &dyn Stop,
) -> Result<PixelMatrix, BmpError> {
    let PixelGeometry {
        stride,
        rows,
        columns,
        top_down,
    } = *geometry;

    let body = data
        .get(..rows * stride)
        .ok_or(BmpError::UnexpectedEof)?;
    let mut out = Vec::with_capacity(rows * columns);

    let lines = body.chunks_exact(stride);
    if top_down {
        push_rows(&mut out, lines, columns, stop)?;
    } else {
        // First stored row is the visual bottom.
        push_rows(&mut out, lines.rev(), columns, stop)?;
    }

    Ok(PixelMatrix::from_pixels(out, columns, rows))
}

fn push_rows<'a>(
    out: &mut Vec<RGB8>,
    lines: impl Iterator<Item = &'a [u8]>,
    columns: usize,
    stop: &dyn Stop,
) -> Result<(), BmpError> {
    for (row_idx, line) in lines.enumerate() {
        if row_idx % 16 == 0 {
            stop.check()?;
        }
        out.extend(
            line[..columns * 3]
                .chunks_exact(3)
                .map(|bgr| RGB8::new(bgr[2], bgr[1], bgr[0])),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dib(width: i32, height: i32, bits_per_pixel: u16) -> DibHeader {
        DibHeader {
            size: 108,
            width,
            height,
            color_planes: 1,
            bits_per_pixel,
            ..Default::default()
        }
    }

    #[test]
    fn stride_rounds_up_to_four_bytes() {
        assert_eq!(row_stride(&dib(1, 1, 24)).unwrap(), 4);
        assert_eq!(row_stride(&dib(2, 1, 24)).unwrap(), 8);
        assert_eq!(row_stride(&dib(3, 1, 24)).unwrap(), 12);
        assert_eq!(row_stride(&dib(4, 1, 24)).unwrap(), 12);
        assert_eq!(row_stride(&dib(5, 1, 24)).unwrap(), 16);
    }

    #[test]
    fn non_positive_stride_is_geometry_error() {
        for d in [dib(0, 1, 24), dib(-1, 1, 24), dib(-7, 1, 24), dib(4, 1, 0)] {
            assert!(
                matches!(row_stride(&d), Err(BmpError::Geometry(_))),
                "{d:?}"
            );
        }
    }

    #[test]
    fn three_padding_bytes_do_not_become_a_pixel() {
        // Width 3: 9 bytes of pixels plus 3 bytes of padding per row.
        let g = PixelGeometry::new(&dib(3, 1, 24), 12, BmpPermissiveness::Standard).unwrap();
        assert_eq!(g.columns, 3);
        assert_eq!(g.rows, 1);
    }

    #[test]
    fn standard_row_count_drops_partial_row() {
        let g = PixelGeometry::new(&dib(1, 5, 24), 11, BmpPermissiveness::Standard).unwrap();
        assert_eq!(g.rows, 2);
    }

    #[test]
    fn strict_row_count_follows_header() {
        let g = PixelGeometry::new(&dib(1, -2, 24), 12, BmpPermissiveness::Strict).unwrap();
        assert_eq!(g.rows, 2);
        assert!(g.top_down);
        assert!(matches!(
            PixelGeometry::new(&dib(1, 4, 24), 12, BmpPermissiveness::Strict),
            Err(BmpError::Geometry(_))
        ));
    }
}
