use alloc::vec::Vec;
use core::ops::Index;

use rgb::{ComponentBytes as _, RGB8};

/// Decoded pixels, row-major, row 0 is the visual top of the image.
///
/// Indexing with `matrix[row]` yields that row as a slice, so
/// `matrix[row][column]` addresses a single pixel.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelMatrix {
    pixels: Vec<RGB8>,
    width: usize,
    height: usize,
}

impl PixelMatrix {
    pub(crate) fn from_pixels(pixels: Vec<RGB8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// Pixels per row.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Row `y`, or `None` past the bottom.
    pub fn row(&self, y: usize) -> Option<&[RGB8]> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        self.pixels.get(start..start + self.width)
    }

    /// Iterate rows from top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[RGB8]> + '_ {
        (0..self.height).map(move |y| {
            let start = y * self.width;
            &self.pixels[start..start + self.width]
        })
    }

    pub fn get(&self, x: usize, y: usize) -> Option<RGB8> {
        self.row(y)?.get(x).copied()
    }

    /// All pixels, row-major.
    pub fn as_slice(&self) -> &[RGB8] {
        &self.pixels
    }

    pub fn into_vec(self) -> Vec<RGB8> {
        self.pixels
    }

    /// Pixel data as packed `R, G, B` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels.as_bytes().to_vec()
    }

    /// Copy into an [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<RGB8> {
        imgref::ImgVec::new(self.pixels.clone(), self.width, self.height)
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, RGB8> {
        imgref::ImgRef::new(&self.pixels, self.width, self.height)
    }
}

impl Index<usize> for PixelMatrix {
    type Output = [RGB8];

    fn index(&self, y: usize) -> &[RGB8] {
        match self.row(y) {
            Some(row) => row,
            None => panic!("row {y} out of range for {} rows", self.height),
        }
    }
}
