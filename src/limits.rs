use crate::error::BmpError;

/// Caps on the pixel matrix a decode may produce.
///
/// Checked after the headers are parsed and the row count is known, before
/// any pixel memory is allocated. Width and height are the decoded matrix's,
/// so a header claiming a huge height with little pixel data passes in
/// standard mode. Unset fields are unlimited.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    /// Widest row, in pixels.
    pub max_width: Option<u64>,
    /// Most rows.
    pub max_height: Option<u64>,
    /// Most pixels in the matrix.
    pub max_pixels: Option<u64>,
    /// Largest matrix in bytes, at 3 bytes per `RGB8` pixel.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    pub(crate) fn check(&self, columns: usize, rows: usize) -> Result<(), BmpError> {
        let (columns, rows) = (columns as u64, rows as u64);
        if let Some(max) = self.max_width.filter(|&max| columns > max) {
            return Err(BmpError::LimitExceeded(alloc::format!(
                "decoded width {columns} exceeds limit {max}"
            )));
        }
        if let Some(max) = self.max_height.filter(|&max| rows > max) {
            return Err(BmpError::LimitExceeded(alloc::format!(
                "decoded height {rows} exceeds limit {max}"
            )));
        }
        let pixels = columns.saturating_mul(rows);
        if let Some(max) = self.max_pixels.filter(|&max| pixels > max) {
            return Err(BmpError::LimitExceeded(alloc::format!(
                "{columns}x{rows} matrix has {pixels} pixels, limit is {max}"
            )));
        }
        Ok(())
    }

    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), BmpError> {
        if let Some(max) = self.max_memory_bytes.filter(|&max| bytes as u64 > max) {
            return Err(BmpError::LimitExceeded(alloc::format!(
                "pixel matrix needs {bytes} bytes, memory limit is {max}"
            )));
        }
        Ok(())
    }
}
