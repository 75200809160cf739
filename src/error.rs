use alloc::string::String;
use enough::StopReason;

/// Errors from BMP header parsing and pixel decoding.
///
/// Every variant is a permanent failure for the buffer that produced it;
/// decoding never yields a partial image.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BmpError {
    /// The buffer does not start with the `BM` signature.
    #[error("unrecognized format magic bytes (expected \"BM\")")]
    UnrecognizedFormat,

    /// A well-formed bitmap of a variant this decoder does not handle.
    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    /// The pixel array geometry cannot be decoded (non-positive row stride,
    /// or a height the pixel data cannot satisfy in strict mode).
    #[error("invalid pixel geometry: {0}")]
    Geometry(String),

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("operation cancelled")]
    Cancelled(StopReason),

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StopReason> for BmpError {
    fn from(r: StopReason) -> Self {
        BmpError::Cancelled(r)
    }
}
