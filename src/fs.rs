use std::path::Path;

use enough::Unstoppable;

use crate::decode::DecodeRequest;
use crate::error::BmpError;
use crate::image::Image;

/// Read a `.bmp` file from disk and decode it with default settings.
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Image, BmpError> {
    let data = std::fs::read(path)?;
    DecodeRequest::new(&data).decode(Unstoppable)
}
