use enough::Stop;

use crate::bmp::{self, BmpPermissiveness};
use crate::error::BmpError;
use crate::image::Image;
use crate::limits::Limits;

/// Builder for a single decode.
///
/// ```no_run
/// use zenbmpv4::{BmpPermissiveness, DecodeRequest, Limits, Unstoppable};
///
/// let data: &[u8] = &[]; // your BMP bytes
/// let limits = Limits {
///     max_pixels: Some(4096 * 4096),
///     ..Default::default()
/// };
/// let image = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_permissiveness(BmpPermissiveness::Strict)
///     .decode(Unstoppable)?;
/// println!("{image}");
/// # Ok::<(), zenbmpv4::BmpError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    permissiveness: BmpPermissiveness,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            permissiveness: BmpPermissiveness::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_permissiveness(mut self, permissiveness: BmpPermissiveness) -> Self {
        self.permissiveness = permissiveness;
        self
    }

    /// Decode headers and pixels. `stop` is polled between rows.
    pub fn decode(self, stop: impl Stop) -> Result<Image, BmpError> {
        bmp::decode(self.data, self.limits, self.permissiveness, &stop)
    }
}
