use rasterly_image::{Pixel, RasterBuffer};

use crate::core::clamp;
use crate::error::TransformError;
use crate::{mask, parallel};

/// Brighten or darken an image by an additive constant.
///
/// Adds `delta` to the red, green and blue channels of every pixel, clamped
/// to `[0, 255]`; alpha is unchanged. A positive constant brightens, a
/// negative one darkens. When a mask is supplied, pixels under a non-zero
/// mask RGB pass through untransformed.
///
/// Saturation is lossy: brightening past a channel boundary and then
/// darkening by the same amount does not restore the original value.
///
/// # Errors
///
/// Returns [`TransformError::InvalidConstant`] when `delta` is zero and
/// [`TransformError::DimensionMismatch`] when the mask size differs from the
/// source size.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::enhance::brighten;
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     255,
///     Pixel::from_channels(100, 30, 60, 0),
/// )
/// .unwrap();
///
/// let brighter = brighten(&image, 10, None).unwrap();
///
/// assert_eq!(brighter.get(0, 0).map(|p| p.r()), Some(110));
/// ```
pub fn brighten(
    src: &RasterBuffer,
    delta: i32,
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    if delta == 0 {
        return Err(TransformError::InvalidConstant);
    }
    mask::ensure_matches(src, mask)?;

    let cols = src.cols();
    parallel::map_rows(src.size(), src.max_value(), |row, col| {
        let px = src.as_slice()[row * cols + col];
        let candidate = Pixel::from_channels(
            clamp(i32::from(px.r()) + delta),
            clamp(i32::from(px.g()) + delta),
            clamp(i32::from(px.b()) + delta),
            px.a(),
        );
        mask::apply(px, mask::pixel_at(mask, row, col), candidate)
    })
}
