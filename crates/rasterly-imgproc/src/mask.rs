use rasterly_image::{Pixel, RasterBuffer};

use crate::error::TransformError;

/// Decide per pixel whether a transform applies or is suppressed.
///
/// With no mask pixel, or a mask pixel whose red, green and blue channels
/// are all exactly zero, the transformed candidate wins. Any non-zero RGB
/// channel passes the source pixel through verbatim, alpha included. Mask
/// alpha is never inspected.
///
/// The rule is identical across every maskable operation and is evaluated
/// per pixel, not per image.
///
/// # Examples
///
/// ```
/// use rasterly_image::Pixel;
/// use rasterly_imgproc::mask;
///
/// let source = Pixel::from_channels(10, 20, 30, 40);
/// let brightened = Pixel::from_channels(60, 70, 80, 40);
///
/// let opaque = Pixel::from_channels(255, 255, 255, 0);
/// let clear = Pixel::from_channels(0, 0, 0, 99);
///
/// assert_eq!(mask::apply(source, None, brightened), brightened);
/// assert_eq!(mask::apply(source, Some(clear), brightened), brightened);
/// assert_eq!(mask::apply(source, Some(opaque), brightened), source);
/// ```
pub fn apply(source: Pixel, mask: Option<Pixel>, transformed: Pixel) -> Pixel {
    match mask {
        Some(m) if m.r() > 0 || m.g() > 0 || m.b() > 0 => source,
        _ => transformed,
    }
}

/// Check that a mask buffer, when present, matches the source dimensions.
///
/// # Errors
///
/// Returns [`TransformError::DimensionMismatch`] when the sizes differ.
pub fn ensure_matches(
    src: &RasterBuffer,
    mask: Option<&RasterBuffer>,
) -> Result<(), TransformError> {
    if let Some(mask) = mask {
        if mask.size() != src.size() {
            return Err(TransformError::DimensionMismatch(
                mask.cols(),
                mask.rows(),
                src.cols(),
                src.rows(),
            ));
        }
    }
    Ok(())
}

/// Fetch the mask pixel paired with `(row, col)`, if a mask is present.
///
/// Callers must have validated the mask size with [`ensure_matches`].
pub(crate) fn pixel_at(mask: Option<&RasterBuffer>, row: usize, col: usize) -> Option<Pixel> {
    mask.map(|m| m.as_slice()[row * m.cols() + col])
}
