use rasterly_image::{ImageSize, RasterBuffer};

use crate::core::round_half_up;
use crate::error::TransformError;
use crate::parallel;

/// Shrink an image to `new_size` by nearest-neighbor sampling.
///
/// Destination cell `(i, j)` copies the source pixel at
/// `(round(i * H / newH), round(j * W / newW))` with no interpolation or
/// anti-aliasing. Requesting the source size returns an identical image.
///
/// # Errors
///
/// Returns [`TransformError::InvalidScale`] when either requested dimension
/// exceeds the source; only shrinking is supported.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::resize::downscale;
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 4,
///     },
///     255,
///     Pixel::from_channels(9, 9, 9, 0),
/// )
/// .unwrap();
///
/// let small = downscale(
///     &image,
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
/// )
/// .unwrap();
///
/// assert_eq!(small.width(), 2);
/// assert_eq!(small.height(), 2);
/// ```
pub fn downscale(src: &RasterBuffer, new_size: ImageSize) -> Result<RasterBuffer, TransformError> {
    if new_size.width > src.width() || new_size.height > src.height() {
        return Err(TransformError::InvalidScale(
            new_size.width,
            new_size.height,
            src.width(),
            src.height(),
        ));
    }

    let cols = src.cols();
    let x_ratio = src.width() as f32 / new_size.width as f32;
    let y_ratio = src.height() as f32 / new_size.height as f32;

    parallel::map_rows(new_size, src.max_value(), |row, col| {
        let y = round_half_up(f64::from(row as f32 * y_ratio)) as usize;
        let x = round_half_up(f64::from(col as f32 * x_ratio)) as usize;
        src.as_slice()[y * cols + x]
    })
}
