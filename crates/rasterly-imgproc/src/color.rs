use rasterly_image::{Pixel, RasterBuffer};

use crate::core::{clamp, round_half_from_zero};
use crate::error::TransformError;
use crate::{mask, parallel};

/// Coefficients of the luma greyscale transform, the Rec. 709 luma row
/// replicated for all three output channels.
pub const GRAYSCALE_MATRIX: [f64; 9] = [
    0.2126, 0.7152, 0.0722, //
    0.2126, 0.7152, 0.0722, //
    0.2126, 0.7152, 0.0722,
];

/// Coefficients of the sepia tone transform.
pub const SEPIA_MATRIX: [f64; 9] = [
    0.393, 0.769, 0.189, //
    0.349, 0.686, 0.168, //
    0.272, 0.534, 0.131,
];

/// Apply a 3x3 linear transform to the RGB channels of every pixel.
///
/// Each output channel is the rounded dot product of the source RGB with one
/// matrix row (ties away from zero), clamped to `[0, 255]`; alpha is copied
/// unchanged. When a mask is supplied, pixels under a non-zero mask RGB pass
/// through untransformed.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `matrix` - Row-major 3x3 coefficients.
/// * `mask` - Optional mask buffer of the same size as `src`.
///
/// # Errors
///
/// Returns [`TransformError::InvalidMatrix`] unless `matrix` holds exactly 9
/// coefficients, and [`TransformError::DimensionMismatch`] when the mask
/// size differs from the source size.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::color::{apply_matrix, GRAYSCALE_MATRIX};
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     255,
///     Pixel::from_channels(100, 30, 60, 0),
/// )
/// .unwrap();
///
/// let gray = apply_matrix(&image, &GRAYSCALE_MATRIX, None).unwrap();
///
/// assert_eq!(gray.get(0, 0).map(|p| p.r()), Some(47));
/// ```
pub fn apply_matrix(
    src: &RasterBuffer,
    matrix: &[f64],
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    if matrix.len() != 9 {
        return Err(TransformError::InvalidMatrix(matrix.len()));
    }
    mask::ensure_matches(src, mask)?;

    let cols = src.cols();
    parallel::map_rows(src.size(), src.max_value(), |row, col| {
        let px = src.as_slice()[row * cols + col];
        let (r, g, b) = (f64::from(px.r()), f64::from(px.g()), f64::from(px.b()));

        let red = round_half_from_zero(r * matrix[0] + g * matrix[1] + b * matrix[2]);
        let green = round_half_from_zero(r * matrix[3] + g * matrix[4] + b * matrix[5]);
        let blue = round_half_from_zero(r * matrix[6] + g * matrix[7] + b * matrix[8]);

        let candidate = Pixel::from_channels(clamp(red), clamp(green), clamp(blue), px.a());
        mask::apply(px, mask::pixel_at(mask, row, col), candidate)
    })
}

/// Produce a greyscale image using the luma matrix.
pub fn grayscale(
    src: &RasterBuffer,
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    apply_matrix(src, &GRAYSCALE_MATRIX, mask)
}

/// Produce a sepia toned image using the sepia matrix.
pub fn sepia(
    src: &RasterBuffer,
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    apply_matrix(src, &SEPIA_MATRIX, mask)
}
