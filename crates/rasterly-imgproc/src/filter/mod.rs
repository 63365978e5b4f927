use rasterly_image::{Pixel, RasterBuffer};

use crate::core::{clamp, round_half_up};
use crate::error::TransformError;
use crate::{mask, parallel};

/// predefined convolution kernels module.
pub mod kernels;

/// Correlate one pixel neighborhood with the kernel.
///
/// Footprint coordinates that fall outside the image contribute nothing:
/// the kernel is zero-padded at the edges, not renormalized. Each tap's
/// contribution is rounded to an integer before accumulation; summing the
/// real-valued taps first gives different output.
fn filter_pixel(src: &RasterBuffer, row: usize, col: usize, kernel: &[Vec<f64>]) -> Pixel {
    let kh = kernel.len();
    let kw = kernel[0].len();
    let cols = src.cols();

    let (mut red, mut green, mut blue, mut alpha) = (0i32, 0i32, 0i32, 0i32);
    for i in 0..kh {
        for j in 0..kw {
            let y = row as isize - (kh / 2) as isize + i as isize;
            let x = col as isize - (kw / 2) as isize + j as isize;
            if y < 0 || y >= src.rows() as isize || x < 0 || x >= src.cols() as isize {
                continue;
            }
            let px = src.as_slice()[y as usize * cols + x as usize];
            let coeff = kernel[i][j];
            red += round_half_up(f64::from(px.r()) * coeff);
            green += round_half_up(f64::from(px.g()) * coeff);
            blue += round_half_up(f64::from(px.b()) * coeff);
            alpha += round_half_up(f64::from(px.a()) * coeff);
        }
    }

    Pixel::from_channels(clamp(red), clamp(green), clamp(blue), clamp(alpha))
}

fn ensure_kernel(kernel: &[Vec<f64>]) -> Result<(), TransformError> {
    let k = kernel.len();
    let w = kernel.first().map_or(0, Vec::len);
    if k == 0 || k % 2 == 0 || kernel.iter().any(|row| row.len() != k) {
        return Err(TransformError::InvalidKernel(k, w));
    }
    Ok(())
}

/// Apply an odd-sized square kernel to an image by full 2D correlation.
///
/// Every channel, alpha included, is filtered independently over the
/// kernel footprint with the center offset truncated to `size / 2`, then
/// clamped to `[0, 255]`. When a mask is supplied, pixels under a non-zero
/// mask RGB pass through untransformed; the fully filtered pixel is the
/// candidate the mask gates.
///
/// This is the plain O(H·W·k²) correlation; the standing kernels are small
/// enough that no separable or frequency-domain shortcut is warranted.
///
/// # Errors
///
/// Returns [`TransformError::InvalidKernel`] for an empty, even-sized or
/// non-square kernel and [`TransformError::DimensionMismatch`] when the
/// mask size differs from the source size.
pub fn apply_kernel(
    src: &RasterBuffer,
    kernel: &[Vec<f64>],
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    ensure_kernel(kernel)?;
    mask::ensure_matches(src, mask)?;

    let cols = src.cols();
    parallel::map_rows(src.size(), src.max_value(), |row, col| {
        let px = src.as_slice()[row * cols + col];
        let candidate = filter_pixel(src, row, col, kernel);
        mask::apply(px, mask::pixel_at(mask, row, col), candidate)
    })
}

/// Blur an image with the standing 3x3 kernel.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::filter::blur;
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 3,
///         height: 3,
///     },
///     255,
///     Pixel::from_channels(80, 80, 80, 0),
/// )
/// .unwrap();
///
/// let blurred = blur(&image, None).unwrap();
///
/// // the interior pixel sees the full kernel and keeps its value
/// assert_eq!(blurred.get(1, 1).map(|p| p.r()), Some(80));
/// ```
pub fn blur(
    src: &RasterBuffer,
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    apply_kernel(src, &kernels::blur_kernel(), mask)
}

/// Sharpen an image with the standing 5x5 kernel.
pub fn sharpen(
    src: &RasterBuffer,
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    apply_kernel(src, &kernels::sharpen_kernel(), mask)
}

#[cfg(test)]
mod tests {
    use rasterly_image::{ImageSize, Pixel, RasterBuffer};

    use crate::error::TransformError;

    fn sample() -> Result<RasterBuffer, TransformError> {
        let pixels = vec![
            Pixel::rgb(100, 30, 60)?,
            Pixel::rgb(30, 60, 100)?,
            Pixel::rgb(30, 100, 60)?,
            Pixel::rgb(60, 30, 100)?,
        ];
        Ok(RasterBuffer::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            255,
            pixels,
        )?)
    }

    fn rgb_triples(image: &RasterBuffer) -> Vec<(u8, u8, u8)> {
        image
            .as_slice()
            .iter()
            .map(|p| (p.r(), p.g(), p.b()))
            .collect()
    }

    #[test]
    fn blur_regression() -> Result<(), TransformError> {
        let out = super::blur(&sample()?, None)?;
        assert_eq!(
            rgb_triples(&out),
            vec![(37, 31, 42), (31, 29, 50), (31, 37, 42), (29, 31, 50)]
        );
        Ok(())
    }

    #[test]
    fn sharpen_regression() -> Result<(), TransformError> {
        let out = super::sharpen(&sample()?, None)?;
        assert_eq!(
            rgb_triples(&out),
            vec![(131, 78, 125), (78, 101, 155), (78, 131, 125), (101, 78, 155)]
        );
        Ok(())
    }

    #[test]
    fn even_kernel_is_rejected() -> Result<(), TransformError> {
        let kernel = vec![vec![0.25, 0.25], vec![0.25, 0.25]];
        let res = super::apply_kernel(&sample()?, &kernel, None);
        assert_eq!(res, Err(TransformError::InvalidKernel(2, 2)));
        Ok(())
    }

    #[test]
    fn ragged_kernel_is_rejected() -> Result<(), TransformError> {
        let kernel = vec![vec![0.0; 3], vec![0.0; 2], vec![0.0; 3]];
        let res = super::apply_kernel(&sample()?, &kernel, None);
        assert_eq!(res, Err(TransformError::InvalidKernel(3, 3)));
        Ok(())
    }

    #[test]
    fn identity_kernel_copies_the_image() -> Result<(), TransformError> {
        let image = sample()?;
        let out = super::apply_kernel(&image, &[vec![1.0]], None)?;
        assert_eq!(out, image);
        Ok(())
    }

    #[test]
    fn masked_pixels_keep_their_source_values() -> Result<(), TransformError> {
        let image = sample()?;
        let gate = RasterBuffer::from_fn(image.size(), 255, |row, col| {
            if row == 0 && col == 1 {
                Pixel::from_channels(0, 0, 9, 0)
            } else {
                Pixel::default()
            }
        })?;

        let out = super::blur(&image, Some(&gate))?;
        assert_eq!(out.get(0, 1), image.get(0, 1));
        // the gated pixel still contributes to its neighbors
        assert_eq!(out.get(0, 0).map(|p| p.r()), Some(37));
        Ok(())
    }

    #[test]
    fn mask_size_mismatch_is_rejected() -> Result<(), TransformError> {
        let image = sample()?;
        let gate = RasterBuffer::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            255,
            Pixel::default(),
        )?;
        let res = super::sharpen(&image, Some(&gate));
        assert_eq!(res, Err(TransformError::DimensionMismatch(1, 1, 2, 2)));
        Ok(())
    }
}
