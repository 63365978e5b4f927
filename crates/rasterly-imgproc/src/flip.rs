use rasterly_image::{Pixel, RasterBuffer};

use crate::error::TransformError;
use crate::parallel;

// Both flips mirror the color channels but read alpha from the destination
// coordinate of the source, so alpha never moves. Kept for compatibility
// with existing renders.
// TODO: read alpha from the mirrored pixel once downstream galleries are
// re-rendered.

/// Flip an image horizontally, mirroring its columns.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::flip::horizontal;
///
/// let image = RasterBuffer::from_fn(
///     ImageSize {
///         width: 2,
///         height: 1,
///     },
///     255,
///     |_, col| Pixel::from_channels(col as u8, 0, 0, 0),
/// )
/// .unwrap();
///
/// let flipped = horizontal(&image).unwrap();
///
/// assert_eq!(flipped.get(0, 0).map(|p| p.r()), Some(1));
/// assert_eq!(flipped.get(0, 1).map(|p| p.r()), Some(0));
/// ```
pub fn horizontal(src: &RasterBuffer) -> Result<RasterBuffer, TransformError> {
    let cols = src.cols();
    parallel::map_rows(src.size(), src.max_value(), |row, col| {
        let mirrored = src.as_slice()[row * cols + (cols - 1 - col)];
        let here = src.as_slice()[row * cols + col];
        Pixel::from_channels(mirrored.r(), mirrored.g(), mirrored.b(), here.a())
    })
}

/// Flip an image vertically, mirroring its rows.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::flip::vertical;
///
/// let image = RasterBuffer::from_fn(
///     ImageSize {
///         width: 1,
///         height: 2,
///     },
///     255,
///     |row, _| Pixel::from_channels(row as u8, 0, 0, 0),
/// )
/// .unwrap();
///
/// let flipped = vertical(&image).unwrap();
///
/// assert_eq!(flipped.get(0, 0).map(|p| p.r()), Some(1));
/// assert_eq!(flipped.get(1, 0).map(|p| p.r()), Some(0));
/// ```
pub fn vertical(src: &RasterBuffer) -> Result<RasterBuffer, TransformError> {
    let cols = src.cols();
    let rows = src.rows();
    parallel::map_rows(src.size(), src.max_value(), |row, col| {
        let mirrored = src.as_slice()[(rows - 1 - row) * cols + col];
        let here = src.as_slice()[row * cols + col];
        Pixel::from_channels(mirrored.r(), mirrored.g(), mirrored.b(), here.a())
    })
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
    fn horizontal_mirrors_columns() -> Result<(), TransformError> {
        let out = super::horizontal(&sample()?)?;
        assert_eq!(
            rgb_triples(&out),
            vec![(30, 60, 100), (100, 30, 60), (60, 30, 100), (30, 100, 60)]
        );
        Ok(())
    }

    #[test]
    fn vertical_mirrors_rows() -> Result<(), TransformError> {
        let out = super::vertical(&sample()?)?;
        assert_eq!(
            rgb_triples(&out),
            vec![(30, 100, 60), (60, 30, 100), (100, 30, 60), (30, 60, 100)]
        );
        Ok(())
    }

    #[test]
    fn flipping_twice_restores_the_image() -> Result<(), TransformError> {
        let image = sample()?;
        assert_eq!(super::horizontal(&super::horizontal(&image)?)?, image);
        assert_eq!(super::vertical(&super::vertical(&image)?)?, image);
        Ok(())
    }

    #[test]
    fn alpha_stays_at_the_destination_coordinate() -> Result<(), TransformError> {
        let image = RasterBuffer::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            255,
            vec![
                Pixel::from_channels(1, 2, 3, 10),
                Pixel::from_channels(4, 5, 6, 20),
            ],
        )?;

        let out = super::horizontal(&image)?;
        assert_eq!(out.get(0, 0), Some(&Pixel::from_channels(4, 5, 6, 10)));
        assert_eq!(out.get(0, 1), Some(&Pixel::from_channels(1, 2, 3, 20)));
        Ok(())
    }
}
