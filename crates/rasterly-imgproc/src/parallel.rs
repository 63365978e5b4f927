use rasterly_image::{ImageSize, Pixel, RasterBuffer};
use rayon::{iter::IndexedParallelIterator, iter::ParallelIterator, slice::ParallelSliceMut};

use crate::error::TransformError;

/// Build an output buffer by evaluating `f(row, col)` for every cell, rows
/// in parallel.
///
/// Each output pixel reads only from the (immutable) inputs captured by `f`
/// and writes only to its own cell, so rows can be filled on the rayon pool
/// with no coordination.
pub fn map_rows(
    size: ImageSize,
    max_value: u8,
    f: impl Fn(usize, usize) -> Pixel + Send + Sync,
) -> Result<RasterBuffer, TransformError> {
    let mut data = vec![Pixel::default(); size.width * size.height];

    data.par_chunks_mut(size.width.max(1))
        .enumerate()
        .for_each(|(row, out)| {
            for (col, px) in out.iter_mut().enumerate() {
                *px = f(row, col);
            }
        });

    Ok(RasterBuffer::new(size, max_value, data)?)
}

#[cfg(test)]
mod tests {
    use rasterly_image::{ImageSize, Pixel};

    use crate::error::TransformError;

    #[test]
    fn map_rows_is_row_major() -> Result<(), TransformError> {
        let out = super::map_rows(
            ImageSize {
                width: 3,
                height: 2,
            },
            255,
            |row, col| Pixel::from_channels((row * 3 + col) as u8, 0, 0, 0),
        )?;

        let values: Vec<u8> = out.as_slice().iter().map(Pixel::r).collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4, 5]);
        Ok(())
    }

    #[test]
    fn map_rows_rejects_degenerate_size() {
        let res = super::map_rows(
            ImageSize {
                width: 0,
                height: 2,
            },
            255,
            |_, _| Pixel::default(),
        );
        assert!(res.is_err());
    }
}
