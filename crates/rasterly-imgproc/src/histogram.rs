use rasterly_image::RasterBuffer;
use rayon::prelude::*;

/// Index of the red counts in a [`channel_counts`] result.
pub const RED: usize = 0;
/// Index of the green counts in a [`channel_counts`] result.
pub const GREEN: usize = 1;
/// Index of the blue counts in a [`channel_counts`] result.
pub const BLUE: usize = 2;
/// Index of the intensity counts in a [`channel_counts`] result.
pub const INTENSITY: usize = 3;

/// Count pixel values per channel, 256 bins each.
///
/// Returns counts for red, green, blue and intensity (the truncated average
/// of the three color channels), in that order. Alpha is not counted.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::histogram::{channel_counts, INTENSITY, RED};
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     255,
///     Pixel::from_channels(100, 30, 62, 0),
/// )
/// .unwrap();
///
/// let counts = channel_counts(&image);
///
/// assert_eq!(counts[RED][100], 4);
/// assert_eq!(counts[INTENSITY][64], 4);
/// ```
pub fn channel_counts(src: &RasterBuffer) -> [[u32; 256]; 4] {
    src.as_slice()
        .par_chunks(4096)
        .fold(
            || [[0u32; 256]; 4],
            |mut local, chunk| {
                for px in chunk {
                    let (r, g, b) = (px.r() as usize, px.g() as usize, px.b() as usize);
                    local[RED][r] += 1;
                    local[GREEN][g] += 1;
                    local[BLUE][b] += 1;
                    local[INTENSITY][(r + g + b) / 3] += 1;
                }
                local
            },
        )
        .reduce(
            || [[0u32; 256]; 4],
            |mut a, b| {
                for (channel, counts) in b.iter().enumerate() {
                    for (bin, val) in counts.iter().enumerate() {
                        a[channel][bin] += val;
                    }
                }
                a
            },
        )
}
