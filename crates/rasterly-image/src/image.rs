use crate::error::ImageError;
use crate::pixel::Pixel;

/// Largest width or height a raster buffer may declare.
///
/// The cap is inherited from the max-value domain of the plain PPM contract.
pub const MAX_DIMENSION: usize = 255;

/// Image size in pixels.
///
/// # Examples
///
/// ```
/// use rasterly_image::ImageSize;
///
/// let size = ImageSize {
///     width: 10,
///     height: 20,
/// };
///
/// assert_eq!(size.width, 10);
/// assert_eq!(size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

/// An immutable RGBA raster: a row-major grid of [`Pixel`]s plus the
/// declared maximum channel value of its source format.
///
/// Every transform reads a buffer and allocates a fresh one; nothing mutates
/// a buffer after construction.
///
/// # Examples
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 10,
///         height: 20,
///     },
///     255,
///     Pixel::default(),
/// )
/// .unwrap();
///
/// assert_eq!(image.width(), 10);
/// assert_eq!(image.height(), 20);
/// assert_eq!(image.max_value(), 255);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterBuffer {
    size: ImageSize,
    max_value: u8,
    data: Vec<Pixel>,
}

impl RasterBuffer {
    /// Create a new raster buffer from row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimensions`] if either dimension is zero
    /// or exceeds [`MAX_DIMENSION`], and [`ImageError::InvalidPixelCount`]
    /// if `data` does not hold exactly `width * height` pixels.
    pub fn new(size: ImageSize, max_value: u8, data: Vec<Pixel>) -> Result<Self, ImageError> {
        if size.width == 0
            || size.height == 0
            || size.width > MAX_DIMENSION
            || size.height > MAX_DIMENSION
        {
            return Err(ImageError::InvalidDimensions(size.width, size.height));
        }
        if data.len() != size.width * size.height {
            return Err(ImageError::InvalidPixelCount(
                data.len(),
                size.width * size.height,
            ));
        }
        Ok(Self {
            size,
            max_value,
            data,
        })
    }

    /// Create a new raster buffer filled with one pixel value.
    pub fn from_size_val(size: ImageSize, max_value: u8, val: Pixel) -> Result<Self, ImageError> {
        Self::new(size, max_value, vec![val; size.width * size.height])
    }

    /// Create a new raster buffer by evaluating `f(row, col)` for every cell.
    ///
    /// # Examples
    ///
    /// ```
    /// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
    ///
    /// let ramp = RasterBuffer::from_fn(
    ///     ImageSize {
    ///         width: 3,
    ///         height: 2,
    ///     },
    ///     255,
    ///     |row, col| Pixel::from_channels((row * 3 + col) as u8, 0, 0, 0),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(ramp.get(1, 2).unwrap().r(), 5);
    /// ```
    pub fn from_fn(
        size: ImageSize,
        max_value: u8,
        mut f: impl FnMut(usize, usize) -> Pixel,
    ) -> Result<Self, ImageError> {
        let mut data = Vec::with_capacity(size.width * size.height);
        for row in 0..size.height {
            for col in 0..size.width {
                data.push(f(row, col));
            }
        }
        Self::new(size, max_value, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.size.width
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.size.height
    }

    /// The declared maximum channel value of the source format.
    ///
    /// This is a reporting ceiling for PPM-style headers, distinct from the
    /// hard `[0, 255]` channel invariant enforced by [`Pixel`].
    pub fn max_value(&self) -> u8 {
        self.max_value
    }

    /// Get the pixel at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Pixel> {
        if row >= self.size.height || col >= self.size.width {
            return None;
        }
        self.data.get(row * self.size.width + col)
    }

    /// The pixel grid as a flat row-major slice.
    pub fn as_slice(&self) -> &[Pixel] {
        &self.data
    }
}
