use crate::error::ImageError;

/// A single RGBA pixel with each channel in `[0, 255]`.
///
/// Pixels are immutable once created: construction validates every channel
/// and there is no way to mutate one afterwards.
///
/// # Examples
///
/// ```
/// use rasterly_image::Pixel;
///
/// let px = Pixel::new(100, 30, 60, 255).unwrap();
///
/// assert_eq!(px.r(), 100);
/// assert_eq!(px.a(), 255);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pixel {
    r: u8,
    g: u8,
    b: u8,
    a: u8,
}

impl Pixel {
    /// Create a pixel from four channel values.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidPixelValue`] if any channel is outside
    /// `[0, 255]`.
    pub fn new(r: i64, g: i64, b: i64, a: i64) -> Result<Self, ImageError> {
        let channel = |v: i64| -> Result<u8, ImageError> {
            u8::try_from(v).map_err(|_| ImageError::InvalidPixelValue(v))
        };
        Ok(Self {
            r: channel(r)?,
            g: channel(g)?,
            b: channel(b)?,
            a: channel(a)?,
        })
    }

    /// Create a pixel from red, green and blue only; alpha defaults to 0.
    ///
    /// This is the shape produced by plain PPM data, which carries no alpha
    /// channel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidPixelValue`] if any channel is outside
    /// `[0, 255]`.
    pub fn rgb(r: i64, g: i64, b: i64) -> Result<Self, ImageError> {
        Self::new(r, g, b, 0)
    }

    /// Create a pixel from channel values already in the channel domain.
    pub const fn from_channels(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// The red channel.
    pub const fn r(&self) -> u8 {
        self.r
    }

    /// The green channel.
    pub const fn g(&self) -> u8 {
        self.g
    }

    /// The blue channel.
    pub const fn b(&self) -> u8 {
        self.b
    }

    /// The alpha channel.
    pub const fn a(&self) -> u8 {
        self.a
    }
}

#[cfg(test)]
mod tests {
    use super::Pixel;
    use crate::error::ImageError;

    #[test]
    fn pixel_smoke() -> Result<(), ImageError> {
        let px = Pixel::new(100, 30, 60, 255)?;
        assert_eq!(px.r(), 100);
        assert_eq!(px.g(), 30);
        assert_eq!(px.b(), 60);
        assert_eq!(px.a(), 255);
        Ok(())
    }

    #[test]
    fn pixel_rgb_defaults_alpha_to_zero() -> Result<(), ImageError> {
        let px = Pixel::rgb(1, 2, 3)?;
        assert_eq!(px.a(), 0);
        Ok(())
    }

    #[test]
    fn pixel_rejects_out_of_range_channels() {
        assert_eq!(
            Pixel::new(300, 0, 0, 0),
            Err(ImageError::InvalidPixelValue(300))
        );
        assert_eq!(
            Pixel::new(0, -1, 0, 0),
            Err(ImageError::InvalidPixelValue(-1))
        );
        assert_eq!(
            Pixel::new(0, 0, 0, 256),
            Err(ImageError::InvalidPixelValue(256))
        );
    }

    #[test]
    fn pixel_accepts_boundaries() {
        assert!(Pixel::new(0, 0, 0, 0).is_ok());
        assert!(Pixel::new(255, 255, 255, 255).is_ok());
    }
}
