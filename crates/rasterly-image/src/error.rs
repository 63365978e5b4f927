/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when a channel value falls outside the valid channel domain.
    #[error("Channel value {0} is outside the valid range [0, 255]")]
    InvalidPixelValue(i64),

    /// Error when the declared dimensions are outside the supported range.
    #[error("Image dimensions {0}x{1} are outside the supported range [1, 255]")]
    InvalidDimensions(usize, usize),

    /// Error when the pixel data does not match the declared dimensions.
    #[error("Pixel count ({0}) does not match the image size ({1})")]
    InvalidPixelCount(usize, usize),
}
