use rasterly_image::ImageError;

/// An error type for the transform modules.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum TransformError {
    /// Error when a mask buffer does not match the source dimensions.
    #[error("Mask size ({0}x{1}) does not match source size ({2}x{3})")]
    DimensionMismatch(usize, usize, usize, usize),

    /// Error when a color matrix does not carry exactly 9 coefficients.
    #[error("Color matrix must have exactly 9 coefficients, got {0}")]
    InvalidMatrix(usize),

    /// Error when a component selector is outside the supported set.
    #[error("Unknown component selector: {0}")]
    UnknownComponent(String),

    /// Error when brighten is called with a zero constant.
    #[error("Brighten requires a non-zero constant")]
    InvalidConstant,

    /// Error when a target size exceeds the source size.
    #[error("Target size ({0}x{1}) exceeds source size ({2}x{3})")]
    InvalidScale(usize, usize, usize, usize),

    /// Error when a kernel is not an odd-sized non-empty square.
    #[error("Kernel must be an odd-sized square, got {0}x{1}")]
    InvalidKernel(usize, usize),

    /// Error bubbled up from buffer or pixel construction.
    #[error(transparent)]
    Image(#[from] ImageError),
}
