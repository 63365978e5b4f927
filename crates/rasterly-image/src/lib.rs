#![deny(missing_docs)]
//! RGBA raster container types for the rasterly crates

/// Error types for the image module.
pub mod error;

/// Named-buffer store behind a narrow get/put contract.
pub mod gallery;

/// Raster buffer representation and its size type.
pub mod image;

/// Single RGBA pixel value type.
pub mod pixel;

pub use crate::error::ImageError;
pub use crate::gallery::{ImageGallery, InMemoryGallery};
pub use crate::image::{ImageSize, RasterBuffer, MAX_DIMENSION};
pub use crate::pixel::Pixel;
