#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// error types for the io module.
pub mod error;

/// extension-dispatched read and write entry points.
pub mod functional;

/// JPEG image encoding and decoding.
pub mod jpeg;

/// PNG image encoding and decoding.
pub mod png;

/// plain PPM (P3) text encoding and decoding.
pub mod ppm;

pub use crate::error::IoError;
