#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use rasterly_image as image;

#[doc(inline)]
pub use rasterly_imgproc as imgproc;

#[doc(inline)]
pub use rasterly_io as io;
