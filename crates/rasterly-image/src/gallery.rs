use std::collections::HashMap;

use crate::image::RasterBuffer;

/// A store of raster buffers keyed by name.
///
/// Transforms never talk to storage: callers resolve a buffer out of a
/// gallery, run an operation, and put the result back under a name of their
/// choosing. The trait stays narrow so nothing can assume a specific
/// backing container.
pub trait ImageGallery {
    /// Look up the buffer stored under `name`.
    fn get(&self, name: &str) -> Option<&RasterBuffer>;

    /// Store `image` under `name`, replacing any previous entry.
    fn put(&mut self, name: &str, image: RasterBuffer);
}

/// An [`ImageGallery`] backed by an in-memory hash map.
///
/// # Examples
///
/// ```
/// use rasterly_image::{ImageGallery, ImageSize, InMemoryGallery, Pixel, RasterBuffer};
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     255,
///     Pixel::default(),
/// )
/// .unwrap();
///
/// let mut gallery = InMemoryGallery::default();
/// gallery.put("checker", image);
///
/// assert!(gallery.get("checker").is_some());
/// assert!(gallery.get("missing").is_none());
/// ```
#[derive(Debug, Default)]
pub struct InMemoryGallery {
    images: HashMap<String, RasterBuffer>,
}

impl ImageGallery for InMemoryGallery {
    fn get(&self, name: &str) -> Option<&RasterBuffer> {
        self.images.get(name)
    }

    fn put(&mut self, name: &str, image: RasterBuffer) {
        self.images.insert(name.to_owned(), image);
    }
}
