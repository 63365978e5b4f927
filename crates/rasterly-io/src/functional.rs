use std::path::Path;

use rasterly_image::RasterBuffer;

use crate::error::IoError;
use crate::{jpeg, png, ppm};

/// Read an image from any supported format, picked by file extension.
///
/// Supported extensions are `ppm`, `png`, `jpg` and `jpeg`, matched
/// case-insensitively.
///
/// # Errors
///
/// Returns [`IoError::InvalidFileExtension`] for anything else, then
/// whatever the format codec reports.
///
/// # Example
///
/// ```no_run
/// use rasterly_io::functional::read_image_any;
///
/// let image = read_image_any("koala.ppm").unwrap();
/// ```
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<RasterBuffer, IoError> {
    let file_path = file_path.as_ref();
    match extension_of(file_path)?.as_str() {
        "ppm" => ppm::read_image_ppm(file_path),
        "png" => png::read_image_png_rgba8(file_path),
        "jpg" | "jpeg" => jpeg::read_image_jpeg_rgb8(file_path),
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}

/// Write an image to any supported format, picked by file extension.
///
/// JPEG output uses quality 100 so repeated load/save cycles degrade as
/// little as the format allows.
pub fn write_image_any(file_path: impl AsRef<Path>, image: &RasterBuffer) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    match extension_of(file_path)?.as_str() {
        "ppm" => ppm::write_image_ppm(file_path, image),
        "png" => png::write_image_png_rgba8(file_path, image),
        "jpg" | "jpeg" => jpeg::write_image_jpeg_rgb8(file_path, image, 100),
        _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
    }
}

fn extension_of(file_path: &Path) -> Result<String, IoError> {
    file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .ok_or_else(|| IoError::InvalidFileExtension(file_path.to_path_buf()))
}
