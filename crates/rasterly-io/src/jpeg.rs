use std::fs;
use std::path::Path;

use jpeg_encoder::{ColorType, Encoder};
use rasterly_image::{ImageSize, Pixel, RasterBuffer};
use zune_jpeg::errors::DecodeErrors;
use zune_jpeg::JpegDecoder;

use crate::error::IoError;

/// Read a JPEG image as an RGBA raster buffer.
///
/// JPEG has no alpha channel; decoded pixels carry alpha 255 and grayscale
/// data is replicated onto all three color channels. The declared maximum
/// channel value of the result is 255.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] or
/// [`IoError::InvalidFileExtension`] before touching the contents,
/// [`IoError::JpegDecodingError`] for undecodable data, and
/// [`IoError::ImageCreationError`] when the decoded dimensions fall outside
/// the buffer domain.
pub fn read_image_jpeg_rgb8(file_path: impl AsRef<Path>) -> Result<RasterBuffer, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path.extension().map_or(true, |ext| {
        !ext.eq_ignore_ascii_case("jpg") && !ext.eq_ignore_ascii_case("jpeg")
    }) {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let jpeg_data = fs::read(file_path)?;
    let mut decoder = JpegDecoder::new(jpeg_data);
    decoder.decode_headers()?;

    let image_info = decoder.info().ok_or_else(|| {
        IoError::JpegDecodingError(DecodeErrors::Format(String::from(
            "Failed to find image info from its metadata",
        )))
    })?;

    let size = ImageSize {
        width: image_info.width as usize,
        height: image_info.height as usize,
    };

    let img_data = decoder.decode()?;
    let pixel_count = size.width * size.height;
    if pixel_count == 0 {
        return Err(IoError::JpegDecodingError(DecodeErrors::Format(
            String::from("JPEG data declares an empty image"),
        )));
    }

    let data = match img_data.len() / pixel_count {
        1 => img_data
            .iter()
            .map(|&v| Pixel::from_channels(v, v, v, 255))
            .collect(),
        3 => img_data
            .chunks_exact(3)
            .map(|px| Pixel::from_channels(px[0], px[1], px[2], 255))
            .collect(),
        other => {
            return Err(IoError::JpegDecodingError(DecodeErrors::Format(format!(
                "unsupported number of components: {other}"
            ))))
        }
    };

    Ok(RasterBuffer::new(size, 255, data)?)
}

/// Write an image as an RGB JPEG to the given file path.
///
/// Alpha is dropped; `quality` ranges from 0 (lowest) to 100 (highest).
pub fn write_image_jpeg_rgb8(
    file_path: impl AsRef<Path>,
    image: &RasterBuffer,
    quality: u8,
) -> Result<(), IoError> {
    let data: Vec<u8> = image
        .as_slice()
        .iter()
        .flat_map(|px| [px.r(), px.g(), px.b()])
        .collect();

    let encoder = Encoder::new_file(file_path, quality)?;
    encoder.encode(
        &data,
        image.width() as u16,
        image.height() as u16,
        ColorType::Rgb,
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rasterly_image::{ImageSize, Pixel, RasterBuffer};

    use crate::error::IoError;

    #[test]
    fn jpeg_round_trip_keeps_dimensions() -> Result<(), IoError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.jpg");

        let image = RasterBuffer::from_size_val(
            ImageSize {
                width: 8,
                height: 6,
            },
            255,
            Pixel::from_channels(90, 120, 180, 255),
        )?;

        super::write_image_jpeg_rgb8(&path, &image, 100)?;
        let read_back = super::read_image_jpeg_rgb8(&path)?;

        assert_eq!(read_back.size(), image.size());
        assert_eq!(read_back.get(0, 0).map(|p| p.a()), Some(255));
        Ok(())
    }

    #[test]
    fn missing_file_is_reported() {
        let res = super::read_image_jpeg_rgb8("no-such-file.jpg");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn wrong_extension_is_rejected() -> Result<(), IoError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.gif");
        std::fs::write(&path, b"not a jpeg")?;

        let res = super::read_image_jpeg_rgb8(&path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }
}
