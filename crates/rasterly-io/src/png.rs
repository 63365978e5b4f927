use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use png::{BitDepth, ColorType, Decoder, Encoder};
use rasterly_image::{ImageSize, Pixel, RasterBuffer};

use crate::error::IoError;

/// Read a PNG image as an RGBA raster buffer.
///
/// Grayscale and RGB inputs are expanded to RGBA; pixels without an alpha
/// sample in the file get alpha 255. The declared maximum channel value of
/// the result is 255.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] or
/// [`IoError::InvalidFileExtension`] before touching the contents,
/// [`IoError::PngDecodeError`] for undecodable data or an unsupported bit
/// depth, and [`IoError::ImageCreationError`] when the decoded dimensions
/// fall outside the buffer domain.
pub fn read_image_png_rgba8(file_path: impl AsRef<Path>) -> Result<RasterBuffer, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("png"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    let mut reader = Decoder::new(BufReader::new(File::open(file_path)?))
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "unsupported bit depth {:?}",
            info.bit_depth
        )));
    }

    let channels = match info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        ColorType::Indexed => {
            return Err(IoError::PngDecodeError(
                "indexed PNG data is not supported".to_owned(),
            ))
        }
    };

    let data = buf[..info.buffer_size()]
        .chunks_exact(channels)
        .map(|px| match channels {
            1 => Pixel::from_channels(px[0], px[0], px[0], 255),
            2 => Pixel::from_channels(px[0], px[0], px[0], px[1]),
            3 => Pixel::from_channels(px[0], px[1], px[2], 255),
            _ => Pixel::from_channels(px[0], px[1], px[2], px[3]),
        })
        .collect();

    let size = ImageSize {
        width: info.width as usize,
        height: info.height as usize,
    };
    Ok(RasterBuffer::new(size, 255, data)?)
}

/// Write an image as an RGBA PNG to the given file path.
pub fn write_image_png_rgba8(
    file_path: impl AsRef<Path>,
    image: &RasterBuffer,
) -> Result<(), IoError> {
    let file = File::create(file_path)?;

    let mut encoder = Encoder::new(
        BufWriter::new(file),
        image.width() as u32,
        image.height() as u32,
    );
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    let data: Vec<u8> = image
        .as_slice()
        .iter()
        .flat_map(|px| [px.r(), px.g(), px.b(), px.a()])
        .collect();

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rasterly_image::{ImageSize, Pixel, RasterBuffer};

    use crate::error::IoError;

    #[test]
    fn png_round_trip_preserves_pixels() -> Result<(), IoError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.png");

        let image = RasterBuffer::from_fn(
            ImageSize {
                width: 3,
                height: 2,
            },
            255,
            |row, col| Pixel::from_channels((row * 80) as u8, (col * 40) as u8, 200, 255),
        )?;

        super::write_image_png_rgba8(&path, &image)?;
        let read_back = super::read_image_png_rgba8(&path)?;
        assert_eq!(read_back, image);
        Ok(())
    }

    #[test]
    fn png_round_trip_keeps_alpha() -> Result<(), IoError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("alpha.png");

        let image = RasterBuffer::from_size_val(
            ImageSize {
                width: 2,
                height: 2,
            },
            255,
            Pixel::from_channels(10, 20, 30, 128),
        )?;

        super::write_image_png_rgba8(&path, &image)?;
        let read_back = super::read_image_png_rgba8(&path)?;
        assert_eq!(read_back.get(0, 0).map(|p| p.a()), Some(128));
        Ok(())
    }

    #[test]
    fn missing_file_is_reported() {
        let res = super::read_image_png_rgba8("no-such-file.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn wrong_extension_is_rejected() -> Result<(), IoError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("sample.bmp");
        std::fs::write(&path, b"not a png")?;

        let res = super::read_image_png_rgba8(&path);
        assert!(matches!(res, Err(IoError::InvalidFileExtension(_))));
        Ok(())
    }

    #[test]
    fn garbage_data_is_a_decode_error() -> Result<(), IoError> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not a png")?;

        let res = super::read_image_png_rgba8(&path);
        assert!(matches!(res, Err(IoError::PngDecodeError(_))));
        Ok(())
    }
}
