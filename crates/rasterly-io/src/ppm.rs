use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::Path;

use rasterly_image::{ImageSize, Pixel, RasterBuffer};

use crate::error::IoError;

/// Decode a plain PPM (P3) image from a reader.
///
/// Lines beginning with `#` are dropped; the rest is tokenized on
/// whitespace: the `P3` magic, width, height, the declared maximum channel
/// value, then `width * height` R G B triples in row-major order. The
/// format carries no alpha channel, so every decoded pixel has alpha 0.
///
/// # Errors
///
/// Returns [`IoError::PpmDecodeError`] for a bad magic token, a malformed
/// or missing integer, or a maximum value above 255; channel and dimension
/// violations surface as [`IoError::ImageCreationError`].
///
/// # Example
///
/// ```
/// use rasterly_io::ppm::decode_ppm;
///
/// let data = "P3\n# tiny\n2 1\n255\n255 0 0\n0 0 255\n";
/// let image = decode_ppm(data.as_bytes()).unwrap();
///
/// assert_eq!(image.width(), 2);
/// assert_eq!(image.get(0, 1).map(|p| p.b()), Some(255));
/// ```
pub fn decode_ppm<R: Read>(reader: R) -> Result<RasterBuffer, IoError> {
    let mut contents = String::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.starts_with('#') {
            continue;
        }
        contents.push_str(&line);
        contents.push('\n');
    }

    let mut tokens = contents.split_whitespace();

    let magic = tokens
        .next()
        .ok_or_else(|| IoError::PpmDecodeError("empty input".to_owned()))?;
    if magic != "P3" {
        return Err(IoError::PpmDecodeError(format!(
            "plain PPM data should begin with P3, found {magic}"
        )));
    }

    let width = next_int(&mut tokens, "width")?;
    let height = next_int(&mut tokens, "height")?;
    let max_value = next_int(&mut tokens, "max value")?;
    if !(0..=255).contains(&max_value) {
        return Err(IoError::PpmDecodeError(format!(
            "max value {max_value} is out of range [0, 255]"
        )));
    }

    let size = ImageSize {
        width: usize::try_from(width)
            .map_err(|_| IoError::PpmDecodeError(format!("negative width {width}")))?,
        height: usize::try_from(height)
            .map_err(|_| IoError::PpmDecodeError(format!("negative height {height}")))?,
    };

    let mut data = Vec::with_capacity(size.width * size.height);
    for _ in 0..size.width * size.height {
        let r = next_int(&mut tokens, "red channel")?;
        let g = next_int(&mut tokens, "green channel")?;
        let b = next_int(&mut tokens, "blue channel")?;
        data.push(Pixel::rgb(r, g, b)?);
    }

    Ok(RasterBuffer::new(size, max_value as u8, data)?)
}

/// Encode an image as plain PPM (P3) text to a writer.
///
/// Writes the `P3` magic, the dimensions and the declared maximum channel
/// value, then one `R G B` triple per line in row-major order. Alpha is not
/// part of the format and is dropped.
pub fn encode_ppm<W: Write>(image: &RasterBuffer, writer: W) -> Result<(), IoError> {
    let mut writer = BufWriter::new(writer);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width(), image.height())?;
    writeln!(writer, "{}", image.max_value())?;
    for px in image.as_slice() {
        writeln!(writer, "{} {} {}", px.r(), px.g(), px.b())?;
    }
    writer.flush()?;

    Ok(())
}

/// Read a plain PPM image from the given file path.
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] or
/// [`IoError::InvalidFileExtension`] before touching the contents, then any
/// error of [`decode_ppm`].
pub fn read_image_ppm(file_path: impl AsRef<Path>) -> Result<RasterBuffer, IoError> {
    let file_path = file_path.as_ref();
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    if file_path
        .extension()
        .map_or(true, |ext| !ext.eq_ignore_ascii_case("ppm"))
    {
        return Err(IoError::InvalidFileExtension(file_path.to_path_buf()));
    }

    decode_ppm(File::open(file_path)?)
}

/// Write an image as plain PPM to the given file path.
pub fn write_image_ppm(file_path: impl AsRef<Path>, image: &RasterBuffer) -> Result<(), IoError> {
    encode_ppm(image, File::create(file_path)?)
}

fn next_int<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<i64, IoError> {
    let token = tokens
        .next()
        .ok_or_else(|| IoError::PpmDecodeError(format!("unexpected end of input reading {what}")))?;
    token
        .parse::<i64>()
        .map_err(|_| IoError::PpmDecodeError(format!("invalid {what} token: {token}")))
}
