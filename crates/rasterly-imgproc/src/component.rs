use std::str::FromStr;

use rasterly_image::{Pixel, RasterBuffer};

use crate::core::{clamp, round_half_from_zero};
use crate::error::TransformError;
use crate::{mask, parallel};

/// The greyscale components an image can be reduced to.
///
/// The set is closed; matching is exhaustive at compile time. Selectors
/// arriving from configuration or scripts go through [`FromStr`], which is
/// the only place an unknown selector can surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Component {
    /// The red channel verbatim.
    Red,
    /// The green channel verbatim.
    Green,
    /// The blue channel verbatim.
    Blue,
    /// The maximum of the three color channels.
    Value,
    /// The average of the three color channels, truncated.
    Intensity,
    /// The Rec. 709 weighted luma, rounded.
    Luma,
}

impl Component {
    fn derive(self, px: Pixel) -> u8 {
        match self {
            Component::Red => px.r(),
            Component::Green => px.g(),
            Component::Blue => px.b(),
            Component::Value => px.r().max(px.g()).max(px.b()),
            Component::Intensity => {
                let sum = i32::from(px.r()) + i32::from(px.g()) + i32::from(px.b());
                (sum / 3) as u8
            }
            Component::Luma => {
                let luma = 0.2126 * f64::from(px.r())
                    + 0.7152 * f64::from(px.g())
                    + 0.0722 * f64::from(px.b());
                clamp(round_half_from_zero(luma))
            }
        }
    }
}

impl FromStr for Component {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Component::Red),
            "green" => Ok(Component::Green),
            "blue" => Ok(Component::Blue),
            "value" => Ok(Component::Value),
            "intensity" => Ok(Component::Intensity),
            "luma" => Ok(Component::Luma),
            other => Err(TransformError::UnknownComponent(other.to_owned())),
        }
    }
}

/// Reduce an image to a greyscale component.
///
/// Every output pixel carries the derived value on all three color channels
/// with alpha preserved. When a mask is supplied, pixels under a non-zero
/// mask RGB pass through untransformed.
///
/// # Errors
///
/// Returns [`TransformError::DimensionMismatch`] when the mask size differs
/// from the source size.
///
/// # Example
///
/// ```
/// use rasterly_image::{ImageSize, Pixel, RasterBuffer};
/// use rasterly_imgproc::component::{extract, Component};
///
/// let image = RasterBuffer::from_size_val(
///     ImageSize {
///         width: 2,
///         height: 2,
///     },
///     255,
///     Pixel::from_channels(100, 30, 60, 0),
/// )
/// .unwrap();
///
/// let value = extract(&image, Component::Value, None).unwrap();
///
/// assert_eq!(value.get(0, 0).map(|p| p.r()), Some(100));
/// assert_eq!(value.get(0, 0).map(|p| p.g()), Some(100));
/// ```
pub fn extract(
    src: &RasterBuffer,
    component: Component,
    mask: Option<&RasterBuffer>,
) -> Result<RasterBuffer, TransformError> {
    mask::ensure_matches(src, mask)?;

    let cols = src.cols();
    parallel::map_rows(src.size(), src.max_value(), |row, col| {
        let px = src.as_slice()[row * cols + col];
        let v = component.derive(px);
        let candidate = Pixel::from_channels(v, v, v, px.a());
        mask::apply(px, mask::pixel_at(mask, row, col), candidate)
    })
}
