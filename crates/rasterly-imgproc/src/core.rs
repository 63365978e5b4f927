/// Saturate a channel sum to the `[0, 255]` channel domain.
///
/// Clamping is the defined saturation semantic for arithmetic overflow and
/// underflow; it is not an error path.
///
/// # Examples
///
/// ```
/// use rasterly_imgproc::core::clamp;
///
/// assert_eq!(clamp(-40), 0);
/// assert_eq!(clamp(128), 128);
/// assert_eq!(clamp(300), 255);
/// ```
pub fn clamp(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Round to the nearest integer, ties away from zero.
///
/// This is the rounding mode of the color matrix transforms.
pub fn round_half_from_zero(value: f64) -> i32 {
    value.round() as i32
}

/// Round to the nearest integer, ties toward positive infinity.
///
/// This is the rounding mode of the convolution taps and the downscale
/// sampling grid; it differs from [`round_half_from_zero`] only on negative
/// ties (`-2.5` rounds to `-2` here, `-3` there).
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
