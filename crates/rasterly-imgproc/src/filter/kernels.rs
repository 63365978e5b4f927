/// Create the 3x3 blur kernel.
///
/// Corners weigh 1/16, edges 1/8 and the center 1/4, a small Gaussian
/// approximation that sums to one.
pub fn blur_kernel() -> Vec<Vec<f64>> {
    vec![
        vec![1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
        vec![1.0 / 8.0, 1.0 / 4.0, 1.0 / 8.0],
        vec![1.0 / 16.0, 1.0 / 8.0, 1.0 / 16.0],
    ]
}

/// Create the 5x5 sharpen kernel.
///
/// The outer ring weighs -1/8, the inner ring 1/4 and the center 1.0.
pub fn sharpen_kernel() -> Vec<Vec<f64>> {
    vec![
        vec![-1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0],
        vec![-1.0 / 8.0, 1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, -1.0 / 8.0],
        vec![-1.0 / 8.0, 1.0 / 4.0, 1.0, 1.0 / 4.0, -1.0 / 8.0],
        vec![-1.0 / 8.0, 1.0 / 4.0, 1.0 / 4.0, 1.0 / 4.0, -1.0 / 8.0],
        vec![-1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0, -1.0 / 8.0],
    ]
}
