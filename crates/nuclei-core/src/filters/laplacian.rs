use ndarray::Array3;

use super::correlate_axis;

const SECOND_DIFFERENCE: [f64; 3] = [1.0, -2.0, 1.0];

/// Discrete Laplacian of a volume.
///
/// Sum over x, y and z of the second difference `[1, -2, 1]`, which for the
/// interior is the 7-point stencil
///   -6 at the center, 1 at each of the six face neighbours.
/// Borders are mirrored, so a constant volume maps to zero everywhere.
pub fn laplacian(data: &Array3<f32>) -> Array3<f32> {
    let mut result = Array3::<f32>::zeros(data.raw_dim());
    for axis in 0..3 {
        result += &correlate_axis(data, &SECOND_DIFFERENCE, axis);
    }
    result
}
