use approx::assert_abs_diff_eq;
use ndarray::Array3;

use nuclei_core::filters::{gaussian_smooth, gaussian_smooth_volume, laplacian};
use nuclei_core::volume::Volume;

// ---------------------------------------------------------------------------
// gaussian_smooth
// ---------------------------------------------------------------------------

#[test]
fn test_constant_volume_unchanged_by_smoothing() {
    let data = Array3::<f32>::from_elem((6, 5, 4), 7.5);
    let smoothed = gaussian_smooth(&data, [1.2, 2.0, 0.7]);
    for &v in smoothed.iter() {
        assert_abs_diff_eq!(v, 7.5, epsilon = 1e-4);
    }
}

#[test]
fn test_zero_sigma_is_identity() {
    let data = Array3::from_shape_fn((3, 4, 5), |(x, y, z)| (x * 20 + y * 5 + z) as f32);
    let smoothed = gaussian_smooth(&data, [0.0, 0.0, 0.0]);
    assert_eq!(smoothed, data);
}

#[test]
fn test_delta_spreads_symmetrically_and_keeps_mass() {
    let mut data = Array3::<f32>::zeros((21, 21, 21));
    data[[10, 10, 10]] = 1.0;
    let smoothed = gaussian_smooth(&data, [1.0, 1.5, 2.0]);

    let total: f32 = smoothed.iter().sum();
    assert_abs_diff_eq!(total, 1.0, epsilon = 1e-4);

    assert_abs_diff_eq!(smoothed[[9, 10, 10]], smoothed[[11, 10, 10]], epsilon = 1e-7);
    assert_abs_diff_eq!(smoothed[[10, 8, 10]], smoothed[[10, 12, 10]], epsilon = 1e-7);
    assert_abs_diff_eq!(smoothed[[10, 10, 7]], smoothed[[10, 10, 13]], epsilon = 1e-7);

    // Wider sigma along z spreads further.
    assert!(smoothed[[10, 10, 13]] > smoothed[[13, 10, 10]]);
    // Peak stays at the center.
    let max = smoothed.iter().cloned().fold(f32::MIN, f32::max);
    assert_eq!(max, smoothed[[10, 10, 10]]);
}

#[test]
fn test_smooth_volume_keeps_resolution() {
    let vol = Volume::new(Array3::from_elem((4, 4, 4), 1.0), [0.5, 0.5, 2.0]).unwrap();
    let smoothed = gaussian_smooth_volume(&vol, [1.0, 1.0, 1.0]);
    assert_eq!(smoothed.resolution, [0.5, 0.5, 2.0]);
    assert_eq!(smoothed.shape(), (4, 4, 4));
}

// ---------------------------------------------------------------------------
// laplacian
// ---------------------------------------------------------------------------

#[test]
fn test_laplacian_of_constant_is_zero() {
    let data = Array3::<f32>::from_elem((5, 5, 5), 3.0);
    let lap = laplacian(&data);
    for &v in lap.iter() {
        assert_eq!(v, 0.0);
    }
}

#[test]
fn test_laplacian_of_quadratic_interior() {
    // f = x^2 + y^2 + z^2 has second difference 2 along each axis.
    let data = Array3::from_shape_fn((6, 6, 6), |(x, y, z)| (x * x + y * y + z * z) as f32);
    let lap = laplacian(&data);
    for x in 1..5 {
        for y in 1..5 {
            for z in 1..5 {
                assert_abs_diff_eq!(lap[[x, y, z]], 6.0, epsilon = 1e-4);
            }
        }
    }
}

#[test]
fn test_laplacian_mirrors_border() {
    // Mirrored border repeats the edge sample: f[-1] = f[0].
    let mut data = Array3::<f32>::zeros((3, 1, 1));
    data[[0, 0, 0]] = 4.0;
    let lap = laplacian(&data);
    // x-axis: f[-1] + f[1] - 2 f[0] = 4 + 0 - 8; y and z are single-sample axes.
    assert_abs_diff_eq!(lap[[0, 0, 0]], -4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(lap[[1, 0, 0]], 4.0, epsilon = 1e-6);
    assert_abs_diff_eq!(lap[[2, 0, 0]], 0.0, epsilon = 1e-6);
}

#[test]
fn test_laplacian_of_bright_spot_is_negative_at_center() {
    let mut data = Array3::<f32>::zeros((7, 7, 7));
    data[[3, 3, 3]] = 1.0;
    let lap = laplacian(&gaussian_smooth(&data, [1.0, 1.0, 1.0]));
    assert!(lap[[3, 3, 3]] < 0.0);
}
