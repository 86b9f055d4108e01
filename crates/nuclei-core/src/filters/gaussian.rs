use ndarray::Array3;

use crate::consts::GAUSSIAN_TRUNCATE;
use crate::volume::Volume;

use super::correlate_axis;

/// Smooth a volume with a per-axis Gaussian, keeping its resolution.
pub fn gaussian_smooth_volume(volume: &Volume, sigma: [f64; 3]) -> Volume {
    Volume {
        data: gaussian_smooth(&volume.data, sigma),
        resolution: volume.resolution,
    }
}

/// Separable Gaussian smoothing with one standard deviation (in voxels) per axis.
///
/// Axes whose sigma is not strictly positive are passed through unchanged.
/// Borders are mirrored.
pub fn gaussian_smooth(data: &Array3<f32>, sigma: [f64; 3]) -> Array3<f32> {
    let mut result = data.to_owned();
    for (axis, &s) in sigma.iter().enumerate() {
        if s > 0.0 && s.is_finite() {
            result = correlate_axis(&result, &make_gaussian_kernel(s), axis);
        }
    }
    result
}

pub(crate) fn make_gaussian_kernel(sigma: f64) -> Vec<f64> {
    let radius = (GAUSSIAN_TRUNCATE * sigma + 0.5) as usize;
    let s2 = 2.0 * sigma * sigma;
    let mut kernel: Vec<f64> = (0..=2 * radius)
        .map(|i| {
            let x = i as f64 - radius as f64;
            (-x * x / s2).exp()
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = make_gaussian_kernel(1.5);
        assert_eq!(k.len(), 2 * 6 + 1);
        assert!((k.iter().sum::<f64>() - 1.0).abs() < 1e-12);
        for i in 0..k.len() / 2 {
            assert!((k[i] - k[k.len() - 1 - i]).abs() < 1e-15);
        }
    }
}
