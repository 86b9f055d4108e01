pub mod gaussian;
pub mod laplacian;

use ndarray::{Array3, ArrayView1, ArrayViewMut1, Axis, Zip};

use crate::consts::PARALLEL_VOXEL_THRESHOLD;

pub use gaussian::{gaussian_smooth, gaussian_smooth_volume};
pub use laplacian::laplacian;

/// Mirror an out-of-range index back into `[0, len)`, repeating the edge
/// sample (`d c b a | a b c d | d c b a`).
pub(crate) fn reflect_index(index: isize, len: usize) -> usize {
    let period = 2 * len as isize;
    let m = index.rem_euclid(period) as usize;
    if m < len {
        m
    } else {
        2 * len - 1 - m
    }
}

/// Correlate every lane along `axis` with a centered odd-length kernel.
pub(crate) fn correlate_axis(data: &Array3<f32>, kernel: &[f64], axis: usize) -> Array3<f32> {
    let mut result = Array3::<f32>::zeros(data.raw_dim());
    let len = data.len_of(Axis(axis));
    if len == 0 {
        return result;
    }
    let radius = (kernel.len() / 2) as isize;

    let pass = |mut out: ArrayViewMut1<f32>, lane: ArrayView1<f32>| {
        for i in 0..len {
            let mut sum = 0.0f64;
            for (k, &w) in kernel.iter().enumerate() {
                let src = reflect_index(i as isize + k as isize - radius, len);
                sum += lane[src] as f64 * w;
            }
            out[i] = sum as f32;
        }
    };

    let zip = Zip::from(result.lanes_mut(Axis(axis))).and(data.lanes(Axis(axis)));
    if data.len() >= PARALLEL_VOXEL_THRESHOLD {
        zip.par_for_each(pass);
    } else {
        zip.for_each(pass);
    }
    result
}
