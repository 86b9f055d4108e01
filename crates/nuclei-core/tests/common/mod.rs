#![allow(dead_code)]

use ndarray::{Array3, Array4};

use nuclei_core::scale_space::ResponseStack;
use nuclei_core::volume::{Resolution, Volume};

/// Volume holding one Gaussian-shaped blob, defined in physical units.
///
/// `center` is a voxel index; `radius` is the blob's standard deviation in
/// physical units.
pub fn gaussian_blob_volume(
    shape: (usize, usize, usize),
    center: [usize; 3],
    radius: f64,
    resolution: Resolution,
    amplitude: f32,
) -> Volume {
    let data = Array3::from_shape_fn(shape, |(x, y, z)| {
        let d2: f64 = [x, y, z]
            .iter()
            .zip(center.iter())
            .zip(resolution.iter())
            .map(|((&i, &c), &r)| {
                let d = (i as f64 - c as f64) * r;
                d * d
            })
            .sum();
        amplitude * (-d2 / (2.0 * radius * radius)).exp() as f32
    });
    Volume::new(data, resolution).expect("valid resolution")
}

/// Deterministic pseudo-random values in `[0, 1)`.
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_f32(&mut self) -> f32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 40) as f32 / (1u64 << 24) as f32
    }
}

/// Response stack filled with pseudo-random values.
pub fn random_stack(shape: (usize, usize, usize, usize), scales: Vec<f64>, resolution: Resolution, seed: u64) -> ResponseStack {
    let mut rng = Lcg::new(seed);
    let data = Array4::from_shape_simple_fn(shape, || rng.next_f32());
    ResponseStack {
        data,
        scales,
        resolution,
    }
}

/// Response stack of zeros.
pub fn zero_stack(shape: (usize, usize, usize, usize), scales: Vec<f64>, resolution: Resolution) -> ResponseStack {
    ResponseStack {
        data: Array4::zeros(shape),
        scales,
        resolution,
    }
}
