use ndarray::Array3;
use tracing::debug;

use crate::error::Result;
use crate::filters::{gaussian_smooth, laplacian};
use crate::volume::{Resolution, Volume};

use super::scales::validate_scales;

/// One entry of a scale space.
#[derive(Clone, Debug)]
pub enum ScaleLayer {
    /// The first scale only anchors the recurrence; nothing is computed for it.
    Seed,
    /// Laplacian of the source smoothed at this scale.
    Laplacian(Array3<f32>),
}

impl ScaleLayer {
    pub fn laplacian(&self) -> Option<&Array3<f32>> {
        match self {
            Self::Seed => None,
            Self::Laplacian(data) => Some(data),
        }
    }
}

/// Per-scale filtered responses of a single volume.
#[derive(Clone, Debug)]
pub struct ScaleSpace {
    /// One layer per entry of `sigmas`.
    pub layers: Vec<ScaleLayer>,
    /// Log-scale parameters the layers were built with.
    pub sigmas: Vec<f64>,
    pub resolution: Resolution,
    pub shape: (usize, usize, usize),
}

impl ScaleSpace {
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

/// Per-axis Gaussian width for a log-scale parameter: `exp(resolution * sigma)`.
pub fn kernel_sigma(resolution: &Resolution, sigma: f64) -> [f64; 3] {
    [
        (resolution[0] * sigma).exp(),
        (resolution[1] * sigma).exp(),
        (resolution[2] * sigma).exp(),
    ]
}

/// Build the scale space of `volume` for an increasing list of log-scale parameters.
///
/// Every layer after the first is the Laplacian of the *source* volume
/// smoothed at that scale; layers never build on one another.
pub fn build_scale_space(volume: &Volume, sigmas: &[f64]) -> Result<ScaleSpace> {
    build_scale_space_with_progress(volume, sigmas, |_| {})
}

/// Like [`build_scale_space`], calling `on_progress(layers_done)` after each layer.
pub fn build_scale_space_with_progress(
    volume: &Volume,
    sigmas: &[f64],
    on_progress: impl Fn(usize),
) -> Result<ScaleSpace> {
    validate_scales(sigmas)?;

    let mut layers = Vec::with_capacity(sigmas.len());
    layers.push(ScaleLayer::Seed);
    on_progress(1);

    for (i, &sigma) in sigmas.iter().enumerate().skip(1) {
        let kernel = kernel_sigma(&volume.resolution, sigma);
        debug!(scale = i, sigma, ?kernel, "Smoothing scale-space layer");
        let smoothed = gaussian_smooth(&volume.data, kernel);
        layers.push(ScaleLayer::Laplacian(laplacian(&smoothed)));
        on_progress(i + 1);
    }

    Ok(ScaleSpace {
        layers,
        sigmas: sigmas.to_vec(),
        resolution: volume.resolution,
        shape: volume.shape(),
    })
}
