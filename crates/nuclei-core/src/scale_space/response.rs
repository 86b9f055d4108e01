use ndarray::{Array3, Array4, Axis, Zip};
use tracing::debug;

use crate::error::{NucleiError, Result};
use crate::volume::Resolution;

use super::builder::ScaleSpace;

/// Scale-normalized blob responses, one layer per usable scale.
#[derive(Clone, Debug)]
pub struct ResponseStack {
    /// Responses indexed `[scale, x, y, z]`.
    pub data: Array4<f32>,
    /// Physical scale (`exp(sigma)`) of each layer, ascending.
    pub scales: Vec<f64>,
    pub resolution: Resolution,
}

impl ResponseStack {
    pub fn num_scales(&self) -> usize {
        self.data.len_of(Axis(0))
    }

    pub fn is_empty(&self) -> bool {
        self.num_scales() == 0
    }

    /// Spatial shape `(x, y, z)` shared by every layer.
    pub fn spatial_shape(&self) -> (usize, usize, usize) {
        let (_, x, y, z) = self.data.dim();
        (x, y, z)
    }

    pub fn value(&self, coord: [usize; 4]) -> f32 {
        self.data[coord]
    }
}

/// Combine adjacent Laplacian layers into a scale-normalized response stack.
///
/// For each `i` in `2..n`:
///   `exp(sigma[i-1])^2 * L[i] - exp(sigma[i])^2 * L[i-1]`
/// tagged with the physical scale `exp(sigma[i-1])`.
pub fn build_response_stack(space: &ScaleSpace) -> Result<ResponseStack> {
    let (nx, ny, nz) = space.shape;
    let n = space.len();
    let mut layers: Vec<Array3<f32>> = Vec::with_capacity(n.saturating_sub(2));
    let mut scales = Vec::with_capacity(n.saturating_sub(2));

    for i in 2..n {
        let current = layer_laplacian(space, i)?;
        let previous = layer_laplacian(space, i - 1)?;

        let prev_scale = space.sigmas[i - 1].exp();
        let cur_scale = space.sigmas[i].exp();
        let w_current = prev_scale * prev_scale;
        let w_previous = cur_scale * cur_scale;
        debug!(scale = prev_scale, w_current, w_previous, "Response layer");

        let mut layer = Array3::<f32>::zeros((nx, ny, nz));
        Zip::from(&mut layer)
            .and(current)
            .and(previous)
            .for_each(|out, &c, &p| {
                *out = (w_current * c as f64 - w_previous * p as f64) as f32;
            });

        layers.push(layer);
        scales.push(prev_scale);
    }

    let mut data = Array4::<f32>::zeros((layers.len(), nx, ny, nz));
    for (mut dst, src) in data.outer_iter_mut().zip(&layers) {
        dst.assign(src);
    }

    Ok(ResponseStack {
        data,
        scales,
        resolution: space.resolution,
    })
}

fn layer_laplacian(space: &ScaleSpace, index: usize) -> Result<&Array3<f32>> {
    space.layers[index].laplacian().ok_or_else(|| {
        NucleiError::InvalidParameters(format!("scale-space layer {index} has no response"))
    })
}
