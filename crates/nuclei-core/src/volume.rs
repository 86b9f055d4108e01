use ndarray::Array3;

use crate::error::{NucleiError, Result};

/// Physical size of one voxel along x, y and z.
pub type Resolution = [f64; 3];

/// A 3D scalar image with its physical voxel spacing.
#[derive(Clone, Debug)]
pub struct Volume {
    /// Voxel intensities, indexed `[x, y, z]`.
    pub data: Array3<f32>,
    /// Voxel spacing in physical units.
    pub resolution: Resolution,
}

impl Volume {
    pub fn new(data: Array3<f32>, resolution: Resolution) -> Result<Self> {
        validate_resolution(&resolution)?;
        Ok(Self { data, resolution })
    }

    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    pub fn voxel_count(&self) -> usize {
        self.data.len()
    }

    /// Physical position of a voxel index.
    pub fn to_physical(&self, index: [usize; 3]) -> [f64; 3] {
        voxel_to_physical(index, &self.resolution)
    }

    /// Voxel index of a physical position, truncated toward zero and clamped
    /// into the volume.
    pub fn to_voxel(&self, position: &[f64; 3]) -> [usize; 3] {
        let (nx, ny, nz) = self.shape();
        let dims = [nx, ny, nz];
        let mut index = [0usize; 3];
        for axis in 0..3 {
            let v = (position[axis] / self.resolution[axis]).trunc();
            let max = dims[axis].saturating_sub(1);
            index[axis] = if v.is_finite() && v > 0.0 {
                (v as usize).min(max)
            } else {
                0
            };
        }
        index
    }
}

pub fn voxel_to_physical(index: [usize; 3], resolution: &Resolution) -> [f64; 3] {
    [
        index[0] as f64 * resolution[0],
        index[1] as f64 * resolution[1],
        index[2] as f64 * resolution[2],
    ]
}

pub fn validate_resolution(resolution: &Resolution) -> Result<()> {
    if resolution.iter().any(|r| !r.is_finite() || *r <= 0.0) {
        return Err(NucleiError::InvalidParameters(format!(
            "resolution must be finite and positive, got {resolution:?}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_voxel_truncates_and_clamps() {
        let vol = Volume::new(Array3::zeros((4, 4, 4)), [0.5, 0.5, 2.0]).unwrap();
        assert_eq!(vol.to_voxel(&[0.74, 1.0, 3.9]), [1, 2, 1]);
        assert_eq!(vol.to_voxel(&[100.0, -1.0, 0.0]), [3, 0, 0]);
    }

    #[test]
    fn rejects_bad_resolution() {
        assert!(Volume::new(Array3::zeros((2, 2, 2)), [1.0, 0.0, 1.0]).is_err());
        assert!(Volume::new(Array3::zeros((2, 2, 2)), [1.0, f64::NAN, 1.0]).is_err());
    }
}
