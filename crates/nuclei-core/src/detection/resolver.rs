use crate::points::{PointMap, Position};
use crate::scale_space::ResponseStack;
use crate::volume::voxel_to_physical;

use super::ScaleVoxel;

/// Detected nuclei in physical space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DetectionSet {
    /// Physical position of each detection.
    pub positions: PointMap<Position>,
    /// Physical scale (`exp(sigma)`) of each detection.
    pub scales: PointMap<f64>,
}

impl DetectionSet {
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Turn voxel peaks into a detection set.
///
/// Ids are assigned sequentially from 0 in the order of `peaks`. Nearby or
/// coincident peaks are kept as separate detections.
pub fn resolve_detections(peaks: &[ScaleVoxel], stack: &ResponseStack) -> DetectionSet {
    let mut set = DetectionSet::default();
    for (id, &[s, x, y, z]) in peaks.iter().enumerate() {
        let id = id as u64;
        set.positions
            .insert(id, voxel_to_physical([x, y, z], &stack.resolution));
        set.scales.insert(id, stack.scales[s]);
    }
    set
}
