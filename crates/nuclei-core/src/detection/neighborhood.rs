//! Spatio-scale search neighborhoods around peak candidates.
//!
//! A candidate at `[s, x, y, z]` is compared against every response in the
//! layers `s - 1 ..= s + 1` and, spatially, within `ceil(radius / resolution)`
//! voxels per axis, where `radius` is the candidate's own physical scale.
//! Coordinates that fall outside the stack are clamped onto its border and
//! duplicates produced by clamping are dropped.

use std::collections::BTreeSet;

use ndarray::{s, Array4, ArrayView4};

use crate::volume::Resolution;

use super::ScaleVoxel;

/// Number of neighbouring layers searched on each side of a candidate's scale.
pub const SCALE_HALF_WIDTH: usize = 1;

/// Spatial half-widths, in voxels, of a window with the given physical radius.
pub fn spatial_half_widths(radius: f64, resolution: &Resolution) -> [usize; 3] {
    let half = |axis: usize| {
        let h = (radius / resolution[axis]).ceil();
        if h.is_finite() && h > 0.0 {
            h as usize
        } else {
            0
        }
    };
    [half(0), half(1), half(2)]
}

/// Explicit neighborhood of `center` inside a stack of shape `shape`.
///
/// Builds the full cross product of offsets, clamps every coordinate into
/// `[0, dim - 1]` independently and deduplicates. The result is sorted in
/// ascending (scale, x, y, z) order and always contains `center`.
pub fn neighborhood(center: ScaleVoxel, half_widths: [usize; 3], shape: [usize; 4]) -> Vec<ScaleVoxel> {
    let half = [
        SCALE_HALF_WIDTH as isize,
        half_widths[0] as isize,
        half_widths[1] as isize,
        half_widths[2] as isize,
    ];
    let clamp = |axis: usize, offset: isize| -> usize {
        let max = shape[axis] as isize - 1;
        (center[axis] as isize + offset).clamp(0, max.max(0)) as usize
    };

    let mut coords = BTreeSet::new();
    for ds in -half[0]..=half[0] {
        for dx in -half[1]..=half[1] {
            for dy in -half[2]..=half[2] {
                for dz in -half[3]..=half[3] {
                    coords.insert([clamp(0, ds), clamp(1, dx), clamp(2, dy), clamp(3, dz)]);
                }
            }
        }
    }
    coords.into_iter().collect()
}

/// The clamped neighborhood of a candidate as an inclusive box.
///
/// Clamping a contiguous range of offsets yields a contiguous range of
/// indices, so this box covers exactly the coordinates returned by
/// [`neighborhood`], each once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeighborhoodBox {
    /// Inclusive lower corner.
    pub lower: ScaleVoxel,
    /// Inclusive upper corner.
    pub upper: ScaleVoxel,
}

impl NeighborhoodBox {
    pub fn around(center: ScaleVoxel, half_widths: [usize; 3], shape: [usize; 4]) -> Self {
        let half = [SCALE_HALF_WIDTH, half_widths[0], half_widths[1], half_widths[2]];
        let mut lower = [0usize; 4];
        let mut upper = [0usize; 4];
        for axis in 0..4 {
            let max = shape[axis].saturating_sub(1);
            lower[axis] = center[axis].saturating_sub(half[axis]).min(max);
            upper[axis] = center[axis].saturating_add(half[axis]).min(max);
        }
        Self { lower, upper }
    }

    pub fn len(&self) -> usize {
        (0..4).map(|a| self.upper[a] - self.lower[a] + 1).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, coord: ScaleVoxel) -> bool {
        (0..4).all(|a| self.lower[a] <= coord[a] && coord[a] <= self.upper[a])
    }

    /// View of the box inside `data`.
    pub fn view<'a>(&self, data: &'a Array4<f32>) -> ArrayView4<'a, f32> {
        let (l, u) = (self.lower, self.upper);
        data.slice(s![l[0]..=u[0], l[1]..=u[1], l[2]..=u[2], l[3]..=u[3]])
    }

    /// Coordinates of the box in ascending (scale, x, y, z) order.
    pub fn coords(&self) -> impl Iterator<Item = ScaleVoxel> + '_ {
        let (l, u) = (self.lower, self.upper);
        (l[0]..=u[0]).flat_map(move |s| {
            (l[1]..=u[1]).flat_map(move |x| {
                (l[2]..=u[2]).flat_map(move |y| (l[3]..=u[3]).map(move |z| [s, x, y, z]))
            })
        })
    }
}
