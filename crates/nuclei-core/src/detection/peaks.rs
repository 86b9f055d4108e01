use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{debug, info};

use crate::consts::PARALLEL_CANDIDATE_THRESHOLD;
use crate::scale_space::ResponseStack;

use super::neighborhood::{spatial_half_widths, NeighborhoodBox};
use super::threshold::{default_threshold, select_candidates};
use super::ScaleVoxel;

/// `[layers, x, y, z]` shape of a response stack.
pub fn stack_shape(stack: &ResponseStack) -> [usize; 4] {
    let (s, x, y, z) = stack.data.dim();
    [s, x, y, z]
}

/// Neighborhood box searched for `candidate`, sized by its layer's physical scale.
pub fn candidate_neighborhood(stack: &ResponseStack, candidate: ScaleVoxel) -> NeighborhoodBox {
    let radius = stack.scales[candidate[0]];
    let half = spatial_half_widths(radius, &stack.resolution);
    NeighborhoodBox::around(candidate, half, stack_shape(stack))
}

/// True when no response in the candidate's neighborhood exceeds its own.
///
/// Ties count as maxima: every voxel of a flat maximum qualifies.
pub fn is_local_maximum(stack: &ResponseStack, candidate: ScaleVoxel) -> bool {
    let value = stack.value(candidate);
    let max = candidate_neighborhood(stack, candidate)
        .view(&stack.data)
        .fold(f32::NEG_INFINITY, |m, &v| m.max(v));
    max == value
}

/// Find local maxima of a response stack.
///
/// Candidates are the responses strictly above `threshold` (the 90th
/// percentile of the stack when `None`); each is kept if it is a maximum of its
/// own neighborhood. Peaks are returned as `[scale, x, y, z]` in ascending
/// order. An empty stack yields no peaks.
pub fn detect_peaks(stack: &ResponseStack, threshold: Option<f32>) -> Vec<ScaleVoxel> {
    detect_peaks_with_progress(stack, threshold, |_| {})
}

/// Like [`detect_peaks`], calling `on_progress(candidates_done)` as each
/// candidate is validated.
pub fn detect_peaks_with_progress(
    stack: &ResponseStack,
    threshold: Option<f32>,
    on_progress: impl Fn(usize) + Send + Sync,
) -> Vec<ScaleVoxel> {
    if stack.is_empty() || stack.data.is_empty() {
        debug!("Empty response stack, no peaks");
        return Vec::new();
    }
    let Some(threshold) = threshold.or_else(|| default_threshold(&stack.data)) else {
        return Vec::new();
    };

    let candidates = select_candidates(&stack.data, threshold);
    info!(threshold, candidates = candidates.len(), "Validating peak candidates");

    let done = AtomicUsize::new(0);
    let check = |c: &ScaleVoxel| {
        let keep = is_local_maximum(stack, *c);
        on_progress(done.fetch_add(1, Ordering::Relaxed) + 1);
        keep
    };

    let mut peaks: Vec<ScaleVoxel> = if candidates.len() >= PARALLEL_CANDIDATE_THRESHOLD {
        candidates.par_iter().filter(|c| check(*c)).copied().collect()
    } else {
        candidates.iter().filter(|c| check(*c)).copied().collect()
    };
    peaks.sort_unstable();

    info!(peaks = peaks.len(), "Peak detection complete");
    peaks
}
