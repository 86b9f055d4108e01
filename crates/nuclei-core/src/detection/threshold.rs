use ndarray::Array4;

use crate::consts::DEFAULT_THRESHOLD_PERCENTILE;

use super::config::ThresholdMethod;
use super::ScaleVoxel;

/// Resolve the threshold for a response stack. `None` when the stack holds
/// no comparable values.
pub fn compute_threshold(data: &Array4<f32>, method: &ThresholdMethod) -> Option<f32> {
    match method {
        ThresholdMethod::Percentile(p) => percentile(data.iter().copied(), *p),
        ThresholdMethod::Fixed(v) => Some(*v),
    }
}

/// Threshold used when the caller supplies none.
pub fn default_threshold(data: &Array4<f32>) -> Option<f32> {
    percentile(data.iter().copied(), DEFAULT_THRESHOLD_PERCENTILE)
}

/// `p`-th percentile (0..=100) with linear interpolation between the two
/// closest ranks. NaN values are ignored; `None` if nothing is left.
pub fn percentile(values: impl Iterator<Item = f32>, p: f64) -> Option<f32> {
    let mut buf: Vec<f32> = values.filter(|v| !v.is_nan()).collect();
    if buf.is_empty() {
        return None;
    }

    let rank = (p.clamp(0.0, 100.0) / 100.0) * (buf.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let frac = rank - lo as f64;

    let (_, &mut lo_val, upper) = buf.select_nth_unstable_by(lo, f32::total_cmp);
    if frac == 0.0 {
        return Some(lo_val);
    }
    let hi_val = upper
        .iter()
        .copied()
        .min_by(f32::total_cmp)
        .unwrap_or(lo_val);

    Some((lo_val as f64 + (hi_val as f64 - lo_val as f64) * frac) as f32)
}

/// Every `[scale, x, y, z]` whose response strictly exceeds `threshold`, in
/// ascending (scale, x, y, z) order.
pub fn select_candidates(data: &Array4<f32>, threshold: f32) -> Vec<ScaleVoxel> {
    data.indexed_iter()
        .filter(|&(_, &v)| v > threshold)
        .map(|((s, x, y, z), _)| [s, x, y, z])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percentile_interpolates_between_ranks() {
        let values = [1.0f32, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(percentile(values.iter().copied(), 50.0), Some(3.0));
        assert_eq!(percentile(values.iter().copied(), 100.0), Some(5.0));
        assert_eq!(percentile(values.iter().copied(), 0.0), Some(1.0));
        let p90 = percentile(values.iter().copied(), 90.0).unwrap();
        assert!((p90 - 4.6).abs() < 1e-6);
    }

    #[test]
    fn percentile_of_nothing_is_none() {
        assert_eq!(percentile(std::iter::empty(), 90.0), None);
        assert_eq!(percentile([f32::NAN].into_iter(), 90.0), None);
    }

    #[test]
    fn candidates_are_strictly_above() {
        let mut data = Array4::<f32>::zeros((2, 2, 2, 2));
        data[[1, 0, 1, 0]] = 2.0;
        data[[0, 1, 1, 1]] = 1.0;
        assert_eq!(select_candidates(&data, 1.0), vec![[1, 0, 1, 0]]);
        assert_eq!(
            select_candidates(&data, 0.5),
            vec![[0, 1, 1, 1], [1, 0, 1, 0]]
        );
    }
}
