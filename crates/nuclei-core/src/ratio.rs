use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{DEFAULT_RATIO_SIGMA, RATIO_CAP, RATIO_EPSILON};
use crate::error::{NucleiError, Result};
use crate::filters::gaussian_smooth;
use crate::points::{PointMap, Position};
use crate::volume::Volume;

/// Configuration for the signal/nuclei channel ratio.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RatioConfig {
    /// Smoothing width applied to both channels, in units of resolution.
    #[serde(default = "default_smoothing_sigma")]
    pub smoothing_sigma: f64,
}

fn default_smoothing_sigma() -> f64 {
    DEFAULT_RATIO_SIGMA
}

impl Default for RatioConfig {
    fn default() -> Self {
        Self {
            smoothing_sigma: DEFAULT_RATIO_SIGMA,
        }
    }
}

/// Ratio of two smoothed intensities: `min((signal + eps) / (nuclei + eps), 1)`.
pub fn bounded_ratio(signal: f64, nuclei: f64) -> f64 {
    ((signal + RATIO_EPSILON) / (nuclei + RATIO_EPSILON)).min(RATIO_CAP)
}

/// Signal-to-nuclei intensity ratio at each detected position.
///
/// Both channels are smoothed with a per-axis Gaussian of width
/// `resolution * smoothing_sigma`, then sampled at the voxel obtained by
/// truncating `position / resolution`. Ratios are keyed by the ids of
/// `positions`.
pub fn compute_channel_ratios(
    nuclei: &Volume,
    signal: &Volume,
    positions: &PointMap<Position>,
    smoothing_sigma: f64,
) -> Result<PointMap<f64>> {
    if nuclei.shape() != signal.shape() {
        return Err(NucleiError::DimensionMismatch {
            expected: nuclei.shape(),
            actual: signal.shape(),
        });
    }
    if nuclei.resolution != signal.resolution {
        return Err(NucleiError::InvalidParameters(format!(
            "channel resolutions differ: {:?} vs {:?}",
            nuclei.resolution, signal.resolution
        )));
    }
    if !smoothing_sigma.is_finite() || smoothing_sigma < 0.0 {
        return Err(NucleiError::InvalidParameters(format!(
            "smoothing sigma must be finite and non-negative, got {smoothing_sigma}"
        )));
    }
    if positions.is_empty() || nuclei.voxel_count() == 0 {
        return Ok(PointMap::new());
    }

    let res = nuclei.resolution;
    let sigma = [
        res[0] * smoothing_sigma,
        res[1] * smoothing_sigma,
        res[2] * smoothing_sigma,
    ];
    let (smoothed_nuclei, smoothed_signal) = rayon::join(
        || gaussian_smooth(&nuclei.data, sigma),
        || gaussian_smooth(&signal.data, sigma),
    );

    let ratios: PointMap<f64> = positions
        .iter()
        .map(|(id, position)| {
            let index = nuclei.to_voxel(position);
            let n = smoothed_nuclei[index] as f64;
            let s = smoothed_signal[index] as f64;
            (id, bounded_ratio(s, n))
        })
        .collect();

    info!(points = ratios.len(), smoothing_sigma, "Channel ratios computed");
    Ok(ratios)
}
