use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_SCALE_END, DEFAULT_SCALE_START, DEFAULT_SCALE_STEP, DEFAULT_THRESHOLD_PERCENTILE,
};
use crate::error::{NucleiError, Result};
use crate::scale_space::scale_range;

/// How the response threshold for peak candidates is chosen.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ThresholdMethod {
    /// Percentile (0..=100) of all response values.
    Percentile(f64),
    /// Absolute response value.
    Fixed(f32),
}

impl Default for ThresholdMethod {
    fn default() -> Self {
        Self::Percentile(DEFAULT_THRESHOLD_PERCENTILE)
    }
}

impl ThresholdMethod {
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Percentile(p) if !(0.0..=100.0).contains(&p) => Err(
                NucleiError::InvalidParameters(format!("percentile must be in 0..=100, got {p}")),
            ),
            Self::Fixed(v) if v.is_nan() => Err(NucleiError::InvalidParameters(
                "fixed threshold is NaN".into(),
            )),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Display for ThresholdMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Percentile(p) => write!(f, "Percentile ({p})"),
            Self::Fixed(v) => write!(f, "Fixed ({v})"),
        }
    }
}

/// Configuration for multi-scale nuclei detection.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DetectionConfig {
    /// First log-scale parameter.
    #[serde(default = "default_scale_start")]
    pub scale_start: f64,
    /// Exclusive end of the log-scale range.
    #[serde(default = "default_scale_end")]
    pub scale_end: f64,
    /// Step between log-scale parameters.
    #[serde(default = "default_scale_step")]
    pub scale_step: f64,
    /// Candidate threshold on the response stack.
    #[serde(default)]
    pub threshold: ThresholdMethod,
}

fn default_scale_start() -> f64 {
    DEFAULT_SCALE_START
}
fn default_scale_end() -> f64 {
    DEFAULT_SCALE_END
}
fn default_scale_step() -> f64 {
    DEFAULT_SCALE_STEP
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            scale_start: DEFAULT_SCALE_START,
            scale_end: DEFAULT_SCALE_END,
            scale_step: DEFAULT_SCALE_STEP,
            threshold: ThresholdMethod::default(),
        }
    }
}

impl DetectionConfig {
    /// Log-scale parameters described by this config.
    pub fn sigmas(&self) -> Result<Vec<f64>> {
        scale_range(self.scale_start, self.scale_end, self.scale_step)
    }

    /// Check the threshold and return the log-scale parameters.
    pub fn validate(&self) -> Result<Vec<f64>> {
        self.threshold.validate()?;
        self.sigmas()
    }
}
