use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_DATA_NAME;
use crate::detection::DetectionConfig;
use crate::error::Result;
use crate::io::{load_raw_volume, load_slice_stack, RawVolumeSpec};
use crate::ratio::RatioConfig;
use crate::volume::{Resolution, Volume};

/// Where a channel's voxels come from.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VolumeSource {
    /// Headerless raw sample file.
    Raw(RawVolumeSpec),
    /// Directory with one image per z slice.
    SliceStack { dir: PathBuf },
}

impl VolumeSource {
    pub fn load(&self, resolution: Resolution) -> Result<Volume> {
        match self {
            Self::Raw(spec) => load_raw_volume(spec, resolution),
            Self::SliceStack { dir } => load_slice_stack(dir, resolution),
        }
    }
}

impl std::fmt::Display for VolumeSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Raw(spec) => write!(
                f,
                "{} ({}x{}x{} {:?})",
                spec.path.display(),
                spec.shape[0],
                spec.shape[1],
                spec.shape[2],
                spec.sample_type
            ),
            Self::SliceStack { dir } => write!(f, "{} (slices)", dir.display()),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Physical voxel spacing shared by all channels.
    pub resolution: Resolution,
    /// Points file to write.
    pub output: PathBuf,
    /// Header name of the ratio column.
    #[serde(default = "default_data_name")]
    pub data_name: String,
    /// Nuclei-marker channel.
    pub nuclei: VolumeSource,
    /// Optional second channel sampled at each detection.
    pub signal: Option<VolumeSource>,
    #[serde(default)]
    pub detection: DetectionConfig,
    #[serde(default)]
    pub ratio: RatioConfig,
}

fn default_data_name() -> String {
    DEFAULT_DATA_NAME.to_string()
}
