use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Args, ValueEnum};
use nuclei_core::io::{ByteOrder, RawVolumeSpec, SampleType};
use nuclei_core::pipeline::config::VolumeSource;
use nuclei_core::volume::Resolution;

#[derive(Clone, Copy, ValueEnum)]
pub enum SampleTypeArg {
    U8,
    U16,
    F32,
}

impl From<SampleTypeArg> for SampleType {
    fn from(arg: SampleTypeArg) -> Self {
        match arg {
            SampleTypeArg::U8 => SampleType::U8,
            SampleTypeArg::U16 => SampleType::U16,
            SampleTypeArg::F32 => SampleType::F32,
        }
    }
}

/// Voxel layout and spacing shared by every input volume of a command.
#[derive(Args)]
pub struct VolumeArgs {
    /// Voxel spacing along x, y and z
    #[arg(long, num_args = 3, required = true, value_names = ["SX", "SY", "SZ"])]
    pub resolution: Vec<f64>,

    /// Raw volume shape in voxels (ignored for slice directories)
    #[arg(long, num_args = 3, value_names = ["X", "Y", "Z"])]
    pub shape: Option<Vec<usize>>,

    /// Raw sample type
    #[arg(long, value_enum, default_value = "u16")]
    pub dtype: SampleTypeArg,

    /// Raw samples are big-endian
    #[arg(long)]
    pub big_endian: bool,

    /// Bytes to skip at the start of a raw file
    #[arg(long, default_value = "0")]
    pub header_bytes: usize,
}

impl VolumeArgs {
    pub fn resolution(&self) -> Result<Resolution> {
        match self.resolution.as_slice() {
            &[x, y, z] => Ok([x, y, z]),
            other => bail!("--resolution takes 3 values, got {}", other.len()),
        }
    }

    /// A directory is read as a slice stack, anything else as a raw file.
    pub fn source(&self, path: &Path) -> Result<VolumeSource> {
        if path.is_dir() {
            return Ok(VolumeSource::SliceStack {
                dir: path.to_path_buf(),
            });
        }
        let shape = match self.shape.as_deref() {
            Some(&[x, y, z]) => [x, y, z],
            Some(other) => bail!("--shape takes 3 values, got {}", other.len()),
            None => bail!("{} is a raw file; --shape is required", path.display()),
        };
        Ok(VolumeSource::Raw(RawVolumeSpec {
            path: PathBuf::from(path),
            shape,
            sample_type: self.dtype.into(),
            byte_order: if self.big_endian {
                ByteOrder::Big
            } else {
                ByteOrder::Little
            },
            header_bytes: self.header_bytes,
        }))
    }
}
