use std::fs::File;
use std::path::PathBuf;

use byteorder::{BigEndian, ByteOrder as _, LittleEndian};
use memmap2::Mmap;
use ndarray::{Array3, ShapeBuilder};
use num_traits::AsPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{NucleiError, Result};
use crate::volume::{Resolution, Volume};

/// Storage type of one raw sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleType {
    U8,
    #[default]
    U16,
    F32,
}

impl SampleType {
    pub fn bytes_per_sample(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U16 => 2,
            Self::F32 => 4,
        }
    }
}

/// Byte order of multi-byte samples.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteOrder {
    #[default]
    Little,
    Big,
}

/// Layout of a headerless raw volume file.
///
/// Samples are stored with x varying fastest and z slowest (one xy slice after
/// another).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawVolumeSpec {
    pub path: PathBuf,
    /// Volume shape `[x, y, z]` in voxels.
    pub shape: [usize; 3],
    #[serde(default)]
    pub sample_type: SampleType,
    #[serde(default)]
    pub byte_order: ByteOrder,
    /// Bytes to skip at the start of the file.
    #[serde(default)]
    pub header_bytes: usize,
}

impl RawVolumeSpec {
    pub fn voxel_count(&self) -> usize {
        self.shape.iter().product()
    }

    /// Bytes of sample data the file must provide after the header.
    pub fn data_byte_size(&self) -> Result<usize> {
        self.shape
            .iter()
            .try_fold(self.sample_type.bytes_per_sample(), |acc, &d| acc.checked_mul(d))
            .ok_or_else(|| {
                NucleiError::InvalidVolume(format!("volume shape {:?} too large", self.shape))
            })
    }
}

/// Memory-map and decode a raw volume.
pub fn load_raw_volume(spec: &RawVolumeSpec, resolution: Resolution) -> Result<Volume> {
    let data_size = spec.data_byte_size()?;
    let file = File::open(&spec.path)?;
    let file_len = file.metadata()?.len() as usize;
    let expected = spec.header_bytes + data_size;
    if file_len < expected {
        return Err(NucleiError::InvalidVolume(format!(
            "{}: expected at least {} bytes, got {}",
            spec.path.display(),
            expected,
            file_len
        )));
    }
    if data_size == 0 {
        let data = Array3::<f32>::zeros((spec.shape[0], spec.shape[1], spec.shape[2]));
        return Volume::new(data, resolution);
    }

    let mmap = unsafe { Mmap::map(&file)? };
    let bytes = &mmap[spec.header_bytes..expected];
    let samples = decode_samples(bytes, spec.sample_type, spec.byte_order);

    let [nx, ny, nz] = spec.shape;
    let data = Array3::from_shape_vec((nx, ny, nz).f(), samples)
        .map_err(|e| NucleiError::InvalidVolume(e.to_string()))?;
    Volume::new(data.as_standard_layout().into_owned(), resolution)
}

fn decode_samples(bytes: &[u8], sample_type: SampleType, order: ByteOrder) -> Vec<f32> {
    let n = bytes.len() / sample_type.bytes_per_sample();
    match sample_type {
        SampleType::U8 => widen(bytes),
        SampleType::U16 => {
            let mut buf = vec![0u16; n];
            match order {
                ByteOrder::Little => LittleEndian::read_u16_into(bytes, &mut buf),
                ByteOrder::Big => BigEndian::read_u16_into(bytes, &mut buf),
            }
            widen(&buf)
        }
        SampleType::F32 => {
            let mut buf = vec![0f32; n];
            match order {
                ByteOrder::Little => LittleEndian::read_f32_into(bytes, &mut buf),
                ByteOrder::Big => BigEndian::read_f32_into(bytes, &mut buf),
            }
            buf
        }
    }
}

fn widen<T: AsPrimitive<f32>>(samples: &[T]) -> Vec<f32> {
    samples.iter().map(|v| v.as_()).collect()
}
