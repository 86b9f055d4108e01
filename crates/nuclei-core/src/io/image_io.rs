use std::path::{Path, PathBuf};

use image::ImageFormat;
use ndarray::{Array2, Array3, Axis};
use tracing::debug;

use crate::error::{NucleiError, Result};
use crate::volume::{Resolution, Volume};

/// Image files in `dir` that the image crate can decode, sorted by file name.
pub fn list_slices(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && ImageFormat::from_path(p).is_ok())
        .collect();
    paths.sort();
    Ok(paths)
}

/// Load a grayscale image as a `[x, y]` array of 16-bit range intensities.
///
/// 8-bit images are widened to the 16-bit range.
pub fn load_slice(path: &Path) -> Result<Array2<f32>> {
    let gray = image::open(path)?.to_luma16();
    let (w, h) = gray.dimensions();
    let mut data = Array2::<f32>::zeros((w as usize, h as usize));
    for (col, row, pixel) in gray.enumerate_pixels() {
        data[[col as usize, row as usize]] = pixel.0[0] as f32;
    }
    Ok(data)
}

/// Load a z-stack stored as one image per slice in `dir`.
///
/// Slices are ordered by file name; image columns map to x and rows to y.
pub fn load_slice_stack(dir: &Path, resolution: Resolution) -> Result<Volume> {
    let paths = list_slices(dir)?;
    if paths.is_empty() {
        return Err(NucleiError::EmptySequence);
    }

    let first = load_slice(&paths[0])?;
    let (nx, ny) = first.dim();
    let mut data = Array3::<f32>::zeros((nx, ny, paths.len()));
    data.index_axis_mut(Axis(2), 0).assign(&first);

    for (z, path) in paths.iter().enumerate().skip(1) {
        let slice = load_slice(path)?;
        if slice.dim() != (nx, ny) {
            return Err(NucleiError::InvalidVolume(format!(
                "{}: slice is {:?}, expected {:?}",
                path.display(),
                slice.dim(),
                (nx, ny)
            )));
        }
        data.index_axis_mut(Axis(2), z).assign(&slice);
    }
    debug!(slices = paths.len(), shape = ?data.dim(), "Loaded slice stack");

    Volume::new(data, resolution)
}
