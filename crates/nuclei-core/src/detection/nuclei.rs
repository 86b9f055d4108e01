use tracing::info;

use crate::error::Result;
use crate::pipeline::{DetectionStage, NoOpReporter, ProgressReporter};
use crate::scale_space::{build_response_stack, build_scale_space_with_progress};
use crate::volume::Volume;

use super::config::DetectionConfig;
use super::peaks::detect_peaks_with_progress;
use super::resolver::{resolve_detections, DetectionSet};
use super::threshold::compute_threshold;

/// Detect nuclei in a nuclei-marker volume.
///
/// Pipeline: scale space -> scale-normalized responses -> threshold ->
/// 4D local maxima -> physical coordinates.
pub fn detect_nuclei(volume: &Volume, config: &DetectionConfig) -> Result<DetectionSet> {
    detect_nuclei_reported(volume, config, &NoOpReporter)
}

/// Like [`detect_nuclei`], reporting stage progress to `reporter`.
pub fn detect_nuclei_reported(
    volume: &Volume,
    config: &DetectionConfig,
    reporter: &dyn ProgressReporter,
) -> Result<DetectionSet> {
    let sigmas = config.validate()?;
    let (nx, ny, nz) = volume.shape();
    info!(
        scales = sigmas.len(),
        shape = ?(nx, ny, nz),
        resolution = ?volume.resolution,
        "Detecting nuclei"
    );

    reporter.begin_stage(DetectionStage::ScaleSpace, Some(sigmas.len()));
    let space = build_scale_space_with_progress(volume, &sigmas, |done| reporter.advance(done))?;
    reporter.finish_stage();

    reporter.begin_stage(DetectionStage::Response, None);
    let stack = build_response_stack(&space)?;
    drop(space);
    reporter.finish_stage();
    info!(
        layers = stack.num_scales(),
        scales = ?stack.scales,
        "Response stack built"
    );

    reporter.begin_stage(DetectionStage::PeakValidation, None);
    let threshold = compute_threshold(&stack.data, &config.threshold);
    let peaks = detect_peaks_with_progress(&stack, threshold, |done| reporter.advance(done));
    reporter.finish_stage();

    let detections = resolve_detections(&peaks, &stack);
    info!(detections = detections.len(), "Nuclei detection complete");
    Ok(detections)
}
