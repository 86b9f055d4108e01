use std::sync::Arc;

use tracing::info;

use crate::detection::detect_nuclei_reported;
use crate::error::{NucleiError, Result};
use crate::io::write_points;
use crate::ratio::compute_channel_ratios;
use crate::volume::validate_resolution;

use super::config::PipelineConfig;
use super::types::{DetectionStage, NoOpReporter, PipelineOutput, ProgressReporter};

/// Run the full pipeline without progress reporting.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}

/// Run the full pipeline with a thread-safe progress reporter.
///
/// Loads the nuclei channel, detects nuclei, samples the signal channel when
/// one is configured, and writes the points file.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    validate_resolution(&config.resolution)?;
    // Fail on bad detection parameters before touching any volume.
    config.detection.validate()?;

    let channels = if config.signal.is_some() { 2 } else { 1 };
    reporter.begin_stage(DetectionStage::Loading, Some(channels));
    let nuclei = config.nuclei.load(config.resolution)?;
    reporter.advance(1);
    let signal = match &config.signal {
        Some(source) => {
            let volume = source.load(config.resolution)?;
            if volume.shape() != nuclei.shape() {
                return Err(NucleiError::DimensionMismatch {
                    expected: nuclei.shape(),
                    actual: volume.shape(),
                });
            }
            reporter.advance(2);
            Some(volume)
        }
        None => None,
    };
    reporter.finish_stage();
    info!(source = %config.nuclei, shape = ?nuclei.shape(), "Nuclei channel loaded");

    let detections = detect_nuclei_reported(&nuclei, &config.detection, &*reporter)?;

    let ratios = match &signal {
        Some(signal) => {
            reporter.begin_stage(DetectionStage::Ratio, None);
            let ratios = compute_channel_ratios(
                &nuclei,
                signal,
                &detections.positions,
                config.ratio.smoothing_sigma,
            )?;
            reporter.finish_stage();
            Some(ratios)
        }
        None => None,
    };

    reporter.begin_stage(DetectionStage::Writing, None);
    let data = ratios.as_ref().map(|r| (r, config.data_name.as_str()));
    write_points(&config.output, &detections.positions, data)?;
    reporter.finish_stage();
    info!(
        output = %config.output.display(),
        points = detections.len(),
        "Points written"
    );

    Ok(PipelineOutput { detections, ratios })
}
