use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use nuclei_core::consts::DEFAULT_DATA_NAME;
use nuclei_core::detection::{DetectionConfig, ThresholdMethod};
use nuclei_core::pipeline::config::PipelineConfig;
use nuclei_core::pipeline::run_pipeline_reported;
use nuclei_core::ratio::RatioConfig;

use super::progress::BarReporter;
use super::volume_args::VolumeArgs;
use crate::summary::{print_detections, print_pipeline_summary};

#[derive(Args)]
pub struct ScaleArgs {
    /// First log-scale parameter
    #[arg(long, default_value = "0.4", allow_negative_numbers = true)]
    pub scale_start: f64,

    /// End of the log-scale range (exclusive)
    #[arg(long, default_value = "0.7", allow_negative_numbers = true)]
    pub scale_end: f64,

    /// Step between log-scale parameters
    #[arg(long, default_value = "0.1")]
    pub scale_step: f64,

    /// Absolute response threshold
    #[arg(long, conflicts_with = "percentile", allow_negative_numbers = true)]
    pub threshold: Option<f32>,

    /// Response percentile used as threshold (0-100)
    #[arg(long)]
    pub percentile: Option<f64>,
}

impl ScaleArgs {
    pub fn detection_config(&self) -> DetectionConfig {
        let threshold = match (self.threshold, self.percentile) {
            (Some(t), _) => ThresholdMethod::Fixed(t),
            (None, Some(p)) => ThresholdMethod::Percentile(p),
            (None, None) => ThresholdMethod::default(),
        };
        DetectionConfig {
            scale_start: self.scale_start,
            scale_end: self.scale_end,
            scale_step: self.scale_step,
            threshold,
        }
    }
}

#[derive(Args)]
pub struct DetectArgs {
    /// Nuclei channel: a raw volume file or a directory of z slices
    pub input: PathBuf,

    #[command(flatten)]
    pub volume: VolumeArgs,

    #[command(flatten)]
    pub scales: ScaleArgs,

    /// Output points file
    #[arg(short, long, default_value = "points.csv")]
    pub output: PathBuf,
}

pub fn run(args: &DetectArgs) -> Result<()> {
    let config = PipelineConfig {
        resolution: args.volume.resolution()?,
        output: args.output.clone(),
        data_name: DEFAULT_DATA_NAME.to_string(),
        nuclei: args.volume.source(&args.input)?,
        signal: None,
        detection: args.scales.detection_config(),
        ratio: RatioConfig::default(),
    };

    print_pipeline_summary(&config);

    let reporter = Arc::new(BarReporter::new()?);
    let output = run_pipeline_reported(&config, reporter.clone())?;
    reporter.finish();

    print_detections(&output, &config.output);
    Ok(())
}
