use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nuclei_core::consts::DEFAULT_DATA_NAME;
use nuclei_core::detection::DetectionConfig;
use nuclei_core::io::{ByteOrder, RawVolumeSpec, SampleType};
use nuclei_core::pipeline::config::{PipelineConfig, VolumeSource};
use nuclei_core::ratio::RatioConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = PipelineConfig {
        resolution: [1.0, 1.0, 1.0],
        output: PathBuf::from("points.csv"),
        data_name: DEFAULT_DATA_NAME.to_string(),
        nuclei: VolumeSource::Raw(RawVolumeSpec {
            path: PathBuf::from("nuclei.raw"),
            shape: [512, 512, 64],
            sample_type: SampleType::U16,
            byte_order: ByteOrder::Little,
            header_bytes: 0,
        }),
        signal: Some(VolumeSource::SliceStack {
            dir: PathBuf::from("signal"),
        }),
        detection: DetectionConfig::default(),
        ratio: RatioConfig::default(),
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
