use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use nuclei_core::pipeline::config::PipelineConfig;
use nuclei_core::pipeline::run_pipeline_reported;

use super::progress::BarReporter;
use crate::summary::{print_detections, print_pipeline_summary};

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    #[arg(long, default_value = "pipeline.toml")]
    pub config: PathBuf,

    /// Override the output points file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let mut config: PipelineConfig = toml::from_str(&contents).context("Invalid pipeline config")?;
    if let Some(ref output) = args.output {
        config.output = output.clone();
    }

    print_pipeline_summary(&config);

    let reporter = Arc::new(BarReporter::new()?);
    let output = run_pipeline_reported(&config, reporter.clone())?;
    reporter.finish();

    print_detections(&output, &config.output);
    Ok(())
}
