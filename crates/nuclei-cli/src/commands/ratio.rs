use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::ProgressBar;
use nuclei_core::consts::DEFAULT_RATIO_SIGMA;
use nuclei_core::io::{read_points, write_points};
use nuclei_core::ratio::compute_channel_ratios;

use super::volume_args::VolumeArgs;

#[derive(Args)]
pub struct RatioArgs {
    /// Nuclei channel: a raw volume file or a directory of z slices
    pub nuclei: PathBuf,

    /// Signal channel, same layout as the nuclei channel
    pub signal: PathBuf,

    /// Points file with the positions to sample
    #[arg(long)]
    pub points: PathBuf,

    #[command(flatten)]
    pub volume: VolumeArgs,

    /// Smoothing width in units of resolution
    #[arg(long, default_value_t = DEFAULT_RATIO_SIGMA)]
    pub sigma: f64,

    /// Header name of the ratio column
    #[arg(long, default_value = "ratio")]
    pub name: String,

    /// Output points file
    #[arg(short, long, default_value = "ratios.csv")]
    pub output: PathBuf,
}

pub fn run(args: &RatioArgs) -> Result<()> {
    let points = read_points(&args.points)
        .with_context(|| format!("Failed to read points {}", args.points.display()))?
        .with_context(|| format!("No points file at {}", args.points.display()))?;

    let resolution = args.volume.resolution()?;
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Loading volumes");
    let nuclei = args
        .volume
        .source(&args.nuclei)?
        .load(resolution)
        .with_context(|| format!("Failed to load {}", args.nuclei.display()))?;
    let signal = args
        .volume
        .source(&args.signal)?
        .load(resolution)
        .with_context(|| format!("Failed to load {}", args.signal.display()))?;

    spinner.set_message("Sampling channel ratios");
    let ratios = compute_channel_ratios(&nuclei, &signal, &points.positions, args.sigma)?;
    spinner.finish_and_clear();

    write_points(&args.output, &points.positions, Some((&ratios, args.name.as_str())))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!(
        "{} ratios written to {}",
        ratios.len(),
        args.output.display()
    );
    Ok(())
}
