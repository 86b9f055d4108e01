use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use nuclei_core::io::read_points;

#[derive(Args)]
pub struct InfoArgs {
    /// Points file
    pub file: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let points = read_points(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?
        .with_context(|| format!("No points file at {}", args.file.display()))?;

    println!("File:        {}", args.file.display());
    println!("Points:      {}", points.positions.len());

    if let (Some(first), Some(last)) = (points.positions.ids().next(), points.positions.ids().last())
    {
        println!("Ids:         {}..={}", first, last);
    }

    let mut lower = [f64::INFINITY; 3];
    let mut upper = [f64::NEG_INFINITY; 3];
    for pos in points.positions.values() {
        for axis in 0..3 {
            lower[axis] = lower[axis].min(pos[axis]);
            upper[axis] = upper[axis].max(pos[axis]);
        }
    }
    if !points.positions.is_empty() {
        for (axis, name) in ["x", "y", "z"].iter().enumerate() {
            println!(
                "Extent {}:    {:.3} .. {:.3}",
                name, lower[axis], upper[axis]
            );
        }
    }

    if let Some(ref data) = points.data {
        let values: Vec<f64> = data.values.values().copied().collect();
        println!("Data column: {}", data.name);
        if !values.is_empty() {
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let mean = values.iter().sum::<f64>() / values.len() as f64;
            println!("  min {:.4}  mean {:.4}  max {:.4}", min, mean, max);
        }
    }

    Ok(())
}
