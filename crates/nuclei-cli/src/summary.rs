use std::path::Path;

use console::Style;
use nuclei_core::detection::DetectionConfig;
use nuclei_core::pipeline::config::PipelineConfig;
use nuclei_core::pipeline::PipelineOutput;

/// Rows listed after a run before the table is cut off.
const MAX_LISTED: usize = 10;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_pipeline_summary(config: &PipelineConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Nuclei Detection"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(16)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Nuclei"),
        s.path.apply_to(&config.nuclei)
    );
    match config.signal {
        Some(ref signal) => println!(
            "  {:<14}{}",
            s.label.apply_to("Signal"),
            s.path.apply_to(signal)
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Signal"),
            s.disabled.apply_to("none")
        ),
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(config.output.display())
    );
    let [rx, ry, rz] = config.resolution;
    println!(
        "  {:<14}{}",
        s.label.apply_to("Resolution"),
        s.value.apply_to(format!("{rx} x {ry} x {rz}"))
    );
    println!();

    print_detection_section(&s, &config.detection);

    if config.signal.is_some() {
        println!("  {}", s.header.apply_to("Ratio"));
        println!(
            "    {:<12}{}",
            s.label.apply_to("Smoothing"),
            s.value.apply_to(config.ratio.smoothing_sigma)
        );
        println!(
            "    {:<12}{}",
            s.label.apply_to("Column"),
            s.value.apply_to(&config.data_name)
        );
        println!();
    }
}

fn print_detection_section(s: &Styles, detection: &DetectionConfig) {
    println!("  {}", s.header.apply_to("Detection"));
    match detection.sigmas() {
        Ok(sigmas) => {
            let radii: Vec<String> = sigmas.iter().map(|v| format!("{:.2}", v.exp())).collect();
            println!(
                "    {:<12}{}",
                s.label.apply_to("Scales"),
                s.value.apply_to(format!(
                    "{} ({} .. {} step {})",
                    sigmas.len(),
                    detection.scale_start,
                    detection.scale_end,
                    detection.scale_step
                ))
            );
            println!(
                "    {:<12}{}",
                s.label.apply_to("Radii"),
                s.value.apply_to(radii.join(", "))
            );
        }
        Err(e) => println!(
            "    {:<12}{}",
            s.label.apply_to("Scales"),
            s.disabled.apply_to(e)
        ),
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Threshold"),
        s.method.apply_to(&detection.threshold)
    );
    println!();
}

pub fn print_detections(output: &PipelineOutput, path: &Path) {
    let s = Styles::new();
    let detections = &output.detections;

    println!();
    println!(
        "  {} nuclei written to {}",
        s.value.apply_to(detections.len()),
        s.path.apply_to(path.display())
    );
    if detections.is_empty() {
        return;
    }

    println!();
    println!(
        "  {}",
        s.label.apply_to(format!(
            "{:>5}  {:>10} {:>10} {:>10}  {:>7}{}",
            "id",
            "x",
            "y",
            "z",
            "scale",
            if output.ratios.is_some() { "    ratio" } else { "" }
        ))
    );
    for (id, [x, y, z]) in detections.positions.iter().take(MAX_LISTED) {
        let scale = detections.scales.get(id).copied().unwrap_or(f64::NAN);
        let ratio = output
            .ratios
            .as_ref()
            .and_then(|r| r.get(id))
            .map(|r| format!("  {r:>7.4}"))
            .unwrap_or_default();
        println!("  {id:>5}  {x:>10.3} {y:>10.3} {z:>10.3}  {scale:>7.3}{ratio}");
    }
    if detections.len() > MAX_LISTED {
        println!(
            "  {}",
            s.disabled.apply_to(format!("... {} more", detections.len() - MAX_LISTED))
        );
    }
}
