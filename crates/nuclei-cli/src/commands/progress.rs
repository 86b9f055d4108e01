use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use nuclei_core::pipeline::{DetectionStage, ProgressReporter};

/// Drives one indicatif bar through the pipeline stages.
pub struct BarReporter {
    bar: ProgressBar,
    counted: ProgressStyle,
    open_ended: ProgressStyle,
}

impl BarReporter {
    pub fn new() -> Result<Self> {
        let counted = ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> ");
        let open_ended = ProgressStyle::default_spinner().template("{spinner} {msg:24} {pos}")?;
        Ok(Self {
            bar: ProgressBar::new(0),
            counted,
            open_ended,
        })
    }

    pub fn finish(&self) {
        self.bar.finish_with_message("Done");
    }
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: DetectionStage, total_items: Option<usize>) {
        match total_items {
            Some(total) => {
                self.bar.set_style(self.counted.clone());
                self.bar.set_length(total as u64);
            }
            None => {
                self.bar.set_style(self.open_ended.clone());
                self.bar.set_length(0);
            }
        }
        self.bar.set_position(0);
        self.bar.set_message(stage.to_string());
    }

    fn advance(&self, items_done: usize) {
        self.bar.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.bar.length() {
            if len > self.bar.position() {
                self.bar.set_position(len);
            }
        }
    }
}
