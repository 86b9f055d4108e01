use crate::detection::DetectionSet;
use crate::points::PointMap;

/// Processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DetectionStage {
    Loading,
    ScaleSpace,
    Response,
    PeakValidation,
    Ratio,
    Writing,
}

impl std::fmt::Display for DetectionStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading volumes"),
            Self::ScaleSpace => write!(f, "Building scale space"),
            Self::Response => write!(f, "Computing responses"),
            Self::PeakValidation => write!(f, "Validating peaks"),
            Self::Ratio => write!(f, "Sampling channel ratios"),
            Self::Writing => write!(f, "Writing points"),
        }
    }
}

/// Result of the pipeline.
#[derive(Clone, Debug)]
pub struct PipelineOutput {
    pub detections: DetectionSet,
    /// Signal/nuclei ratios, when a signal channel was configured.
    pub ratios: Option<PointMap<f64>>,
}

/// Thread-safe progress reporting.
///
/// Implementors can use this to drive progress bars, logging, or any other
/// UI feedback. All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items in
    /// this stage (e.g., scale count), if known.
    fn begin_stage(&self, _stage: DetectionStage, _total_items: Option<usize>) {}

    /// Work items completed so far within the current stage.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// Reporter that ignores all progress.
pub struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
