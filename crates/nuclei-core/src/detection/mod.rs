pub mod config;
pub mod neighborhood;
pub mod nuclei;
pub mod peaks;
pub mod resolver;
pub mod threshold;

/// A `[scale, x, y, z]` index into a response stack.
pub type ScaleVoxel = [usize; 4];

pub use config::{DetectionConfig, ThresholdMethod};
pub use neighborhood::{neighborhood, spatial_half_widths, NeighborhoodBox};
pub use nuclei::{detect_nuclei, detect_nuclei_reported};
pub use peaks::{detect_peaks, detect_peaks_with_progress, is_local_maximum};
pub use resolver::{resolve_detections, DetectionSet};
