/// Minimum voxel count (x*y*z) to use lane-level Rayon parallelism.
pub const PARALLEL_VOXEL_THRESHOLD: usize = 262_144;

/// Minimum candidate count to validate peaks in parallel.
pub const PARALLEL_CANDIDATE_THRESHOLD: usize = 1_024;

/// Gaussian kernels are truncated at this many standard deviations.
pub const GAUSSIAN_TRUNCATE: f64 = 4.0;

/// Percentile of the response stack used as detection threshold when none is given.
pub const DEFAULT_THRESHOLD_PERCENTILE: f64 = 90.0;

/// First log-scale parameter of the default scale range.
pub const DEFAULT_SCALE_START: f64 = 0.4;

/// Exclusive upper bound of the default scale range.
pub const DEFAULT_SCALE_END: f64 = 0.7;

/// Step between consecutive log-scale parameters.
pub const DEFAULT_SCALE_STEP: f64 = 0.1;

/// Default smoothing width (in units of resolution) before channel sampling.
pub const DEFAULT_RATIO_SIGMA: f64 = 3.0;

/// Added to both channels before dividing so that dark voxels stay finite.
pub const RATIO_EPSILON: f64 = 0.001;

/// Channel ratios are capped at this value.
pub const RATIO_CAP: f64 = 1.0;

/// Offset added to ids when a points file is read back.
pub const POINTS_ID_OFFSET: u64 = 2;

/// Field separator of the points file.
pub const POINTS_DELIMITER: char = ';';

/// Header of the id and coordinate columns of the points file.
pub const POINTS_HEADER: &str = "Cell id;x;y;z";

/// Default name of the optional per-point data column.
pub const DEFAULT_DATA_NAME: &str = "data";
