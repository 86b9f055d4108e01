pub mod builder;
pub mod response;
pub mod scales;

pub use builder::{build_scale_space, build_scale_space_with_progress, ScaleLayer, ScaleSpace};
pub use response::{build_response_stack, ResponseStack};
pub use scales::{scale_range, validate_scales};
