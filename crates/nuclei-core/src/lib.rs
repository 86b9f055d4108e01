pub mod consts;
pub mod detection;
pub mod error;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod points;
pub mod ratio;
pub mod scale_space;
pub mod volume;
