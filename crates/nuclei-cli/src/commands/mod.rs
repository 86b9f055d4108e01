pub mod config;
pub mod detect;
pub mod info;
pub mod pipeline;
pub mod progress;
pub mod ratio;
pub mod volume_args;
