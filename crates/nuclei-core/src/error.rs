use thiserror::Error;

#[derive(Error, Debug)]
pub enum NucleiError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Volume shape mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    #[error("Malformed points file at line {line}: {reason}")]
    MalformedPoints { line: usize, reason: String },

    #[error("Invalid volume: {0}")]
    InvalidVolume(String),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Empty slice sequence")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, NucleiError>;
