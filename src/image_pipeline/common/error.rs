use thiserror::Error;

#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Invalid IMG format: {0}")]
    InvalidFormat(String),

    #[error("IMG header must be read before the image data")]
    SequencingError,

    #[error("IMG image could not be loaded: {0}")]
    DecodeFailure(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Raster sink error: {0}")]
    SinkError(String),
}

impl DecodeError {
    /// Wraps an unexpected internal fault, keeping the original cause attached.
    pub fn failure(cause: anyhow::Error) -> Self {
        DecodeError::DecodeFailure(cause.into())
    }
}

pub type Result<T> = std::result::Result<T, DecodeError>;
