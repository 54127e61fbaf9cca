use thiserror::Error;

#[derive(Debug, Error)]
pub enum FatWalkError {
    #[error("Invalid format: {0}")]
    Format(String),

    #[error("Out of bounds: {0}")]
    OutOfBounds(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FatWalkError>;
