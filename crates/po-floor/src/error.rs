//! Floor-subsystem error type.

use thiserror::Error;

/// Errors produced by `po-floor`.
#[derive(Debug, Error)]
pub enum FloorError {
    #[error("position map encode error: {0}")]
    Encode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FloorResult<T> = Result<T, FloorError>;
