//! Actor-subsystem error type.

use thiserror::Error;

/// Errors produced by `po-actor`.
#[derive(Debug, Error)]
pub enum ActorError {
    #[error("roster parse error: {0}")]
    Parse(String),

    #[error("duplicate actor slug {0:?}")]
    DuplicateSlug(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ActorResult<T> = Result<T, ActorError>;
