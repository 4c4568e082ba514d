//! Base error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `OfficeError` via `From` impls, or keep them separate and wrap
//! `OfficeError` as one variant.  Both patterns are acceptable; prefer
//! whichever keeps error sites clean.

use thiserror::Error;

use crate::ActorId;

/// The top-level error type for `po-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum OfficeError {
    #[error("actor {0} not found")]
    ActorNotFound(ActorId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type shared by the `po-*` crates.
pub type OfficeResult<T> = Result<T, OfficeError>;
