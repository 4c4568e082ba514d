//! Input-subsystem error type.

use thiserror::Error;

use po_motion::MotionError;

/// Errors produced by `po-input`.
///
/// Pointer handling itself is infallible — the only failure path is a state
/// lookup for an id the store does not know, which is an implementation bug
/// surfaced rather than swallowed.
#[derive(Debug, Error)]
pub enum InputError {
    #[error(transparent)]
    Motion(#[from] MotionError),
}

pub type InputResult<T> = Result<T, InputError>;
