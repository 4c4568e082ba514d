//! Motion-subsystem error type.

use thiserror::Error;

use po_core::ActorId;

#[derive(Debug, Error)]
pub enum MotionError {
    #[error("no animation state for {0} (id out of range)")]
    ActorUnknown(ActorId),
}

pub type MotionResult<T> = Result<T, MotionError>;
