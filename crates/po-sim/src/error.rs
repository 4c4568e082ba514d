use thiserror::Error;

use po_actor::ActorError;
use po_floor::FloorError;
use po_input::InputError;
use po_motion::MotionError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("sim configuration error: {0}")]
    Config(String),

    #[error("motion error: {0}")]
    Motion(#[from] MotionError),

    #[error("input error: {0}")]
    Input(#[from] InputError),

    #[error("floor error: {0}")]
    Floor(#[from] FloorError),

    #[error("roster error: {0}")]
    Actor(#[from] ActorError),
}

pub type SimResult<T> = Result<T, SimError>;
