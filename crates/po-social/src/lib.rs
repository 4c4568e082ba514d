//! po-social — autonomous social-event scheduling for the office scene.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | `event`     | `SocialEvent` / `Assignment` — what a firing produced |
//! | `scheduler` | `SocialScheduler` — cadence gate and band dispatch    |
//!
//! # Scheduling model
//!
//! The scheduler is a cadence gate over wall-clock scene time.  After each
//! firing it draws the next delay uniformly from 8–15 s; `poll` does nothing
//! until that much time has passed since the last firing.  When the gate
//! opens, the actors currently seated at their desks form the candidate pool.
//! Fewer than two candidates is a *skip*: the gate stays open (the stored
//! delay is not redrawn) and the poll retries on subsequent frames until
//! enough actors are seated.
//!
//! A single uniform draw in `[0, 1)` then picks the event kind by probability
//! band, participants are drawn from the shuffled pool, and each participant
//! is handed to the motion updater to start walking.  One poll fires at most
//! one event.
//!
//! Polling is infallible: there is no error type in this crate.  Every
//! participant comes from the store's own iterator, so lookups cannot miss.

mod event;
mod scheduler;

pub use event::{Assignment, SocialEvent};
pub use scheduler::{MAX_EVENT_DELAY_MS, MIN_EVENT_DELAY_MS, SocialScheduler};
