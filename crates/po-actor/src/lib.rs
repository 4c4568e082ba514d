//! `po-actor` — who works in this office.
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`roster`] | `Actor`, `ActorStatus`, `Roster`                           |
//! | [`loader`] | CSV roster loader                                          |
//! | [`feed`]   | `StatusFrame` — status-feed JSON ingestion + freshness     |
//! | [`error`]  | `ActorError`, `ActorResult`                                |
//!
//! The roster is loaded once at startup and its identity fields never change;
//! only `status` and `current_task` mutate, driven by feed documents the host
//! pushes in from outside the frame path.

pub mod error;
pub mod feed;
pub mod loader;
pub mod roster;

#[cfg(test)]
mod tests;

pub use error::{ActorError, ActorResult};
pub use feed::{FEED_STALE_MS, StatusFrame};
pub use loader::{load_roster_csv, load_roster_reader};
pub use roster::{Actor, ActorStatus, Roster};
