//! `po-floor` — the office floor: plan geometry, live desk homes, and the
//! persisted position map.
//!
//! The floor is the normalized unit square (see `po-core::geom`).  Three
//! concerns live here:
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`layout`]  | `FloorPlan` — fixed social spots + default desk layout    |
//! | [`desks`]   | `DeskMap` — live, drag-mutable home positions per actor   |
//! | [`persist`] | JSON codec for the saved position map (lenient per-key)   |
//! | [`error`]   | `FloorError`, `FloorResult`                               |
//!
//! Desk homes are the only floor state that mutates at runtime (via drag);
//! everything in `FloorPlan` is fixed for the sim's lifetime.

pub mod desks;
pub mod error;
pub mod layout;
pub mod persist;

#[cfg(test)]
mod tests;

pub use desks::DeskMap;
pub use error::{FloorError, FloorResult};
pub use layout::FloorPlan;
pub use persist::{POSITIONS_KEY, encode_positions, parse_positions};
