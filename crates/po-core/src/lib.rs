//! `po-core` — foundational types for the `pixel_office` visualization core.
//!
//! This crate is a dependency of every other `po-*` crate.  It intentionally
//! has no `po-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                 |
//! |--------------|----------------------------------------------------------|
//! | [`ids`]      | `ActorId`                                                |
//! | [`geom`]     | `Vec2` scene coordinates, `lerp`, smoothstep `ease`      |
//! | [`time`]     | `Millis`, `FrameClock`                                   |
//! | [`rng`]      | `SceneRng` (deterministic scene-level randomness)        |
//! | [`hash`]     | `ident_hash` — stable string hash for bubble phases      |
//! | [`activity`] | `ActivityKind` enum                                      |
//! | [`quality`]  | `Quality` render-density setting                         |
//! | [`error`]    | `OfficeError`, `OfficeResult`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required by `po-floor`'s persisted position map.           |

pub mod activity;
pub mod error;
pub mod geom;
pub mod hash;
pub mod ids;
pub mod quality;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use activity::ActivityKind;
pub use error::{OfficeError, OfficeResult};
pub use geom::{Vec2, clamp01, ease};
pub use hash::ident_hash;
pub use ids::ActorId;
pub use quality::Quality;
pub use rng::SceneRng;
pub use time::{FrameClock, Millis};
