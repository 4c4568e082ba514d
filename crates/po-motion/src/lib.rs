//! `po-motion` — actor animation state and the per-frame motion updater.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`state`]   | `Phase`, `Facing`, `AnimationState` — per-actor travel state  |
//! | [`store`]   | `StateStore` — `Vec<AnimationState>` indexed by `ActorId`     |
//! | [`updater`] | `MotionUpdater` — walk kickoff + frame integration            |
//! | [`error`]   | `MotionError`, `MotionResult<T>`                              |
//!
//! # Movement model (continuous-time easing)
//!
//! Actors move on a strict cycle, re-entrant at any point via forced reset:
//!
//! ```text
//! AtDesk ──begin_walk──▶ Walking ──progress≥1──▶ AtLocation
//!    ▲                                               │
//!    └── Walking(returning) ◀──── stay elapsed ──────┘
//! ```
//!
//! 1. `MotionUpdater::begin_walk` computes the walk duration from straight-line
//!    distance and records what the actor will do on arrival (activity, stay,
//!    partner).  Degenerate same-point travel never enters `Walking`.
//! 2. Each frame, `MotionUpdater::advance` interpolates walking positions with
//!    smoothstep easing, promotes finished walks to `AtLocation`, and starts
//!    return walks once a stay has elapsed.
//! 3. A finished return snaps to the desk's *current* home — the desk map is
//!    authoritative, so an actor whose desk was dragged while it was away
//!    still comes home to the right place.
//!
//! Everything here is pure state mutation: no I/O, no logging, no allocation
//! on the frame path.

pub mod error;
pub mod state;
pub mod store;
pub mod updater;


pub use error::{MotionError, MotionResult};
pub use state::{AnimationState, Facing, Phase};
pub use store::StateStore;
pub use updater::{MIN_WALK_MS, MotionUpdater, WALK_SPEED};
