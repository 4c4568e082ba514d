//! `po-bubble` — deterministic speech/thought bubble timing.
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`timing`] | `BubbleTiming` pulse math, `BubbleContext`, `Bubble`      |
//! | [`lines`]  | phrase pools per context                                  |
//!
//! # Determinism
//!
//! Bubbles carry no state at all.  Visibility is a pure function of
//! `(actor slug, elapsed time, context)`: the slug hashes to a fixed phase
//! offset (see `po_core::hash`), elapsed time plus that offset wraps around
//! the context's cycle length, and the early part of each cycle is the
//! visible window.  Two frames with identical inputs always produce the
//! identical bubble — nothing to persist, nothing to reconcile, and every
//! actor blinks on its own schedule because no two slugs hash alike.

pub mod lines;
pub mod timing;


pub use timing::{Bubble, BubbleContext, BubbleStyle, BubbleTiming, MIN_VISIBLE_OPACITY};
