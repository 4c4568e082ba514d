//! `po-input` — pointer interaction for the office scene.
//!
//! | Module         | Contents                                                |
//! |----------------|---------------------------------------------------------|
//! | [`gesture`]    | `DragGate` — squared-distance slop latch                |
//! | [`hit`]        | `Viewport` px↔scene mapping, actor hit-testing          |
//! | [`controller`] | `InputController` — down/move/up/cancel state machine   |
//! | [`error`]      | `InputError`, `InputResult`                             |
//!
//! # Click vs. drag
//!
//! A pointer-down over an actor arms a gesture; the gesture stays a *click*
//! until cumulative displacement from the press point crosses a fixed pixel
//! slop, after which it is a *drag* for good.  Clicks toggle the selection on
//! release; drags move the actor's desk continuously and commit the new home
//! on release.  There is no third outcome and no error state — the threshold
//! decides deterministically.
//!
//! Dragging is also the scene's only cancellation path: pressing an actor
//! that is away from its desk snaps it home immediately, abandoning whatever
//! the scheduler had it doing.  Its partner (if any) is left alone.

pub mod controller;
pub mod error;
pub mod gesture;
pub mod hit;


pub use controller::{InputController, InputEffect};
pub use error::{InputError, InputResult};
pub use gesture::{DRAG_SLOP_PX, DragGate};
pub use hit::{HIT_RADIUS_PX, Viewport, hit_test};
