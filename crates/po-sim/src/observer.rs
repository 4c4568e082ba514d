//! Office observer trait for logging, persistence, and UI hooks.

use po_core::{ActorId, FrameClock, Vec2};
use po_social::SocialEvent;

/// Callbacks invoked by [`OfficeSim`][crate::OfficeSim] at key points.
///
/// All methods default to no-ops so implementors only override what they
/// care about.  `on_home_committed` is where the host persists the position
/// map; `on_selection` is where it opens or closes the detail panel.
///
/// # Example — event logger
///
/// ```rust,ignore
/// struct EventLog { fired: usize }
///
/// impl OfficeObserver for EventLog {
///     fn on_social_event(&mut self, event: &SocialEvent) {
///         self.fired += 1;
///         println!("{}: {} participant(s)", event.kind, event.len());
///     }
/// }
/// ```
pub trait OfficeObserver {
    /// Called at the end of every frame, after motion has advanced.
    fn on_frame(&mut self, _clock: &FrameClock) {}

    /// Called when the scheduler fires a social event (walks have already
    /// started by the time this runs).
    fn on_social_event(&mut self, _event: &SocialEvent) {}

    /// Called when a click changes the selection; `None` means cleared.
    fn on_selection(&mut self, _actor: Option<ActorId>) {}

    /// Called when a drag ends with a new desk position.  The host should
    /// write the position map here (last-write-wins).
    fn on_home_committed(&mut self, _actor: ActorId, _home: Vec2) {}
}

/// An [`OfficeObserver`] that does nothing.
pub struct NoopObserver;

impl OfficeObserver for NoopObserver {}
