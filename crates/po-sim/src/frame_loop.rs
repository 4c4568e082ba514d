//! Explicit frame-loop handle.
//!
//! The host's render loop owns the clock; this handle owns the callback.
//! Instead of a callback re-registering itself every frame, the host calls
//! [`FrameLoop::tick`] once per frame for as long as it likes and
//! [`FrameLoop::cancel`] on teardown, which drops the callback and
//! everything it captured (typically the `OfficeSim`).

use po_core::Millis;

/// A stored per-frame callback with an explicit cancellation switch.
pub struct FrameLoop {
    callback: Option<Box<dyn FnMut(Millis)>>,
}

impl FrameLoop {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(Millis) + 'static,
    {
        Self {
            callback: Some(Box::new(callback)),
        }
    }

    /// Run one frame at `now`.  Returns `false` (and does nothing) once the
    /// loop has been cancelled, so a host can drive it with
    /// `while frame_loop.tick(clock.now()) { … }`.
    pub fn tick(&mut self, now: Millis) -> bool {
        match self.callback.as_mut() {
            Some(callback) => {
                callback(now);
                true
            }
            None => false,
        }
    }

    /// Drop the callback.  Idempotent; every later `tick` is a no-op.
    pub fn cancel(&mut self) {
        self.callback = None;
    }

    pub fn is_cancelled(&self) -> bool {
        self.callback.is_none()
    }
}
