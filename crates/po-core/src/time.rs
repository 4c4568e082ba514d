//! Frame time model.
//!
//! # Design
//!
//! The sim is driven by host-supplied frame timestamps (whatever clock the
//! embedding render loop uses), expressed as fractional milliseconds:
//!
//!   elapsed = now − mount_time
//!
//! All durations (walk times, stay times, bubble cycles) are plain `f64`
//! milliseconds; `Millis` marks absolute timestamps so the two cannot be
//! mixed up silently.  Sub-millisecond precision survives for months of
//! uptime in an f64, which is far beyond any realistic session.

use std::fmt;

// ── Millis ───────────────────────────────────────────────────────────────────

/// An absolute host timestamp in fractional milliseconds.
///
/// The epoch is whatever the host clock uses (page load, process start…);
/// only differences between `Millis` values are meaningful, which is why
/// subtraction yields a raw `f64` duration.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Millis(pub f64);

impl Millis {
    pub const ZERO: Millis = Millis(0.0);

    /// The timestamp `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: f64) -> Millis {
        Millis(self.0 + ms)
    }
}

impl std::ops::Add<f64> for Millis {
    type Output = Millis;
    #[inline]
    fn add(self, rhs: f64) -> Millis {
        Millis(self.0 + rhs)
    }
}

impl std::ops::Sub for Millis {
    type Output = f64;
    /// Elapsed milliseconds from `rhs` to `self` (negative if `rhs` is later).
    #[inline]
    fn sub(self, rhs: Millis) -> f64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Millis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}ms", self.0)
    }
}

// ── FrameClock ───────────────────────────────────────────────────────────────

/// Tracks mount time, the current frame timestamp, and the per-frame delta.
///
/// `FrameClock` is cheap to copy and intentionally holds no heap data.  Host
/// clocks occasionally jump backward (tab restore, clock rebase); a regressed
/// timestamp is accepted as the new "now" but reports a zero delta so motion
/// never integrates backwards.
#[derive(Clone, Debug)]
pub struct FrameClock {
    started: Option<Millis>,
    now: Millis,
    delta_ms: f64,
    frame: u64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            started: None,
            now: Millis::ZERO,
            delta_ms: 0.0,
            frame: 0,
        }
    }

    /// Record a new frame timestamp; returns the clamped delta in ms.
    ///
    /// The first call establishes the mount time and reports a zero delta.
    pub fn tick(&mut self, now: Millis) -> f64 {
        self.delta_ms = match self.started {
            None => {
                self.started = Some(now);
                0.0
            }
            Some(_) => (now - self.now).max(0.0),
        };
        self.now = now;
        self.frame += 1;
        self.delta_ms
    }

    /// Timestamp of the most recent `tick`.
    #[inline]
    pub fn now(&self) -> Millis {
        self.now
    }

    /// Delta reported by the most recent `tick`, in ms.
    #[inline]
    pub fn delta_ms(&self) -> f64 {
        self.delta_ms
    }

    /// Milliseconds since the first frame (0 before any tick, never negative).
    #[inline]
    pub fn elapsed_ms(&self) -> f64 {
        match self.started {
            Some(start) => (self.now - start).max(0.0),
            None => 0.0,
        }
    }

    /// Frames ticked so far.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame {} (t={:.3}s)", self.frame, self.elapsed_ms() / 1_000.0)
    }
}
