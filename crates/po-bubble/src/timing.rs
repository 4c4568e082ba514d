//! The bubble visibility pulse.
//!
//! Each context defines a cycle: the visible window occupies the front of the
//! cycle (linear fade-in, hold at full opacity, linear fade-out) and the rest
//! is dark.  Per-actor phase offsets come from `ident_hash`, so the pulse is
//! a pure function of `(slug, elapsed, context)`.

use po_core::hash::ident_hash_ms;

use crate::lines;

/// Opacity below which a bubble is not worth drawing.
///
/// Also bounds the step discontinuity at window edges: at 60 fps a ~350 ms
/// fade moves opacity by ~0.05 per frame, so cutting below 0.02 is invisible.
pub const MIN_VISIBLE_OPACITY: f32 = 0.02;

// ── BubbleStyle ───────────────────────────────────────────────────────────────

/// How the render layer draws the balloon.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BubbleStyle {
    /// Cloud balloon with trailing dots — private desk musing.
    Thought,
    /// Pointed balloon — spoken banter and meeting chatter.
    Speech,
}

// ── Bubble ────────────────────────────────────────────────────────────────────

/// One render-ready bubble: what to draw and how strongly.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bubble {
    pub style: BubbleStyle,
    pub text: &'static str,
    /// In `(MIN_VISIBLE_OPACITY, 1]` — a bubble below the floor is `None`
    /// instead.
    pub opacity: f32,
}

// ── BubbleTiming ──────────────────────────────────────────────────────────────

/// Cycle geometry for one bubble context.  All fields in milliseconds;
/// `fade_in + fade_out <= window <= cycle` by construction of the presets.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BubbleTiming {
    pub cycle_ms: f64,
    pub window_ms: f64,
    pub fade_in_ms: f64,
    pub fade_out_ms: f64,
}

impl BubbleTiming {
    /// Opacity at `phase_ms` into the cycle, or `None` outside the window.
    pub fn opacity_at(&self, phase_ms: f64) -> Option<f32> {
        if !(0.0..self.window_ms).contains(&phase_ms) {
            return None;
        }
        let raw = if phase_ms < self.fade_in_ms {
            phase_ms / self.fade_in_ms
        } else if phase_ms < self.window_ms - self.fade_out_ms {
            1.0
        } else {
            (self.window_ms - phase_ms) / self.fade_out_ms
        };
        let opacity = raw.clamp(0.0, 1.0) as f32;
        (opacity >= MIN_VISIBLE_OPACITY).then_some(opacity)
    }

    /// Evaluate the pulse for `ident` at `elapsed_ms` since the context's
    /// reference event.  Returns the opacity and the running cycle index
    /// (which selects the phrase).
    pub fn pulse(&self, ident: &str, elapsed_ms: f64) -> Option<(f32, u64)> {
        let shifted = elapsed_ms.max(0.0) + ident_hash_ms(ident);
        let cycle_index = (shifted / self.cycle_ms).floor();
        let phase = shifted - cycle_index * self.cycle_ms;
        self.opacity_at(phase).map(|o| (o, cycle_index as u64))
    }
}

// ── BubbleContext ─────────────────────────────────────────────────────────────

/// What an actor has a bubble about.  The reference event differs per
/// context: musing keys off scene mount, banter and meetings key off the
/// actor's arrival at the activity spot.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum BubbleContext {
    /// Seated at the desk, thinking out loud to nobody.
    Musing,
    /// Water-cooler or visit small talk.
    Banter,
    /// Around the meeting table.
    Meeting,
}

impl BubbleContext {
    pub fn style(self) -> BubbleStyle {
        match self {
            BubbleContext::Musing => BubbleStyle::Thought,
            BubbleContext::Banter | BubbleContext::Meeting => BubbleStyle::Speech,
        }
    }

    /// Cycle geometry for this context.  Musing cycles long so desks stay
    /// quiet most of the time; conversations pulse faster.
    pub fn timing(self) -> BubbleTiming {
        match self {
            BubbleContext::Musing => BubbleTiming {
                cycle_ms: 16_000.0,
                window_ms: 5_600.0,
                fade_in_ms: 400.0,
                fade_out_ms: 400.0,
            },
            BubbleContext::Banter => BubbleTiming {
                cycle_ms: 7_000.0,
                window_ms: 3_500.0,
                fade_in_ms: 350.0,
                fade_out_ms: 350.0,
            },
            BubbleContext::Meeting => BubbleTiming {
                cycle_ms: 9_000.0,
                window_ms: 4_200.0,
                fade_in_ms: 350.0,
                fade_out_ms: 350.0,
            },
        }
    }

    pub fn pool(self) -> &'static [&'static str] {
        match self {
            BubbleContext::Musing => lines::MUSING,
            BubbleContext::Banter => lines::BANTER,
            BubbleContext::Meeting => lines::MEETING,
        }
    }

    /// The bubble for `slug` at `elapsed_ms` since this context's reference
    /// event, or `None` outside the visibility window.
    ///
    /// Phrases rotate with the cycle index, so an actor lingering through
    /// several cycles says something different each time — and says the same
    /// thing again on replay.
    pub fn bubble(self, slug: &str, elapsed_ms: f64) -> Option<Bubble> {
        let (opacity, cycle_index) = self.timing().pulse(slug, elapsed_ms)?;
        let pool = self.pool();
        Some(Bubble {
            style: self.style(),
            text: pool[(cycle_index % pool.len() as u64) as usize],
            opacity,
        })
    }
}
