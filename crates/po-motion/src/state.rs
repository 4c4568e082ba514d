//! Per-actor animation state.

use po_core::{ActivityKind, ActorId, Millis, Vec2, ease};

// ── Phase ─────────────────────────────────────────────────────────────────────

/// Which leg of the desk–activity cycle an actor is on.  Exactly one phase
/// holds at any time; every actor starts `AtDesk`.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Phase {
    #[default]
    AtDesk,
    Walking,
    AtLocation,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::AtDesk     => "at-desk",
            Phase::Walking    => "walking",
            Phase::AtLocation => "at-location",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Facing ────────────────────────────────────────────────────────────────────

/// Sprite orientation, following the horizontal walk direction.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Orientation implied by a horizontal delta; `None` for a vertical move
    /// (keep whatever the sprite was showing).
    pub fn from_dx(dx: f32) -> Option<Facing> {
        if dx > f32::EPSILON {
            Some(Facing::Right)
        } else if dx < -f32::EPSILON {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

// ── AnimationState ────────────────────────────────────────────────────────────

/// The animation state for a single actor.
///
/// Field validity follows the phase: the `walk_*` fields are meaningful only
/// while `Walking` (and `walk_ms > 0` is an invariant there); `arrived_at` /
/// `stay_ms` only while `AtLocation` (`stay_ms > 0` there); `activity` and
/// `partner` only away from the desk.  `pos` is always the current render
/// position.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub phase: Phase,
    /// Current scene position (interpolated while walking).
    pub pos: Vec2,
    pub walk_from: Vec2,
    pub walk_to: Vec2,
    pub walk_start: Millis,
    /// Walk duration in ms; `> 0` whenever `phase == Walking`.
    pub walk_ms: f64,
    pub facing: Facing,
    /// `true` while walking back toward the desk.
    pub returning: bool,
    pub activity: Option<ActivityKind>,
    pub arrived_at: Millis,
    /// Planned stay in ms; `> 0` whenever `phase == AtLocation`.
    pub stay_ms: f64,
    /// Who this actor is interacting with — informational only, lifecycles
    /// stay independent.
    pub partner: Option<ActorId>,
}

impl AnimationState {
    /// Construct the seated-at-desk state at `home`.
    pub fn at_desk(home: Vec2) -> Self {
        Self {
            phase: Phase::AtDesk,
            pos: home,
            walk_from: home,
            walk_to: home,
            walk_start: Millis::ZERO,
            walk_ms: 0.0,
            facing: Facing::default(),
            returning: false,
            activity: None,
            arrived_at: Millis::ZERO,
            stay_ms: 0.0,
            partner: None,
        }
    }

    /// Fraction of the current walk completed at `now`, in `[0, 1]`.
    ///
    /// Returns `1.0` outside `Walking` and clamps on both sides, so a clock
    /// hiccup can stall a walk but never run it backwards.
    pub fn walk_progress(&self, now: Millis) -> f32 {
        if self.phase != Phase::Walking || self.walk_ms <= 0.0 {
            return 1.0;
        }
        (((now - self.walk_start) / self.walk_ms) as f32).clamp(0.0, 1.0)
    }

    /// Eased position along the current walk at `now`.
    #[inline]
    pub fn walk_pos(&self, now: Millis) -> Vec2 {
        self.walk_from.lerp(self.walk_to, ease(self.walk_progress(now)))
    }

    /// `true` in any phase other than `AtDesk`.
    #[inline]
    pub fn is_away(&self) -> bool {
        self.phase != Phase::AtDesk
    }
}
