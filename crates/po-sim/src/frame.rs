//! Render-ready per-frame output.

use po_actor::ActorStatus;
use po_bubble::{Bubble, BubbleContext};
use po_core::{ActivityKind, ActorId, FrameClock, Quality, Vec2};
use po_motion::{AnimationState, Facing, Phase};

// ── ActorSprite ───────────────────────────────────────────────────────────────

/// Everything the drawing layer needs for one actor this frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ActorSprite {
    pub actor: ActorId,
    /// Current scene position (home while seated, interpolated while away).
    pub pos: Vec2,
    pub phase: Phase,
    pub activity: Option<ActivityKind>,
    pub facing: Facing,
    pub status: ActorStatus,
    pub selected: bool,
    pub bubble: Option<Bubble>,
}

// ── Particle ──────────────────────────────────────────────────────────────────

/// One ambient dust mote.  Pure decoration; the count follows the quality
/// tier and nothing else reads these.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub alpha: f32,
}

// ── FrameView ─────────────────────────────────────────────────────────────────

/// The complete render-ready state for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameView {
    /// Milliseconds since the first frame.
    pub elapsed_ms: f64,
    /// One sprite per actor, in `ActorId` order.
    pub sprites: Vec<ActorSprite>,
    pub particles: Vec<Particle>,
    pub selected: Option<ActorId>,
}

impl FrameView {
    /// The sprite for `actor`, if the id is known.
    pub fn sprite(&self, actor: ActorId) -> Option<&ActorSprite> {
        self.sprites.get(actor.index())
    }
}

// ── Assembly helpers ──────────────────────────────────────────────────────────

/// Bubble for one actor this frame, derived from its animation state.
///
/// Seated actors muse on the scene clock; water-cooler and visit arrivals
/// banter, meetings chatter, both on time-since-arrival.  Walkers and coffee
/// runs show nothing — walking reads badly with a balloon attached, and a
/// coffee run is its own company.
pub(crate) fn bubble_for(st: &AnimationState, slug: &str, clock: &FrameClock) -> Option<Bubble> {
    match st.phase {
        Phase::AtDesk => BubbleContext::Musing.bubble(slug, clock.elapsed_ms()),
        Phase::AtLocation => {
            let since_arrival = clock.now() - st.arrived_at;
            match st.activity {
                Some(ActivityKind::WaterCooler | ActivityKind::Visit) => {
                    BubbleContext::Banter.bubble(slug, since_arrival)
                }
                Some(ActivityKind::Meeting) => BubbleContext::Meeting.bubble(slug, since_arrival),
                _ => None,
            }
        }
        Phase::Walking => None,
    }
}

/// The ambient particle field at scene time `t` (ms).
///
/// A closed-form drift (per-particle phase offsets into slow sin/cos waves)
/// so the field needs no state and any frame can be rendered in isolation.
pub(crate) fn particle_field(quality: Quality, t: f64) -> Vec<Particle> {
    (0..quality.particle_count())
        .map(|i| {
            let k = i as f64;
            let x = ((t * 0.001 + k * 7.3).sin() * 0.5 + 0.5) as f32;
            let y = ((t * 0.0008 + k * 4.1).cos() * 0.5 + 0.5) as f32;
            let alpha = (0.03 + 0.03 * (t * 0.003 + k).sin()) as f32;
            Particle {
                pos: Vec2::new(x, y),
                alpha: alpha.max(0.0),
            }
        })
        .collect()
}
