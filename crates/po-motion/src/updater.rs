//! The frame updater: walk kickoff, arrival, dwell timeout, return walk.

use po_core::{ActivityKind, ActorId, Millis, Vec2, ease};
use po_floor::DeskMap;

use crate::state::{AnimationState, Facing, Phase};
use crate::store::StateStore;

/// Default walking speed in scene widths per second.
pub const WALK_SPEED: f32 = 0.22;

/// Floor for walk durations so short hops still read as walks.
pub const MIN_WALK_MS: f64 = 1_200.0;

/// Travel shorter than this is treated as already-there.
const ARRIVE_EPS: f32 = 1e-4;

/// Integrates animation state once per frame.
///
/// Speeds are tuning values: the builder can override them, and tests pick
/// round numbers for exact timelines.
#[derive(Clone, Debug)]
pub struct MotionUpdater {
    /// Scene widths per second.
    pub walk_speed: f32,
    pub min_walk_ms: f64,
}

impl Default for MotionUpdater {
    fn default() -> Self {
        Self {
            walk_speed: WALK_SPEED,
            min_walk_ms: MIN_WALK_MS,
        }
    }
}

impl MotionUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk duration between two points: distance over speed, floored.
    pub fn walk_duration_ms(&self, from: Vec2, to: Vec2) -> f64 {
        ((from.dist(to) / self.walk_speed) as f64 * 1_000.0).max(self.min_walk_ms)
    }

    /// Send an actor walking toward `dest`, recording what it will do there.
    ///
    /// `activity`, `stay_ms`, and `partner` take effect on arrival.
    /// Degenerate travel (dest within epsilon of the current position) skips
    /// `Walking` entirely and arrives immediately — `Walking` always has a
    /// positive duration and a distinct destination.
    pub fn begin_walk(
        &self,
        st: &mut AnimationState,
        dest: Vec2,
        now: Millis,
        activity: Option<ActivityKind>,
        stay_ms: f64,
        partner: Option<ActorId>,
    ) {
        st.activity = activity;
        st.partner = partner;
        st.stay_ms = stay_ms;
        st.returning = false;

        if st.pos.dist(dest) < ARRIVE_EPS {
            st.phase = Phase::AtLocation;
            st.pos = dest;
            st.arrived_at = now;
            return;
        }

        st.phase = Phase::Walking;
        st.walk_from = st.pos;
        st.walk_to = dest;
        st.walk_start = now;
        st.walk_ms = self.walk_duration_ms(st.pos, dest);
        if let Some(f) = Facing::from_dx(dest.x - st.pos.x) {
            st.facing = f;
        }
    }

    /// Advance every actor one frame.  Scheduler decisions for this frame
    /// must already be applied — a walk started "now" makes progress now.
    pub fn advance(&self, store: &mut StateStore, desks: &DeskMap, now: Millis) {
        for (id, st) in store.iter_mut() {
            match st.phase {
                Phase::AtDesk => {}
                Phase::Walking => self.advance_walk(st, desks.home(id), now),
                Phase::AtLocation => {
                    if now - st.arrived_at > st.stay_ms {
                        self.begin_return(st, desks.home(id), now);
                    }
                }
            }
        }
    }

    fn advance_walk(&self, st: &mut AnimationState, home: Vec2, now: Millis) {
        let t = st.walk_progress(now);
        st.pos = st.walk_from.lerp(st.walk_to, ease(t));
        if t < 1.0 {
            return;
        }
        if st.returning {
            // Home is authoritative: land on the desk's current position
            // even if it moved after this return leg started.
            let facing = st.facing;
            *st = AnimationState::at_desk(home);
            st.facing = facing;
        } else {
            st.phase = Phase::AtLocation;
            st.pos = st.walk_to;
            st.arrived_at = now;
        }
    }

    fn begin_return(&self, st: &mut AnimationState, home: Vec2, now: Millis) {
        if st.pos.dist(home) < ARRIVE_EPS {
            let facing = st.facing;
            *st = AnimationState::at_desk(home);
            st.facing = facing;
            return;
        }
        st.phase = Phase::Walking;
        st.returning = true;
        st.walk_from = st.pos;
        st.walk_to = home;
        st.walk_start = now;
        st.walk_ms = self.walk_duration_ms(st.pos, home);
        if let Some(f) = Facing::from_dx(home.x - st.pos.x) {
            st.facing = f;
        }
        // activity/partner ride along on the return leg; desk arrival clears
        // them (bubble context ends the moment the stay does).
    }
}
