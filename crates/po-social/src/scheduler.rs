//! `SocialScheduler` — cadence gate plus probability-band event dispatch.

use po_core::{ActivityKind, ActorId, Millis, SceneRng};
use po_floor::{DeskMap, FloorPlan};
use po_motion::{MotionUpdater, Phase, StateStore};
use tracing::debug;

use crate::{Assignment, SocialEvent};

// ── Tuning ────────────────────────────────────────────────────────────────────

/// Shortest pause between two firings, in milliseconds.
pub const MIN_EVENT_DELAY_MS: f64 = 8_000.0;

/// Longest pause between two firings, in milliseconds.
pub const MAX_EVENT_DELAY_MS: f64 = 15_000.0;

/// Fewest seated actors required before a firing is attempted.
const MIN_SEATED: usize = 2;

/// Upper band edges for the kind draw, ascending over `[0, 1)`.
const WATER_COOLER_EDGE: f64 = 0.28;
const COFFEE_EDGE: f64 = 0.48;
const MEETING_EDGE: f64 = 0.75;

/// Seats at the meeting table; also caps meeting size.
const MEETING_CAP: usize = 4;

/// Map a uniform roll in `[0, 1)` onto an activity kind.
pub(crate) fn draw_kind(roll: f64) -> ActivityKind {
    if roll < WATER_COOLER_EDGE {
        ActivityKind::WaterCooler
    } else if roll < COFFEE_EDGE {
        ActivityKind::Coffee
    } else if roll < MEETING_EDGE {
        ActivityKind::Meeting
    } else {
        ActivityKind::Visit
    }
}

/// Dwell-time draw range for each activity, in milliseconds.
pub(crate) fn stay_range(kind: ActivityKind) -> (f64, f64) {
    match kind {
        ActivityKind::WaterCooler => (5_000.0, 8_000.0),
        ActivityKind::Coffee => (4_000.0, 6_000.0),
        ActivityKind::Meeting => (8_000.0, 13_000.0),
        ActivityKind::Visit => (4_000.0, 7_000.0),
    }
}

// ── Scheduler ─────────────────────────────────────────────────────────────────

/// Decides when the next social event fires and who takes part.
///
/// Construct one per scene at the first frame; call [`poll`][Self::poll] once
/// per frame *before* the motion updater advances, so that freshly assigned
/// walks make progress in the same frame they start.
pub struct SocialScheduler {
    /// When the last event fired (scene time).  Seeded with the construction
    /// timestamp so the first event also waits out a full delay.
    last_fire: Millis,

    /// Delay until the next firing, drawn per firing from
    /// `[MIN_EVENT_DELAY_MS, MAX_EVENT_DELAY_MS)`.
    next_delay_ms: f64,
}

impl SocialScheduler {
    pub fn new(now: Millis, rng: &mut SceneRng) -> Self {
        Self {
            last_fire: now,
            next_delay_ms: rng.range_ms(MIN_EVENT_DELAY_MS, MAX_EVENT_DELAY_MS),
        }
    }

    /// Earliest scene time at which the next poll can fire.
    pub fn next_fire_at(&self) -> Millis {
        self.last_fire + self.next_delay_ms
    }

    /// Attempt to fire one social event.
    ///
    /// - Does nothing until the drawn delay has elapsed since the last firing.
    /// - Candidates are the actors currently `AtDesk`; fewer than two is a
    ///   skip, which leaves the pending delay untouched so the next seated
    ///   frame can fire immediately.
    /// - On a firing, participants start walking via `updater`, the firing
    ///   time is recorded, and a fresh delay is drawn.
    pub fn poll(
        &mut self,
        now: Millis,
        store: &mut StateStore,
        desks: &DeskMap,
        plan: &FloorPlan,
        updater: &MotionUpdater,
        rng: &mut SceneRng,
    ) -> Option<SocialEvent> {
        if now - self.last_fire < self.next_delay_ms {
            return None;
        }

        let mut pool: Vec<ActorId> = store
            .iter()
            .filter(|(_, st)| st.phase == Phase::AtDesk)
            .map(|(id, _)| id)
            .collect();
        if pool.len() < MIN_SEATED {
            return None;
        }
        rng.shuffle(&mut pool);

        let kind = draw_kind(rng.uniform());
        let assignments = match kind {
            ActivityKind::WaterCooler => {
                let (lo, hi) = stay_range(kind);
                let stay = rng.range_ms(lo, hi);
                let (a, b) = (pool[0], pool[1]);
                vec![
                    Assignment {
                        actor: a,
                        dest: plan.water_cooler_slots[0],
                        stay_ms: stay,
                        partner: Some(b),
                    },
                    Assignment {
                        actor: b,
                        dest: plan.water_cooler_slots[1],
                        stay_ms: stay,
                        partner: Some(a),
                    },
                ]
            }
            ActivityKind::Coffee => {
                let (lo, hi) = stay_range(kind);
                vec![Assignment {
                    actor: pool[0],
                    dest: plan.coffee_spot,
                    stay_ms: rng.range_ms(lo, hi),
                    partner: None,
                }]
            }
            ActivityKind::Meeting => {
                let k = rng.gen_range(2..=pool.len().min(MEETING_CAP));
                let (lo, hi) = stay_range(kind);
                let stay = rng.range_ms(lo, hi);
                (0..k)
                    .map(|i| Assignment {
                        actor: pool[i],
                        dest: plan.meeting_seats[i % plan.meeting_seats.len()],
                        stay_ms: stay,
                        // Conversation ring: each member talks to the next.
                        partner: Some(pool[(i + 1) % k]),
                    })
                    .collect()
            }
            ActivityKind::Visit => {
                // The host keeps its seat; only the visitor walks.
                let (visitor, host) = (pool[0], pool[1]);
                let (lo, hi) = stay_range(kind);
                vec![Assignment {
                    actor: visitor,
                    dest: plan.visit_spot(desks.home(host)),
                    stay_ms: rng.range_ms(lo, hi),
                    partner: Some(host),
                }]
            }
        };

        for a in &assignments {
            if let Ok(st) = store.get_mut(a.actor) {
                updater.begin_walk(st, a.dest, now, Some(kind), a.stay_ms, a.partner);
            }
        }

        self.last_fire = now;
        self.next_delay_ms = rng.range_ms(MIN_EVENT_DELAY_MS, MAX_EVENT_DELAY_MS);

        debug!(
            kind = kind.as_str(),
            participants = assignments.len(),
            "social event fired"
        );
        Some(SocialEvent { kind, assignments })
    }
}
