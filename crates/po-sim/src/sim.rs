//! The `OfficeSim` context object and its frame pipeline.

use tracing::{debug, warn};

use po_actor::{Roster, StatusFrame};
use po_core::{ActorId, FrameClock, Millis, Quality, SceneRng};
use po_floor::{DeskMap, FloorPlan, encode_positions};
use po_input::{InputController, InputEffect, Viewport};
use po_motion::{MotionUpdater, StateStore};
use po_social::SocialScheduler;

use crate::frame::{ActorSprite, FrameView, bubble_for, particle_field};
use crate::observer::OfficeObserver;
use crate::{SimError, SimResult};

/// One mounted office scene.
///
/// All mutable animation state lives here — created by the builder, dropped
/// with the view.  The host calls [`frame`][Self::frame] once per render
/// tick, routes pointer events to the `pointer_*` methods, and pushes feed
/// documents through [`apply_status`][Self::apply_status] whenever one
/// arrives.
///
/// Create via [`OfficeSimBuilder`][crate::OfficeSimBuilder].
pub struct OfficeSim {
    /// Who works here.  Identity is fixed; status/task mutate via the feed.
    pub roster: Roster,

    /// Fixed social-spot geometry.
    pub plan: FloorPlan,

    /// Live desk homes — authoritative, drag-mutable.
    pub desks: DeskMap,

    /// Per-actor animation state.
    pub store: StateStore,

    /// Walk tuning.
    pub updater: MotionUpdater,

    /// Frame clock (mount time, current time, clamped delta).
    pub clock: FrameClock,

    /// Cosmetic density tier.
    pub quality: Quality,

    /// Created on the first frame so the opening delay counts from the
    /// moment the scene is actually visible, not from construction.
    scheduler: Option<SocialScheduler>,

    rng: SceneRng,
    input: InputController,
}

impl OfficeSim {
    pub(crate) fn assemble(
        roster: Roster,
        plan: FloorPlan,
        desks: DeskMap,
        updater: MotionUpdater,
        quality: Quality,
        seed: u64,
        viewport: Viewport,
    ) -> Self {
        let store = StateStore::from_desks(&desks);
        Self {
            roster,
            plan,
            desks,
            store,
            updater,
            clock: FrameClock::new(),
            quality,
            scheduler: None,
            rng: SceneRng::new(seed),
            input: InputController::new(viewport),
        }
    }

    // ── Frame pipeline ────────────────────────────────────────────────────

    /// Advance the scene to `now` and return the render-ready view.
    ///
    /// Scheduler before updater: a walk fired this frame is integrated this
    /// frame.  No I/O happens in here.
    pub fn frame<O: OfficeObserver>(&mut self, now: Millis, observer: &mut O) -> FrameView {
        self.clock.tick(now);

        let scheduler = self
            .scheduler
            .get_or_insert_with(|| SocialScheduler::new(now, &mut self.rng));
        if let Some(event) = scheduler.poll(
            now,
            &mut self.store,
            &self.desks,
            &self.plan,
            &self.updater,
            &mut self.rng,
        ) {
            observer.on_social_event(&event);
        }

        self.updater.advance(&mut self.store, &self.desks, now);
        observer.on_frame(&self.clock);
        self.view()
    }

    /// Assemble the view for the current clock state without advancing.
    pub fn view(&self) -> FrameView {
        let selected = self.input.selected();
        let sprites = self
            .store
            .iter()
            .map(|(id, st)| {
                let actor = self.roster.actor(id);
                ActorSprite {
                    actor: id,
                    pos: st.pos,
                    phase: st.phase,
                    activity: st.activity,
                    facing: st.facing,
                    status: actor.status,
                    selected: selected == Some(id),
                    bubble: bubble_for(st, &actor.slug, &self.clock),
                }
            })
            .collect();

        FrameView {
            elapsed_ms: self.clock.elapsed_ms(),
            sprites,
            particles: particle_field(self.quality, self.clock.elapsed_ms()),
            selected,
        }
    }

    // ── Pointer entry points ──────────────────────────────────────────────

    pub fn pointer_down<O: OfficeObserver>(
        &mut self,
        px: f32,
        py: f32,
        observer: &mut O,
    ) -> SimResult<()> {
        let effect = self
            .input
            .pointer_down(px, py, &mut self.store, &self.desks)?;
        self.emit(effect, observer);
        Ok(())
    }

    pub fn pointer_move(&mut self, px: f32, py: f32) -> SimResult<()> {
        self.input
            .pointer_move(px, py, &mut self.store, &mut self.desks)?;
        Ok(())
    }

    pub fn pointer_up<O: OfficeObserver>(&mut self, observer: &mut O) {
        let effect = self.input.pointer_up(&self.desks);
        self.emit(effect, observer);
    }

    pub fn pointer_cancel<O: OfficeObserver>(&mut self, observer: &mut O) {
        let effect = self.input.pointer_cancel(&self.desks);
        self.emit(effect, observer);
    }

    /// Host canvas resized.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.input.set_viewport(viewport);
    }

    /// The actor whose detail panel is open, if any.
    pub fn selected(&self) -> Option<ActorId> {
        self.input.selected()
    }

    fn emit<O: OfficeObserver>(&self, effect: Option<InputEffect>, observer: &mut O) {
        match effect {
            Some(InputEffect::SelectionChanged(actor)) => observer.on_selection(actor),
            Some(InputEffect::HomeCommitted { actor, home }) => {
                observer.on_home_committed(actor, home)
            }
            None => {}
        }
    }

    // ── External collaborators (off the frame path) ───────────────────────

    /// Apply a status-feed document; `None` means the feed is absent.
    ///
    /// Unreadable or stale documents demote everyone to idle — never an
    /// error.  Returns `true` when a fresh document was applied.
    pub fn apply_status(&mut self, document: Option<&str>, now_unix_ms: f64) -> bool {
        let frame = document.and_then(|json| match StatusFrame::from_json(json) {
            Ok(frame) => Some(frame),
            Err(e) => {
                warn!("discarding unreadable status feed: {e}");
                None
            }
        });
        match frame {
            Some(frame) if frame.is_fresh(now_unix_ms) => {
                debug!(agents = frame.agent_count(), "applying status feed");
                frame.apply_to(&mut self.roster);
                true
            }
            Some(_) => {
                debug!("status feed is stale; marking everyone idle");
                self.roster.mark_all_idle();
                false
            }
            None => {
                self.roster.mark_all_idle();
                false
            }
        }
    }

    /// Encode the current desk positions as the persisted position document.
    pub fn positions_document(&self) -> SimResult<String> {
        encode_positions(
            self.roster
                .iter()
                .map(|(id, actor)| (actor.slug.as_str(), self.desks.home(id))),
        )
        .map_err(SimError::Floor)
    }
}
