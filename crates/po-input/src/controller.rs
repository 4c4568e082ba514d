//! The pointer state machine.

use tracing::debug;

use po_core::{ActorId, Vec2};
use po_floor::DeskMap;
use po_motion::StateStore;

use crate::error::InputResult;
use crate::gesture::{DRAG_SLOP_PX, DragGate};
use crate::hit::{HIT_RADIUS_PX, Viewport, hit_test};

// ── InputEffect ───────────────────────────────────────────────────────────────

/// What a pointer event asked the embedding layer to do.
///
/// Effects are returned instead of called back so the controller stays free
/// of host concerns: the embedder opens the detail panel on selection and
/// persists the position map on a home commit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InputEffect {
    /// The selection changed; `None` means it was cleared.
    SelectionChanged(Option<ActorId>),
    /// A drag ended; `home` is the desk's new position, ready to persist.
    HomeCommitted { actor: ActorId, home: Vec2 },
}

// ── InputController ───────────────────────────────────────────────────────────

struct ActiveGesture {
    actor: ActorId,
    gate: DragGate,
}

/// Tracks one pointer through the down → move… → up/cancel lifecycle.
///
/// Single-pointer by design: the office is not a multitouch surface, and a
/// second pointer landing mid-gesture simply re-arms on whatever it hits.
pub struct InputController {
    viewport: Viewport,
    hit_radius_px: f32,
    drag_slop_px: f32,
    selected: Option<ActorId>,
    gesture: Option<ActiveGesture>,
}

impl InputController {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            hit_radius_px: HIT_RADIUS_PX,
            drag_slop_px: DRAG_SLOP_PX,
            selected: None,
            gesture: None,
        }
    }

    /// Update the canvas size (host resize).  An in-flight gesture keeps its
    /// original press point; the slop radius is small enough that a resize
    /// mid-press reads as a drag either way.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The currently selected actor (detail panel target).
    #[inline]
    pub fn selected(&self) -> Option<ActorId> {
        self.selected
    }

    /// `true` while a gesture is past the drag threshold.
    pub fn dragging(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| g.gate.moved())
    }

    /// Pointer pressed at `(px, py)`.
    ///
    /// Over an actor: arm the gesture, and if the actor is away from its
    /// desk, snap it home immediately — the press cancels its activity, its
    /// partner keeps going alone.  Over empty floor: clear the selection.
    pub fn pointer_down(
        &mut self,
        px: f32,
        py: f32,
        store: &mut StateStore,
        desks: &DeskMap,
    ) -> InputResult<Option<InputEffect>> {
        match hit_test(&self.viewport, store, desks, px, py, self.hit_radius_px) {
            Some(actor) => {
                if store.get(actor)?.is_away() {
                    debug!(%actor, "press cancels in-flight activity");
                    store.reset_to_desk(actor, desks.home(actor))?;
                }
                self.gesture = Some(ActiveGesture {
                    actor,
                    gate: DragGate::new(px, py, self.drag_slop_px),
                });
                Ok(None)
            }
            None => {
                self.gesture = None;
                Ok(self.selected.take().map(|_| InputEffect::SelectionChanged(None)))
            }
        }
    }

    /// Pointer moved to `(px, py)`.
    ///
    /// Once past the slop threshold the gesture is a drag: the actor's home
    /// and seated position track the pointer continuously, clamped to the
    /// scene.
    pub fn pointer_move(
        &mut self,
        px: f32,
        py: f32,
        store: &mut StateStore,
        desks: &mut DeskMap,
    ) -> InputResult<()> {
        let Some(gesture) = self.gesture.as_mut() else {
            return Ok(());
        };
        if !gesture.gate.update(px, py) {
            return Ok(());
        }
        let actor = gesture.actor;
        desks.set_home(actor, self.viewport.to_scene(px, py));
        store.get_mut(actor)?.pos = desks.home(actor);
        Ok(())
    }

    /// Pointer released.
    ///
    /// A drag commits the new home (for the host to persist); a click
    /// toggles the selection.  Exactly one of the two happens.
    pub fn pointer_up(&mut self, desks: &DeskMap) -> Option<InputEffect> {
        let gesture = self.gesture.take()?;
        if gesture.gate.moved() {
            let home = desks.home(gesture.actor);
            debug!(actor = %gesture.actor, %home, "drag committed");
            return Some(InputEffect::HomeCommitted {
                actor: gesture.actor,
                home,
            });
        }
        self.selected = if self.selected == Some(gesture.actor) {
            None
        } else {
            Some(gesture.actor)
        };
        Some(InputEffect::SelectionChanged(self.selected))
    }

    /// Pointer cancelled by the host (touch interrupted, window blur).
    ///
    /// A past-threshold drag still commits — the desk already moved on
    /// screen, and last-write-wins beats snapping it back.  A click-in-
    /// progress is dropped without touching the selection.
    pub fn pointer_cancel(&mut self, desks: &DeskMap) -> Option<InputEffect> {
        let gesture = self.gesture.take()?;
        gesture.gate.moved().then(|| InputEffect::HomeCommitted {
            actor: gesture.actor,
            home: desks.home(gesture.actor),
        })
    }
}
