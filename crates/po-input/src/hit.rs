//! Pixel↔scene mapping and actor hit-testing.

use po_core::{ActorId, Vec2};
use po_floor::DeskMap;
use po_motion::StateStore;

/// Grab radius around an actor sprite, in pixels.
pub const HIT_RADIUS_PX: f32 = 24.0;

// ── Viewport ──────────────────────────────────────────────────────────────────

/// The canvas the scene is drawn into, in CSS pixels.
///
/// The scene is the unit square stretched to fill it, so the two axes may
/// scale differently; distances for hit-testing are therefore measured in
/// pixel space, where the grab radius is circular and matches what the
/// finger sees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Pointer pixels → scene coordinates (unclamped; callers clamp when
    /// writing positions).
    #[inline]
    pub fn to_scene(&self, px: f32, py: f32) -> Vec2 {
        Vec2::new(px / self.width, py / self.height)
    }

    /// Scene coordinates → pixels.
    #[inline]
    pub fn to_pixels(&self, pos: Vec2) -> (f32, f32) {
        (pos.x * self.width, pos.y * self.height)
    }

    /// Squared pixel distance between a pointer and a scene position.
    fn dist_sq_px(&self, px: f32, py: f32, pos: Vec2) -> f32 {
        let (sx, sy) = self.to_pixels(pos);
        let dx = px - sx;
        let dy = py - sy;
        dx * dx + dy * dy
    }
}

// ── Hit-testing ───────────────────────────────────────────────────────────────

/// Find the actor under the pointer, if any.
///
/// Away actors (walking or at a location) are checked first against their
/// live position, then desk-bound actors against their home; the first match
/// in id order wins.  The office layout keeps actors spaced, so no z-order
/// tiebreak is needed.
pub fn hit_test(
    viewport: &Viewport,
    store: &StateStore,
    desks: &DeskMap,
    px: f32,
    py: f32,
    radius_px: f32,
) -> Option<ActorId> {
    let radius_sq = radius_px * radius_px;

    for (id, st) in store.iter() {
        if st.is_away() && viewport.dist_sq_px(px, py, st.pos) <= radius_sq {
            return Some(id);
        }
    }
    for (id, st) in store.iter() {
        if !st.is_away() && viewport.dist_sq_px(px, py, desks.home(id)) <= radius_sq {
            return Some(id);
        }
    }
    None
}
