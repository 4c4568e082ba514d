//! Click/drag disambiguation.

/// Pointer displacement (px) beyond which a press becomes a drag.
pub const DRAG_SLOP_PX: f32 = 6.0;

/// Latches once the pointer wanders past the slop radius from its press
/// point.  A latched gate never un-latches: wobbling back under the radius
/// does not turn a drag back into a click.
#[derive(Copy, Clone, Debug)]
pub struct DragGate {
    start: [f32; 2],
    slop_sq: f32,
    moved: bool,
}

impl DragGate {
    pub fn new(start_x: f32, start_y: f32, slop_px: f32) -> Self {
        Self {
            start: [start_x, start_y],
            slop_sq: slop_px * slop_px,
            moved: false,
        }
    }

    /// Feed a pointer position; returns `true` once the gesture is a drag.
    pub fn update(&mut self, x: f32, y: f32) -> bool {
        if self.moved {
            return true;
        }
        let dx = x - self.start[0];
        let dy = y - self.start[1];
        if dx * dx + dy * dy > self.slop_sq {
            self.moved = true;
        }
        self.moved
    }

    /// `true` once the slop radius has been crossed.
    #[inline]
    pub fn moved(&self) -> bool {
        self.moved
    }
}
