//! Fixed floor-plan geometry: social spots and the default desk layout.
//!
//! Coordinates are tuning values, not contracts — the render layer may draw
//! furniture anywhere, but the scheduler sends actors to THESE points, so
//! they are centralized here rather than scattered through the scheduler.

use po_core::Vec2;

// ── Default desk layout ───────────────────────────────────────────────────────

/// Built-in desk positions for the known office roster.
///
/// Slugs absent from this table get a deterministic grid slot via
/// [`FloorPlan::fallback_desk`].
const NAMED_DESKS: &[(&str, Vec2)] = &[
    ("arnar",   Vec2 { x: 0.12, y: 0.18 }),
    ("blaer",   Vec2 { x: 0.50, y: 0.22 }),
    ("frost",   Vec2 { x: 0.82, y: 0.18 }),
    ("regn",    Vec2 { x: 0.18, y: 0.62 }),
    ("ylur",    Vec2 { x: 0.72, y: 0.62 }),
    ("stormur", Vec2 { x: 0.88, y: 0.55 }),
    ("dogg",    Vec2 { x: 0.32, y: 0.78 }),
    ("udi",     Vec2 { x: 0.62, y: 0.78 }),
];

// ── Visit-spot policy ─────────────────────────────────────────────────────────

/// Horizontal offset of a visit spot from the host's desk, in scene widths.
/// Applied away from the nearest side wall so the guest never clips out.
const VISIT_DX: f32 = 0.06;
/// Small downward offset so the guest stands beside, not on, the desk.
const VISIT_DY: f32 = 0.02;

// ── FloorPlan ─────────────────────────────────────────────────────────────────

/// The fixed geometry of the office: where shared activities happen.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    /// Two distinct standing slots flanking the water cooler.
    pub water_cooler_slots: [Vec2; 2],
    /// Single standing spot at the coffee machine.
    pub coffee_spot: Vec2,
    /// Seats around the meeting table, assigned in cycling order.
    pub meeting_seats: [Vec2; 4],
}

impl FloorPlan {
    /// The standard office floor (cooler bottom-left, coffee beside it,
    /// meeting table center).
    pub fn standard() -> Self {
        Self {
            water_cooler_slots: [
                Vec2::new(0.085, 0.81),
                Vec2::new(0.110, 0.88),
            ],
            coffee_spot: Vec2::new(0.16, 0.84),
            meeting_seats: [
                Vec2::new(0.36, 0.48),
                Vec2::new(0.60, 0.48),
                Vec2::new(0.48, 0.38),
                Vec2::new(0.48, 0.58),
            ],
        }
    }

    /// Default desk for a known slug.
    pub fn named_desk(slug: &str) -> Option<Vec2> {
        NAMED_DESKS
            .iter()
            .find(|(name, _)| *name == slug)
            .map(|(_, pos)| *pos)
    }

    /// Deterministic grid slot for roster entries without a named desk.
    ///
    /// Four columns per row, top-left to bottom-right, clamped to the unit
    /// square for absurdly large rosters.
    pub fn fallback_desk(index: usize) -> Vec2 {
        let col = (index % 4) as f32;
        let row = (index / 4) as f32;
        Vec2::new(0.15 + col * 0.22, 0.25 + row * 0.20).clamp_unit()
    }

    /// Where a visiting actor stands relative to the host's current desk.
    pub fn visit_spot(&self, host_home: Vec2) -> Vec2 {
        let dx = if host_home.x > 0.5 { -VISIT_DX } else { VISIT_DX };
        Vec2::new(host_home.x + dx, host_home.y + VISIT_DY).clamp_unit()
    }
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self::standard()
    }
}
