//! Fluent builder for constructing an [`OfficeSim`].

use std::collections::HashMap;

use po_actor::Roster;
use po_core::{Quality, Vec2};
use po_floor::{DeskMap, FloorPlan};
use po_input::Viewport;
use po_motion::MotionUpdater;

use crate::{OfficeSim, SimError, SimResult};

/// Fluent builder for [`OfficeSim`].
///
/// # Required inputs
///
/// - [`Roster`] — from [`po_actor::load_roster_reader`] or built directly.
///
/// # Optional inputs (have defaults)
///
/// | Method                  | Default                                      |
/// |-------------------------|----------------------------------------------|
/// | `.position_overrides(m)`| none — named desks / grid fallback           |
/// | `.plan(p)`              | `FloorPlan::standard()`                      |
/// | `.quality(q)`           | `Quality::Medium`                            |
/// | `.seed(s)`              | `0`                                          |
/// | `.walk_speed(v)`        | `MotionUpdater` defaults (0.22 widths/s)     |
/// | `.min_walk_ms(ms)`      | 1200 ms                                      |
/// | `.viewport(v)`          | 960 × 540                                    |
///
/// # Example
///
/// ```rust,ignore
/// let overrides = po_floor::parse_positions(&saved_json);
/// let mut sim = OfficeSimBuilder::new(roster)
///     .position_overrides(overrides)
///     .quality(Quality::High)
///     .seed(42)
///     .build()?;
/// ```
pub struct OfficeSimBuilder {
    roster: Roster,
    overrides: HashMap<String, Vec2>,
    plan: FloorPlan,
    quality: Quality,
    seed: u64,
    updater: MotionUpdater,
    viewport: Viewport,
}

impl OfficeSimBuilder {
    pub fn new(roster: Roster) -> Self {
        Self {
            roster,
            overrides: HashMap::new(),
            plan: FloorPlan::standard(),
            quality: Quality::default(),
            seed: 0,
            updater: MotionUpdater::default(),
            viewport: Viewport::new(960.0, 540.0),
        }
    }

    /// Persisted desk positions by slug (already validated/clamped — pass
    /// the output of [`po_floor::parse_positions`]).
    pub fn position_overrides(mut self, overrides: HashMap<String, Vec2>) -> Self {
        self.overrides = overrides;
        self
    }

    pub fn plan(mut self, plan: FloorPlan) -> Self {
        self.plan = plan;
        self
    }

    pub fn quality(mut self, quality: Quality) -> Self {
        self.quality = quality;
        self
    }

    /// RNG seed: same seed + same frame timestamps = same scene, event for
    /// event.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Walking speed in scene widths per second.
    pub fn walk_speed(mut self, speed: f32) -> Self {
        self.updater.walk_speed = speed;
        self
    }

    /// Floor for walk durations in milliseconds.
    pub fn min_walk_ms(mut self, ms: f64) -> Self {
        self.updater.min_walk_ms = ms;
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Validate the configuration and assemble a ready-to-run sim.
    pub fn build(self) -> SimResult<OfficeSim> {
        if self.roster.is_empty() {
            return Err(SimError::Config("roster has no actors".into()));
        }
        if !(self.updater.walk_speed.is_finite() && self.updater.walk_speed > 0.0) {
            return Err(SimError::Config(format!(
                "walk speed must be finite and positive, got {}",
                self.updater.walk_speed
            )));
        }
        if !(self.updater.min_walk_ms.is_finite() && self.updater.min_walk_ms > 0.0) {
            return Err(SimError::Config(format!(
                "minimum walk duration must be finite and positive, got {}",
                self.updater.min_walk_ms
            )));
        }

        let desks = DeskMap::new(&self.roster.slugs(), &self.overrides);
        Ok(OfficeSim::assemble(
            self.roster,
            self.plan,
            desks,
            self.updater,
            self.quality,
            self.seed,
            self.viewport,
        ))
    }
}
