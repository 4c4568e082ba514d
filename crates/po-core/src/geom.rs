//! Scene-space coordinates and animation easing.
//!
//! The office floor is a normalized `[0,1] × [0,1]` plane; the render layer
//! multiplies by its canvas size.  `f32` gives sub-pixel precision on any
//! realistic display while keeping per-actor state small.

/// A point (or offset) in normalized scene space.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Linear interpolation from `self` toward `other` by `t` (unclamped).
    #[inline]
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    /// Euclidean distance in scene units.
    #[inline]
    pub fn dist(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Squared distance — cheaper than `dist` for threshold comparisons.
    #[inline]
    pub fn dist_sq(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Clamp both coordinates into the unit square.
    #[inline]
    pub fn clamp_unit(self) -> Vec2 {
        Vec2 {
            x: clamp01(self.x),
            y: clamp01(self.y),
        }
    }

    /// `true` when both coordinates are finite and inside `[0,1]`.
    #[inline]
    pub fn in_unit(self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && (0.0..=1.0).contains(&self.x)
            && (0.0..=1.0).contains(&self.y)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.3}, {:.3})", self.x, self.y)
    }
}

/// Clamp a scalar into `[0,1]`.
#[inline]
pub fn clamp01(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Smoothstep easing `3t² − 2t³` on clamped input.
///
/// Symmetric (`ease(t) + ease(1−t) = 1`), with zero slope at both ends — walks
/// start and stop softly instead of snapping to constant velocity.
#[inline]
pub fn ease(t: f32) -> f32 {
    let t = clamp01(t);
    t * t * (3.0 - 2.0 * t)
}
