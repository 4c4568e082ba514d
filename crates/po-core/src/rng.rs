//! Deterministic scene-level RNG wrapper.
//!
//! # Determinism strategy
//!
//! The whole scene runs single-threaded off one `SmallRng`, so a fixed seed
//! replays the exact same sequence of social events, stay durations, and
//! participant picks frame for frame.  Child generators (for auxiliary
//! streams that must not perturb the scene sequence) are derived by mixing
//! an offset with the 64-bit fractional golden-ratio constant, which spreads
//! consecutive offsets uniformly across the seed space.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Scene-level deterministic RNG.
///
/// Owned by the sim context; the type is `!Sync` to prevent accidental
/// sharing — all draws happen on the frame thread.
pub struct SceneRng(SmallRng);

impl SceneRng {
    pub fn new(seed: u64) -> Self {
        SceneRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SceneRng` with a different seed offset — useful for
    /// side streams (demo scripting, fuzz cases) that must not consume draws
    /// from the scene sequence.
    pub fn child(&mut self, offset: u64) -> SceneRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SceneRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform draw in `[0, 1)` — the probability-band selector.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Uniform duration draw in `[lo, hi)` milliseconds.
    #[inline]
    pub fn range_ms(&mut self, lo: f64, hi: f64) -> f64 {
        self.0.gen_range(lo..hi)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
