//! The actor identifier.
//!
//! `ActorId` is a dense index: the roster assigns ids in row order at load
//! time and they stay stable for the sim's lifetime, so every per-actor
//! collection (animation store, desk map) is a plain `Vec` indexed by
//! `id.index()`.  The inner integer is `pub` for construction in tests and
//! loaders; everything else should go through `.index()`.

use std::fmt;

/// Dense index of an actor in the roster, animation store, and desk map.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActorId(pub u32);

impl ActorId {
    /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
    pub const INVALID: ActorId = ActorId(u32::MAX);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl Default for ActorId {
    /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
    #[inline(always)]
    fn default() -> Self {
        Self::INVALID
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl From<ActorId> for usize {
    #[inline(always)]
    fn from(id: ActorId) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for ActorId {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<ActorId, Self::Error> {
        u32::try_from(n).map(ActorId)
    }
}
