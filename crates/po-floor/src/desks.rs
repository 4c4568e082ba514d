//! Live desk homes, indexed by `ActorId`.
//!
//! The desk map is the authoritative source for "where is this actor's desk
//! right now."  It is owned by the interaction layer in spirit — drag is the
//! only mutation path after construction — but motion reads it every frame so
//! return walks land on the *current* desk, not where it was at departure.

use std::collections::HashMap;

use po_core::{ActorId, Vec2};

use crate::layout::FloorPlan;

/// One home position per actor, dense over the roster.
#[derive(Clone, Debug)]
pub struct DeskMap {
    homes: Vec<Vec2>,
}

impl DeskMap {
    /// Build homes for `slugs` in roster order: persisted override if one
    /// survived validation, else the named default, else a grid slot.
    pub fn new<S: AsRef<str>>(slugs: &[S], overrides: &HashMap<String, Vec2>) -> Self {
        let homes = slugs
            .iter()
            .enumerate()
            .map(|(i, slug)| {
                let slug = slug.as_ref();
                overrides
                    .get(slug)
                    .copied()
                    .or_else(|| FloorPlan::named_desk(slug))
                    .unwrap_or_else(|| FloorPlan::fallback_desk(i))
                    .clamp_unit()
            })
            .collect();
        Self { homes }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.homes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.homes.is_empty()
    }

    /// Current home of `actor`.  Ids come from the same roster that sized
    /// this map, so direct indexing is an internal invariant.
    #[inline]
    pub fn home(&self, actor: ActorId) -> Vec2 {
        self.homes[actor.index()]
    }

    /// Move a desk (drag).  The position is clamped to the unit square.
    #[inline]
    pub fn set_home(&mut self, actor: ActorId, pos: Vec2) {
        self.homes[actor.index()] = pos.clamp_unit();
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, Vec2)> + '_ {
        self.homes
            .iter()
            .enumerate()
            .map(|(i, &pos)| (ActorId(i as u32), pos))
    }
}
