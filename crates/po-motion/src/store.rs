//! The `StateStore` — one `AnimationState` per actor.

use po_core::{ActorId, Vec2};
use po_floor::DeskMap;

use crate::error::{MotionError, MotionResult};
use crate::state::{AnimationState, Phase};

/// Dense animation state, indexed by `ActorId`.
///
/// The vector is sized at construction and never grows: exactly one state per
/// known actor at all times.  Out-of-range ids are an implementation bug and
/// surface as [`MotionError::ActorUnknown`] from the checked accessors.
pub struct StateStore {
    states: Vec<AnimationState>,
}

impl StateStore {
    /// Create a store with every actor seated at their home.
    pub fn new(homes: &[Vec2]) -> Self {
        Self {
            states: homes.iter().map(|&h| AnimationState::at_desk(h)).collect(),
        }
    }

    /// Convenience constructor from a populated desk map.
    pub fn from_desks(desks: &DeskMap) -> Self {
        Self {
            states: desks
                .iter()
                .map(|(_, home)| AnimationState::at_desk(home))
                .collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn get(&self, actor: ActorId) -> MotionResult<&AnimationState> {
        self.states
            .get(actor.index())
            .ok_or(MotionError::ActorUnknown(actor))
    }

    pub fn get_mut(&mut self, actor: ActorId) -> MotionResult<&mut AnimationState> {
        self.states
            .get_mut(actor.index())
            .ok_or(MotionError::ActorUnknown(actor))
    }

    /// Current phase of `actor` (unchecked index — internal invariant).
    #[inline]
    pub fn phase(&self, actor: ActorId) -> Phase {
        self.states[actor.index()].phase
    }

    /// Force `actor` back to `AtDesk` at `pos`, abandoning any walk or
    /// activity in progress.  Facing is preserved so a drag does not flip the
    /// sprite.  Partners are untouched — their lifecycles are independent.
    pub fn reset_to_desk(&mut self, actor: ActorId, pos: Vec2) -> MotionResult<()> {
        let st = self.get_mut(actor)?;
        let facing = st.facing;
        *st = AnimationState::at_desk(pos);
        st.facing = facing;
        Ok(())
    }

    /// Iterator over all `ActorId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        (0..self.states.len() as u32).map(ActorId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &AnimationState)> {
        self.states
            .iter()
            .enumerate()
            .map(|(i, st)| (ActorId(i as u32), st))
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ActorId, &mut AnimationState)> {
        self.states
            .iter_mut()
            .enumerate()
            .map(|(i, st)| (ActorId(i as u32), st))
    }
}
