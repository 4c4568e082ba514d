//! Social event records — what one scheduler firing produced.

use po_core::{ActivityKind, ActorId, Vec2};

/// One participant's part in a social event.
///
/// The visited host of a `Visit` event gets no assignment of its own — it
/// stays seated and appears only as the visitor's `partner`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Assignment {
    /// Who walks.
    pub actor: ActorId,

    /// Where they walk to, in scene coordinates.
    pub dest: Vec2,

    /// How long they linger at the destination before walking back.
    pub stay_ms: f64,

    /// Conversation partner at the destination, if the activity has one.
    /// Meeting participants link in a ring; water-cooler pairs point at
    /// each other; coffee runs are solitary.
    pub partner: Option<ActorId>,
}

/// Everything one scheduler firing decided.
///
/// Emitted by [`SocialScheduler::poll`][crate::SocialScheduler::poll] so the
/// embedding layer can log or surface it; the animation state is already
/// updated by the time the event is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct SocialEvent {
    /// Which activity band fired.
    pub kind: ActivityKind,

    /// One entry per walking participant, in pool-shuffle order.
    pub assignments: Vec<Assignment>,
}

impl SocialEvent {
    /// IDs of all walking participants.
    pub fn participants(&self) -> impl Iterator<Item = ActorId> + '_ {
        self.assignments.iter().map(|a| a.actor)
    }

    /// The assignment for `actor`, if it walked in this event.
    pub fn assignment_for(&self, actor: ActorId) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.actor == actor)
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}
