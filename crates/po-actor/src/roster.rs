//! The actor roster and its live status fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use po_core::ActorId;

use crate::error::{ActorError, ActorResult};

// ── ActorStatus ───────────────────────────────────────────────────────────────

/// Presence tier as reported by the status feed.
///
/// `Idle` is the universal fallback: unknown labels, missing feed entries,
/// and stale feeds all land here — an actor is only `Offline` when the feed
/// explicitly says so.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActorStatus {
    Active,
    #[default]
    Idle,
    Offline,
}

impl ActorStatus {
    /// Parse a feed label leniently; anything unrecognized is `Idle`.
    pub fn from_label(label: &str) -> ActorStatus {
        match label.trim().to_ascii_lowercase().as_str() {
            "active"  => ActorStatus::Active,
            "offline" => ActorStatus::Offline,
            _         => ActorStatus::Idle,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ActorStatus::Active  => "active",
            ActorStatus::Idle    => "idle",
            ActorStatus::Offline => "offline",
        }
    }

    /// Status-dot tint for the render layer.
    pub fn indicator_color(self) -> &'static str {
        match self {
            ActorStatus::Active  => "#00ff88",
            ActorStatus::Idle    => "#ffcc00",
            ActorStatus::Offline => "#ff4444",
        }
    }
}

impl std::fmt::Display for ActorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Actor ─────────────────────────────────────────────────────────────────────

/// One roster entry.  Identity fields are fixed at load; `status` and
/// `current_task` mutate as feed documents arrive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Actor {
    pub slug: String,
    pub name: String,
    pub role: String,
    /// Sprite tint as a hex color string (passed through to the render layer).
    pub color: String,
    pub is_human: bool,
    /// Slug of this actor's manager; `None` at the top of the chain.
    pub reports_to: Option<String>,
    #[serde(default)]
    pub status: ActorStatus,
    #[serde(default)]
    pub current_task: Option<String>,
}

// ── Roster ────────────────────────────────────────────────────────────────────

/// Dense actor storage: `ActorId` is the index, slugs map back to ids.
#[derive(Clone, Debug)]
pub struct Roster {
    actors: Vec<Actor>,
    by_slug: HashMap<String, ActorId>,
}

impl Roster {
    /// Build a roster, assigning `ActorId`s in input order.
    ///
    /// Duplicate slugs are rejected: the slug is the persistence and feed
    /// key, so two actors sharing one would silently cross wires.
    pub fn new(actors: Vec<Actor>) -> ActorResult<Self> {
        let mut by_slug = HashMap::with_capacity(actors.len());
        for (i, actor) in actors.iter().enumerate() {
            if by_slug.insert(actor.slug.clone(), ActorId(i as u32)).is_some() {
                return Err(ActorError::DuplicateSlug(actor.slug.clone()));
            }
        }
        Ok(Self { actors, by_slug })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// The actor behind `id`.  Ids come from this roster, so direct indexing
    /// is an internal invariant.
    #[inline]
    pub fn actor(&self, id: ActorId) -> &Actor {
        &self.actors[id.index()]
    }

    /// Checked lookup for externally supplied ids.
    pub fn get(&self, id: ActorId) -> Option<&Actor> {
        self.actors.get(id.index())
    }

    pub fn id_of(&self, slug: &str) -> Option<ActorId> {
        self.by_slug.get(slug).copied()
    }

    /// Iterator over all `ActorId`s in ascending index order.
    pub fn ids(&self) -> impl Iterator<Item = ActorId> + '_ {
        (0..self.actors.len() as u32).map(ActorId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (ActorId, &Actor)> {
        self.actors
            .iter()
            .enumerate()
            .map(|(i, a)| (ActorId(i as u32), a))
    }

    /// Slugs in id order — the shape `DeskMap::new` wants.
    pub fn slugs(&self) -> Vec<&str> {
        self.actors.iter().map(|a| a.slug.as_str()).collect()
    }

    #[inline]
    pub fn status(&self, id: ActorId) -> ActorStatus {
        self.actors[id.index()].status
    }

    pub(crate) fn set_report(&mut self, id: ActorId, status: ActorStatus, task: Option<String>) {
        let actor = &mut self.actors[id.index()];
        actor.status = status;
        actor.current_task = task;
    }

    /// Demote everyone to `Idle` (stale or absent feed).  Last-known tasks
    /// are kept for display; only the presence tier resets.
    pub fn mark_all_idle(&mut self) {
        for actor in &mut self.actors {
            actor.status = ActorStatus::Idle;
        }
    }
}
