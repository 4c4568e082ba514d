//! Social activity vocabulary shared across scheduler, motion, and bubbles.
//!
//! A closed set: band probabilities, destination assignment, and bubble
//! context all dispatch exhaustively over it, so adding a variant is a
//! deliberate cross-crate change rather than a stringly-typed drift.

/// What an actor is away from its desk to do.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActivityKind {
    /// Two actors chatting at the water-cooler slots.
    WaterCooler,
    /// One actor fetching coffee, solo.
    Coffee,
    /// Two to four actors around the meeting table.
    Meeting,
    /// One actor standing beside a colleague's desk.
    Visit,
}

impl ActivityKind {
    pub const ALL: [ActivityKind; 4] = [
        ActivityKind::WaterCooler,
        ActivityKind::Coffee,
        ActivityKind::Meeting,
        ActivityKind::Visit,
    ];

    /// `true` for activities where participants carry a partner id.
    #[inline]
    pub fn is_paired(self) -> bool {
        !matches!(self, ActivityKind::Coffee)
    }

    /// Human-readable label, useful for logs and demo output.
    pub fn as_str(self) -> &'static str {
        match self {
            ActivityKind::WaterCooler => "water-cooler",
            ActivityKind::Coffee      => "coffee",
            ActivityKind::Meeting     => "meeting",
            ActivityKind::Visit       => "visit",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
