//! Coarse display-quality setting.
//!
//! Supplied by the host's settings surface; only affects cosmetic density
//! (ambient particle count), never timing or state transitions.

/// Render-density tier.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Quality {
    Low,
    #[default]
    Medium,
    High,
}

impl Quality {
    /// Parse a stored label leniently; anything unrecognized falls back to
    /// `Medium` (the host may hand us stale or hand-edited settings).
    pub fn from_label(label: &str) -> Quality {
        match label.trim().to_ascii_lowercase().as_str() {
            "low"    => Quality::Low,
            "medium" => Quality::Medium,
            "high"   => Quality::High,
            _        => Quality::Medium,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Quality::Low    => "low",
            Quality::Medium => "medium",
            Quality::High   => "high",
        }
    }

    /// Ambient particle count for this tier.
    #[inline]
    pub fn particle_count(self) -> usize {
        match self {
            Quality::Low    => 12,
            Quality::Medium => 30,
            Quality::High   => 56,
        }
    }
}

impl std::fmt::Display for Quality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
