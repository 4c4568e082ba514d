//! Status-feed ingestion.
//!
//! # Document shape
//!
//! ```json
//! {
//!   "timestamp": 1724668800000,
//!   "agents": [
//!     {"id": "arnar", "status": "active", "current_task": "Quarterly plan"},
//!     {"id": "frost", "status": "offline"}
//!   ]
//! }
//! ```
//!
//! The bridge process that maintains this document is an external
//! collaborator and can lag, vanish, or report actors we have never heard
//! of.  Ingestion is therefore lenient everywhere except the document frame
//! itself: a document that is not JSON at all is an error the caller turns
//! into "no feed" (everyone idle).

use serde::Deserialize;
use tracing::debug;

use crate::error::{ActorError, ActorResult};
use crate::roster::{ActorStatus, Roster};

/// Feed age beyond which everyone is demoted to idle.
pub const FEED_STALE_MS: f64 = 60_000.0;

#[derive(Deserialize)]
struct FeedAgent {
    id: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    current_task: Option<String>,
}

/// One parsed status-feed document.
#[derive(Deserialize)]
pub struct StatusFrame {
    /// Unix milliseconds at which the bridge wrote the document.
    #[serde(default)]
    timestamp: Option<f64>,
    #[serde(default)]
    agents: Vec<FeedAgent>,
}

impl StatusFrame {
    pub fn from_json(json: &str) -> ActorResult<StatusFrame> {
        serde_json::from_str(json).map_err(|e| ActorError::Parse(e.to_string()))
    }

    pub fn timestamp(&self) -> Option<f64> {
        self.timestamp
    }

    pub fn agent_count(&self) -> usize {
        self.agents.len()
    }

    /// `true` when the document is young enough to trust.
    ///
    /// Missing timestamps are stale; future timestamps (clock skew between
    /// bridge and host) count as fresh.
    pub fn is_fresh(&self, now_unix_ms: f64) -> bool {
        match self.timestamp {
            Some(ts) => now_unix_ms - ts < FEED_STALE_MS,
            None => false,
        }
    }

    /// Apply this document to the roster.
    ///
    /// Every actor resets to `Idle` with no task first, so actors the feed
    /// stopped reporting fall back cleanly; reported actors then get their
    /// label (lenient parse) and task.  Feed entries for unknown slugs are
    /// ignored.
    pub fn apply_to(&self, roster: &mut Roster) {
        for id in roster.ids().collect::<Vec<_>>() {
            roster.set_report(id, ActorStatus::Idle, None);
        }
        for agent in &self.agents {
            match roster.id_of(&agent.id) {
                Some(id) => {
                    let status = agent
                        .status
                        .as_deref()
                        .map(ActorStatus::from_label)
                        .unwrap_or_default();
                    roster.set_report(id, status, agent.current_task.clone());
                }
                None => debug!("feed reports unknown actor {:?}", agent.id),
            }
        }
    }
}
