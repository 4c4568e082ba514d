//! CSV roster loader.
//!
//! # CSV format
//!
//! One row per actor, id order = row order:
//!
//! ```csv
//! slug,name,role,color,is_human,reports_to
//! arnar,Arnar,CEO,#FFD700,true,
//! blaer,Blaer,COO,#7B68EE,false,arnar
//! frost,Frost,CTO,#00BFFF,false,arnar
//! ```
//!
//! An empty `reports_to` marks the top of the chain.  Status and task
//! columns do not exist here — those are runtime fields owned by the feed.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::error::ActorError;
use crate::roster::{Actor, ActorStatus, Roster};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct RosterRecord {
    slug:       String,
    name:       String,
    role:       String,
    color:      String,
    is_human:   bool,
    reports_to: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> Result<Roster, ActorError> {
    let file = std::fs::File::open(path).map_err(ActorError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or embedded rosters.
pub fn load_roster_reader<R: Read>(reader: R) -> Result<Roster, ActorError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut actors = Vec::new();

    for result in csv_reader.deserialize::<RosterRecord>() {
        let row = result.map_err(|e| ActorError::Parse(e.to_string()))?;
        let reports_to = match row.reports_to.trim() {
            "" => None,
            manager => Some(manager.to_string()),
        };
        actors.push(Actor {
            slug: row.slug,
            name: row.name,
            role: row.role,
            color: row.color,
            is_human: row.is_human,
            reports_to,
            status: ActorStatus::default(),
            current_task: None,
        });
    }

    Roster::new(actors)
}
