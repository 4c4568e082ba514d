//! Persisted desk-position map.
//!
//! # Document format
//!
//! One JSON object keyed by actor slug:
//!
//! ```json
//! {"arnar":{"x":0.12,"y":0.18},"blaer":{"x":0.5,"y":0.22}}
//! ```
//!
//! The host's storage layer owns WHERE this lives (browser storage, a file,
//! …); this module only defines the codec and its lenience rules:
//!
//! - an unreadable document is treated as absent (warn, empty map);
//! - a malformed or non-finite entry is discarded per-key (warn), the rest
//!   survive;
//! - finite but out-of-range coordinates are clamped into the unit square.
//!
//! Loading therefore never fails; saving can (encode/IO), because losing a
//! drag is worth surfacing.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use tracing::warn;

use po_core::Vec2;

use crate::error::{FloorError, FloorResult};

/// Suggested host-storage key for the position document.
pub const POSITIONS_KEY: &str = "pixeloffice:floor:positions";

/// Decode a position document, applying the per-key lenience rules.
pub fn parse_positions(json: &str) -> HashMap<String, Vec2> {
    let raw: HashMap<String, serde_json::Value> = match serde_json::from_str(json) {
        Ok(map) => map,
        Err(e) => {
            warn!("discarding unreadable position map: {e}");
            return HashMap::new();
        }
    };

    let mut out = HashMap::with_capacity(raw.len());
    for (slug, value) in raw {
        match serde_json::from_value::<Vec2>(value) {
            Ok(pos) if pos.x.is_finite() && pos.y.is_finite() => {
                out.insert(slug, pos.clamp_unit());
            }
            Ok(_) => warn!("position for {slug:?} is not finite; falling back to default"),
            Err(e) => warn!("position for {slug:?} malformed ({e}); falling back to default"),
        }
    }
    out
}

/// Encode desk positions as a position document.
///
/// Keys are emitted in sorted order so repeated saves of the same state are
/// byte-identical (diff-friendly storage).
pub fn encode_positions<'a, I>(entries: I) -> FloorResult<String>
where
    I: IntoIterator<Item = (&'a str, Vec2)>,
{
    let map: BTreeMap<&str, Vec2> = entries.into_iter().collect();
    serde_json::to_string(&map).map_err(|e| FloorError::Encode(e.to_string()))
}

/// Load a position document from a file; a missing file is an empty map.
pub fn load_positions_file(path: &Path) -> FloorResult<HashMap<String, Vec2>> {
    match std::fs::read_to_string(path) {
        Ok(json) => Ok(parse_positions(&json)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
        Err(e) => Err(FloorError::Io(e)),
    }
}

/// Save desk positions to a file (last-write-wins).
pub fn save_positions_file<'a, I>(path: &Path, entries: I) -> FloorResult<()>
where
    I: IntoIterator<Item = (&'a str, Vec2)>,
{
    let json = encode_positions(entries)?;
    std::fs::write(path, json).map_err(FloorError::Io)
}
