//! Unit tests for floor-plan geometry, desk mapping, and position persistence.

use std::collections::HashMap;

use po_core::{ActorId, Vec2};

use crate::persist::{encode_positions, load_positions_file, parse_positions, save_positions_file};
use crate::{DeskMap, FloorPlan};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn roster_slugs() -> Vec<&'static str> {
    vec!["arnar", "blaer", "frost", "regn", "ylur", "stormur", "dogg", "udi"]
}

// ── FloorPlan ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use super::*;

    #[test]
    fn every_roster_slug_has_a_named_desk() {
        for slug in roster_slugs() {
            let desk = FloorPlan::named_desk(slug);
            assert!(desk.is_some(), "no desk for {slug}");
            assert!(desk.unwrap().in_unit());
        }
        assert!(FloorPlan::named_desk("nobody").is_none());
    }

    #[test]
    fn fallback_grid_is_distinct_and_in_bounds() {
        let desks: Vec<Vec2> = (0..8).map(FloorPlan::fallback_desk).collect();
        for (i, a) in desks.iter().enumerate() {
            assert!(a.in_unit());
            for b in &desks[i + 1..] {
                assert!(a.dist(*b) > 0.05, "grid slots too close: {a} vs {b}");
            }
        }
    }

    #[test]
    fn social_spots_are_in_bounds_and_distinct() {
        let plan = FloorPlan::standard();
        let [w0, w1] = plan.water_cooler_slots;
        assert!(w0.in_unit() && w1.in_unit() && plan.coffee_spot.in_unit());
        assert!(w0.dist(w1) > 0.01, "cooler slots must not coincide");
        for seat in plan.meeting_seats {
            assert!(seat.in_unit());
        }
    }

    #[test]
    fn visit_spot_faces_away_from_the_nearest_wall() {
        let plan = FloorPlan::standard();
        // Host near the right wall: guest stands on the left.
        let right = plan.visit_spot(Vec2::new(0.88, 0.55));
        assert!(right.x < 0.88);
        // Host near the left wall: guest stands on the right.
        let left = plan.visit_spot(Vec2::new(0.12, 0.18));
        assert!(left.x > 0.12);
    }

    #[test]
    fn visit_spot_is_clamped() {
        let plan = FloorPlan::standard();
        let spot = plan.visit_spot(Vec2::new(0.30, 0.995));
        assert!(spot.in_unit());
    }
}

// ── DeskMap ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod desks {
    use super::*;

    #[test]
    fn override_beats_named_beats_fallback() {
        let mut overrides = HashMap::new();
        overrides.insert("arnar".to_string(), Vec2::new(0.40, 0.40));
        let desks = DeskMap::new(&["arnar", "blaer", "zzz"], &overrides);

        assert_eq!(desks.home(ActorId(0)), Vec2::new(0.40, 0.40));
        assert_eq!(desks.home(ActorId(1)), FloorPlan::named_desk("blaer").unwrap());
        assert_eq!(desks.home(ActorId(2)), FloorPlan::fallback_desk(2));
    }

    #[test]
    fn set_home_clamps() {
        let slugs = roster_slugs();
        let mut desks = DeskMap::new(&slugs, &HashMap::new());
        desks.set_home(ActorId(0), Vec2::new(-0.2, 1.7));
        assert_eq!(desks.home(ActorId(0)), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn iter_is_dense_and_ordered() {
        let desks = DeskMap::new(&roster_slugs(), &HashMap::new());
        let ids: Vec<ActorId> = desks.iter().map(|(id, _)| id).collect();
        assert_eq!(ids.len(), 8);
        assert_eq!(ids[0], ActorId(0));
        assert_eq!(ids[7], ActorId(7));
    }
}

// ── Position persistence ──────────────────────────────────────────────────────

#[cfg(test)]
mod persist {
    use super::*;

    #[test]
    fn unreadable_document_is_empty() {
        assert!(parse_positions("definitely not json").is_empty());
        assert!(parse_positions("").is_empty());
        // Wrong top-level shape counts as unreadable too.
        assert!(parse_positions("[1,2,3]").is_empty());
    }

    #[test]
    fn well_formed_entries_parse() {
        let map = parse_positions(r#"{"arnar":{"x":0.12,"y":0.18},"blaer":{"x":0.5,"y":0.22}}"#);
        assert_eq!(map.len(), 2);
        assert_eq!(map["arnar"], Vec2::new(0.12, 0.18));
    }

    #[test]
    fn malformed_entries_are_discarded_per_key() {
        let json = r#"{
            "good":   {"x": 0.3, "y": 0.4},
            "nox":    {"y": 0.4},
            "string": {"x": "abc", "y": 0.4},
            "scalar": 5
        }"#;
        let map = parse_positions(json);
        assert_eq!(map.len(), 1, "only the valid entry should survive");
        assert_eq!(map["good"], Vec2::new(0.3, 0.4));
    }

    #[test]
    fn out_of_range_entries_are_clamped() {
        let map = parse_positions(r#"{"far":{"x":5.0,"y":-2.0}}"#);
        assert_eq!(map["far"], Vec2::new(1.0, 0.0));
    }

    #[test]
    fn encode_then_parse_roundtrips() {
        let entries = [
            ("blaer", Vec2::new(0.5, 0.22)),
            ("arnar", Vec2::new(0.12, 0.18)),
        ];
        let json = encode_positions(entries).unwrap();
        let map = parse_positions(&json);
        assert_eq!(map.len(), 2);
        assert_eq!(map["blaer"], Vec2::new(0.5, 0.22));
        // Sorted keys: repeated saves of identical state are byte-identical.
        assert!(json.find("arnar").unwrap() < json.find("blaer").unwrap());
    }

    #[test]
    fn missing_file_is_an_empty_map() {
        let path = std::env::temp_dir().join("po-floor-test-missing-positions.json");
        let map = load_positions_file(&path).unwrap();
        assert!(map.is_empty());
    }

    #[test]
    fn save_then_load_file_roundtrips() {
        let path = std::env::temp_dir().join("po-floor-test-saved-positions.json");
        save_positions_file(&path, [("udi", Vec2::new(0.7, 0.6))]).unwrap();
        let map = load_positions_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map["udi"], Vec2::new(0.7, 0.6));
    }
}
