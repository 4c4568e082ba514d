//! Unit tests for roster loading and status-feed ingestion.

use std::io::Cursor;

use po_core::ActorId;

use crate::{ActorError, ActorStatus, StatusFrame, load_roster_reader};

// ── Helpers ───────────────────────────────────────────────────────────────────

const ROSTER_CSV: &str = "\
slug,name,role,color,is_human,reports_to
arnar,Arnar,CEO,#FFD700,true,
blaer,Blaer,COO,#7B68EE,false,arnar
frost,Frost,CTO,#00BFFF,false,arnar
";

fn small_roster() -> crate::Roster {
    load_roster_reader(Cursor::new(ROSTER_CSV)).unwrap()
}

// ── ActorStatus ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod status {
    use super::*;

    #[test]
    fn lenient_labels() {
        assert_eq!(ActorStatus::from_label("active"), ActorStatus::Active);
        assert_eq!(ActorStatus::from_label(" Active "), ActorStatus::Active);
        assert_eq!(ActorStatus::from_label("OFFLINE"), ActorStatus::Offline);
        assert_eq!(ActorStatus::from_label("busy"), ActorStatus::Idle);
        assert_eq!(ActorStatus::from_label(""), ActorStatus::Idle);
    }

    #[test]
    fn default_is_idle() {
        assert_eq!(ActorStatus::default(), ActorStatus::Idle);
    }

    #[test]
    fn indicator_colors_are_distinct() {
        let colors = [
            ActorStatus::Active.indicator_color(),
            ActorStatus::Idle.indicator_color(),
            ActorStatus::Offline.indicator_color(),
        ];
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
    }
}

// ── Loader / Roster ───────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use super::*;

    #[test]
    fn loads_rows_in_order() {
        let roster = small_roster();
        assert_eq!(roster.len(), 3);
        assert_eq!(roster.actor(ActorId(0)).slug, "arnar");
        assert_eq!(roster.actor(ActorId(2)).role, "CTO");
        assert_eq!(roster.id_of("blaer"), Some(ActorId(1)));
        assert_eq!(roster.id_of("nobody"), None);
    }

    #[test]
    fn empty_reports_to_is_none() {
        let roster = small_roster();
        assert_eq!(roster.actor(ActorId(0)).reports_to, None);
        assert_eq!(roster.actor(ActorId(1)).reports_to.as_deref(), Some("arnar"));
    }

    #[test]
    fn human_flag_parses() {
        let roster = small_roster();
        assert!(roster.actor(ActorId(0)).is_human);
        assert!(!roster.actor(ActorId(1)).is_human);
    }

    #[test]
    fn freshly_loaded_actors_are_idle() {
        let roster = small_roster();
        assert_eq!(roster.status(ActorId(0)), ActorStatus::Idle);
        assert_eq!(roster.actor(ActorId(0)).current_task, None);
    }

    #[test]
    fn malformed_row_is_a_parse_error() {
        let csv = "slug,name,role,color,is_human,reports_to\nx,X,CEO,#fff,maybe,\n";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ActorError::Parse(_)));
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let csv = "\
slug,name,role,color,is_human,reports_to
arnar,Arnar,CEO,#FFD700,true,
arnar,Impostor,CTO,#00BFFF,false,
";
        let err = load_roster_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, ActorError::DuplicateSlug(slug) if slug == "arnar"));
    }
}

// ── Status feed ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod feed {
    use super::*;

    #[test]
    fn full_document_parses() {
        let frame = StatusFrame::from_json(
            r#"{"timestamp": 1000.0, "agents": [
                {"id": "arnar", "status": "active", "current_task": "Quarterly plan"},
                {"id": "frost", "status": "offline"}
            ]}"#,
        )
        .unwrap();
        assert_eq!(frame.timestamp(), Some(1000.0));
        assert_eq!(frame.agent_count(), 2);
    }

    #[test]
    fn garbage_is_a_parse_error() {
        assert!(matches!(
            StatusFrame::from_json("not json"),
            Err(ActorError::Parse(_))
        ));
    }

    #[test]
    fn missing_fields_default_empty() {
        let frame = StatusFrame::from_json("{}").unwrap();
        assert_eq!(frame.timestamp(), None);
        assert_eq!(frame.agent_count(), 0);
        assert!(!frame.is_fresh(0.0), "no timestamp means stale");
    }

    #[test]
    fn apply_sets_reported_and_resets_the_rest() {
        let mut roster = small_roster();
        let frame = StatusFrame::from_json(
            r#"{"timestamp": 1.0, "agents": [
                {"id": "arnar", "status": "active", "current_task": "Quarterly plan"},
                {"id": "frost", "status": "offline"}
            ]}"#,
        )
        .unwrap();
        frame.apply_to(&mut roster);

        assert_eq!(roster.status(ActorId(0)), ActorStatus::Active);
        assert_eq!(
            roster.actor(ActorId(0)).current_task.as_deref(),
            Some("Quarterly plan")
        );
        // blaer was not reported: idle, no task.
        assert_eq!(roster.status(ActorId(1)), ActorStatus::Idle);
        assert_eq!(roster.actor(ActorId(1)).current_task, None);
        assert_eq!(roster.status(ActorId(2)), ActorStatus::Offline);
    }

    #[test]
    fn unknown_slugs_and_labels_are_tolerated() {
        let mut roster = small_roster();
        let frame = StatusFrame::from_json(
            r#"{"timestamp": 1.0, "agents": [
                {"id": "ghost", "status": "active"},
                {"id": "arnar", "status": "hyperdrive"}
            ]}"#,
        )
        .unwrap();
        frame.apply_to(&mut roster);
        // Unknown label parses as idle; unknown slug is ignored.
        assert_eq!(roster.status(ActorId(0)), ActorStatus::Idle);
    }

    #[test]
    fn freshness_boundary() {
        let frame = StatusFrame::from_json(r#"{"timestamp": 1000.0}"#).unwrap();
        assert!(frame.is_fresh(1000.0 + 59_999.0));
        assert!(!frame.is_fresh(1000.0 + 60_000.0));
        // Clock skew: a timestamp from the "future" still counts as fresh.
        assert!(frame.is_fresh(500.0));
    }

    #[test]
    fn mark_all_idle_keeps_last_known_tasks() {
        let mut roster = small_roster();
        let frame = StatusFrame::from_json(
            r#"{"timestamp": 1.0, "agents": [
                {"id": "arnar", "status": "active", "current_task": "Quarterly plan"}
            ]}"#,
        )
        .unwrap();
        frame.apply_to(&mut roster);
        roster.mark_all_idle();

        assert_eq!(roster.status(ActorId(0)), ActorStatus::Idle);
        assert_eq!(
            roster.actor(ActorId(0)).current_task.as_deref(),
            Some("Quarterly plan"),
            "staleness demotes presence, not the displayed task"
        );
    }
}
