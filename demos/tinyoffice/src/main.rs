//! tinyoffice — headless demo of the pixel_office animation core.
//!
//! Drives the 8-actor office for 90 simulated seconds at 60 fps through the
//! `FrameLoop` handle, exactly the way an embedding render loop would:
//! social events fire on their own, a scripted drag moves a desk mid-run,
//! and a status-feed document lands two thirds of the way through.  No
//! canvas — the "render layer" here is stdout.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use anyhow::Result;

use po_actor::load_roster_reader;
use po_core::{ActorId, Millis, Quality};
use po_floor::parse_positions;
use po_sim::{FrameLoop, OfficeObserver, OfficeSim, OfficeSimBuilder};
use po_social::SocialEvent;
use tracing_subscriber::EnvFilter;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const FRAME_MS: f64 = 1_000.0 / 60.0;
const SIM_SECONDS: f64 = 90.0;
const TOTAL_FRAMES: u64 = (SIM_SECONDS * 60.0) as u64;

/// Canvas the default builder assumes; pointer scripting maps through it.
const VIEW_W: f32 = 960.0;
const VIEW_H: f32 = 540.0;

/// Fixed reference wall clock for the status feed.
const NOW_UNIX_MS: f64 = 1_700_000_000_000.0;

// ── Embedded inputs ───────────────────────────────────────────────────────────

const ROSTER_CSV: &str = "\
slug,name,role,color,is_human,reports_to
arnar,Arnar,CEO,#FFD700,true,
blaer,Blaer,COO,#7B68EE,false,arnar
frost,Frost,CTO,#00BFFF,false,arnar
regn,Regn,Designer,#FF69B4,false,blaer
ylur,Ylur,Engineer,#00FF88,false,frost
stormur,Stormur,Engineer,#FF8C00,false,frost
dogg,Dogg,Analyst,#9370DB,false,blaer
udi,Udi,Support,#40E0D0,false,blaer
";

/// A saved position map as a browser might hand it back: one good override,
/// one out-of-range entry (clamped), one malformed entry (discarded).
const SAVED_POSITIONS: &str = r#"{
  "ylur":   {"x": 0.70, "y": 0.60},
  "dogg":   {"x": 1.40, "y": -0.20},
  "stormur":{"x": "oops", "y": 0.5}
}"#;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct EventLog {
    events: usize,
    commits: usize,
}

impl OfficeObserver for EventLog {
    fn on_social_event(&mut self, event: &SocialEvent) {
        self.events += 1;
        println!(
            "  event #{:<2} {:<12} {} participant(s)",
            self.events,
            event.kind.to_string(),
            event.len()
        );
    }

    fn on_selection(&mut self, actor: Option<ActorId>) {
        match actor {
            Some(actor) => println!("  selection: {actor}"),
            None => println!("  selection cleared"),
        }
    }

    fn on_home_committed(&mut self, actor: ActorId, home: po_core::Vec2) {
        self.commits += 1;
        println!("  desk moved: {actor} -> {home}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("=== tinyoffice — pixel_office animation core ===");
    println!("Actors: 8  |  Span: {SIM_SECONDS} s @ 60 fps  |  Seed: {SEED}");
    println!();

    // 1. Load the roster from the embedded CSV.
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!("Loaded {} actors", roster.len());

    // 2. Parse the saved position map (lenient per-key validation).
    let overrides = parse_positions(SAVED_POSITIONS);
    println!(
        "Saved positions: {} of 3 entries survived validation",
        overrides.len()
    );

    // 3. Build the sim.
    let sim = OfficeSimBuilder::new(roster)
        .position_overrides(overrides)
        .quality(Quality::High)
        .seed(SEED)
        .build()?;
    let sim = Rc::new(RefCell::new(sim));
    let log = Rc::new(RefCell::new(EventLog::default()));

    // 4. Register the frame callback, as a host render loop would.
    let (sim_cb, log_cb) = (Rc::clone(&sim), Rc::clone(&log));
    let mut frame_loop = FrameLoop::new(move |now| {
        sim_cb.borrow_mut().frame(now, &mut *log_cb.borrow_mut());
    });

    // 5. Drive 90 seconds, with two scripted host actions along the way:
    //    a drag of frost's desk at t=30 s and a status feed at t=60 s.
    println!();
    println!("Running...");
    for i in 0..TOTAL_FRAMES {
        let now = Millis(i as f64 * FRAME_MS);
        frame_loop.tick(now);

        if i == 30 * 60 {
            script_drag(&sim, &log)?;
        }
        if i == 60 * 60 {
            let feed = format!(
                r#"{{"timestamp": {}, "agents": [
                    {{"id": "frost", "status": "active", "current_task": "merging the release"}},
                    {{"id": "udi",   "status": "offline"}}
                ]}}"#,
                NOW_UNIX_MS - 2_000.0
            );
            let fresh = sim.borrow_mut().apply_status(Some(&feed), NOW_UNIX_MS);
            println!("  status feed applied (fresh: {fresh})");
        }
    }
    frame_loop.cancel();

    // 6. Summary.
    let sim = sim.borrow();
    let log = log.borrow();
    println!();
    println!(
        "Done: {} frames, {} social events, {} desk moves",
        sim.clock.frame(),
        log.events,
        log.commits
    );
    println!();

    // 7. Final roster table.
    println!(
        "{:<10} {:<10} {:<12} {:<16} {}",
        "Actor", "Status", "Phase", "Position", "Task"
    );
    println!("{}", "-".repeat(64));
    for (id, actor) in sim.roster.iter() {
        let st = sim.store.get(id)?;
        println!(
            "{:<10} {:<10} {:<12} {:<16} {}",
            actor.slug,
            actor.status.to_string(),
            st.phase.to_string(),
            st.pos.to_string(),
            actor.current_task.as_deref().unwrap_or("-"),
        );
    }

    // 8. The document the host would persist.
    println!();
    println!("positions document: {}", sim.positions_document()?);

    Ok(())
}

/// Drag a seated actor's desk 120 px to the right, pointer event by pointer
/// event.  Seated, so the press is guaranteed to land on the actor rather
/// than on the empty desk of someone off at an event.
fn script_drag(sim: &Rc<RefCell<OfficeSim>>, log: &Rc<RefCell<EventLog>>) -> Result<()> {
    let mut sim = sim.borrow_mut();
    let mut log = log.borrow_mut();

    let Some(actor) = sim
        .store
        .iter()
        .find(|(_, st)| !st.is_away())
        .map(|(id, _)| id)
    else {
        println!("  scripted drag skipped: nobody is at their desk");
        return Ok(());
    };
    let slug = sim.roster.actor(actor).slug.clone();
    let home = sim.desks.home(actor);
    let (px, py) = (home.x * VIEW_W, home.y * VIEW_H);

    println!("  scripted drag of {slug} begins at {home}");
    sim.pointer_down(px, py, &mut *log)?;
    for step in 1..=8 {
        sim.pointer_move(px + step as f32 * 15.0, py)?;
    }
    sim.pointer_up(&mut *log);
    Ok(())
}
