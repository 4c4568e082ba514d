//! `po-sim` — the office orchestrator.
//!
//! # Frame pipeline
//!
//! ```text
//! host frame clock ──▶ OfficeSim::frame(now, observer)
//!   ① clock tick      — clamp the delta, stamp "now"
//!   ② scheduler poll  — maybe fire one social event (walks start here)
//!   ③ motion advance  — integrate every actor's animation state
//!   ④ view assembly   — sprites + bubbles + ambient particles
//! ```
//!
//! The scheduler polls strictly before motion advances, so a walk fired this
//! frame is integrated this frame — an event is never a frame stale.  The
//! whole pipeline is pure state mutation: feed ingestion and position
//! persistence happen through separate entry points the host calls off the
//! frame path.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use po_actor::load_roster_reader;
//! use po_core::Millis;
//! use po_sim::{NoopObserver, OfficeSimBuilder};
//!
//! let roster = load_roster_reader(std::io::Cursor::new(ROSTER_CSV))?;
//! let mut sim = OfficeSimBuilder::new(roster).seed(42).build()?;
//! let view = sim.frame(Millis(16.7), &mut NoopObserver);
//! ```

pub mod builder;
pub mod error;
pub mod frame;
pub mod frame_loop;
pub mod observer;
pub mod sim;


pub use builder::OfficeSimBuilder;
pub use error::{SimError, SimResult};
pub use frame::{ActorSprite, FrameView, Particle};
pub use frame_loop::FrameLoop;
pub use observer::{NoopObserver, OfficeObserver};
pub use sim::OfficeSim;
