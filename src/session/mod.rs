//! Everything around the rule engine that a running match needs.
//!
//! - `coordinator`: `Session`, the game-flow controller with the
//!   inter-rally delay
//! - `observer`: notification sinks (`ScoreBoard`, notification log)
//! - `opponent`: shot policies for simulated players
//! - `simulator`: `RallySimulator`, playing rallies and games from a seed

pub mod coordinator;
pub mod observer;
pub mod opponent;
pub mod simulator;

pub use coordinator::{PendingServe, Session};
pub use observer::{MatchObserver, NullObserver, ScoreBoard};
pub use opponent::{ErrorRateOpponent, ScriptedShots, Shot, ShotContext, ShotPolicy};
pub use simulator::{RallyRecord, RallySimulator, DEFAULT_MAX_SHOTS};
