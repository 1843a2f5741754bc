//! Rally adjudication.
//!
//! `RallyEngine` owns the rally state and the score. It takes events in
//! and hands notifications back; collaborators never poke its state
//! directly.

pub mod engine;
pub mod state;

pub use engine::RallyEngine;
pub use state::{MatchScore, RallyPhase, RallyState};
