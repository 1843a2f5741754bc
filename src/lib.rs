//! # pickleball-rules
//!
//! Match rule engine for a VR pickleball game.
//!
//! The host's physics layer reports what the ball touched (a paddle, a
//! floor zone, or a raw bounce position). The engine decides whether the
//! serve was legal, counts bounces, awards points and rotates the serve,
//! and answers with notifications for the display and the ball spawner.
//!
//! ## Design Principles
//!
//! 1. **Plain Values**: The engine is an owned value passed by reference.
//!    No globals, no singletons.
//!
//! 2. **No Waiting**: The engine never schedules anything. The inter-rally
//!    delay belongs to the coordinator (`session::Session`), which runs on
//!    an explicit clock.
//!
//! 3. **Noise Tolerant**: Events that arrive while no point is in progress
//!    are dropped silently. Only configuration can fail.
//!
//! ## Modules
//!
//! - `core`: Players, serve sides, configuration, errors, RNG
//! - `zones`: Court zones, position classification, collider bindings
//! - `events`: Rally events in, notifications out
//! - `rules`: The rally state machine and match score
//! - `session`: Coordinator, observers, simulated opponents
//!
//! ## Example
//!
//! ```
//! use pickleball_rules::{MatchConfig, Notification, Player, RallyEvent, Session, ScoreBoard};
//! use pickleball_rules::{CourtZone, ZoneLabel};
//!
//! let mut session = Session::with_observer(MatchConfig::default(), ScoreBoard::new()).unwrap();
//! session.new_game(Player::Player1);
//!
//! session.handle(RallyEvent::hit(Player::Player1));
//! let notes = session.handle(RallyEvent::bounce(ZoneLabel::on_side(
//!     Player::Player2,
//!     CourtZone::LeftServiceBox,
//! )));
//!
//! assert!(notes.contains(&Notification::ScoreChanged { player1: 0, player2: 1 }));
//! assert_eq!(session.observer().text(), "Player 1: 0 - Player 2: 1");
//! ```

pub mod core;
pub mod events;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Court, GameRng, GameTarget, MatchConfig, Player, PlayerMap, ServeSide,
};

pub use crate::zones::{
    classify, ColliderConfig, ColliderId, ColliderRegistry, CourtZone, Position, ZoneLabel,
};

pub use crate::events::{HitRecord, Notification, Notifications, PointReason, RallyEvent};

pub use crate::rules::{MatchScore, RallyEngine, RallyPhase, RallyState};

pub use crate::session::{
    ErrorRateOpponent, MatchObserver, NullObserver, PendingServe, RallyRecord, RallySimulator,
    ScoreBoard, ScriptedShots, Shot, ShotContext, ShotPolicy, Session,
};
