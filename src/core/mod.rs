//! Core types: players, serve sides, configuration, errors, RNG.
//!
//! These are read-only inputs shared by reference with the rule engine
//! and the session coordinator.

pub mod config;
pub mod error;
pub mod player;
pub mod rng;

pub use config::{Court, GameTarget, MatchConfig};
pub use error::ConfigError;
pub use player::{Player, PlayerMap, ServeSide};
pub use rng::GameRng;
