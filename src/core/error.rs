//! Configuration errors.
//!
//! Rule violations during play are never errors; they are reported as
//! notifications. The only failures in this crate are bad configuration,
//! detected when a court, match config or collider registry is built.

use thiserror::Error;

/// Invalid configuration detected at construction time.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A court dimension is zero, negative or not finite.
    #[error("court {name} must be positive and finite, got {value}")]
    InvalidDimension { name: &'static str, value: f32 },

    /// The kitchen reaches the service line, leaving no service box.
    #[error("kitchen depth {kitchen_depth} reaches the service line at {service_line}")]
    KitchenTooDeep { kitchen_depth: f32, service_line: f32 },

    /// The court center has a non-finite coordinate.
    #[error("court center must be finite")]
    InvalidCenter,

    /// The inter-rally delay is negative or not finite.
    #[error("inter-rally delay must be non-negative and finite, got {0}")]
    InvalidDelay(f32),

    /// The game target can never be reached.
    #[error("game target needs points_to_win >= 1 and win_by >= 1, got {points_to_win}/{win_by}")]
    InvalidGameTarget { points_to_win: u32, win_by: u32 },

    /// A player number outside 1..=2.
    #[error("unknown player number {0}")]
    UnknownPlayer(u8),

    /// A zone name that is not one of the court zones.
    #[error("unknown court zone '{0}'")]
    UnknownZone(String),

    /// An in-court zone without the player whose half it is in, either as
    /// a bare label or bound to a collider.
    #[error("zone '{zone}'{} needs an owning player", on_collider(.collider))]
    MissingZoneOwner { zone: &'static str, collider: Option<u32> },

    /// The same collider id registered twice.
    #[error("collider {0} registered more than once")]
    DuplicateCollider(u32),

    /// A probability outside [0, 1].
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability { name: &'static str, value: f64 },

    /// Malformed JSON document.
    #[error("invalid configuration document: {0}")]
    Json(#[from] serde_json::Error),
}

fn on_collider(collider: &Option<u32>) -> String {
    collider.map(|id| format!(" on collider {id}")).unwrap_or_default()
}
