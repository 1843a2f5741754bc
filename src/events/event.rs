//! Rally events consumed by the rule engine.
//!
//! Events come from the host's collision layer, which is noisy: a single
//! floor contact can be reported twice and contacts keep arriving after
//! a point is over. The engine drops whatever arrives while no point is
//! in progress.

use serde::{Deserialize, Serialize};

use crate::core::Player;
use crate::zones::{Position, ZoneLabel};

/// Something the ball did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyEvent {
    /// The ball touched `player`'s paddle.
    PaddleHit { player: Player },
    /// The ball touched the floor in `zone`.
    Bounce { zone: ZoneLabel },
}

impl RallyEvent {
    #[must_use]
    pub const fn hit(player: Player) -> Self {
        RallyEvent::PaddleHit { player }
    }

    #[must_use]
    pub const fn bounce(zone: ZoneLabel) -> Self {
        RallyEvent::Bounce { zone }
    }
}

impl std::fmt::Display for RallyEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RallyEvent::PaddleHit { player } => write!(f, "{player} hit"),
            RallyEvent::Bounce { zone } => write!(f, "bounce in {zone}"),
        }
    }
}

/// One paddle contact with its physical details.
///
/// Only `player` affects rule decisions; the rest is kept for replay and
/// display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HitRecord {
    pub player: Player,
    pub contact: Position,
    pub velocity: Position,
    /// Host clock, seconds.
    pub timestamp: f32,
}

impl HitRecord {
    /// A hit with no physical details.
    #[must_use]
    pub fn new(player: Player, timestamp: f32) -> Self {
        Self {
            player,
            contact: Position::ORIGIN,
            velocity: Position::ORIGIN,
            timestamp,
        }
    }

    /// Set the contact point (builder pattern).
    #[must_use]
    pub fn with_contact(mut self, contact: Position) -> Self {
        self.contact = contact;
        self
    }

    /// Set the ball velocity after contact (builder pattern).
    #[must_use]
    pub fn with_velocity(mut self, velocity: Position) -> Self {
        self.velocity = velocity;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::CourtZone;

    #[test]
    fn test_event_display() {
        assert_eq!(RallyEvent::hit(Player::Player1).to_string(), "Player 1 hit");
        let zone = ZoneLabel::on_side(Player::Player2, CourtZone::RightKitchen);
        assert_eq!(RallyEvent::bounce(zone).to_string(), "bounce in Player 2 right_kitchen");
    }

    #[test]
    fn test_hit_record_builder() {
        let record = HitRecord::new(Player::Player2, 3.5)
            .with_contact(Position::new(0.0, 1.0, 5.0))
            .with_velocity(Position::new(0.0, 2.0, -8.0));

        assert_eq!(record.player, Player::Player2);
        assert_eq!(record.contact.z, 5.0);
        assert_eq!(record.velocity.z, -8.0);
        assert_eq!(record.timestamp, 3.5);
    }

    #[test]
    fn test_event_serialization() {
        let event = RallyEvent::bounce(ZoneLabel::out_of_bounds());
        let json = serde_json::to_string(&event).unwrap();
        let deserialized: RallyEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, deserialized);
    }
}
