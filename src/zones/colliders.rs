//! Collider identity to rally event resolution.
//!
//! The host engine reports contacts by collider id: paddle colliders for
//! hits, floor trigger volumes for bounces. `ColliderRegistry` maps those
//! ids to players and zone labels. The mapping is validated once when the
//! registry is built, so unknown players or zone names fail fast instead
//! of surfacing mid-rally.
//!
//! ## Example
//!
//! ```
//! use pickleball_rules::core::Player;
//! use pickleball_rules::events::RallyEvent;
//! use pickleball_rules::zones::ColliderRegistry;
//!
//! let registry = ColliderRegistry::from_json(r#"{
//!     "paddles": [{ "collider": 1, "player": 1 }, { "collider": 2, "player": 2 }],
//!     "zones": [
//!         { "collider": 10, "player": 2, "zone": "right_service_box" },
//!         { "collider": 99, "zone": "out_of_bounds" }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(registry.resolve(1), Some(RallyEvent::PaddleHit { player: Player::Player1 }));
//! assert!(registry.resolve(99).is_some());
//! assert_eq!(registry.resolve(1234), None);
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{ConfigError, Player};
use crate::events::RallyEvent;

use super::zone::{CourtZone, ZoneLabel};

/// Host-engine collider identifier.
pub type ColliderId = u32;

/// A paddle collider and the player (1 or 2) holding it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleBinding {
    pub collider: ColliderId,
    pub player: u8,
}

/// A floor trigger volume and the zone it covers.
///
/// `player` is required for every zone except `out_of_bounds`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneBinding {
    pub collider: ColliderId,
    #[serde(default)]
    pub player: Option<u8>,
    pub zone: String,
}

/// Unvalidated collider layout, as read from a scene description.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColliderConfig {
    pub paddles: Vec<PaddleBinding>,
    pub zones: Vec<ZoneBinding>,
}

impl ColliderConfig {
    /// Create an empty layout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a paddle (builder pattern).
    #[must_use]
    pub fn with_paddle(mut self, collider: ColliderId, player: u8) -> Self {
        self.paddles.push(PaddleBinding { collider, player });
        self
    }

    /// Register a floor zone (builder pattern).
    #[must_use]
    pub fn with_zone(
        mut self,
        collider: ColliderId,
        player: Option<u8>,
        zone: impl Into<String>,
    ) -> Self {
        self.zones.push(ZoneBinding {
            collider,
            player,
            zone: zone.into(),
        });
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Binding {
    Paddle(Player),
    Floor(ZoneLabel),
}

/// Validated collider lookup table.
#[derive(Clone, Debug, Default)]
pub struct ColliderRegistry {
    bindings: FxHashMap<ColliderId, Binding>,
}

impl ColliderRegistry {
    /// Validate a layout and build the lookup table.
    pub fn from_config(config: &ColliderConfig) -> Result<Self, ConfigError> {
        let mut registry = Self::default();

        for paddle in &config.paddles {
            let player = Player::try_from(paddle.player)?;
            registry.insert(paddle.collider, Binding::Paddle(player))?;
        }

        for binding in &config.zones {
            let zone: CourtZone = binding.zone.parse()?;
            let label = match (zone, binding.player) {
                (CourtZone::OutOfBounds, _) => ZoneLabel::out_of_bounds(),
                (zone, Some(number)) => ZoneLabel::on_side(Player::try_from(number)?, zone),
                (zone, None) => {
                    return Err(ConfigError::MissingZoneOwner {
                        zone: zone.name(),
                        collider: Some(binding.collider),
                    })
                }
            };
            registry.insert(binding.collider, Binding::Floor(label))?;
        }

        debug!(colliders = registry.len(), "collider registry built");
        Ok(registry)
    }

    /// Parse a JSON layout and build the lookup table.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: ColliderConfig = serde_json::from_str(json)?;
        Self::from_config(&config)
    }

    fn insert(&mut self, collider: ColliderId, binding: Binding) -> Result<(), ConfigError> {
        if self.bindings.insert(collider, binding).is_some() {
            return Err(ConfigError::DuplicateCollider(collider));
        }
        Ok(())
    }

    /// Translate a contact into a rally event.
    ///
    /// Colliders that are neither paddles nor floor zones (net posts,
    /// fences, the player's body) resolve to `None`.
    #[must_use]
    pub fn resolve(&self, collider: ColliderId) -> Option<RallyEvent> {
        self.bindings.get(&collider).map(|binding| match *binding {
            Binding::Paddle(player) => RallyEvent::PaddleHit { player },
            Binding::Floor(zone) => RallyEvent::Bounce { zone },
        })
    }

    /// Number of registered colliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
