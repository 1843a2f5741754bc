//! Match configuration types.
//!
//! Coordinators configure the rule engine at startup by providing:
//! - `Court`: playing surface geometry that defines zone boundaries
//! - `GameTarget`: optional end-of-game condition
//! - `MatchConfig`: combines all configuration
//!
//! Every type deserializes from partial JSON, filling in standard
//! values, and is validated before an engine accepts it.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::zones::Position;

/// Standard court length in meters (44 ft).
pub const STANDARD_COURT_LENGTH: f32 = 13.41;
/// Standard court width in meters (20 ft).
pub const STANDARD_COURT_WIDTH: f32 = 6.1;
/// Standard kitchen depth in meters (7 ft).
pub const STANDARD_KITCHEN_DEPTH: f32 = 2.13;
/// Pause between a decided point and the next serve.
pub const DEFAULT_INTER_RALLY_DELAY: f32 = 2.0;

/// Court geometry.
///
/// The court's long axis is z (depth), its short axis x (lateral).
/// The net runs along local z = 0.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Court {
    /// Baseline to baseline.
    pub length: f32,
    /// Sideline to sideline.
    pub width: f32,
    /// Distance from the net to the kitchen line, per half.
    pub kitchen_depth: f32,
    /// World position of the middle of the net.
    pub center: Position,
}

impl Default for Court {
    fn default() -> Self {
        Self {
            length: STANDARD_COURT_LENGTH,
            width: STANDARD_COURT_WIDTH,
            kitchen_depth: STANDARD_KITCHEN_DEPTH,
            center: Position::ORIGIN,
        }
    }
}

impl Court {
    /// Create a validated court centered on the origin.
    pub fn new(length: f32, width: f32, kitchen_depth: f32) -> Result<Self, ConfigError> {
        let court = Self {
            length,
            width,
            kitchen_depth,
            center: Position::ORIGIN,
        };
        court.validate()?;
        Ok(court)
    }

    /// Move the court center.
    #[must_use]
    pub fn with_center(mut self, center: Position) -> Self {
        self.center = center;
        self
    }

    /// Distance from the net to the line between service box and backcourt.
    #[must_use]
    pub fn service_line(&self) -> f32 {
        self.length / 4.0
    }

    /// Check every dimension.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("length", self.length),
            ("width", self.width),
            ("kitchen_depth", self.kitchen_depth),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }
        if self.kitchen_depth >= self.service_line() {
            return Err(ConfigError::KitchenTooDeep {
                kitchen_depth: self.kitchen_depth,
                service_line: self.service_line(),
            });
        }
        if !self.center.is_finite() {
            return Err(ConfigError::InvalidCenter);
        }
        Ok(())
    }
}

/// End-of-game condition: first to `points_to_win` with a lead of `win_by`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameTarget {
    pub points_to_win: u32,
    pub win_by: u32,
}

impl Default for GameTarget {
    fn default() -> Self {
        Self {
            points_to_win: 11,
            win_by: 2,
        }
    }
}

impl GameTarget {
    /// Create a game target.
    #[must_use]
    pub const fn new(points_to_win: u32, win_by: u32) -> Self {
        Self { points_to_win, win_by }
    }

    /// Check whether `score` beats `other` under this target.
    #[must_use]
    pub fn is_won(&self, score: u32, other: u32) -> bool {
        score >= self.points_to_win && score.saturating_sub(other) >= self.win_by
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.points_to_win == 0 || self.win_by == 0 {
            return Err(ConfigError::InvalidGameTarget {
                points_to_win: self.points_to_win,
                win_by: self.win_by,
            });
        }
        Ok(())
    }
}

/// Complete match configuration.
///
/// ## Example
///
/// ```
/// use pickleball_rules::core::{GameTarget, MatchConfig};
///
/// let config = MatchConfig::from_json(r#"{ "inter_rally_delay": 1.5 }"#).unwrap();
/// assert_eq!(config.inter_rally_delay, 1.5);
/// assert_eq!(config.game_target, None);
///
/// let config = config.with_game_target(GameTarget::new(11, 2));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Court geometry used to classify raw bounce positions.
    pub court: Court,

    /// Seconds the coordinator waits between a decided point and the next serve.
    pub inter_rally_delay: f32,

    /// Accept serves landing in the receiver's backcourt on the correct side.
    /// When false only the service box counts.
    pub allow_deep_serve: bool,

    /// End-of-game condition. `None` plays an open-ended rally session.
    pub game_target: Option<GameTarget>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            court: Court::default(),
            inter_rally_delay: DEFAULT_INTER_RALLY_DELAY,
            allow_deep_serve: false,
            game_target: None,
        }
    }
}

impl MatchConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON document. Missing fields take standard values.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the court geometry.
    #[must_use]
    pub fn with_court(mut self, court: Court) -> Self {
        self.court = court;
        self
    }

    /// Set the inter-rally delay.
    #[must_use]
    pub fn with_inter_rally_delay(mut self, seconds: f32) -> Self {
        self.inter_rally_delay = seconds;
        self
    }

    /// Accept deep serves.
    #[must_use]
    pub fn with_deep_serve(mut self) -> Self {
        self.allow_deep_serve = true;
        self
    }

    /// Play to a target score.
    #[must_use]
    pub fn with_game_target(mut self, target: GameTarget) -> Self {
        self.game_target = Some(target);
        self
    }

    /// Check the whole configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.court.validate()?;
        if !self.inter_rally_delay.is_finite() || self.inter_rally_delay < 0.0 {
            return Err(ConfigError::InvalidDelay(self.inter_rally_delay));
        }
        if let Some(target) = &self.game_target {
            target.validate()?;
        }
        Ok(())
    }
}
