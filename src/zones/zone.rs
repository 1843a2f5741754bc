//! Court zone labels and positions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::core::{ConfigError, Player, ServeSide};

/// A point in world space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const ORIGIN: Position = Position::new(0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// True when every coordinate is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl std::ops::Sub for Position {
    type Output = Position;

    fn sub(self, rhs: Position) -> Position {
        Position::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

/// Floor area of one half of the court.
///
/// Left and right are seen from the owning player facing the net.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourtZone {
    LeftServiceBox,
    RightServiceBox,
    LeftKitchen,
    RightKitchen,
    LeftBackcourt,
    RightBackcourt,
    OutOfBounds,
}

impl CourtZone {
    /// All seven zones.
    pub const ALL: [CourtZone; 7] = [
        CourtZone::LeftServiceBox,
        CourtZone::RightServiceBox,
        CourtZone::LeftKitchen,
        CourtZone::RightKitchen,
        CourtZone::LeftBackcourt,
        CourtZone::RightBackcourt,
        CourtZone::OutOfBounds,
    ];

    /// The six in-bounds zones of one half.
    pub const IN_BOUNDS: [CourtZone; 6] = [
        CourtZone::LeftServiceBox,
        CourtZone::RightServiceBox,
        CourtZone::LeftKitchen,
        CourtZone::RightKitchen,
        CourtZone::LeftBackcourt,
        CourtZone::RightBackcourt,
    ];

    #[must_use]
    pub const fn service_box(side: ServeSide) -> Self {
        match side {
            ServeSide::Left => CourtZone::LeftServiceBox,
            ServeSide::Right => CourtZone::RightServiceBox,
        }
    }

    #[must_use]
    pub const fn kitchen(side: ServeSide) -> Self {
        match side {
            ServeSide::Left => CourtZone::LeftKitchen,
            ServeSide::Right => CourtZone::RightKitchen,
        }
    }

    #[must_use]
    pub const fn backcourt(side: ServeSide) -> Self {
        match side {
            ServeSide::Left => CourtZone::LeftBackcourt,
            ServeSide::Right => CourtZone::RightBackcourt,
        }
    }

    #[must_use]
    pub const fn is_kitchen(self) -> bool {
        matches!(self, CourtZone::LeftKitchen | CourtZone::RightKitchen)
    }

    #[must_use]
    pub const fn is_service_box(self) -> bool {
        matches!(self, CourtZone::LeftServiceBox | CourtZone::RightServiceBox)
    }

    #[must_use]
    pub const fn is_backcourt(self) -> bool {
        matches!(self, CourtZone::LeftBackcourt | CourtZone::RightBackcourt)
    }

    /// Lateral half of the zone, `None` for `OutOfBounds`.
    #[must_use]
    pub const fn lateral(self) -> Option<ServeSide> {
        match self {
            CourtZone::LeftServiceBox | CourtZone::LeftKitchen | CourtZone::LeftBackcourt => {
                Some(ServeSide::Left)
            }
            CourtZone::RightServiceBox | CourtZone::RightKitchen | CourtZone::RightBackcourt => {
                Some(ServeSide::Right)
            }
            CourtZone::OutOfBounds => None,
        }
    }

    /// Canonical snake_case name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            CourtZone::LeftServiceBox => "left_service_box",
            CourtZone::RightServiceBox => "right_service_box",
            CourtZone::LeftKitchen => "left_kitchen",
            CourtZone::RightKitchen => "right_kitchen",
            CourtZone::LeftBackcourt => "left_backcourt",
            CourtZone::RightBackcourt => "right_backcourt",
            CourtZone::OutOfBounds => "out_of_bounds",
        }
    }
}

impl std::fmt::Display for CourtZone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CourtZone {
    type Err = ConfigError;

    /// Accepts snake_case (`left_kitchen`) and PascalCase (`LeftKitchen`) names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect();

        CourtZone::ALL
            .into_iter()
            .find(|zone| zone.name().replace('_', "") == normalized)
            .ok_or_else(|| ConfigError::UnknownZone(s.to_string()))
    }
}

/// A court zone tagged with the player whose half it lies in.
///
/// `OutOfBounds` carries no owner; every other zone always has one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawZoneLabel")]
pub struct ZoneLabel {
    zone: CourtZone,
    owner: Option<Player>,
}

impl ZoneLabel {
    /// Label a zone on `owner`'s half. `OutOfBounds` drops the owner.
    #[must_use]
    pub const fn on_side(owner: Player, zone: CourtZone) -> Self {
        match zone {
            CourtZone::OutOfBounds => Self::out_of_bounds(),
            _ => Self {
                zone,
                owner: Some(owner),
            },
        }
    }

    #[must_use]
    pub const fn out_of_bounds() -> Self {
        Self {
            zone: CourtZone::OutOfBounds,
            owner: None,
        }
    }

    #[must_use]
    pub const fn zone(&self) -> CourtZone {
        self.zone
    }

    /// The player whose half this is, `None` when out of bounds.
    #[must_use]
    pub const fn owner(&self) -> Option<Player> {
        self.owner
    }

    #[must_use]
    pub const fn is_out_of_bounds(&self) -> bool {
        self.owner.is_none()
    }
}

#[derive(Deserialize)]
struct RawZoneLabel {
    zone: CourtZone,
    owner: Option<Player>,
}

impl TryFrom<RawZoneLabel> for ZoneLabel {
    type Error = ConfigError;

    fn try_from(raw: RawZoneLabel) -> Result<Self, Self::Error> {
        match (raw.zone, raw.owner) {
            (CourtZone::OutOfBounds, _) => Ok(Self::out_of_bounds()),
            (zone, Some(owner)) => Ok(Self::on_side(owner, zone)),
            (zone, None) => Err(ConfigError::MissingZoneOwner {
                zone: zone.name(),
                collider: None,
            }),
        }
    }
}

impl std::fmt::Display for ZoneLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.owner {
            Some(owner) => write!(f, "{owner} {}", self.zone),
            None => f.write_str(self.zone.name()),
        }
    }
}
