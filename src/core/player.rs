//! Player identification, serve sides and per-player data storage.
//!
//! ## Player
//!
//! Exactly two participants. A computer-controlled opponent is represented
//! exactly like a human one; the rule engine never asks who is holding the
//! paddle.
//!
//! ## PlayerMap
//!
//! Two-slot per-player storage indexable by `Player`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::ConfigError;

/// One of the two match participants.
///
/// Player1 owns the half of the court with negative local depth,
/// Player2 the other half.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Player {
    Player1,
    Player2,
}

impl Player {
    /// Both players, in index order.
    pub const ALL: [Player; 2] = [Player::Player1, Player::Player2];

    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Player1 => Player::Player2,
            Player::Player2 => Player::Player1,
        }
    }

    /// Slot index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Player1 => 0,
            Player::Player2 => 1,
        }
    }

    /// Player number as shown to people (1-based).
    #[must_use]
    pub const fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl TryFrom<u8> for Player {
    type Error = ConfigError;

    /// Parse a 1-based player number.
    fn try_from(number: u8) -> Result<Self, Self::Error> {
        match number {
            1 => Ok(Player::Player1),
            2 => Ok(Player::Player2),
            other => Err(ConfigError::UnknownPlayer(other)),
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Half of a player's end of the court, seen from that player facing the net.
///
/// Used both as the serve position flag and as the lateral half of a zone.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServeSide {
    #[default]
    Right,
    Left,
}

impl ServeSide {
    /// The other side.
    #[must_use]
    pub const fn flip(self) -> Self {
        match self {
            ServeSide::Right => ServeSide::Left,
            ServeSide::Left => ServeSide::Right,
        }
    }
}

impl std::fmt::Display for ServeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServeSide::Right => f.write_str("right"),
            ServeSide::Left => f.write_str("left"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use pickleball_rules::core::{Player, PlayerMap};
///
/// let mut bounces: PlayerMap<u8> = PlayerMap::with_value(0);
/// bounces[Player::Player2] += 1;
///
/// assert_eq!(bounces[Player::Player1], 0);
/// assert_eq!(bounces[Player::Player2], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Player1), factory(Player::Player2)],
        }
    }

    /// Create a map from one value per player.
    pub fn from_pair(player1: T, player2: T) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Set both entries to `value`.
    pub fn fill(&mut self, value: T)
    where
        T: Clone,
    {
        self.data = [value.clone(), value];
    }
}

impl<T: Default> Default for PlayerMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
