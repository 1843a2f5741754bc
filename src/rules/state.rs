//! Rally state and match score.
//!
//! ## RallyPhase
//!
//! ```text
//! AwaitingServe --start_serve--> ServeInFlight --good serve / return--> RallyInFlight
//!       ^                              |                                     |
//!       |                              +---------- point decided ------------+
//!       |                                                 |
//!    new_game                                       PointDecided --start_serve--> ServeInFlight
//! ```
//!
//! ## RallyState
//!
//! Reset at the start of every serve, mutated by each event, frozen once
//! a point is decided. Serve sides and the current server persist across
//! rallies.
//!
//! ## MatchScore
//!
//! Only ever incremented by a point award, reset only by a new game.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::core::{Player, PlayerMap, ServeSide};
use crate::events::{HitRecord, PointReason};

/// Where the rally stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RallyPhase {
    /// Waiting for `server` to serve from `side`.
    AwaitingServe { server: Player, side: ServeSide },
    /// The serve is in the air and has not yet landed or been returned.
    ServeInFlight { server: Player, side: ServeSide },
    /// The serve is done; normal rally rules apply.
    RallyInFlight,
    /// The point is over. Later events are dropped until the next serve.
    PointDecided { winner: Player, reason: PointReason },
}

impl RallyPhase {
    /// True while events can still change the outcome.
    #[must_use]
    pub const fn is_point_in_progress(&self) -> bool {
        matches!(self, RallyPhase::ServeInFlight { .. } | RallyPhase::RallyInFlight)
    }
}

/// Mutable state of the current rally plus serve rotation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RallyState {
    pub(super) phase: RallyPhase,
    pub(super) server: Player,
    pub(super) serve_sides: PlayerMap<ServeSide>,
    /// Bounces per half since the last paddle hit.
    pub(super) bounces: PlayerMap<u8>,
    pub(super) bounces_since_hit: u8,
    pub(super) last_hitter: Option<Player>,
    pub(super) hits: Vector<HitRecord>,
}

impl RallyState {
    /// Fresh state for a new game. Both players start on the right.
    #[must_use]
    pub fn new(first_server: Player) -> Self {
        Self {
            phase: RallyPhase::AwaitingServe {
                server: first_server,
                side: ServeSide::Right,
            },
            server: first_server,
            serve_sides: PlayerMap::with_value(ServeSide::Right),
            bounces: PlayerMap::with_value(0),
            bounces_since_hit: 0,
            last_hitter: None,
            hits: Vector::new(),
        }
    }

    /// Clear everything that only lives for one rally.
    pub(super) fn clear_rally(&mut self) {
        self.bounces.fill(0);
        self.bounces_since_hit = 0;
        self.last_hitter = None;
        self.hits.clear();
    }

    #[must_use]
    pub fn phase(&self) -> RallyPhase {
        self.phase
    }

    /// The player serving the current rally, or the next one once a
    /// point is decided.
    #[must_use]
    pub fn server(&self) -> Player {
        self.server
    }

    /// The side `player` serves from on their next service.
    #[must_use]
    pub fn serve_side(&self, player: Player) -> ServeSide {
        self.serve_sides[player]
    }

    /// Bounces on `player`'s half since the last paddle hit.
    #[must_use]
    pub fn bounces_on(&self, player: Player) -> u8 {
        self.bounces[player]
    }

    #[must_use]
    pub fn last_hitter(&self) -> Option<Player> {
        self.last_hitter
    }

    /// The player charged with the ball: the last hitter, or the server
    /// if no hit has been reported yet this rally.
    #[must_use]
    pub fn responsible_hitter(&self) -> Player {
        self.last_hitter.unwrap_or(self.server)
    }

    /// True until the serve lands in the correct box or is returned.
    #[must_use]
    pub fn in_serve_phase(&self) -> bool {
        matches!(self.phase, RallyPhase::ServeInFlight { .. })
    }

    /// Recorded paddle contacts of the current rally, oldest first.
    #[must_use]
    pub fn hits(&self) -> &Vector<HitRecord> {
        &self.hits
    }
}

/// Points per player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchScore {
    player1: u32,
    player2: u32,
}

impl MatchScore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn player1(&self) -> u32 {
        self.player1
    }

    #[must_use]
    pub fn player2(&self) -> u32 {
        self.player2
    }

    #[must_use]
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::Player1 => self.player1,
            Player::Player2 => self.player2,
        }
    }

    /// Points played so far.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.player1 + self.player2
    }

    pub(super) fn increment(&mut self, player: Player) {
        match player {
            Player::Player1 => self.player1 += 1,
            Player::Player2 => self.player2 += 1,
        }
    }
}

impl std::fmt::Display for MatchScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.player1, self.player2)
    }
}
