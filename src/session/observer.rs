//! Notification sinks.
//!
//! The coordinator hands every notification to one injected observer.
//! Observers stand in for the display and spawner collaborators: they
//! react to outcomes and never feed anything back into the engine.

use crate::core::{Player, ServeSide};
use crate::events::{Notification, PointReason};

/// Receives engine notifications in emission order.
pub trait MatchObserver {
    fn notify(&mut self, notification: &Notification);
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullObserver;

impl MatchObserver for NullObserver {
    fn notify(&mut self, _notification: &Notification) {}
}

/// Notification log, oldest first.
impl MatchObserver for Vec<Notification> {
    fn notify(&mut self, notification: &Notification) {
        self.push(*notification);
    }
}

impl<O: MatchObserver + ?Sized> MatchObserver for Box<O> {
    fn notify(&mut self, notification: &Notification) {
        (**self).notify(notification);
    }
}

/// Score display state, rebuilt purely from notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreBoard {
    player1: u32,
    player2: u32,
    serving: Option<(Player, ServeSide)>,
    last_point: Option<(Player, PointReason)>,
    winner: Option<Player>,
}

impl ScoreBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn score(&self) -> (u32, u32) {
        (self.player1, self.player2)
    }

    /// Server and side of the most recent `ServeReady`.
    #[must_use]
    pub fn serving(&self) -> Option<(Player, ServeSide)> {
        self.serving
    }

    #[must_use]
    pub fn last_point(&self) -> Option<(Player, PointReason)> {
        self.last_point
    }

    #[must_use]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Score line as shown on the court display.
    #[must_use]
    pub fn text(&self) -> String {
        format!("Player 1: {} - Player 2: {}", self.player1, self.player2)
    }

    /// One-line status under the score.
    #[must_use]
    pub fn status(&self) -> String {
        if let Some(winner) = self.winner {
            return format!("{winner} wins!");
        }
        match (self.last_point, self.serving) {
            (Some((winner, reason)), _) => format!("Point to {winner} ({reason})"),
            (None, Some((server, side))) => format!("{server} to serve from the {side}"),
            (None, None) => "Match Started!".to_string(),
        }
    }
}

impl MatchObserver for ScoreBoard {
    fn notify(&mut self, notification: &Notification) {
        match *notification {
            Notification::ServeReady { server, side } => {
                self.serving = Some((server, side));
                self.last_point = None;
            }
            Notification::PointAwarded { winner, reason } => {
                self.last_point = Some((winner, reason));
            }
            Notification::ScoreChanged { player1, player2 } => {
                // A reset to zero is a new game.
                if player1 == 0 && player2 == 0 {
                    *self = Self::default();
                }
                self.player1 = player1;
                self.player2 = player2;
            }
            Notification::GameWon { winner } => self.winner = Some(winner),
            Notification::ServeInPlay { .. } | Notification::Fault { .. } => {}
        }
    }
}
