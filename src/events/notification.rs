//! Notifications emitted by the rule engine.
//!
//! Collaborators react to these: the ball spawner to `ServeReady`, the
//! score display to `ScoreChanged`, the coordinator to `PointAwarded`
//! (by scheduling the next serve).

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Player, ServeSide};

/// Why a point ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointReason {
    /// The ball landed outside the court. Charged to the last hitter.
    OutOfBounds,
    /// The serve landed in a kitchen.
    ServeInKitchen,
    /// The serve landed anywhere but the cross-court service box.
    WrongServiceBox,
    /// The ball bounced twice on one side before a return.
    DoubleBounce,
    /// A shot landed back on the hitter's own side.
    OwnSideLanding,
    /// Decided by the caller through `award_point`.
    Referee,
}

impl PointReason {
    /// True for the two serve faults.
    #[must_use]
    pub const fn is_serve_fault(self) -> bool {
        matches!(self, PointReason::ServeInKitchen | PointReason::WrongServiceBox)
    }
}

impl std::fmt::Display for PointReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            PointReason::OutOfBounds => "out of bounds",
            PointReason::ServeInKitchen => "serve in kitchen",
            PointReason::WrongServiceBox => "wrong service box",
            PointReason::DoubleBounce => "double bounce",
            PointReason::OwnSideLanding => "landed on own side",
            PointReason::Referee => "referee decision",
        };
        f.write_str(text)
    }
}

/// Outcome reported to collaborators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Notification {
    /// A serve started; spawn the ball at the server's position.
    ServeReady { server: Player, side: ServeSide },
    /// The serve landed in the correct box; the rally is live.
    ServeInPlay { server: Player },
    /// A rule ended the point against `faulting`.
    Fault { reason: PointReason, faulting: Player },
    /// `winner` scored.
    PointAwarded { winner: Player, reason: PointReason },
    /// New score, for display.
    ScoreChanged { player1: u32, player2: u32 },
    /// The configured game target was reached.
    GameWon { winner: Player },
}

/// Notifications produced by one engine call.
///
/// A decided point produces up to four; everything else at most one.
pub type Notifications = SmallVec<[Notification; 4]>;
