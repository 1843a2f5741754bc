//! Deterministic rally simulation.
//!
//! Two shot policies play against each other through a real `Session`,
//! so every simulated rally goes through the same event path and rule
//! decisions as a live one. Each player draws from their own RNG stream
//! derived from one seed; identical seeds replay identical games.

use tracing::debug;

use crate::core::{GameRng, Player, PlayerMap};
use crate::events::{PointReason, RallyEvent};
use crate::rules::RallyPhase;
use crate::zones::ZoneLabel;

use super::coordinator::Session;
use super::observer::MatchObserver;
use super::opponent::{Shot, ShotContext, ShotPolicy};

/// Shots after which a rally is forced to end with a miss.
pub const DEFAULT_MAX_SHOTS: u32 = 200;

/// One simulated rally.
#[derive(Clone, Debug, PartialEq)]
pub struct RallyRecord {
    pub server: Player,
    /// Events fed to the session, in order.
    pub events: Vec<RallyEvent>,
    pub winner: Player,
    pub reason: PointReason,
}

/// Drives a session with one shot policy per player.
pub struct RallySimulator {
    policies: PlayerMap<Box<dyn ShotPolicy>>,
    rngs: PlayerMap<GameRng>,
    max_shots: u32,
}

impl RallySimulator {
    /// Create a simulator seeding both players' streams from `seed`.
    pub fn new(
        seed: u64,
        player1: impl ShotPolicy + 'static,
        player2: impl ShotPolicy + 'static,
    ) -> Self {
        let base = GameRng::new(seed);
        let player1: Box<dyn ShotPolicy> = Box::new(player1);
        let player2: Box<dyn ShotPolicy> = Box::new(player2);
        Self {
            policies: PlayerMap::from_pair(player1, player2),
            rngs: PlayerMap::new(|player| base.for_player(player)),
            max_shots: DEFAULT_MAX_SHOTS,
        }
    }

    /// Set the per-rally shot cap (builder pattern).
    #[must_use]
    pub fn with_max_shots(mut self, max_shots: u32) -> Self {
        self.max_shots = max_shots;
        self
    }

    /// Play the serve currently in flight to its end.
    ///
    /// Returns `None` if `session` is not waiting on a serve.
    pub fn play_rally<O: MatchObserver>(
        &mut self,
        session: &mut Session<O>,
    ) -> Option<RallyRecord> {
        let RallyPhase::ServeInFlight { server, side } = session.engine().phase() else {
            return None;
        };

        let mut events = Vec::new();
        let mut hitter = server;
        let mut ctx = ShotContext::serve(server, side);
        let mut last_landing: Option<ZoneLabel> = None;

        for shot_number in 0..=self.max_shots {
            let shot = if shot_number == self.max_shots {
                Shot::Miss
            } else {
                self.policies[hitter].play(&ctx, &mut self.rngs[hitter])
            };

            match shot {
                Shot::Land(label) => {
                    feed(session, &mut events, RallyEvent::hit(hitter));
                    feed(session, &mut events, RallyEvent::bounce(label));
                    last_landing = Some(label);
                }
                // The ball bounces again where it last landed.
                Shot::Miss => {
                    let label = last_landing.unwrap_or_else(ZoneLabel::out_of_bounds);
                    feed(session, &mut events, RallyEvent::bounce(label));
                }
            }

            if let RallyPhase::PointDecided { winner, reason } = session.engine().phase() {
                debug!(%server, %winner, %reason, shots = shot_number + 1, "rally simulated");
                return Some(RallyRecord {
                    server,
                    events,
                    winner,
                    reason,
                });
            }

            hitter = hitter.opponent();
            ctx = ShotContext::rally(hitter, shot_number + 1);
        }

        None
    }

    /// Start a new game and play until it is won or `max_rallies` have
    /// been played. Returns the winner, if any.
    pub fn play_game<O: MatchObserver>(
        &mut self,
        session: &mut Session<O>,
        first_server: Player,
        max_rallies: u32,
    ) -> Option<Player> {
        session.new_game(first_server);

        for _ in 0..max_rallies {
            self.play_rally(session)?;
            if let Some(winner) = session.engine().game_winner() {
                return Some(winner);
            }
            session.serve_pending();
        }

        None
    }
}

fn feed<O: MatchObserver>(
    session: &mut Session<O>,
    events: &mut Vec<RallyEvent>,
    event: RallyEvent,
) {
    events.push(event);
    session.handle(event);
}
