//! The rally state machine.
//!
//! `RallyEngine` consumes paddle hits and bounces, adjudicates faults,
//! awards points and rotates the serve. It is a plain owned value: the
//! coordinator holds it and passes it by reference, and it never waits
//! or schedules anything itself.
//!
//! ## Bounce Decisions
//!
//! Evaluated in priority order:
//!
//! 1. Out of bounds: the last hitter loses the point.
//! 2. Serve phase: the serve must land in the receiver's service box on
//!    the server's side. A kitchen is always a fault, any other zone is a
//!    wrong-box fault. Either way the receiver wins the point.
//! 3. Second bounce on one half before a paddle hit: the last hitter wins.
//! 4. First bounce after a hit on the hitter's own half: the hitter loses.
//!
//! ## Serve Rotation
//!
//! The winner of every point serves next. A server who wins keeps the
//! serve and switches sides; a receiver who wins takes over the serve
//! from the side they last served from.

use tracing::{debug, info, trace};

use crate::core::{ConfigError, MatchConfig, Player, ServeSide};
use crate::events::{HitRecord, Notification, Notifications, PointReason, RallyEvent};
use crate::zones::{classify, CourtZone, Position, ZoneLabel};

use super::state::{MatchScore, RallyPhase, RallyState};

/// Pickleball rule engine for one match.
///
/// ## Example
///
/// ```
/// use pickleball_rules::core::{MatchConfig, Player};
/// use pickleball_rules::events::{Notification, PointReason};
/// use pickleball_rules::rules::RallyEngine;
/// use pickleball_rules::zones::{CourtZone, ZoneLabel};
///
/// let mut engine = RallyEngine::new(MatchConfig::default()).unwrap();
/// engine.start_serve(Player::Player1);
/// engine.on_paddle_hit(Player::Player1);
///
/// let notes = engine.on_bounce(ZoneLabel::on_side(Player::Player2, CourtZone::LeftKitchen));
/// assert!(notes.contains(&Notification::PointAwarded {
///     winner: Player::Player2,
///     reason: PointReason::ServeInKitchen,
/// }));
/// assert_eq!(engine.score().player2(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RallyEngine {
    config: MatchConfig,
    rally: RallyState,
    score: MatchScore,
}

impl RallyEngine {
    /// Create an engine awaiting Player1's first serve.
    ///
    /// Fails if the configuration is invalid.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            rally: RallyState::new(Player::Player1),
            score: MatchScore::new(),
        })
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn rally(&self) -> &RallyState {
        &self.rally
    }

    #[must_use]
    pub fn score(&self) -> &MatchScore {
        &self.score
    }

    #[must_use]
    pub fn phase(&self) -> RallyPhase {
        self.rally.phase
    }

    #[must_use]
    pub fn is_point_in_progress(&self) -> bool {
        self.rally.phase.is_point_in_progress()
    }

    #[must_use]
    pub fn serve_side(&self, player: Player) -> ServeSide {
        self.rally.serve_side(player)
    }

    /// Who serves next and from where, once no point is in progress.
    #[must_use]
    pub fn next_serve(&self) -> Option<(Player, ServeSide)> {
        match self.rally.phase {
            RallyPhase::AwaitingServe { server, side } => Some((server, side)),
            RallyPhase::PointDecided { .. } => {
                let server = self.rally.server;
                Some((server, self.rally.serve_side(server)))
            }
            RallyPhase::ServeInFlight { .. } | RallyPhase::RallyInFlight => None,
        }
    }

    /// The player who has reached the configured game target, if any.
    #[must_use]
    pub fn game_winner(&self) -> Option<Player> {
        let target = self.config.game_target?;
        Player::ALL.into_iter().find(|&player| {
            target.is_won(self.score.get(player), self.score.get(player.opponent()))
        })
    }

    // === Commands ===

    /// Hard reset: zero the score, put both players on the right and wait
    /// for `first_server`. Any rally in progress is discarded.
    pub fn new_game(&mut self, first_server: Player) -> Notifications {
        info!(server = %first_server, "new game");
        self.rally = RallyState::new(first_server);
        self.score = MatchScore::new();

        let mut notes = Notifications::new();
        notes.push(Notification::ScoreChanged { player1: 0, player2: 0 });
        notes
    }

    /// Begin a serve by `player` from their current side.
    ///
    /// Always succeeds. A rally still in progress is discarded.
    pub fn start_serve(&mut self, player: Player) -> Notifications {
        if self.is_point_in_progress() {
            debug!(server = %player, "serve restarted over a live rally");
        }

        let side = self.rally.serve_side(player);
        self.rally.server = player;
        self.rally.clear_rally();
        self.rally.phase = RallyPhase::ServeInFlight { server: player, side };
        debug!(server = %player, %side, "serve started");

        let mut notes = Notifications::new();
        notes.push(Notification::ServeReady { server: player, side });
        notes
    }

    // === Events ===

    /// Apply one event from the collision layer.
    pub fn apply(&mut self, event: RallyEvent) -> Notifications {
        match event {
            RallyEvent::PaddleHit { player } => self.on_paddle_hit(player),
            RallyEvent::Bounce { zone } => self.on_bounce(zone),
        }
    }

    /// The ball touched `player`'s paddle.
    ///
    /// Never decides a point by itself, so the result is always empty.
    pub fn on_paddle_hit(&mut self, player: Player) -> Notifications {
        if !self.is_point_in_progress() {
            trace!(%player, "paddle hit ignored, no point in progress");
            return Notifications::new();
        }

        self.rally.last_hitter = Some(player);
        self.rally.bounces.fill(0);
        self.rally.bounces_since_hit = 0;

        if let RallyPhase::ServeInFlight { server, .. } = self.rally.phase {
            if player != server {
                debug!(%player, "serve returned before it bounced");
                self.rally.phase = RallyPhase::RallyInFlight;
            }
        }

        Notifications::new()
    }

    /// A paddle hit with physical details, kept in the rally's hit history.
    pub fn record_hit(&mut self, record: HitRecord) -> Notifications {
        if !self.is_point_in_progress() {
            trace!(player = %record.player, "hit record ignored, no point in progress");
            return Notifications::new();
        }
        self.rally.hits.push_back(record);
        self.on_paddle_hit(record.player)
    }

    /// The ball touched the floor in `zone`.
    pub fn on_bounce(&mut self, zone: ZoneLabel) -> Notifications {
        if !self.is_point_in_progress() {
            trace!(%zone, "bounce ignored, no point in progress");
            return Notifications::new();
        }

        let Some(owner) = zone.owner() else {
            let faulting = self.rally.responsible_hitter();
            debug!(%faulting, "ball out of bounds");
            return self.award_point(faulting.opponent(), PointReason::OutOfBounds);
        };

        if let RallyPhase::ServeInFlight { server, side } = self.rally.phase {
            return self.judge_serve(server, side, zone.zone(), owner);
        }

        self.rally.bounces[owner] = self.rally.bounces[owner].saturating_add(1);
        self.rally.bounces_since_hit = self.rally.bounces_since_hit.saturating_add(1);
        let hitter = self.rally.responsible_hitter();

        if self.rally.bounces[owner] >= 2 {
            debug!(side = %owner, "double bounce");
            return self.award_point(hitter, PointReason::DoubleBounce);
        }

        if self.rally.bounces_since_hit == 1 && owner == hitter {
            debug!(%hitter, "shot landed on the hitter's own side");
            return self.award_point(hitter.opponent(), PointReason::OwnSideLanding);
        }

        trace!(%zone, "bounce");
        Notifications::new()
    }

    /// A bounce reported as a world position, classified on the configured court.
    pub fn on_bounce_at(&mut self, position: Position) -> Notifications {
        let zone = classify(position, &self.config.court);
        self.on_bounce(zone)
    }

    fn judge_serve(
        &mut self,
        server: Player,
        side: ServeSide,
        zone: CourtZone,
        owner: Player,
    ) -> Notifications {
        let receiver = server.opponent();

        if zone.is_kitchen() {
            debug!(%server, %zone, "serve fault: kitchen");
            return self.award_point(receiver, PointReason::ServeInKitchen);
        }

        let in_box = zone == CourtZone::service_box(side)
            || (self.config.allow_deep_serve && zone == CourtZone::backcourt(side));
        if owner != receiver || !in_box {
            debug!(%server, %side, %zone, "serve fault: wrong box");
            return self.award_point(receiver, PointReason::WrongServiceBox);
        }

        debug!(%server, %zone, "good serve");
        self.rally.phase = RallyPhase::RallyInFlight;
        self.rally.bounces[receiver] = 1;
        self.rally.bounces_since_hit = 1;

        let mut notes = Notifications::new();
        notes.push(Notification::ServeInPlay { server });
        notes
    }

    /// Decide the current point for `winner`.
    ///
    /// Updates the score and serve rotation and freezes the rally.
    /// Does nothing if no point is in progress.
    pub fn award_point(&mut self, winner: Player, reason: PointReason) -> Notifications {
        if !self.is_point_in_progress() {
            trace!(%winner, %reason, "award ignored, no point in progress");
            return Notifications::new();
        }

        let server = self.rally.server;
        self.score.increment(winner);
        if winner == server {
            let side = &mut self.rally.serve_sides[server];
            *side = side.flip();
        } else {
            self.rally.server = winner;
        }
        self.rally.phase = RallyPhase::PointDecided { winner, reason };

        info!(
            %winner,
            %reason,
            score = %self.score,
            next_server = %self.rally.server,
            "point awarded"
        );

        let mut notes = Notifications::new();
        notes.push(Notification::Fault {
            reason,
            faulting: winner.opponent(),
        });
        notes.push(Notification::PointAwarded { winner, reason });
        notes.push(Notification::ScoreChanged {
            player1: self.score.player1(),
            player2: self.score.player2(),
        });

        if self.game_winner() == Some(winner) {
            info!(%winner, score = %self.score, "game won");
            notes.push(Notification::GameWon { winner });
        }

        notes
    }
}
