//! Match coordinator.
//!
//! `Session` owns a `RallyEngine` and plays the role of the game-flow
//! controller around it:
//!
//! - forwards collision-layer input to the engine
//! - hands every notification to the injected observer
//! - after a point, schedules the next serve `inter_rally_delay` seconds
//!   later on its own clock, and starts it once `advance` reaches it
//!
//! Time is explicit. Nothing here sleeps; the host calls `advance` from
//! its frame loop (or a test calls it directly).

use tracing::{debug, trace};

use crate::core::{ConfigError, MatchConfig, Player};
use crate::events::{HitRecord, Notification, Notifications, RallyEvent};
use crate::rules::RallyEngine;
use crate::zones::{ColliderId, ColliderRegistry, Position};

use super::observer::{MatchObserver, NullObserver};

/// A serve waiting for the inter-rally delay to run out.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingServe {
    pub server: Player,
    /// Session clock time at which the serve starts.
    pub due_at: f64,
}

/// Engine plus scheduling plus observer.
#[derive(Debug)]
pub struct Session<O: MatchObserver = NullObserver> {
    engine: RallyEngine,
    observer: O,
    pending: Option<PendingServe>,
    clock: f64,
}

impl Session<NullObserver> {
    /// A session without an observer.
    pub fn new(config: MatchConfig) -> Result<Self, ConfigError> {
        Self::with_observer(config, NullObserver)
    }
}

impl<O: MatchObserver> Session<O> {
    /// A session reporting to `observer`.
    ///
    /// No game is running until `new_game` is called.
    pub fn with_observer(config: MatchConfig, observer: O) -> Result<Self, ConfigError> {
        Ok(Self {
            engine: RallyEngine::new(config)?,
            observer,
            pending: None,
            clock: 0.0,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &RallyEngine {
        &self.engine
    }

    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Give back the observer, dropping the session.
    pub fn into_observer(self) -> O {
        self.observer
    }

    #[must_use]
    pub fn pending_serve(&self) -> Option<PendingServe> {
        self.pending
    }

    /// Seconds elapsed on the session clock.
    #[must_use]
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// True once the configured game target has been reached.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.engine.game_winner().is_some()
    }

    /// Reset the match and serve straight away.
    ///
    /// Discards any rally in flight and any scheduled serve.
    pub fn new_game(&mut self, first_server: Player) -> Notifications {
        self.pending = None;
        let mut notes = self.engine.new_game(first_server);
        notes.extend(self.engine.start_serve(first_server));
        self.dispatch(notes)
    }

    /// Forward one collision event.
    pub fn handle(&mut self, event: RallyEvent) -> Notifications {
        let notes = self.engine.apply(event);
        self.dispatch(notes)
    }

    /// Forward a paddle hit with its physical details.
    pub fn handle_hit(&mut self, record: HitRecord) -> Notifications {
        let notes = self.engine.record_hit(record);
        self.dispatch(notes)
    }

    /// Forward a bounce reported as a world position.
    pub fn handle_bounce_at(&mut self, position: Position) -> Notifications {
        let notes = self.engine.on_bounce_at(position);
        self.dispatch(notes)
    }

    /// Forward a trigger-volume contact. Unregistered colliders are ignored.
    pub fn handle_collider(
        &mut self,
        registry: &ColliderRegistry,
        collider: ColliderId,
    ) -> Notifications {
        match registry.resolve(collider) {
            Some(event) => self.handle(event),
            None => {
                trace!(collider, "contact with unregistered collider");
                Notifications::new()
            }
        }
    }

    /// Move the clock forward by `dt` seconds and start a due serve.
    ///
    /// Negative or non-finite steps do not move the clock. Steps are
    /// accumulated in `f64` so frame deltas still register after days of
    /// uptime.
    pub fn advance(&mut self, dt: f32) -> Notifications {
        if dt.is_finite() && dt > 0.0 {
            self.clock += f64::from(dt);
        }
        match self.pending {
            Some(pending) if self.clock >= pending.due_at => self.serve_pending(),
            _ => Notifications::new(),
        }
    }

    /// Start the scheduled serve now, moving the clock up to its due time.
    pub fn serve_pending(&mut self) -> Notifications {
        let Some(pending) = self.pending.take() else {
            return Notifications::new();
        };
        self.clock = self.clock.max(pending.due_at);
        let notes = self.engine.start_serve(pending.server);
        self.dispatch(notes)
    }

    fn dispatch(&mut self, notes: Notifications) -> Notifications {
        let mut point_over = false;
        let mut game_over = false;
        for note in &notes {
            self.observer.notify(note);
            match note {
                Notification::PointAwarded { .. } => point_over = true,
                Notification::GameWon { .. } => game_over = true,
                _ => {}
            }
        }

        if point_over && !game_over {
            if let Some((server, side)) = self.engine.next_serve() {
                let due_at = self.clock + f64::from(self.engine.config().inter_rally_delay);
                debug!(%server, %side, due_at, "next serve scheduled");
                self.pending = Some(PendingServe { server, due_at });
            }
        }

        notes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameTarget, ServeSide};
    use crate::events::PointReason;
    use crate::zones::{CourtZone, ZoneLabel};

    fn session() -> Session<Vec<Notification>> {
        Session::with_observer(MatchConfig::default(), Vec::new()).unwrap()
    }

    #[test]
    fn test_new_game_serves_immediately() {
        let mut session = session();
        let notes = session.new_game(Player::Player1);

        assert_eq!(
            notes.as_slice(),
            &[
                Notification::ScoreChanged { player1: 0, player2: 0 },
                Notification::ServeReady { server: Player::Player1, side: ServeSide::Right },
            ]
        );
        assert_eq!(session.observer().as_slice(), notes.as_slice());
        assert!(session.engine().is_point_in_progress());
    }

    #[test]
    fn test_point_schedules_serve_after_delay() {
        let mut session = session();
        session.new_game(Player::Player1);
        session.advance(1.0);

        session.handle(RallyEvent::bounce(ZoneLabel::out_of_bounds()));
        let pending = session.pending_serve().unwrap();
        assert_eq!(pending.server, Player::Player2);
        assert_eq!(pending.due_at, 3.0);

        assert!(session.advance(1.5).is_empty());
        assert!(session.pending_serve().is_some());

        let notes = session.advance(0.5);
        assert_eq!(
            notes.as_slice(),
            &[Notification::ServeReady { server: Player::Player2, side: ServeSide::Right }]
        );
        assert!(session.pending_serve().is_none());
    }

    #[test]
    fn test_events_during_delay_are_ignored() {
        let mut session = session();
        session.new_game(Player::Player1);
        session.handle(RallyEvent::bounce(ZoneLabel::out_of_bounds()));
        let logged = session.observer().len();

        let notes = session.handle(RallyEvent::bounce(ZoneLabel::on_side(
            Player::Player1,
            CourtZone::LeftKitchen,
        )));
        assert!(notes.is_empty());
        assert_eq!(session.observer().len(), logged);
        assert_eq!(session.engine().score().total(), 1);
    }

    #[test]
    fn test_new_game_cancels_pending_serve() {
        let mut session = session();
        session.new_game(Player::Player1);
        session.handle(RallyEvent::bounce(ZoneLabel::out_of_bounds()));
        assert!(session.pending_serve().is_some());

        session.new_game(Player::Player2);
        assert!(session.pending_serve().is_none());
        assert!(session.advance(10.0).is_empty());
    }

    #[test]
    fn test_game_won_stops_scheduling() {
        let config = MatchConfig::default().with_game_target(GameTarget::new(1, 1));
        let mut session = Session::new(config).unwrap();
        session.new_game(Player::Player1);

        let notes = session.handle(RallyEvent::bounce(ZoneLabel::out_of_bounds()));
        assert_eq!(notes.last(), Some(&Notification::GameWon { winner: Player::Player2 }));
        assert!(session.is_game_over());
        assert!(session.pending_serve().is_none());
    }

    #[test]
    fn test_serve_pending_moves_clock() {
        let mut session = session();
        session.new_game(Player::Player2);
        session.handle(RallyEvent::hit(Player::Player2));
        session.handle(RallyEvent::bounce(ZoneLabel::on_side(
            Player::Player1,
            CourtZone::RightKitchen,
        )));

        let notes = session.serve_pending();
        assert_eq!(
            notes.as_slice(),
            &[Notification::ServeReady { server: Player::Player1, side: ServeSide::Right }]
        );
        assert_eq!(session.clock(), 2.0);
        assert!(session.serve_pending().is_empty());
    }

    #[test]
    fn test_frame_steps_reach_serve_after_long_uptime() {
        let mut session = session();
        session.new_game(Player::Player1);
        session.advance(600_000.0);
        session.handle(RallyEvent::bounce(ZoneLabel::out_of_bounds()));
        assert_eq!(session.pending_serve().unwrap().due_at, 600_002.0);

        let mut served = Vec::new();
        for _ in 0..600 {
            served.extend(session.advance(1.0 / 60.0));
        }

        assert_eq!(
            served,
            vec![Notification::ServeReady { server: Player::Player2, side: ServeSide::Right }]
        );
        assert!(session.clock() > 600_009.0);
    }

    #[test]
    fn test_bad_steps_keep_clock() {
        let mut session = session();
        session.advance(f32::NAN);
        session.advance(-3.0);
        assert_eq!(session.clock(), 0.0);
    }

    #[test]
    fn test_double_bounce_reaches_observer() {
        let mut session = session();
        session.new_game(Player::Player1);
        session.handle(RallyEvent::hit(Player::Player1));
        session.handle(RallyEvent::bounce(ZoneLabel::on_side(
            Player::Player2,
            CourtZone::RightServiceBox,
        )));
        session.handle(RallyEvent::bounce(ZoneLabel::on_side(
            Player::Player2,
            CourtZone::RightBackcourt,
        )));

        assert!(session.observer().contains(&Notification::PointAwarded {
            winner: Player::Player1,
            reason: PointReason::DoubleBounce,
        }));
    }
}
