//! Simulated players.
//!
//! A shot policy decides where a player's shot lands, at the level the
//! rule engine cares about: a zone label, or a miss. Ball flight, drag
//! and paddle aim are the physics layer's business and are not modeled.

use tracing::trace;

use crate::core::{ConfigError, GameRng, Player, ServeSide};
use crate::zones::{CourtZone, ZoneLabel};

/// Outcome of one swing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shot {
    /// The player hit the ball and it next touches the floor here.
    Land(ZoneLabel),
    /// The player failed to reach the ball.
    Miss,
}

/// What a policy knows when it plays a shot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShotContext {
    pub player: Player,
    /// `Some(side)` when this shot is the serve, from `side`.
    pub serve_side: Option<ServeSide>,
    /// Shots played so far this rally, the serve being 0.
    pub shot_number: u32,
}

impl ShotContext {
    #[must_use]
    pub const fn serve(player: Player, side: ServeSide) -> Self {
        Self {
            player,
            serve_side: Some(side),
            shot_number: 0,
        }
    }

    #[must_use]
    pub const fn rally(player: Player, shot_number: u32) -> Self {
        Self {
            player,
            serve_side: None,
            shot_number,
        }
    }
}

/// Decides where a player's shots go.
pub trait ShotPolicy {
    fn play(&mut self, ctx: &ShotContext, rng: &mut GameRng) -> Shot;
}

/// Plays clean shots except for a fixed error and miss rate.
///
/// Serves land in the correct box unless an error is rolled; an erroneous
/// serve goes into the kitchen, the wrong box or out. Returns are a miss,
/// an error (out, or into the net and down on the hitter's own side), or
/// a landing anywhere on the opponent's half.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ErrorRateOpponent {
    error_rate: f64,
    miss_rate: f64,
}

impl Default for ErrorRateOpponent {
    fn default() -> Self {
        Self {
            error_rate: 0.1,
            miss_rate: 0.15,
        }
    }
}

impl ErrorRateOpponent {
    /// Both rates must lie in [0, 1].
    pub fn new(error_rate: f64, miss_rate: f64) -> Result<Self, ConfigError> {
        for (name, value) in [("error_rate", error_rate), ("miss_rate", miss_rate)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::InvalidProbability { name, value });
            }
        }
        Ok(Self { error_rate, miss_rate })
    }

    /// Never errs and never misses.
    #[must_use]
    pub const fn perfect() -> Self {
        Self {
            error_rate: 0.0,
            miss_rate: 0.0,
        }
    }

    #[must_use]
    pub fn error_rate(&self) -> f64 {
        self.error_rate
    }

    #[must_use]
    pub fn miss_rate(&self) -> f64 {
        self.miss_rate
    }

    fn serve(&self, player: Player, side: ServeSide, rng: &mut GameRng) -> Shot {
        let receiver = player.opponent();
        if !rng.gen_bool(self.error_rate) {
            return Shot::Land(ZoneLabel::on_side(receiver, CourtZone::service_box(side)));
        }

        let faults = [
            ZoneLabel::on_side(receiver, CourtZone::kitchen(side)),
            ZoneLabel::on_side(receiver, CourtZone::service_box(side.flip())),
            ZoneLabel::out_of_bounds(),
        ];
        let label = rng.choose(&faults).copied().unwrap_or_else(ZoneLabel::out_of_bounds);
        trace!(%player, %label, "serve error");
        Shot::Land(label)
    }

    fn rally_shot(&self, player: Player, rng: &mut GameRng) -> Shot {
        if rng.gen_bool(self.miss_rate) {
            return Shot::Miss;
        }

        if rng.gen_bool(self.error_rate) {
            let errors = [
                ZoneLabel::out_of_bounds(),
                ZoneLabel::on_side(player, CourtZone::LeftKitchen),
                ZoneLabel::on_side(player, CourtZone::RightKitchen),
            ];
            let label = rng.choose(&errors).copied().unwrap_or_else(ZoneLabel::out_of_bounds);
            trace!(%player, %label, "shot error");
            return Shot::Land(label);
        }

        let zone = rng
            .choose(&CourtZone::IN_BOUNDS)
            .copied()
            .unwrap_or(CourtZone::RightBackcourt);
        Shot::Land(ZoneLabel::on_side(player.opponent(), zone))
    }
}

impl ShotPolicy for ErrorRateOpponent {
    fn play(&mut self, ctx: &ShotContext, rng: &mut GameRng) -> Shot {
        match ctx.serve_side {
            Some(side) => self.serve(ctx.player, side, rng),
            None => self.rally_shot(ctx.player, rng),
        }
    }
}

/// Replays a fixed list of shots, then misses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScriptedShots {
    shots: Vec<Shot>,
    next: usize,
}

impl ScriptedShots {
    #[must_use]
    pub fn new(shots: Vec<Shot>) -> Self {
        Self { shots, next: 0 }
    }
}

impl ShotPolicy for ScriptedShots {
    fn play(&mut self, _ctx: &ShotContext, _rng: &mut GameRng) -> Shot {
        let shot = self.shots.get(self.next).copied().unwrap_or(Shot::Miss);
        self.next += 1;
        shot
    }
}
