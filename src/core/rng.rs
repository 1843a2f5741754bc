//! Seeded randomness for simulated players.
//!
//! Each simulated player draws from a stream derived from one match seed,
//! so one player's draws never shift the other's and a seed replays the
//! same match shot for shot.
//!
//! ```
//! use pickleball_rules::core::{GameRng, Player};
//!
//! let match_rng = GameRng::new(42);
//! let mut server = match_rng.for_player(Player::Player1);
//! let mut replay = GameRng::new(42).for_player(Player::Player1);
//! assert_eq!(server.gen_bool(0.5), replay.gen_bool(0.5));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::{Hash, Hasher};

use super::player::Player;

/// ChaCha8 stream that remembers its seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one player of this match.
    ///
    /// `FxHasher` keeps derived seeds stable across Rust releases.
    #[must_use]
    pub fn for_player(&self, player: Player) -> Self {
        let mut hasher = FxHasher::default();
        (self.seed, player.number()).hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// True with `probability`, clamped to [0, 1]. NaN counts as 0.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        let p = if probability.is_nan() { 0.0 } else { probability.clamp(0.0, 1.0) };
        self.inner.gen_bool(p)
    }

    /// Uniform pick, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, options: &'a [T]) -> Option<&'a T> {
        options.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = GameRng::new(2024);
        let mut b = GameRng::new(2024);
        let draws_a: Vec<bool> = (0..64).map(|_| a.gen_bool(0.3)).collect();
        let draws_b: Vec<bool> = (0..64).map(|_| b.gen_bool(0.3)).collect();
        assert_eq!(draws_a, draws_b);
    }

    #[test]
    fn test_player_streams_are_independent() {
        let rng = GameRng::new(42);
        let mut p1 = rng.for_player(Player::Player1);
        let mut p2 = rng.for_player(Player::Player2);

        assert_ne!(p1.seed(), p2.seed());
        let seq1: Vec<bool> = (0..64).map(|_| p1.gen_bool(0.5)).collect();
        let seq2: Vec<bool> = (0..64).map(|_| p2.gen_bool(0.5)).collect();
        assert_ne!(seq1, seq2);

        assert_eq!(
            GameRng::new(42).for_player(Player::Player2).seed(),
            rng.for_player(Player::Player2).seed()
        );
    }

    #[test]
    fn test_gen_bool_clamps() {
        let mut rng = GameRng::new(1);
        for _ in 0..20 {
            assert!(rng.gen_bool(1.5));
            assert!(!rng.gen_bool(-0.5));
            assert!(!rng.gen_bool(f64::NAN));
        }
    }

    #[test]
    fn test_choose_zone() {
        use crate::zones::CourtZone;

        let mut rng = GameRng::new(9);
        let picked = rng.choose(&CourtZone::IN_BOUNDS).copied();
        assert!(picked.is_some_and(|zone| zone != CourtZone::OutOfBounds));

        let none: [CourtZone; 0] = [];
        assert!(rng.choose(&none).is_none());
    }
}
