// engine/src/policy/random.rs
#![forbid(unsafe_code)]

use rand::prelude::*;

use crate::engine::{GameSession, Move};
use crate::policy::base::Policy;

/// Uniform random choice over the legal moves. Keeps its own RNG stream so
/// rollouts stay reproducible per seed.
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn choose_move(&mut self, s: &GameSession) -> Option<Move> {
        s.legal_moves().choose(&mut self.rng).copied()
    }
}
