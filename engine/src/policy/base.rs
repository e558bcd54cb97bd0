// engine/src/policy/base.rs
#![forbid(unsafe_code)]

use crate::engine::{GameSession, Move};

/// Move-selection strategy for self-play.
///
/// `None` means the state has no legal move. Object-safe, so the CLI can
/// hold a `Box<dyn Policy>` picked at runtime.
pub trait Policy {
    fn choose_move(&mut self, s: &GameSession) -> Option<Move>;
}
