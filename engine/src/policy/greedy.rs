// engine/src/policy/greedy.rs
#![forbid(unsafe_code)]

use crate::engine::{GameSession, Move};
use crate::policy::base::Policy;

/// One-ply greedy: maximize the points this placement earns, breaking ties
/// toward the emptier post-clear board, then toward the earliest move in
/// tray/scan order.
#[derive(Default)]
pub struct GreedyPolicy;

impl GreedyPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Policy for GreedyPolicy {
    fn choose_move(&mut self, s: &GameSession) -> Option<Move> {
        let mut best: Option<(u32, u32, Move)> = None;
        for m in s.legal_moves() {
            let sim = s.simulate_move(m);
            debug_assert!(!sim.invalid);
            let points = sim.points_gained();
            let filled_after = sim.board_after_clear.filled_cells();
            let better = match best {
                None => true,
                Some((best_points, best_filled, _)) => {
                    points > best_points || (points == best_points && filled_after < best_filled)
                }
            };
            if better {
                best = Some((points, filled_after, m));
            }
        }
        best.map(|(_, _, m)| m)
    }
}
