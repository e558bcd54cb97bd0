// engine/tests/engine_invariants_prop.rs
#![forbid(unsafe_code)]

/**
 * Property/invariant tests for the placement transaction.
 *
 * Purpose:
 * - Provide fuzz-like coverage using generated seeds and rollout lengths.
 * - Lock core invariants that must hold regardless of how moves are chosen.
 *
 * Invariants covered:
 * - `legal_moves` and `can_place` describe the same move set.
 * - `simulate_move` agrees with `attempt_placement` on the resulting board,
 *   cleared-unit count, and score delta.
 * - Score is monotonic and exactly the sum of per-turn deltas.
 * - The tray holds exactly 3 pieces after every accepted placement.
 * - No complete unit survives a placement transaction.
 * - Identical seeds produce identical tray streams.
 * - `can_place` equals the naive in-bounds-and-empty cell scan.
 */
use std::collections::HashSet;

use proptest::prelude::*;

use woodgrid_engine::{GameSession, Move, SIZE, TRAY_SIZE, catalog};

fn rollout(seed: u64, steps: usize) -> GameSession {
    let mut s = GameSession::new(seed);
    for i in 0..steps {
        if s.is_game_over() {
            break;
        }
        let moves = s.legal_moves();
        if moves.is_empty() {
            break;
        }
        let m = moves[(i * 7) % moves.len()];
        s.attempt_placement(m.piece, m.row, m.col).unwrap();
    }
    s
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn seeded_rollouts_preserve_core_invariants(
        seed in 0u64..1_000_000,
        steps in 1usize..100,
    ) {
        let mut s = GameSession::new(seed);
        let mut prev_score = 0u64;

        for i in 0..steps {
            if s.is_game_over() {
                break;
            }

            let moves = s.legal_moves();
            if moves.is_empty() {
                break;
            }

            // Every listed move is placeable where it claims to be.
            for m in &moves {
                let piece = s.tray().iter().find(|p| p.id == m.piece).unwrap();
                prop_assert!(s.board().can_place(piece.shape, m.row, m.col));
            }

            let m = moves[i % moves.len()];
            let sim = s.simulate_move(m);
            prop_assert!(!sim.invalid);

            let r = s.attempt_placement(m.piece, m.row, m.col).unwrap();

            // Simulation parity.
            prop_assert_eq!(r.units_cleared, sim.units_cleared);
            prop_assert_eq!(r.cells_placed, sim.cells_placed);
            prop_assert_eq!(r.points_gained, sim.points_gained());
            prop_assert_eq!(*s.board(), sim.board_after_clear);

            // Score accounting.
            prop_assert_eq!(s.score(), prev_score + u64::from(r.points_gained));
            prev_score = s.score();

            // Tray invariant and post-clear quiescence.
            prop_assert_eq!(s.tray().len(), TRAY_SIZE);
            prop_assert!(s.board().complete_units().is_empty());
            prop_assert_eq!(r.game_over_now, s.is_game_over());
        }
    }

    #[test]
    fn legal_moves_is_exactly_the_can_place_set(
        seed in 0u64..1_000_000,
        steps in 0usize..60,
    ) {
        let s = rollout(seed, steps);
        let listed: HashSet<Move> = s.legal_moves().into_iter().collect();

        for piece in s.tray() {
            for r in 0..SIZE as i32 {
                for c in 0..SIZE as i32 {
                    let m = Move { piece: piece.id, row: r, col: c };
                    prop_assert_eq!(
                        listed.contains(&m),
                        s.board().can_place(piece.shape, r, c)
                    );
                }
            }
        }
    }

    #[test]
    fn same_seed_yields_same_tray_stream(seed in 0u64..1_000_000) {
        let a = GameSession::new(seed);
        let b = GameSession::new(seed);
        prop_assert_eq!(a.tray(), b.tray());
    }

    #[test]
    fn can_place_agrees_with_naive_cell_scan(
        seed in 0u64..1_000_000,
        steps in 0usize..60,
        shape_idx in 0usize..23,
        row in -3i32..12,
        col in -3i32..12,
    ) {
        let s = rollout(seed, steps);
        let board = *s.board();
        let shape = catalog()[shape_idx];
        let cells = board.cells();

        let mut expected = true;
        for &(dr, dc) in shape.cells() {
            let r = row + dr;
            let c = col + dc;
            if r < 0 || r >= SIZE as i32 || c < 0 || c >= SIZE as i32 {
                expected = false;
                break;
            }
            if cells[r as usize][c as usize] {
                expected = false;
                break;
            }
        }

        prop_assert_eq!(board.can_place(shape, row, col), expected);
    }
}
