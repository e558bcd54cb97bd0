// engine/src/engine/session.rs
#![forbid(unsafe_code)]

use thiserror::Error;

use crate::engine::board::Board;
use crate::engine::constants::{CLEAR_UNIT_BONUS, SIZE};
use crate::engine::piece_gen::{Piece, PieceGen, PieceId};
use crate::engine::shapes::Shape;

/// Expected, recoverable rejections of session commands. Every rejection
/// leaves the session unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum TurnError {
    /// The referenced piece is not in the tray (stale id).
    #[error("piece {0} is not in the tray")]
    UnknownPiece(PieceId),
    /// The shape does not fit at the requested anchor (bounds or overlap).
    #[error("piece does not fit at the requested anchor")]
    IllegalPlacement,
    /// The session is in the terminal state; call `reset` to continue.
    #[error("game is over")]
    GameOver,
}

/// Outcome of an accepted placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub cells_placed: u32,
    pub units_cleared: u32,
    pub points_gained: u32,
    pub game_over_now: bool,
}

/// A placement command: tray piece + board anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub piece: PieceId,
    pub row: i32,
    pub col: i32,
}

/// Result of simulating one placement without touching session state.
#[derive(Clone, Copy, Debug)]
pub struct PlacementSim {
    pub board_after_place: Board,
    pub board_after_clear: Board,
    pub cells_placed: u32,
    pub units_cleared: u32,
    /// True iff the placement is invalid for (board, shape, anchor).
    pub invalid: bool,
}

impl PlacementSim {
    fn rejected(board: &Board) -> Self {
        Self {
            board_after_place: *board,
            board_after_clear: *board,
            cells_placed: 0,
            units_cleared: 0,
            invalid: true,
        }
    }

    /// Score delta this placement would earn. Zero if `invalid`.
    pub fn points_gained(&self) -> u32 {
        score_delta(self.cells_placed, self.units_cleared)
    }
}

/// Score delta for one turn: one point per placed cell plus a fixed bonus
/// per cleared unit. Clearing never changes the placed-cell term.
#[inline]
pub fn score_delta(cells_placed: u32, units_cleared: u32) -> u32 {
    cells_placed + CLEAR_UNIT_BONUS * units_cleared
}

/// One game of the 9x9 block puzzle: board, tray, score, and the
/// Active -> GameOver state machine.
///
/// All mutation goes through the command methods; the presentation layer
/// reads through the accessor queries and never mutates state directly.
/// Commands run to completion synchronously, so a caller on a concurrent
/// platform must serialize them through a single owner.
#[derive(Clone)]
pub struct GameSession {
    board: Board,
    tray: Vec<Piece>,
    piece_gen: PieceGen,
    score: u64,
    turns: u64,
    selected: Option<PieceId>,
    game_over: bool,
}

impl GameSession {
    /// Fresh game: empty board, tray of 3 random pieces.
    pub fn new(seed: u64) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Start from a preset board with a randomly drawn tray (warm start).
    pub fn with_board(seed: u64, board: Board) -> Self {
        let mut piece_gen = PieceGen::new(seed);
        let tray = piece_gen.draw_tray();
        Self {
            board,
            tray,
            piece_gen,
            score: 0,
            turns: 0,
            selected: None,
            game_over: false,
        }
    }

    /// Start from a preset board and tray shapes; ids are minted by the
    /// session's allocator in slot order. Refills after the preset tray is
    /// consumed come from the seeded generator.
    pub fn with_state(seed: u64, board: Board, tray_shapes: &[Shape]) -> Self {
        let mut piece_gen = PieceGen::new(seed);
        let tray = tray_shapes.iter().map(|&s| piece_gen.mint(s)).collect();
        Self {
            board,
            tray,
            piece_gen,
            score: 0,
            turns: 0,
            selected: None,
            game_over: false,
        }
    }

    // -------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn tray(&self) -> &[Piece] {
        &self.tray
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Placements accepted since the last reset.
    pub fn turns(&self) -> u64 {
        self.turns
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn selected_piece(&self) -> Option<PieceId> {
        self.selected
    }

    fn tray_shapes(&self) -> impl Iterator<Item = Shape> + '_ {
        self.tray.iter().map(|p| p.shape)
    }

    /// Every legal (piece, anchor) command on the current state. Brute force,
    /// bounded by each shape's extent.
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for p in &self.tray {
            for r in 0..=(SIZE as i32 - p.shape.rows()) {
                for c in 0..=(SIZE as i32 - p.shape.cols()) {
                    if self.board.can_place(p.shape, r, c) {
                        moves.push(Move {
                            piece: p.id,
                            row: r,
                            col: c,
                        });
                    }
                }
            }
        }
        moves
    }

    // -------------------------------------------------------------------
    // Commands
    // -------------------------------------------------------------------

    /// Toggle selection of a tray piece: selecting the selected piece again
    /// deselects it. Board and score are untouched.
    pub fn select_piece(&mut self, piece: PieceId) -> Result<(), TurnError> {
        if self.game_over {
            return Err(TurnError::GameOver);
        }
        if !self.tray.iter().any(|p| p.id == piece) {
            return Err(TurnError::UnknownPiece(piece));
        }
        self.selected = if self.selected == Some(piece) {
            None
        } else {
            Some(piece)
        };
        Ok(())
    }

    pub fn deselect_piece(&mut self) {
        self.selected = None;
    }

    /// The full placement transaction: resolve, validate, place, clear,
    /// score, consume the piece, refill an empty tray, re-evaluate the
    /// terminal state. Either applies completely or rejects with no state
    /// change.
    pub fn attempt_placement(
        &mut self,
        piece: PieceId,
        row: i32,
        col: i32,
    ) -> Result<TurnReport, TurnError> {
        if self.game_over {
            return Err(TurnError::GameOver);
        }
        let slot = self
            .tray
            .iter()
            .position(|p| p.id == piece)
            .ok_or(TurnError::UnknownPiece(piece))?;
        let shape = self.tray[slot].shape;
        if !self.board.can_place(shape, row, col) {
            return Err(TurnError::IllegalPlacement);
        }

        self.board.place(shape, row, col);
        let cells_placed = shape.cell_count() as u32;
        let units_cleared = self.board.clear_completed();

        let points_gained = score_delta(cells_placed, units_cleared);
        self.score += u64::from(points_gained);
        self.turns += 1;

        self.tray.remove(slot);
        // Refill before the terminal check: the fresh tray is what decides
        // whether the game continues.
        if self.tray.is_empty() {
            self.tray = self.piece_gen.draw_tray();
        }

        if !self.board.has_any_legal_placement(self.tray_shapes()) {
            self.game_over = true;
        }
        self.selected = None;

        Ok(TurnReport {
            cells_placed,
            units_cleared,
            points_gained,
            game_over_now: self.game_over,
        })
    }

    /// Re-initialize to a fresh game, from any state. The piece generator
    /// (RNG stream and id counter) carries over, so ids stay monotonic
    /// across games.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.tray = self.piece_gen.draw_tray();
        self.score = 0;
        self.turns = 0;
        self.selected = None;
        self.game_over = false;
    }

    // -------------------------------------------------------------------
    // Pure simulation kernel
    // -------------------------------------------------------------------

    /// Apply one placement to a board copy: place, then clear. Session state
    /// is not touched.
    pub fn simulate_placement(board: &Board, shape: Shape, row: i32, col: i32) -> PlacementSim {
        if !board.can_place(shape, row, col) {
            return PlacementSim::rejected(board);
        }
        let mut after_place = *board;
        after_place.place(shape, row, col);
        let mut after_clear = after_place;
        let units_cleared = after_clear.clear_completed();
        PlacementSim {
            board_after_place: after_place,
            board_after_clear: after_clear,
            cells_placed: shape.cell_count() as u32,
            units_cleared,
            invalid: false,
        }
    }

    /// Simulate a tray move against the current board. Unknown pieces
    /// simulate as invalid.
    pub fn simulate_move(&self, m: Move) -> PlacementSim {
        match self.tray.iter().find(|p| p.id == m.piece) {
            Some(p) => Self::simulate_placement(&self.board, p.shape, m.row, m.col),
            None => PlacementSim::rejected(&self.board),
        }
    }

    pub fn render_ascii(&self) -> String {
        let mut s = String::new();
        for r in 0..SIZE {
            if r % 3 == 0 {
                s.push_str("+---+---+---+\n");
            }
            for c in 0..SIZE {
                if c % 3 == 0 {
                    s.push('|');
                }
                s.push(if self.board.get(r, c) { '#' } else { '.' });
            }
            s.push_str("|\n");
        }
        s.push_str("+---+---+---+\n");
        let tray_sizes: Vec<usize> = self.tray.iter().map(|p| p.shape.cell_count()).collect();
        s.push_str(&format!(
            "score={} turns={} tray={:?} over={}\n",
            self.score, self.turns, tray_sizes, self.game_over
        ));
        s
    }
}
