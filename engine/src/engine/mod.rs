// engine/src/engine/mod.rs
#![forbid(unsafe_code)]

mod board;
mod constants;
mod piece_gen;
mod session;
mod shapes;

/**
 * Public engine surface.
 *
 * The implementation modules stay private; everything a consumer may rely
 * on is re-exported from here.
 */
pub use board::{Board, UnitSet};
pub use constants::{BOX, BOXES, CLEAR_UNIT_BONUS, FULL_ROW, SIZE, TRAY_SIZE, box_of, box_origin};
pub use piece_gen::{Piece, PieceGen, PieceId};
pub use session::{GameSession, Move, PlacementSim, TurnError, TurnReport, score_delta};
pub use shapes::{Shape, catalog};
