// engine/src/lib.rs
#![forbid(unsafe_code)]

pub mod engine;
pub mod policy;

// Re-export the bits presentation layers and the CLI need:
pub use engine::{
    Board, CLEAR_UNIT_BONUS, FULL_ROW, GameSession, Move, Piece, PieceGen, PieceId, PlacementSim,
    SIZE, Shape, TRAY_SIZE, TurnError, TurnReport, UnitSet, catalog, score_delta,
};
pub use policy::{GreedyPolicy, Policy, RandomPolicy};
