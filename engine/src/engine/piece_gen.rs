// engine/src/engine/piece_gen.rs
#![forbid(unsafe_code)]

use std::fmt;

use rand::prelude::*;

use crate::engine::constants::TRAY_SIZE;
use crate::engine::shapes::{Shape, catalog};

/// Identity of a tray piece. Ids are monotonically assigned and never
/// reused; the counter survives `reset`, so an id stays unique for the
/// lifetime of its session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub u64);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{}", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub id: PieceId,
    pub shape: Shape,
}

/// Owner of the piece stream: the RNG drawing shapes from the catalog and
/// the id allocator. Seeded, so tray generation is deterministic in tests.
#[derive(Clone)]
pub struct PieceGen {
    rng: StdRng,
    next_id: u64,
}

impl PieceGen {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_id: 1,
        }
    }

    /// Wrap a known shape with a fresh id.
    pub fn mint(&mut self, shape: Shape) -> Piece {
        let id = PieceId(self.next_id);
        self.next_id += 1;
        Piece { id, shape }
    }

    /// Draw one piece, sampling the catalog uniformly with replacement.
    pub fn draw(&mut self) -> Piece {
        let shape = *catalog().choose(&mut self.rng).unwrap();
        self.mint(shape)
    }

    /// A full tray of fresh pieces.
    pub fn draw_tray(&mut self) -> Vec<Piece> {
        (0..TRAY_SIZE).map(|_| self.draw()).collect()
    }
}
