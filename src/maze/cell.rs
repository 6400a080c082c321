use rand::seq::SliceRandom as _;

use super::algorithms::Random;
use crate::dims::Dims;

/// Kind of a maze cell, ordered by ascending traversal cost.
///
/// Only passage kinds carry a meaningful weight; walls are impassable and
/// never linked to anything. Presentation-only markers (start, end, cells on
/// the found path) are deliberately not part of this enum — they belong to
/// the renderer's overlay, which works on its own copy of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    LightedPass,
    Pass,
}

impl CellKind {
    /// Traversal cost of the cell, as consumed by the distance-based solvers.
    pub fn weight(self) -> u64 {
        match self {
            CellKind::Wall => 0,
            CellKind::LightedPass => 1,
            CellKind::Pass => 2,
        }
    }

    pub fn is_wall(self) -> bool {
        matches!(self, CellKind::Wall)
    }

    /// Uniformly random passage kind; the generators use this to give freshly
    /// carved cells some weight diversity.
    pub(crate) fn random_passage(rng: &mut Random) -> CellKind {
        *[CellKind::LightedPass, CellKind::Pass]
            .choose(rng)
            .unwrap()
    }
}

/// A single maze cell: its kind and the coordinates of the cells a passage
/// leads to. Transitions are undirected — whenever `a` lists `b`, `b` lists
/// `a` as well.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub(crate) kind: CellKind,
    pub(crate) transitions: Vec<Dims>,
}

impl Cell {
    pub(crate) fn new() -> Cell {
        Cell {
            kind: CellKind::Wall,
            transitions: Vec::new(),
        }
    }

    pub fn kind(&self) -> CellKind {
        self.kind
    }

    pub fn transitions(&self) -> &[Dims] {
        &self.transitions
    }
}
