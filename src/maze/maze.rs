use hashbrown::HashMap;
use smallvec::SmallVec;

use super::cell::Cell;
use crate::{dims::Dims, error::GenerationError};

/// The maze board: one [`Cell`] per coordinate in `[0, width) × [0, height)`.
///
/// A fresh maze is all walls; the generators carve it into a spanning tree of
/// passages (exactly one path between any two passage cells). Solvers only
/// ever read it.
#[derive(Debug, Clone)]
pub struct Maze {
    pub(crate) cells: HashMap<Dims, Cell>,
    size: Dims,
}

impl Maze {
    pub fn new(size: Dims) -> Result<Self, GenerationError> {
        if !size.all_positive() {
            return Err(GenerationError::InvalidSize(size));
        }

        let cells = Dims::iter_fill(Dims::ZERO, size)
            .map(|pos| (pos, Cell::new()))
            .collect();

        Ok(Maze { cells, size })
    }

    pub fn size(&self) -> Dims {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.0
    }

    pub fn height(&self) -> i32 {
        self.size.1
    }

    pub fn is_in_bounds(&self, pos: Dims) -> bool {
        0 <= pos.0 && pos.0 < self.size.0 && 0 <= pos.1 && pos.1 < self.size.1
    }

    /// Panics when `pos` is outside the maze; passing such coordinates is a
    /// caller bug, not a runtime condition.
    pub fn cell(&self, pos: Dims) -> &Cell {
        self.cells
            .get(&pos)
            .unwrap_or_else(|| panic!("cell position out of bounds: {:?}", pos))
    }

    pub(crate) fn cell_mut(&mut self, pos: Dims) -> &mut Cell {
        self.cells
            .get_mut(&pos)
            .unwrap_or_else(|| panic!("cell position out of bounds: {:?}", pos))
    }

    /// Read access for the rendering side.
    pub fn cells(&self) -> &HashMap<Dims, Cell> {
        &self.cells
    }

    /// In-bounds 4-directional neighbors of `pos`, whether walls or passages.
    pub fn neighbor_positions(&self, pos: Dims) -> SmallVec<[Dims; 4]> {
        Dims::CARDINALS
            .iter()
            .map(|&off| pos + off)
            .filter(|&next| self.is_in_bounds(next))
            .collect()
    }

    /// Records an undirected passage between two adjacent cells.
    pub(crate) fn link(&mut self, a: Dims, b: Dims) {
        debug_assert!(Dims::CARDINALS.contains(&(b - a)), "cells are not adjacent");

        self.cell_mut(a).transitions.push(b);
        self.cell_mut(b).transitions.push(a);
    }
}

#[cfg(test)]
mod tests {
    use super::Maze;
    use crate::dims::Dims;

    #[test]
    fn new_maze_is_all_walls() {
        let maze = Maze::new(Dims(4, 3)).unwrap();

        assert_eq!(maze.size(), Dims(4, 3));
        assert_eq!(maze.cells().len(), 12);
        for pos in Dims::iter_fill(Dims::ZERO, maze.size()) {
            assert!(maze.cell(pos).kind().is_wall());
            assert!(maze.cell(pos).transitions().is_empty());
        }
    }

    #[test]
    fn rejects_non_positive_sizes() {
        assert!(Maze::new(Dims(0, 3)).is_err());
        assert!(Maze::new(Dims(3, 0)).is_err());
        assert!(Maze::new(Dims(-1, 2)).is_err());
    }

    #[test]
    fn bounds() {
        let maze = Maze::new(Dims(2, 2)).unwrap();

        assert!(maze.is_in_bounds(Dims(0, 0)));
        assert!(maze.is_in_bounds(Dims(1, 1)));
        assert!(!maze.is_in_bounds(Dims(2, 0)));
        assert!(!maze.is_in_bounds(Dims(0, -1)));
    }

    #[test]
    fn link_is_undirected() {
        let mut maze = Maze::new(Dims(2, 1)).unwrap();
        maze.link(Dims(0, 0), Dims(1, 0));

        assert_eq!(maze.cell(Dims(0, 0)).transitions(), &[Dims(1, 0)]);
        assert_eq!(maze.cell(Dims(1, 0)).transitions(), &[Dims(0, 0)]);
    }

    #[test]
    fn corner_has_two_neighbors() {
        let maze = Maze::new(Dims(3, 3)).unwrap();

        assert_eq!(maze.neighbor_positions(Dims(0, 0)).len(), 2);
        assert_eq!(maze.neighbor_positions(Dims(1, 1)).len(), 4);
    }
}
