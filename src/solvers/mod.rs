mod depth_first_search;
mod dijkstra;
pub mod heap;
pub mod predecessors;

use crate::{dims::Dims, maze::Maze};

pub use depth_first_search::HeapDfs;
pub use dijkstra::Dijkstra;

/// A path finding algorithm over a generated maze.
pub trait Solver {
    /// Returns the path from `start` to `end` in forward order, both
    /// inclusive, or an empty vec when the two are equal or `end` is not
    /// reachable. The maze is read-only; all scratch state lives and dies
    /// with the call.
    fn solve(&self, maze: &Maze, start: Dims, end: Dims) -> Vec<Dims>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverKind {
    Dijkstra,
    HeapDfs,
}

impl SolverKind {
    /// Resolves a configuration name; unknown names fall back to Dijkstra.
    pub fn from_name(name: &str) -> Self {
        match name {
            "dijkstra" => Self::Dijkstra,
            "mdfs" => Self::HeapDfs,
            other => {
                log::warn!("unknown solver kind '{other}', using dijkstra");
                Self::Dijkstra
            }
        }
    }
}

/// Finds a path between two cells with the chosen algorithm.
pub fn solve(kind: SolverKind, maze: &Maze, start: Dims, end: Dims) -> Vec<Dims> {
    assert!(
        maze.is_in_bounds(start) && maze.is_in_bounds(end),
        "start and end must lie inside the maze"
    );

    match kind {
        SolverKind::Dijkstra => Dijkstra.solve(maze, start, end),
        SolverKind::HeapDfs => HeapDfs.solve(maze, start, end),
    }
}
