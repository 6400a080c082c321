use hashbrown::HashSet;

use super::{
    heap::{Heap, Item},
    predecessors::{restore_path, Predecessors},
    Solver,
};
use crate::{dims::Dims, maze::Maze};

/// Depth-first search that dives into the cheapest-looking neighbor first.
///
/// At every cell the unvisited transition-neighbors are ranked by their own
/// weight through a local min-heap, so the search greedily prefers lighted
/// passes. The first path that reaches the target wins and the search stops —
/// the result is *a* path biased toward locally cheap cells, not the
/// minimum-weight path. Runs on an explicit work stack; native recursion
/// would grow with the number of reachable cells.
#[derive(Debug)]
pub struct HeapDfs;

impl Solver for HeapDfs {
    fn solve(&self, maze: &Maze, start: Dims, end: Dims) -> Vec<Dims> {
        let mut predecessors = Predecessors::new(maze.size());
        let mut visited = HashSet::new();
        let mut stack = vec![start];
        visited.insert(start);

        while let Some(current) = stack.pop() {
            if current == end {
                break;
            }

            let mut local = Heap::new();
            for &next in maze.cell(current).transitions() {
                if !visited.contains(&next) {
                    local.push(Item {
                        vertex: next,
                        weight: maze.cell(next).kind().weight(),
                    });
                }
            }

            // Pop yields ascending weights; pushing in reverse leaves the
            // cheapest neighbor on top of the work stack.
            let mut ordered = Vec::with_capacity(local.len());
            while !local.is_empty() {
                ordered.push(local.pop().vertex);
            }
            for &next in ordered.iter().rev() {
                visited.insert(next);
                predecessors.set(next, current);
                stack.push(next);
            }
        }

        restore_path(start, end, &predecessors)
    }
}
