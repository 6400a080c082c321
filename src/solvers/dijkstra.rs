use hashbrown::HashMap;

use super::{
    heap::{Heap, Item},
    predecessors::{restore_path, Predecessors},
    Solver,
};
use crate::{dims::Dims, maze::Maze};

/// Distance of a cell the search has not reached yet.
const INF: u64 = u64::MAX;

/// Dijkstra's algorithm over cell weights.
///
/// A neighbor is relaxed only while its distance is still [`INF`]; once set
/// it is never improved. With non-negative weights the heap pops distances in
/// non-decreasing order, so the first recorded distance is already final and
/// the search stays optimal. It also short-circuits as soon as `end` pops.
#[derive(Debug)]
pub struct Dijkstra;

impl Solver for Dijkstra {
    fn solve(&self, maze: &Maze, start: Dims, end: Dims) -> Vec<Dims> {
        let mut dist: HashMap<Dims, u64> = Dims::iter_fill(Dims::ZERO, maze.size())
            .map(|pos| (pos, INF))
            .collect();
        let mut predecessors = Predecessors::new(maze.size());
        let mut heap = Heap::new();

        let weight = maze.cell(start).kind().weight();
        dist.insert(start, weight);
        heap.push(Item {
            vertex: start,
            weight,
        });

        while !heap.is_empty() {
            let current = heap.pop().vertex;
            if current == end {
                break;
            }

            for &next in maze.cell(current).transitions() {
                if dist[&next] == INF {
                    let next_dist = dist[&current] + maze.cell(next).kind().weight();
                    dist.insert(next, next_dist);
                    heap.push(Item {
                        vertex: next,
                        weight: next_dist,
                    });
                    predecessors.set(next, current);
                }
            }
        }

        restore_path(start, end, &predecessors)
    }
}
