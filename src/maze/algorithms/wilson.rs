use hashbrown::{HashMap, HashSet};
use rand::seq::SliceRandom as _;

use super::{
    prim::{random_cell, random_member},
    MazeGenerator, Random,
};
use crate::{
    dims::Dims,
    error::GenerationError,
    maze::{CellKind, Maze},
};

/// Wilson's algorithm (loop-erased random walks).
///
/// One random cell seeds the maze; then, while unvisited cells remain, a
/// random walk starts from a random unvisited cell and runs until it touches
/// the maze. Whenever the walk revisits one of its own cells the whole walk
/// so far is erased and it restarts from the same cell, so the committed walk
/// is always a simple path. This samples uniformly over all spanning trees of
/// the grid, at a higher expected cost than Prim's.
#[derive(Debug)]
pub struct Wilson;

impl MazeGenerator for Wilson {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Maze, GenerationError> {
        let mut maze = Maze::new(size)?;
        let mut unvisited: HashSet<Dims> = Dims::iter_fill(Dims::ZERO, size).collect();

        let seed = random_cell(size, rng);
        maze.cell_mut(seed).kind = CellKind::random_passage(rng);
        unvisited.remove(&seed);

        // Transient per-walk state: cell -> cells the walk stepped to/from.
        let mut wandering: HashMap<Dims, Vec<Dims>> = HashMap::new();

        while !unvisited.is_empty() {
            wander(&maze, &unvisited, &mut wandering, rng);
            commit_wandering(&mut maze, &mut unvisited, &mut wandering, rng);
        }

        log::debug!("wilson: carved {}x{} maze", size.0, size.1);

        Ok(maze)
    }
}

/// Randomly walks from an unvisited cell until the walk reaches any cell that
/// already belongs to the maze, recording each step's edge in `wandering`.
fn wander(
    maze: &Maze,
    unvisited: &HashSet<Dims>,
    wandering: &mut HashMap<Dims, Vec<Dims>>,
    rng: &mut Random,
) {
    let start = random_member(unvisited, rng);
    let mut previous = start;
    let mut outside_maze = unvisited.contains(&start);

    while outside_maze {
        let current = random_neighbor(maze, previous, rng);

        if !wandering.contains_key(&current) {
            wandering.entry(current).or_default().push(previous);
            wandering.entry(previous).or_default().push(current);
            previous = current;
        } else {
            // Loop detected: erase the walk and start over from the same cell.
            wandering.clear();
            previous = start;
        }

        outside_maze = unvisited.contains(&current);
    }
}

/// Carves every cell the walk passed through and appends the recorded edges.
fn commit_wandering(
    maze: &mut Maze,
    unvisited: &mut HashSet<Dims>,
    wandering: &mut HashMap<Dims, Vec<Dims>>,
    rng: &mut Random,
) {
    for (pos, transitions) in wandering.drain() {
        let cell = maze.cell_mut(pos);
        cell.kind = CellKind::random_passage(rng);
        cell.transitions.extend(transitions);
        unvisited.remove(&pos);
    }
}

fn random_neighbor(maze: &Maze, pos: Dims, rng: &mut Random) -> Dims {
    *maze.neighbor_positions(pos).choose(rng).unwrap()
}
