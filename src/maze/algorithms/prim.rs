use hashbrown::HashSet;
use rand::{seq::SliceRandom as _, Rng as _};
use smallvec::SmallVec;

use super::{MazeGenerator, Random};
use crate::{
    dims::Dims,
    error::GenerationError,
    maze::{CellKind, Maze},
};

/// Randomized Prim's algorithm.
///
/// The maze grows from a single random cell. A border set holds the wall
/// cells adjacent to the carved part; each round one random border cell is
/// carved and linked to one random already-carved neighbor, so every cell
/// enters the maze through exactly one edge and the result is a spanning
/// tree.
#[derive(Debug)]
pub struct Prim;

impl MazeGenerator for Prim {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Maze, GenerationError> {
        let mut maze = Maze::new(size)?;
        let mut border: HashSet<Dims> = HashSet::new();

        border.insert(random_cell(size, rng));

        while !border.is_empty() {
            let current = random_member(&border, rng);
            maze.cell_mut(current).kind = CellKind::random_passage(rng);

            // Only the very first carved cell has no carved neighbor yet.
            let carved: SmallVec<[Dims; 4]> = maze
                .neighbor_positions(current)
                .into_iter()
                .filter(|&pos| !maze.cell(pos).kind().is_wall())
                .collect();
            if let Some(&previous) = carved.choose(rng) {
                maze.link(current, previous);
            }

            for pos in maze.neighbor_positions(current) {
                if maze.cell(pos).kind().is_wall() {
                    border.insert(pos);
                }
            }
            border.remove(&current);
        }

        log::debug!("prim: carved {}x{} maze", size.0, size.1);

        Ok(maze)
    }
}

pub(super) fn random_cell(size: Dims, rng: &mut Random) -> Dims {
    Dims(rng.gen_range(0..size.0), rng.gen_range(0..size.1))
}

pub(super) fn random_member(set: &HashSet<Dims>, rng: &mut Random) -> Dims {
    let nth = rng.gen_range(0..set.len());
    *set.iter().nth(nth).unwrap()
}
