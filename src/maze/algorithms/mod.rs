mod prim;
mod wilson;

use rand::{rngs::OsRng, RngCore as _, SeedableRng as _};

use crate::{dims::Dims, error::GenerationError, maze::Maze};

pub use prim::Prim;
pub use wilson::Wilson;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// A maze generation algorithm. Implementations carve a perfect maze (a
/// spanning tree over all cells) into a fresh all-wall board, drawing every
/// random choice from the injected `rng`.
pub trait MazeGenerator {
    fn generate(&self, size: Dims, rng: &mut Random) -> Result<Maze, GenerationError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    Prim,
    Wilson,
}

impl GeneratorKind {
    /// Resolves a configuration name; unknown names fall back to Prim.
    pub fn from_name(name: &str) -> Self {
        match name {
            "prim" => Self::Prim,
            "wilson" => Self::Wilson,
            other => {
                log::warn!("unknown generator kind '{other}', using prim");
                Self::Prim
            }
        }
    }
}

/// Generates a maze of the given size with the chosen algorithm.
///
/// With `seed: None` the generator is seeded from the operating system's
/// entropy source; a fixed seed reproduces the same sequence of random draws.
/// On error no partial maze is returned.
pub fn generate(
    kind: GeneratorKind,
    size: Dims,
    seed: Option<u64>,
) -> Result<Maze, GenerationError> {
    let mut rng = seed_rng(seed)?;

    match kind {
        GeneratorKind::Prim => Prim.generate(size, &mut rng),
        GeneratorKind::Wilson => Wilson.generate(size, &mut rng),
    }
}

fn seed_rng(seed: Option<u64>) -> Result<Random, GenerationError> {
    let seed = match seed {
        Some(seed) => seed,
        None => {
            let mut bytes = [0u8; 8];
            OsRng.try_fill_bytes(&mut bytes)?;
            u64::from_le_bytes(bytes)
        }
    };

    Ok(Random::seed_from_u64(seed))
}

/// Checks the perfect-maze invariants: every cell carved, transitions
/// symmetric and adjacent, edge count one less than the cell count, and a
/// single connected component.
#[cfg(test)]
pub(crate) fn assert_perfect_maze(maze: &Maze) {
    use hashbrown::HashSet;

    let size = maze.size();
    let cell_count = size.product() as usize;

    let mut edge_ends = 0usize;
    for pos in Dims::iter_fill(Dims::ZERO, size) {
        let cell = maze.cell(pos);
        assert!(!cell.kind().is_wall(), "wall left at {:?}", pos);

        for &next in cell.transitions() {
            assert!(maze.is_in_bounds(next), "transition out of bounds at {:?}", pos);
            assert!(
                Dims::CARDINALS.contains(&(next - pos)),
                "transition {:?} -> {:?} is not adjacent",
                pos,
                next
            );
            assert!(
                maze.cell(next).transitions().contains(&pos),
                "transition {:?} -> {:?} is one-directional",
                pos,
                next
            );
        }
        edge_ends += cell.transitions().len();
    }
    assert_eq!(edge_ends % 2, 0);
    assert_eq!(edge_ends / 2, cell_count - 1, "not a spanning tree");

    let mut visited = HashSet::new();
    let mut stack = vec![Dims::ZERO];
    visited.insert(Dims::ZERO);
    while let Some(pos) = stack.pop() {
        for &next in maze.cell(pos).transitions() {
            if visited.insert(next) {
                stack.push(next);
            }
        }
    }
    assert_eq!(visited.len(), cell_count, "maze is not connected");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_name() {
        assert_eq!(GeneratorKind::from_name("prim"), GeneratorKind::Prim);
        assert_eq!(GeneratorKind::from_name("wilson"), GeneratorKind::Wilson);
        assert_eq!(GeneratorKind::from_name("bogus"), GeneratorKind::Prim);
    }

    #[test]
    fn generate_dispatches_both_kinds() {
        for kind in [GeneratorKind::Prim, GeneratorKind::Wilson] {
            let maze = generate(kind, Dims(6, 5), Some(42)).unwrap();
            assert_perfect_maze(&maze);
        }
    }

    #[test]
    fn generate_rejects_invalid_size() {
        assert!(generate(GeneratorKind::Prim, Dims(0, 4), Some(1)).is_err());
        assert!(generate(GeneratorKind::Wilson, Dims(4, -2), Some(1)).is_err());
    }

    #[test]
    fn os_seeding_works() {
        let maze = generate(GeneratorKind::Prim, Dims(3, 3), None).unwrap();
        assert_perfect_maze(&maze);
    }
}
