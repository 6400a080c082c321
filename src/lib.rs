//! Core of a maze game: generation of perfect mazes and path finding over
//! them. Everything UI-related (rendering, prompts, configuration) lives in
//! the consuming application; this crate only hands out [`Maze`] values and
//! paths between cells.

pub mod dims;
pub mod error;
pub mod maze;
pub mod solvers;

pub use dims::Dims;
pub use error::GenerationError;
pub use maze::{
    algorithms::{generate, GeneratorKind, MazeGenerator, Random},
    Cell, CellKind, Maze,
};
pub use solvers::{solve, Solver, SolverKind};
