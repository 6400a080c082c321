pub mod algorithms;
pub mod cell;
mod maze;

pub use cell::{Cell, CellKind};
pub use maze::Maze;
