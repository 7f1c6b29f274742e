//! **micromouse_maze** is the wall model of a micromouse simulator's maze: a rectangular grid of
//! cell walls that always keeps its outer border, with an ASCII text format to save and load it.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod maze;
pub mod maze_displays;
pub mod maze_parser;
pub mod units;

pub use crate::maze::{Maze, WallUpdate};
