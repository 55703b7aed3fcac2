pub mod board;
pub mod constants;
pub mod grid;

pub use board::{Board, Tile, Wires};
pub use grid::{Direction, Position};
