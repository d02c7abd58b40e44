//! Board state: cell lifecycle and the 6×7 grid.

pub mod cell;
pub mod grid;

pub use cell::{Cell, CellState};
pub use grid::Board;
