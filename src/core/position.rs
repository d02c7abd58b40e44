//! Board geometry: positions and line directions.
//!
//! The board is 6 rows by 7 columns. Row 0 is the **top** row; tokens
//! fall toward row 5. Positions are validated at construction, so a
//! `CellPos` always refers to a real cell.

use serde::{Deserialize, Serialize};

/// Number of rows (board height).
pub const ROWS: usize = 6;

/// Number of columns (board width).
pub const COLS: usize = 7;

/// Run length required to win.
pub const WIN_SEQ_LENGTH: usize = 4;

/// A cell position on the board.
///
/// ```
/// use quantum_connect::CellPos;
///
/// let pos = CellPos::new(5, 3).unwrap();
/// assert_eq!(pos.row(), 5);
/// assert_eq!(pos.col(), 3);
///
/// assert!(CellPos::new(6, 0).is_none()); // row out of range
/// assert!(CellPos::new(0, 7).is_none()); // column out of range
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellPos {
    row: usize,
    col: usize,
}

impl CellPos {
    /// Create a position, or `None` if out of bounds.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < ROWS && col < COLS {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Row index (0 = top).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Column index (0 = leftmost).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Step one cell along `direction`, scaled by `sign` (+1 or -1).
    ///
    /// Returns `None` when the step leaves the board.
    #[must_use]
    pub fn step(self, direction: Direction, sign: i32) -> Option<Self> {
        let (d_row, d_col) = direction.delta();
        let row = self.row as i32 + d_row * sign;
        let col = self.col as i32 + d_col * sign;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Iterate over every position on the board, row-major from the top.
    pub fn all() -> impl Iterator<Item = CellPos> {
        (0..ROWS).flat_map(|row| (0..COLS).map(move |col| CellPos { row, col }))
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four line directions a winning run can lie along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Horizontal, along a row.
    Row,
    /// Vertical, along a column.
    Column,
    /// Diagonal toward the lower-right (Δrow = 1, Δcol = 1).
    SlopeUp,
    /// Diagonal toward the lower-left (Δrow = 1, Δcol = -1).
    SlopeDown,
}

impl Direction {
    /// All four directions, in check order.
    pub const ALL: [Direction; 4] = [
        Direction::Row,
        Direction::Column,
        Direction::SlopeUp,
        Direction::SlopeDown,
    ];

    /// The `(Δrow, Δcol)` unit step for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Row => (0, 1),
            Direction::Column => (1, 0),
            Direction::SlopeUp => (1, 1),
            Direction::SlopeDown => (1, -1),
        }
    }
}
