//! The 6×7 grid and its bookkeeping.
//!
//! `Board` owns the cells, the live open-cell count, and the entangled
//! pair index (`PlacementId -> positions`). Queries are public; mutators
//! are crate-private because only the rules engine may change the board.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::cell::{Cell, CellState};
use crate::core::{CellPos, PlacementId, Player, COLS, ROWS};

/// Board state: grid, open-cell count, entangled pair index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Row-major cells, row 0 at the top.
    cells: [[Cell; COLS]; ROWS],

    /// Positions sharing each placement tag. Exactly two entries per
    /// placement once its turn is complete; the index persists after
    /// collapse so a pair stays discoverable for the life of the game.
    pairs: FxHashMap<PlacementId, SmallVec<[CellPos; 2]>>,

    /// Count of cells still `Open`. Starts at 42.
    open_count: usize,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [[Cell::open(); COLS]; ROWS],
            pairs: FxHashMap::default(),
            open_count: ROWS * COLS,
        }
    }

    // === Queries ===

    /// The cell at `pos`.
    #[must_use]
    pub fn cell(&self, pos: CellPos) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    /// The lifecycle state at `pos`.
    #[must_use]
    pub fn state(&self, pos: CellPos) -> CellState {
        self.cell(pos).state
    }

    /// The collapsed color at `pos`, if any.
    #[must_use]
    pub fn color(&self, pos: CellPos) -> Option<Player> {
        self.state(pos).color()
    }

    /// The lowest open cell of a column: where a dropped token lands.
    ///
    /// Scans top to bottom for the first occupied cell and returns the
    /// cell above it; an untouched column yields the bottom row. Returns
    /// `None` when the column is full or out of range.
    #[must_use]
    pub fn lowest_open_cell(&self, col: usize) -> Option<CellPos> {
        if col >= COLS {
            return None;
        }
        for row in 0..ROWS {
            if !self.cells[row][col].state.is_open() {
                return if row == 0 {
                    None
                } else {
                    CellPos::new(row - 1, col)
                };
            }
        }
        CellPos::new(ROWS - 1, col)
    }

    /// True iff no cell in `col` is open. Out-of-range columns count as full.
    #[must_use]
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        (0..ROWS).all(|row| !self.cells[row][col].state.is_open())
    }

    /// True iff no cell in `row` is open.
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        (0..COLS).all(|col| !self.cells[row][col].state.is_open())
    }

    /// True iff every cell carries a color. This is the tie predicate:
    /// "full" is judged at the color level, not mere occupancy.
    #[must_use]
    pub fn is_board_full(&self) -> bool {
        CellPos::all().all(|pos| self.color(pos).is_some())
    }

    /// Number of still-open cells.
    #[must_use]
    pub fn open_cells(&self) -> usize {
        self.open_count
    }

    /// True iff any cell is currently measurable.
    #[must_use]
    pub fn has_measurable(&self) -> bool {
        CellPos::all().any(|pos| self.state(pos).is_measurable())
    }

    /// The other cell sharing `pos`'s placement tag, via the pair index.
    ///
    /// `None` for open cells and for a first token whose partner has not
    /// been placed yet.
    #[must_use]
    pub fn entangled_partner(&self, pos: CellPos) -> Option<CellPos> {
        let placement = self.state(pos).placement()?;
        self.pairs
            .get(&placement)?
            .iter()
            .copied()
            .find(|&other| other != pos)
    }

    /// Both positions tagged with `placement`, in placement order.
    #[must_use]
    pub fn pair_positions(&self, placement: PlacementId) -> &[CellPos] {
        self.pairs.get(&placement).map_or(&[], |v| v.as_slice())
    }

    // === Mutators (rules engine only) ===

    /// Drop a token: `pos` must be open.
    pub(crate) fn place(&mut self, pos: CellPos, placement: PlacementId) {
        let cell = &mut self.cells[pos.row()][pos.col()];
        debug_assert!(cell.state.is_open(), "place on non-open cell {pos}");
        cell.state = CellState::Placed { placement };
        self.open_count -= 1;
        self.pairs.entry(placement).or_default().push(pos);
    }

    /// Promote placed cells to measurable along `pos`'s column and row,
    /// each only if it is now fully occupied.
    pub(crate) fn promote_measurable(&mut self, pos: CellPos) {
        if self.is_column_full(pos.col()) {
            for row in 0..ROWS {
                self.promote_cell(row, pos.col());
            }
        }
        if self.is_row_full(pos.row()) {
            for col in 0..COLS {
                self.promote_cell(pos.row(), col);
            }
        }
    }

    fn promote_cell(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row][col];
        if let CellState::Placed { placement } = cell.state {
            cell.state = CellState::Measurable { placement };
        }
    }

    /// Collapse the token at `pos` into `color`. `pos` must hold an
    /// uncollapsed token.
    pub(crate) fn collapse(&mut self, pos: CellPos, color: Player) {
        let cell = &mut self.cells[pos.row()][pos.col()];
        debug_assert!(
            cell.state.placement().is_some() && !cell.state.is_collapsed(),
            "collapse on cell {pos} in state {:?}",
            cell.state
        );
        if let Some(placement) = cell.state.placement() {
            cell.state = CellState::Collapsed { placement, color };
        }
    }

    /// Flag `pos` as part of a winning run.
    pub(crate) fn mark_win(&mut self, pos: CellPos) {
        self.cells[pos.row()][pos.col()].is_win = true;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
