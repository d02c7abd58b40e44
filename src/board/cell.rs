//! Cell lifecycle.
//!
//! A cell moves through exactly four states:
//!
//! ```text
//! Open -> Placed -> Measurable -> Collapsed
//!            \____________________/^
//! ```
//!
//! `Placed` may collapse directly when its entangled partner is measured
//! before the cell's own row or column fills. `Collapsed` is terminal.
//! The variants are mutually exclusive by construction: a color exists
//! only on a collapsed cell, and a placement tag never survives into
//! `Open`.

use serde::{Deserialize, Serialize};

use crate::core::{PlacementId, Player};

/// The visibility state of a single cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellState {
    /// No token yet.
    Open,
    /// Holds a hidden token awaiting measurement eligibility.
    Placed { placement: PlacementId },
    /// Holds a hidden token whose row or column is fully occupied;
    /// eligible for measurement.
    Measurable { placement: PlacementId },
    /// Measured. The color is fixed forever.
    Collapsed { placement: PlacementId, color: Player },
}

impl CellState {
    /// The placement tag, if the cell holds a token.
    #[must_use]
    pub const fn placement(self) -> Option<PlacementId> {
        match self {
            CellState::Open => None,
            CellState::Placed { placement }
            | CellState::Measurable { placement }
            | CellState::Collapsed { placement, .. } => Some(placement),
        }
    }

    /// The assigned color, if collapsed.
    #[must_use]
    pub const fn color(self) -> Option<Player> {
        match self {
            CellState::Collapsed { color, .. } => Some(color),
            _ => None,
        }
    }

    /// True for `Open`.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, CellState::Open)
    }

    /// True for `Measurable`.
    #[must_use]
    pub const fn is_measurable(self) -> bool {
        matches!(self, CellState::Measurable { .. })
    }

    /// True for `Collapsed`.
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        matches!(self, CellState::Collapsed { .. })
    }
}

/// A board cell: lifecycle state plus the win highlight flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    /// Current lifecycle state.
    pub state: CellState,
    /// Set once the cell participates in a winning run.
    pub is_win: bool,
}

impl Cell {
    /// A fresh open cell.
    #[must_use]
    pub const fn open() -> Self {
        Self {
            state: CellState::Open,
            is_win: false,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_cell_has_no_token() {
        let cell = Cell::open();
        assert!(cell.state.is_open());
        assert_eq!(cell.state.placement(), None);
        assert_eq!(cell.state.color(), None);
        assert!(!cell.is_win);
    }

    #[test]
    fn test_placement_survives_every_occupied_state() {
        let id = PlacementId::new(3);
        let states = [
            CellState::Placed { placement: id },
            CellState::Measurable { placement: id },
            CellState::Collapsed {
                placement: id,
                color: Player::Red,
            },
        ];
        for state in states {
            assert_eq!(state.placement(), Some(id));
        }
    }

    #[test]
    fn test_color_only_on_collapsed() {
        let id = PlacementId::FIRST;
        assert_eq!(CellState::Placed { placement: id }.color(), None);
        assert_eq!(CellState::Measurable { placement: id }.color(), None);
        assert_eq!(
            CellState::Collapsed {
                placement: id,
                color: Player::Blue
            }
            .color(),
            Some(Player::Blue)
        );
    }

    #[test]
    fn test_cell_serialization() {
        let cell = Cell {
            state: CellState::Collapsed {
                placement: PlacementId::new(7),
                color: Player::Red,
            },
            is_win: true,
        };
        let json = serde_json::to_string(&cell).unwrap();
        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(cell, back);
    }
}
