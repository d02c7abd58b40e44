//! Rejection taxonomy.
//!
//! Every error here is recoverable by the caller: a rejected request
//! leaves the session untouched. `BrokenEntanglement` is the one
//! exception in spirit: it signals an internal invariant violation
//! (a placed token with no discoverable partner) and indicates a bug,
//! not a bad request.

use crate::core::CellPos;

/// Why a placement or measurement request was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RulesError {
    /// Column index out of the 0–6 range, or the column is full.
    #[error("column {0} is out of range or full")]
    InvalidColumn(usize),

    /// The cell is not currently measurable: still open, hidden
    /// mid-turn, or already collapsed.
    #[error("cell {0} is not measurable")]
    InvalidMeasurement(CellPos),

    /// The game has reached a terminal outcome; no further actions.
    #[error("the game is already over")]
    GameAlreadyOver,

    /// Internal consistency failure: the token at this cell has no
    /// entangled partner in the pair index.
    #[error("no entangled partner found for cell {0}")]
    BrokenEntanglement(CellPos),
}
