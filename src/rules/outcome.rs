//! Action results reported back to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::core::{CellPos, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Tie: the board filled with no winner, or both players completed
    /// a line in the same measurement.
    Tie,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }
}

/// What a successful `place_token` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementOutcome {
    /// Where the token landed.
    pub position: CellPos,
    /// True after the first token of a turn: the entangled partner is
    /// still pending and measurement is suspended.
    pub awaiting_second_token: bool,
    /// True after the second token: the player switched and the
    /// placement counter advanced.
    pub turn_complete: bool,
}

/// What a successful `measure` did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeasurementOutcome {
    /// The cell the measuring player selected.
    pub measured: CellPos,
    /// Its entangled partner, collapsed in the same action.
    pub entangled: CellPos,
    /// Color assigned to the measured cell (the measuring player's).
    pub measured_color: Player,
    /// Color assigned to the partner (the opponent's).
    pub entangled_color: Player,
    /// How many of the two collapsed cells completed a line: 0, 1 or 2.
    pub winners: u8,
    /// Every cell marked as part of a winning run, both lines included
    /// when `winners == 2`.
    pub winning_cells: Vec<CellPos>,
    /// Terminal outcome, if the measurement ended the game. Two
    /// simultaneous winners resolve to `GameResult::Tie`.
    pub result: Option<GameResult>,
    /// True iff the session transitioned to `Phase::GameOver`.
    pub game_over: bool,
}
