//! The game session: turn-phase state machine over a board.
//!
//! Every state transition is driven by exactly one external request
//! (`place_token` or `measure`) and completes fully, win/tie evaluation
//! included, before the call returns. A rejected request never mutates
//! anything: all validation happens before the first board write.

use serde::{Deserialize, Serialize};

use super::error::RulesError;
use super::outcome::{GameResult, MeasurementOutcome, PlacementOutcome};
use super::win;
use crate::board::{Board, CellState};
use crate::core::{CellPos, PlacementId, Player, SessionConfig};

/// Where the turn state machine currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Start of a turn: next request places the first token. Leftover
    /// measurable cells from earlier turns may still be measured.
    AwaitingFirstToken,
    /// One token down: the entangled partner must be placed before
    /// anything else. Measurement is suspended.
    AwaitingSecondToken,
    /// A turn just completed: the player may place a new first token or
    /// measure an eligible cell.
    AwaitingMeasurementOrPlacement,
    /// Terminal. Every further request is rejected.
    GameOver,
}

/// A single game of quantum connect.
///
/// Owns the board exclusively; the presentation layer interacts through
/// `place_token`, `measure`, and the query accessors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    config: SessionConfig,
    board: Board,
    phase: Phase,
    active_player: Player,
    placement: PlacementId,
    result: Option<GameResult>,
}

/// Builder for a game session.
///
/// ```
/// use quantum_connect::{GameSession, Player, SessionBuilder};
///
/// let session: GameSession = SessionBuilder::new().first_player(Player::Red).build();
/// assert_eq!(session.current_player(), Player::Red);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionBuilder {
    config: SessionConfig,
}

impl SessionBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set who leads the first turn (Blue by default).
    #[must_use]
    pub fn first_player(mut self, player: Player) -> Self {
        self.config.first_player = player;
        self
    }

    /// Build the session in its initial state.
    #[must_use]
    pub fn build(self) -> GameSession {
        GameSession {
            config: self.config,
            board: Board::new(),
            phase: Phase::AwaitingFirstToken,
            active_player: self.config.first_player,
            placement: PlacementId::FIRST,
            result: None,
        }
    }
}

impl GameSession {
    /// A fresh session with default configuration (Blue leads).
    #[must_use]
    pub fn new() -> Self {
        SessionBuilder::new().build()
    }

    // === Actions ===

    /// Drop a token into `column`.
    ///
    /// The token lands on the lowest open cell, tagged with the current
    /// turn's placement id. Full-row/full-column completions promote
    /// hidden tokens to measurable. The turn completes when the count of
    /// open cells comes back to even (the board starts at 42): the
    /// player switches, the placement counter advances, and measurement
    /// becomes available again.
    pub fn place_token(&mut self, column: usize) -> Result<PlacementOutcome, RulesError> {
        if self.phase == Phase::GameOver {
            return Err(RulesError::GameAlreadyOver);
        }
        let position = self
            .board
            .lowest_open_cell(column)
            .ok_or(RulesError::InvalidColumn(column))?;

        self.board.place(position, self.placement);
        self.board.promote_measurable(position);

        let turn_complete = self.board.open_cells() % 2 == 0;
        if turn_complete {
            self.active_player = self.active_player.opponent();
            self.placement = self.placement.next();
            self.phase = Phase::AwaitingMeasurementOrPlacement;
        } else {
            self.phase = Phase::AwaitingSecondToken;
        }

        Ok(PlacementOutcome {
            position,
            awaiting_second_token: !turn_complete,
            turn_complete,
        })
    }

    /// Measure the token at `position`, collapsing it and its entangled
    /// partner.
    ///
    /// The measured cell takes the measuring player's color and the
    /// partner the opponent's. Each newly colored cell is then checked
    /// for a winning run:
    ///
    /// - two winners resolve to a tie (both lines stay highlighted),
    /// - one winner ends the game in that player's favor,
    /// - zero winners on a fully colored board is a tie,
    /// - otherwise the player switches and the next turn begins.
    pub fn measure(&mut self, position: CellPos) -> Result<MeasurementOutcome, RulesError> {
        match self.phase {
            Phase::GameOver => return Err(RulesError::GameAlreadyOver),
            // Mid-turn: measurable cells are suspended until the
            // entangled partner lands.
            Phase::AwaitingSecondToken => return Err(RulesError::InvalidMeasurement(position)),
            Phase::AwaitingFirstToken | Phase::AwaitingMeasurementOrPlacement => {}
        }
        if !self.board.state(position).is_measurable() {
            return Err(RulesError::InvalidMeasurement(position));
        }
        let partner = self
            .board
            .entangled_partner(position)
            .ok_or(RulesError::BrokenEntanglement(position))?;

        let player = self.active_player;
        let opponent = player.opponent();
        self.board.collapse(position, player);
        self.board.collapse(partner, opponent);

        let mut winning_cells = Vec::new();
        let mut winners = 0u8;
        let mut winner = None;
        if win::check_win(&mut self.board, player, position, &mut winning_cells) {
            winners += 1;
            winner = Some(player);
        }
        if win::check_win(&mut self.board, opponent, partner, &mut winning_cells) {
            winners += 1;
            winner = Some(opponent);
        }

        let result = match winners {
            // Both players completed a line in the same collapse: the
            // game calls it a tie, with both lines marked.
            2 => Some(GameResult::Tie),
            1 => winner.map(GameResult::Winner),
            _ if win::check_tie(&self.board) => Some(GameResult::Tie),
            _ => None,
        };

        if let Some(result) = result {
            self.result = Some(result);
            self.phase = Phase::GameOver;
        } else {
            // Second switch of the round, on top of the one made when
            // the turn's second token landed.
            self.active_player = self.active_player.opponent();
            self.phase = Phase::AwaitingFirstToken;
        }

        Ok(MeasurementOutcome {
            measured: position,
            entangled: partner,
            measured_color: player,
            entangled_color: opponent,
            winners,
            winning_cells,
            result,
            game_over: self.phase == Phase::GameOver,
        })
    }

    /// Start a new game on the same session.
    ///
    /// The board and placement counter reset; the active player
    /// deliberately carries over, so whoever was due to act leads the
    /// rematch.
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.phase = Phase::AwaitingFirstToken;
        self.placement = PlacementId::FIRST;
        self.result = None;
    }

    // === Queries ===

    /// The board, read-only.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Lifecycle state of the cell at `position`.
    #[must_use]
    pub fn cell_state(&self, position: CellPos) -> CellState {
        self.board.state(position)
    }

    /// True iff `column` can take no further tokens.
    #[must_use]
    pub fn is_column_full(&self, column: usize) -> bool {
        self.board.is_column_full(column)
    }

    /// Where a token dropped into `column` would land right now.
    #[must_use]
    pub fn lowest_open_cell(&self, column: usize) -> Option<CellPos> {
        self.board.lowest_open_cell(column)
    }

    /// Current phase of the turn machine.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True once a terminal outcome has been reached.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The final outcome, once the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// The player whose action is expected next.
    #[must_use]
    pub fn current_player(&self) -> Player {
        self.active_player
    }

    /// Display label of the current player.
    #[must_use]
    pub fn current_player_label(&self) -> &'static str {
        self.active_player.label()
    }

    /// Display glyph for the current turn ordinal.
    #[must_use]
    pub fn turn_ordinal_label(&self) -> String {
        self.placement.glyph()
    }

    /// The current turn's placement id.
    #[must_use]
    pub fn current_placement(&self) -> PlacementId {
        self.placement
    }

    /// True iff a token can still be placed somewhere.
    #[must_use]
    pub fn can_place(&self) -> bool {
        self.phase != Phase::GameOver && self.board.open_cells() > 0
    }

    /// True iff some cell can be measured right now.
    #[must_use]
    pub fn can_measure(&self) -> bool {
        matches!(
            self.phase,
            Phase::AwaitingFirstToken | Phase::AwaitingMeasurementOrPlacement
        ) && self.board.has_measurable()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
