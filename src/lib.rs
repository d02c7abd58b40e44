//! # quantum-connect
//!
//! Rules engine for a two-player Connect-Four variant with a quantum
//! entanglement twist: each turn a player drops **two** linked tokens,
//! which stay un-colored until a later measurement collapses both at
//! once: the measuring player's color on the cell they picked, the
//! opponent's on its entangled partner.
//!
//! ## Design Principles
//!
//! 1. **Rendering-agnostic**: no I/O, no display logic. The presentation
//!    layer drives the engine through two actions (`place_token`,
//!    `measure`) and reads back state through queries.
//!
//! 2. **Explicit state machine**: cell lifecycle and turn phase are
//!    tagged enums, so illegal combinations are unrepresentable.
//!
//! 3. **Atomic requests**: a request either applies fully (win and tie
//!    evaluation included) or is rejected with a typed error and no
//!    state change.
//!
//! ## Modules
//!
//! - `core`: players, positions, placement tags, configuration
//! - `board`: cell lifecycle and the 6×7 grid
//! - `rules`: turn machine, measurement collapse, win/tie detection
//!
//! ## Example
//!
//! ```
//! use quantum_connect::{CellPos, GameSession};
//!
//! let mut session = GameSession::new();
//!
//! // Blue's turn: two entangled tokens.
//! let first = session.place_token(3)?;
//! assert!(first.awaiting_second_token);
//! let second = session.place_token(4)?;
//! assert!(second.turn_complete);
//!
//! // Tokens stay hidden until their row or column fills up, after
//! // which they can be measured.
//! assert_eq!(first.position, CellPos::new(5, 3).unwrap());
//! # Ok::<(), quantum_connect::RulesError>(())
//! ```

pub mod board;
pub mod core;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    CellPos, Direction, PlacementId, Player, SessionConfig, COLS, ROWS, WIN_SEQ_LENGTH,
};

pub use crate::board::{Board, Cell, CellState};

pub use crate::rules::{
    GameResult, GameSession, MeasurementOutcome, Phase, PlacementOutcome, RulesError,
    SessionBuilder,
};
