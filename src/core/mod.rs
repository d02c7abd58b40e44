//! Core value types: players, positions, placement tags, configuration.
//!
//! These are the fundamental building blocks shared by the board and the
//! rules engine. They carry no game logic beyond their own invariants.

pub mod config;
pub mod placement;
pub mod player;
pub mod position;

pub use config::SessionConfig;
pub use placement::PlacementId;
pub use player::Player;
pub use position::{CellPos, Direction, COLS, ROWS, WIN_SEQ_LENGTH};
