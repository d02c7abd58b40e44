//! Session configuration.
//!
//! The board dimensions and win length are fixed by the rules; the only
//! thing a caller configures is who leads the first turn.

use serde::{Deserialize, Serialize};

use super::Player;

/// Configuration for a game session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// The player who places the first turn's tokens.
    pub first_player: Player,
}

impl Default for SessionConfig {
    /// Blue leads by default.
    fn default() -> Self {
        Self {
            first_player: Player::Blue,
        }
    }
}
