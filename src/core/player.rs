//! Player identification.
//!
//! This game has exactly two players, and each player *is* a color:
//! the color assigned to a collapsed cell is the `Player` who received it.
//! There is no separate color type.

use serde::{Deserialize, Serialize};

/// One of the two players, identified by color.
///
/// Blue moves first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    /// Get the other player.
    ///
    /// ```
    /// use quantum_connect::Player;
    ///
    /// assert_eq!(Player::Red.opponent(), Player::Blue);
    /// assert_eq!(Player::Blue.opponent(), Player::Red);
    /// ```
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    /// Display label ("Red" / "Blue").
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Player::Red => "Red",
            Player::Blue => "Blue",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
