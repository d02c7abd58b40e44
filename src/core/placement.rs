//! Placement identifiers: the turn-ordinal tag linking an entangled pair.
//!
//! Both tokens dropped in the same turn carry the same `PlacementId`.
//! The id is what makes the pair discoverable at measurement time, and it
//! also drives the display glyph shown on an uncollapsed token.

use serde::{Deserialize, Serialize};

/// Turn-ordinal tag shared by the two tokens of a turn.
///
/// Ids start at 1; there is no id 0; an `Open` cell simply carries no id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlacementId(u32);

impl PlacementId {
    /// The first turn's id.
    pub const FIRST: PlacementId = PlacementId(1);

    /// Create a placement id.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ordinal value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// The id of the following turn.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Display glyph for this placement.
    ///
    /// Ordinals 1–25 map to a distinct single character (the Greek
    /// capital block starting at U+0391); anything else maps to the
    /// empty string. Purely a presentation convenience.
    ///
    /// ```
    /// use quantum_connect::PlacementId;
    ///
    /// assert_eq!(PlacementId::new(1).glyph(), "Α");
    /// assert_eq!(PlacementId::new(25).glyph(), "Ω");
    /// assert_eq!(PlacementId::new(26).glyph(), "");
    /// ```
    #[must_use]
    pub fn glyph(self) -> String {
        if (1..26).contains(&self.0) {
            char::from_u32(self.0 + 912).map(String::from).unwrap_or_default()
        } else {
            String::new()
        }
    }
}

impl std::fmt::Display for PlacementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
