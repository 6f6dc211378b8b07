use serde::{Deserialize, Serialize};

/// Content of a single cell, shared by the hidden layout and the player-visible board.
///
/// The hidden layout only ever holds `Free`, `Count` or `Mine`. The visible board additionally
/// uses `Undiscovered` and `Flag`; any other value it holds is a copy of the hidden one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Undiscovered,
    Flag,
    Free,
    /// Between 1 and 8 adjacent mines.
    Count(u8),
    Mine,
}

impl Cell {
    /// Maps an adjacent-mine count to its cell, `0` being [`Cell::Free`].
    pub const fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Free,
            n => Self::Count(n),
        }
    }

    /// Adjacent-mine count of a safe cell, `None` for anything else.
    pub const fn count(self) -> Option<u8> {
        match self {
            Self::Free => Some(0),
            Self::Count(n) => Some(n),
            _ => None,
        }
    }

    /// Whether the player cannot see the content of this cell (undiscovered or flagged).
    pub const fn is_unrevealed(self) -> bool {
        matches!(self, Self::Undiscovered | Self::Flag)
    }

    pub const fn is_mine(self) -> bool {
        matches!(self, Self::Mine)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::Undiscovered
    }
}
