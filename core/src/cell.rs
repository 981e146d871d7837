use serde::{Deserialize, Serialize};

/// Snapshot of a single board position.
///
/// Cells are owned by [`Board`](crate::Board) and only change through its reveal, flag and
/// delta operations. Whether the mine and adjacency information is shown to the player is up
/// to the presentation layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub(crate) has_mine: bool,
    pub(crate) revealed: bool,
    pub(crate) flagged: bool,
    pub(crate) adjacent_mines: u8,
}

impl Cell {
    pub const fn has_mine(self) -> bool {
        self.has_mine
    }

    pub const fn is_revealed(self) -> bool {
        self.revealed
    }

    pub const fn is_flagged(self) -> bool {
        self.flagged
    }

    /// Number of mines among the up-to-8 neighbors, in `0..=8`.
    pub const fn adjacent_mines(self) -> u8 {
        self.adjacent_mines
    }

    pub const fn is_unrevealed(self) -> bool {
        !self.revealed
    }

    /// Unrevealed and not flagged, the only state a reveal can open.
    pub const fn is_hidden(self) -> bool {
        !self.revealed && !self.flagged
    }
}
