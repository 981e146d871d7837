use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// A single player intent, targeting one cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
}

/// What executing a command did to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Applied {
    pub deltas: Vec<Delta>,
    pub score_delta: i32,
}

impl Command {
    pub const fn target(self) -> Coord2 {
        match self {
            Self::Reveal(coords) | Self::Flag(coords) => coords,
        }
    }

    /// Runs the command against `board` and scores the result.
    pub fn apply(self, board: &mut Board) -> Applied {
        let deltas = match self {
            Self::Reveal(coords) => board.reveal(coords),
            Self::Flag(coords) => board.toggle_flag(coords),
        };
        let score_delta = score::score_delta(board, self, &deltas);
        Applied {
            deltas,
            score_delta,
        }
    }

    /// Rolls back the `deltas` this command produced, most recent first.
    pub fn undo(self, board: &mut Board, deltas: &[Delta]) {
        board.revert_deltas(deltas);
    }
}
