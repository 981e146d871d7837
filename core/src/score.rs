//! Points awarded for player actions.
//!
//! Scoring is a pure function of the board after the action, the command and the deltas it
//! produced. The running total lives in a [`Scoreboard`].

use serde::{Deserialize, Serialize};

use crate::*;

/// Per cell opened without a mine.
pub const SAFE_REVEAL_POINTS: i32 = 10;
/// Subtracted when the revealed cell held a mine.
pub const MINE_PENALTY: i32 = 20;
/// Added when the action won the game.
pub const WIN_BONUS: i32 = 100;
/// Added for a flag on a mine, subtracted for a flag on a safe cell.
pub const FLAG_POINTS: i32 = 5;

pub fn score_delta(board: &Board, command: Command, deltas: &[Delta]) -> i32 {
    match command {
        Command::Reveal(coords) => reveal_points(board, coords, deltas),
        Command::Flag(coords) => flag_points(board, coords, deltas),
    }
}

pub fn reveal_points(board: &Board, target: Coord2, deltas: &[Delta]) -> i32 {
    if deltas.is_empty() {
        return 0;
    }

    let safe_reveals = deltas
        .iter()
        .filter(|delta| delta.reveals_cell() && !board.has_mine_at(delta.coords()))
        .count();
    let mut points = (safe_reveals as i32).saturating_mul(SAFE_REVEAL_POINTS);

    if board.has_mine_at(target) {
        points -= MINE_PENALTY;
    }
    if deltas
        .last()
        .is_some_and(|delta| delta.next_status() == GameStatus::Won)
    {
        points += WIN_BONUS;
    }
    points
}

/// Removing a flag is always worth nothing, even when it was a correct one.
pub fn flag_points(board: &Board, target: Coord2, deltas: &[Delta]) -> i32 {
    if deltas.is_empty() {
        return 0;
    }

    match board.cell(target) {
        Some(cell) if cell.is_flagged() && cell.has_mine() => FLAG_POINTS,
        Some(cell) if cell.is_flagged() => -FLAG_POINTS,
        _ => 0,
    }
}

/// Cumulative score plus the delta of the last recorded change.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    total: i32,
    last_delta: i32,
}

impl Scoreboard {
    pub const fn total(&self) -> i32 {
        self.total
    }

    /// Change caused by the latest execute, undo or redo.
    pub const fn last_delta(&self) -> i32 {
        self.last_delta
    }

    pub(crate) fn add(&mut self, delta: i32) {
        self.total = self.total.saturating_add(delta);
        self.last_delta = delta;
    }

    pub(crate) fn retract(&mut self, delta: i32) {
        self.total = self.total.saturating_sub(delta);
        self.last_delta = -delta;
    }
}
