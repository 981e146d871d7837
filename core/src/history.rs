use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// One executed command together with what it did.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    command: Command,
    deltas: Vec<Delta>,
    score_delta: i32,
}

impl HistoryEntry {
    pub fn command(&self) -> Command {
        self.command
    }

    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    pub fn score_delta(&self) -> i32 {
        self.score_delta
    }
}

/// Undo and redo stacks of executed commands.
///
/// Undo inverts the recorded deltas. Redo runs the command again against the current board and
/// records the fresh result, which matches the first run because any new command clears the
/// redo stack.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    undo_stack: Vec<HistoryEntry>,
    redo_stack: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    /// The most recent entry that can be undone.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.undo_stack.last()
    }

    /// Executes `command`, recording it only when it changed the board.
    pub fn execute(
        &mut self,
        board: &mut Board,
        score: &mut Scoreboard,
        command: Command,
    ) -> Option<&HistoryEntry> {
        let Applied {
            deltas,
            score_delta,
        } = command.apply(board);

        if deltas.is_empty() {
            log::trace!("{:?} changed nothing", command);
            return None;
        }

        score.add(score_delta);
        self.redo_stack.clear();
        self.undo_stack.push(HistoryEntry {
            command,
            deltas,
            score_delta,
        });
        self.undo_stack.last()
    }

    pub fn undo(&mut self, board: &mut Board, score: &mut Scoreboard) -> Option<&HistoryEntry> {
        let entry = self.undo_stack.pop()?;

        entry.command.undo(board, &entry.deltas);
        score.retract(entry.score_delta);
        log::trace!(
            "Undid {:?}, reverted {} deltas",
            entry.command,
            entry.deltas.len()
        );

        self.redo_stack.push(entry);
        self.redo_stack.last()
    }

    pub fn redo(&mut self, board: &mut Board, score: &mut Scoreboard) -> Option<&HistoryEntry> {
        let command = self.redo_stack.pop()?.command;

        let Applied {
            deltas,
            score_delta,
        } = command.apply(board);

        if deltas.is_empty() {
            log::warn!("Redo of {:?} changed nothing, dropping it", command);
            return None;
        }

        score.add(score_delta);
        log::trace!("Redid {:?}, applied {} deltas", command, deltas.len());
        self.undo_stack.push(HistoryEntry {
            command,
            deltas,
            score_delta,
        });
        self.undo_stack.last()
    }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixture {
        board: Board,
        score: Scoreboard,
        history: History,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_mines((3, 5), &[(0, 2), (1, 2), (2, 2)])
        }

        fn with_mines(size: Coord2, mines: &[Coord2]) -> Self {
            Self {
                board: Board::from_mine_coords(size, mines).unwrap(),
                score: Scoreboard::default(),
                history: History::new(),
            }
        }

        fn execute(&mut self, command: Command) -> bool {
            self.history
                .execute(&mut self.board, &mut self.score, command)
                .is_some()
        }

        fn undo(&mut self) -> bool {
            self.history.undo(&mut self.board, &mut self.score).is_some()
        }

        fn redo(&mut self) -> bool {
            self.history.redo(&mut self.board, &mut self.score).is_some()
        }
    }

    #[test]
    fn execute_records_entry_and_score() {
        let mut fx = Fixture::new();

        assert!(fx.execute(Command::Reveal((0, 0))));

        let entry = fx.history.last().unwrap();
        assert_eq!(entry.command(), Command::Reveal((0, 0)));
        assert_eq!(entry.deltas().len(), 6);
        assert_eq!(entry.score_delta(), 60);
        assert_eq!(fx.score.total(), 60);
        assert!(fx.history.can_undo());
        assert!(!fx.history.can_redo());
    }

    #[test]
    fn no_op_is_not_recorded() {
        let mut fx = Fixture::new();

        assert!(!fx.execute(Command::Reveal((9, 9))));
        assert!(!fx.history.can_undo());

        fx.execute(Command::Reveal((0, 0)));
        assert!(!fx.execute(Command::Reveal((0, 0))));
        assert!(!fx.execute(Command::Flag((0, 1))));
        assert_eq!(fx.history.undo_len(), 1);
        assert_eq!(fx.score.total(), 60);
    }

    #[test]
    fn undo_restores_board_and_score() {
        let mut fx = Fixture::new();
        fx.execute(Command::Flag((0, 2)));
        let after_flag = fx.board.clone();

        fx.execute(Command::Reveal((0, 0)));
        assert!(fx.undo());

        assert!(fx.board.iter_cells().eq(after_flag.iter_cells()));
        assert_eq!(fx.board.unrevealed_safe(), after_flag.unrevealed_safe());
        assert_eq!(fx.score.total(), 5);
        assert_eq!(fx.score.last_delta(), -60);
        assert!(fx.history.can_redo());
    }

    #[test]
    fn undo_and_redo_on_empty_stacks_do_nothing() {
        let mut fx = Fixture::new();
        let snapshot = fx.board.clone();

        assert!(!fx.undo());
        assert!(!fx.redo());
        assert_eq!(fx.board, snapshot);
        assert_eq!(fx.score, Scoreboard::default());
    }

    #[test]
    fn redo_replays_identical_deltas() {
        let mut fx = Fixture::new();
        fx.execute(Command::Reveal((2, 4)));
        let original = fx.history.last().cloned().unwrap();
        let after = fx.board.clone();

        fx.undo();
        assert!(fx.redo());

        assert_eq!(fx.history.last(), Some(&original));
        assert_eq!(fx.board, after);
        assert_eq!(fx.score.total(), 60);
    }

    #[test]
    fn undo_all_then_redo_all_restores_state() {
        let mut fx = Fixture::new();
        fx.execute(Command::Flag((1, 2)));
        fx.execute(Command::Reveal((0, 0)));
        fx.execute(Command::Flag((0, 3)));
        fx.execute(Command::Reveal((2, 4)));
        let board = fx.board.clone();
        let total = fx.score.total();

        while fx.undo() {}
        assert_eq!(fx.score.total(), 0);
        assert!(fx.board.iter_cells().all(|(_, cell)| cell.is_hidden()));
        assert_eq!(fx.history.redo_len(), 4);

        while fx.redo() {}
        assert_eq!(fx.board, board);
        assert_eq!(fx.score.total(), total);
        assert_eq!(fx.history.undo_len(), 4);
    }

    #[test]
    fn flag_on_relocation_target_survives_undo_redo() {
        let mut fx = Fixture::with_mines((1, 3), &[(0, 1)]);
        fx.execute(Command::Flag((0, 0)));
        fx.execute(Command::Reveal((0, 1)));
        assert!(fx.board.has_mine_at((0, 0)));
        assert_eq!(fx.score.total(), 5);
        let board = fx.board.clone();

        while fx.undo() {}
        assert!(fx.board.has_mine_at((0, 1)));
        assert!(!fx.board.has_mine_at((0, 0)));
        assert!(!fx.board.first_move_taken());
        assert_eq!(fx.score.total(), 0);

        while fx.redo() {}
        assert_eq!(fx.board, board);
        assert_eq!(fx.score.total(), 5);
    }

    #[test]
    fn new_command_discards_redo_branch() {
        let mut fx = Fixture::new();
        fx.execute(Command::Reveal((0, 0)));
        fx.undo();
        assert!(fx.history.can_redo());

        fx.execute(Command::Flag((0, 2)));

        assert!(!fx.history.can_redo());
        assert_eq!(fx.history.undo_len(), 1);
    }

    #[test]
    fn undoing_a_loss_resumes_play() {
        let mut fx = Fixture::new();
        fx.execute(Command::Reveal((0, 0)));
        fx.execute(Command::Reveal((1, 2)));
        assert_eq!(fx.board.status(), GameStatus::Lost);
        assert_eq!(fx.score.total(), 40);

        fx.undo();

        assert_eq!(fx.board.status(), GameStatus::Running);
        assert_eq!(fx.score.total(), 60);
        assert!(fx.execute(Command::Reveal((2, 4))));
    }

    #[test]
    fn clear_empties_both_stacks() {
        let mut fx = Fixture::new();
        fx.execute(Command::Reveal((0, 0)));
        fx.execute(Command::Flag((0, 2)));
        fx.undo();

        fx.history.clear();

        assert!(!fx.history.can_undo());
        assert!(!fx.history.can_redo());
    }
}
