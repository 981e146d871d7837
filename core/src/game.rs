use alloc::string::{String, ToString};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::*;

/// Name used when the player did not enter one.
pub const DEFAULT_PLAYER_NAME: &str = "Guest";

/// One player's session: the current board, its history and the score.
///
/// Resetting replaces the board and history wholesale; nothing from the previous round
/// survives except the player name.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: History,
    score: Scoreboard,
    player_name: String,
    difficulty: Difficulty,
    rng: SmallRng,
}

impl Game {
    /// Starts a game; `seed` determines this board and every board created by [`reset`].
    ///
    /// [`reset`]: Self::reset
    pub fn new(difficulty: Difficulty, player_name: &str, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = Board::from_difficulty(difficulty, rng.next_u64())?;
        let player_name = match player_name.trim() {
            "" => DEFAULT_PLAYER_NAME,
            name => name,
        };

        log::debug!("New {} game for {}", difficulty, player_name);
        Ok(Self {
            board,
            history: History::new(),
            score: Scoreboard::default(),
            player_name: player_name.to_string(),
            difficulty,
            rng,
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        self.board.status()
    }

    pub fn score(&self) -> i32 {
        self.score.total()
    }

    pub fn last_score_delta(&self) -> i32 {
        self.score.last_delta()
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn execute(&mut self, command: Command) -> Option<&HistoryEntry> {
        self.history.execute(&mut self.board, &mut self.score, command)
    }

    pub fn reveal(&mut self, coords: Coord2) -> Option<&HistoryEntry> {
        self.execute(Command::Reveal(coords))
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> Option<&HistoryEntry> {
        self.execute(Command::Flag(coords))
    }

    pub fn undo(&mut self) -> Option<&HistoryEntry> {
        self.history.undo(&mut self.board, &mut self.score)
    }

    pub fn redo(&mut self) -> Option<&HistoryEntry> {
        self.history.redo(&mut self.board, &mut self.score)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Throws away the board, history and score and starts over at `difficulty`.
    pub fn reset(&mut self, difficulty: Difficulty) -> Result<()> {
        self.board = Board::from_difficulty(difficulty, self.rng.next_u64())?;
        self.history = History::new();
        self.score = Scoreboard::default();
        self.difficulty = difficulty;
        log::debug!("New {} game for {}", difficulty, self.player_name);
        Ok(())
    }
}
