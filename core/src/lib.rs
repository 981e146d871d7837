#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use command::*;
pub use delta::*;
pub use difficulty::*;
pub use error::*;
pub use game::*;
pub use generator::*;
pub use history::*;
pub use score::Scoreboard;
pub use types::*;

mod board;
mod cell;
mod command;
mod delta;
mod difficulty;
mod error;
mod game;
mod generator;
mod history;
pub mod score;
mod types;

/// Board dimensions `(rows, cols)` and mine count.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Both axes must be non-empty and at least one cell must stay free of mines.
    pub fn validate(&self) -> Result<()> {
        let (rows, cols) = self.size;
        if rows == 0 || cols == 0 || self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration {
                rows,
                cols,
                mines: self.mines,
            });
        }
        Ok(())
    }

    pub const fn rows(&self) -> Coord {
        self.size.0
    }

    pub const fn cols(&self) -> Coord {
        self.size.1
    }

    pub const fn total_cells(&self) -> CellCount {
        (self.size.0 as CellCount).saturating_mul(self.size.1 as CellCount)
    }

    pub const fn safe_cells(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_all_but_one_cell_mined() {
        let config = GameConfig::new((2, 2), 3).unwrap();

        assert_eq!(config.total_cells(), 4);
        assert_eq!(config.safe_cells(), 1);
    }

    #[test]
    fn config_rejects_invalid_shapes() {
        let err = GameError::InvalidConfiguration {
            rows: 0,
            cols: 3,
            mines: 0,
        };
        assert_eq!(GameConfig::new((0, 3), 0), Err(err));
        assert!(GameConfig::new((3, 0), 0).is_err());
        assert!(GameConfig::new((3, 3), 9).is_err());
        assert!(GameConfig::new((3, 3), 10).is_err());
    }

    #[test]
    fn config_allows_empty_minefield() {
        assert!(GameConfig::new((1, 1), 0).is_ok());
    }
}
