use core::fmt;

use serde::{Deserialize, Serialize};

use crate::*;

/// The fixed board presets offered to players.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Easy, Self::Normal, Self::Hard];

    pub const fn config(self) -> GameConfig {
        use Difficulty::*;
        match self {
            Easy => GameConfig::new_unchecked((9, 9), 10),
            Normal => GameConfig::new_unchecked((15, 15), 40),
            Hard => GameConfig::new_unchecked((27, 27), 120),
        }
    }

    pub const fn rows(self) -> Coord {
        self.config().rows()
    }

    pub const fn cols(self) -> Coord {
        self.config().cols()
    }

    pub const fn mines(self) -> CellCount {
        self.config().mines
    }

    pub const fn name(self) -> &'static str {
        use Difficulty::*;
        match self {
            Easy => "Easy",
            Normal => "Normal",
            Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}x{}, {} mines)",
            self.name(),
            self.rows(),
            self.cols(),
            self.mines()
        )
    }
}
