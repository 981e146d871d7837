use ndarray::Array2;

use crate::*;
pub use random::*;

mod random;

/// Produces the mine mask, indexed `[row, col]`, for a new board.
pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Array2<bool>>;
}

/// Places mines at explicitly listed coordinates, duplicates count once.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator<'a> {
    mines: &'a [Coord2],
}

impl<'a> FixedMinefieldGenerator<'a> {
    pub fn new(mines: &'a [Coord2]) -> Self {
        Self { mines }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator<'_> {
    fn generate(self, config: GameConfig) -> Result<Array2<bool>> {
        let mut mask = Array2::from_elem(config.size.to_nd_index(), false);

        for &coords in self.mines {
            if !in_bounds(coords, config.size) {
                return Err(GameError::InvalidCoords);
            }
            mask[coords.to_nd_index()] = true;
        }

        let count = mask.iter().filter(|&&is_mine| is_mine).count();
        if count != usize::from(config.mines) {
            log::warn!(
                "Fixed minefield count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        Ok(mask)
    }
}
