use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::index;

use super::*;

/// Places exactly `config.mines` mines uniformly at random, without replacement, over every
/// cell of the board. The same seed always yields the same layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Array2<bool>> {
        config.validate()?;

        let total_cells = usize::from(config.total_cells());
        let cols = usize::from(config.cols());
        let mut mask = Array2::from_elem(config.size.to_nd_index(), false);

        let mut rng = SmallRng::seed_from_u64(self.seed);
        for place in index::sample(&mut rng, total_cells, usize::from(config.mines)) {
            mask[[place / cols, place % cols]] = true;
        }

        Ok(mask)
    }
}
