use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random layouts that only keep the first revealed cell safe.
///
/// The generator owns its RNG, so consecutive rounds of one engine draw different layouts while
/// the whole sequence stays reproducible from the seed.
#[derive(Clone, Debug)]
pub struct RandomMinefieldGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Result<Minefield> {
        if !in_bounds(start, config.size()) {
            return Err(GameError::InvalidCoords);
        }

        let field = Minefield::random(config.size(), config.mines(), start, &mut self.rng);
        if field.mine_count() != config.mines() {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                field.mine_count(),
                config.mines()
            );
        }
        Ok(field)
    }
}
