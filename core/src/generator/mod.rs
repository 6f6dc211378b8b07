use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Source of mine layouts, consulted once per round on the first reveal.
pub trait MinefieldGenerator {
    /// Lays out `config.mines()` mines with `start` guaranteed safe. Counts are left for the
    /// caller to compute.
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Result<Minefield>;
}
