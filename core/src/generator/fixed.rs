use alloc::vec::Vec;

use super::*;

/// Scripted layout with mines on a given list of coordinates.
///
/// Useful to replay a known board. The first reveal must land on a safe cell and the list must
/// hold exactly as many distinct cells as the configuration has mines.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMinefieldGenerator {
    mines: Vec<Coord2>,
}

impl FixedMinefieldGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MinefieldGenerator for FixedMinefieldGenerator {
    fn generate(&mut self, config: &GameConfig, start: Coord2) -> Result<Minefield> {
        if !in_bounds(start, config.size()) {
            return Err(GameError::InvalidCoords);
        }

        let field = Minefield::from_mine_coords(config.size(), &self.mines)?;
        if field.contains_mine(start) {
            return Err(GameError::MineOnStart);
        }
        if field.mine_count() != config.mines() {
            return Err(GameError::MineCountMismatch {
                expected: config.mines(),
                actual: field.mine_count(),
            });
        }
        Ok(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(mines: CellCount) -> GameConfig {
        GameConfig::new(5, 5, mines, mines).unwrap()
    }

    #[test]
    fn places_listed_mines() {
        let mut generator = FixedMinefieldGenerator::new([(4, 4), (0, 4)]);
        let field = generator.generate(&config(2), (0, 0)).unwrap();

        assert!(field.contains_mine((4, 4)));
        assert!(field.contains_mine((0, 4)));
        assert_eq!(field.mine_count(), 2);
    }

    #[test]
    fn mine_under_start_is_rejected() {
        let mut generator = FixedMinefieldGenerator::new([(2, 2)]);
        assert_eq!(
            generator.generate(&config(1), (2, 2)),
            Err(GameError::MineOnStart)
        );
    }

    #[test]
    fn count_must_match_config() {
        let mut generator = FixedMinefieldGenerator::new([(1, 1), (1, 1), (3, 3)]);
        assert_eq!(
            generator.generate(&config(3), (0, 0)),
            Err(GameError::MineCountMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn off_board_mine_is_rejected() {
        let mut generator = FixedMinefieldGenerator::new([(0, 5)]);
        assert_eq!(
            generator.generate(&config(1), (0, 0)),
            Err(GameError::InvalidCoords)
        );
    }
}
