#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use flags::*;
pub use generator::*;
pub use minefield::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod flags;
mod generator;
mod minefield;
mod types;

/// Smallest accepted board height or width.
pub const MIN_SIDE: Coord = 5;

/// Largest accepted board height or width.
pub const MAX_SIDE: Coord = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
}

/// Validated board configuration: dimensions, mine count and flag budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedConfig")]
pub struct GameConfig {
    height: Coord,
    width: Coord,
    mines: CellCount,
    flags: CellCount,
}

impl GameConfig {
    const fn new_unchecked(height: Coord, width: Coord, mines: CellCount, flags: CellCount) -> Self {
        Self {
            height,
            width,
            mines,
            flags,
        }
    }

    /// Rejects the configuration if any single value is out of range.
    pub fn new(height: Coord, width: Coord, mines: CellCount, flags: CellCount) -> Result<Self> {
        if !(MIN_SIDE..=MAX_SIDE).contains(&height) {
            return Err(GameError::InvalidHeight(height));
        }
        if !(MIN_SIDE..=MAX_SIDE).contains(&width) {
            return Err(GameError::InvalidWidth(width));
        }
        let cells = mult(height, width);
        if mines >= cells {
            return Err(GameError::TooManyMines { mines, cells });
        }
        if flags > cells {
            return Err(GameError::TooManyFlags { flags, cells });
        }
        Ok(Self::new_unchecked(height, width, mines, flags))
    }

    /// Classic board sizes, with as many flags as mines.
    pub const fn preset(difficulty: Difficulty) -> Self {
        match difficulty {
            Difficulty::Beginner => Self::new_unchecked(9, 9, 10, 10),
            Difficulty::Intermediate => Self::new_unchecked(16, 16, 40, 40),
            Difficulty::Expert => Self::new_unchecked(16, 32, 99, 99),
        }
    }

    pub const fn height(&self) -> Coord {
        self.height
    }

    pub const fn width(&self) -> Coord {
        self.width
    }

    /// `(height, width)`
    pub const fn size(&self) -> Coord2 {
        (self.height, self.width)
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn flags(&self) -> CellCount {
        self.flags
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.height, self.width)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::preset(Difficulty::Intermediate)
    }
}

#[derive(Deserialize)]
struct UncheckedConfig {
    height: Coord,
    width: Coord,
    mines: CellCount,
    flags: CellCount,
}

impl TryFrom<UncheckedConfig> for GameConfig {
    type Error = GameError;

    fn try_from(raw: UncheckedConfig) -> Result<Self> {
        Self::new(raw.height, raw.width, raw.mines, raw.flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for difficulty in [
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Expert,
        ] {
            let preset = GameConfig::preset(difficulty);
            let checked = GameConfig::new(
                preset.height(),
                preset.width(),
                preset.mines(),
                preset.flags(),
            );
            assert_eq!(checked, Ok(preset));
        }
        assert_eq!(GameConfig::default().size(), (16, 16));
        assert_eq!(GameConfig::default().mines(), 40);
    }

    #[test]
    fn any_invalid_value_rejects() {
        assert_eq!(GameConfig::new(4, 9, 10, 10), Err(GameError::InvalidHeight(4)));
        assert_eq!(GameConfig::new(33, 9, 10, 10), Err(GameError::InvalidHeight(33)));
        assert_eq!(GameConfig::new(9, 4, 10, 10), Err(GameError::InvalidWidth(4)));
        assert_eq!(GameConfig::new(9, 33, 10, 10), Err(GameError::InvalidWidth(33)));
        assert_eq!(
            GameConfig::new(5, 5, 25, 25),
            Err(GameError::TooManyMines {
                mines: 25,
                cells: 25
            })
        );
        assert_eq!(
            GameConfig::new(5, 5, 1, 26),
            Err(GameError::TooManyFlags {
                flags: 26,
                cells: 25
            })
        );
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(GameConfig::new(5, 5, 0, 0).is_ok());
        assert!(GameConfig::new(5, 5, 24, 24).is_ok());
        assert!(GameConfig::new(32, 32, 1023, 1024).is_ok());
    }

    #[test]
    fn flag_budget_is_independent_of_mines() {
        let config = GameConfig::new(9, 9, 10, 3).unwrap();
        assert_eq!(config.mines(), 10);
        assert_eq!(config.flags(), 3);
    }

    #[test]
    fn deserializing_validates() {
        let config: GameConfig =
            serde_json::from_str(r#"{"height":9,"width":9,"mines":10,"flags":10}"#).unwrap();
        assert_eq!(config, GameConfig::preset(Difficulty::Beginner));

        let invalid = serde_json::from_str::<GameConfig>(
            r#"{"height":9,"width":9,"mines":81,"flags":10}"#,
        );
        assert!(invalid.is_err());
    }
}
