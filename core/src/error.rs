use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board height {0}, must be between 5 and 32")]
    InvalidHeight(Coord),
    #[error("Invalid board width {0}, must be between 5 and 32")]
    InvalidWidth(Coord),
    #[error("Too many mines, requested {mines} but the board has {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("Too many flags, requested {flags} but the board has {cells} cells")]
    TooManyFlags { flags: CellCount, cells: CellCount },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout puts a mine under the first reveal")]
    MineOnStart,
    #[error("Mine layout has {actual} mines but {expected} were configured")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
