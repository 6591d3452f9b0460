use thiserror::Error;

use crate::CellCount;

/// Configuration problems that must prevent a game from starting. Play-time
/// input is never an error: out-of-range or repeated moves are absorbed as
/// no-op outcomes instead.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("board must have at least one row and one column")]
    EmptyBoard,
    #[error("{mines} mines leave no safe cell on a board with {cells} cells")]
    TooManyMines { mines: CellCount, cells: CellCount },
    #[error("mine position outside the board")]
    MineOutOfBounds,
}

pub type Result<T> = core::result::Result<T, ConfigError>;
