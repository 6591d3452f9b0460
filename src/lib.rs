//! Game-state engine for classic minesweeper: board generation, reveal with
//! cascade, flagging, and win/loss detection. Rendering, menus, and input
//! handling are the embedding application's job; the engine exposes a
//! per-cell query surface to drive any renderer.

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count for one game. Immutable for the game's
/// duration; a restart reuses the same config on a fresh board.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    pub fn new(rows: Coord, cols: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, mines);
        config.validate()?;
        Ok(config)
    }

    /// A valid board has at least one row and one column, and at least one
    /// safe cell.
    pub fn validate(&self) -> Result<()> {
        if self.rows < 1 || self.cols < 1 {
            return Err(ConfigError::EmptyBoard);
        }
        let cells = self.total_cells();
        if self.mines >= cells {
            return Err(ConfigError::TooManyMines {
                mines: self.mines,
                cells,
            });
        }
        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_count(self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(9, 9, 10)
    }
}

/// Difficulty selection as offered by a settings form. Custom values are
/// clamped to the form's ranges before validation, so a mine count that
/// cannot fit the clamped board is rejected rather than passed through to
/// the generator.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Custom {
        rows: Coord,
        cols: Coord,
        mines: CellCount,
    },
}

impl Difficulty {
    pub const MIN_SIDE: Coord = 5;
    pub const MAX_SIDE: Coord = 30;
    pub const MIN_MINES: CellCount = 1;
    pub const MAX_MINES: CellCount = 300;

    pub fn config(self) -> Result<GameConfig> {
        match self {
            Self::Easy => GameConfig::new(9, 9, 10),
            Self::Medium => GameConfig::new(12, 12, 20),
            Self::Hard => GameConfig::new(16, 16, 40),
            Self::Custom { rows, cols, mines } => GameConfig::new(
                rows.clamp(Self::MIN_SIDE, Self::MAX_SIDE),
                cols.clamp(Self::MIN_SIDE, Self::MAX_SIDE),
                mines.clamp(Self::MIN_MINES, Self::MAX_MINES),
            ),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Easy
    }
}

/// Immutable mine placement for one board: which cells hold mines and how
/// many there are. Fixed at board creation; the play grid lives separately
/// in [`Game`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineMap {
    mines: Array2<bool>,
    mine_count: CellCount,
}

impl MineMap {
    pub fn from_mask(mines: Array2<bool>) -> Self {
        let mine_count = mines
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap();
        Self { mines, mine_count }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mines: Array2<bool> = Array2::default(size.as_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(ConfigError::MineOutOfBounds);
            }
            mines[coords.as_index()] = true;
        }

        Ok(Self::from_mask(mines))
    }

    pub fn game_config(&self) -> GameConfig {
        let (rows, cols) = self.size();
        GameConfig::new_unchecked(rows, cols, self.mine_count)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.mines.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        let (rows, cols) = self.size();
        coords.0 < rows && coords.1 < cols
    }

    pub fn total_cells(&self) -> CellCount {
        self.mines.len().try_into().unwrap()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines among the up-to-8 in-bounds neighbors of `coords`.
    pub fn adjacent_mines(&self, coords: Coord2) -> u8 {
        self.mines
            .neighbors(coords)
            .filter(|&pos| self[pos])
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn neighbors(&self, coords: Coord2) -> Neighbors {
        self.mines.neighbors(coords)
    }
}

impl Index<Coord2> for MineMap {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.mines[(row as usize, col as usize)]
    }
}

/// Outcome of a flag toggle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FlagOutcome {
    NoChange,
    Changed,
}

impl FlagOutcome {
    /// Whether this outcome changed anything a renderer should redraw.
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// Outcome of a reveal request.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Safe,
    Exploded,
    Won,
}

impl RevealOutcome {
    /// Whether this outcome changed anything a renderer should redraw.
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Safe => true,
            Exploded => true,
            Won => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_resolve_to_expected_configs() {
        assert_eq!(
            Difficulty::Easy.config().unwrap(),
            GameConfig::new_unchecked(9, 9, 10)
        );
        assert_eq!(
            Difficulty::Medium.config().unwrap(),
            GameConfig::new_unchecked(12, 12, 20)
        );
        assert_eq!(
            Difficulty::Hard.config().unwrap(),
            GameConfig::new_unchecked(16, 16, 40)
        );
    }

    #[test]
    fn custom_difficulty_clamps_to_form_ranges() {
        let config = Difficulty::Custom {
            rows: 2,
            cols: 100,
            mines: 0,
        }
        .config()
        .unwrap();

        assert_eq!(config, GameConfig::new_unchecked(5, 30, 1));
    }

    #[test]
    fn custom_difficulty_rejects_mines_that_cannot_fit() {
        let result = Difficulty::Custom {
            rows: 5,
            cols: 5,
            mines: 300,
        }
        .config();

        assert_eq!(
            result,
            Err(ConfigError::TooManyMines {
                mines: 300,
                cells: 25
            })
        );
    }

    #[test]
    fn config_requires_a_safe_cell() {
        assert_eq!(
            GameConfig::new(3, 3, 9),
            Err(ConfigError::TooManyMines { mines: 9, cells: 9 })
        );
        assert!(GameConfig::new(3, 3, 8).is_ok());
    }

    #[test]
    fn config_rejects_empty_boards() {
        assert_eq!(GameConfig::new(0, 5, 1), Err(ConfigError::EmptyBoard));
        assert_eq!(GameConfig::new(5, 0, 1), Err(ConfigError::EmptyBoard));
    }

    #[test]
    fn mine_coords_outside_the_board_are_rejected() {
        assert_eq!(
            MineMap::from_mine_coords((2, 2), &[(2, 0)]),
            Err(ConfigError::MineOutOfBounds)
        );
    }

    #[test]
    fn duplicate_mine_coords_collapse() {
        let map = MineMap::from_mine_coords((2, 2), &[(0, 0), (0, 0)]).unwrap();

        assert_eq!(map.mine_count(), 1);
        assert_eq!(map.safe_cell_count(), 3);
    }

    #[test]
    fn adjacent_mines_respects_board_edges() {
        let map = MineMap::from_mine_coords((3, 3), &[(0, 0), (1, 1)]).unwrap();

        assert_eq!(map.adjacent_mines((0, 1)), 2);
        assert_eq!(map.adjacent_mines((2, 2)), 1);
        assert_eq!(map.adjacent_mines((0, 0)), 1);
        assert_eq!(map.adjacent_mines((2, 0)), 1);
    }
}
