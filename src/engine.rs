use std::collections::{HashSet, VecDeque};

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Lifecycle of one game. A [`Game`] is in `Playing` from the moment it is
/// constructed; `Won` and `Lost` are terminal and accept no further moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Playing
    }
}

/// A single game from board creation to win or loss.
///
/// All moves are total: out-of-bounds coordinates, repeated reveals, and
/// moves after the game has ended are absorbed as no-op outcomes rather
/// than errors, since they are ordinary user-interaction artifacts. The
/// only fallible step is construction, which validates the configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    config: GameConfig,
    map: MineMap,
    grid: Array2<CellState>,
    revealed_count: CellCount,
    flagged_count: CellCount,
    state: GameState,
    exploded: Option<Coord2>,
}

impl Game {
    /// Starts a new game on a freshly generated board.
    pub fn new(config: GameConfig) -> Result<Self> {
        Self::with_generator(config, RandomGenerator::from_entropy())
    }

    /// Starts a new game using the given generator, for deterministic play.
    pub fn with_generator(config: GameConfig, generator: impl BoardGenerator) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(config, generator.generate(config)))
    }

    /// Starts a game on a fixed mine placement. The configuration is derived
    /// from the map; no validation is applied, so degenerate boards (for
    /// instance all mines) stay playable for tests and embeddings.
    pub fn from_map(map: MineMap) -> Self {
        Self::from_parts(map.game_config(), map)
    }

    fn from_parts(config: GameConfig, map: MineMap) -> Self {
        let size = map.size();
        Self {
            config,
            map,
            grid: Array2::default(size.as_index()),
            revealed_count: 0,
            flagged_count: 0,
            state: GameState::Playing,
            exploded: None,
        }
    }

    /// Discards the current board and re-enters `Playing` on a fresh board
    /// generated from the stored configuration.
    pub fn restart(&mut self) {
        log::debug!(
            "restarting {}x{} game with {} mines",
            self.config.rows,
            self.config.cols,
            self.config.mines
        );
        *self = Self::from_parts(
            self.config,
            RandomGenerator::from_entropy().generate(self.config),
        );
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        self.map.size()
    }

    pub fn rows(&self) -> Coord {
        self.map.rows()
    }

    pub fn cols(&self) -> Coord {
        self.map.cols()
    }

    pub fn total_mines(&self) -> CellCount {
        self.map.mine_count()
    }

    /// How many mines have not been flagged yet. Negative when the player
    /// placed more flags than there are mines.
    pub fn mines_left(&self) -> isize {
        (self.map.mine_count() as isize) - (self.flagged_count as isize)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count
    }

    /// The mine whose reveal ended the game, if it ended in a loss.
    pub fn exploded(&self) -> Option<Coord2> {
        self.exploded
    }

    pub fn is_mine(&self, coords: Coord2) -> bool {
        self.map.in_bounds(coords) && self.map[coords]
    }

    /// What the presentation layer should draw at `coords`. While the game
    /// is running this mirrors the play grid; once it has ended every mine
    /// is exposed, with the one that ended the game reported as `Exploded`.
    /// Exposure is computed here at query time and never mutates the grid.
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        if self.exploded == Some(coords) {
            return CellView::Exploded;
        }

        if self.state.is_finished() && self.map[coords] {
            return CellView::Mine;
        }

        self.grid[coords.as_index()].into()
    }

    /// Flips the flag on an unrevealed cell. Revealed cells, out-of-bounds
    /// coordinates, and finished games are left untouched.
    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        if !self.map.in_bounds(coords) || self.state.is_finished() {
            return NoChange;
        }

        match self.grid[coords.as_index()] {
            CellState::Hidden => {
                self.grid[coords.as_index()] = CellState::Flagged;
                self.flagged_count += 1;
                Changed
            }
            CellState::Flagged => {
                self.grid[coords.as_index()] = CellState::Hidden;
                self.flagged_count -= 1;
                Changed
            }
            CellState::Revealed(_) => NoChange,
        }
    }

    /// Reveals a cell. No-op when the coordinates are out of bounds, the
    /// game has ended, or the cell is already revealed or flagged. Revealing
    /// a mine loses the game; revealing a cell with no adjacent mines
    /// cascades to its neighbors; the win check runs after the cascade.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        if !self.map.in_bounds(coords) || self.state.is_finished() {
            return RevealOutcome::NoChange;
        }
        self.reveal_cell(coords)
    }

    fn reveal_cell(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if !matches!(self.grid[coords.as_index()], CellState::Hidden) {
            return NoChange;
        }

        if self.map[coords] {
            self.exploded = Some(coords);
            self.state = GameState::Lost;
            log::debug!("mine hit at {:?}, game lost", coords);
            return Exploded;
        }

        let count = self.map.adjacent_mines(coords);
        self.grid[coords.as_index()] = CellState::Revealed(count);
        self.revealed_count += 1;
        log::trace!("revealed {:?}, {} adjacent mines", coords, count);

        if count == 0 {
            self.flood_fill(coords);
        }

        if self.revealed_count == self.map.safe_cell_count() {
            self.state = GameState::Won;
            log::debug!("all safe cells revealed, game won");
            Won
        } else {
            Safe
        }
    }

    /// Worklist expansion from a zero-adjacency cell: every reachable
    /// hidden, unflagged neighbor is revealed, and neighbors that are
    /// themselves zero-adjacency keep the cascade going. Each cell enters
    /// the worklist at most once, so the traversal is bounded by the board
    /// size.
    fn flood_fill(&mut self, start: Coord2) {
        let mut visited = HashSet::from([start]);
        let mut pending: VecDeque<Coord2> = self
            .map
            .neighbors(start)
            .filter(|&pos| matches!(self.grid[pos.as_index()], CellState::Hidden))
            .collect();

        while let Some(coords) = pending.pop_front() {
            if !visited.insert(coords) {
                continue;
            }

            // flagged and already-revealed cells stop the cascade
            if !matches!(self.grid[coords.as_index()], CellState::Hidden) {
                continue;
            }

            let count = self.map.adjacent_mines(coords);
            self.grid[coords.as_index()] = CellState::Revealed(count);
            self.revealed_count += 1;
            log::trace!("cascade revealed {:?}, {} adjacent mines", coords, count);

            if count == 0 {
                pending.extend(
                    self.map
                        .neighbors(coords)
                        .filter(|&pos| matches!(self.grid[pos.as_index()], CellState::Hidden))
                        .filter(|pos| !visited.contains(pos)),
                );
            }
        }
    }
}
