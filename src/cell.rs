use serde::{Deserialize, Serialize};

/// Per-cell play state tracked by the engine. Mine identity is kept in the
/// mine map, never in the play grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellState {
    Hidden,
    Revealed(u8),
    Flagged,
}

impl CellState {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

impl Default for CellState {
    fn default() -> Self {
        Self::Hidden
    }
}

/// What the presentation layer should draw for a cell. Extends [`CellState`]
/// with the end-of-game exposure states: once a game is won or lost every
/// mine is shown, and the mine that ended the game is singled out.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Revealed(u8),
    Flagged,
    /// A mine exposed after the game ended, win or loss.
    Mine,
    /// The revealed mine that ended the game.
    Exploded,
}

impl CellView {
    /// Whether the cell is still visually covered.
    pub const fn is_covered(self) -> bool {
        matches!(self, Self::Hidden | Self::Flagged)
    }
}

impl From<CellState> for CellView {
    fn from(state: CellState) -> Self {
        match state {
            CellState::Hidden => CellView::Hidden,
            CellState::Revealed(count) => CellView::Revealed(count),
            CellState::Flagged => CellView::Flagged,
        }
    }
}
