use crate::*;
pub use random::*;

mod random;

/// Builds the mine placement for a new game.
pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> MineMap;
}
