use ndarray::Array2;

use super::*;

/// Seed-driven generator that places mines at distinct positions sampled
/// uniformly without replacement over all cells of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomGenerator {
    seed: u64,
}

impl RandomGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }
}

impl BoardGenerator for RandomGenerator {
    fn generate(self, config: GameConfig) -> MineMap {
        use rand::prelude::*;

        let total = usize::from(config.rows) * usize::from(config.cols);
        let cols = usize::from(config.cols);

        // Validated configs always satisfy mines < total; degrade instead of
        // panicking if handed an unchecked one.
        let mut requested = usize::from(config.mines);
        if requested > total {
            log::warn!(
                "requested {} mines but the board only fits {}, filling it",
                requested,
                total
            );
            requested = total;
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size().as_index());
        for flat in rand::seq::index::sample(&mut rng, total, requested) {
            mines[[flat / cols, flat % cols]] = true;
        }

        log::debug!(
            "generated {}x{} board with {} mines (seed {})",
            config.rows,
            config.cols,
            requested,
            self.seed
        );
        MineMap::from_mask(mines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn places_exactly_the_requested_number_of_mines() {
        for seed in 0..20 {
            let config = GameConfig::new(9, 9, 10).unwrap();
            let map = RandomGenerator::new(seed).generate(config);

            assert_eq!(map.mine_count(), 10);
            assert_eq!(map.safe_cell_count(), 71);
        }
    }

    #[test]
    fn same_seed_reproduces_the_same_board() {
        let config = GameConfig::new(12, 12, 20).unwrap();

        let first = RandomGenerator::new(42).generate(config);
        let second = RandomGenerator::new(42).generate(config);

        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_differ_eventually() {
        let config = GameConfig::new(16, 16, 40).unwrap();
        let reference = RandomGenerator::new(0).generate(config);

        let any_different = (1..10)
            .map(|seed| RandomGenerator::new(seed).generate(config))
            .any(|map| map != reference);

        assert!(any_different);
    }

    #[test]
    fn overfull_request_fills_the_board_instead_of_panicking() {
        let config = GameConfig::new_unchecked(2, 2, 9);
        let map = RandomGenerator::new(1).generate(config);

        assert_eq!(map.mine_count(), 4);
        assert_eq!(map.safe_cell_count(), 0);
    }

    #[test]
    fn non_square_boards_use_row_major_indexing() {
        let config = GameConfig::new(3, 7, 20).unwrap();
        let map = RandomGenerator::new(7).generate(config);

        assert_eq!(map.size(), (3, 7));
        assert_eq!(map.mine_count(), 20);
    }
}
