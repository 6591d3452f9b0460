use ndarray::Array2;

/// Single coordinate axis used for rows, columns, and board dimensions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Board position as `(row, col)`, 0-indexed.
pub type Coord2 = (Coord, Coord);

pub trait AsIndex {
    type Output;
    fn as_index(self) -> Self::Output;
}

impl AsIndex for Coord2 {
    type Output = [usize; 2];

    fn as_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn cell_count(rows: Coord, cols: Coord) -> CellCount {
    let rows = rows as CellCount;
    let cols = cols as CellCount;
    rows.saturating_mul(cols)
}

pub trait NeighborsExt {
    fn neighbors(&self, center: Coord2) -> Neighbors;
}

impl<T> NeighborsExt for Array2<T> {
    fn neighbors(&self, center: Coord2) -> Neighbors {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        Neighbors::new(center, bounds)
    }
}

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Applies `delta` to `center`, returning a value only when it remains in bounds.
fn offset_within(center: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = center;
    let (d_row, d_col) = delta;
    let (rows, cols) = bounds;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= rows {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= cols {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds cells of the 3x3 neighborhood around a center
/// cell, excluding the center itself. Edge and corner cells yield fewer
/// than 8 positions.
#[derive(Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    offset: u8,
}

impl Neighbors {
    fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            offset: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while usize::from(self.offset) < NEIGHBOR_OFFSETS.len() {
            let candidate = offset_within(
                self.center,
                NEIGHBOR_OFFSETS[self.offset as usize],
                self.bounds,
            );
            self.offset += 1;

            if candidate.is_some() {
                return candidate;
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn neighbor_set(center: Coord2, bounds: Coord2) -> Vec<Coord2> {
        let grid: Array2<()> = Array2::default(bounds.as_index());
        grid.neighbors(center).collect()
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors = neighbor_set((1, 1), (3, 3));

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
    }

    #[test]
    fn corner_cell_has_three_neighbors() {
        let mut neighbors = neighbor_set((0, 0), (3, 3));
        neighbors.sort();

        assert_eq!(neighbors, vec![(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn edge_cell_has_five_neighbors() {
        let neighbors = neighbor_set((0, 1), (3, 3));

        assert_eq!(neighbors.len(), 5);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(neighbor_set((0, 0), (1, 1)), vec![]);
    }

    #[test]
    fn cell_count_saturates() {
        assert_eq!(cell_count(9, 9), 81);
        assert_eq!(cell_count(255, 255), 255 * 255);
    }
}
