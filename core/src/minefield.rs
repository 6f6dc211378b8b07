use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

/// Ground truth of a round: where the mines are and how many surround every safe cell.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Minefield {
    cells: Array2<Cell>,
    mine_count: CellCount,
}

impl Minefield {
    /// A field without mines, every cell `Free`.
    pub fn empty(size: Coord2) -> Self {
        Self {
            cells: Array2::from_elem(size.to_nd_index(), Cell::Free),
            mine_count: 0,
        }
    }

    /// Places `mines` mines uniformly at random on any cell except `excluded`.
    ///
    /// Counts are not filled in, call [`Minefield::compute_counts`] afterwards.
    pub fn random<R: Rng + ?Sized>(
        size: Coord2,
        mines: CellCount,
        excluded: Coord2,
        rng: &mut R,
    ) -> Self {
        let mut field = Self::empty(size);
        let excluded = flat_index(excluded, size);
        let mut candidates: Vec<CellCount> = (0..mult(size.0, size.1))
            .filter(|&index| index != excluded)
            .collect();

        for _ in 0..mines {
            if candidates.is_empty() {
                log::warn!(
                    "Minefield already full, placed {} of {} requested mines",
                    field.mine_count,
                    mines
                );
                break;
            }
            let pick = rng.random_range(0..candidates.len());
            let coords = from_flat_index(candidates.swap_remove(pick), size);
            field.cells[coords.to_nd_index()] = Cell::Mine;
            field.mine_count += 1;
        }

        field
    }

    /// Builds a field with mines on exactly the given coordinates, duplicates collapse.
    ///
    /// Counts are not filled in, call [`Minefield::compute_counts`] afterwards.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut field = Self::empty(size);

        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::InvalidCoords);
            }
            let cell = &mut field.cells[coords.to_nd_index()];
            if !cell.is_mine() {
                *cell = Cell::Mine;
                field.mine_count += 1;
            }
        }

        Ok(field)
    }

    /// Stores the adjacent-mine count of every safe cell and returns the safe cells in
    /// row-major order.
    pub fn compute_counts(&mut self) -> Vec<Coord2> {
        let (height, width) = self.size();
        let mut safe_cells = Vec::with_capacity(self.safe_cell_count().into());

        for row in 0..height {
            for col in 0..width {
                let coords = (row, col);
                if self[coords].is_mine() {
                    continue;
                }
                let count = self.adjacent_mine_count(coords);
                self.cells[coords.to_nd_index()] = Cell::from_count(count);
                safe_cells.push(coords);
            }
        }

        safe_cells
    }

    pub fn size(&self) -> Coord2 {
        let (height, width) = self.cells.dim();
        (height as Coord, width as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords].is_mine()
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        neighbors(coords, self.size())
            .filter(|&pos| self.contains_mine(pos))
            .count() as u8
    }
}

impl Index<Coord2> for Minefield {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn brute_force_count(field: &Minefield, (row, col): Coord2) -> u8 {
        let (height, width) = field.size();
        let mut count = 0;
        for r in row.saturating_sub(1)..=row + 1 {
            for c in col.saturating_sub(1)..=col + 1 {
                if (r, c) != (row, col) && r < height && c < width && field[(r, c)].is_mine() {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn random_places_exact_count_and_skips_excluded_cell() {
        let mut rng = SmallRng::seed_from_u64(7);
        let shapes: [(Coord2, CellCount); 5] = [
            ((5, 5), 0),
            ((5, 5), 1),
            ((5, 5), 24),
            ((9, 9), 10),
            ((16, 32), 99),
        ];
        for (size, mines) in shapes {
            for _ in 0..20 {
                let start = (rng.random_range(0..size.0), rng.random_range(0..size.1));
                let field = Minefield::random(size, mines, start, &mut rng);
                let placed = field.cells.iter().filter(|cell| cell.is_mine()).count();

                assert_eq!(placed, usize::from(mines));
                assert_eq!(field.mine_count(), mines);
                assert!(!field.contains_mine(start));
            }
        }
    }

    #[test]
    fn random_is_reproducible_from_seed() {
        let a = Minefield::random((9, 9), 10, (4, 4), &mut SmallRng::seed_from_u64(42));
        let b = Minefield::random((9, 9), 10, (4, 4), &mut SmallRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn random_reaches_every_candidate_cell() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut hits = Array2::from_elem((5, 5), false);
        for _ in 0..500 {
            let field = Minefield::random((5, 5), 1, (0, 0), &mut rng);
            for ((row, col), cell) in field.cells.indexed_iter() {
                if cell.is_mine() {
                    hits[(row, col)] = true;
                }
            }
        }
        assert!(!hits[(0, 0)]);
        assert_eq!(hits.iter().filter(|&&hit| hit).count(), 24);
    }

    #[test]
    fn counts_match_neighbor_mines() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..10 {
            let mut field = Minefield::random((16, 16), 40, (8, 8), &mut rng);
            field.compute_counts();
            let (height, width) = field.size();
            for row in 0..height {
                for col in 0..width {
                    let cell = field[(row, col)];
                    if !cell.is_mine() {
                        assert_eq!(cell.count(), Some(brute_force_count(&field, (row, col))));
                    }
                }
            }
        }
    }

    #[test]
    fn safe_cells_are_row_major_and_complete() {
        let mut field = Minefield::from_mine_coords((5, 5), &[(0, 1), (2, 2), (4, 0)]).unwrap();
        let safe_cells = field.compute_counts();

        assert_eq!(safe_cells.len(), 22);
        assert_eq!(safe_cells.len(), usize::from(field.safe_cell_count()));
        let head: [Coord2; 3] = [(0, 0), (0, 2), (0, 3)];
        assert_eq!(safe_cells[..3], head);
        assert!(safe_cells.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(safe_cells.iter().all(|&pos| !field.contains_mine(pos)));
    }

    #[test]
    fn counts_around_a_single_mine() {
        let mut field = Minefield::from_mine_coords((5, 5), &[(4, 4)]).unwrap();
        field.compute_counts();

        assert_eq!(field[(0, 0)], Cell::Free);
        assert_eq!(field[(3, 3)], Cell::Count(1));
        assert_eq!(field[(3, 4)], Cell::Count(1));
        assert_eq!(field[(4, 3)], Cell::Count(1));
        assert_eq!(field[(2, 4)], Cell::Free);
        assert_eq!(field[(4, 4)], Cell::Mine);
    }

    #[test]
    fn from_mine_coords_rejects_off_board_and_collapses_duplicates() {
        assert_eq!(
            Minefield::from_mine_coords((5, 5), &[(5, 0)]),
            Err(GameError::InvalidCoords)
        );
        let field = Minefield::from_mine_coords((5, 5), &[(1, 1), (1, 1)]).unwrap();
        assert_eq!(field.mine_count(), 1);
    }
}
