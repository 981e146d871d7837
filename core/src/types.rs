/// Row or column index.
pub type Coord = u8;

/// Number of cells, wide enough for a 255x255 board.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Converts board coordinates into the index `ndarray` expects for the grid.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Whether `coords` lies inside a board of `size`.
pub const fn in_bounds(coords: Coord2, size: Coord2) -> bool {
    coords.0 < size.0 && coords.1 < size.1
}

/// Walks the 3x3 window around `center` in row-major order, clipped to the board, skipping
/// `center` itself.
#[derive(Clone, Debug)]
pub struct NeighborIter {
    center: Coord2,
    last: Coord2,
    first_col: Coord,
    next: Option<Coord2>,
}

impl NeighborIter {
    pub fn new(center: Coord2, size: Coord2) -> Self {
        let (row, col) = center;
        let first = (row.saturating_sub(1), col.saturating_sub(1));
        let last = (
            row.saturating_add(1).min(size.0.saturating_sub(1)),
            col.saturating_add(1).min(size.1.saturating_sub(1)),
        );
        let next = in_bounds(center, size).then_some(first);

        Self {
            center,
            last,
            first_col: first.1,
            next,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let current = self.next?;
            let (row, col) = current;
            self.next = if col < self.last.1 {
                Some((row, col + 1))
            } else if row < self.last.0 {
                Some((row + 1, self.first_col))
            } else {
                None
            };

            if current != self.center {
                return Some(current);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors: Vec<_> = NeighborIter::new((1, 1), (3, 3)).collect();

        assert_eq!(neighbors.len(), 8);
        assert!(!neighbors.contains(&(1, 1)));
        assert!(neighbors.contains(&(0, 0)));
        assert!(neighbors.contains(&(2, 2)));
    }

    #[test]
    fn corner_cell_is_clipped_to_bounds() {
        let neighbors: Vec<_> = NeighborIter::new((0, 0), (3, 3)).collect();

        assert_eq!(neighbors, [(0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn single_row_board() {
        let neighbors: Vec<_> = NeighborIter::new((0, 1), (1, 3)).collect();

        assert_eq!(neighbors, [(0, 0), (0, 2)]);
    }

    #[test]
    fn center_outside_board_has_no_neighbors() {
        assert_eq!(NeighborIter::new((3, 0), (3, 3)).count(), 0);
        assert_eq!(NeighborIter::new((0, 0), (0, 0)).count(), 0);
    }

    #[test]
    fn bounds_check() {
        assert!(in_bounds((2, 0), (3, 1)));
        assert!(!in_bounds((3, 0), (3, 1)));
        assert!(!in_bounds((0, 1), (3, 1)));
    }
}
