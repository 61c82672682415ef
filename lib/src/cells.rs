//! Cells and coordinates on the torus.

/// The coordinates of a cell.
///
/// `(row, column)`, both 0-indexed.
pub type Coord = (usize, usize);

/// The offsets of the eight cells in the Moore neighborhood,
/// excluding the cell itself.
pub(crate) const NBHD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Wraps a coordinate into `0..bound`.
///
/// `-1` maps to `bound - 1`, `bound` maps to `0`.
/// Works for any offset, not only `±1`.
#[inline]
pub fn wrap(coord: isize, bound: usize) -> usize {
    debug_assert!(bound > 0, "cannot wrap into an empty range");
    coord.rem_euclid(bound as isize) as usize
}

/// The eight toroidal neighbors of a cell in a `rows × cols` grid.
///
/// On small grids the same cell may appear more than once,
/// e.g. on a `1 × 1` grid every neighbor is the cell itself.
pub fn toroidal_neighbors(
    (row, col): Coord,
    rows: usize,
    cols: usize,
) -> impl Iterator<Item = Coord> {
    NBHD.iter().map(move |&(dr, dc)| {
        (
            wrap(row as isize + dr, rows),
            wrap(col as isize + dc, cols),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_edges() {
        assert_eq!(wrap(-1, 5), 4);
        assert_eq!(wrap(5, 5), 0);
        assert_eq!(wrap(3, 5), 3);
        assert_eq!(wrap(-1, 1), 0);
        assert_eq!(wrap(-7, 3), 2);
    }

    #[test]
    fn corner_neighbors() {
        let mut nbhd: Vec<Coord> = toroidal_neighbors((0, 0), 4, 6).collect();
        nbhd.sort_unstable();
        assert_eq!(
            nbhd,
            vec![(0, 1), (0, 5), (1, 0), (1, 1), (1, 5), (3, 0), (3, 1), (3, 5)]
        );
    }
}
