//! Communities: maximal groups of living cells connected through
//! toroidal 8-neighbor adjacency.

use crate::{cells::toroidal_neighbors, grid::Grid, union_find::UnionFind};
use log::trace;
use std::collections::HashMap;

/// Unions every living cell with each of its living neighbors.
fn connect(grid: &Grid) -> UnionFind {
    let mut uf = UnionFind::new(grid.rows(), grid.cols());
    for coord in grid.alive_cells() {
        for nbhd in toroidal_neighbors(coord, grid.rows(), grid.cols()) {
            if grid.get(nbhd) {
                uf.union_cells(coord, nbhd);
            }
        }
    }
    uf
}

/// Number of communities in the grid.
///
/// Dead cells never count. An all-dead grid has no community.
pub fn count_communities(grid: &Grid) -> usize {
    community_sizes(grid).len()
}

/// Sizes of all communities in the grid, largest first.
pub fn community_sizes(grid: &Grid) -> Vec<usize> {
    let mut uf = connect(grid);
    let mut roots: HashMap<usize, usize> = HashMap::new();
    for coord in grid.alive_cells() {
        let root = uf.find_cell(coord);
        *roots.entry(root).or_insert(0) += 1;
    }
    let mut sizes: Vec<usize> = roots.into_values().collect();
    sizes.sort_unstable_by(|a, b| b.cmp(a));
    trace!(
        "{} communities among {} living cells",
        sizes.len(),
        grid.alive_count()
    );
    sizes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(count_communities(&grid), 0);
        assert!(community_sizes(&grid).is_empty());
    }

    #[test]
    fn full() {
        for (rows, cols) in [(2, 2), (3, 5), (6, 6)] {
            let grid = Grid::from_cells(rows, cols, vec![true; rows * cols]).unwrap();
            assert_eq!(count_communities(&grid), 1);
            assert_eq!(community_sizes(&grid), vec![rows * cols]);
        }
    }

    #[test]
    fn single_cell() {
        let grid = Grid::with_alive_cells(3, 3, [(1, 1)]).unwrap();
        assert_eq!(count_communities(&grid), 1);
    }

    #[test]
    fn diagonal_is_connected() {
        let grid = Grid::with_alive_cells(5, 5, [(1, 1), (2, 2), (3, 3)]).unwrap();
        assert_eq!(count_communities(&grid), 1);
    }

    #[test]
    fn wraps_around() {
        let grid = Grid::with_alive_cells(5, 5, [(0, 0), (4, 4), (0, 2), (2, 2)]).unwrap();
        assert_eq!(community_sizes(&grid), vec![2, 1, 1]);
    }

    #[test]
    fn separate_blocks() {
        let grid = Grid::with_alive_cells(
            8,
            8,
            [(1, 1), (1, 2), (2, 1), (2, 2), (5, 5), (5, 6), (1, 5)],
        )
        .unwrap();
        assert_eq!(count_communities(&grid), 3);
        assert_eq!(community_sizes(&grid), vec![4, 2, 1]);
    }
}
