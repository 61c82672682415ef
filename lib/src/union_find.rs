//! Weighted quick union over the cells of a grid.

use crate::cells::Coord;

/// A disjoint-set forest over the cells of a `rows × cols` grid.
///
/// Each cell is identified by its dense id `row * cols + col`.
/// Unions attach the root of the smaller tree under the root of the larger,
/// and [`find`](Self::find) halves the path it walks.
#[derive(Clone, Debug)]
pub struct UnionFind {
    /// Number of columns, used to flatten coordinates.
    cols: usize,

    /// The parent of each id. A root is its own parent.
    parent: Vec<usize>,

    /// Number of ids in the tree rooted at each id.
    ///
    /// Only meaningful for roots.
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `rows * cols` singleton sets.
    pub fn new(rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        UnionFind {
            cols,
            parent: (0..len).collect(),
            size: vec![1; len],
        }
    }

    /// Total number of ids.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Whether there are no ids at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// The dense id of a cell.
    #[inline]
    pub fn id(&self, (row, col): Coord) -> usize {
        debug_assert!(col < self.cols);
        row * self.cols + col
    }

    /// The root of the set containing `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` is out of range.
    pub fn find(&mut self, mut id: usize) -> usize {
        while self.parent[id] != id {
            let grandparent = self.parent[self.parent[id]];
            self.parent[id] = grandparent;
            id = grandparent;
        }
        id
    }

    /// The root of the set containing a cell.
    pub fn find_cell(&mut self, coord: Coord) -> usize {
        let id = self.id(coord);
        self.find(id)
    }

    /// Merges the sets containing `a` and `b`.
    ///
    /// Returns `false` if they were already in the same set.
    /// On equal sizes, the root of `b` goes under the root of `a`.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        let (big, small) = if self.size[root_a] < self.size[root_b] {
            (root_b, root_a)
        } else {
            (root_a, root_b)
        };
        self.parent[small] = big;
        self.size[big] += self.size[small];
        true
    }

    /// Merges the sets containing two cells.
    pub fn union_cells(&mut self, a: Coord, b: Coord) -> bool {
        let a = self.id(a);
        let b = self.id(b);
        self.union(a, b)
    }

    /// Whether `a` and `b` are in the same set.
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of ids in the set containing `id`.
    pub fn set_size(&mut self, id: usize) -> usize {
        let root = self.find(id);
        self.size[root]
    }

    /// Number of distinct sets.
    pub fn count_sets(&self) -> usize {
        self.parent
            .iter()
            .enumerate()
            .filter(|&(id, &parent)| id == parent)
            .count()
    }
}
