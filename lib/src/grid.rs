//! A fixed-size grid of cells with toroidal adjacency.

use crate::{
    cells::{toroidal_neighbors, Coord},
    error::Error,
};
use rand::Rng;
use std::fmt::{self, Display, Formatter};

/// A `rows × cols` table of cells, `true` meaning alive.
///
/// The shape never changes after construction.
/// Cells are stored in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<bool>,
}

/// Number of cells in a `rows × cols` grid.
///
/// Fails if either side is zero, or if the grid could not be allocated.
pub(crate) fn cell_count(rows: usize, cols: usize) -> Result<usize, Error> {
    if rows == 0 || cols == 0 {
        return Err(Error::NonPositiveError);
    }
    match rows.checked_mul(cols) {
        Some(len) if len <= isize::MAX as usize => Ok(len),
        _ => Err(Error::GridTooLarge(rows, cols)),
    }
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        let len = cell_count(rows, cols)?;
        Ok(Grid {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Creates a grid from cells in row-major order.
    ///
    /// Fails if the number of cells is not `rows * cols`.
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<bool>) -> Result<Self, Error> {
        let expected = cell_count(rows, cols)?;
        if cells.len() < expected {
            return Err(Error::MissingToken("cell"));
        }
        if cells.len() > expected {
            return Err(Error::TrailingTokens(cells.len() - expected));
        }
        Ok(Grid { rows, cols, cells })
    }

    /// Creates a grid with the given living cells.
    pub fn with_alive_cells<I>(rows: usize, cols: usize, alive: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Grid::new(rows, cols)?;
        for coord in alive {
            if !grid.contains(coord) {
                return Err(Error::CellOutOfRange(coord));
            }
            grid.set(coord, true);
        }
        Ok(grid)
    }

    /// Creates a random grid where each cell is alive with probability `density`.
    ///
    /// `density` is clamped into `[0, 1]`.
    pub fn random<R: Rng>(
        rows: usize,
        cols: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, Error> {
        let mut grid = Grid::new(rows, cols)?;
        let density = density.clamp(0.0, 1.0);
        for cell in grid.cells.iter_mut() {
            *cell = rng.gen_bool(density);
        }
        Ok(grid)
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the coordinates lie inside the grid.
    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.rows && col < self.cols
    }

    /// The dense id of a cell, `row * cols + col`.
    #[inline]
    pub(crate) fn index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "cell {:?} is outside the {}x{} grid",
            coord,
            self.rows,
            self.cols
        );
        coord.0 * self.cols + coord.1
    }

    /// The state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    /// Direct access never wraps around.
    #[inline]
    pub fn get(&self, coord: Coord) -> bool {
        self.cells[self.index(coord)]
    }

    /// The state of a cell, or `None` if the coordinates are outside the grid.
    pub fn try_get(&self, coord: Coord) -> Option<bool> {
        if self.contains(coord) {
            Some(self.get(coord))
        } else {
            None
        }
    }

    /// Sets the state of a cell.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    #[inline]
    pub fn set(&mut self, coord: Coord, alive: bool) {
        let index = self.index(coord);
        self.cells[index] = alive;
    }

    /// Iterates over all coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }

    /// Iterates over the coordinates of all living cells in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |&coord| self.get(coord))
    }

    /// Number of living cells.
    pub fn alive_count(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Whether every cell is dead.
    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    /// Number of living cells among the eight toroidal neighbors of a cell.
    ///
    /// The cell itself is never counted. On grids narrower than three cells
    /// a wrapped neighbor may be the same cell as another neighbor, or the
    /// cell itself, and is then counted once per position.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn alive_neighbors(&self, coord: Coord) -> u8 {
        assert!(
            self.contains(coord),
            "cell {:?} is outside the {}x{} grid",
            coord,
            self.rows,
            self.cols
        );
        toroidal_neighbors(coord, self.rows, self.cols)
            .filter(|&nbhd| self.get(nbhd))
            .count() as u8
    }
}

/// Displays the grid in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
///
/// * **Dead** cells are represented by `.`;
/// * **Living** cells are represented by `o`.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            for &alive in row {
                f.write_str(if alive { "o" } else { "." })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}
