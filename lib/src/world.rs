//! The world.

use crate::{
    cells::Coord,
    communities::{community_sizes, count_communities},
    error::Error,
    grid::Grid,
    load::parse_grid,
    rules::Life,
};
use log::{debug, trace};
use std::str::FromStr;

/// Living cells of the default world.
pub(crate) const DEFAULT_ALIVE: [Coord; 5] = [(1, 1), (1, 3), (2, 2), (3, 2), (3, 3)];

/// The world: a grid evolving under a rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct World {
    /// The rule of the cellular automaton.
    rule: Life,

    /// The current generation.
    grid: Grid,

    /// Living cells summed over every generation produced so far, plus the
    /// initial grid unless the world was loaded.
    ///
    /// It is not the number of living cells in the current generation.
    total_alive: u64,

    /// Number of generations advanced so far.
    generation: u64,
}

impl World {
    /// Creates a world from the initial grid, with Conway's rule.
    ///
    /// The cumulative counter starts at the number of living cells in the grid.
    pub fn new(grid: Grid) -> Self {
        World::with_rule(grid, Life::conway())
    }

    /// Creates a world from the initial grid and the rule.
    pub fn with_rule(grid: Grid, rule: Life) -> Self {
        let total_alive = grid.alive_count() as u64;
        debug!(
            "new {}x{} world, rule {}, {} living cells",
            grid.rows(),
            grid.cols(),
            rule,
            total_alive
        );
        World {
            rule,
            grid,
            total_alive,
            generation: 0,
        }
    }

    /// Creates a world from a loaded grid, with the given rule.
    ///
    /// Unlike [`with_rule`](Self::with_rule), the cumulative counter starts
    /// at 0: only generations produced after loading are summed.
    pub fn from_loaded(grid: Grid, rule: Life) -> Self {
        World {
            total_alive: 0,
            ..World::with_rule(grid, rule)
        }
    }

    /// Loads a world from a token stream, with Conway's rule.
    ///
    /// See [`parse_grid`](crate::parse_grid) for the format.
    /// The cumulative counter starts at 0.
    pub fn parse(input: &str) -> Result<Self, Error> {
        Ok(World::from_loaded(parse_grid(input)?, Life::conway()))
    }

    /// The current generation.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The rule.
    pub fn rule(&self) -> &Life {
        &self.rule
    }

    /// Living cells summed over every generation since the start,
    /// plus the initial grid unless the world was loaded.
    pub fn total_alive_cells(&self) -> u64 {
        self.total_alive
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the cell is alive.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the grid.
    pub fn cell_state(&self, coord: Coord) -> bool {
        self.grid.get(coord)
    }

    /// Whether any cell is alive.
    pub fn is_alive(&self) -> bool {
        !self.grid.is_empty()
    }

    /// Number of living toroidal neighbors of a cell.
    pub fn alive_neighbors(&self, coord: Coord) -> u8 {
        self.grid.alive_neighbors(coord)
    }

    /// Computes the next generation without changing the world.
    ///
    /// Every neighbor count is taken from the current grid.
    pub fn compute_next_grid(&self) -> Grid {
        let mut next = self.grid.clone();
        for coord in self.grid.coords() {
            let alive = self.grid.get(coord);
            let neighbors = self.grid.alive_neighbors(coord);
            next.set(coord, self.rule.next_state(alive, neighbors));
        }
        next
    }

    /// Advances one generation.
    ///
    /// The living cells of the new generation are added to
    /// [`total_alive_cells`](Self::total_alive_cells).
    pub fn step(&mut self) {
        self.grid = self.compute_next_grid();
        self.generation += 1;
        let alive = self.grid.alive_count() as u64;
        self.total_alive += alive;
        trace!(
            "generation {}: {} living cells, {} in total",
            self.generation,
            alive,
            self.total_alive
        );
    }

    /// Advances `n` generations. Does nothing when `n` is 0.
    pub fn step_n(&mut self, n: u64) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Number of communities in the current generation.
    pub fn count_communities(&self) -> usize {
        count_communities(&self.grid)
    }

    /// Sizes of the communities in the current generation, largest first.
    pub fn community_sizes(&self) -> Vec<usize> {
        community_sizes(&self.grid)
    }
}

/// A `5 × 5` world with five living cells, which dies out after four generations.
///
/// ```plaintext
/// .....
/// .o.o.
/// ..o..
/// ..oo.
/// .....
/// ```
impl Default for World {
    fn default() -> Self {
        let mut grid = Grid {
            rows: 5,
            cols: 5,
            cells: vec![false; 25],
        };
        for coord in DEFAULT_ALIVE {
            grid.set(coord, true);
        }
        World::new(grid)
    }
}

impl FromStr for World {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        World::parse(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_world() {
        let world = World::default();
        assert_eq!(world.total_alive_cells(), 5);
        assert_eq!(world.generation(), 0);
        assert!(world.cell_state((1, 3)));
        assert!(!world.cell_state((1, 2)));
        assert_eq!(world.grid().to_string(), ".....\n.o.o.\n..o..\n..oo.\n.....\n");
    }

    #[test]
    fn next_grid_leaves_world_untouched() {
        let world = World::default();
        let next = world.compute_next_grid();
        assert_ne!(&next, world.grid());
        assert_eq!(world.generation(), 0);
        assert_eq!(world.total_alive_cells(), 5);
    }

    #[test]
    fn counter_accumulates() {
        let mut world = World::default();
        let mut expected = 5;
        for _ in 0..6 {
            world.step();
            expected += world.grid().alive_count() as u64;
            assert_eq!(world.total_alive_cells(), expected);
        }
        assert_eq!(world.generation(), 6);
    }

    #[test]
    fn blinker_oscillates() {
        let grid = Grid::with_alive_cells(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut world = World::new(grid.clone());
        world.step();
        let vertical = Grid::with_alive_cells(5, 5, [(1, 2), (2, 2), (3, 2)]).unwrap();
        assert_eq!(world.grid(), &vertical);
        world.step();
        assert_eq!(world.grid(), &grid);
        assert_eq!(world.total_alive_cells(), 9);
    }

    #[test]
    fn loaded_counter_starts_at_zero() -> Result<(), Error> {
        let mut world: World = "5 5 \
            0 0 0 0 0 \
            0 0 1 0 0 \
            0 0 1 0 0 \
            0 0 1 0 0 \
            0 0 0 0 0"
            .parse()?;
        assert_eq!(world.grid().alive_count(), 3);
        assert_eq!(world.total_alive_cells(), 0);
        world.step();
        assert_eq!(world.total_alive_cells(), 3);

        let grid = world.grid().clone();
        assert_eq!(World::new(grid.clone()).total_alive_cells(), 3);
        assert_eq!(World::from_loaded(grid, Life::conway()).total_alive_cells(), 0);
        Ok(())
    }

    #[test]
    fn step_zero() {
        let mut world = World::default();
        world.step_n(0);
        assert_eq!(world, World::default());
    }
}
