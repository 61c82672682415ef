//! World configuration.

use crate::{cells::Coord, error::Error, grid::Grid, rules::Life, world::World};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// World configuration.
///
/// The world will be generated from this configuration.
/// The default configuration generates the same world as [`World::default`].
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Number of rows.
    #[educe(Default = 5)]
    pub rows: usize,

    /// Number of columns.
    #[educe(Default = 5)]
    pub cols: usize,

    /// Living cells of the initial generation, as `(row, column)`.
    ///
    /// All other cells are dead.
    #[educe(Default(expression = "crate::world::DEFAULT_ALIVE.to_vec()"))]
    pub alive_cells: Vec<Coord>,

    /// The rule string of the cellular automaton.
    #[educe(Default(expression = "String::from(\"B3/S23\")"))]
    pub rule_string: String,
}

impl Config {
    /// Sets up a new configuration with given size and no living cells.
    pub fn new(rows: usize, cols: usize) -> Self {
        Config {
            rows,
            cols,
            alive_cells: Vec::new(),
            ..Config::default()
        }
    }

    /// Sets the living cells.
    pub fn set_alive_cells<I: IntoIterator<Item = Coord>>(mut self, alive_cells: I) -> Self {
        self.alive_cells = alive_cells.into_iter().collect();
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: Into<String>>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.into();
        self
    }

    /// Creates the initial grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        Grid::with_alive_cells(self.rows, self.cols, self.alive_cells.iter().copied())
    }

    /// Creates a new world from the configuration.
    ///
    /// Returns an error if the size is zero, a living cell lies outside
    /// the grid, or the rule string is invalid.
    pub fn world(&self) -> Result<World, Error> {
        let rule: Life = self.rule_string.parse()?;
        Ok(World::with_rule(self.grid()?, rule))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_default_world() -> Result<(), Error> {
        assert_eq!(Config::default().world()?, World::default());
        Ok(())
    }

    #[test]
    fn invalid() {
        assert_eq!(Config::new(0, 4).world(), Err(Error::NonPositiveError));
        assert_eq!(
            Config::new(usize::MAX, 2).world(),
            Err(Error::GridTooLarge(usize::MAX, 2))
        );
        assert_eq!(
            Config::new(3, 3).set_alive_cells([(3, 0)]).world(),
            Err(Error::CellOutOfRange((3, 0)))
        );
        assert!(matches!(
            Config::new(3, 3).set_rule_string("B3/S2x").world(),
            Err(Error::ParseRuleError(_))
        ));
    }

    #[test]
    fn rule_string() -> Result<(), Error> {
        let world = Config::new(4, 4).set_rule_string("B36/S23").world()?;
        assert_eq!(world.rule().to_string(), "B36/S23");
        assert!(!world.is_alive());
        Ok(())
    }
}
