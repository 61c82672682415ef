//! All kinds of errors in this crate.

use crate::cells::Coord;
use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Number of rows and number of columns should be positive.
    NonPositiveError,
    /// A {0}x{1} grid is too large.
    GridTooLarge(usize, usize),
    /// Unexpected end of input: missing {0}.
    MissingToken(&'static str),
    /// Invalid grid dimension: {0:?}.
    InvalidDimension(String),
    /// Cell token #{index} is not a boolean: {token:?}.
    InvalidBool {
        /// Position of the token among the cell tokens, 0-indexed.
        index: usize,
        /// The offending token.
        token: String,
    },
    /// Found {0} token(s) after the last cell.
    TrailingTokens(usize),
    /// Cell at {0:?} is outside the grid.
    CellOutOfRange(Coord),
    /// Invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
}
