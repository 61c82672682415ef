//! Loads a grid from a whitespace-separated token stream.
//!
//! The stream holds, in order:
//!
//! 1. the number of rows,
//! 2. the number of columns,
//! 3. `rows * cols` boolean tokens in row-major order.
//!
//! Booleans are `true` / `false` or `1` / `0`, case-insensitive.
//!
//! ```plaintext
//! 3 3
//! false false false
//! false true  false
//! false false false
//! ```

use crate::{
    error::Error,
    grid::{cell_count, Grid},
};
use log::debug;

fn parse_dimension<'a, I>(tokens: &mut I, what: &'static str) -> Result<usize, Error>
where
    I: Iterator<Item = &'a str>,
{
    let token = tokens.next().ok_or(Error::MissingToken(what))?;
    let n: usize = token
        .parse()
        .map_err(|_| Error::InvalidDimension(token.to_owned()))?;
    if n == 0 {
        return Err(Error::NonPositiveError);
    }
    Ok(n)
}

fn parse_bool(index: usize, token: &str) -> Result<bool, Error> {
    if token.eq_ignore_ascii_case("true") || token == "1" {
        Ok(true)
    } else if token.eq_ignore_ascii_case("false") || token == "0" {
        Ok(false)
    } else {
        Err(Error::InvalidBool {
            index,
            token: token.to_owned(),
        })
    }
}

/// Reads a grid from the token stream.
///
/// Fails on malformed dimensions, non-boolean cell tokens,
/// too few cells, or anything left after the last cell.
/// No partially filled grid is ever returned.
pub fn parse_grid(input: &str) -> Result<Grid, Error> {
    let mut tokens = input.split_whitespace();
    let rows = parse_dimension(&mut tokens, "number of rows")?;
    let cols = parse_dimension(&mut tokens, "number of columns")?;

    let len = cell_count(rows, cols)?;
    let cells = tokens
        .by_ref()
        .take(len)
        .enumerate()
        .map(|(index, token)| parse_bool(index, token))
        .collect::<Result<Vec<_>, _>>()?;
    if cells.len() < len {
        return Err(Error::MissingToken("cell"));
    }
    let trailing = tokens.count();
    if trailing > 0 {
        return Err(Error::TrailingTokens(trailing));
    }

    debug!("loaded a {}x{} grid", rows, cols);
    Grid::from_cells(rows, cols, cells)
}
