//! Totalistic Life-like rules.
//!
//! For the notations of rule strings, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Rulestring).

use crate::error::Error;
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// A totalistic Life-like rule on the Moore neighborhood.
///
/// The default is Conway's Game of Life, `B3/S23`:
///
/// | current state | living neighbors | next state |
/// |---|---|---|
/// | alive | 0–1 | dead |
/// | alive | 2–3 | alive |
/// | alive | ≥ 4 | dead |
/// | dead  | 3   | alive |
/// | dead  | otherwise | dead |
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `birth[n]`: whether a dead cell with `n` living neighbors is born.
    birth: [bool; 9],
    /// `survival[n]`: whether a living cell with `n` living neighbors survives.
    survival: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    ///
    /// Neighbor counts above 8 are ignored.
    pub fn new(b: &[u8], s: &[u8]) -> Self {
        let mut birth = [false; 9];
        let mut survival = [false; 9];
        for &n in b.iter().filter(|&&n| n <= 8) {
            birth[n as usize] = true;
        }
        for &n in s.iter().filter(|&&n| n <= 8) {
            survival[n as usize] = true;
        }
        Life { birth, survival }
    }

    /// Conway's Game of Life.
    pub fn conway() -> Self {
        Life::new(&[3], &[2, 3])
    }

    /// The state of a cell in the next generation.
    ///
    /// `neighbors` greater than 8 is treated as 8.
    #[inline]
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let n = neighbors.min(8) as usize;
        if alive {
            self.survival[n]
        } else {
            self.birth[n]
        }
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::conway()
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(&b, &s)
    }
}

impl FromStr for Life {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule: Life = ParseLife::parse_rule(input)?;
        Ok(rule)
    }
}

/// Writes the rule in `B/S` notation, e.g. `B3/S23`.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("B")?;
        for n in (0..=8).filter(|&n| self.birth[n]) {
            write!(f, "{}", n)?;
        }
        f.write_str("/S")?;
        for n in (0..=8).filter(|&n| self.survival[n]) {
            write!(f, "{}", n)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conway_table() {
        let rule = Life::conway();
        for n in 0..=8 {
            assert_eq!(rule.next_state(true, n), n == 2 || n == 3, "alive, {}", n);
            assert_eq!(rule.next_state(false, n), n == 3, "dead, {}", n);
        }
    }

    #[test]
    fn parse() -> Result<(), Error> {
        assert_eq!("B3/S23".parse::<Life>()?, Life::conway());
        let highlife: Life = "B36/S23".parse()?;
        assert!(highlife.next_state(false, 6));
        assert!(!highlife.next_state(true, 6));
        assert_eq!(highlife.to_string(), "B36/S23");
        Ok(())
    }

    #[test]
    fn parse_error() {
        assert!(matches!(
            "B3/S2a".parse::<Life>(),
            Err(Error::ParseRuleError(_))
        ));
    }
}
