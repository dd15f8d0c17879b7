use crate::grid::DEFAULT_SIDE_LENGTH;
use crate::{Error, Weights};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of moves the search looks ahead when none is given.
pub const DEFAULT_SEARCH_DEPTH: usize = 1;

/// Settings for building a crossword.
/// ## Examples
/// ```
/// # use bananagrams_solver::{Config, Error};
/// let config = Config::default().with_side_length(21).with_search_depth(2);
/// config.validate()?;
/// assert!(Config::default().with_side_length(20).validate().is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Number of squares along one side of the board; odd.
    pub side_length: usize,
    /// Number of moves to look ahead; at least 1.
    pub search_depth: usize,
    pub weights: Weights,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            side_length: DEFAULT_SIDE_LENGTH,
            search_depth: DEFAULT_SEARCH_DEPTH,
            weights: Weights::default(),
        }
    }
}

impl Config {
    #[must_use]
    pub fn with_side_length(mut self, side_length: usize) -> Self {
        self.side_length = side_length;
        self
    }

    #[must_use]
    pub fn with_search_depth(mut self, search_depth: usize) -> Self {
        self.search_depth = search_depth;
        self
    }

    #[must_use]
    pub fn with_weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    /// Check the settings.
    /// ## Errors
    /// - If the side length is zero or even.
    /// - If the search depth is zero.
    pub fn validate(&self) -> Result<(), Error> {
        if self.side_length % 2 == 0 {
            return Err(Error::InvalidSideLength(self.side_length));
        }
        if self.search_depth == 0 {
            return Err(Error::InvalidSearchDepth(self.search_depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() -> Result<(), Error> {
        let config = Config::default();
        assert_eq!(config.side_length, 33);
        assert_eq!(config.search_depth, 1);
        assert_eq!(config.weights.tile_penalty, 20);
        config.validate()
    }

    #[test]
    #[should_panic(expected = "InvalidSideLength(0)")]
    fn test_zero_side_length() {
        Config::default().with_side_length(0).validate().unwrap();
    }

    #[test]
    #[should_panic(expected = "InvalidSearchDepth(0)")]
    fn test_zero_depth() {
        Config::default().with_search_depth(0).validate().unwrap();
    }
}
