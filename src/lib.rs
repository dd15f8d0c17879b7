//! A Bananagrams library for Rust.
//! <br>
//! This crate builds a connected crossword that uses every tile of a Bananagrams hand.
//! It picks a high value first word, then adds one crossing word at a time, guided by a
//! depth limited search and a heuristic that prefers getting rid of hard to place tiles.
//! It can use the `rayon` crate to filter the dictionary in parallel.
//!
//! # How to use `bananagrams_solver`
//! Start by creating a dictionary, from a file with one word per line or from a list of words.
//! Then give a hand of tiles to a [`Solver`]. The solver returns a [`Crossword`]: the board,
//! and the tiles that could not be placed. A [`Config`] sets the board size, the search depth
//! and the heuristic weights.
//!
//! # Basic usage
//!  ```
//! # use std::convert::TryFrom;
//! use bananagrams_solver::{Dictionary, LetterInventory, Solver};
//!
//! let dictionary = Dictionary::from_words(&["cat", "cats", "aa", "at", "ta"])?;
//! let tiles = LetterInventory::try_from("c a t s a")?;
//! let crossword = Solver::new(&dictionary).build(tiles)?;
//! assert!(crossword.is_complete());
//! for word in crossword.board().placed_words() {
//!     println!("{}", word);
//! }
//! println!("{}", crossword);
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! # About implementation
//! The board is a square grid centred on the origin. Every placement is tried on a copy of the
//! board and only kept if every run of two or more letters, across and down, is a word.
//! Words are identified by their text and an ordinal, so the same word can be placed twice.
mod board;
mod config;
mod dictionary;
mod error;
mod grid;
mod heuristic;
mod inventory;
mod letter_scores;
mod letterset;
mod moves;
mod search;
mod solver;

pub use board::Board;
pub use config::{Config, DEFAULT_SEARCH_DEPTH};
pub use dictionary::Dictionary;
pub use error::Error;
pub use grid::{Cell, Grid, Point, DEFAULT_SIDE_LENGTH};
pub use heuristic::{DefaultHeuristic, Heuristic, Penalties, Score, Weights, WIN_SCORE};
pub use inventory::{LetterCounts, LetterInventory};
pub use letter_scores::LetterScores;
pub use letterset::LetterSet;
pub use moves::{Move, Orientation, PlacedWord, WordRef};
pub use search::Search;
pub use solver::{build, Crossword, Solver};
