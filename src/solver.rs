use crate::{Board, Config, Dictionary, Error, Heuristic, LetterInventory, Search};
use std::fmt;

/// The result of a build: the board and the tiles that could not be placed.
#[derive(Debug, Clone)]
pub struct Crossword<'a> {
    board: Board<'a>,
    remaining: LetterInventory,
}

impl<'a> Crossword<'a> {
    pub fn board(&self) -> &Board<'a> {
        &self.board
    }

    /// Tiles still in hand.
    pub fn remaining(&self) -> &LetterInventory {
        &self.remaining
    }

    /// True if every tile is on the board.
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty() && !self.board.is_empty()
    }

    pub fn into_board(self) -> Board<'a> {
        self.board
    }
}

impl<'a> fmt::Display for Crossword<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.board)
    }
}

/// Builds a connected crossword from a hand of tiles.
///
/// The first word is the highest scoring word that can be spelled from the hand and fits
/// on a row. After that the [`Search`] picks one crossing word at a time until the hand
/// is empty or no move is left.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    config: Config,
    search: Search,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default [`Config`].
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use bananagrams_solver::{Dictionary, Error, LetterInventory, Solver};
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "aa", "at"])?;
    /// let solver = Solver::new(&dictionary);
    /// let crossword = solver.build(LetterInventory::try_from("c a t s a")?)?;
    /// assert!(crossword.is_complete());
    /// assert_eq!(crossword.board().words(), ["AA", "CATS"]);
    /// # Ok::<(), Error>(())
    /// ```
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Solver<'a> {
        let config = Config::default();
        Solver {
            dictionary,
            search: Search::new(config.search_depth, config.weights.clone()),
            config,
        }
    }

    /// Create a solver with `config`.
    /// ## Errors
    /// If the config is not valid, see [`Config::validate`].
    pub fn with_config(dictionary: &'a Dictionary, config: Config) -> Result<Solver<'a>, Error> {
        config.validate()?;
        Ok(Solver {
            dictionary,
            search: Search::new(config.search_depth, config.weights.clone()),
            config,
        })
    }

    /// Replace the heuristic used at the search horizon; the configured weights are not used then.
    #[must_use]
    pub fn with_heuristic(mut self, heuristic: Box<dyn Heuristic>) -> Solver<'a> {
        self.search = Search::with_heuristic(self.config.search_depth, heuristic);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The highest scoring word that can be spelled from `inventory` and fits the board.
    /// Of equal scores the first in dictionary order wins.
    pub fn first_word(&self, inventory: &LetterInventory) -> Option<&'a str> {
        let dictionary = self.dictionary;
        let mut best: Option<(u32, &'a str)> = None;
        for word in dictionary.all_possible_words(inventory) {
            if word.chars().count() > self.config.side_length {
                continue;
            }
            let score = dictionary.word_score(word);
            if best.map_or(true, |(b, _)| score > b) {
                best = Some((score, word));
            }
        }
        best.map(|(_, word)| word)
    }

    /// Build a crossword using the tiles in `inventory`.
    ///
    /// Running out of moves is not an error: check [`Crossword::is_complete`].
    /// If no word can be spelled from the hand, the board stays empty.
    /// ## Errors
    /// Only on an internal inconsistency between the board and the hand.
    pub fn build(&self, inventory: LetterInventory) -> Result<Crossword<'a>, Error> {
        let mut board = Board::with_side_length(self.dictionary, self.config.side_length)?;
        let mut hand = inventory;
        if let Some(word) = self.first_word(&hand) {
            if board.add_first_word(word)? {
                hand.consume(word)?;
                return self.play_out(board, hand);
            }
        }
        Ok(Crossword {
            board,
            remaining: hand,
        })
    }

    /// Continue `crossword` after drawing `tiles`: the new tiles join the remaining ones.
    /// ## Errors
    /// See [`build`](Solver::build).
    /// ## Examples
    /// ```
    /// # use std::convert::TryFrom;
    /// # use bananagrams_solver::{Dictionary, Error, LetterInventory, Solver};
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "as"])?;
    /// let solver = Solver::new(&dictionary);
    /// let crossword = solver.build(LetterInventory::try_from("c a t s")?)?;
    /// let crossword = solver.extend(crossword, LetterInventory::try_from("a")?)?;
    /// assert!(crossword.is_complete());
    /// assert_eq!(crossword.board().word_frequency("AS"), 1);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn extend(
        &self,
        crossword: Crossword<'a>,
        tiles: LetterInventory,
    ) -> Result<Crossword<'a>, Error> {
        let Crossword { board, remaining } = crossword;
        if board.is_empty() {
            self.build(remaining + tiles)
        } else {
            self.play_out(board, remaining + tiles)
        }
    }

    fn play_out(
        &self,
        mut board: Board<'a>,
        mut hand: LetterInventory,
    ) -> Result<Crossword<'a>, Error> {
        while !hand.is_empty() {
            let mv = match self.search.find_move(&board, &hand)? {
                Some((mv, _)) => mv,
                None => break,
            };
            if !board.add_move(&mv)? {
                break;
            }
            hand.play(&mv)?;
        }
        Ok(Crossword {
            board,
            remaining: hand,
        })
    }
}

/// Build a crossword from `inventory` on a board of `side_length` squares, with the default search.
/// Returns the board and whether every tile was used.
/// ## Errors
/// If `side_length` is zero or even.
pub fn build<'a>(
    dictionary: &'a Dictionary,
    inventory: LetterInventory,
    side_length: usize,
) -> Result<(Board<'a>, bool), Error> {
    let config = Config::default().with_side_length(side_length);
    let crossword = Solver::with_config(dictionary, config)?.build(inventory)?;
    let complete = crossword.is_complete();
    Ok((crossword.into_board(), complete))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Orientation, Point};
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use std::convert::TryFrom;

    type Result<T> = std::result::Result<T, Error>;

    const WORDS: &[&str] = &[
        "cat", "cats", "at", "ta", "as", "aa", "sat", "tat", "oat", "oats", "to", "so", "taco",
        "tacos", "coat", "coats", "cot", "cost", "costa", "ascot", "act", "acts", "scat", "cast",
        "toast", "stoat", "oca", "tao", "ado", "dos", "sod", "cod", "doc", "docs", "dot",
    ];

    #[test]
    fn test_build() -> Result<()> {
        let dictionary = Dictionary::from_words(&["cat", "cats", "aa", "at", "ta", "as"])?;
        let solver = Solver::with_config(&dictionary, Config::default().with_side_length(11))?;
        let crossword = solver.build(LetterInventory::try_from("c a t s a")?)?;
        let board = crossword.board();
        let cats = board.placed("CATS", 1).unwrap();
        assert_eq!(cats.anchor, Point::new(-2, 0));
        assert_eq!(cats.orientation, Orientation::Horizontal);
        assert_eq!(board.word_frequency("CATS"), 1);
        assert!(board.is_valid());
        assert!(crossword.is_complete());
        assert_eq!(
            crossword.to_string().lines().nth(5),
            Some("- - - C A T S - - - -")
        );
        Ok(())
    }

    #[test]
    fn test_first_word() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let solver = Solver::new(&dictionary);
        let hand = LetterInventory::try_from("c a t s")?;
        // ACTS, CAST, CATS and SCAT score the same
        assert_eq!(solver.first_word(&hand), Some("ACTS"));
        let solver = Solver::with_config(&dictionary, Config::default().with_side_length(3))?;
        assert_eq!(solver.first_word(&hand), Some("ACT"));
        assert_eq!(solver.first_word(&LetterInventory::try_from("q")?), None);
        Ok(())
    }

    #[test]
    fn test_no_first_word() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let solver = Solver::new(&dictionary);
        let crossword = solver.build(LetterInventory::try_from("q z")?)?;
        assert!(crossword.board().is_empty());
        assert!(!crossword.is_complete());
        assert_eq!(crossword.remaining().total(), 2);
        Ok(())
    }

    #[test]
    fn test_stuck() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let solver = Solver::new(&dictionary);
        let crossword = solver.build(LetterInventory::try_from("c a t q")?)?;
        assert!(!crossword.is_complete());
        assert_eq!(crossword.remaining().count('Q'), 1);
        assert!(crossword.board().is_valid());
        Ok(())
    }

    #[test]
    fn test_extend() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let solver = Solver::new(&dictionary);
        let crossword = solver.build(LetterInventory::try_from("c a t")?)?;
        assert!(crossword.is_complete());
        let placed = crossword.board().placed_words().len();
        let crossword = solver.extend(crossword, LetterInventory::try_from("s o")?)?;
        assert!(crossword.board().placed_words().len() > placed);
        assert!(crossword.board().is_valid());
        assert!(crossword.board().placed("ACT", 1).is_some());
        Ok(())
    }

    #[test]
    fn test_build_fn() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let (board, complete) = build(&dictionary, LetterInventory::try_from("d o c s")?, 9)?;
        assert!(complete);
        assert_eq!(board.side_length(), 9);
        assert_eq!(board.words(), ["DOCS"]);
        assert!(build(&dictionary, LetterInventory::new(), 8).is_err());
        Ok(())
    }

    #[test]
    fn test_random_hands() -> Result<()> {
        let dictionary = Dictionary::from_words(WORDS)?;
        let solver = Solver::new(&dictionary);
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool: Vec<char> = "CCAAAATTTTSSSOOODD".chars().collect();
        for _ in 0..10 {
            pool.shuffle(&mut rng);
            let hand: LetterInventory = pool.iter().take(8).copied().collect();
            let crossword = solver.build(hand.clone())?;
            let board = crossword.board();
            assert!(board.is_valid());
            if let Some(first) = board.placed_words().first() {
                assert_eq!(first.orientation, Orientation::Horizontal);
                assert_eq!(first.anchor.y, 0);
            }
            // no letter is on the board or in hand more often than it was drawn
            let on_board: LetterInventory = board
                .grid()
                .iter()
                .filter_map(|cell| cell.letter())
                .collect();
            for letter in hand.letters().iter() {
                assert!(
                    on_board.count(letter) + crossword.remaining().count(letter)
                        <= hand.count(letter)
                );
            }
            assert!(on_board.letters().is_subset(&hand.letters()));
        }
        Ok(())
    }
}
