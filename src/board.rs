use crate::grid::{Grid, Point, DEFAULT_SIDE_LENGTH};
use crate::{Dictionary, Error, LetterInventory, LetterSet, Move, Orientation, PlacedWord, WordRef};

#[cfg(feature = "flame_it")]
use flamer::flame;
#[cfg(feature = "rayon")]
use rayon::prelude::*;
use std::collections::HashMap;
use std::fmt;
use std::iter::once;

/// Index of a word in the placement order.
type WordId = usize;

/// Display the board as one line per row, top row first.
/// Empty squares show as "-".
impl<'a> fmt::Display for Board<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

/// A crossword in progress.
/// * A square grid of letters centred on the origin,
/// * the placed words, in the order they were placed,
/// * the dictionary that decides which runs of letters are words.
///
/// Every placement is written on a scratch copy of the grid and only committed if every
/// run through the new letters is a word, so a failed placement leaves the board unchanged.
/// The grid is valid after every commit, so runs away from the new word need no recheck.
#[derive(Debug, Clone)]
pub struct Board<'a> {
    dictionary: &'a Dictionary,
    grid: Grid,
    words: Vec<PlacedWord>,
    index: HashMap<String, Vec<WordId>>,
}

impl<'a> Board<'a> {
    /// Create an empty board of 33x33 squares that checks words with `dictionary`.
    /// ## Examples
    ///```
    /// # use bananagrams_solver::{Board, Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat"])?;
    /// let board = Board::new(&dictionary);
    /// assert_eq!(board.side_length(), 33);
    /// # Ok::<(), Error>(())
    ///```
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Board<'a> {
        Board {
            dictionary,
            grid: Grid::with_half(DEFAULT_SIDE_LENGTH / 2),
            words: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Create an empty board of `side` x `side` squares.
    /// ## Errors
    /// If `side` is zero or even.
    pub fn with_side_length(dictionary: &'a Dictionary, side: usize) -> Result<Board<'a>, Error> {
        Ok(Board {
            grid: Grid::new(side)?,
            ..Board::new(dictionary)
        })
    }

    pub fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn side_length(&self) -> usize {
        self.grid.side_length()
    }

    /// True if no word has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Letter at x,y or None if the square is empty or outside the grid.
    pub fn letter_at(&self, x: i32, y: i32) -> Option<char> {
        self.grid.get(Point::new(x, y)).letter()
    }

    /// The placed words, in placement order.
    pub fn placed_words(&self) -> &[PlacedWord] {
        &self.words
    }

    /// Look up placement `ordinal` (1 based) of `text`.
    pub fn placed(&self, text: &str, ordinal: usize) -> Option<&PlacedWord> {
        let ids = self.index.get(text)?;
        let &id = ids.get(ordinal.checked_sub(1)?)?;
        self.words.get(id)
    }

    /// Number of times `text` has been placed.
    pub fn word_frequency(&self, text: &str) -> usize {
        self.index.get(text).map_or(0, Vec::len)
    }

    /// The distinct placed words, sorted.
    pub fn words(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.index.keys().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    /// True if every run of two or more letters, in both directions, is a dictionary word.
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn is_valid(&self) -> bool {
        let dictionary = self.dictionary;
        self.grid.runs().all(|run| dictionary.is_word(&run))
    }

    /// Check if `word` can be the first word: the board must be empty and the word must
    /// fit on a row.
    /// ## Errors
    /// If the board already holds a word.
    pub fn word_fits_first(&self, word: &str) -> Result<bool, Error> {
        if !self.is_empty() {
            return Err(Error::FirstWordMisuse);
        }
        Ok(word.chars().count() <= self.side_length())
    }

    /// Place `word` horizontally on the centre row, centred on the middle square
    /// (shifted one square left for an even length).
    ///
    /// Returns `Ok(false)`, and leaves the board unchanged, if the word does not fit or is
    /// not in the dictionary.
    /// ## Errors
    /// If the board already holds a word.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Board, Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cats"])?;
    /// let mut board = Board::with_side_length(&dictionary, 5)?;
    /// assert!(board.add_first_word("CATS")?);
    /// assert_eq!(board.letter_at(-2, 0), Some('C'));
    /// assert_eq!(board.letter_at(1, 0), Some('S'));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn add_first_word(&mut self, word: &str) -> Result<bool, Error> {
        if !self.word_fits_first(word)? {
            return Ok(false);
        }
        let len = word.chars().count() as i32;
        let start = Point::new(-(len / 2), 0);
        Ok(self.commit(word, start, Orientation::Horizontal)?.is_some())
    }

    /// Work out where `word` goes when it crosses `anchor`.
    /// Returns the position of the first letter and the orientation.
    fn resolve(
        &self,
        word: &str,
        anchor: &WordRef,
        anchor_index: usize,
        new_index: usize,
    ) -> Result<(Point, Orientation), Error> {
        if self.is_empty() {
            return Err(Error::NoAnchorWord);
        }
        let placed =
            self.placed(&anchor.text, anchor.ordinal)
                .ok_or_else(|| Error::InvalidReference {
                    word: anchor.text.clone(),
                    ordinal: anchor.ordinal,
                })?;
        let anchor_letter =
            placed
                .text
                .chars()
                .nth(anchor_index)
                .ok_or_else(|| Error::IndexOutOfRange {
                    word: placed.text.clone(),
                    index: anchor_index,
                })?;
        let new_letter = word
            .chars()
            .nth(new_index)
            .ok_or_else(|| Error::IndexOutOfRange {
                word: String::from(word),
                index: new_index,
            })?;
        if anchor_letter != new_letter {
            return Err(Error::MismatchedCrossingLetter {
                anchor: anchor_letter,
                new: new_letter,
            });
        }
        let crossing = placed.anchor.offset(placed.orientation, anchor_index as i32);
        let orientation = placed.orientation.perpendicular();
        Ok((crossing.offset(orientation, -(new_index as i32)), orientation))
    }

    /// True if every letter of `word` lands on the grid, on an empty square or on the same letter.
    fn fits(&self, word: &str, start: Point, orientation: Orientation) -> bool {
        word.chars().enumerate().all(|(i, letter)| {
            let p = start.offset(orientation, i as i32);
            self.grid.contains(p) && self.grid.get(p).letter().map_or(true, |c| c == letter)
        })
    }

    /// The grid with `word` written at `start`, if it fits and every run through its letters
    /// is a word.
    fn try_place(
        &self,
        word: &str,
        start: Point,
        orientation: Orientation,
    ) -> Result<Option<Grid>, Error> {
        if !self.fits(word, start, orientation) {
            return Ok(None);
        }
        let mut scratch = self.grid.clone();
        let cells: Vec<Point> = (0..word.chars().count())
            .map(|i| start.offset(orientation, i as i32))
            .collect();
        for (&p, letter) in cells.iter().zip(word.chars()) {
            scratch.set(p, letter)?;
        }
        let dictionary = self.dictionary;
        let across = orientation.perpendicular();
        let valid = once(scratch.run_through(start, orientation))
            .chain(cells.iter().map(|&p| scratch.run_through(p, across)))
            .flatten()
            .all(|run| dictionary.is_word(&run));
        Ok(if valid { Some(scratch) } else { None })
    }

    /// Place `word` and register it. Returns the new reference, or None if the placement is rejected.
    fn commit(
        &mut self,
        word: &str,
        start: Point,
        orientation: Orientation,
    ) -> Result<Option<WordRef>, Error> {
        match self.try_place(word, start, orientation)? {
            Some(grid) => {
                self.grid = grid;
                Ok(Some(self.register(word, start, orientation)))
            }
            None => Ok(None),
        }
    }

    fn register(&mut self, word: &str, anchor: Point, orientation: Orientation) -> WordRef {
        let id = self.words.len();
        let ids = self.index.entry(String::from(word)).or_default();
        ids.push(id);
        let placed = PlacedWord {
            text: String::from(word),
            ordinal: ids.len(),
            anchor,
            orientation,
        };
        let word_ref = placed.word_ref();
        self.words.push(placed);
        word_ref
    }

    /// Check if `word` can cross `anchor`, with letter `anchor_index` of the anchor
    /// on letter `new_index` of `word`. The board is not changed.
    /// ## Errors
    /// See [`add_word`](Board::add_word).
    pub fn word_fits(
        &self,
        word: &str,
        anchor: &WordRef,
        anchor_index: usize,
        new_index: usize,
    ) -> Result<bool, Error> {
        let (start, orientation) = self.resolve(word, anchor, anchor_index, new_index)?;
        Ok(self.fits(word, start, orientation))
    }

    /// Place `word` perpendicular to `anchor`, crossing it where letter `anchor_index` of
    /// the anchor is letter `new_index` of `word`.
    ///
    /// Returns `Ok(false)`, and leaves the board unchanged, if the word runs off the grid,
    /// overwrites a different letter, or the result has a run that is not a word.
    /// On success the word gets the next ordinal for its text.
    /// ## Errors
    /// - If the board is empty.
    /// - If `anchor` is not on the board.
    /// - If an index is out of range.
    /// - If the two crossing letters differ.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Board, Dictionary, Error, WordRef};
    /// let dictionary = Dictionary::from_words(&["cats", "as"])?;
    /// let mut board = Board::with_side_length(&dictionary, 5)?;
    /// board.add_first_word("CATS")?;
    /// assert!(board.add_word("AS", &WordRef::new("CATS", 1), 3, 1)?);
    /// assert_eq!(board.letter_at(1, 1), Some('A'));
    /// assert_eq!(board.placed("AS", 1).map(|word| word.ordinal), Some(1));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn add_word(
        &mut self,
        word: &str,
        anchor: &WordRef,
        anchor_index: usize,
        new_index: usize,
    ) -> Result<bool, Error> {
        let (start, orientation) = self.resolve(word, anchor, anchor_index, new_index)?;
        Ok(self.commit(word, start, orientation)?.is_some())
    }

    /// Apply `mv`, see [`add_word`](Board::add_word).
    pub fn add_move(&mut self, mv: &Move) -> Result<bool, Error> {
        self.add_word(mv.word(), mv.anchor(), mv.anchor_index(), mv.new_index())
    }

    /// Check if `mv` would succeed, without changing the board.
    pub fn is_legal(&self, mv: &Move) -> Result<bool, Error> {
        let (start, orientation) =
            self.resolve(mv.word(), mv.anchor(), mv.anchor_index(), mv.new_index())?;
        Ok(self.try_place(mv.word(), start, orientation)?.is_some())
    }

    /// Moves that cross the letters of `placed`.
    ///
    /// Only one side of each letter is probed: right of a vertical word, below a horizontal
    /// word. A letter qualifies if that square is empty. Candidate words must hold the
    /// crossing letter, be spelled from the hand plus that letter, and have two or more letters.
    fn moves_crossing(&self, placed: &PlacedWord, inventory: &LetterInventory) -> Vec<Move> {
        let orientation = placed.orientation.perpendicular();
        let mut moves = Vec::new();
        for (i, (p, letter)) in placed.cells().enumerate() {
            let probe = match placed.orientation {
                Orientation::Vertical => Point::new(p.x + 1, p.y),
                Orientation::Horizontal => Point::new(p.x, p.y - 1),
            };
            if !self.grid.contains(probe) {
                break;
            }
            if !self.grid.get(probe).is_empty() {
                continue;
            }
            let mut hand = inventory.clone();
            if hand.credit(letter).is_err() {
                continue;
            }
            let required: LetterSet = std::iter::once(letter).collect();
            for candidate in self.dictionary.words_formable(&hand, required) {
                if candidate.len() < 2 {
                    continue;
                }
                for (j, c) in candidate.chars().enumerate() {
                    if c != letter {
                        continue;
                    }
                    let mv = Move::new(placed.word_ref(), i, candidate, j, orientation);
                    if let Ok(true) = self.is_legal(&mv) {
                        moves.push(mv);
                    }
                }
            }
        }
        moves
    }

    /// All moves that can be played with the tiles in `inventory`, in a deterministic order:
    /// placed words in placement order, then letter position, then dictionary order.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Board, Dictionary, Error, LetterInventory};
    /// let dictionary = Dictionary::from_words(&["cats", "as", "at"])?;
    /// let mut board = Board::with_side_length(&dictionary, 5)?;
    /// board.add_first_word("CATS")?;
    /// let hand: LetterInventory = "S".chars().collect();
    /// let moves = board.legal_moves(&hand);
    /// // only "AS", down from the A, can be made from the hand plus one letter of CATS
    /// assert_eq!(moves.len(), 1);
    /// assert_eq!(moves[0].word(), "AS");
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg_attr(feature = "flame_it", flame)]
    pub fn legal_moves(&self, inventory: &LetterInventory) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::new();
        let crossing = |placed: &PlacedWord| self.moves_crossing(placed, inventory);
        #[cfg(feature = "rayon")]
        {
            moves.par_extend(self.words.par_iter().map(crossing).flatten());
        }
        #[cfg(not(feature = "rayon"))]
        {
            moves.extend(self.words.iter().map(crossing).flatten());
        }
        moves
    }
}
