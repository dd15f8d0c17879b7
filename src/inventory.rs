use crate::letterset::{letter_index, LetterSet, ALPHABET};
use crate::{Error, Move};
use multiset::HashMultiSet;
use std::convert::TryFrom;
use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Deref};

/// Letter counts indexed by `letter - 'A'`.
pub type LetterCounts = [usize; ALPHABET];

/// Keeps track of the tiles in hand.
///
/// Only the letters `A`..`Z` are held; parsing and collecting normalize to upper case.
#[derive(Debug, Clone)]
pub struct LetterInventory(HashMultiSet<char>);

impl Default for LetterInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Deref for LetterInventory {
    type Target = HashMultiSet<char>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl PartialEq for LetterInventory {
    fn eq(&self, other: &Self) -> bool {
        self.counts() == other.counts()
    }
}

impl Eq for LetterInventory {}

impl Add for LetterInventory {
    type Output = Self;
    fn add(mut self, other: Self) -> Self::Output {
        for &letter in other.0.distinct_elements() {
            self.0.insert_times(letter, other.0.count_of(&letter));
        }
        self
    }
}

impl LetterInventory {
    pub fn new() -> Self {
        Self(HashMultiSet::new())
    }

    /// Number of `letter` tiles in hand.
    pub fn count(&self, letter: char) -> usize {
        self.0.count_of(&letter)
    }

    /// Total number of tiles in hand.
    pub fn total(&self) -> usize {
        self.0.len()
    }

    /// True if there are no tiles left.
    pub fn is_empty(&self) -> bool {
        self.0.len() == 0
    }

    /// The distinct letters in hand.
    pub fn letters(&self) -> LetterSet {
        self.0.distinct_elements().copied().collect()
    }

    /// Tile counts per letter.
    pub fn counts(&self) -> LetterCounts {
        let mut counts = [0; ALPHABET];
        for &letter in self.0.distinct_elements() {
            if let Some(i) = letter_index(letter) {
                counts[i] = self.0.count_of(&letter);
            }
        }
        counts
    }

    /// Add one `letter` tile. Lower case letters are stored as upper case.
    /// ## Errors
    /// If `letter` is not an ASCII letter.
    pub fn credit(&mut self, letter: char) -> Result<(), Error> {
        let letter = letter.to_ascii_uppercase();
        if letter_index(letter).is_none() {
            return Err(Error::InvalidToken(letter.to_string()));
        }
        self.0.insert(letter);
        Ok(())
    }

    /// Remove one `letter` tile.
    /// ## Errors
    /// If there is no such tile in hand.
    pub fn debit(&mut self, letter: char) -> Result<(), Error> {
        if self.0.remove(&letter) {
            Ok(())
        } else {
            Err(Error::MissingTile(letter))
        }
    }

    /// Remove one tile for every letter of `word`. Nothing is removed if a tile is missing.
    /// ## Errors
    /// If the hand does not hold all the letters of `word`.
    pub fn consume(&mut self, word: &str) -> Result<(), Error> {
        let mut needed = HashMultiSet::new();
        for letter in word.chars() {
            needed.insert(letter);
        }
        for &letter in needed.distinct_elements() {
            if needed.count_of(&letter) > self.0.count_of(&letter) {
                return Err(Error::MissingTile(letter));
            }
        }
        for letter in word.chars() {
            self.0.remove(&letter);
        }
        Ok(())
    }

    /// Account for playing `mv`: the crossing letter is already on the board, so it is
    /// credited back before every letter of the new word is used.
    /// ## Errors
    /// If the hand does not hold the other letters of the new word, the move's crossing
    /// index is past the end of the new word, or the crossing letter is not a letter.
    pub fn play(&mut self, mv: &Move) -> Result<(), Error> {
        let shared = mv.shared_letter().ok_or_else(|| Error::IndexOutOfRange {
            word: String::from(mv.word()),
            index: mv.new_index(),
        })?;
        self.credit(shared)?;
        if let Err(err) = self.consume(mv.word()) {
            self.0.remove(&shared.to_ascii_uppercase());
            return Err(err);
        }
        Ok(())
    }
}

/// Collect letters into a hand. Lower case letters are stored as upper case, anything
/// that is not an ASCII letter is skipped.
impl FromIterator<char> for LetterInventory {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut bag = HashMultiSet::new();
        for letter in iter {
            let letter = letter.to_ascii_uppercase();
            if letter_index(letter).is_some() {
                bag.insert(letter);
            }
        }
        Self(bag)
    }
}

/// Parse tiles given as free-form, whitespace separated tokens, e.g. `"c a t s a"`.
impl TryFrom<&str> for LetterInventory {
    type Error = Error;

    fn try_from(tiles: &str) -> Result<Self, Self::Error> {
        let mut bag = HashMultiSet::new();
        for token in tiles.split_whitespace() {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_alphabetic() => bag.insert(c.to_ascii_uppercase()),
                _ => return Err(Error::InvalidToken(String::from(token))),
            }
        }
        Ok(Self(bag))
    }
}

/// Display as sorted `letter:count` pairs, e.g. `A:2 C:1 S:1 T:1`.
impl fmt::Display for LetterInventory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let repr = self
            .counts()
            .iter()
            .enumerate()
            .filter(|&(_, &n)| n > 0)
            .map(|(i, n)| format!("{}:{}", (b'A' + i as u8) as char, n))
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", repr)
    }
}
