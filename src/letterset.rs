#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::FromIterator;
use std::iter::Iterator;

/// Number of letters in the alphabet, `A`..`Z`
pub const ALPHABET: usize = 26;

/// Bit position of `letter`, or None if it is not an upper case ascii letter.
#[inline(always)]
pub fn letter_index(letter: char) -> Option<usize> {
    if letter.is_ascii_uppercase() {
        Some((letter as u8 - b'A') as usize)
    } else {
        None
    }
}

/// A bitset representing the distinct letters of a word or a hand of tiles.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    pub fn contains(&self, letter: char) -> bool {
        match letter_index(letter) {
            Some(v) => self.0 & (1 << v) != 0,
            None => false,
        }
    }

    /// Insert `letter`, return true if it was already present.
    /// Anything other than `A`..`Z` is ignored.
    pub fn insert(&mut self, letter: char) -> bool {
        match letter_index(letter) {
            Some(v) => {
                let r = (self.0 & (1 << v)) != 0;
                self.0 |= 1 << v;
                r
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// True if every letter in `self` is also in `other`.
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    pub fn iter(&self) -> IteratorLetterSet {
        IteratorLetterSet::new(self.0)
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{{}}}", self.iter().collect::<String>())
    }
}

pub struct IteratorLetterSet {
    count: u32,
    value: u32,
}

impl IteratorLetterSet {
    pub fn new(value: u32) -> IteratorLetterSet {
        IteratorLetterSet { count: 0, value }
    }
}

impl Iterator for IteratorLetterSet {
    type Item = char;
    fn next(&mut self) -> Option<char> {
        while self.count < ALPHABET as u32 {
            let i = self.count;
            self.count += 1;
            if self.value & (1 << i) != 0 {
                return Some((b'A' + i as u8) as char);
            }
        }
        None
    }
}

impl FromIterator<char> for LetterSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut c = LetterSet::new();
        for letter in iter {
            c.insert(letter);
        }
        c
    }
}

impl From<&str> for LetterSet {
    fn from(word: &str) -> Self {
        word.chars().collect()
    }
}
