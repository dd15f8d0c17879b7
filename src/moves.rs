use crate::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Reading direction of a word.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Reads left to right
    Horizontal,
    /// Reads top to bottom
    Vertical,
}

impl Orientation {
    /// The other orientation; a word always crosses its anchor at a right angle.
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// (dx, dy) of one step in reading direction.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, -1),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Names one placement of a word on the board.
///
/// The same text can be placed more than once; `ordinal` counts the placements
/// of that text, starting at 1, in the order they were made.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordRef {
    pub text: String,
    pub ordinal: usize,
}

impl WordRef {
    pub fn new(text: &str, ordinal: usize) -> WordRef {
        WordRef {
            text: String::from(text),
            ordinal,
        }
    }
}

impl fmt::Display for WordRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}#{}", self.text, self.ordinal)
    }
}

/// A word on the board: its text, ordinal, first letter position and orientation.
/// Two placed words are equal when text and ordinal are equal.
#[derive(Debug, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedWord {
    pub text: String,
    pub ordinal: usize,
    pub anchor: Point,
    pub orientation: Orientation,
}

impl PartialEq for PlacedWord {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text && self.ordinal == other.ordinal
    }
}

impl std::hash::Hash for PlacedWord {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.text.hash(state);
        self.ordinal.hash(state);
    }
}

impl PlacedWord {
    pub fn word_ref(&self) -> WordRef {
        WordRef::new(&self.text, self.ordinal)
    }

    /// Positions and letters, in reading order.
    pub fn cells(&self) -> impl Iterator<Item = (Point, char)> + '_ {
        let (anchor, orientation) = (self.anchor, self.orientation);
        self.text
            .chars()
            .enumerate()
            .map(move |(i, letter)| (anchor.offset(orientation, i as i32), letter))
    }
}

impl fmt::Display for PlacedWord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}#{} at {} {}",
            self.text, self.ordinal, self.anchor, self.orientation
        )
    }
}

/// A candidate placement of a new word that crosses a word already on the board.
///
/// `anchor_index` is the position of the crossing letter in the anchor word,
/// `new_index` its position in the new word. The orientation is always
/// perpendicular to the anchor's.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    anchor: WordRef,
    anchor_index: usize,
    word: String,
    new_index: usize,
    orientation: Orientation,
}

impl Move {
    pub fn new(
        anchor: WordRef,
        anchor_index: usize,
        word: &str,
        new_index: usize,
        orientation: Orientation,
    ) -> Move {
        Move {
            anchor,
            anchor_index,
            word: String::from(word),
            new_index,
            orientation,
        }
    }

    pub fn anchor(&self) -> &WordRef {
        &self.anchor
    }

    pub fn anchor_index(&self) -> usize {
        self.anchor_index
    }

    /// The new word
    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn new_index(&self) -> usize {
        self.new_index
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// The letter the new word shares with its anchor, None if `new_index` is past the end.
    pub fn shared_letter(&self) -> Option<char> {
        self.word.chars().nth(self.new_index)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}[{}] crosses {}[{}] {}",
            self.word, self.new_index, self.anchor, self.anchor_index, self.orientation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perpendicular() {
        assert_eq!(
            Orientation::Horizontal.perpendicular(),
            Orientation::Vertical
        );
        assert_eq!(
            Orientation::Vertical.perpendicular(),
            Orientation::Horizontal
        );
    }

    #[test]
    fn test_move() {
        let mv = Move::new(WordRef::new("CATS", 1), 3, "AS", 1, Orientation::Vertical);
        assert_eq!(mv.shared_letter(), Some('S'));
        assert_eq!(mv.to_string(), "AS[1] crosses CATS#1[3] vertical");
        let mv = Move::new(WordRef::new("CATS", 1), 3, "AS", 2, Orientation::Vertical);
        assert_eq!(mv.shared_letter(), None);
    }

    #[test]
    fn test_placed_word() {
        let word = PlacedWord {
            text: String::from("TO"),
            ordinal: 2,
            anchor: Point::new(1, 1),
            orientation: Orientation::Vertical,
        };
        let cells: Vec<_> = word.cells().collect();
        assert_eq!(cells, [(Point::new(1, 1), 'T'), (Point::new(1, 0), 'O')]);
        assert_eq!(word.word_ref(), WordRef::new("TO", 2));
        assert_eq!(word.to_string(), "TO#2 at (1, 1) vertical");
    }
}
