use crate::letterset::{letter_index, ALPHABET};

/// letter, points
type LetterInfo = (char, u32);

/// Default letter values. Frequent letters are cheap, rare letters are expensive,
/// so that a high scoring word gets rid of the hard to place tiles first.
const DEFAULT_SCORES: [LetterInfo; ALPHABET] = [
    ('A', 140),
    ('B', 300),
    ('C', 300),
    ('D', 200),
    ('E', 150),
    ('F', 400),
    ('G', 200),
    ('H', 400),
    ('I', 135),
    ('J', 800),
    ('K', 500),
    ('L', 110),
    ('M', 300),
    ('N', 120),
    ('O', 140),
    ('P', 300),
    ('Q', 1000),
    ('R', 130),
    ('S', 120),
    ('T', 100),
    ('U', 120),
    ('V', 400),
    ('W', 400),
    ('X', 800),
    ('Y', 400),
    ('Z', 1000),
];

/// Point value per letter, used to pick the first word and to score boards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LetterScores {
    points: [u32; ALPHABET],
}

impl Default for LetterScores {
    fn default() -> Self {
        let mut points = [0; ALPHABET];
        for &(letter, value) in DEFAULT_SCORES.iter() {
            if let Some(i) = letter_index(letter) {
                points[i] = value;
            }
        }
        LetterScores { points }
    }
}

impl LetterScores {
    /// Return the points for `letter`, or 0 if it is not a letter `A`..`Z`
    pub fn points(&self, letter: char) -> u32 {
        letter_index(letter).map_or(0, |i| self.points[i])
    }

    /// Replace the value of `letter`. Non letters are ignored.
    #[must_use]
    pub fn with_points(mut self, letter: char, value: u32) -> Self {
        if let Some(i) = letter_index(letter) {
            self.points[i] = value;
        }
        self
    }

    /// Sum of the letter values of `word`
    pub fn word_score(&self, word: &str) -> u32 {
        word.chars().map(|letter| self.points(letter)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scores() {
        let scores = LetterScores::default();
        assert_eq!(scores.points('E'), 150);
        assert_eq!(scores.points('Q'), 1000);
        assert_eq!(scores.points('q'), 0);
        assert_eq!(scores.points('-'), 0);
        assert_eq!(scores.word_score("CATS"), 300 + 140 + 100 + 120);
    }

    #[test]
    fn test_with_points() {
        let scores = LetterScores::default().with_points('T', 1);
        assert_eq!(scores.word_score("TT"), 2);
    }
}
