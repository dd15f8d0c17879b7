use crate::{Board, LetterInventory};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Score of a board position; higher is better.
pub type Score = i32;

/// Score of a position where every tile has been used.
/// Heuristic scores stay strictly between `-WIN_SCORE` and `WIN_SCORE`.
pub const WIN_SCORE: Score = i32::MAX - 30;

/// Trait for evaluating a board together with the tiles still in hand.
pub trait Heuristic: Send {
    /// `no_moves` is true if no legal move exists for this position.
    fn evaluate(&self, board: &Board, inventory: &LetterInventory, no_moves: bool) -> Score;
}

/// Penalties for a letter that dominates the hand. Vowels and consonants get separate values.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Penalties {
    /// The letter's share of the hand reaches `Weights::share_threshold`
    pub share: i32,
    /// The share reaches `Weights::small_hand_share` in a hand of at most `Weights::small_hand_limit` tiles
    pub small_hand: i32,
    /// At least `Weights::pile_count` copies of the letter and at most `Weights::pile_others` other tiles
    pub pile: i32,
}

/// Tunable constants of [`DefaultHeuristic`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weights {
    /// Subtracted for every tile in hand
    pub tile_penalty: i32,
    /// Subtracted for every hard to place tile in hand
    pub rare_letter_penalty: i32,
    pub rare_letters: String,
    pub vowels: String,
    pub vowel: Penalties,
    pub consonant: Penalties,
    pub share_threshold: f64,
    pub small_hand_share: f64,
    pub small_hand_limit: usize,
    pub pile_count: usize,
    pub pile_others: usize,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            tile_penalty: 20,
            rare_letter_penalty: 70,
            rare_letters: String::from("ZQX"),
            vowels: String::from("AEIOU"),
            vowel: Penalties {
                share: 60,
                small_hand: 85,
                pile: 200,
            },
            consonant: Penalties {
                share: 100,
                small_hand: 140,
                pile: 400,
            },
            share_threshold: 0.4,
            small_hand_share: 0.5,
            small_hand_limit: 6,
            pile_count: 3,
            pile_others: 2,
        }
    }
}

/// Rewards what is on the board and penalizes tiles that will be hard to get rid of.
///
/// The score is the sum over the distinct placed words of `frequency * word_score`, minus
/// a penalty per tile in hand, minus a penalty per rare tile, minus the imbalance penalties
/// of every letter in hand. The imbalance tiers are independent, so one letter can collect
/// all three.
#[derive(Debug, Clone, Default)]
pub struct DefaultHeuristic {
    weights: Weights,
}

impl DefaultHeuristic {
    pub fn new(weights: Weights) -> Self {
        DefaultHeuristic { weights }
    }

    pub fn weights(&self) -> &Weights {
        &self.weights
    }

    fn imbalance(&self, letter: char, count: usize, total: usize) -> i64 {
        let w = &self.weights;
        let tiers = if w.vowels.contains(letter) {
            &w.vowel
        } else {
            &w.consonant
        };
        let share = count as f64 / total as f64;
        let mut penalty = 0;
        if share >= w.share_threshold {
            penalty += i64::from(tiers.share);
        }
        if share >= w.small_hand_share && total <= w.small_hand_limit {
            penalty += i64::from(tiers.small_hand);
        }
        if count >= w.pile_count && total - count <= w.pile_others {
            penalty += i64::from(tiers.pile);
        }
        penalty
    }
}

impl Heuristic for DefaultHeuristic {
    fn evaluate(&self, board: &Board, inventory: &LetterInventory, no_moves: bool) -> Score {
        if inventory.is_empty() {
            return WIN_SCORE;
        }
        if no_moves {
            return -WIN_SCORE;
        }
        let w = &self.weights;
        let dictionary = board.dictionary();
        let mut score: i64 = board
            .words()
            .iter()
            .map(|word| board.word_frequency(word) as i64 * i64::from(dictionary.word_score(word)))
            .sum();

        let total = inventory.total();
        score -= i64::from(w.tile_penalty) * total as i64;
        let rare: usize = w.rare_letters.chars().map(|c| inventory.count(c)).sum();
        score -= i64::from(w.rare_letter_penalty) * rare as i64;

        let counts = inventory.counts();
        for (i, &count) in counts.iter().enumerate() {
            if count > 0 {
                let letter = (b'A' + i as u8) as char;
                score -= self.imbalance(letter, count, total);
            }
        }
        let bound = i64::from(WIN_SCORE) - 1;
        score.max(-bound).min(bound) as Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Dictionary, Error};

    type Result<T> = std::result::Result<T, Error>;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(&["cat", "cats", "at"]).unwrap()
    }

    #[test]
    fn test_terminal_scores() -> Result<()> {
        let dictionary = dictionary();
        let board = Board::new(&dictionary);
        let heuristic = DefaultHeuristic::default();
        let empty = LetterInventory::new();
        assert_eq!(heuristic.evaluate(&board, &empty, true), WIN_SCORE);
        let hand: LetterInventory = "Q".chars().collect();
        assert_eq!(heuristic.evaluate(&board, &hand, true), -WIN_SCORE);
        Ok(())
    }

    #[test]
    fn test_evaluate() -> Result<()> {
        let dictionary = dictionary();
        let mut board = Board::new(&dictionary);
        board.add_first_word("CATS")?;
        let heuristic = DefaultHeuristic::default();
        let hand: LetterInventory = "ZE".chars().collect();
        // CATS 660, two tiles -40, one rare tile -70,
        // Z: half of a small hand -100 -140, E: same as a vowel -60 -85
        assert_eq!(heuristic.evaluate(&board, &hand, false), 165);
        Ok(())
    }

    #[test]
    fn test_placed_words_add_up() -> Result<()> {
        let dictionary = dictionary();
        let mut board = Board::new(&dictionary);
        board.add_first_word("CAT")?;
        let weights = Weights {
            tile_penalty: 0,
            ..Weights::default()
        };
        let heuristic = DefaultHeuristic::new(weights);
        // one T: share 1/12 triggers nothing
        let hand: LetterInventory = "TBCDFGHJKLMN".chars().collect();
        let single = heuristic.evaluate(&board, &hand, false);
        assert_eq!(single, 540);
        board.add_word("AT", &crate::WordRef::new("CAT", 1), 1, 0)?;
        assert_eq!(heuristic.evaluate(&board, &hand, false), 540 + 240);
        Ok(())
    }

    #[test]
    fn test_pile_penalty() {
        let heuristic = DefaultHeuristic::default();
        // four of a consonant and one other tile: all three tiers
        assert_eq!(heuristic.imbalance('S', 4, 5), 100 + 140 + 400);
        // vowels: each tier is checked on its own
        assert_eq!(heuristic.imbalance('E', 3, 8), 0);
        assert_eq!(heuristic.imbalance('E', 4, 6), 60 + 85 + 200);
        assert_eq!(heuristic.imbalance('E', 4, 9), 60);
        // half of a small hand collects the share tier and the small hand tier
        assert_eq!(heuristic.imbalance('E', 3, 6), 60 + 85);
        assert_eq!(heuristic.imbalance('T', 3, 6), 100 + 140);
    }
}
