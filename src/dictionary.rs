use crate::inventory::LetterCounts;
use crate::letter_scores::LetterScores;
use crate::letterset::{letter_index, LetterSet, ALPHABET};
use crate::{Error, LetterInventory};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::read_to_string;

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Entry {
    word: String,
    letters: LetterSet,
    counts: LetterCounts,
}

impl Entry {
    fn new(word: String) -> Entry {
        Entry {
            letters: LetterSet::from(word.as_str()),
            counts: letter_counts(&word),
            word,
        }
    }

    /// True if the word holds every `required` letter and can be spelled from `hand`.
    fn is_formable(&self, hand: &LetterCounts, have: &LetterSet, required: &LetterSet) -> bool {
        required.is_subset(&self.letters)
            && self.letters.is_subset(have)
            && self.counts.iter().zip(hand.iter()).all(|(n, h)| n <= h)
    }
}

fn letter_counts(word: &str) -> LetterCounts {
    let mut counts = [0; ALPHABET];
    for letter in word.chars() {
        if let Some(i) = letter_index(letter) {
            counts[i] += 1;
        }
    }
    counts
}

/// Upper case `word`, and check it only has letters `A`..`Z`.
fn normalize(word: &str) -> Result<String, Error> {
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Error::InvalidToken(String::from(word)));
    }
    Ok(word.to_ascii_uppercase())
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of legal words, with the letter values used for scoring.
///
/// Words are stored upper case, sorted and without duplicates, so every query
/// gives the same answer in the same order.
pub struct Dictionary {
    entries: Vec<Entry>,
    scores: LetterScores,
    /// Path of the wordfile used to build the dictionary.
    /// Empty if the dictionary is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Dictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Dictionary: {} words from '{}'>",
            self.len(),
            self.wordfile
        )
    }
}

impl Dictionary {
    fn from_normalized(mut words: Vec<String>) -> Dictionary {
        words.sort_unstable();
        words.dedup();
        Dictionary {
            entries: words.into_iter().map(Entry::new).collect(),
            scores: LetterScores::default(),
            wordfile: String::new(),
        }
    }

    /// Read the dictionary from a file with one word per line.
    /// Blank lines are skipped, words are converted to upper case.
    /// ## Errors
    /// Fails if the file can not be read, or a word has characters other than `a`..`z`.
    pub fn from_file(wordfile: &str) -> Result<Dictionary, Error> {
        let words = read_to_string(wordfile)
            .map_err(|source| Error::ReadError {
                path: String::from(wordfile),
                source,
            })?
            .lines()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .map(normalize)
            .collect::<Result<Vec<String>, Error>>()?;
        let mut dictionary = Dictionary::from_normalized(words);
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// Build a dictionary from a list of words.
    /// ## Errors
    /// If a word is empty or has characters other than `a`..`z`.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Dictionary, Error};
    /// let dictionary = Dictionary::from_words(&["cat", "CATS", "act"])?;
    /// assert_eq!(dictionary.len(), 3);
    /// assert!(dictionary.is_word("CAT"));
    /// assert!(!dictionary.is_word("cat"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_words(words: &[&str]) -> Result<Dictionary, Error> {
        let words = words
            .iter()
            .map(|&word| normalize(word))
            .collect::<Result<Vec<String>, Error>>()?;
        Ok(Dictionary::from_normalized(words))
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the dictionary from a bincoded file.
    /// ## Errors
    /// - If the file can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Dictionary, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut dictionary: Dictionary = bincode::deserialize_from(reader)
            .map_err(|_| Error::DeserializeError(String::from(wordfile)))?;
        dictionary.wordfile = String::from(wordfile);
        Ok(dictionary)
    }

    /// Replace the letter values used by [`word_score`](Dictionary::word_score).
    #[must_use]
    pub fn with_letter_scores(mut self, scores: LetterScores) -> Dictionary {
        self.scores = scores;
        self
    }

    /// The number of words
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the words in sorted order.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.word.as_str())
    }

    /// Returns true if `word` is in the dictionary. The match is exact, so `word` must be upper case.
    pub fn is_word(&self, word: &str) -> bool {
        self.entries
            .binary_search_by(|entry| entry.word.as_str().cmp(word))
            .is_ok()
    }

    pub fn letter_scores(&self) -> &LetterScores {
        &self.scores
    }

    /// Points for a single letter.
    pub fn letter_score(&self, letter: char) -> u32 {
        self.scores.points(letter)
    }

    /// Sum of the letter values of `word`.
    pub fn word_score(&self, word: &str) -> u32 {
        self.scores.word_score(word)
    }

    /// All words that contain every `required` letter and can be spelled with the tiles in `inventory`,
    /// in dictionary order.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Dictionary, Error, LetterInventory, LetterSet};
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "act", "tact", "sat"])?;
    /// let hand: LetterInventory = "CATS".chars().collect();
    /// assert_eq!(dictionary.words_formable(&hand, LetterSet::from("C")), ["ACT", "CAT", "CATS"]);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg(feature = "rayon")]
    pub fn words_formable(&self, inventory: &LetterInventory, required: LetterSet) -> Vec<&str> {
        let hand = inventory.counts();
        let have = inventory.letters();
        self.entries
            .par_iter()
            .filter(|entry| entry.is_formable(&hand, &have, &required))
            .map(|entry| entry.word.as_str())
            .collect()
    }

    /// All words that contain every `required` letter and can be spelled with the tiles in `inventory`,
    /// in dictionary order.
    /// ## Examples
    /// ```
    /// # use bananagrams_solver::{Dictionary, Error, LetterInventory, LetterSet};
    /// let dictionary = Dictionary::from_words(&["cat", "cats", "act", "tact", "sat"])?;
    /// let hand: LetterInventory = "CATS".chars().collect();
    /// assert_eq!(dictionary.words_formable(&hand, LetterSet::from("C")), ["ACT", "CAT", "CATS"]);
    /// # Ok::<(), Error>(())
    /// ```
    #[cfg(not(feature = "rayon"))]
    pub fn words_formable(&self, inventory: &LetterInventory, required: LetterSet) -> Vec<&str> {
        let hand = inventory.counts();
        let have = inventory.letters();
        self.entries
            .iter()
            .filter(|entry| entry.is_formable(&hand, &have, &required))
            .map(|entry| entry.word.as_str())
            .collect()
    }

    /// Like [`words_formable`](Dictionary::words_formable), but filters an arbitrary set of
    /// `candidates` instead of the whole dictionary. Candidates are kept in the given order.
    pub fn words_formable_from<'w, I>(
        candidates: I,
        inventory: &LetterInventory,
        required: LetterSet,
    ) -> Vec<&'w str>
    where
        I: IntoIterator<Item = &'w str>,
    {
        let hand = inventory.counts();
        let have = inventory.letters();
        candidates
            .into_iter()
            .filter(|word| {
                let letters = LetterSet::from(*word);
                let counts = letter_counts(word);
                word.chars().all(|c| letter_index(c).is_some())
                    && required.is_subset(&letters)
                    && letters.is_subset(&have)
                    && counts.iter().zip(hand.iter()).all(|(n, h)| n <= h)
            })
            .collect()
    }

    /// All words that can be spelled with the tiles in `inventory`.
    pub fn all_possible_words(&self, inventory: &LetterInventory) -> Vec<&str> {
        self.words_formable(inventory, LetterSet::new())
    }
}
