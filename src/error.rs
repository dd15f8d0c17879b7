use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error deserializing bincoded dictionary
    #[cfg(feature = "bincode")]
    #[error("Dictionary {0} could not be deserialized")]
    DeserializeError(String),

    /// A tile or word contains something other than the letters `A`..`Z`
    #[error("Invalid token '{0}'")]
    InvalidToken(String),

    /// Side length must be odd and at least 1
    #[error("Invalid board side length {0} (expect an odd number >= 1)")]
    InvalidSideLength(usize),

    /// The search must look at least one move ahead
    #[error("Invalid search depth {0} (expect >= 1)")]
    InvalidSearchDepth(usize),

    /// Attempt to write a cell outside the grid
    #[error("Cell x={x}, y={y} is outside the grid")]
    OutOfBounds { x: i32, y: i32 },

    /// The anchor word is not on the board
    #[error("Word \"{word}\" #{ordinal} is not on the board")]
    InvalidReference { word: String, ordinal: usize },

    /// Crossing index outside the referenced word
    #[error("Index {index} is out of range for \"{word}\"")]
    IndexOutOfRange { word: String, index: usize },

    /// The letters at the crossing indices differ
    #[error("Crossing letters differ: '{anchor}' on the board, '{new}' in the new word")]
    MismatchedCrossingLetter { anchor: char, new: char },

    /// First word API used on a board that already holds words
    #[error("The first word can only be placed on an empty board")]
    FirstWordMisuse,

    /// Crossing placement attempted on an empty board
    #[error("No word on the board to cross")]
    NoAnchorWord,

    /// Attempt to use a tile that is not in the inventory
    #[error("No tile '{0}' left in the inventory")]
    MissingTile(char),
}
