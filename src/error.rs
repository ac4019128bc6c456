use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by [`GuessGame`](crate::engine::GuessGame).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid game words: {0}")]
    InvalidInput(#[from] InputError),
    #[error("invalid submission: {0}")]
    InvalidSubmission(#[from] SubmissionError),
}

/// Why a set of secret words was refused at construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("at least one word is required")]
    NoWords,
    #[error("words must not be empty")]
    EmptyWord,
    #[error("all words must be {expected} letters long, but '{word}' has {found}")]
    LengthMismatch {
        expected: usize,
        word: String,
        found: usize,
    },
}

/// Why a single guess was refused. The game is left untouched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("'{0}' is not in the vocabulary")]
    UnknownWord(String),
    #[error("guess must be {expected} letters long, got {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// Failure to load a [`WordList`](crate::vocabulary::WordList) from disk.
#[derive(Debug, Error)]
pub enum VocabularyError {
    #[error("failed to read word list '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list '{}' contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Anything that stops the binary from getting a game on the board.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load vocabulary: {0}")]
    Vocabulary(#[from] VocabularyError),
    #[error("cannot start game: {0}")]
    Game(#[from] GameError),
}
