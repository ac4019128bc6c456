// Library interface for word-guess-game
// This allows integration tests to access internal modules

pub mod cli;
pub mod engine;
pub mod error;
pub mod game_state;
pub mod logging;
pub mod picker;
pub mod scoreboard;
pub mod vocabulary;

// Re-export commonly used items for easier testing
pub use engine::{EXACT_MATCH_BONUS, GuessGame, PLACEHOLDER, WordState};
pub use error::{GameError, InputError, StartupError, SubmissionError, VocabularyError};
pub use game_state::{GameInterface, GameSummary, UserAction, game_loop};
pub use picker::{FixedPicker, RandomPicker, RevealPicker};
pub use scoreboard::Scoreboard;
pub use vocabulary::{Vocabulary, WordList, load_wordlist};
