// Library interface for hangman-solver
// This allows integration tests to access internal modules

pub mod cli;
pub mod config;
pub mod dictionary;
pub mod error;
pub mod evaluation;
pub mod game_state;
pub mod logging;
pub mod pattern;
pub mod solver;

// Re-export commonly used items for easier testing
pub use config::{Alphabet, Rules};
pub use dictionary::{Dictionary, load_dictionary_from_file, load_dictionary_from_str};
pub use error::{DictionaryError, SessionError};
pub use evaluation::{EvaluationReport, evaluate};
pub use game_state::{GameReporter, GameState, Session, SilentReporter, Turn, play_game};
pub use pattern::{GuessedLetters, Pattern};
pub use solver::{filter_candidates, select_next_letter};
