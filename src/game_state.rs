use crate::config::{Rules, WILDCARD};
use crate::dictionary::Dictionary;
use crate::error::SessionError;
use crate::pattern::{GuessedLetters, Pattern};
use crate::solver::select_next_letter;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
}

/// What happened during one call to [`Session::step`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Turn {
    pub letter: char,
    pub correct: bool,
    pub pattern: String,
    pub tries_remaining: u32,
    pub state: GameState,
}

/// One game of hangman against a known secret word.
///
/// The session owns the revealed pattern and the guessed letters; the guess
/// engine only reads them.
#[derive(Debug)]
pub struct Session<'a> {
    secret: String,
    dictionary: &'a Dictionary,
    pattern: Pattern,
    guessed: GuessedLetters,
    tries_remaining: u32,
    state: GameState,
}

impl<'a> Session<'a> {
    pub fn new(
        secret: &str,
        dictionary: &'a Dictionary,
        rules: &Rules,
    ) -> Result<Self, SessionError> {
        if dictionary.is_empty() {
            return Err(SessionError::InvalidDictionary);
        }
        if secret.contains(WILDCARD) || !rules.alphabet.is_word(secret) {
            return Err(SessionError::InvalidSecret(secret.to_string()));
        }
        let state = if rules.max_tries == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };
        Ok(Self {
            secret: secret.to_string(),
            dictionary,
            pattern: Pattern::hidden(secret.chars().count()),
            guessed: GuessedLetters::new(),
            tries_remaining: rules.max_tries,
            state,
        })
    }

    /// Plays a single guess.
    pub fn step(&mut self) -> Result<Turn, SessionError> {
        if self.state != GameState::InProgress {
            return Err(SessionError::GameOver);
        }

        let letter = select_next_letter(&self.pattern, &self.guessed, self.dictionary.words())
            .ok_or_else(|| SessionError::EngineExhausted {
                pattern: self.pattern.to_string(),
            })?;
        assert!(
            self.guessed.insert(letter),
            "guess engine suggested '{letter}' twice"
        );

        let correct = self.secret.contains(letter);
        if correct {
            self.pattern = Pattern::reveal(&self.secret, &self.guessed);
        } else {
            self.tries_remaining -= 1;
        }

        self.state = if self.pattern.is_solved() {
            GameState::Won
        } else if self.tries_remaining == 0 {
            GameState::Lost
        } else {
            GameState::InProgress
        };
        log::debug!(
            "guess '{letter}' ({}) -> {} with {} tries left",
            if correct { "hit" } else { "miss" },
            self.pattern,
            self.tries_remaining
        );

        Ok(Turn {
            letter,
            correct,
            pattern: self.pattern.to_string(),
            tries_remaining: self.tries_remaining,
            state: self.state,
        })
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn guessed(&self) -> &GuessedLetters {
        &self.guessed
    }

    pub fn tries_remaining(&self) -> u32 {
        self.tries_remaining
    }

    pub fn secret(&self) -> &str {
        &self.secret
    }

    pub fn turns_taken(&self) -> usize {
        self.guessed.len()
    }
}

/// Receives progress of a game being played.
///
/// Implemented by the CLI for textual output; tests can record the calls.
pub trait GameReporter {
    fn display_turn(&mut self, turn: &Turn);
    fn display_outcome(&mut self, state: GameState, secret: &str);
    fn display_engine_failure(&mut self, error: &SessionError, secret: &str);
}

/// Reporter that prints nothing.
pub struct SilentReporter;

impl GameReporter for SilentReporter {
    fn display_turn(&mut self, _turn: &Turn) {}
    fn display_outcome(&mut self, _state: GameState, _secret: &str) {}
    fn display_engine_failure(&mut self, _error: &SessionError, _secret: &str) {}
}

/// Steps `session` until it is won or lost.
pub fn play_game<I: GameReporter + ?Sized>(
    session: &mut Session<'_>,
    interface: &mut I,
) -> Result<GameState, SessionError> {
    while session.state() == GameState::InProgress {
        match session.step() {
            Ok(turn) => interface.display_turn(&turn),
            Err(e) => {
                interface.display_engine_failure(&e, session.secret());
                return Err(e);
            }
        }
    }
    interface.display_outcome(session.state(), session.secret());
    Ok(session.state())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dictionary() -> Dictionary {
        Dictionary::from_words(["apple", "apply", "ample", "cat", "cot", "dog"])
    }

    #[derive(Default)]
    struct RecordingReporter {
        turns: Vec<Turn>,
        outcome: Option<GameState>,
        failed: bool,
    }

    impl GameReporter for RecordingReporter {
        fn display_turn(&mut self, turn: &Turn) {
            self.turns.push(turn.clone());
        }

        fn display_outcome(&mut self, state: GameState, _secret: &str) {
            self.outcome = Some(state);
        }

        fn display_engine_failure(&mut self, _error: &SessionError, _secret: &str) {
            self.failed = true;
        }
    }

    #[test]
    fn test_new_session_initial_state() {
        let dictionary = sample_dictionary();
        let session = Session::new("apple", &dictionary, &Rules::default()).unwrap();
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.tries_remaining(), 6);
        assert_eq!(session.pattern().to_string(), "_____");
        assert!(session.guessed().is_empty());
    }

    #[test]
    fn test_new_session_rejects_empty_dictionary() {
        let dictionary = Dictionary::from_words(Vec::<String>::new());
        let result = Session::new("apple", &dictionary, &Rules::default());
        assert!(matches!(result, Err(SessionError::InvalidDictionary)));
    }

    #[test]
    fn test_new_session_rejects_bad_secret() {
        let dictionary = sample_dictionary();
        for secret in ["", "ap_le", "Apple"] {
            let result = Session::new(secret, &dictionary, &Rules::default());
            assert!(matches!(result, Err(SessionError::InvalidSecret(_))));
        }
    }

    #[test]
    fn test_first_step_reveals_all_positions() {
        let dictionary = Dictionary::from_words(["apple", "apply", "ample"]);
        let mut session = Session::new("apple", &dictionary, &Rules::default()).unwrap();
        let turn = session.step().unwrap();
        assert_eq!(turn.letter, 'p');
        assert!(turn.correct);
        assert_eq!(turn.pattern, "_pp__");
        assert_eq!(turn.tries_remaining, 6);
        assert_eq!(turn.state, GameState::InProgress);
    }

    #[test]
    fn test_miss_decrements_tries() {
        let dictionary = Dictionary::from_words(["apple", "apply", "ample"]);
        let mut session = Session::new("zzzzz", &dictionary, &Rules::default()).unwrap();
        let turn = session.step().unwrap();
        assert!(!turn.correct);
        assert_eq!(session.tries_remaining(), 5);
        assert_eq!(session.pattern().to_string(), "_____");
    }

    #[test]
    fn test_play_game_wins_known_word() {
        let dictionary = sample_dictionary();
        let mut session = Session::new("cat", &dictionary, &Rules::default()).unwrap();
        let mut reporter = RecordingReporter::default();
        let state = play_game(&mut session, &mut reporter).unwrap();
        assert_eq!(state, GameState::Won);
        assert_eq!(reporter.outcome, Some(GameState::Won));
        assert_eq!(reporter.turns.last().unwrap().pattern, "cat");
        assert!(session.turns_taken() <= 26);
    }

    #[test]
    fn test_progress_is_monotonic() {
        let dictionary = sample_dictionary();
        let mut session = Session::new("ample", &dictionary, &Rules::default()).unwrap();
        let mut revealed = 0;
        let mut tries = session.tries_remaining();
        while session.state() == GameState::InProgress {
            session.step().unwrap();
            assert!(session.pattern().revealed_count() >= revealed);
            assert!(session.tries_remaining() <= tries);
            revealed = session.pattern().revealed_count();
            tries = session.tries_remaining();
        }
        assert_eq!(session.state(), GameState::Won);
    }

    #[test]
    fn test_step_after_game_over() {
        let dictionary = Dictionary::from_words(["ab"]);
        let mut session = Session::new("ab", &dictionary, &Rules::default()).unwrap();
        play_game(&mut session, &mut SilentReporter).unwrap();
        assert_eq!(session.state(), GameState::Won);
        assert!(matches!(session.step(), Err(SessionError::GameOver)));
    }

    #[test]
    fn test_game_lost_when_tries_run_out() {
        let dictionary = Dictionary::from_words(["abcdefgh"]);
        let rules = Rules {
            max_tries: 2,
            ..Rules::default()
        };
        let mut session = Session::new("zzzz", &dictionary, &rules).unwrap();
        let mut reporter = RecordingReporter::default();
        let state = play_game(&mut session, &mut reporter).unwrap();
        assert_eq!(state, GameState::Lost);
        assert_eq!(reporter.turns.len(), 2);
        assert_eq!(session.tries_remaining(), 0);
    }

    #[test]
    fn test_engine_exhaustion_is_not_a_loss() {
        let dictionary = Dictionary::from_words(["a"]);
        let mut session = Session::new("b", &dictionary, &Rules::default()).unwrap();
        let mut reporter = RecordingReporter::default();
        let result = play_game(&mut session, &mut reporter);
        assert!(matches!(result, Err(SessionError::EngineExhausted { .. })));
        assert!(reporter.failed);
        assert_eq!(reporter.outcome, None);
        assert_eq!(session.state(), GameState::InProgress);
        assert_eq!(session.tries_remaining(), 5);
    }

    #[test]
    fn test_zero_tries_is_lost_immediately() {
        let dictionary = sample_dictionary();
        let rules = Rules {
            max_tries: 0,
            ..Rules::default()
        };
        let mut session = Session::new("cat", &dictionary, &rules).unwrap();
        assert_eq!(session.state(), GameState::Lost);
        assert!(matches!(session.step(), Err(SessionError::GameOver)));
    }
}
