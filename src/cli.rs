use crate::config::{Alphabet, DEFAULT_ALPHABET, DEFAULT_MAX_TRIES, Rules};
use crate::error::SessionError;
use crate::evaluation::EvaluationReport;
use crate::game_state::{GameReporter, GameState, Turn};
use clap::Parser;
use std::path::PathBuf;

/// Hangman solver using bigram frequency analysis
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a newline-delimited dictionary file
    #[arg(short = 'i', long = "input")]
    pub dictionary_path: Option<PathBuf>,

    /// Play a single game against this word instead of a random batch
    #[arg(short = 'w', long = "word")]
    pub word: Option<String>,

    /// Number of games to play in a batch evaluation
    #[arg(short = 'n', long = "games", default_value_t = 50)]
    pub games: usize,

    /// Seed for choosing secret words; derived from the clock when omitted
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Incorrect guesses allowed per game
    #[arg(short = 't', long = "tries", default_value_t = DEFAULT_MAX_TRIES)]
    pub tries: u32,

    /// Letters that make up valid words
    #[arg(long = "alphabet", default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Only print the final result
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Builds the game rules from the command line, `None` if the alphabet
    /// is unusable.
    pub fn rules(&self) -> Option<Rules> {
        Some(Rules {
            max_tries: self.tries,
            alphabet: Alphabet::new(&self.alphabet.to_lowercase())?,
        })
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}

pub fn display_turn(turn: &Turn) {
    if turn.correct {
        println!("Correct guess: {}. Current word: {}", turn.letter, turn.pattern);
    } else {
        println!(
            "Incorrect guess: {}. Tries remaining: {}",
            turn.letter, turn.tries_remaining
        );
    }
}

pub fn display_outcome(state: GameState, secret: &str) {
    match state {
        GameState::Won => println!("Congratulations! You guessed the word: {secret}"),
        GameState::Lost => println!("Out of tries! The word was: {secret}"),
        GameState::InProgress => {}
    }
}

pub fn display_engine_failure(error: &SessionError, secret: &str) {
    println!("Giving up on '{secret}': {error}");
}

pub fn display_report(report: &EvaluationReport) {
    if report.engine_failures > 0 {
        println!(
            "{} of {} games were abandoned with no letter left to guess",
            report.engine_failures, report.games
        );
    }
    if report.invalid_secrets > 0 {
        println!(
            "{} drawn words could not be used as secrets",
            report.invalid_secrets
        );
    }
    println!("Final result: {} accuracy", report.accuracy());
}

/// CLI implementation of the GameReporter trait, printing one line per turn.
pub struct CliReporter {
    quiet: bool,
    outcome_is_result: bool,
}

impl CliReporter {
    /// Reporter for a batch, where the evaluation report is the final result.
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            outcome_is_result: false,
        }
    }

    /// Reporter for a single game; the outcome is printed even when quiet.
    pub fn single_game(quiet: bool) -> Self {
        Self {
            quiet,
            outcome_is_result: true,
        }
    }

    fn shows_turns(&self) -> bool {
        !self.quiet
    }

    fn shows_outcome(&self) -> bool {
        !self.quiet || self.outcome_is_result
    }
}

impl GameReporter for CliReporter {
    fn display_turn(&mut self, turn: &Turn) {
        if self.shows_turns() {
            display_turn(turn);
        }
    }

    fn display_outcome(&mut self, state: GameState, secret: &str) {
        if self.shows_outcome() {
            display_outcome(state, secret);
        }
    }

    fn display_engine_failure(&mut self, error: &SessionError, secret: &str) {
        display_engine_failure(error, secret);
    }
}
