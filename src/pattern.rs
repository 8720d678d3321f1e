use crate::config::WILDCARD;
use std::fmt;

/// Letters attempted so far, in the order they were guessed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GuessedLetters {
    letters: Vec<char>,
}

impl GuessedLetters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `letter`. Returns `false` if it had already been guessed.
    pub fn insert(&mut self, letter: char) -> bool {
        if self.contains(letter) {
            return false;
        }
        self.letters.push(letter);
        true
    }

    pub fn contains(&self, letter: char) -> bool {
        self.letters.contains(&letter)
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.letters.iter().copied()
    }
}

impl FromIterator<char> for GuessedLetters {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut out = Self::new();
        for c in iter {
            out.insert(c);
        }
        out
    }
}

/// The secret word as seen by the guesser: revealed letters and wildcards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    cells: Vec<Option<char>>,
}

impl Pattern {
    /// A pattern of `len` wildcards.
    pub fn hidden(len: usize) -> Self {
        Self {
            cells: vec![None; len],
        }
    }

    /// Parses text where `_` marks an unrevealed position.
    pub fn parse(text: &str) -> Self {
        Self {
            cells: text
                .chars()
                .map(|c| if c == WILDCARD { None } else { Some(c) })
                .collect(),
        }
    }

    /// Derives the pattern from scratch: every position of `secret` whose
    /// letter is in `guessed` is revealed, all others are wildcards.
    pub fn reveal(secret: &str, guessed: &GuessedLetters) -> Self {
        Self {
            cells: secret
                .chars()
                .map(|c| guessed.contains(c).then_some(c))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// True when `word` has the same length and agrees with every revealed cell.
    pub fn matches(&self, word: &str) -> bool {
        let mut chars = word.chars();
        for cell in &self.cells {
            match (chars.next(), cell) {
                (None, _) => return false,
                (Some(c), Some(known)) if c != *known => return false,
                _ => {}
            }
        }
        chars.next().is_none()
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.unwrap_or(WILDCARD))?;
        }
        Ok(())
    }
}
