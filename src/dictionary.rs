use crate::config::Alphabet;
use crate::error::DictionaryError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub const EMBEDDED_DICTIONARY: &str = include_str!("resources/words.txt");

const DATA_DIR_NAME: &str = "hangman-solver";
const DICTIONARY_FILE_NAME: &str = "words.txt";

/// Read-only reference word list, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Wraps already-normalized words. The list may be empty; sessions reject
    /// an empty dictionary themselves.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Trims and lowercases a line; `None` for lines that are not usable words.
fn normalize_line(line: &str, alphabet: &Alphabet) -> Option<String> {
    let word = line.trim().to_lowercase();
    if word.is_empty() {
        return None;
    }
    if alphabet.is_word(&word) {
        Some(word)
    } else {
        log::trace!("skipping dictionary entry '{word}'");
        None
    }
}

pub fn load_dictionary_from_str(
    data: &str,
    alphabet: &Alphabet,
) -> Result<Dictionary, DictionaryError> {
    let mut skipped = 0usize;
    let mut words = Vec::new();
    for line in data.lines() {
        match normalize_line(line, alphabet) {
            Some(word) => words.push(word),
            None if line.trim().is_empty() => {}
            None => skipped += 1,
        }
    }
    finish(words, skipped)
}

pub fn load_dictionary_from_file<P: AsRef<Path>>(
    path: P,
    alphabet: &Alphabet,
) -> Result<Dictionary, DictionaryError> {
    let file = File::open(path.as_ref())?;
    let reader = BufReader::new(file);
    let mut skipped = 0usize;
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        match normalize_line(&line, alphabet) {
            Some(word) => words.push(word),
            None if line.trim().is_empty() => {}
            None => skipped += 1,
        }
    }
    log::debug!("read dictionary from {}", path.as_ref().display());
    finish(words, skipped)
}

fn finish(words: Vec<String>, skipped: usize) -> Result<Dictionary, DictionaryError> {
    if skipped > 0 {
        log::warn!("skipped {skipped} dictionary entries with characters outside the alphabet");
    }
    if words.is_empty() {
        return Err(DictionaryError::Empty);
    }
    log::info!("loaded {} words", words.len());
    Ok(Dictionary { words })
}

/// Per-user dictionary location, e.g. `~/.local/share/hangman-solver/words.txt`.
#[must_use]
pub fn get_user_dictionary_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(DATA_DIR_NAME).join(DICTIONARY_FILE_NAME))
}

/// Loads `explicit` if given, otherwise the per-user dictionary when one
/// exists, otherwise the embedded word list.
pub fn resolve_dictionary(
    explicit: Option<&Path>,
    alphabet: &Alphabet,
) -> Result<Dictionary, DictionaryError> {
    if let Some(path) = explicit {
        return load_dictionary_from_file(path, alphabet);
    }
    if let Some(path) = get_user_dictionary_path()
        && path.is_file()
    {
        log::info!("using dictionary at {}", path.display());
        return load_dictionary_from_file(path, alphabet);
    }
    log::info!("using embedded dictionary");
    load_dictionary_from_str(EMBEDDED_DICTIONARY, alphabet)
}
