/// Placeholder shown for positions that have not been revealed yet.
pub const WILDCARD: char = '_';

pub const DEFAULT_MAX_TRIES: u32 = 6;
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The set of letters words and guesses are drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alphabet {
    letters: Vec<char>,
}

impl Alphabet {
    /// Builds an alphabet from the distinct characters of `letters`, keeping
    /// their first-seen order. The wildcard and whitespace are rejected.
    pub fn new(letters: &str) -> Option<Self> {
        let mut out = Vec::new();
        for c in letters.chars() {
            if c == WILDCARD || c.is_whitespace() {
                return None;
            }
            if !out.contains(&c) {
                out.push(c);
            }
        }
        if out.is_empty() {
            None
        } else {
            Some(Self { letters: out })
        }
    }

    pub fn contains(&self, c: char) -> bool {
        self.letters.contains(&c)
    }

    pub fn is_word(&self, word: &str) -> bool {
        !word.is_empty() && word.chars().all(|c| self.contains(c))
    }

    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self {
            letters: DEFAULT_ALPHABET.chars().collect(),
        }
    }
}

/// Rule set a session is played under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rules {
    /// Incorrect guesses allowed before the game is lost.
    pub max_tries: u32,
    pub alphabet: Alphabet,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_tries: DEFAULT_MAX_TRIES,
            alphabet: Alphabet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules() {
        let rules = Rules::default();
        assert_eq!(rules.max_tries, 6);
        assert_eq!(rules.alphabet.len(), 26);
    }

    #[test]
    fn test_alphabet_deduplicates() {
        let alphabet = Alphabet::new("abca").unwrap();
        assert_eq!(alphabet.len(), 3);
        assert!(alphabet.contains('c'));
        assert!(!alphabet.contains('d'));
    }

    #[test]
    fn test_alphabet_rejects_wildcard_and_empty() {
        assert!(Alphabet::new("ab_").is_none());
        assert!(Alphabet::new("a b").is_none());
        assert!(Alphabet::new("").is_none());
    }

    #[test]
    fn test_is_word() {
        let alphabet = Alphabet::default();
        assert!(alphabet.is_word("apple"));
        assert!(!alphabet.is_word("Apple"));
        assert!(!alphabet.is_word("ap_le"));
        assert!(!alphabet.is_word(""));
    }
}
