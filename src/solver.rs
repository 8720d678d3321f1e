use crate::pattern::{GuessedLetters, Pattern};
use crate::{debug_log, trace_log};
use indexmap::IndexMap;
use std::hash::Hash;

/// Counts by descending value. `IndexMap` keeps first-insertion order and the
/// sort is stable, so equal counts stay in first-occurrence order.
fn most_common<K>(counts: IndexMap<K, usize>) -> Vec<(K, usize)>
where
    K: Eq + Hash,
{
    let mut entries: Vec<(K, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries
}

/// Words of `dictionary` consistent with `pattern`, in dictionary order.
pub fn filter_candidates<'a>(pattern: &Pattern, dictionary: &'a [String]) -> Vec<&'a String> {
    dictionary.iter().filter(|w| pattern.matches(w)).collect()
}

/// Adjacent letter pairs of `candidates` where neither letter was guessed,
/// most common first.
pub fn bigram_frequencies(
    candidates: &[&String],
    guessed: &GuessedLetters,
) -> Vec<((char, char), usize)> {
    let mut counts: IndexMap<(char, char), usize> = IndexMap::new();
    for word in candidates {
        let chars: Vec<char> = word.chars().collect();
        for pair in chars.windows(2) {
            if !guessed.contains(pair[0]) && !guessed.contains(pair[1]) {
                *counts.entry((pair[0], pair[1])).or_insert(0) += 1;
            }
        }
    }
    most_common(counts)
}

/// Every letter occurrence of `candidates`, most common first.
pub fn letter_frequencies(candidates: &[&String]) -> Vec<(char, usize)> {
    let mut counts: IndexMap<char, usize> = IndexMap::new();
    for word in candidates {
        for c in word.chars() {
            *counts.entry(c).or_insert(0) += 1;
        }
    }
    most_common(counts)
}

/// Picks the next letter to guess, or `None` when every letter the
/// candidates contain has already been tried.
///
/// Candidates are the words matching `pattern`; when nothing matches, the
/// whole `dictionary` is used instead. The first unguessed letter of the most
/// frequent bigram wins. Without any usable bigram, the most frequent single
/// unguessed letter is chosen.
pub fn select_next_letter(
    pattern: &Pattern,
    guessed: &GuessedLetters,
    dictionary: &[String],
) -> Option<char> {
    let mut candidates = filter_candidates(pattern, dictionary);
    if candidates.is_empty() {
        debug_log!("no word matches '{pattern}', falling back to the full dictionary");
        candidates = dictionary.iter().collect();
    }
    trace_log!("{} candidates for '{pattern}'", candidates.len());

    let bigrams = bigram_frequencies(&candidates, guessed);
    for ((first, second), _) in &bigrams {
        if !guessed.contains(*first) {
            return Some(*first);
        }
        if !guessed.contains(*second) {
            return Some(*second);
        }
    }

    debug_log!("using single letter frequency");
    letter_frequencies(&candidates)
        .into_iter()
        .map(|(c, _)| c)
        .find(|c| !guessed.contains(*c))
}
