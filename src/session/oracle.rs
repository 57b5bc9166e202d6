//! Word validity checks
//!
//! Guesses are checked before scoring. An oracle that cannot answer must say
//! "not a word": a rejected guess costs the player nothing.

use crate::Result;
use crate::levels::loader::{load_word_set, word_set_from_lines};
use rustc_hash::FxHashSet;
use std::path::Path;

/// Decides whether a guessed word is acceptable
pub trait WordOracle {
    /// `word` is one uppercase segment of a guess
    fn is_valid_word(&self, word: &str) -> bool;
}

/// Accepts every word
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl WordOracle for AcceptAll {
    fn is_valid_word(&self, _word: &str) -> bool {
        true
    }
}

impl<F: Fn(&str) -> bool> WordOracle for F {
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Accepts words listed in a word list
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: FxHashSet<String>,
}

impl Dictionary {
    /// Build from word list text, one word per line
    #[must_use]
    pub fn from_lines(content: &str) -> Self {
        Self {
            words: word_set_from_lines(content),
        }
    }

    /// Load a word list file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self {
            words: load_word_set(path)?,
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }
}

/// Either no check at all or a loaded dictionary
#[derive(Debug, Clone)]
pub enum OracleType {
    AcceptAll(AcceptAll),
    Dictionary(Dictionary),
}

impl WordOracle for OracleType {
    fn is_valid_word(&self, word: &str) -> bool {
        match self {
            Self::AcceptAll(o) => o.is_valid_word(word),
            Self::Dictionary(o) => o.is_valid_word(word),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_all_accepts() {
        assert!(AcceptAll.is_valid_word("QZXQZ"));
    }

    #[test]
    fn dictionary_is_case_insensitive() {
        let dict = Dictionary::from_lines("crane\nslate\n");
        assert_eq!(dict.len(), 2);
        assert!(dict.is_valid_word("CRANE"));
        assert!(dict.is_valid_word("slate"));
        assert!(!dict.is_valid_word("QZXQZ"));
    }

    #[test]
    fn closures_are_oracles() {
        let no_q = |word: &str| !word.contains('Q');
        assert!(no_q.is_valid_word("CRANE"));
        assert!(!no_q.is_valid_word("QUEEN"));
    }

    #[test]
    fn oracle_type_dispatch() {
        let dict = OracleType::Dictionary(Dictionary::from_lines("apple"));
        assert!(dict.is_valid_word("APPLE"));
        assert!(!dict.is_valid_word("GRAPE"));
        assert!(OracleType::AcceptAll(AcceptAll).is_valid_word("GRAPE"));
    }
}
