//! Vocabulary model
//!
//! An ordered list of known words. The order is the display priority for
//! completion; accepting a word moves it one place earlier, so words that
//! keep being chosen rise slowly instead of jumping to the front.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use crate::error::Result;

/// How prefixes are compared against words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseSensitivity {
    #[default]
    Insensitive,
    Sensitive,
}

/// Ordered, duplicate-free word list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Vocabulary {
    /// Build a vocabulary from word-list lines
    ///
    /// Each entry is trimmed, empty entries are dropped and input order is
    /// kept. Entries equal to an earlier one ignoring case are dropped.
    pub fn load<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = lines
            .into_iter()
            .filter_map(|line| {
                let word = line.as_ref().trim();
                if word.is_empty() || !seen.insert(word.to_lowercase()) {
                    None
                } else {
                    Some(word.to_string())
                }
            })
            .collect();

        Self { words }
    }

    /// Build a vocabulary from newline-delimited text
    pub fn from_text(text: &str) -> Self {
        Self::load(text.lines())
    }

    /// Read a word-list file
    pub fn try_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let vocabulary = Self::from_text(&contents);
        debug!("loaded {} words from {}", vocabulary.len(), path.display());
        Ok(vocabulary)
    }

    /// Read a word-list file, falling back to an empty vocabulary
    pub fn from_file(path: &Path) -> Self {
        Self::try_from_file(path).unwrap_or_else(|e| {
            warn!("word list {} unavailable: {}", path.display(), e);
            Self::default()
        })
    }

    /// Number of words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if there are no words
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Words in priority order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Index of a word, matched exactly
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    /// Words starting with `prefix`, ignoring case, in model order
    pub fn search(&self, prefix: &str) -> Vec<&str> {
        self.search_with(prefix, CaseSensitivity::Insensitive)
    }

    /// Words starting with `prefix`, in model order
    pub fn search_with(&self, prefix: &str, case: CaseSensitivity) -> Vec<&str> {
        match case {
            CaseSensitivity::Sensitive => self
                .words
                .iter()
                .filter(|w| w.starts_with(prefix))
                .map(String::as_str)
                .collect(),
            CaseSensitivity::Insensitive => {
                let prefix = prefix.to_lowercase();
                self.words
                    .iter()
                    .filter(|w| w.to_lowercase().starts_with(&prefix))
                    .map(String::as_str)
                    .collect()
            }
        }
    }

    /// Return a copy with `word` moved one position earlier
    ///
    /// Unknown words and the word already at the front leave the order as is.
    pub fn promote(&self, word: &str) -> Self {
        let mut words = self.words.clone();
        if let Some(idx) = self.position(word).filter(|&i| i > 0) {
            words.swap(idx - 1, idx);
        }
        Self { words }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn vocab(words: &[&str]) -> Vocabulary {
        Vocabulary::load(words.iter().copied())
    }

    #[test]
    fn test_load_trims_and_drops_empty() {
        let v = Vocabulary::from_text("hello\r\n  test \n\n\t\nteam\n");
        assert_eq!(v.words(), ["hello", "test", "team"]);
    }

    #[test]
    fn test_load_drops_case_insensitive_duplicates() {
        let v = vocab(&["Rust", "tea", "rust", "TEA", "team"]);
        assert_eq!(v.words(), ["Rust", "tea", "team"]);
    }

    #[test]
    fn test_search_keeps_model_order() {
        let v = vocab(&["hello", "test", "tea", "team"]);
        assert_eq!(v.search("te"), vec!["test", "tea", "team"]);
        assert_eq!(v.search("TE"), vec!["test", "tea", "team"]);
        assert_eq!(v.search("tea"), vec!["tea", "team"]);
        assert!(v.search("x").is_empty());
    }

    #[test]
    fn test_search_case_sensitive() {
        let v = vocab(&["Tea", "team"]);
        assert_eq!(v.search_with("te", CaseSensitivity::Sensitive), vec!["team"]);
        assert_eq!(v.search_with("Te", CaseSensitivity::Sensitive), vec!["Tea"]);
    }

    #[test]
    fn test_promote_moves_one_step() {
        let v = vocab(&["test", "tea", "team"]);

        let promoted = v.promote("team");
        assert_eq!(promoted.words(), ["test", "team", "tea"]);

        let promoted = promoted.promote("team");
        assert_eq!(promoted.words(), ["team", "test", "tea"]);

        // The original value is untouched
        assert_eq!(v.words(), ["test", "tea", "team"]);
    }

    #[test]
    fn test_promote_front_or_unknown_is_noop() {
        let v = vocab(&["test", "tea", "team"]);
        assert_eq!(v.promote("test"), v);
        assert_eq!(v.promote("coffee"), v);
        // Exact match only
        assert_eq!(v.promote("TEAM"), v);
    }

    #[test]
    fn test_promote_preserves_word_set() {
        let v = vocab(&["a1", "a2", "a3", "a4"]);
        let mut promoted = v.clone();
        for word in ["a4", "a4", "a2", "a3", "a4"] {
            promoted = promoted.promote(word);
        }
        let mut before = v.words().to_vec();
        let mut after = promoted.words().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wordlist.txt");
        fs::write(&path, "alpha\nbeta\n").unwrap();

        assert_eq!(Vocabulary::from_file(&path).words(), ["alpha", "beta"]);
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");

        assert!(Vocabulary::from_file(&path).is_empty());
        assert!(Vocabulary::try_from_file(&path).is_err());
    }
}
