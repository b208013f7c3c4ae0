//! Contains-letter filter implementation.
//!
//! Drops every word that contains a given letter, ignoring case.
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::token_filter::Filter;
//! use wordsieve::analysis::token_filter::contains_letter::ContainsLetterFilter;
//! use wordsieve::analysis::word::{IntoWordStream, collect_words};
//!
//! let filter = ContainsLetterFilter::new('t').unwrap();
//! let kept = collect_words(filter.filter(vec!["The", "king", "of", "code"].into_word_stream()).unwrap()).unwrap();
//! assert_eq!(kept, vec!["king", "of", "code"]);
//! ```

use super::{Filter, WordPredicate, retain};

use crate::analysis::word::WordStream;
use crate::error::{Result, SieveError};

/// A filter that drops words containing a letter, case-insensitively.
///
/// Two characters match when their Unicode lowercase mappings or their
/// uppercase mappings are equal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContainsLetterFilter {
    letter: char,
}

impl ContainsLetterFilter {
    /// Create a new contains-letter filter.
    ///
    /// Whitespace can never be part of a word, so a whitespace `letter` is
    /// rejected with [`SieveError::InvalidConfiguration`].
    pub fn new(letter: char) -> Result<Self> {
        if letter.is_whitespace() {
            return Err(SieveError::invalid_config(format!(
                "letter to exclude cannot be whitespace (got {letter:?})"
            )));
        }
        Ok(ContainsLetterFilter { letter })
    }

    /// Get the excluded letter.
    pub fn letter(&self) -> char {
        self.letter
    }

    fn matches(&self, c: char) -> bool {
        c == self.letter
            || c.to_lowercase().eq(self.letter.to_lowercase())
            || c.to_uppercase().eq(self.letter.to_uppercase())
    }
}

impl WordPredicate for ContainsLetterFilter {
    fn keep(&self, word: &str) -> bool {
        !word.chars().any(|c| self.matches(c))
    }
}

impl Filter for ContainsLetterFilter {
    fn filter(&self, words: WordStream) -> Result<WordStream> {
        Ok(retain(words, *self))
    }

    fn name(&self) -> &'static str {
        "contains_letter"
    }
}
