//! Word filter implementations.
//!
//! A filter transforms a word stream by dropping words. Filters never modify
//! or reorder the words they keep, and a filter's configuration is fixed
//! when it is constructed.
//!
//! # Available Filters
//!
//! - [`min_length::MinLengthFilter`] - Drops words shorter than a minimum
//! - [`contains_letter::ContainsLetterFilter`] - Drops words containing a letter
//! - [`vowel_middle::VowelMiddleFilter`] - Drops words with a vowel in the middle
//! - [`PredicateFilter`] - Wraps any closure over a single word
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::token_filter::Filter;
//! use wordsieve::analysis::token_filter::min_length::MinLengthFilter;
//! use wordsieve::analysis::word::{IntoWordStream, collect_words};
//!
//! let filter = MinLengthFilter::new(3).unwrap();
//! let words = vec!["I", "am", "the", "king"].into_word_stream();
//! let kept = collect_words(filter.filter(words).unwrap()).unwrap();
//!
//! assert_eq!(kept, vec!["the", "king"]);
//! ```

use std::fmt;
use std::sync::Arc;

use crate::analysis::word::WordStream;
use crate::error::Result;

/// Trait for filters that transform word streams.
///
/// Implementations must only drop words: survivors keep their content and
/// relative order. Errors travelling in the stream are passed through
/// untouched so that the consumer sees them where they happened.
pub trait Filter: Send + Sync {
    /// Apply this filter to a word stream.
    fn filter(&self, words: WordStream) -> Result<WordStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A decision about a single word, independent of every other word.
///
/// Filters built from a `WordPredicate` commute with each other: the set of
/// survivors does not depend on the order they are applied in.
pub trait WordPredicate: Send + Sync {
    /// Whether `word` survives.
    fn keep(&self, word: &str) -> bool;
}

/// Lazily drop every word rejected by `predicate`.
pub fn retain<P>(words: WordStream, predicate: P) -> WordStream
where
    P: WordPredicate + 'static,
{
    Box::new(words.filter(move |word| match word {
        Ok(word) => predicate.keep(word),
        Err(_) => true,
    }))
}

/// A filter built from a closure over a single word.
///
/// # Examples
///
/// ```
/// use wordsieve::analysis::token_filter::{Filter, PredicateFilter};
/// use wordsieve::analysis::word::{IntoWordStream, collect_words};
///
/// let no_digits = PredicateFilter::new("no_digits", |w: &str| !w.chars().any(|c| c.is_ascii_digit()));
/// let kept = collect_words(no_digits.filter(vec!["r2d2", "luke"].into_word_stream()).unwrap()).unwrap();
/// assert_eq!(kept, vec!["luke"]);
/// ```
#[derive(Clone)]
pub struct PredicateFilter {
    name: &'static str,
    predicate: Arc<dyn Fn(&str) -> bool + Send + Sync>,
}

impl PredicateFilter {
    /// Create a new filter keeping the words for which `predicate` is true.
    pub fn new<F>(name: &'static str, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        PredicateFilter {
            name,
            predicate: Arc::new(predicate),
        }
    }
}

impl WordPredicate for PredicateFilter {
    fn keep(&self, word: &str) -> bool {
        (self.predicate)(word)
    }
}

impl Filter for PredicateFilter {
    fn filter(&self, words: WordStream) -> Result<WordStream> {
        Ok(retain(words, self.clone()))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

impl fmt::Debug for PredicateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateFilter")
            .field("name", &self.name)
            .finish()
    }
}

// Individual filter modules
pub mod contains_letter;
pub mod min_length;
pub mod vowel_middle;

// Re-export all filters for convenient access
pub use contains_letter::ContainsLetterFilter;
pub use min_length::MinLengthFilter;
pub use vowel_middle::VowelMiddleFilter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::word::{IntoWordStream, Word, collect_words};
    use crate::error::{ErrorKind, SieveError};

    #[test]
    fn test_predicate_filter() {
        let filter = PredicateFilter::new("short", |w: &str| w.len() < 4);
        let result = collect_words(
            filter
                .filter(vec!["one", "three", "two"].into_word_stream())
                .unwrap(),
        )
        .unwrap();
        assert_eq!(result, vec!["one", "two"]);
        assert_eq!(filter.name(), "short");
    }

    #[test]
    fn test_errors_pass_through_in_place() {
        let words: WordStream = Box::new(
            vec![
                Ok(Word::from("drop")),
                Ok(Word::from("kept")),
                Err(SieveError::invalid_source("boom")),
            ]
            .into_iter(),
        );
        let filter = PredicateFilter::new("not_drop", |w: &str| w != "drop");
        let result: Vec<_> = filter.filter(words).unwrap().collect();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].as_ref().unwrap(), "kept");
        assert_eq!(
            result[1].as_ref().unwrap_err().kind(),
            ErrorKind::InvalidSourceIdentifier
        );
    }
}
