//! Minimum length filter implementation.

use super::{Filter, WordPredicate, retain};

use crate::analysis::word::WordStream;
use crate::error::{Result, SieveError};

/// A filter that drops words with fewer characters than a minimum.
///
/// Length is measured in Unicode scalar values, not bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MinLengthFilter {
    min_length: usize,
}

impl MinLengthFilter {
    /// Create a new minimum length filter.
    ///
    /// A negative `min_length` is rejected with
    /// [`SieveError::InvalidConfiguration`].
    pub fn new(min_length: i64) -> Result<Self> {
        let min_length = usize::try_from(min_length).map_err(|_| {
            SieveError::invalid_config(format!(
                "minimum length cannot be negative (got {min_length})"
            ))
        })?;
        Ok(MinLengthFilter { min_length })
    }

    /// Get the minimum length.
    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl WordPredicate for MinLengthFilter {
    fn keep(&self, word: &str) -> bool {
        // Only count as far as the threshold.
        word.chars().take(self.min_length).count() >= self.min_length
    }
}

impl Filter for MinLengthFilter {
    fn filter(&self, words: WordStream) -> Result<WordStream> {
        Ok(retain(words, *self))
    }

    fn name(&self) -> &'static str {
        "min_length"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::word::{IntoWordStream, collect_words};
    use crate::error::ErrorKind;

    fn apply(filter: &MinLengthFilter, words: Vec<&str>) -> Vec<String> {
        collect_words(filter.filter(words.into_word_stream()).unwrap())
            .unwrap()
            .into_iter()
            .map(|w| w.into_string())
            .collect()
    }

    #[test]
    fn test_min_length_filter() {
        let filter = MinLengthFilter::new(3).unwrap();
        assert_eq!(
            apply(&filter, vec!["I", "am", "the", "king", "of", "code"]),
            vec!["the", "king", "code"]
        );
    }

    #[test]
    fn test_zero_keeps_everything() {
        let filter = MinLengthFilter::new(0).unwrap();
        assert_eq!(apply(&filter, vec!["a", "", "bc"]), vec!["a", "", "bc"]);
    }

    #[test]
    fn test_counts_characters() {
        let filter = MinLengthFilter::new(3).unwrap();
        // "éa" is 3 bytes but only 2 characters.
        assert_eq!(apply(&filter, vec!["éa", "éaé"]), vec!["éaé"]);
    }

    #[test]
    fn test_negative_length_rejected() {
        let err = MinLengthFilter::new(-1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(MinLengthFilter::new(1).unwrap().name(), "min_length");
    }
}
