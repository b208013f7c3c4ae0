//! Word types for text analysis.
//!
//! A [`Word`] is the unit that flows from the tokenizer through the filter
//! pipeline. Words are owned, immutable and compared by value only.
//!
//! # Core Types
//!
//! - [`Word`] - A single non-empty run of non-whitespace characters
//! - [`WordStream`] - Type alias for a boxed, fallible iterator of words
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::word::Word;
//!
//! let word = Word::new("héllo");
//! assert_eq!(word.as_str(), "héllo");
//! assert_eq!(word.char_len(), 5);
//! ```

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A word produced by the tokenizer.
///
/// The tokenizer never yields an empty word. Words built by hand (for
/// instance in tests or when feeding the pipeline from another source) may
/// be empty; every filter handles that case.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a new word from the given text.
    pub fn new<S: Into<String>>(text: S) -> Self {
        Word(text.into())
    }

    /// Get the word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of Unicode scalar values in the word.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Consume the word and return the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Word {
    fn from(text: String) -> Self {
        Word(text)
    }
}

impl From<&str> for Word {
    fn from(text: &str) -> Self {
        Word(text.to_string())
    }
}

impl PartialEq<str> for Word {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Word {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A word stream is a lazy, single-pass sequence of words.
///
/// The `Err` arm carries a failure that happened while producing the
/// sequence (for example a read error halfway through a file). Streams end
/// after yielding an error.
pub type WordStream = Box<dyn Iterator<Item = Result<Word>>>;

/// Trait for types that can produce a word stream.
pub trait IntoWordStream {
    /// Convert this type into a word stream.
    fn into_word_stream(self) -> WordStream;
}

impl IntoWordStream for Vec<Word> {
    fn into_word_stream(self) -> WordStream {
        Box::new(self.into_iter().map(Ok))
    }
}

impl IntoWordStream for Vec<&str> {
    fn into_word_stream(self) -> WordStream {
        let words: Vec<Word> = self.into_iter().map(Word::from).collect();
        words.into_word_stream()
    }
}

/// Drain a word stream into a vector, stopping at the first error.
pub fn collect_words(words: WordStream) -> Result<Vec<Word>> {
    words.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_creation() {
        let word = Word::new("hello");
        assert_eq!(word.as_str(), "hello");
        assert_eq!(word.char_len(), 5);
        assert_eq!(word, "hello");
        assert_eq!(word.to_string(), "hello");
    }

    #[test]
    fn test_char_len_counts_scalars() {
        let word = Word::new("naïve");
        assert_eq!(word.len(), 6);
        assert_eq!(word.char_len(), 5);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Word::from("code"), Word::new(String::from("code")));
        assert_ne!(Word::from("code"), Word::from("Code"));
    }

    #[test]
    fn test_into_word_stream() {
        let words = collect_words(vec!["a", "b"].into_word_stream()).unwrap();
        assert_eq!(words, vec![Word::from("a"), Word::from("b")]);
    }

    #[test]
    fn test_serialize_transparent() {
        let json = serde_json::to_string(&vec![Word::from("x"), Word::from("y")]).unwrap();
        assert_eq!(json, r#"["x","y"]"#);
    }
}
