//! Vowel-in-middle filter implementation.
//!
//! Drops words whose middle position holds a vowel. For an odd length `L`
//! the middle is the character at `L / 2`; for an even length both
//! characters at `L / 2 - 1` and `L / 2` are checked.
//!
//! ```text
//! "clean" (5)  → 'e'        → dropped
//! "what"  (4)  → 'h', 'a'   → dropped
//! "rhythm"(6)  → 'y', 't'   → kept
//! ```

use super::{Filter, WordPredicate, retain};

use crate::analysis::word::WordStream;
use crate::error::Result;

/// A filter that drops words with a vowel (a, e, i, o, u in any case) in
/// the middle position(s).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VowelMiddleFilter;

impl VowelMiddleFilter {
    /// Create a new vowel-in-middle filter.
    pub fn new() -> Self {
        VowelMiddleFilter
    }

    fn is_vowel(c: char) -> bool {
        matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
    }

    /// Whether the middle character(s) of `word` include a vowel.
    ///
    /// An empty word has no middle and never matches.
    pub fn has_vowel_in_middle(word: &str) -> bool {
        let len = word.chars().count();
        if len == 0 {
            return false;
        }

        let middle = len / 2;
        let mut chars = word.chars();
        if len % 2 == 1 {
            chars.nth(middle).is_some_and(Self::is_vowel)
        } else {
            let left = chars.nth(middle - 1);
            let right = chars.next();
            left.is_some_and(Self::is_vowel) || right.is_some_and(Self::is_vowel)
        }
    }
}

impl WordPredicate for VowelMiddleFilter {
    fn keep(&self, word: &str) -> bool {
        !Self::has_vowel_in_middle(word)
    }
}

impl Filter for VowelMiddleFilter {
    fn filter(&self, words: WordStream) -> Result<WordStream> {
        Ok(retain(words, *self))
    }

    fn name(&self) -> &'static str {
        "vowel_middle"
    }
}
