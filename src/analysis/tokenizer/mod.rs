//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step of the analysis pipeline: they turn a
//! readable [`Source`] into a lazy [`WordStream`](crate::analysis::word::WordStream).
//!
//! # Available Tokenizers
//!
//! - [`streaming::StreamingTokenizer`] - Bounded-memory whitespace tokenizer
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::tokenizer::{Source, StreamingTokenizer, Tokenizer};
//!
//! let tokenizer = StreamingTokenizer::new();
//! let words: Vec<_> = tokenizer
//!     .tokenize(Source::from_text("Hello world"))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(words.len(), 2);
//! ```

use std::path::Path;

use crate::analysis::word::WordStream;
use crate::error::Result;

/// Trait for tokenizers that convert a source into words.
///
/// The trait requires `Send + Sync` so that a configured tokenizer can be
/// shared; each stream it produces is single-pass and owned by one consumer.
pub trait Tokenizer: Send + Sync {
    /// Tokenize an opened source into a lazy stream of words.
    fn tokenize(&self, source: Source) -> WordStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Open `path` and tokenize it.
    ///
    /// The source is validated before the stream is returned.
    fn tokenize_path(&self, path: &Path) -> Result<WordStream> {
        Ok(self.tokenize(Source::open(path)?))
    }
}

pub mod source;
pub mod streaming;
mod utf8;

pub use source::Source;
pub use streaming::{StreamingTokenizer, Words};
