//! Sieve that combines a tokenizer with a filter pipeline.
//!
//! A [`Sieve`] opens a source, tokenizes it and runs the words through its
//! [`FilterPipeline`], all lazily:
//!
//! ```text
//! Source → Tokenizer → Filter 1 → ... → Filter N → words
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wordsieve::analysis::pipeline::FilterPipeline;
//! use wordsieve::analysis::sieve::Sieve;
//! use wordsieve::analysis::token_filter::MinLengthFilter;
//! use wordsieve::analysis::tokenizer::{Source, StreamingTokenizer};
//!
//! let pipeline = FilterPipeline::new(vec![Arc::new(MinLengthFilter::new(3).unwrap())]);
//! let sieve = Sieve::new(Arc::new(StreamingTokenizer::new()), pipeline);
//!
//! let words: Vec<_> = sieve
//!     .sift(Source::from_text("I am the king of code"))
//!     .unwrap()
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(words, vec!["the", "king", "code"]);
//! ```

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::analysis::pipeline::FilterPipeline;
use crate::analysis::tokenizer::{Source, StreamingTokenizer, Tokenizer};
use crate::analysis::word::WordStream;
use crate::config::SieveConfig;
use crate::error::Result;

/// A tokenizer followed by a filter pipeline.
#[derive(Clone)]
pub struct Sieve {
    tokenizer: Arc<dyn Tokenizer>,
    pipeline: FilterPipeline,
}

impl Sieve {
    /// Create a new sieve from a tokenizer and a pipeline.
    pub fn new(tokenizer: Arc<dyn Tokenizer>, pipeline: FilterPipeline) -> Self {
        Sieve {
            tokenizer,
            pipeline,
        }
    }

    /// Build a sieve from a configuration document.
    pub fn from_config(config: &SieveConfig) -> Result<Self> {
        let tokenizer = StreamingTokenizer::with_config(config.tokenizer.clone())?;
        let pipeline = config.build_pipeline()?;
        Ok(Sieve::new(Arc::new(tokenizer), pipeline))
    }

    /// Get the tokenizer used by this sieve.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filter pipeline used by this sieve.
    pub fn pipeline(&self) -> &FilterPipeline {
        &self.pipeline
    }

    /// Tokenize and filter an opened source.
    pub fn sift(&self, source: Source) -> Result<WordStream> {
        self.pipeline.apply(self.tokenizer.tokenize(source))
    }

    /// Open `path`, then tokenize and filter it.
    ///
    /// Source validation errors are returned before any word is read.
    pub fn sift_path<P: AsRef<Path>>(&self, path: P) -> Result<WordStream> {
        self.pipeline
            .apply(self.tokenizer.tokenize_path(path.as_ref())?)
    }
}

impl fmt::Debug for Sieve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sieve")
            .field("tokenizer", &self.tokenizer.name())
            .field("pipeline", &self.pipeline)
            .finish()
    }
}
