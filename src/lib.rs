//! # wordsieve
//!
//! Streaming word extraction with a composable filter pipeline.
//!
//! ## Features
//!
//! - Bounded-memory tokenization of arbitrarily large inputs
//! - Oversized words split at a configurable character limit
//! - Lazy, ordered filter chains over any word sequence
//! - JSON configuration of tokenizer limits and filters

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;

pub mod prelude {
    pub use crate::analysis::pipeline::FilterPipeline;
    pub use crate::analysis::sieve::Sieve;
    pub use crate::analysis::token_filter::{
        ContainsLetterFilter, Filter, MinLengthFilter, PredicateFilter, VowelMiddleFilter,
        WordPredicate,
    };
    pub use crate::analysis::tokenizer::{Source, StreamingTokenizer, Tokenizer};
    pub use crate::analysis::word::{IntoWordStream, Word, WordStream, collect_words};
    pub use crate::config::{FilterConfig, SieveConfig, TokenizerConfig};
    pub use crate::error::{ErrorKind, Result, SieveError};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
