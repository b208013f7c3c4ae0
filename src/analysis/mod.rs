//! Text analysis module for wordsieve.
//!
//! This module provides streaming tokenization, word filters and the
//! pipeline that chains them.

pub mod pipeline;
pub mod sieve;
pub mod token_filter;
pub mod tokenizer;
pub mod word;

// Re-export commonly used types
pub use pipeline::FilterPipeline;
pub use sieve::Sieve;
pub use token_filter::*;
pub use tokenizer::*;
pub use word::*;
