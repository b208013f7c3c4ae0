//! Configuration for tokenizing and filtering.
//!
//! A [`SieveConfig`] can be written as JSON:
//!
//! ```json
//! {
//!   "tokenizer": { "chunk_size": 8192, "max_word_length": 1000 },
//!   "filters": [
//!     { "type": "vowel_middle" },
//!     { "type": "min_length", "min_length": 3 },
//!     { "type": "contains_letter", "letter": "t" }
//!   ]
//! }
//! ```
//!
//! The `tokenizer` section is optional. The `filters` key is required; use an
//! empty list for no filtering.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::pipeline::FilterPipeline;
use crate::analysis::token_filter::{
    ContainsLetterFilter, Filter, MinLengthFilter, VowelMiddleFilter,
};
use crate::error::{Result, SieveError};

/// Default number of bytes read from a source per chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Largest accepted chunk size (64 MiB).
pub const MAX_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Default maximum number of characters in an emitted word.
pub const DEFAULT_MAX_WORD_LENGTH: usize = 1000;

/// Limits of the streaming tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TokenizerConfig {
    /// Bytes read from the source per read call.
    pub chunk_size: usize,
    /// Longer words are split into pieces of this many characters.
    pub max_word_length: usize,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_word_length: DEFAULT_MAX_WORD_LENGTH,
        }
    }
}

impl TokenizerConfig {
    /// Check that both limits are positive and the chunk size is bounded.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(SieveError::invalid_config("chunk size must be positive"));
        }
        if self.chunk_size > MAX_CHUNK_SIZE {
            return Err(SieveError::invalid_config(format!(
                "chunk size must be at most {MAX_CHUNK_SIZE} bytes, got {}",
                self.chunk_size
            )));
        }
        if self.max_word_length == 0 {
            return Err(SieveError::invalid_config(
                "maximum word length must be positive",
            ));
        }
        Ok(())
    }
}

/// Description of a single filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FilterConfig {
    /// Keep words with at least `min_length` characters.
    MinLength { min_length: i64 },
    /// Keep words that do not contain `letter`, ignoring case.
    ContainsLetter { letter: char },
    /// Keep words without a vowel in the middle position(s).
    VowelMiddle,
}

impl FilterConfig {
    /// Construct the described filter.
    pub fn build(&self) -> Result<Arc<dyn Filter>> {
        Ok(match *self {
            FilterConfig::MinLength { min_length } => Arc::new(MinLengthFilter::new(min_length)?),
            FilterConfig::ContainsLetter { letter } => {
                Arc::new(ContainsLetterFilter::new(letter)?)
            }
            FilterConfig::VowelMiddle => Arc::new(VowelMiddleFilter::new()),
        })
    }
}

/// Complete configuration of a [`Sieve`](crate::analysis::sieve::Sieve).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SieveConfig {
    /// Tokenizer limits.
    #[serde(default)]
    pub tokenizer: TokenizerConfig,
    /// Filters in application order. Must be present, may be empty.
    #[serde(default)]
    pub filters: Option<Vec<FilterConfig>>,
}

impl SieveConfig {
    /// Create a configuration with the given filters and default limits.
    pub fn with_filters(filters: Vec<FilterConfig>) -> Self {
        SieveConfig {
            tokenizer: TokenizerConfig::default(),
            filters: Some(filters),
        }
    }

    /// The classic chain: vowel-in-middle, minimum length 3, no letter 't'.
    pub fn default_filters() -> Vec<FilterConfig> {
        vec![
            FilterConfig::VowelMiddle,
            FilterConfig::MinLength { min_length: 3 },
            FilterConfig::ContainsLetter { letter: 't' },
        ]
    }

    /// Parse a JSON configuration document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| SieveError::invalid_config(format!("malformed configuration: {e}")))
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&json)
    }

    /// Build the filter pipeline described by this configuration.
    ///
    /// Every filter is constructed (and validated) here, so invalid settings
    /// surface before any input is read.
    pub fn build_pipeline(&self) -> Result<FilterPipeline> {
        let filters = self
            .filters
            .as_ref()
            .map(|filters| filters.iter().map(FilterConfig::build).collect::<Result<Vec<_>>>())
            .transpose()?;
        FilterPipeline::from_optional(filters)
    }
}
