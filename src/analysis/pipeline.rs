//! Filter pipeline that chains word filters.
//!
//! The pipeline applies its filters in the order they were given: each filter
//! sees only the words that survived every filter before it. Application is
//! lazy; nothing is pulled from the input until the result is consumed.
//!
//! ```text
//! words → Filter 1 → Filter 2 → ... → Filter N → words'
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use wordsieve::analysis::pipeline::FilterPipeline;
//! use wordsieve::analysis::token_filter::{ContainsLetterFilter, MinLengthFilter};
//! use wordsieve::analysis::word::{IntoWordStream, collect_words};
//!
//! let pipeline = FilterPipeline::empty()
//!     .add_filter(Arc::new(MinLengthFilter::new(3).unwrap()))
//!     .add_filter(Arc::new(ContainsLetterFilter::new('t').unwrap()));
//!
//! let words = vec!["I", "am", "the", "king", "of", "code"].into_word_stream();
//! let kept = collect_words(pipeline.apply(words).unwrap()).unwrap();
//! assert_eq!(kept, vec!["king", "code"]);
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::token_filter::Filter;
use crate::analysis::word::{Word, WordStream};
use crate::error::{Result, SieveError};

/// An ordered, immutable chain of filters.
///
/// The pipeline holds no per-run state and can be applied to any number of
/// word streams.
#[derive(Clone, Default)]
pub struct FilterPipeline {
    filters: Vec<Arc<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a pipeline from an explicit, possibly empty, filter list.
    pub fn new(filters: Vec<Arc<dyn Filter>>) -> Self {
        FilterPipeline { filters }
    }

    /// Create a pipeline with no filters (the identity transform).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a pipeline from a filter list that may be absent.
    ///
    /// An absent list is a configuration mistake rather than "no filters",
    /// and is rejected with [`SieveError::InvalidConfiguration`].
    pub fn from_optional(filters: Option<Vec<Arc<dyn Filter>>>) -> Result<Self> {
        filters
            .map(Self::new)
            .ok_or_else(|| SieveError::invalid_config("a filter list is required"))
    }

    /// Append a filter to the end of the chain.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the filters in application order.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Number of filters in the chain.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether the chain has no filters.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply every filter, in order, to `words`.
    pub fn apply(&self, words: WordStream) -> Result<WordStream> {
        debug!("Applying filter chain {:?}", self.filter_names());

        let mut words = words;
        for filter in &self.filters {
            words = filter.filter(words)?;
        }
        Ok(words)
    }

    /// Apply the chain to any sequence of words.
    pub fn apply_words<I>(&self, words: I) -> Result<WordStream>
    where
        I: IntoIterator<Item = Word>,
        I::IntoIter: 'static,
    {
        self.apply(Box::new(words.into_iter().map(Ok)))
    }

    fn filter_names(&self) -> Vec<&'static str> {
        self.filters.iter().map(|f| f.name()).collect()
    }
}

impl fmt::Debug for FilterPipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPipeline")
            .field("filters", &self.filter_names())
            .finish()
    }
}
