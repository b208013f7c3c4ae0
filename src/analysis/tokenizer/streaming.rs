//! Streaming whitespace tokenizer.
//!
//! Reads a source in fixed-size chunks and splits it on Unicode whitespace.
//! Memory use is bounded by the chunk buffer plus one in-progress word,
//! whatever the size of the input.
//!
//! Words longer than the configured maximum are cut into consecutive pieces
//! of exactly that many characters, with a shorter final piece. No marker is
//! inserted at the cut.
//!
//! # Examples
//!
//! ```
//! use wordsieve::analysis::tokenizer::{Source, StreamingTokenizer};
//!
//! let tokenizer = StreamingTokenizer::new();
//! let words: Vec<_> = tokenizer
//!     .words(Source::from_text("hello\tworld\n"))
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(words, vec!["hello", "world"]);
//! ```

use std::io::{self, Read};
use std::mem;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use super::Tokenizer;
use super::source::Source;
use super::utf8::{MAX_CARRY, decode_lossy};

use crate::analysis::word::{Word, WordStream};
use crate::config::TokenizerConfig;
use crate::error::{Result, SieveError};

/// A tokenizer that streams words out of a source on demand.
#[derive(Clone, Debug, Default)]
pub struct StreamingTokenizer {
    config: TokenizerConfig,
}

impl StreamingTokenizer {
    /// Create a new streaming tokenizer with the default limits.
    pub fn new() -> Self {
        StreamingTokenizer {
            config: TokenizerConfig::default(),
        }
    }

    /// Create a streaming tokenizer with custom limits.
    pub fn with_config(config: TokenizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(StreamingTokenizer { config })
    }

    /// Get the configured limits.
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    /// Start a pass over `source`, returning the concrete word iterator.
    pub fn words(&self, source: Source) -> Words {
        Words::new(source, &self.config)
    }

    /// Open `path` and start a pass over it.
    ///
    /// The path is validated before this returns.
    pub fn open<P: AsRef<Path>>(&self, path: P) -> Result<Words> {
        Ok(self.words(Source::open(path)?))
    }
}

impl Tokenizer for StreamingTokenizer {
    fn tokenize(&self, source: Source) -> WordStream {
        Box::new(self.words(source))
    }

    fn name(&self) -> &'static str {
        "streaming_whitespace"
    }
}

/// Lazy iterator over the words of one source.
///
/// Each call to `next` consumes already decoded characters and reads at most
/// one further chunk. The source is released as soon as it reports end of
/// input or fails, and in any case when the iterator is dropped.
pub struct Words {
    name: PathBuf,
    reader: Option<Box<dyn Read>>,
    max_word_length: usize,
    chunk_size: usize,
    /// Raw bytes; the first `carry` bytes are an incomplete character left
    /// over from the previous read.
    buffer: Vec<u8>,
    carry: usize,
    /// Decoded characters of the current chunk, consumed from `cursor`.
    chunk: String,
    cursor: usize,
    current: String,
    current_len: usize,
    emitted: usize,
}

impl Words {
    fn new(source: Source, config: &TokenizerConfig) -> Self {
        let (name, reader) = source.into_parts();
        Words {
            name,
            reader: Some(reader),
            max_word_length: config.max_word_length,
            chunk_size: config.chunk_size,
            buffer: vec![0; config.chunk_size.saturating_add(MAX_CARRY)],
            carry: 0,
            chunk: String::with_capacity(config.chunk_size),
            cursor: 0,
            current: String::new(),
            current_len: 0,
            emitted: 0,
        }
    }

    /// Whether the underlying source is still held open.
    pub fn is_open(&self) -> bool {
        self.reader.is_some()
    }

    fn take_word(&mut self) -> Word {
        self.current_len = 0;
        self.emitted += 1;
        Word::from(mem::take(&mut self.current))
    }

    fn release(&mut self) {
        if self.reader.take().is_some() {
            debug!(
                "Released source {} after {} words",
                self.name.display(),
                self.emitted
            );
        }
    }

    /// Read and decode the next chunk. Returns `false` once nothing is left.
    fn fill_chunk(&mut self) -> io::Result<bool> {
        self.chunk.clear();
        self.cursor = 0;

        let Some(reader) = self.reader.as_mut() else {
            return Ok(false);
        };

        let end = self.buffer.len().min(self.carry.saturating_add(self.chunk_size));
        let read = loop {
            match reader.read(&mut self.buffer[self.carry..end]) {
                Ok(n) => break n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        };

        if read == 0 {
            if self.carry > 0 {
                // Input ended inside a multi-byte character.
                self.chunk.push(char::REPLACEMENT_CHARACTER);
                self.carry = 0;
            }
            self.release();
            return Ok(!self.chunk.is_empty());
        }

        trace!("Read {} bytes from {}", read, self.name.display());

        let filled = self.carry + read;
        let leftover = decode_lossy(&self.buffer[..filled], &mut self.chunk);
        self.buffer.copy_within(filled - leftover..filled, 0);
        self.carry = leftover;

        Ok(true)
    }
}

impl Iterator for Words {
    type Item = Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            loop {
                let Some(c) = self.chunk[self.cursor..].chars().next() else {
                    break;
                };
                self.cursor += c.len_utf8();

                if c.is_whitespace() {
                    if !self.current.is_empty() {
                        return Some(Ok(self.take_word()));
                    }
                } else {
                    self.current.push(c);
                    self.current_len += 1;

                    if self.current_len >= self.max_word_length {
                        debug!(
                            "Word reached {} characters in {}, splitting",
                            self.max_word_length,
                            self.name.display()
                        );
                        return Some(Ok(self.take_word()));
                    }
                }
            }

            match self.fill_chunk() {
                Ok(true) => continue,
                Ok(false) => {
                    if self.current.is_empty() {
                        return None;
                    }
                    return Some(Ok(self.take_word()));
                }
                Err(e) => {
                    self.release();
                    self.current.clear();
                    self.current_len = 0;
                    self.carry = 0;
                    return Some(Err(SieveError::unreadable(self.name.clone(), e)));
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Words {}
