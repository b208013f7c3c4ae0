//! Readable sources for the tokenizer.
//!
//! [`Source::open`] validates a path eagerly: a blank path, a missing file or
//! a path that cannot be read are reported before any word is produced, so a
//! caller learns about a bad source even if it never consumes the stream.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{Result, SieveError};

/// A named, sequentially readable character source.
///
/// The source owns its reader. The underlying handle is released when the
/// source (or the word iterator that took ownership of it) is dropped.
pub struct Source {
    name: PathBuf,
    reader: Box<dyn Read>,
}

impl Source {
    /// Open a file for sequential reading.
    ///
    /// # Errors
    ///
    /// - [`SieveError::InvalidSourceIdentifier`] if `path` is empty or blank
    /// - [`SieveError::SourceNotFound`] if nothing exists at `path`
    /// - [`SieveError::SourceUnreadable`] if `path` is not a regular file or
    ///   cannot be opened
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if path.as_os_str().is_empty() || path.to_string_lossy().trim().is_empty() {
            return Err(SieveError::invalid_source(
                "source path cannot be empty or blank",
            ));
        }

        let metadata = match path.metadata() {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(SieveError::not_found(path));
            }
            Err(e) => return Err(SieveError::unreadable(path, e)),
        };

        if !metadata.is_file() {
            return Err(SieveError::unreadable(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }

        let file = File::open(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => SieveError::not_found(path),
            _ => SieveError::unreadable(path, e),
        })?;

        debug!("Opened source {} ({} bytes)", path.display(), metadata.len());

        Ok(Source {
            name: path.to_path_buf(),
            reader: Box::new(file),
        })
    }

    /// Wrap an arbitrary reader. `name` is only used in error messages.
    pub fn from_reader<P, R>(name: P, reader: R) -> Self
    where
        P: Into<PathBuf>,
        R: Read + 'static,
    {
        Source {
            name: name.into(),
            reader: Box::new(reader),
        }
    }

    /// Wrap an in-memory string.
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Self::from_reader("<memory>", io::Cursor::new(text.into().into_bytes()))
    }

    /// The name this source reports in errors.
    pub fn name(&self) -> &Path {
        &self.name
    }

    pub(crate) fn into_parts(self) -> (PathBuf, Box<dyn Read>) {
        (self.name, self.reader)
    }
}

impl fmt::Debug for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Source").field("name", &self.name).finish()
    }
}
