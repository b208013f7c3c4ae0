//! Output formatting for the CLI.
//!
//! Human output is written while the words are being pulled from the
//! pipeline, so it never holds more than one word. JSON output has to
//! collect the survivors first.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::word::{Word, WordStream};
use crate::cli::args::{OutputFormat, SieveArgs};
use crate::error::Result;

/// Result structure for a filtering run.
#[derive(Debug, Serialize, Deserialize)]
pub struct FilterReport {
    pub source: String,
    pub filters: Vec<String>,
    pub word_count: usize,
    pub words: Vec<Word>,
}

/// Write the surviving words in the requested format.
///
/// Returns the number of words written.
pub fn output_words<W: Write>(
    words: WordStream,
    source: &str,
    filters: Vec<String>,
    args: &SieveArgs,
    out: &mut W,
) -> Result<usize> {
    match args.output_format {
        OutputFormat::Human => output_human(words, args, out),
        OutputFormat::Json => {
            let words = words.collect::<Result<Vec<_>>>()?;
            let report = FilterReport {
                source: source.to_string(),
                filters,
                word_count: words.len(),
                words,
            };
            output_json(&report, args, out)?;
            Ok(report.word_count)
        }
    }
}

/// Output in human-readable format: the survivors joined by single spaces.
fn output_human<W: Write>(words: WordStream, args: &SieveArgs, out: &mut W) -> Result<usize> {
    if args.verbosity() > 0 {
        writeln!(out, "Filtered output:")?;
    }

    let mut count = 0;
    for word in words {
        let word = word?;
        if count > 0 {
            out.write_all(b" ")?;
        }
        out.write_all(word.as_bytes())?;
        count += 1;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(count)
}

/// Output in JSON format.
fn output_json<T: Serialize, W: Write>(result: &T, args: &SieveArgs, out: &mut W) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::word::IntoWordStream;
    use crate::error::{ErrorKind, SieveError};
    use clap::Parser;

    fn args(extra: &[&str]) -> SieveArgs {
        let mut argv = vec!["wordsieve", "in.txt"];
        argv.extend_from_slice(extra);
        SieveArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_human_output() {
        let mut out = Vec::new();
        let count = output_words(
            vec!["king", "code"].into_word_stream(),
            "in.txt",
            Vec::new(),
            &args(&[]),
            &mut out,
        )
        .unwrap();

        assert_eq!(count, 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Filtered output:\nking code\n");
    }

    #[test]
    fn test_human_output_quiet() {
        let mut out = Vec::new();
        output_words(
            Vec::<Word>::new().into_word_stream(),
            "in.txt",
            Vec::new(),
            &args(&["-q"]),
            &mut out,
        )
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\n");
    }

    #[test]
    fn test_json_output() {
        let mut out = Vec::new();
        output_words(
            vec!["king"].into_word_stream(),
            "in.txt",
            vec!["min_length".to_string()],
            &args(&["--format", "json"]),
            &mut out,
        )
        .unwrap();

        let report: FilterReport = serde_json::from_slice(&out).unwrap();
        assert_eq!(report.source, "in.txt");
        assert_eq!(report.filters, vec!["min_length"]);
        assert_eq!(report.word_count, 1);
        assert_eq!(report.words, vec!["king"]);
    }

    #[test]
    fn test_stream_error_surfaces() {
        let words: WordStream = Box::new(
            vec![
                Ok(Word::from("one")),
                Err(SieveError::unreadable(
                    "in.txt",
                    std::io::Error::other("read failed"),
                )),
            ]
            .into_iter(),
        );
        let mut out = Vec::new();
        let err = output_words(words, "in.txt", Vec::new(), &args(&[]), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SourceUnreadable);
    }
}
