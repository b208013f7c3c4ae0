//! Command line argument parsing for the wordsieve CLI using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{FilterConfig, SieveConfig, TokenizerConfig};

/// wordsieve - Stream the words of a text file through a chain of filters
#[derive(Parser, Debug, Clone)]
#[command(name = "wordsieve")]
#[command(about = "Stream the words of a text file through a chain of filters")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SieveArgs {
    /// Text file to read
    #[arg(value_name = "FILE", default_value = "samples/input.txt")]
    pub file: PathBuf,

    /// JSON configuration file (replaces the filter flags below)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDSIEVE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Drop words shorter than this many characters
    #[arg(
        long,
        default_value_t = 3,
        allow_negative_numbers = true,
        conflicts_with = "config"
    )]
    pub min_length: i64,

    /// Drop words containing this letter (case-insensitive)
    #[arg(long, default_value_t = 't', conflicts_with = "config")]
    pub letter: char,

    /// Do not drop words with a vowel in the middle
    #[arg(long, conflicts_with = "config")]
    pub no_vowel_middle: bool,

    /// Disable all filters and print every word
    #[arg(long, conflicts_with = "config")]
    pub no_filters: bool,

    /// Split words longer than this many characters
    #[arg(long, value_name = "CHARS")]
    pub max_word_length: Option<usize>,

    /// Bytes read from the file per chunk
    #[arg(long, value_name = "BYTES")]
    pub chunk_size: Option<usize>,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl SieveArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Filters described by the command line flags.
    pub fn filter_configs(&self) -> Vec<FilterConfig> {
        if self.no_filters {
            return Vec::new();
        }

        let mut filters = Vec::with_capacity(3);
        if !self.no_vowel_middle {
            filters.push(FilterConfig::VowelMiddle);
        }
        filters.push(FilterConfig::MinLength {
            min_length: self.min_length,
        });
        filters.push(FilterConfig::ContainsLetter {
            letter: self.letter,
        });
        filters
    }

    /// Apply the tokenizer flags on top of `tokenizer`.
    pub fn tokenizer_config(&self, mut tokenizer: TokenizerConfig) -> TokenizerConfig {
        if let Some(max_word_length) = self.max_word_length {
            tokenizer.max_word_length = max_word_length;
        }
        if let Some(chunk_size) = self.chunk_size {
            tokenizer.chunk_size = chunk_size;
        }
        tokenizer
    }

    /// Configuration described by the flags alone.
    pub fn flag_config(&self) -> SieveConfig {
        SieveConfig {
            tokenizer: self.tokenizer_config(TokenizerConfig::default()),
            filters: Some(self.filter_configs()),
        }
    }
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = SieveArgs::try_parse_from(["wordsieve"]).unwrap();
        assert_eq!(args.file, PathBuf::from("samples/input.txt"));
        assert_eq!(args.output_format, OutputFormat::Human);
        assert_eq!(args.flag_config(), SieveConfig::with_filters(SieveConfig::default_filters()));
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SieveArgs::try_parse_from(["wordsieve", "in.txt"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SieveArgs::try_parse_from(["wordsieve", "-vv", "in.txt"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SieveArgs::try_parse_from(["wordsieve", "--quiet", "-v", "in.txt"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_filter_flags() {
        let args = SieveArgs::try_parse_from([
            "wordsieve",
            "in.txt",
            "--min-length",
            "5",
            "--letter",
            "x",
            "--no-vowel-middle",
        ])
        .unwrap();

        assert_eq!(
            args.filter_configs(),
            vec![
                FilterConfig::MinLength { min_length: 5 },
                FilterConfig::ContainsLetter { letter: 'x' },
            ]
        );
    }

    #[test]
    fn test_negative_min_length_parses() {
        let args =
            SieveArgs::try_parse_from(["wordsieve", "in.txt", "--min-length", "-1"]).unwrap();
        assert_eq!(args.min_length, -1);
    }

    #[test]
    fn test_no_filters() {
        let args = SieveArgs::try_parse_from(["wordsieve", "in.txt", "--no-filters"]).unwrap();
        assert!(args.filter_configs().is_empty());
    }

    #[test]
    fn test_tokenizer_flags() {
        let args = SieveArgs::try_parse_from([
            "wordsieve",
            "in.txt",
            "--max-word-length",
            "10",
            "--chunk-size",
            "64",
        ])
        .unwrap();
        let tokenizer = args.tokenizer_config(TokenizerConfig::default());
        assert_eq!(tokenizer.max_word_length, 10);
        assert_eq!(tokenizer.chunk_size, 64);
    }

    #[test]
    fn test_filter_flags_conflict_with_config() {
        for flags in [
            &["--min-length", "4"][..],
            &["--letter", "x"][..],
            &["--no-vowel-middle"][..],
            &["--no-filters"][..],
        ] {
            let mut argv = vec!["wordsieve", "in.txt", "--config", "sieve.json"];
            argv.extend_from_slice(flags);
            let err = SieveArgs::try_parse_from(argv).unwrap_err();
            assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
        }

        // Defaults alone do not conflict.
        let args =
            SieveArgs::try_parse_from(["wordsieve", "in.txt", "--config", "sieve.json"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("sieve.json")));
    }

    #[test]
    fn test_output_format() {
        let args = SieveArgs::try_parse_from(["wordsieve", "--format", "json", "in.txt"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }
}
