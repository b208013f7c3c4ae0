//! Command implementation for the wordsieve CLI.

use std::io::Write;

use anyhow::Context;
use log::{debug, info};

use crate::analysis::sieve::Sieve;
use crate::cli::args::SieveArgs;
use crate::cli::output::output_words;
use crate::config::SieveConfig;
use crate::error::{ErrorKind, SieveError};

/// Resolve the configuration from a config file or from the flags.
pub fn resolve_config(args: &SieveArgs) -> crate::error::Result<SieveConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            let mut config = SieveConfig::from_file(path)?;
            config.tokenizer = args.tokenizer_config(config.tokenizer);
            Ok(config)
        }
        None => Ok(args.flag_config()),
    }
}

/// Execute the CLI, writing the result to `out`.
pub fn execute_command<W: Write>(args: &SieveArgs, out: &mut W) -> anyhow::Result<()> {
    let config = resolve_config(args).context("failed to load configuration")?;
    let sieve = Sieve::from_config(&config).context("invalid configuration")?;
    debug!("Built {sieve:?}");

    let words = sieve
        .sift_path(&args.file)
        .with_context(|| format!("cannot read words from {}", args.file.display()))?;

    let filters = sieve
        .pipeline()
        .filters()
        .iter()
        .map(|f| f.name().to_string())
        .collect();

    let count = output_words(
        words,
        &args.file.to_string_lossy(),
        filters,
        args,
        out,
    )
    .with_context(|| format!("failed while filtering {}", args.file.display()))?;

    info!("{count} words survived filtering");
    Ok(())
}

/// Process exit code for an error returned by [`execute_command`].
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<SieveError>().map(SieveError::kind) {
        Some(ErrorKind::InvalidSourceIdentifier) | Some(ErrorKind::InvalidConfiguration) => 2,
        Some(ErrorKind::SourceNotFound) => 3,
        Some(ErrorKind::SourceUnreadable) => 4,
        _ => 1,
    }
}
