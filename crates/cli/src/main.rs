//! RV32I subset decoder CLI.
//!
//! This binary is a thin driver around `rv32dec-core`. It performs:
//! 1. **Input:** Hex words from arguments, a word-list file, the built-in sample list, or stdin.
//! 2. **Output:** One rendered line (or JSON object) per word, optionally followed by a tally.
//! 3. **Exit status:** 0 on success, 1 on input/config errors, 2 in strict mode when any word is invalid.

use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::{fs, process};

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::SubscriberInitExt;

use rv32dec_core::common::error::{ConfigError, ParseWordError};
use rv32dec_core::config::{Config, OutputFormat};
use rv32dec_core::isa::word::{SAMPLE_WORDS, parse_word, tokens};
use rv32dec_core::listing::Listing;

/// Exit status when strict mode rejects a listing.
const EXIT_INVALID_WORDS: i32 = 2;

/// Exit status for input and configuration errors.
const EXIT_FAILURE: i32 = 1;

/// Log filter used before the configuration is loaded.
const FALLBACK_LOG_LEVEL: &str = "warn";

#[derive(Parser, Debug)]
#[command(
    name = "rv32dec",
    author,
    version,
    about = "Decode RV32I subset machine-code words",
    long_about = "Decode 32-bit RISC-V words (OP-IMM, OP, MUL*, LW/SW with base x0, NOP) into text.\n\nWith no words, --file or --sample, words are read from stdin.\n\nExamples:\n  rv32dec 02802603 0x06402423\n  rv32dec --sample --stats\n  rv32dec -f words.txt --format json"
)]
struct Cli {
    /// Hex instruction words (e.g. 02802603 or 0x06402423).
    #[arg(value_parser = parse_word)]
    words: Vec<u32>,

    /// File of whitespace/comma separated hex words; `#` starts a comment.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Decode the built-in sample words.
    #[arg(long)]
    sample: bool,

    /// Output encoding.
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Prefix each text line with the raw word.
    #[arg(long)]
    show_word: bool,

    /// Print a summary tally after the listing.
    #[arg(long)]
    stats: bool,

    /// Fail on malformed words in files and exit with status 2 on invalid instructions.
    #[arg(long)]
    strict: bool,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => Self::Text,
            Format::Json => Self::Json,
        }
    }
}

#[derive(Error, Debug)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("token {index}: {source}")]
    Word {
        index: usize,
        #[source]
        source: ParseWordError,
    },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();

    // Provisional subscriber until the configured level is known.
    let config = tracing::subscriber::with_default(
        subscriber(env_filter(FALLBACK_LOG_LEVEL), io::stderr),
        || resolve_config(&cli),
    );
    let config = match config {
        Ok(config) => config,
        Err(e) => process::exit(exit_status(Err(e))),
    };
    subscriber(env_filter(&config.log_level), io::stderr).init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    process::exit(exit_status(run(&cli, &config, &mut out)));
}

/// Maps a run result to the process exit status, reporting errors on stderr.
fn exit_status(result: Result<i32, CliError>) -> i32 {
    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "decode run failed");
            eprintln!("Error: {e}");
            EXIT_FAILURE
        }
    }
}

/// Filter from `RUST_LOG`, falling back to `default_level`.
fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LOG_LEVEL))
}

fn subscriber<W>(filter: EnvFilter, writer: W) -> impl tracing::Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .finish()
}

/// Loads the config file (if any) and applies command-line overrides.
fn resolve_config(cli: &Cli) -> Result<Config, CliError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }
    config.output.show_word |= cli.show_word;
    config.output.stats |= cli.stats;
    config.strict |= cli.strict;
    Ok(config)
}

/// Gathers words in order: sample list, arguments, then the file.
///
/// Stdin is read only when none of those were given.
fn collect_words(cli: &Cli, strict: bool, stdin: impl Read) -> Result<Vec<u32>, CliError> {
    let mut words = Vec::new();
    if cli.sample {
        words.extend_from_slice(&SAMPLE_WORDS);
    }
    words.extend_from_slice(&cli.words);

    if let Some(path) = &cli.file {
        let source = read_source(path)?;
        words.extend(parse_source(&source, strict)?);
    } else if words.is_empty() {
        let mut source = String::new();
        let _ = io::BufReader::new(stdin).read_to_string(&mut source)?;
        words.extend(parse_source(&source, strict)?);
    }
    Ok(words)
}

fn read_source(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses a word list. Malformed tokens abort in strict mode and are skipped
/// with a warning otherwise.
fn parse_source(source: &str, strict: bool) -> Result<Vec<u32>, CliError> {
    let mut words = Vec::new();
    for (index, token) in tokens(source).enumerate() {
        match parse_word(token) {
            Ok(word) => words.push(word),
            Err(source) if strict => return Err(CliError::Word { index, source }),
            Err(e) => tracing::warn!(index, token, error = %e, "skipping malformed word"),
        }
    }
    Ok(words)
}

/// Decodes the collected words and writes the listing. Returns the exit status.
fn run(cli: &Cli, config: &Config, out: &mut impl Write) -> Result<i32, CliError> {
    let words = collect_words(cli, config.strict, io::stdin())?;
    write_listing(&words, config, out)
}

fn write_listing(words: &[u32], config: &Config, out: &mut impl Write) -> Result<i32, CliError> {
    let listing = Listing::decode_all(words.iter().copied());
    tracing::debug!(words = listing.len(), "decoded listing");

    match config.output.format {
        OutputFormat::Text => {
            for line in listing.render_lines(config.output.show_word) {
                writeln!(out, "{line}")?;
            }
        }
        OutputFormat::Json => {
            for line in listing.to_json_lines()? {
                writeln!(out, "{line}")?;
            }
        }
    }

    let stats = listing.stats();
    if config.output.stats {
        match config.output.format {
            OutputFormat::Text => write!(out, "{stats}")?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&stats)?)?,
        }
    }

    out.flush()?;

    if config.strict && stats.has_invalid() {
        tracing::warn!(invalid = stats.invalid, "strict mode: invalid instructions");
        return Ok(EXIT_INVALID_WORDS);
    }
    Ok(0)
}
