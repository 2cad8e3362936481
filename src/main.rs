//! IBTAC lexer CLI
//!
//! Scans one or more source files and prints their tokens as a table or as
//! JSON. Each file is scanned independently: a lexical error in one file is
//! reported and the remaining files are still scanned.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ibtac::output::{render_json, render_table};
use ibtac::{scan, Diagnostic, OutputFormat, Token, VERSION};

/// Tokenize IBTAC source files
#[derive(Parser, Debug)]
#[command(name = "ibtac")]
#[command(version = VERSION)]
#[command(about = "Lexical analyzer for the IBTAC language", long_about = None)]
struct Cli {
    /// Source files to tokenize
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, env = "IBTAC_FORMAT")]
    format: OutputFormat,

    /// Shorthand for `--format json`
    #[arg(long)]
    json: bool,

    /// Disable color output
    #[arg(long, env = "IBTAC_NO_COLOR")]
    no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, env = "IBTAC_VERBOSE")]
    verbose: bool,
}

impl Cli {
    fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.no_color);

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Initialize the logging system on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `--verbose` selects `debug`.
fn init_logging(verbose: bool, no_color: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry().with(filter).with(layer).init();
}

/// Outcome of scanning one file
enum FileScan {
    Tokens(Vec<Token>),
    Failed,
}

/// Scan every input file. Returns `Ok(false)` when any file failed.
fn run(cli: &Cli) -> Result<bool> {
    let format = cli.output_format();
    let multiple = cli.files.len() > 1;
    let mut all_ok = true;
    let mut json_records = serde_json::Map::new();

    for path in &cli.files {
        let tokens = match scan_file(path) {
            FileScan::Tokens(tokens) => tokens,
            FileScan::Failed => {
                all_ok = false;
                continue;
            }
        };

        match format {
            OutputFormat::Table => {
                if multiple {
                    println!("==> {} <==", path.display());
                }
                print!("{}", render_table(&tokens));
            }
            OutputFormat::Json if multiple => {
                let value = serde_json::to_value(&tokens)
                    .with_context(|| format!("failed to serialize tokens of '{}'", path.display()))?;
                json_records.insert(path.display().to_string(), value);
            }
            OutputFormat::Json => {
                let json = render_json(&tokens)
                    .with_context(|| format!("failed to serialize tokens of '{}'", path.display()))?;
                println!("{}", json);
            }
        }
    }

    if format == OutputFormat::Json && multiple {
        let json = serde_json::to_string_pretty(&json_records).context("failed to serialize tokens")?;
        println!("{}", json);
    }

    Ok(all_ok)
}

/// Read and scan one file, reporting any failure on stderr
fn scan_file(path: &Path) -> FileScan {
    let name = path.display().to_string();

    let source = match fs::read_to_string(path) {
        Ok(source) => source,
        Err(e) => {
            warn!(file = %name, error = %e, "unreadable input");
            eprintln!("error: failed to read file '{}': {}", name, e);
            return FileScan::Failed;
        }
    };

    info!(file = %name, "scanning");
    match scan(&source) {
        Ok(tokens) => FileScan::Tokens(tokens),
        Err(e) => {
            let diagnostic = Diagnostic::new(&e).with_source(&source).with_filename(&name);
            eprint!("{}", diagnostic);
            FileScan::Failed
        }
    }
}
