//! CLI for the foregone fourless split solver.
//!
//! Reads a case count followed by one decimal N per line and prints, for
//! each case, two fourless addends of N whose maximum is as small as
//! possible.
//!
//! # Examples
//!
//! ```bash
//! # Solve cases from a file
//! foregone cases.txt
//!
//! # Solve from stdin, re-checking every answer, as JSON lines
//! printf '2\n4\n909\n' | foregone --verify --format json
//! ```

use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod batch;
mod error;

use batch::{BatchOptions, OutputFormat};
use error::CliError;

#[derive(Parser, Debug)]
#[command(name = "foregone")]
#[command(author, version, about = "Split numbers into two fourless addends", long_about = None)]
struct Cli {
    /// Input file; stdin when omitted
    #[arg(value_name = "FILE", env = "FOREGONE_INPUT")]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain, env = "FOREGONE_FORMAT")]
    format: OutputFormat,

    /// Re-check every answer before printing it
    #[arg(long, env = "FOREGONE_VERIFY")]
    verify: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing; stdout is reserved for answers
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(cases) => {
            tracing::info!(cases, "batch complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            match err.digit_class() {
                Some(class) => tracing::error!(%class, error = %err, "batch rejected"),
                None => tracing::error!(error = %err, "batch failed"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<usize, CliError> {
    let options = BatchOptions {
        format: cli.format,
        verify: cli.verify,
    };
    let writer = BufWriter::new(io::stdout().lock());

    match &cli.input {
        Some(path) => {
            tracing::info!(path = %path.display(), "reading cases");
            let file = File::open(path).map_err(|source| CliError::Open {
                path: path.clone(),
                source,
            })?;
            batch::run(BufReader::new(file), writer, &options)
        }
        None => {
            tracing::info!("reading cases from stdin");
            batch::run(io::stdin().lock(), writer, &options)
        }
    }
}
