//! Slideshow command line tool.
//!
//! Reads a photo list, orders the slides and writes the slideshow listing.
//!
//! ## Configuration
//!
//! Flags fall back to environment variables:
//! - `SLIDESHOW_INPUT`: Photo list path (default: stdin)
//! - `SLIDESHOW_OUTPUT`: Listing path (default: stdout)
//! - `SLIDESHOW_PAIRING`: `first_second` or `last_first` (default: policy value)
//! - `SLIDESHOW_POLICY`: JSON policy file
//! - `RUST_LOG`: Log level filter (default: info)
//! - `LOG_FORMAT`: "json" for structured logs, "pretty" for development (default: pretty)
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin slideshow --features cli -- --input a_example.txt --output a_example.out
//! ```

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use slideshow_kernel::{
    parse_photos, render, render_debug, ConfigError, FormatError, Solver, SolverPolicy,
    VerticalPairing,
};

/// Order a photo collection into an interesting slideshow.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Photo list to read (stdin when omitted)
    #[arg(long, short, env = "SLIDESHOW_INPUT")]
    input: Option<PathBuf>,

    /// Where to write the listing (stdout when omitted)
    #[arg(long, short, env = "SLIDESHOW_OUTPUT")]
    output: Option<PathBuf>,

    /// Vertical pairing strategy
    #[arg(long, env = "SLIDESHOW_PAIRING", value_parser = parse_pairing)]
    pairing: Option<VerticalPairing>,

    /// JSON policy file
    #[arg(long, env = "SLIDESHOW_POLICY")]
    policy_file: Option<PathBuf>,

    /// Order buckets on the current thread only
    #[arg(long)]
    sequential: bool,

    /// Append each slide's tags to its line
    #[arg(long, conflicts_with = "json")]
    debug_output: bool,

    /// Write the deck as JSON
    #[arg(long)]
    json: bool,
}

fn parse_pairing(s: &str) -> Result<VerticalPairing, String> {
    VerticalPairing::from_str(s).ok_or_else(|| format!("unknown pairing {s:?}"))
}

/// Errors surfaced by the binary.
#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("I/O error on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to encode deck: {0}")]
    Json(#[from] serde_json::Error),
}

fn io_error(target: &str) -> impl FnOnce(io::Error) -> CliError + '_ {
    move |source| CliError::Io {
        target: target.to_string(),
        source,
    }
}

/// Initialize the tracing subscriber with JSON or pretty format, on stderr.
fn init_tracing() {
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    if log_format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_current_span(true)
                    .flatten_event(true)
                    .with_writer(io::stderr),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(io::stderr))
            .init();
    }
}

fn build_policy(cli: &Cli) -> Result<SolverPolicy, CliError> {
    let mut policy = match &cli.policy_file {
        Some(path) => SolverPolicy::from_json_file(path)?,
        None => SolverPolicy::default(),
    };
    if let Some(pairing) = cli.pairing {
        policy.vertical_pairing = pairing;
    }
    if cli.sequential {
        policy.parallel = false;
    }
    Ok(policy)
}

fn read_input(path: Option<&PathBuf>) -> Result<String, CliError> {
    match path {
        Some(path) => {
            let target = path.display().to_string();
            std::fs::read_to_string(path).map_err(io_error(&target))
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(io_error("stdin"))?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&PathBuf>, body: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            let target = path.display().to_string();
            std::fs::write(path, body).map_err(io_error(&target))
        }
        None => io::stdout().write_all(body.as_bytes()).map_err(io_error("stdout")),
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let policy = build_policy(&cli)?;
    info!(
        policy = policy.policy_id(),
        params_hash = %policy.params_hash(),
        pairing = %policy.vertical_pairing,
        parallel = policy.parallel,
        "starting slideshow"
    );

    let start = Instant::now();
    let photos = parse_photos(&read_input(cli.input.as_ref())?)?;
    let deck = Solver::new(policy).solve(&photos);

    let body = if cli.json {
        serde_json::to_string_pretty(&deck)?
    } else if cli.debug_output {
        render_debug(&deck.slides)
    } else {
        render(&deck.slides)
    };
    write_output(cli.output.as_ref(), &body)?;

    info!(
        photos = photos.len(),
        slides = deck.len(),
        score = deck.score,
        fingerprint = %deck.fingerprint,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "slideshow written"
    );
    Ok(())
}

fn main() {
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        tracing::error!(error = %err, "slideshow failed");
        std::process::exit(1);
    }
}
