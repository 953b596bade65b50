//! `oncall` CLI — compute an on-call schedule from a rotation plan and overrides.
//!
//! ## Usage
//!
//! ```sh
//! # Print the schedule for two weeks as JSON
//! oncall --schedule plan.json --overrides overrides.json \
//!     --from 2025-11-07T17:00:00Z --until 2025-11-21T17:00:00Z
//!
//! # Write the schedule to a file, logging as JSON
//! oncall --schedule plan.json --overrides overrides.json \
//!     --from 2025-11-07T17:00:00Z --until 2025-11-21T17:00:00Z \
//!     -o schedule.json --log-format json
//! ```
//!
//! Logs go to stderr and honour `RUST_LOG` (default `info`).

use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, ValueEnum};
use oncall_engine::input::parse_timestamp;
use oncall_engine::{build_schedule, parse_document, DocumentKind, ParsedDocument};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "oncall",
    version,
    about = "Compute an on-call schedule from a rotation plan and overrides"
)]
struct Cli {
    /// Rotation plan JSON file ({"users": [...], "handover_interval_days": N})
    #[arg(long)]
    schedule: String,

    /// Overrides JSON file ([{"user", "start_at", "end_at"}, ...])
    #[arg(long)]
    overrides: String,

    /// Window start (RFC3339)
    #[arg(long, value_parser = parse_timestamp)]
    from: DateTime<Utc>,

    /// Window end, exclusive (RFC3339)
    #[arg(long, value_parser = parse_timestamp)]
    until: DateTime<Utc>,

    /// Output file (writes to stdout if omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    // Errors are reported through the subscriber only, so JSON logs stay JSON.
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let message = format!("{err:#}");
            tracing::error!(error = %message, "failed to compute schedule");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    tracing::info!(
        schedule = %cli.schedule,
        overrides = %cli.overrides,
        from = %cli.from.to_rfc3339(),
        until = %cli.until.to_rfc3339(),
        "computing schedule"
    );

    let ParsedDocument::Rotation(plan) = load_document(&cli.schedule, "schedule")? else {
        bail!("{} does not hold a rotation plan", cli.schedule);
    };
    let ParsedDocument::Overrides(overrides) = load_document(&cli.overrides, "overrides")? else {
        bail!("{} does not hold overrides", cli.overrides);
    };

    tracing::debug!(
        users = plan.participants.len(),
        overrides = overrides.len(),
        "inputs parsed"
    );

    let schedule = build_schedule(&plan, &overrides, cli.from, cli.until)
        .context("Failed to compute schedule")?;

    let compact = serde_json::to_string(&schedule)?;
    tracing::info!(
        intervals = schedule.len(),
        final_schedule = %compact,
        "final schedule"
    );

    let mut pretty = serde_json::to_string_pretty(&schedule)?;
    pretty.push('\n');
    write_output(cli.output.as_deref(), &pretty)
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Text => builder.with_target(false).init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Read `path` and decode it as the document named by `field`, the flag it came from.
fn load_document(path: &str, field: &str) -> Result<ParsedDocument> {
    let kind: DocumentKind = field.parse()?;
    let bytes = read_input(path)?;
    parse_document(&bytes, kind).with_context(|| format!("Failed to parse {} file", kind))
}

fn read_input(path: &str) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
            tracing::info!(path, "schedule written");
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
