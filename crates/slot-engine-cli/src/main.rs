//! `slots` CLI — compute best meeting slots and prepare submissions from the
//! command line.
//!
//! ## Usage
//!
//! ```sh
//! # Best slot per date for a snapshot (stdin → stdout)
//! cat snapshot.json | slots best
//!
//! # From file to file, dates in calendar order
//! slots best -i snapshot.json -o best.json --sorted
//!
//! # Accept 30-minute windows
//! slots best -i snapshot.json --min-minutes 30
//!
//! # List the dates of a group window
//! slots dates --start 2026-03-16 --end 2026-03-22
//!
//! # Build the replacement records for one user's answers
//! slots submit --group g1 --user alice --start 2026-03-16 --end 2026-03-18 -i answers.json
//! ```
//!
//! Diagnostics go to stderr. Use `-v`/`-vv` or `RUST_LOG` to see them.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use slot_engine::submission::{build_submission, parse_answers};
use slot_engine::{compute_best_slots_with, parse_snapshot, EngineConfig, GroupWindow};
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Best common meeting windows from group availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the best slot for every date in an availability snapshot
    Best {
        /// Input snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Order dates by calendar date instead of first appearance
        #[arg(long)]
        sorted: bool,
        /// Shortest window worth recommending, in minutes
        #[arg(long, default_value_t = EngineConfig::default().min_duration_minutes)]
        min_minutes: u16,
        /// People who must overlap for a partial-consensus window
        #[arg(long, default_value_t = EngineConfig::default().min_overlap_users)]
        min_users: u16,
        /// Print JSON on a single line
        #[arg(long)]
        compact: bool,
    },
    /// List every date of a group window (at most 7 days)
    Dates {
        /// First date, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Last date, YYYY-MM-DD
        #[arg(long)]
        end: String,
    },
    /// Turn one user's answers into the records that replace their submission
    Submit {
        /// Group identifier
        #[arg(long)]
        group: String,
        /// User identifier
        #[arg(long)]
        user: String,
        /// First date of the group window, YYYY-MM-DD
        #[arg(long)]
        start: String,
        /// Last date of the group window, YYYY-MM-DD
        #[arg(long)]
        end: String,
        /// Answers JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Best {
            input,
            output,
            sorted,
            min_minutes,
            min_users,
            compact,
        } => {
            let json = read_input(input.as_deref())?;
            let records = parse_snapshot(&json).context("Failed to parse availability snapshot")?;
            tracing::info!(records = records.len(), "loaded snapshot");

            let config = EngineConfig {
                min_duration_minutes: min_minutes,
                min_overlap_users: min_users,
            };
            let mut best = compute_best_slots_with(&records, &config);
            if sorted {
                best = best.into_sorted();
            }

            let rendered = render_json(&serde_json::to_value(&best)?, compact)?;
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Dates { start, end } => {
            let window = GroupWindow::parse(&start, &end).context("Invalid group window")?;
            let lines: Vec<String> = window.dates().iter().map(|d| d.to_string()).collect();
            println!("{}", lines.join("\n"));
        }
        Commands::Submit {
            group,
            user,
            start,
            end,
            input,
            output,
        } => {
            let window = GroupWindow::parse(&start, &end).context("Invalid group window")?;
            let json = read_input(input.as_deref())?;
            let answers = parse_answers(&json).context("Failed to parse answers")?;
            let records = build_submission(&group, &user, &window, &answers)
                .context("Failed to build submission")?;

            let rendered = render_json(&serde_json::to_value(&records)?, false)?;
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays clean JSON. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .without_time()
        .init();
}

fn render_json(value: &Value, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
