//! `meetfind` CLI — find meeting slots in a day's calendar from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots (stdin → stdout, JSON)
//! cat day.json | meetfind query
//!
//! # Human-readable output, from file to file
//! meetfind query --format text -i day.json -o slots.txt
//!
//! # Report which rule chose the slots
//! meetfind query --explain -i day.json
//!
//! # Show the merged busy ranges for some attendees
//! meetfind busy --attendees alice,bob -i day.json
//! ```
//!
//! The input document looks like:
//!
//! ```json
//! {
//!   "events": [{"title": "Standup", "start": "09:00", "end": "09:30", "attendees": ["alice"]}],
//!   "request": {"duration": 30, "attendees": ["alice"], "optional_attendees": ["bob"]}
//! }
//! ```

mod input;

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use meeting_finder::{busy_ranges, normalize, query_with_outcome, TimeRange};
use tracing_subscriber::EnvFilter;

use crate::input::{clock_range, Document, ExplainedOutput, SlotOutput};

#[derive(Parser)]
#[command(
    name = "meetfind",
    version,
    about = "Find meeting slots in a day's calendar"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overrides RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every slot that can hold the requested meeting
    Query {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Include which rule selected the slots, and log it at info level
        #[arg(long)]
        explain: bool,
    },
    /// Show the merged busy ranges for a group of attendees
    Busy {
        /// Comma-separated attendee names
        #[arg(long, value_delimiter = ',')]
        attendees: Vec<String>,
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `--explain` surfaces the chosen case on stderr too, unless RUST_LOG says otherwise.
    let explain = matches!(cli.command, Commands::Query { explain: true, .. });
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        let default = if explain { "info" } else { "warn" };
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };
    // Logs go to stderr so stdout stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match cli.command {
        Commands::Query {
            input,
            output,
            format,
            explain,
        } => {
            let doc = Document::parse(&read_input(input.as_deref())?)?;
            let events = doc.events()?;
            let request = doc.request()?;

            let outcome = query_with_outcome(&events, &request);
            tracing::info!(case = ?outcome.case, slots = outcome.ranges.len(), "query finished");

            let rendered = match format {
                Format::Json => {
                    let slots = slot_outputs(&outcome.ranges);
                    if explain {
                        serde_json::to_string_pretty(&ExplainedOutput {
                            case: outcome.case,
                            slots,
                        })?
                    } else {
                        serde_json::to_string_pretty(&slots)?
                    }
                }
                Format::Text => {
                    let mut lines = Vec::new();
                    if explain {
                        let case = serde_json::to_value(outcome.case)?;
                        lines.push(format!("# {}", case.as_str().unwrap_or_default()));
                    }
                    lines.extend(outcome.ranges.iter().map(clock_range));
                    lines.join("\n")
                }
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Busy {
            attendees,
            input,
            output,
            format,
        } => {
            let doc = Document::parse(&read_input(input.as_deref())?)?;
            let events = doc.events()?;
            let people: BTreeSet<String> = attendees
                .iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .collect();

            let busy = normalize(busy_ranges(&events, &people));
            tracing::debug!(attendees = people.len(), busy = busy.len(), "merged busy ranges");

            let rendered = match format {
                Format::Json => serde_json::to_string_pretty(&slot_outputs(&busy))?,
                Format::Text => busy.iter().map(clock_range).collect::<Vec<_>>().join("\n"),
            };
            write_output(output.as_deref(), &rendered)?;
        }
    }

    Ok(())
}

fn slot_outputs(ranges: &[TimeRange]) -> Vec<SlotOutput> {
    ranges.iter().map(SlotOutput::from).collect()
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
