//! `slots` CLI -- query a worker's free and busy time from a schedule document.
//!
//! ## Usage
//!
//! ```sh
//! # Busy and free intervals for a date (document on stdin)
//! curl -s https://example.test/schedule | slots free --date 2024-10-10
//!
//! # Read the document from a file
//! slots busy --date 2024-10-10 -i schedule.json
//!
//! # Is 10:00-11:30 free?
//! slots available --date 2024-10-10 --start 10:00 --end 11:30 -i schedule.json
//!
//! # First 90-minute slot, as JSON
//! slots --format json find --date 2024-10-10 --duration 90 -i schedule.json
//!
//! # Dates in the document
//! slots dates -i schedule.json
//! ```
//!
//! The input path and output format can also come from
//! `~/.config/slots/config.toml`, `--config <file>`, or `SLOTS_SCHEDULE_PATH` /
//! `SLOTS_FORMAT`.

mod config;

use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use slot_engine::{parse_date, ClockTime, DaySchedule, Interval, ScheduleResponse};
use tracing_subscriber::EnvFilter;

use config::{Config, OutputFormat};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Query free and busy time in a day's schedule"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format (overrides the configured one)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List booked intervals for a date
    Busy {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Schedule document (reads from stdin if omitted and not configured)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List free intervals within the working window for a date
    Free {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Schedule document (reads from stdin if omitted and not configured)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Check whether a range fits inside a single free interval
    Available {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Range start as HH:MM
        #[arg(long)]
        start: String,
        /// Range end as HH:MM (exclusive)
        #[arg(long)]
        end: String,
        /// Schedule document (reads from stdin if omitted and not configured)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Find the earliest free slot of a given length
    Find {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Slot length in minutes
        #[arg(long, allow_negative_numbers = true)]
        duration: i64,
        /// Schedule document (reads from stdin if omitted and not configured)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List the dates in the schedule document
    Dates {
        /// Schedule document (reads from stdin if omitted and not configured)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Logs go to stderr so stdout stays parseable.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    let format = cli.format.unwrap_or(config.format);

    match cli.command {
        Commands::Busy { date, input } => {
            let day = load_day(input.as_deref(), &config, &date)?;
            print_intervals(day.busy_slots(), format)?;
        }
        Commands::Free { date, input } => {
            let day = load_day(input.as_deref(), &config, &date)?;
            print_intervals(day.free_slots(), format)?;
        }
        Commands::Available {
            date,
            start,
            end,
            input,
        } => {
            let start = ClockTime::parse(&start).context("Invalid --start")?;
            let end = ClockTime::parse(&end).context("Invalid --end")?;
            let day = load_day(input.as_deref(), &config, &date)?;
            let available = day
                .is_available(start, end)
                .context("Failed to check availability")?;
            match format {
                OutputFormat::Text if available => println!("available"),
                OutputFormat::Text => println!("unavailable"),
                OutputFormat::Json => println!("{}", available),
            }
        }
        Commands::Find {
            date,
            duration,
            input,
        } => {
            let day = load_day(input.as_deref(), &config, &date)?;
            let slot = day
                .find_slot_for_duration(duration)
                .context("Failed to search for a slot")?;
            match (format, slot) {
                (OutputFormat::Text, Some(slot)) => println!("{}", slot),
                (OutputFormat::Text, None) => {
                    println!("no free slot of {} minutes on {}", duration, date)
                }
                (OutputFormat::Json, slot) => println!("{}", serde_json::to_string_pretty(&slot)?),
            }
        }
        Commands::Dates { input } => {
            let response = load_response(input.as_deref(), &config)?;
            let dates: Vec<String> = response.dates()?.iter().map(|d| d.to_string()).collect();
            match format {
                OutputFormat::Text => {
                    for date in dates {
                        println!("{}", date);
                    }
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&dates)?),
            }
        }
    }

    Ok(())
}

/// Read and validate the schedule document, then build the schedule for `date`.
fn load_day(input: Option<&Path>, config: &Config, date: &str) -> Result<DaySchedule> {
    let date = parse_date(date)?;
    let response = load_response(input, config)?;
    DaySchedule::from_provider(&response, date)
        .with_context(|| format!("Failed to build schedule for {}", date))
}

fn load_response(input: Option<&Path>, config: &Config) -> Result<ScheduleResponse> {
    let path = input.or(config.schedule_path.as_deref());
    let text = read_input(path)?;
    ScheduleResponse::from_json(&text).context("Failed to parse schedule document")
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_intervals(slots: &[Interval], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for slot in slots {
                println!("{}", slot);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(slots)?),
    }
    Ok(())
}
