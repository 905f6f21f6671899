//! `slots` CLI — compute facility appointment availability from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Full slot grid for one day (bookings and holidays are optional inputs)
//! slots day --facility gate-7 --date 2026-03-16 --rules rules.json \
//!     --bookings bookings.json --holidays holidays.json
//!
//! # Just the first bookable time (prints HH:MM, or "none")
//! slots first --facility gate-7 --date 2026-03-16 --rules rules.json
//!
//! # Live appointments on a fixed 15-minute grid, written to a file
//! slots day --facility gate-7 --date 2026-03-16 --rules rules.json \
//!     --mode live --step 15 -o grid.json
//!
//! # Degrade unreadable upstream files to empty inputs instead of failing.
//! # "No slots" from degraded inputs is not the same as "fully booked" —
//! # the degradation is logged on stderr.
//! slots day ... --missing-data empty
//! ```

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::de::DeserializeOwned;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use slot_engine::types::AppointmentMode;
use slot_engine::{
    compute_day_availability, AvailabilityQuery, AvailabilityRule, BookedAppointment,
    HolidayOverride,
};

#[derive(Parser)]
#[command(
    name = "slots",
    version,
    about = "Facility appointment availability computation"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the full slot grid for one day, as JSON
    Day {
        #[command(flatten)]
        query: QueryArgs,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the first bookable start time (HH:MM), or "none"
    First {
        #[command(flatten)]
        query: QueryArgs,
    },
}

#[derive(Args)]
struct QueryArgs {
    /// Facility whose availability is being computed
    #[arg(long)]
    facility: String,

    /// Target calendar day, facility-local (YYYY-MM-DD)
    #[arg(long)]
    date: String,

    /// Appointment type identifier, carried through to the result
    #[arg(long)]
    appointment_type: Option<String>,

    /// Appointment mode, used for the default duration
    #[arg(long, value_enum, default_value_t = ModeArg::Drop)]
    mode: ModeArg,

    /// Appointment duration in minutes (overrides the mode default)
    #[arg(long)]
    duration: Option<u32>,

    /// Slot spacing in minutes (overrides buffer-derived spacing)
    #[arg(long)]
    step: Option<u32>,

    /// Path to the JSON array of availability rules
    #[arg(long)]
    rules: String,

    /// Path to the JSON array of booked appointments
    #[arg(long)]
    bookings: Option<String>,

    /// Path to the JSON array of holiday overrides
    #[arg(long)]
    holidays: Option<String>,

    /// What to do when an input file cannot be read
    #[arg(long, value_enum, default_value_t = MissingData::Fail)]
    missing_data: MissingData,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Trailer drop (30-minute default)
    Drop,
    /// Live load/unload (60-minute default)
    Live,
}

#[derive(Clone, Copy, PartialEq, ValueEnum)]
enum MissingData {
    /// Treat an unreadable input file as an error
    Fail,
    /// Treat an unreadable input file as an empty list (logged)
    Empty,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Day {
            query,
            output,
            compact,
        } => {
            let day = run_query(&query)?;
            let json = if compact {
                serde_json::to_string(&day)?
            } else {
                serde_json::to_string_pretty(&day)?
            };
            write_output(output.as_deref(), &json)?;
        }
        Commands::First { query } => {
            let day = run_query(&query)?;
            match day.first_available {
                Some(time) => println!("{}", time),
                None => println!("none"),
            }
        }
    }

    Ok(())
}

fn run_query(args: &QueryArgs) -> Result<slot_engine::DayAvailability> {
    let query = build_query(args)?;

    let rules: Vec<AvailabilityRule> =
        load_list(Some(&args.rules), "rules", args.missing_data)?;
    let bookings: Vec<BookedAppointment> =
        load_list(args.bookings.as_deref(), "bookings", args.missing_data)?;
    let holidays: Vec<HolidayOverride> =
        load_list(args.holidays.as_deref(), "holidays", args.missing_data)?;

    compute_day_availability(&query, &rules, &bookings, &holidays)
        .context("Availability computation failed")
}

fn build_query(args: &QueryArgs) -> Result<AvailabilityQuery> {
    let date = NaiveDate::parse_from_str(&args.date, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}': expected YYYY-MM-DD", args.date))?;

    Ok(AvailabilityQuery {
        facility_id: args.facility.clone(),
        appointment_type_id: args.appointment_type.clone(),
        date,
        mode: match args.mode {
            ModeArg::Drop => AppointmentMode::Drop,
            ModeArg::Live => AppointmentMode::Live,
        },
        duration_override: args.duration,
        step_override: args.step,
    })
}

/// Read a JSON array input. A `None` path is an intentionally empty input.
///
/// An unreadable file is an upstream fetch failure: under `--missing-data
/// fail` it aborts, under `--missing-data empty` it degrades to an empty
/// list with a warning. Malformed JSON always fails — garbage is not a fetch
/// failure.
fn load_list<T: DeserializeOwned>(
    path: Option<&str>,
    what: &str,
    policy: MissingData,
) -> Result<Vec<T>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) if policy == MissingData::Empty => {
            tracing::warn!(
                path,
                error = %err,
                "treating unreadable {} as empty; availability may be understated",
                what
            );
            return Ok(Vec::new());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {} file: {}", what, path))
        }
    };
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {} JSON: {}", what, path))
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
