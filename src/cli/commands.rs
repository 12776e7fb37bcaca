//! Command implementations for the flight planner CLI
//!
//! This module contains the main command execution logic: logging setup,
//! pipeline orchestration for the batch `plan` command, and the interactive
//! `book` command.

use crate::cli::args::{Args, BookArgs, Commands, PlanArgs};
use crate::cli::input;
use crate::registry::ReferenceIndex;
use crate::report::{self, ReportPaths};
use crate::stats::PlanningStats;
use crate::{loader, normalizer, validator};
use crate::{Error, Result};
use std::fs;
use std::time::Instant;
use tracing::{debug, info};

/// Main command runner for the flight planner
///
/// Dispatches to the requested subcommand. The caller guarantees a command
/// is present (no-command invocations print the overview in `main`).
pub fn run(args: Args) -> Result<PlanningStats> {
    match args.command {
        Some(Commands::Plan(plan_args)) => run_plan(plan_args),
        Some(Commands::Book(book_args)) => {
            run_book(book_args)?;
            Ok(PlanningStats::new())
        }
        None => Err(Error::configuration("No command specified")),
    }
}

/// Run the batch planning pipeline
///
/// Loads the reference index once, then streams each booking through
/// normalize → validate → calculate, and writes the two categorized
/// reports.
fn run_plan(args: PlanArgs) -> Result<PlanningStats> {
    let start_time = Instant::now();

    setup_logging(args.get_log_level(), args.quiet);

    info!("Starting flight planner");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    if !args.output_dir.exists() {
        fs::create_dir_all(&args.output_dir).map_err(|e| {
            Error::io(
                format!("Failed to create output directory {}", args.output_dir.display()),
                e,
            )
        })?;
    }

    let (index, load_stats) =
        ReferenceIndex::load_from_files(&args.airports_path, &args.aircraft_path)?;
    debug!(
        "Reference index ready ({} duplicates ignored)",
        load_stats.duplicates_ignored
    );

    let booking_records = loader::read_records(&args.flights_path)?;
    info!(
        "Evaluating {} bookings from {}",
        booking_records.len(),
        args.flights_path.display()
    );

    let mut stats = PlanningStats::new();
    stats.bookings_read = booking_records.len();

    let evaluated: Vec<_> = booking_records
        .iter()
        .map(|record| validator::evaluate(normalizer::normalize(record), &index))
        .collect();

    for result in &evaluated {
        match result {
            crate::models::EvaluatedBooking::Accepted { financials, .. } => {
                stats.record_accepted(financials)
            }
            crate::models::EvaluatedBooking::Rejected { booking, reason } => {
                debug!(
                    "Rejected {} -> {} with {}: {}",
                    booking.origin, booking.destination, booking.aircraft_type, reason
                );
                stats.record_rejected();
            }
        }
    }

    let paths = ReportPaths::in_dir(&args.output_dir);
    report::write_reports(&evaluated, &paths)?;

    stats.processing_time = start_time.elapsed();
    info!("{}", stats.summary());

    if !args.quiet {
        println!("{}", stats.summary());
        println!(
            "Reports written to {} and {}",
            paths.accepted.display(),
            paths.rejected.display()
        );
    }

    Ok(stats)
}

/// Run the interactive single-booking command
///
/// Prompts for each booking field on stdin, evaluates the booking against
/// the reference index, and prints the report line that the batch pipeline
/// would have produced.
fn run_book(args: BookArgs) -> Result<()> {
    setup_logging(args.get_log_level(), false);

    args.validate()?;

    let (index, _) = ReferenceIndex::load_from_files(&args.airports_path, &args.aircraft_path)?;

    let booking = input::prompt_booking()?;
    let evaluated = validator::evaluate(booking, &index);

    println!();
    match &evaluated {
        crate::models::EvaluatedBooking::Accepted {
            booking,
            financials,
        } => {
            println!("{}", report::accepted_line(booking, financials));
        }
        crate::models::EvaluatedBooking::Rejected { booking, reason } => {
            println!("{}", report::rejected_line(booking, reason));
        }
    }

    Ok(())
}

/// Set up structured logging based on CLI verbosity
fn setup_logging(log_level: &str, quiet: bool) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("flight_planner={}", log_level)));

    // try_init: tests may set up logging more than once
    if quiet {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init();
    } else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init();
    }

    debug!("Logging initialized at level: {}", log_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const AIRPORTS_CSV: &str = "\
code,full name,distanceMAN,distanceLGW
JFK,John F Kennedy International,5376,5583
MAD,Madrid-Barajas,1435,1216
";

    const AEROPLANES_CSV: &str = "\
type,runningcostperseatper100km,maxflightrange(km),economyseats,businessseats,firstclassseats
Medium narrow body,£8,2650,160,12,0
Large narrow body,£7,5600,180,20,4
";

    const FLIGHTS_CSV: &str = "\
UK airport,Overseas airport,Type of aircraft,Number of economy seats booked,Number of business seats booked,Number of first class seats booked,Price of a economy class seat,Price of a business class seat,Price of a first class seat
MAN,JFK,Large narrow body,150,12,2,399,999,1899
MAN,JFK,Medium narrow body,150,12,0,399,999,1899
LGW,XXX,Large narrow body,10,0,0,399,999,1899
";

    fn plan_args(dir: &TempDir) -> PlanArgs {
        let airports = dir.path().join("airports.csv");
        let aircraft = dir.path().join("aeroplanes.csv");
        let flights = dir.path().join("flight_data.csv");
        fs::write(&airports, AIRPORTS_CSV).unwrap();
        fs::write(&aircraft, AEROPLANES_CSV).unwrap();
        fs::write(&flights, FLIGHTS_CSV).unwrap();

        PlanArgs {
            airports_path: airports,
            aircraft_path: aircraft,
            flights_path: flights,
            output_dir: dir.path().join("reports"),
            verbose: 0,
            quiet: true,
        }
    }

    #[test]
    fn test_run_plan_writes_both_reports() {
        let dir = TempDir::new().unwrap();
        let args = plan_args(&dir);
        let output_dir = args.output_dir.clone();

        let stats = run_plan(args).unwrap();

        assert_eq!(stats.bookings_read, 3);
        assert_eq!(stats.accepted, 1);
        assert_eq!(stats.rejected, 2);

        let accepted =
            fs::read_to_string(output_dir.join("valid_flight_results.txt")).unwrap();
        let rejected =
            fs::read_to_string(output_dir.join("invalid_flight_results.txt")).unwrap();

        assert!(accepted.starts_with("Flight from MAN to JFK with Large narrow body:"));
        assert!(accepted.contains("Income: £75636.00, Cost: £61716.48, Profit: £13919.52"));
        assert!(rejected.contains(
            "Error in flight from MAN to JFK with Medium narrow body: \
             Aircraft Medium narrow body doesn't have the range to fly to JFK"
        ));
        assert!(rejected
            .contains("Error in flight from LGW to XXX with Large narrow body: Invalid airport code: XXX"));
    }

    #[test]
    fn test_run_plan_creates_output_directory() {
        let dir = TempDir::new().unwrap();
        let mut args = plan_args(&dir);
        args.output_dir = dir.path().join("nested").join("reports");
        let output_dir = args.output_dir.clone();

        run_plan(args).unwrap();
        assert!(output_dir.join("valid_flight_results.txt").exists());
    }

    #[test]
    fn test_run_plan_missing_flights_file() {
        let dir = TempDir::new().unwrap();
        let mut args = plan_args(&dir);
        args.flights_path = dir.path().join("nonexistent.csv");

        assert!(matches!(
            run_plan(args).unwrap_err(),
            Error::Configuration { .. }
        ));
    }
}
