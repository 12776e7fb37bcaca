//! Command-line argument definitions for the flight planner
//!
//! This module defines the complete CLI interface using the clap derive
//! API.

use crate::constants::{DEFAULT_AIRCRAFT_FILE, DEFAULT_AIRPORTS_FILE, DEFAULT_FLIGHTS_FILE};
use crate::{Error, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for the flight planner
///
/// Evaluates flight bookings against airport and aircraft reference data,
/// computing profitability for flyable bookings and a rejection reason for
/// the rest.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "flight-planner",
    version,
    about = "Evaluate route and aircraft profitability of flight bookings",
    long_about = "Reads airports, aircraft types, and flight bookings from CSV files, \
                  checks each booking against range and cabin-capacity rules, computes \
                  income, cost, and profit for flyable bookings, and writes accepted \
                  and rejected flights to two categorized text reports."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands for the flight planner
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Evaluate a bookings file and write the two reports (main command)
    Plan(PlanArgs),
    /// Interactively evaluate a single ad-hoc booking
    Book(BookArgs),
}

/// Arguments for the plan command (batch report generation)
#[derive(Debug, Clone, Parser)]
pub struct PlanArgs {
    /// Path to the airports reference CSV
    #[arg(
        long = "airports",
        value_name = "FILE",
        default_value = DEFAULT_AIRPORTS_FILE,
        help = "Path to the airports reference CSV"
    )]
    pub airports_path: PathBuf,

    /// Path to the aircraft-type reference CSV
    #[arg(
        long = "aircraft",
        value_name = "FILE",
        default_value = DEFAULT_AIRCRAFT_FILE,
        help = "Path to the aircraft-type reference CSV"
    )]
    pub aircraft_path: PathBuf,

    /// Path to the flight bookings CSV
    #[arg(
        short = 'f',
        long = "flights",
        value_name = "FILE",
        default_value = DEFAULT_FLIGHTS_FILE,
        help = "Path to the flight bookings CSV"
    )]
    pub flights_path: PathBuf,

    /// Directory for the generated report files
    ///
    /// Will be created if it doesn't exist. The accepted and rejected
    /// reports are written as valid_flight_results.txt and
    /// invalid_flight_results.txt inside it.
    #[arg(
        short = 'o',
        long = "output-dir",
        value_name = "DIR",
        default_value = ".",
        help = "Directory for the generated report files"
    )]
    pub output_dir: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the book command (interactive single booking)
#[derive(Debug, Clone, Parser)]
pub struct BookArgs {
    /// Path to the airports reference CSV
    #[arg(
        long = "airports",
        value_name = "FILE",
        default_value = DEFAULT_AIRPORTS_FILE,
        help = "Path to the airports reference CSV"
    )]
    pub airports_path: PathBuf,

    /// Path to the aircraft-type reference CSV
    #[arg(
        long = "aircraft",
        value_name = "FILE",
        default_value = DEFAULT_AIRCRAFT_FILE,
        help = "Path to the aircraft-type reference CSV"
    )]
    pub aircraft_path: PathBuf,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,
}

impl PlanArgs {
    /// Validate the plan command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("airports", &self.airports_path),
            ("aircraft", &self.aircraft_path),
            ("flights", &self.flights_path),
        ] {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "{} file does not exist: {}",
                    name,
                    path.display()
                )));
            }
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(Error::configuration(format!(
                "Output path is not a directory: {}",
                self.output_dir.display()
            )));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl BookArgs {
    /// Validate the book command arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for (name, path) in [
            ("airports", &self.airports_path),
            ("aircraft", &self.aircraft_path),
        ] {
            if !path.exists() {
                return Err(Error::configuration(format!(
                    "{} file does not exist: {}",
                    name,
                    path.display()
                )));
            }
        }
        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
