//! Report assembler for accepted and rejected flights
//!
//! Owns all human-readable wording: the `Display` of rejection reasons, the
//! one-line-per-booking report templates, and the report files themselves.
//! Currency values are formatted to two decimal places here and nowhere
//! else.

use crate::constants::{ACCEPTED_REPORT_FILENAME, CURRENCY_SYMBOL, REJECTED_REPORT_FILENAME};
use crate::models::{EvaluatedBooking, Financials, FlightBooking, RejectionReason};
use crate::{Error, Result};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::UnknownAirport { code } => {
                write!(f, "Invalid airport code: {}", code)
            }
            RejectionReason::UnknownAircraftType { type_name } => {
                write!(f, "Invalid aircraft type: {}", type_name)
            }
            RejectionReason::RangeExceeded {
                type_name,
                destination,
                ..
            } => {
                write!(
                    f,
                    "Aircraft {} doesn't have the range to fly to {}",
                    type_name, destination
                )
            }
            RejectionReason::EconomyOverbooked { booked, capacity } => {
                write!(f, "Too many economy seats booked ({} > {})", booked, capacity)
            }
            RejectionReason::BusinessOverbooked { booked, capacity } => {
                write!(f, "Too many business seats booked ({} > {})", booked, capacity)
            }
            RejectionReason::FirstClassOverbooked { booked, capacity } => {
                write!(
                    f,
                    "Too many first-class seats booked ({} > {})",
                    booked, capacity
                )
            }
            RejectionReason::TotalOverbooked { booked, capacity } => {
                write!(f, "Too many total seats booked ({} > {})", booked, capacity)
            }
        }
    }
}

/// Format the report line for an accepted flight
pub fn accepted_line(booking: &FlightBooking, financials: &Financials) -> String {
    format!(
        "Flight from {} to {} with {}:\nIncome: {sym}{:.2}, Cost: {sym}{:.2}, Profit: {sym}{:.2}",
        booking.origin,
        booking.destination,
        booking.aircraft_type,
        financials.income,
        financials.cost,
        financials.profit,
        sym = CURRENCY_SYMBOL,
    )
}

/// Format the report line for a rejected flight
pub fn rejected_line(booking: &FlightBooking, reason: &RejectionReason) -> String {
    format!(
        "Error in flight from {} to {} with {}: {}",
        booking.origin, booking.destination, booking.aircraft_type, reason
    )
}

/// Paths of the two categorized report files
#[derive(Debug, Clone)]
pub struct ReportPaths {
    pub accepted: PathBuf,
    pub rejected: PathBuf,
}

impl ReportPaths {
    /// Report paths under the given output directory, with the standard
    /// file names
    pub fn in_dir(output_dir: &Path) -> Self {
        Self {
            accepted: output_dir.join(ACCEPTED_REPORT_FILENAME),
            rejected: output_dir.join(REJECTED_REPORT_FILENAME),
        }
    }
}

/// Pre-create both report files empty if they do not exist
///
/// Existing files are left untouched, truncation only happens when a report
/// is actually written.
pub fn ensure_report_files(paths: &ReportPaths) -> Result<()> {
    for path in [&paths.accepted, &paths.rejected] {
        if !path.exists() {
            fs::write(path, "").map_err(|e| {
                Error::io(format!("Failed to create report file {}", path.display()), e)
            })?;
        }
    }
    Ok(())
}

/// Write report lines to a file, joined by newlines
pub fn write_report(lines: &[String], path: &Path) -> Result<()> {
    let output = lines.join("\n");
    fs::write(path, output)
        .map_err(|e| Error::io(format!("Failed to write report file {}", path.display()), e))?;
    info!("Wrote {} report lines to {}", lines.len(), path.display());
    Ok(())
}

/// Split evaluated bookings into accepted/rejected lines and write both
/// reports
///
/// Every booking contributes exactly one line to exactly one report.
pub fn write_reports(evaluated: &[EvaluatedBooking], paths: &ReportPaths) -> Result<()> {
    let mut accepted_lines = Vec::new();
    let mut rejected_lines = Vec::new();

    for result in evaluated {
        match result {
            EvaluatedBooking::Accepted {
                booking,
                financials,
            } => accepted_lines.push(accepted_line(booking, financials)),
            EvaluatedBooking::Rejected { booking, reason } => {
                rejected_lines.push(rejected_line(booking, reason))
            }
        }
    }

    ensure_report_files(paths)?;
    write_report(&accepted_lines, &paths.accepted)?;
    write_report(&rejected_lines, &paths.rejected)?;
    Ok(())
}
