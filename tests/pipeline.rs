//! End-to-end pipeline tests: CSV inputs through to the two report files.

use anyhow::Result;
use flight_planner::cli::args::{Args, Commands, PlanArgs};
use flight_planner::cli::commands;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const AIRPORTS_CSV: &str = "\
code,full name,distanceMAN,distanceLGW
JFK,John F Kennedy International,5376,5583
ORY,Paris-Orly,610,325
MAD,Madrid-Barajas,1435,1216
AMS,Amsterdam Schiphol,485,363
CAI,Cairo International,3740,3494
";

const AEROPLANES_CSV: &str = "\
type, runningcostperseatper100km, maxflightrange(km), economyseats, businessseats, firstclassseats
Medium narrow body,£8,2650,160,12,0
Large narrow body,£7,5600,180,20,4
Medium wide body,£5,4050,380,20,8
";

const FLIGHTS_CSV: &str = "\
UK airport,Overseas airport,Type of aircraft,Number of economy seats booked,Number of business seats booked,Number of first class seats booked,Price of a economy class seat,Price of a business class seat,Price of a first class seat
MAN,JFK,Large narrow body,150,12,2,399,999,1899
LGW,ORY,Medium narrow body,120,8,0,150,450,0
MAN,JFK,Medium narrow body,150,12,0,399,999,1899
LGW,ORY,Large narrow body,200,10,2,399,999,1899
MAN,CAI,Large narrow body,150,25,2,399,999,1899
MAN,MAD,Medium narrow body,100,5,2,399,999,1899
LGW,JFKKK,Medium wide body,380,20,8,399,999,1899
MAN,AMS,Boeing 747,100,10,2,399,999,1899
";

fn write_fixtures(dir: &Path) -> Result<PlanArgs> {
    let airports = dir.join("airports.csv");
    let aircraft = dir.join("aeroplanes.csv");
    let flights = dir.join("flight_data.csv");
    fs::write(&airports, AIRPORTS_CSV)?;
    fs::write(&aircraft, AEROPLANES_CSV)?;
    fs::write(&flights, FLIGHTS_CSV)?;

    Ok(PlanArgs {
        airports_path: airports,
        aircraft_path: aircraft,
        flights_path: flights,
        output_dir: dir.join("reports"),
        verbose: 0,
        quiet: true,
    })
}

#[test]
fn plan_pipeline_produces_both_reports() -> Result<()> {
    let dir = TempDir::new()?;
    let plan_args = write_fixtures(dir.path())?;
    let output_dir = plan_args.output_dir.clone();

    let stats = commands::run(Args {
        command: Some(Commands::Plan(plan_args)),
    })?;

    assert_eq!(stats.bookings_read, 8);
    assert_eq!(stats.accepted, 2);
    assert_eq!(stats.rejected, 6);

    let accepted = fs::read_to_string(output_dir.join("valid_flight_results.txt"))?;
    let rejected = fs::read_to_string(output_dir.join("invalid_flight_results.txt"))?;

    // Accepted flights in input order, currency to two decimal places
    assert_eq!(
        accepted,
        "Flight from MAN to JFK with Large narrow body:\n\
         Income: £75636.00, Cost: £61716.48, Profit: £13919.52\n\
         Flight from LGW to ORY with Medium narrow body:\n\
         Income: £21600.00, Cost: £3328.00, Profit: £18272.00"
    );

    // Rejected flights in input order, one line each, naming the FIRST
    // violated rule only
    let expected_rejections = [
        "Error in flight from MAN to JFK with Medium narrow body: \
         Aircraft Medium narrow body doesn't have the range to fly to JFK",
        // Also violates total capacity (212 > 204); economy is reported
        "Error in flight from LGW to ORY with Large narrow body: \
         Too many economy seats booked (200 > 180)",
        "Error in flight from MAN to CAI with Large narrow body: \
         Too many business seats booked (25 > 20)",
        "Error in flight from MAN to MAD with Medium narrow body: \
         Too many first-class seats booked (2 > 0)",
        "Error in flight from LGW to JFKKK with Medium wide body: \
         Invalid airport code: JFKKK",
        "Error in flight from MAN to AMS with Boeing 747: \
         Invalid aircraft type: Boeing 747",
    ];
    assert_eq!(rejected.lines().collect::<Vec<_>>(), expected_rejections);

    Ok(())
}

#[test]
fn plan_pipeline_is_deterministic_across_runs() -> Result<()> {
    let dir = TempDir::new()?;
    let plan_args = write_fixtures(dir.path())?;
    let output_dir = plan_args.output_dir.clone();

    commands::run(Args {
        command: Some(Commands::Plan(plan_args.clone())),
    })?;
    let first_accepted = fs::read_to_string(output_dir.join("valid_flight_results.txt"))?;
    let first_rejected = fs::read_to_string(output_dir.join("invalid_flight_results.txt"))?;

    commands::run(Args {
        command: Some(Commands::Plan(plan_args)),
    })?;
    let second_accepted = fs::read_to_string(output_dir.join("valid_flight_results.txt"))?;
    let second_rejected = fs::read_to_string(output_dir.join("invalid_flight_results.txt"))?;

    assert_eq!(first_accepted, second_accepted);
    assert_eq!(first_rejected, second_rejected);
    Ok(())
}

#[test]
fn every_booking_lands_in_exactly_one_report() -> Result<()> {
    let dir = TempDir::new()?;
    let plan_args = write_fixtures(dir.path())?;
    let output_dir = plan_args.output_dir.clone();

    let stats = commands::run(Args {
        command: Some(Commands::Plan(plan_args)),
    })?;

    let accepted = fs::read_to_string(output_dir.join("valid_flight_results.txt"))?;
    let rejected = fs::read_to_string(output_dir.join("invalid_flight_results.txt"))?;

    let accepted_count = accepted.matches("Flight from").count();
    let rejected_count = rejected.matches("Error in flight from").count();
    assert_eq!(accepted_count, stats.accepted);
    assert_eq!(rejected_count, stats.rejected);
    assert_eq!(accepted_count + rejected_count, stats.bookings_read);

    Ok(())
}

#[test]
fn empty_bookings_file_yields_empty_reports() -> Result<()> {
    let dir = TempDir::new()?;
    let mut plan_args = write_fixtures(dir.path())?;
    let empty = dir.path().join("empty_flights.csv");
    fs::write(
        &empty,
        "UK airport,Overseas airport,Type of aircraft,Number of economy seats booked,\
         Number of business seats booked,Number of first class seats booked,\
         Price of a economy class seat,Price of a business class seat,Price of a first class seat\n",
    )?;
    plan_args.flights_path = empty;
    let output_dir = plan_args.output_dir.clone();

    let stats = commands::run(Args {
        command: Some(Commands::Plan(plan_args)),
    })?;

    assert_eq!(stats.bookings_read, 0);
    assert_eq!(
        fs::read_to_string(output_dir.join("valid_flight_results.txt"))?,
        ""
    );
    assert_eq!(
        fs::read_to_string(output_dir.join("invalid_flight_results.txt"))?,
        ""
    );
    Ok(())
}
