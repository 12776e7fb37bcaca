use clap::Parser;
use flight_planner::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Flight Planner - Route Profitability Evaluator");
    println!("==============================================");
    println!();
    println!("Evaluate flight bookings against airport and aircraft reference data,");
    println!("computing income, cost, and profit for every flyable booking.");
    println!();
    println!("USAGE:");
    println!("    flight-planner <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    plan        Evaluate a bookings file and write the two reports (main command)");
    println!("    book        Interactively evaluate a single ad-hoc booking");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Evaluate the default flight_data.csv with reports in the current directory:");
    println!("    flight-planner plan");
    println!();
    println!("    # Custom input files and report directory:");
    println!("    flight-planner plan --airports data/airports.csv --aircraft data/aeroplanes.csv \\");
    println!("                        --flights data/flight_data.csv --output-dir reports");
    println!();
    println!("    # Evaluate one booking interactively:");
    println!("    flight-planner book");
    println!();
    println!("For detailed help on any command, use:");
    println!("    flight-planner <COMMAND> --help");
}
