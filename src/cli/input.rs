//! User input utilities for the interactive booking prompt
//!
//! This module collects the fields of a single ad-hoc booking from stdin,
//! re-prompting on unparseable numbers so a typo never aborts the session.

use crate::models::FlightBooking;
use crate::{Error, Result};
use std::io::{self, BufRead, Write};

/// Prompt for every field of a flight booking on stdin
pub fn prompt_booking() -> Result<FlightBooking> {
    let stdin = io::stdin();
    let mut lines = stdin.lock();

    println!("Enter the booking details:");

    Ok(FlightBooking {
        origin: prompt_text(&mut lines, "UK origin airport (MAN/LGW)")?,
        destination: prompt_text(&mut lines, "Overseas airport code")?,
        aircraft_type: prompt_text(&mut lines, "Aircraft type")?,
        economy_booked: prompt_count(&mut lines, "Economy seats booked")?,
        business_booked: prompt_count(&mut lines, "Business seats booked")?,
        first_class_booked: prompt_count(&mut lines, "First class seats booked")?,
        economy_price: prompt_price(&mut lines, "Economy seat price")?,
        business_price: prompt_price(&mut lines, "Business seat price")?,
        first_class_price: prompt_price(&mut lines, "First class seat price")?,
    })
}

fn read_line(lines: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{}: ", message);
    io::stdout()
        .flush()
        .map_err(|e| Error::io("Failed to flush stdout", e))?;

    let mut input = String::new();
    lines
        .read_line(&mut input)
        .map_err(|e| Error::io("Failed to read user input", e))?;
    Ok(input.trim().to_string())
}

fn prompt_text(lines: &mut impl BufRead, message: &str) -> Result<String> {
    loop {
        let input = read_line(lines, message)?;
        if !input.is_empty() {
            return Ok(input);
        }
        println!("A value is required.");
    }
}

fn prompt_count(lines: &mut impl BufRead, message: &str) -> Result<u32> {
    loop {
        let input = read_line(lines, message)?;
        match input.parse::<u32>() {
            Ok(count) => return Ok(count),
            Err(_) => println!("Please enter a non-negative whole number."),
        }
    }
}

fn prompt_price(lines: &mut impl BufRead, message: &str) -> Result<f64> {
    loop {
        let input = read_line(lines, message)?;
        match input.parse::<f64>() {
            Ok(price) if price >= 0.0 => return Ok(price),
            _ => println!("Please enter a non-negative amount."),
        }
    }
}
