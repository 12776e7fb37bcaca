//! Flight normalizer: raw booking records to typed values
//!
//! Converts one raw booking record into a [`FlightBooking`] under a single,
//! documented coercion policy: seat counts and prices that are missing,
//! non-numeric, or negative coerce to zero and are logged. The normalizer
//! never rejects a booking; classification is the validation engine's job.

use crate::constants::booking_columns;
use crate::loader::Record;
use crate::models::FlightBooking;
use tracing::warn;

/// Convert a raw booking record into a typed flight booking
///
/// Origin, destination, and aircraft-type strings pass through verbatim
/// (missing text fields become empty strings, which validation reports as
/// unknown references). Numeric fields follow the coerce-to-zero policy.
pub fn normalize(record: &Record) -> FlightBooking {
    FlightBooking {
        origin: text_field(record, booking_columns::UK_AIRPORT),
        destination: text_field(record, booking_columns::OVERSEAS_AIRPORT),
        aircraft_type: text_field(record, booking_columns::AIRCRAFT_TYPE),
        economy_booked: seat_count(record, booking_columns::ECONOMY_BOOKED),
        business_booked: seat_count(record, booking_columns::BUSINESS_BOOKED),
        first_class_booked: seat_count(record, booking_columns::FIRST_CLASS_BOOKED),
        economy_price: seat_price(record, booking_columns::ECONOMY_PRICE),
        business_price: seat_price(record, booking_columns::BUSINESS_PRICE),
        first_class_price: seat_price(record, booking_columns::FIRST_CLASS_PRICE),
    }
}

fn text_field(record: &Record, column: &str) -> String {
    record.get(column).unwrap_or_default().to_string()
}

fn seat_count(record: &Record, column: &str) -> u32 {
    let raw = match record.get(column) {
        Some(value) if !value.is_empty() => value,
        _ => {
            warn!("Missing '{}', coercing to 0", column);
            return 0;
        }
    };

    match raw.parse::<u32>() {
        Ok(count) => count,
        Err(_) => {
            warn!("Non-numeric or negative '{}' value '{}', coercing to 0", column, raw);
            0
        }
    }
}

fn seat_price(record: &Record, column: &str) -> f64 {
    let raw = match record.get(column) {
        Some(value) if !value.is_empty() => value,
        _ => {
            warn!("Missing '{}', coercing to 0", column);
            return 0.0;
        }
    };

    match raw.parse::<f64>() {
        Ok(price) if price >= 0.0 => price,
        Ok(price) => {
            warn!("Negative '{}' value '{}', coercing to 0", column, price);
            0.0
        }
        Err(_) => {
            warn!("Non-numeric '{}' value '{}', coercing to 0", column, raw);
            0.0
        }
    }
}
