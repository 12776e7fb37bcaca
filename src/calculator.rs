//! Financial calculator for flyable bookings
//!
//! Pure arithmetic over a flyable booking's seats and prices: same inputs
//! always yield the same income, cost, and profit. No rounding happens
//! here; two-decimal formatting belongs to the report assembler.

use crate::constants::COST_DISTANCE_UNIT_KM;
use crate::models::{Aircraft, Financials, FlightBooking};

/// Compute income, operating cost, and profit for a flyable booking
///
/// - income sums booked seats times price per seat across all cabins
/// - cost per seat scales the aircraft's running cost linearly with
///   distance in units of 100 km
/// - total cost multiplies by seats actually booked, not capacity
pub fn calculate(booking: &FlightBooking, aircraft: &Aircraft, distance_km: u32) -> Financials {
    let income = f64::from(booking.economy_booked) * booking.economy_price
        + f64::from(booking.business_booked) * booking.business_price
        + f64::from(booking.first_class_booked) * booking.first_class_price;

    let cost_per_seat = aircraft.running_cost_per_seat_per_100km
        * (f64::from(distance_km) / COST_DISTANCE_UNIT_KM);
    let cost = cost_per_seat * f64::from(booking.total_booked());

    Financials {
        income,
        cost,
        profit: income - cost,
    }
}
