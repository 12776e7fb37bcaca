//! Validation engine for flight bookings
//!
//! Classifies one normalized booking as flyable or rejected against the
//! reference index. Checks run in a fixed order and stop at the first
//! failure, so a booking violating several rules at once reports exactly
//! the first one. That ordering is a behavioral contract: reordering the
//! checks changes which message users see for the same input.

use crate::calculator;
use crate::models::{EvaluatedBooking, FlightBooking, Outcome, RejectionReason};
use crate::registry::ReferenceIndex;

/// Validate one booking against the reference index
///
/// The checks, in order: destination exists, aircraft type exists, distance
/// within range, then per-cabin capacity in economy → business → first-class
/// order, then total capacity. Per-cabin checks deliberately precede the
/// aggregate check so the most specific violation wins.
///
/// Rejection is an ordinary return value, never an error. Malformed numeric
/// input cannot reach this function; the normalizer has already coerced it.
pub fn validate(booking: &FlightBooking, index: &ReferenceIndex) -> Outcome {
    let airport = match index.lookup_airport(&booking.destination) {
        Some(airport) => airport,
        None => {
            return Outcome::Rejected(RejectionReason::UnknownAirport {
                code: booking.destination.clone(),
            });
        }
    };

    let aircraft = match index.lookup_aircraft(&booking.aircraft_type) {
        Some(aircraft) => aircraft,
        None => {
            return Outcome::Rejected(RejectionReason::UnknownAircraftType {
                type_name: booking.aircraft_type.clone(),
            });
        }
    };

    let distance_km = airport.distance_from(&booking.origin);
    if distance_km > aircraft.max_flight_range_km {
        return Outcome::Rejected(RejectionReason::RangeExceeded {
            type_name: aircraft.type_name.clone(),
            distance_km,
            destination: booking.destination.clone(),
        });
    }

    if booking.economy_booked > aircraft.economy_seats {
        return Outcome::Rejected(RejectionReason::EconomyOverbooked {
            booked: booking.economy_booked,
            capacity: aircraft.economy_seats,
        });
    }

    if booking.business_booked > aircraft.business_seats {
        return Outcome::Rejected(RejectionReason::BusinessOverbooked {
            booked: booking.business_booked,
            capacity: aircraft.business_seats,
        });
    }

    if booking.first_class_booked > aircraft.first_class_seats {
        return Outcome::Rejected(RejectionReason::FirstClassOverbooked {
            booked: booking.first_class_booked,
            capacity: aircraft.first_class_seats,
        });
    }

    let total_capacity = aircraft.total_capacity();
    if booking.total_booked() > total_capacity {
        return Outcome::Rejected(RejectionReason::TotalOverbooked {
            booked: booking.total_booked(),
            capacity: total_capacity,
        });
    }

    Outcome::Flyable {
        distance_km,
        total_capacity,
    }
}

/// Evaluate one booking end to end: validate, then price if flyable
///
/// Upholds the exactly-one-outcome contract: every booking comes back as
/// either `Accepted` with financials or `Rejected` with a single reason.
pub fn evaluate(booking: FlightBooking, index: &ReferenceIndex) -> EvaluatedBooking {
    match validate(&booking, index) {
        Outcome::Rejected(reason) => EvaluatedBooking::Rejected { booking, reason },
        Outcome::Flyable { distance_km, .. } => {
            // The lookup cannot miss once validation has passed, but stay in
            // the rejection channel rather than panic if it ever does.
            let aircraft = match index.lookup_aircraft(&booking.aircraft_type) {
                Some(aircraft) => aircraft,
                None => {
                    let reason = RejectionReason::UnknownAircraftType {
                        type_name: booking.aircraft_type.clone(),
                    };
                    return EvaluatedBooking::Rejected { booking, reason };
                }
            };
            let financials = calculator::calculate(&booking, aircraft, distance_km);
            EvaluatedBooking::Accepted {
                booking,
                financials,
            }
        }
    }
}
