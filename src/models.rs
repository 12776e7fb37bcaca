//! Core data structures for flight planning.
//!
//! Defines the reference records (airports, aircraft types), the typed
//! flight booking, and the validation/financial outcome types used
//! throughout the library.

use crate::constants::ORIGIN_MAN;
use serde::{Deserialize, Serialize};

/// An overseas destination airport from the reference dataset
///
/// Immutable reference data, loaded once per run. Distances are stored for
/// both domestic origins so the correct leg can be resolved per booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    /// Unique airport code (exact-match, case-sensitive key)
    pub code: String,
    /// Display name of the airport
    pub full_name: String,
    /// Distance from Manchester (MAN) in kilometers
    pub distance_from_man_km: u32,
    /// Distance from London Gatwick (LGW) in kilometers
    pub distance_from_lgw_km: u32,
}

impl Airport {
    /// Resolve the flight distance for a booking's origin.
    ///
    /// `MAN` selects the Manchester distance; any other origin code falls
    /// through to the Gatwick distance. The fallback is deliberate and
    /// mirrors the reference fixtures.
    pub fn distance_from(&self, origin: &str) -> u32 {
        if origin == ORIGIN_MAN {
            self.distance_from_man_km
        } else {
            self.distance_from_lgw_km
        }
    }
}

/// An aircraft type from the reference dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aircraft {
    /// Unique type name (exact-match, case-sensitive key)
    pub type_name: String,
    /// Running cost per seat per 100 km, parsed from its currency-prefixed
    /// source form at load time
    pub running_cost_per_seat_per_100km: f64,
    /// Maximum flight range in kilometers
    pub max_flight_range_km: u32,
    /// Economy cabin seat capacity
    pub economy_seats: u32,
    /// Business cabin seat capacity
    pub business_seats: u32,
    /// First-class cabin seat capacity
    pub first_class_seats: u32,
}

impl Aircraft {
    /// Total seat capacity across all three cabins
    pub fn total_capacity(&self) -> u32 {
        self.economy_seats + self.business_seats + self.first_class_seats
    }
}

/// A normalized flight booking
///
/// Seat counts and prices have already been through the normalizer's
/// coercion policy; the origin, destination, and aircraft-type strings are
/// carried verbatim for validation against the reference index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightBooking {
    /// Domestic origin airport code
    pub origin: String,
    /// Overseas destination airport code
    pub destination: String,
    /// Aircraft type name
    pub aircraft_type: String,
    /// Economy seats booked
    pub economy_booked: u32,
    /// Business seats booked
    pub business_booked: u32,
    /// First-class seats booked
    pub first_class_booked: u32,
    /// Price per economy seat
    pub economy_price: f64,
    /// Price per business seat
    pub business_price: f64,
    /// Price per first-class seat
    pub first_class_price: f64,
}

impl FlightBooking {
    /// Total seats booked across all three cabins
    pub fn total_booked(&self) -> u32 {
        self.economy_booked + self.business_booked + self.first_class_booked
    }
}

/// Why a booking failed validation
///
/// A closed set of structured rejection kinds carrying the offending
/// numbers. Human-readable wording is owned by the report assembler, so the
/// core stays testable by structure rather than by string match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RejectionReason {
    /// Destination airport code not present in the reference index
    UnknownAirport { code: String },
    /// Aircraft type name not present in the reference index
    UnknownAircraftType { type_name: String },
    /// Flight distance exceeds the aircraft's maximum range
    RangeExceeded {
        type_name: String,
        distance_km: u32,
        destination: String,
    },
    /// More economy seats booked than the aircraft carries
    EconomyOverbooked { booked: u32, capacity: u32 },
    /// More business seats booked than the aircraft carries
    BusinessOverbooked { booked: u32, capacity: u32 },
    /// More first-class seats booked than the aircraft carries
    FirstClassOverbooked { booked: u32, capacity: u32 },
    /// Total seats booked exceed the aircraft's total capacity
    TotalOverbooked { booked: u32, capacity: u32 },
}

/// Result of validating one booking against the reference index
///
/// Rejection is an expected, first-class outcome. The `Flyable` arm carries
/// the resolved distance and total capacity so downstream calculation does
/// not repeat the lookups.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Outcome {
    /// Every range and capacity check passed
    Flyable { distance_km: u32, total_capacity: u32 },
    /// The first violated rule, and only that one
    Rejected(RejectionReason),
}

/// Income, operating cost, and profit for a flyable booking
///
/// Values are unrounded; two-decimal formatting happens only at report time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Financials {
    pub income: f64,
    pub cost: f64,
    pub profit: f64,
}

/// A booking together with its final classification
///
/// Exactly one of the two arms holds for every booking, and each booking
/// lands in exactly one of the two reports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EvaluatedBooking {
    /// Flyable booking with computed financials
    Accepted {
        booking: FlightBooking,
        financials: Financials,
    },
    /// Rejected booking with its single rejection reason
    Rejected {
        booking: FlightBooking,
        reason: RejectionReason,
    },
}

impl EvaluatedBooking {
    /// The underlying booking regardless of classification
    pub fn booking(&self) -> &FlightBooking {
        match self {
            EvaluatedBooking::Accepted { booking, .. } => booking,
            EvaluatedBooking::Rejected { booking, .. } => booking,
        }
    }

    /// Whether this booking was accepted as flyable
    pub fn is_accepted(&self) -> bool {
        matches!(self, EvaluatedBooking::Accepted { .. })
    }
}
