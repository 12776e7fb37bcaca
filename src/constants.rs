//! Application constants for the flight planner
//!
//! This module contains the domestic origin codes, default file names,
//! currency handling constants, and CSV column-name mappings used
//! throughout the flight planner.

// =============================================================================
// Origin Airports
// =============================================================================

/// Domestic origin whose distances come from the `distanceMAN` column
pub const ORIGIN_MAN: &str = "MAN";

/// Domestic origin whose distances come from the `distanceLGW` column
///
/// Any origin code other than [`ORIGIN_MAN`] resolves the LGW distance;
/// this fallback is a load-bearing behavioral contract, not an oversight.
pub const ORIGIN_LGW: &str = "LGW";

// =============================================================================
// Currency Handling
// =============================================================================

/// Currency symbol used in reference data and report output
pub const CURRENCY_SYMBOL: &str = "£";

/// Latin-1 mojibake form of the currency symbol seen in real exports
pub const CURRENCY_SYMBOL_MOJIBAKE: &str = "Â£";

/// Operating cost scales linearly with distance in units of this many km
pub const COST_DISTANCE_UNIT_KM: f64 = 100.0;

// =============================================================================
// Default File Names
// =============================================================================

/// Default airports reference file
pub const DEFAULT_AIRPORTS_FILE: &str = "airports.csv";

/// Default aircraft-type reference file
pub const DEFAULT_AIRCRAFT_FILE: &str = "aeroplanes.csv";

/// Default flight bookings file
pub const DEFAULT_FLIGHTS_FILE: &str = "flight_data.csv";

/// Report file for accepted flights with financials
pub const ACCEPTED_REPORT_FILENAME: &str = "valid_flight_results.txt";

/// Report file for rejected flights with rejection reasons
pub const REJECTED_REPORT_FILENAME: &str = "invalid_flight_results.txt";

// =============================================================================
// CSV Column Names
// =============================================================================

/// Column names in the airports reference file
pub mod airport_columns {
    pub const CODE: &str = "code";
    pub const FULL_NAME: &str = "full name";
    pub const DISTANCE_MAN: &str = "distanceMAN";
    pub const DISTANCE_LGW: &str = "distanceLGW";
}

/// Column names in the aircraft-type reference file
pub mod aircraft_columns {
    pub const TYPE: &str = "type";
    pub const RUNNING_COST: &str = "runningcostperseatper100km";
    pub const MAX_RANGE: &str = "maxflightrange(km)";
    /// Alternate max-range spelling found in some source exports
    pub const MAX_RANGE_ALT: &str = "maxflightrange";
    pub const ECONOMY_SEATS: &str = "economyseats";
    pub const BUSINESS_SEATS: &str = "businessseats";
    pub const FIRST_CLASS_SEATS: &str = "firstclassseats";
}

/// Column names in the flight bookings file
pub mod booking_columns {
    pub const UK_AIRPORT: &str = "UK airport";
    pub const OVERSEAS_AIRPORT: &str = "Overseas airport";
    pub const AIRCRAFT_TYPE: &str = "Type of aircraft";
    pub const ECONOMY_BOOKED: &str = "Number of economy seats booked";
    pub const BUSINESS_BOOKED: &str = "Number of business seats booked";
    pub const FIRST_CLASS_BOOKED: &str = "Number of first class seats booked";
    pub const ECONOMY_PRICE: &str = "Price of a economy class seat";
    pub const BUSINESS_PRICE: &str = "Price of a business class seat";
    pub const FIRST_CLASS_PRICE: &str = "Price of a first class seat";
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Strip the currency prefix (including its mojibake form) and thousands
/// separators from a textual amount
pub fn strip_currency(raw: &str) -> String {
    raw.trim()
        .trim_start_matches(CURRENCY_SYMBOL_MOJIBAKE)
        .trim_start_matches(CURRENCY_SYMBOL)
        .replace(',', "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_currency() {
        assert_eq!(strip_currency("£7"), "7");
        assert_eq!(strip_currency("£1,250.50"), "1250.50");
        assert_eq!(strip_currency("Â£8"), "8");
        assert_eq!(strip_currency(" 5 "), "5");
    }
}
