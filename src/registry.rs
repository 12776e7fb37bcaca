//! Reference index for O(1) airport and aircraft-type lookups
//!
//! This module builds the read-only lookup structures over the airport and
//! aircraft reference datasets. The index is constructed once per run and
//! shared across all booking evaluations; nothing mutates it afterwards.

use crate::constants::{aircraft_columns, airport_columns, strip_currency};
use crate::loader::{self, Record};
use crate::models::{Aircraft, Airport};
use crate::{Error, Result};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Read-only lookup index over the airport and aircraft-type reference data
///
/// Lookups are exact-match, case-sensitive string equality. Duplicate keys
/// in the source data keep the first occurrence; later duplicates are logged
/// and ignored, matching the reference fixtures.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    /// Airports indexed by code
    airports: HashMap<String, Airport>,
    /// Aircraft types indexed by type name
    aircraft: HashMap<String, Aircraft>,
}

/// Statistics about the reference index loading process
#[derive(Debug, Clone)]
pub struct LoadStats {
    /// Number of airports loaded
    pub airports_loaded: usize,
    /// Number of aircraft types loaded
    pub aircraft_loaded: usize,
    /// Number of duplicate records ignored (first occurrence kept)
    pub duplicates_ignored: usize,
    /// Time taken to load the index
    pub load_duration: std::time::Duration,
}

impl ReferenceIndex {
    /// Create a new empty reference index
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the reference index from the airport and aircraft CSV files
    ///
    /// Malformed reference records abort the load: a silently thinner index
    /// would turn loader faults into misleading unknown-airport rejections
    /// downstream.
    ///
    /// # Errors
    /// * `Error::FileNotFound` / `Error::CsvParsing` for unreadable sources
    /// * `Error::ReferenceData` for records that fail to parse
    pub fn load_from_files(
        airports_path: &Path,
        aircraft_path: &Path,
    ) -> Result<(Self, LoadStats)> {
        let start_time = Instant::now();

        let airport_records = loader::read_records(airports_path)?;
        let aircraft_records = loader::read_records(aircraft_path)?;

        let mut index = Self::new();
        let mut duplicates_ignored = 0;

        let airports_file = airports_path.to_string_lossy();
        for record in &airport_records {
            let airport = parse_airport(record, &airports_file)?;
            if !index.insert_airport(airport) {
                duplicates_ignored += 1;
            }
        }

        let aircraft_file = aircraft_path.to_string_lossy();
        for record in &aircraft_records {
            let aircraft = parse_aircraft(record, &aircraft_file)?;
            if !index.insert_aircraft(aircraft) {
                duplicates_ignored += 1;
            }
        }

        let stats = LoadStats {
            airports_loaded: index.airport_count(),
            aircraft_loaded: index.aircraft_count(),
            duplicates_ignored,
            load_duration: start_time.elapsed(),
        };

        info!(
            "Reference index loaded: {} airports, {} aircraft types in {:.2}ms",
            stats.airports_loaded,
            stats.aircraft_loaded,
            stats.load_duration.as_secs_f64() * 1000.0
        );

        Ok((index, stats))
    }

    /// Insert an airport, keeping the first occurrence on duplicate codes.
    /// Returns false when the record was a duplicate and was ignored.
    pub fn insert_airport(&mut self, airport: Airport) -> bool {
        match self.airports.entry(airport.code.clone()) {
            Entry::Vacant(e) => {
                e.insert(airport);
                true
            }
            Entry::Occupied(_) => {
                warn!(
                    "Duplicate airport code '{}', keeping first occurrence",
                    airport.code
                );
                false
            }
        }
    }

    /// Insert an aircraft type, keeping the first occurrence on duplicate
    /// names. Returns false when the record was a duplicate and was ignored.
    pub fn insert_aircraft(&mut self, aircraft: Aircraft) -> bool {
        match self.aircraft.entry(aircraft.type_name.clone()) {
            Entry::Vacant(e) => {
                e.insert(aircraft);
                true
            }
            Entry::Occupied(_) => {
                warn!(
                    "Duplicate aircraft type '{}', keeping first occurrence",
                    aircraft.type_name
                );
                false
            }
        }
    }

    /// Get an airport by code (O(1) lookup)
    pub fn lookup_airport(&self, code: &str) -> Option<&Airport> {
        self.airports.get(code)
    }

    /// Get an aircraft type by name (O(1) lookup)
    pub fn lookup_aircraft(&self, type_name: &str) -> Option<&Aircraft> {
        self.aircraft.get(type_name)
    }

    /// Number of airports in the index
    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }

    /// Number of aircraft types in the index
    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }
}

/// Parse a currency-prefixed decimal amount (e.g. `£7` or `Â£1,250.50`)
pub fn parse_currency(raw: &str, file: &str, context: &str) -> Result<f64> {
    let stripped = strip_currency(raw);
    stripped.parse::<f64>().map_err(|_| {
        Error::reference_data(file, format!("Invalid currency amount '{}' for {}", raw, context))
    })
}

fn parse_count(raw: &str, file: &str, context: &str) -> Result<u32> {
    raw.parse::<u32>().map_err(|_| {
        Error::reference_data(
            file,
            format!("Invalid non-negative integer '{}' for {}", raw, context),
        )
    })
}

fn parse_airport(record: &Record, file: &str) -> Result<Airport> {
    let code = record.require(file, airport_columns::CODE)?.to_string();
    if code.is_empty() {
        return Err(Error::reference_data(file, "Airport record with empty code"));
    }

    let full_name = record.require(file, airport_columns::FULL_NAME)?.to_string();
    let distance_man = record.require(file, airport_columns::DISTANCE_MAN)?;
    let distance_lgw = record.require(file, airport_columns::DISTANCE_LGW)?;

    Ok(Airport {
        distance_from_man_km: parse_count(distance_man, file, &format!("distanceMAN of {}", code))?,
        distance_from_lgw_km: parse_count(distance_lgw, file, &format!("distanceLGW of {}", code))?,
        code,
        full_name,
    })
}

fn parse_aircraft(record: &Record, file: &str) -> Result<Aircraft> {
    let type_name = record.require(file, aircraft_columns::TYPE)?.to_string();
    if type_name.is_empty() {
        return Err(Error::reference_data(file, "Aircraft record with empty type"));
    }

    let running_cost = record.require(file, aircraft_columns::RUNNING_COST)?;

    // The source exports disagree on the max-range header; accept both.
    let max_range = match record.get(aircraft_columns::MAX_RANGE) {
        Some(value) => value,
        None => record.require(file, aircraft_columns::MAX_RANGE_ALT)?,
    };
    debug!("Aircraft '{}' max range field: {}", type_name, max_range);

    let economy = record.require(file, aircraft_columns::ECONOMY_SEATS)?;
    let business = record.require(file, aircraft_columns::BUSINESS_SEATS)?;
    let first_class = record.require(file, aircraft_columns::FIRST_CLASS_SEATS)?;

    Ok(Aircraft {
        running_cost_per_seat_per_100km: parse_currency(
            running_cost,
            file,
            &format!("running cost of {}", type_name),
        )?,
        max_flight_range_km: parse_count(
            max_range,
            file,
            &format!("max flight range of {}", type_name),
        )?,
        economy_seats: parse_count(economy, file, &format!("economy seats of {}", type_name))?,
        business_seats: parse_count(business, file, &format!("business seats of {}", type_name))?,
        first_class_seats: parse_count(
            first_class,
            file,
            &format!("first class seats of {}", type_name),
        )?,
        type_name,
    })
}
