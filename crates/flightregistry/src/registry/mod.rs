//! In-memory flight registry.
//!
//! Records are kept in a plain `Vec` in insertion order. Every lookup is a
//! linear scan, which is ample for the tens of thousands of records this
//! registry is meant to hold.

mod stats;

use serde_json::Value;
use tracing::{debug, trace};

use crate::config::RegistryConfig;
use crate::error::Result;
use crate::record::FlightRecord;

pub use stats::RegistryStats;

/// Registry of flight records keyed by flight number.
///
/// Provides:
/// - Insertion with silent rejection of duplicate flight numbers
/// - Removal and status updates by flight number
/// - Filtering by status and longest-flight lookup
///
/// The registry owns its records. Callers hand records over by value and
/// only get shared borrows back, so [`FlightRegistry::update_status`] is the
/// only way a stored record changes. No internal locking: wrap the whole
/// registry in a `Mutex` to share it between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlightRegistry {
    flights: Vec<FlightRecord>,
}

impl FlightRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry sized according to `config`.
    #[must_use]
    pub fn with_config(config: &RegistryConfig) -> Self {
        debug!(
            "Creating registry with initial capacity {}",
            config.initial_capacity
        );
        Self {
            flights: Vec::with_capacity(config.initial_capacity),
        }
    }

    /// Insert a record unless its flight number is already present.
    ///
    /// Returns `true` if the record was appended, `false` if it was ignored
    /// as a duplicate. Duplicates are not an error.
    pub fn insert(&mut self, record: FlightRecord) -> bool {
        if self.contains(&record.flight_number) {
            debug!("Ignoring duplicate flight {}", record.flight_number);
            return false;
        }

        debug!("Inserted flight {}", record.flight_number);
        self.flights.push(record);
        true
    }

    /// Validate a generic key/value record and insert it.
    ///
    /// Nothing is inserted if validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::MalformedRecord`] if the value lacks a required
    /// field or carries one of the wrong type.
    pub fn insert_value(&mut self, value: Value) -> Result<bool> {
        let record = FlightRecord::from_value(value)?;
        Ok(self.insert(record))
    }

    /// Remove the record with the given flight number.
    ///
    /// Returns the number of records removed, which is zero for an unknown
    /// flight and otherwise one.
    pub fn remove(&mut self, flight_number: &str) -> usize {
        let before = self.flights.len();
        self.flights.retain(|flight| flight.flight_number != flight_number);
        let removed = before - self.flights.len();

        if removed > 0 {
            debug!("Removed flight {}", flight_number);
        } else {
            trace!("No flight {} to remove", flight_number);
        }
        removed
    }

    /// Get every record whose status equals `status`, in insertion order.
    #[must_use]
    pub fn filter_by_status(&self, status: &str) -> Vec<&FlightRecord> {
        let matches: Vec<&FlightRecord> = self
            .flights
            .iter()
            .filter(|flight| flight.has_status(status))
            .collect();
        trace!("{} flights with status {}", matches.len(), status);
        matches
    }

    /// Get the record with the greatest duration.
    ///
    /// Among records sharing the maximum duration, the earliest inserted one
    /// is returned. Returns `None` when the registry is empty.
    #[must_use]
    pub fn longest_flight(&self) -> Option<&FlightRecord> {
        self.flights.iter().reduce(|longest, flight| {
            if flight
                .duration_minutes
                .total_cmp(&longest.duration_minutes)
                .is_gt()
            {
                flight
            } else {
                longest
            }
        })
    }

    /// Overwrite the status of the record with the given flight number.
    ///
    /// Returns the number of records updated, zero for an unknown flight.
    /// No other field is touched.
    pub fn update_status(&mut self, flight_number: &str, new_status: &str) -> usize {
        let mut updated = 0;
        for flight in self
            .flights
            .iter_mut()
            .filter(|flight| flight.flight_number == flight_number)
        {
            debug!(
                "Flight {} status {} -> {}",
                flight_number, flight.status, new_status
            );
            new_status.clone_into(&mut flight.status);
            updated += 1;
        }

        if updated == 0 {
            trace!("No flight {} to update", flight_number);
        }
        updated
    }

    /// Check if a record with the given flight number exists.
    #[must_use]
    pub fn contains(&self, flight_number: &str) -> bool {
        self.flights
            .iter()
            .any(|flight| flight.flight_number == flight_number)
    }

    /// Get the record with the given flight number.
    #[must_use]
    pub fn get(&self, flight_number: &str) -> Option<&FlightRecord> {
        self.flights
            .iter()
            .find(|flight| flight.flight_number == flight_number)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn flights(&self) -> &[FlightRecord] {
        &self.flights
    }

    /// Iterate over records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, FlightRecord> {
        self.flights.iter()
    }

    /// Number of records held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flights.len()
    }

    /// Check if the registry holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flights.is_empty()
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        debug!("Clearing {} flights", self.flights.len());
        self.flights.clear();
    }

    /// Summarize the current contents.
    #[must_use]
    pub fn stats(&self) -> RegistryStats {
        RegistryStats::collect(self)
    }
}

impl<'a> IntoIterator for &'a FlightRegistry {
    type Item = &'a FlightRecord;
    type IntoIter = std::slice::Iter<'a, FlightRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
