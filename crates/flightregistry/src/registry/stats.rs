//! Summary statistics over a registry.

use std::collections::BTreeMap;

use serde::Serialize;

use super::FlightRegistry;

/// Statistics about the registry contents.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RegistryStats {
    /// Total number of flights held.
    pub total_flights: usize,
    /// Number of flights per status label.
    pub by_status: BTreeMap<String, usize>,
    /// Sum of all durations in minutes, capped at `f64::MAX`.
    pub total_duration_minutes: f64,
    /// Flight number of the longest flight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_flight: Option<String>,
}

impl RegistryStats {
    pub(super) fn collect(registry: &FlightRegistry) -> Self {
        let mut by_status = BTreeMap::new();
        let mut total_duration_minutes = 0.0_f64;

        for flight in registry {
            *by_status.entry(flight.status.clone()).or_insert(0) += 1;
            total_duration_minutes += flight.duration_minutes;
        }
        if !total_duration_minutes.is_finite() {
            total_duration_minutes = f64::MAX;
        }

        Self {
            total_flights: registry.len(),
            by_status,
            total_duration_minutes,
            longest_flight: registry
                .longest_flight()
                .map(|flight| flight.flight_number.clone()),
        }
    }

    /// Number of flights carrying the given status.
    #[must_use]
    pub fn count_for(&self, status: &str) -> usize {
        self.by_status.get(status).copied().unwrap_or(0)
    }
}
