//! # Property-Based Tests
//!
//! Registry invariants checked over random operation sequences.

use std::collections::BTreeSet;

use flightregistry::{FlightRecord, FlightRegistry};
use proptest::collection::vec;
use proptest::prelude::*;

const STATUSES: [&str; 3] = ["ON_TIME", "DELAYED", "CANCELLED"];

// =============================================================================
// STRATEGIES
// =============================================================================

/// Quarter-minute steps, so equal and fractional durations both show up.
fn arb_duration() -> impl Strategy<Value = f64> {
    (0u32..8_000).prop_map(|quarters| f64::from(quarters) / 4.0)
}

/// Small key space so duplicates are common.
fn arb_record() -> impl Strategy<Value = FlightRecord> {
    (0u32..40, 0usize..STATUSES.len(), arb_duration()).prop_map(|(number, status, duration)| {
        FlightRecord::new(format!("FL{number:03}"), STATUSES[status], duration)
            .with_extra("seq", number)
    })
}

fn build(records: &[FlightRecord]) -> FlightRegistry {
    let mut registry = FlightRegistry::new();
    for record in records {
        registry.insert(record.clone());
    }
    registry
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    /// No two held records share a flight number, and a duplicate insert
    /// leaves the size unchanged.
    #[test]
    fn flight_numbers_stay_unique(records in vec(arb_record(), 0..100)) {
        let mut registry = FlightRegistry::new();
        for record in records {
            let before = registry.len();
            let duplicate = registry.contains(&record.flight_number);
            let inserted = registry.insert(record);

            prop_assert_eq!(inserted, !duplicate);
            prop_assert_eq!(registry.len(), if duplicate { before } else { before + 1 });
        }

        let unique: BTreeSet<&str> = registry
            .iter()
            .map(|flight| flight.flight_number.as_str())
            .collect();
        prop_assert_eq!(unique.len(), registry.len());
    }

    /// Inserting a fresh flight and removing it restores the registry.
    #[test]
    fn insert_then_remove_restores(records in vec(arb_record(), 0..60), duration in arb_duration()) {
        let mut registry = build(&records);
        let before = registry.clone();

        registry.insert(FlightRecord::new("NEW001", "ON_TIME", duration));
        prop_assert_eq!(registry.remove("NEW001"), 1);
        prop_assert_eq!(registry, before);
    }

    /// Filtering returns exactly the matching records in insertion order.
    #[test]
    fn filter_is_ordered_exact_subset(records in vec(arb_record(), 0..100), pick in 0usize..3) {
        let registry = build(&records);
        let wanted = STATUSES[pick];

        let filtered = registry.filter_by_status(wanted);
        let expected: Vec<&FlightRecord> = registry
            .iter()
            .filter(|flight| flight.status == wanted)
            .collect();

        prop_assert_eq!(filtered, expected);
    }

    /// The longest flight is at least as long as every held flight.
    #[test]
    fn longest_flight_is_maximal(records in vec(arb_record(), 0..100)) {
        let registry = build(&records);

        match registry.longest_flight() {
            None => prop_assert!(registry.is_empty()),
            Some(longest) => {
                prop_assert!(registry.contains(&longest.flight_number));
                for flight in &registry {
                    prop_assert!(longest.duration_minutes >= flight.duration_minutes);
                }
            }
        }
    }

    /// Updating a status changes that one field and nothing else.
    #[test]
    fn update_touches_only_status(records in vec(arb_record(), 1..60), target in 0usize..60) {
        let mut registry = build(&records);
        let before = registry.clone();
        let target = before.flights()[target % before.len()].flight_number.clone();

        prop_assert_eq!(registry.update_status(&target, "BOARDING"), 1);

        prop_assert_eq!(registry.len(), before.len());
        for (after, original) in registry.iter().zip(before.iter()) {
            if after.flight_number == target {
                prop_assert_eq!(after.status.as_str(), "BOARDING");
                prop_assert_eq!(after.duration_minutes, original.duration_minutes);
                prop_assert_eq!(&after.extra, &original.extra);
            } else {
                prop_assert_eq!(after, original);
            }
        }
    }
}
