//! `flightregistry` - An in-memory registry of flight records
//!
//! This library keeps flight records in insertion order, rejects duplicate
//! flight numbers silently, and answers status filters and longest-flight
//! queries with linear scans.
//!
//! ```
//! use flightregistry::{status, FlightRecord, FlightRegistry};
//!
//! let mut registry = FlightRegistry::new();
//! registry.insert(
//!     FlightRecord::new("AZ001", status::ON_TIME, 675.0)
//!         .with_extra("departure_time", "2025-02-19 15:30"),
//! );
//! registry.insert(FlightRecord::new("AZ002", status::DELAYED, 300.0));
//!
//! assert_eq!(registry.longest_flight().unwrap().flight_number, "AZ001");
//!
//! registry.update_status("AZ002", status::ON_TIME);
//! assert_eq!(registry.filter_by_status(status::ON_TIME).len(), 2);
//!
//! registry.remove("AZ001");
//! assert_eq!(registry.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod logging;
pub mod record;
pub mod registry;

pub use config::Config;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use record::{status, FlightRecord};
pub use registry::{FlightRegistry, RegistryStats};
