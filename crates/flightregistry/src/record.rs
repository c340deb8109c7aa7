//! Core flight record type for flightregistry.
//!
//! A [`FlightRecord`] has three typed required fields and an open map of
//! passthrough fields that the registry keeps but never interprets.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};

/// Key of the unique flight identifier.
pub const FLIGHT_NUMBER: &str = "flight_number";

/// Key of the status label.
pub const STATUS: &str = "status";

/// Key of the flight duration in minutes.
pub const DURATION_MINUTES: &str = "duration_minutes";

const REQUIRED_FIELDS: [&str; 3] = [FLIGHT_NUMBER, STATUS, DURATION_MINUTES];

/// Commonly seen status labels.
///
/// Status is free-form; these are conveniences, not an exhaustive set.
pub mod status {
    /// The flight is running on schedule.
    pub const ON_TIME: &str = "ON_TIME";
    /// The flight is running late.
    pub const DELAYED: &str = "DELAYED";
    /// The flight will not operate.
    pub const CANCELLED: &str = "CANCELLED";
}

/// A single flight held by the registry.
///
/// Serializes as one flat object: the required keys followed by any extra
/// fields. Deserialization goes through [`FlightRecord::from_value`], so a
/// missing or mistyped required key is reported as
/// [`Error::MalformedRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value")]
pub struct FlightRecord {
    /// Unique identifier among all records in a registry.
    pub flight_number: String,

    /// Free-form status label, e.g. [`status::ON_TIME`].
    pub status: String,

    /// Duration of the flight in minutes, finite and non-negative.
    pub duration_minutes: f64,

    /// Passthrough fields such as departure and arrival times.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FlightRecord {
    /// Create a record with no extra fields.
    #[must_use]
    pub fn new(
        flight_number: impl Into<String>,
        status: impl Into<String>,
        duration_minutes: f64,
    ) -> Self {
        Self {
            flight_number: flight_number.into(),
            status: status.into(),
            duration_minutes,
            extra: Map::new(),
        }
    }

    /// Attach a passthrough field.
    ///
    /// Keys naming a required field are ignored; use the typed fields instead.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if REQUIRED_FIELDS.contains(&key.as_str()) {
            warn!(
                "Ignoring extra field '{}' on flight {}: it names a required field",
                key, self.flight_number
            );
        } else {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Look up a passthrough field.
    #[must_use]
    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Check whether this record carries exactly the given status.
    #[must_use]
    pub fn has_status(&self, status: &str) -> bool {
        self.status == status
    }

    /// Build a record from a generic key/value structure.
    ///
    /// Required keys are validated eagerly; every other key is kept in
    /// [`FlightRecord::extra`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRecord`] if the value is not an object, or a
    /// required key is absent or has the wrong type.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(mut fields) = value else {
            return Err(Error::invalid_field("<root>", "must be a key/value object"));
        };

        let flight_number = take_string(&mut fields, FLIGHT_NUMBER)?;
        let status = take_string(&mut fields, STATUS)?;
        let duration_minutes = match fields.remove(DURATION_MINUTES) {
            Some(Value::Number(n)) => n
                .as_f64()
                .filter(|minutes| minutes.is_finite() && *minutes >= 0.0)
                .ok_or_else(|| {
                    Error::invalid_field(DURATION_MINUTES, "must be a non-negative number")
                })?,
            Some(_) => {
                return Err(Error::invalid_field(
                    DURATION_MINUTES,
                    "must be a non-negative number",
                ))
            }
            None => return Err(Error::missing_field(DURATION_MINUTES)),
        };

        Ok(Self {
            flight_number,
            status,
            duration_minutes,
            extra: fields,
        })
    }

    /// Parse a record from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for invalid JSON and [`Error::MalformedRecord`]
    /// for a well-formed document that is not a valid record.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }
}

impl TryFrom<Value> for FlightRecord {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_value(value)
    }
}

fn take_string(fields: &mut Map<String, Value>, key: &'static str) -> Result<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(Error::invalid_field(key, "must be a string")),
        None => Err(Error::missing_field(key)),
    }
}
