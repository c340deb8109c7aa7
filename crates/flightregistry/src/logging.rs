//! Tracing setup for applications that embed the registry.
//!
//! The registry only emits `tracing` events under the `flightregistry`
//! target. Nothing is printed until the host installs a subscriber, either
//! its own or the one built by [`init_logging`].

use serde::{Deserialize, Serialize};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// How much of the registry's activity to report.
///
/// Configured through [`crate::config::LoggingConfig`] as a lowercase string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    /// Info and above.
    #[default]
    Normal,
    /// Inserts, removals, updates and ignored duplicates.
    Verbose,
    /// Everything, including misses on remove/update and filter sizes.
    Trace,
}

impl Verbosity {
    /// The most detailed level let through.
    #[must_use]
    pub fn level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::INFO,
            Self::Verbose => Level::DEBUG,
            Self::Trace => Level::TRACE,
        }
    }

    /// Filter directive scoping this level to the registry's target.
    #[must_use]
    pub fn directive(self) -> String {
        let level = match self {
            Self::Quiet => "error",
            Self::Normal => "info",
            Self::Verbose => "debug",
            Self::Trace => "trace",
        };
        format!("flightregistry={level}")
    }
}

/// Build the event filter: `RUST_LOG` when set, else `verbosity`.
#[must_use]
pub fn env_filter(verbosity: Verbosity) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity.directive()))
}

/// Install a formatted stderr subscriber as the global default.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case nothing changes.
///
/// ```no_run
/// use flightregistry::{init_logging, Config};
///
/// let config = Config::load().expect("config");
/// init_logging(config.logging.verbosity);
/// ```
pub fn init_logging(verbosity: Verbosity) -> bool {
    tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .try_init()
        .is_ok()
}

/// Quiet subscriber for unit tests: warnings and errors via the test writer.
#[cfg(test)]
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("warn")
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        let levels: Vec<Level> = [
            Verbosity::Quiet,
            Verbosity::Normal,
            Verbosity::Verbose,
            Verbosity::Trace,
        ]
        .into_iter()
        .map(Verbosity::level)
        .collect();

        assert_eq!(
            levels,
            [Level::ERROR, Level::INFO, Level::DEBUG, Level::TRACE]
        );
    }

    #[test]
    fn test_directive_targets_crate() {
        assert_eq!(Verbosity::Verbose.directive(), "flightregistry=debug");
        assert_eq!(Verbosity::default().directive(), "flightregistry=info");
    }

    #[test]
    fn test_verbosity_from_config_strings() {
        let parsed: Verbosity = serde_json::from_str("\"trace\"").unwrap();
        assert_eq!(parsed, Verbosity::Trace);
        assert_eq!(
            serde_json::to_string(&Verbosity::Quiet).unwrap(),
            "\"quiet\""
        );
        assert!(serde_json::from_str::<Verbosity>("\"Loud\"").is_err());
    }

    #[test]
    fn test_second_init_is_refused() {
        // Whichever call installs first, a subscriber exists afterwards
        init_logging(Verbosity::Verbose);
        assert!(!init_logging(Verbosity::Trace));
    }
}
