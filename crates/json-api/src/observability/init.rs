//! Tracing subscriber lifecycle management.

use crate::config::observability::LoggingConfig;

use super::{ObservabilityError, logging, settings};

/// Install the global subscriber and apply request-logging settings.
///
/// # Errors
///
/// Returns an error when a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), ObservabilityError> {
    settings::apply_runtime_config(config);

    logging::init_subscriber(config)
}
