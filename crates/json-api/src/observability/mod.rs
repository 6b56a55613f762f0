//! Logging setup and request tracing middleware.

use thiserror::Error;

mod init;
mod logging;
mod request;
mod settings;

pub use init::init;
pub use request::request_logging;

/// Errors raised while initialising logging.
#[derive(Debug, Error)]
pub enum ObservabilityError {
    /// Failed to initialise tracing subscriber.
    #[error("failed to initialise tracing subscriber: {0}")]
    TracingSubscriber(#[from] tracing_subscriber::util::TryInitError),
}
