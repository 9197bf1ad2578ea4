use thiserror::Error;
use tracing_subscriber::util::TryInitError;

/// Errors from the driver binary.
///
/// Building a [`crate::Server`] cannot fail; only process setup can.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("logging setup failed: {0}")]
    Logging(#[from] TryInitError),
}
