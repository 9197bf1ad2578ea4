use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::error::AppError;

const DEFAULT_FILTER: &str = "functional_options=info";

/// Install a `fmt` subscriber filtered by `RUST_LOG`.
///
/// Falls back to `functional_options=info` when `RUST_LOG` is unset or
/// unparsable. Fails if a global subscriber is already installed.
pub fn init() -> Result<(), AppError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}
