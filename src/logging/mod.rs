// Logging module for structured logging using the tracing crate

use std::error::Error;

use tracing_subscriber::EnvFilter;

use crate::config::LogFormat;

/// Default filter directive when RUST_LOG is not set
const DEFAULT_FILTER: &str = "info";

/// Initialize the tracing subscriber for structured logging
///
/// The subscriber is configured with:
/// - JSON, pretty or compact formatting, depending on `format`
/// - Filtering from the `RUST_LOG` environment variable (default: `info`)
/// - Output to stdout for container/cloud-native deployments
///
/// Calling this more than once is harmless: later calls leave the first
/// subscriber in place and return `Ok`.
///
/// # Examples
///
/// ```
/// use quote_overlay::config::LogFormat;
/// use quote_overlay::logging::init_subscriber;
///
/// init_subscriber(LogFormat::Compact).expect("Failed to initialize logging");
/// tracing::info!("Application started");
/// ```
pub fn init_subscriber(format: LogFormat) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }

    Ok(())
}
