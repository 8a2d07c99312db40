// Error types module

use std::fmt;

/// Top-level error for starting and running the service
///
/// Per-request failures are `overlay::OverlayError`; this type covers
/// everything around them.
#[derive(Debug)]
pub enum ServiceError {
    /// Configuration errors (invalid YAML, missing env vars, failed validation)
    Config(String),

    /// Could not bind or serve on the listen address
    Server { address: String, source: std::io::Error },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ServiceError::Server { address, source } => {
                write!(f, "Server error on {}: {}", address, source)
            }
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::Server { source, .. } => Some(source),
            _ => None,
        }
    }
}
