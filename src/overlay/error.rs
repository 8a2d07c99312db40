//! Overlay error types
//!
//! Validation errors are reported before any compositing work starts;
//! the remaining variants are processing failures with stage context.

use thiserror::Error;

/// Errors that can occur while producing an overlay image
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OverlayError {
    /// Request is malformed (missing fields, non-image upload, ...)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Requested font name is not among the discovered fonts
    #[error("Unknown font '{name}'. Available fonts: {}", .available.join(", "))]
    UnknownFont {
        name: String,
        available: Vec<String>,
    },

    /// Uploaded bytes could not be decoded as an image
    #[error("Failed to decode image: {0}")]
    DecodeFailure(String),

    /// No usable font face could be loaded
    #[error("Font unavailable: {0}")]
    FontUnavailable(String),

    /// Compositing or encoding failed
    #[error("Failed to render overlay: {0}")]
    RenderFailure(String),

    /// Processing exceeded the request timeout
    #[error("Processing timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

impl OverlayError {
    /// Maps overlay errors to HTTP status codes
    ///
    /// - InvalidInput, UnknownFont → 400 (Bad Request)
    /// - DecodeFailure, FontUnavailable, RenderFailure → 500 (Internal Server Error)
    /// - Timeout → 504 (Gateway Timeout)
    pub fn to_http_status(&self) -> u16 {
        match self {
            OverlayError::InvalidInput(_) | OverlayError::UnknownFont { .. } => 400,
            OverlayError::DecodeFailure(_)
            | OverlayError::FontUnavailable(_)
            | OverlayError::RenderFailure(_) => 500,
            OverlayError::Timeout { .. } => 504,
        }
    }

    /// Whether the request was rejected before processing began
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.to_http_status())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        OverlayError::InvalidInput(message.into())
    }

    pub fn decode_failed(message: impl Into<String>) -> Self {
        OverlayError::DecodeFailure(message.into())
    }

    pub fn render_failed(stage: &str, message: impl std::fmt::Display) -> Self {
        OverlayError::RenderFailure(format!("{}: {}", stage, message))
    }
}

impl From<crate::fonts::FontError> for OverlayError {
    fn from(err: crate::fonts::FontError) -> Self {
        OverlayError::FontUnavailable(err.to_string())
    }
}
