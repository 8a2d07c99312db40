//! Response bodies for the metadata endpoints.
//!
//! These build plain `serde_json::Value`s so they can be tested without
//! running the HTTP stack.

use std::time::Instant;

use serde_json::{json, Value};

use crate::constants::SERVICE_NAME;
use crate::fonts::FontRegistry;

/// Body for `GET /`.
pub fn service_info() -> Value {
    json!({
        "service": SERVICE_NAME,
        "status": "running",
        "version": env!("CARGO_PKG_VERSION"),
    })
}

/// Body for `GET /health`.
pub fn health(start_time: Instant) -> Value {
    json!({
        "status": "healthy",
        "uptime_seconds": start_time.elapsed().as_secs(),
        "version": env!("CARGO_PKG_VERSION"),
    })
}

/// Body for `GET /fonts`.
pub fn font_listing(registry: &FontRegistry) -> Value {
    let fonts = registry.listings();
    json!({
        "count": fonts.len(),
        "default": registry.default_name(),
        "fonts": fonts,
    })
}
