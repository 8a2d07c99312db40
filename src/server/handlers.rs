use std::time::Instant;

use axum::extract::{Multipart, State};
use axum::response::{IntoResponse, Response};
use axum::Json;
use http::header;
use http::StatusCode;
use serde_json::json;

use super::endpoints;
use super::form::OverlayForm;
use super::AppState;
use crate::overlay::OverlayError;

/// Attachment name of the composited image
const OUTPUT_FILENAME: &str = "overlay.jpg";

pub async fn root() -> impl IntoResponse {
    Json(endpoints::service_info())
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(endpoints::health(state.start_time))
}

pub async fn fonts(State(state): State<AppState>) -> impl IntoResponse {
    Json(endpoints::font_listing(state.compositor.provider().registry()))
}

pub async fn overlay(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Response, OverlayError> {
    let start = Instant::now();
    let form = OverlayForm::from_multipart(multipart).await?;
    state.compositor.validate_font(form.font.as_deref())?;

    tracing::info!(
        filename = form.filename.as_deref().unwrap_or("-"),
        content_type = %form.image_content_type,
        bytes = form.image.len(),
        quote_chars = form.quote.chars().count(),
        font = form.font.as_deref().unwrap_or("default"),
        "Accepted overlay request"
    );

    let request = form.request();
    let image = form.image;
    let compositor = state.compositor.clone();
    let job = tokio::task::spawn_blocking(move || compositor.overlay_bytes(&image, &request));

    let encoded = match tokio::time::timeout(state.request_timeout, job).await {
        Ok(Ok(result)) => result?,
        Ok(Err(join_error)) => return Err(OverlayError::render_failed("worker", join_error)),
        Err(_) => {
            return Err(OverlayError::Timeout {
                timeout_ms: state.request_timeout.as_millis() as u64,
            })
        }
    };

    tracing::info!(
        output_bytes = encoded.data.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Overlay request completed"
    );

    let disposition = format!("attachment; filename=\"{}\"", OUTPUT_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, encoded.content_type.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        encoded.data,
    )
        .into_response())
}

impl IntoResponse for OverlayError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.to_http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "Overlay request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "Overlay request rejected");
        }

        let body = match &self {
            OverlayError::UnknownFont { name, available } => json!({
                "error": self.to_string(),
                "font": name,
                "available_fonts": available,
            }),
            _ => json!({ "error": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}
