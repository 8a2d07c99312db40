//! Multipart form parsing for `POST /overlay`.
//!
//! All parts are read before anything is validated so that a rejected
//! request still consumes its body. Nothing here decodes image data.

use axum::body::Bytes;
use axum::extract::Multipart;

use crate::overlay::{is_image_content_type, OverlayError, OverlayRequest};

/// Parsed and validated overlay upload.
#[derive(Debug, Clone)]
pub struct OverlayForm {
    pub image: Bytes,
    pub image_content_type: String,
    pub filename: Option<String>,
    pub quote: String,
    pub attribution: String,
    pub font: Option<String>,
}

fn multipart_error(e: impl std::fmt::Display) -> OverlayError {
    OverlayError::invalid_input(format!("Malformed multipart body: {}", e))
}

impl OverlayForm {
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self, OverlayError> {
        let mut image: Option<(Bytes, String, Option<String>)> = None;
        let mut quote = None;
        let mut attribution = None;
        let mut font = None;

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();
            match name.as_str() {
                "image" | "file" => {
                    let content_type = field.content_type().unwrap_or_default().to_string();
                    let filename = field.file_name().map(str::to_string);
                    let data = field.bytes().await.map_err(multipart_error)?;
                    image = Some((data, content_type, filename));
                }
                "quote" => quote = Some(field.text().await.map_err(multipart_error)?),
                "attribution" => attribution = Some(field.text().await.map_err(multipart_error)?),
                "font" => font = Some(field.text().await.map_err(multipart_error)?),
                other => {
                    tracing::debug!(field = %other, "Ignoring unknown multipart field");
                }
            }
        }

        let (image, image_content_type, filename) =
            image.ok_or_else(|| OverlayError::invalid_input("Missing 'image' file part"))?;

        if !is_image_content_type(&image_content_type) {
            return Err(OverlayError::invalid_input(format!(
                "File must be an image (image/*), got content type '{}'",
                image_content_type
            )));
        }

        let quote = quote.ok_or_else(|| OverlayError::invalid_input("Missing 'quote' field"))?;
        let attribution = attribution
            .ok_or_else(|| OverlayError::invalid_input("Missing 'attribution' field"))?;

        Ok(Self {
            image,
            image_content_type,
            filename,
            quote,
            attribution,
            font: font
                .map(|f| f.trim().to_string())
                .filter(|f| !f.is_empty()),
        })
    }

    /// Text portion of the form as a compositor request.
    pub fn request(&self) -> OverlayRequest {
        OverlayRequest {
            quote: self.quote.clone(),
            attribution: self.attribution.clone(),
            font: self.font.clone(),
        }
    }
}
