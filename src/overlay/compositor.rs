//! Overlay compositor: the wrap → layout → render pipeline.
//!
//! # Example
//!
//! ```ignore
//! use quote_overlay::overlay::{OverlayCompositor, OverlayRequest};
//!
//! let compositor = OverlayCompositor::new(provider);
//! let request = OverlayRequest::new("Stay hungry, stay foolish", "Steve Jobs");
//! let jpeg = compositor.overlay_bytes(&upload, &request)?;
//! ```

use super::codec::{self, EncodedImage};
use super::error::OverlayError;
use super::layout::{self, ImageDimensions};
use super::renderer::{self, BoxFill};
use super::wrap::wrap;
use crate::constants::{
    ATTRIBUTION_FONT_DIVISOR, DEFAULT_JPEG_QUALITY, MIN_ATTRIBUTION_FONT_PX, MIN_QUOTE_FONT_PX,
    QUOTE_FONT_DIVISOR,
};
use crate::fonts::FontProvider;
use image::DynamicImage;
use std::sync::Arc;
use std::time::Instant;

/// Text to place on an image.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayRequest {
    pub quote: String,
    pub attribution: String,
    /// Font name; `None` uses the default font
    pub font: Option<String>,
}

impl OverlayRequest {
    pub fn new(quote: impl Into<String>, attribution: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            attribution: attribution.into(),
            font: None,
        }
    }

    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = Some(font.into());
        self
    }
}

/// Quote and attribution pixel sizes for an image of the given width.
pub fn font_sizes(image_width: u32) -> (f32, f32) {
    let quote = (image_width / QUOTE_FONT_DIVISOR).max(MIN_QUOTE_FONT_PX);
    let attribution = (image_width / ATTRIBUTION_FONT_DIVISOR).max(MIN_ATTRIBUTION_FONT_PX);
    (quote as f32, attribution as f32)
}

/// Composites quote overlays. Cheap to clone; shares the font provider.
#[derive(Debug, Clone)]
pub struct OverlayCompositor {
    provider: Arc<FontProvider>,
    jpeg_quality: u8,
}

impl OverlayCompositor {
    pub fn new(provider: Arc<FontProvider>) -> Self {
        Self {
            provider,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn provider(&self) -> &FontProvider {
        &self.provider
    }

    pub fn jpeg_quality(&self) -> u8 {
        self.jpeg_quality
    }

    /// Reject font names that were not discovered.
    pub fn validate_font(&self, font: Option<&str>) -> Result<(), OverlayError> {
        match font {
            Some(name) if !self.provider.registry().contains(name) => {
                Err(OverlayError::UnknownFont {
                    name: name.to_string(),
                    available: self.provider.registry().names(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Draw the quote box onto a copy of `image`.
    pub fn compose(
        &self,
        image: &DynamicImage,
        request: &OverlayRequest,
    ) -> Result<DynamicImage, OverlayError> {
        let dims = ImageDimensions::new(image.width(), image.height());
        let (quote_px, attribution_px) = font_sizes(dims.width);

        let font_name = request.font.as_deref();
        let quote_font = self.provider.load_with_fallback(font_name, quote_px)?;
        let attribution_font = self.provider.load_with_fallback(font_name, attribution_px)?;

        let lines = wrap(
            &request.quote,
            quote_font.handle.as_ref(),
            layout::text_width_limit(dims.width),
        );

        let layout = layout::layout(
            dims,
            &lines,
            &request.attribution,
            &quote_font.handle,
            &attribution_font.handle,
        );

        tracing::debug!(
            image_width = dims.width,
            image_height = dims.height,
            font = %quote_font.source,
            quote_px,
            attribution_px,
            lines = lines.len(),
            box_x = layout.geometry.x,
            box_y = layout.geometry.y,
            box_width = layout.geometry.width,
            box_height = layout.geometry.height,
            "Computed overlay layout"
        );

        renderer::render(image, &layout.geometry, &layout.instructions, BoxFill::grey())
    }

    /// Draw only the translucent black box, without text.
    pub fn compose_box(&self, image: &DynamicImage) -> Result<DynamicImage, OverlayError> {
        let geometry =
            layout::box_only_geometry(ImageDimensions::new(image.width(), image.height()));
        renderer::render(image, &geometry, &[], BoxFill::black())
    }

    /// Decode, compose and encode to JPEG.
    pub fn overlay_bytes(
        &self,
        data: &[u8],
        request: &OverlayRequest,
    ) -> Result<EncodedImage, OverlayError> {
        let start = Instant::now();
        let image = codec::decode(data)?;
        let composed = self.compose(&image, request)?;
        let encoded = codec::encode_jpeg(&composed, self.jpeg_quality)?;

        tracing::info!(
            width = encoded.size.0,
            height = encoded.size.1,
            input_bytes = data.len(),
            output_bytes = encoded.data.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Composited quote overlay"
        );

        Ok(encoded)
    }

    /// Decode, draw the box-only variant and encode to JPEG.
    pub fn box_bytes(&self, data: &[u8]) -> Result<EncodedImage, OverlayError> {
        let image = codec::decode(data)?;
        let composed = self.compose_box(&image)?;
        codec::encode_jpeg(&composed, self.jpeg_quality)
    }
}
