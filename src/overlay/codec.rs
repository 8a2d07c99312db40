//! Image decoding and JPEG encoding for the overlay pipeline.

use super::error::OverlayError;
use image::io::Reader as ImageReader;
use image::DynamicImage;
use std::io::Cursor;

/// Content-Type of encoded overlay output
pub const JPEG_CONTENT_TYPE: &str = "image/jpeg";

/// Result of encoding an image
#[derive(Debug)]
pub struct EncodedImage {
    /// The encoded image data
    pub data: Vec<u8>,
    /// Output dimensions (width, height)
    pub size: (u32, u32),
    /// Content-Type header value
    pub content_type: &'static str,
}

/// Decode uploaded bytes into a DynamicImage, guessing the format from content.
pub fn decode(data: &[u8]) -> Result<DynamicImage, OverlayError> {
    if data.is_empty() {
        return Err(OverlayError::decode_failed("image data is empty"));
    }

    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| OverlayError::decode_failed(e.to_string()))?
        .decode()
        .map_err(|e| OverlayError::decode_failed(e.to_string()))
}

/// Encode an image as baseline JPEG at the given quality (1-100).
///
/// Any alpha channel is dropped; callers flatten first.
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<EncodedImage, OverlayError> {
    use image::codecs::jpeg::JpegEncoder;
    use image::ImageEncoder as _;

    let rgb = image.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut output = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut output, quality.clamp(1, 100));

    encoder
        .write_image(rgb.as_raw(), width, height, image::ColorType::Rgb8)
        .map_err(|e| OverlayError::render_failed("jpeg encode", e))?;

    Ok(EncodedImage {
        data: output.into_inner(),
        size: (width, height),
        content_type: JPEG_CONTENT_TYPE,
    })
}

/// Whether a Content-Type names an image (`image/*`).
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .strip_prefix("image/")
        .map(|subtype| !subtype.is_empty())
        .unwrap_or(false)
}
