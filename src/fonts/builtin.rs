//! Built-in fallback face.
//!
//! DejaVu Sans is compiled into the binary (license in
//! `DejaVuSans-LICENSE.txt`) so that text stays readable when no font file
//! on disk can be loaded.

use super::glyph::GlyphFont;
use super::provider::FontError;
use ab_glyph::{FontArc, InvalidFont};
use std::sync::OnceLock;

/// Embedded DejaVu Sans font data.
pub const BUILTIN_FONT_DATA: &[u8] = include_bytes!("DejaVuSans.ttf");

static BUILTIN_FACE: OnceLock<Result<FontArc, InvalidFont>> = OnceLock::new();

/// The parsed built-in face, parsed once and shared afterwards.
pub fn builtin_face() -> Result<FontArc, FontError> {
    BUILTIN_FACE
        .get_or_init(|| FontArc::try_from_slice(BUILTIN_FONT_DATA))
        .clone()
        .map_err(|e| FontError::Builtin(e.to_string()))
}

/// The built-in face at `px` pixels.
pub fn builtin_font(px: f32) -> Result<GlyphFont, FontError> {
    Ok(GlyphFont::new(builtin_face()?, px))
}
