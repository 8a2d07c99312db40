//! Font discovery and loading.
//!
//! - [`FontRegistry`] maps font names to files found at startup
//! - [`FontProvider`] loads sized handles, walking an explicit fallback chain
//! - [`GlyphFont`] renders TrueType/OpenType outlines with ab_glyph
//! - [`builtin`] embeds DejaVu Sans, the face used when nothing else loads

pub mod builtin;
pub mod glyph;
pub mod provider;
pub mod registry;

#[cfg(test)]
pub(crate) use block::BlockFont;
pub use builtin::{builtin_face, builtin_font, BUILTIN_FONT_DATA};
pub use glyph::GlyphFont;
pub use provider::{FontError, FontFile, FontProvider, FontSource, LoadedFont};
pub use registry::{normalize_name, FontEntry, FontListing, FontRegistry};
