//! Font loading with an explicit fallback chain.
//!
//! A font request is turned into an ordered list of [`FontSource`]s which are
//! tried one by one:
//!
//! 1. the named font (or the configured default when no name is given)
//! 2. the first discovered font
//! 3. each well-known system font path
//! 4. the built-in face compiled into the binary

use super::builtin::builtin_font;
use super::glyph::GlyphFont;
use super::registry::FontRegistry;
use crate::config::FontConfig;
use crate::overlay::font::SharedFont;
use ab_glyph::FontArc;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Errors from resolving or loading a single font source
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FontError {
    #[error("Font '{0}' not found")]
    NotFound(String),

    #[error("No fonts were discovered")]
    NoneDiscovered,

    #[error("Failed to read font file {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse font file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Built-in font failed to load: {0}")]
    Builtin(String),
}

/// A resolved font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub name: String,
    pub path: PathBuf,
}

/// One step of the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    Named(String),
    FirstDiscovered,
    SystemPath(PathBuf),
    BuiltIn,
}

impl fmt::Display for FontSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FontSource::Named(name) => write!(f, "named:{}", name),
            FontSource::FirstDiscovered => write!(f, "first-discovered"),
            FontSource::SystemPath(path) => write!(f, "system:{}", path.display()),
            FontSource::BuiltIn => write!(f, "builtin"),
        }
    }
}

/// A loaded handle and the chain step that produced it.
#[derive(Debug, Clone)]
pub struct LoadedFont {
    pub handle: SharedFont,
    pub source: FontSource,
}

/// Resolves font names against the registry and loads sized handles.
///
/// Parsed faces are kept per file so that each file is read at most once;
/// handles at different sizes share the same face.
pub struct FontProvider {
    registry: Arc<FontRegistry>,
    system_paths: Vec<PathBuf>,
    faces: RwLock<HashMap<PathBuf, FontArc>>,
}

impl fmt::Debug for FontProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontProvider")
            .field("fonts", &self.registry.len())
            .field("system_paths", &self.system_paths)
            .field("loaded_faces", &self.faces.read().len())
            .finish()
    }
}

impl FontProvider {
    pub fn new(registry: Arc<FontRegistry>, system_paths: Vec<PathBuf>) -> Self {
        Self {
            registry,
            system_paths,
            faces: RwLock::new(HashMap::new()),
        }
    }

    pub fn from_config(registry: Arc<FontRegistry>, config: &FontConfig) -> Self {
        Self::new(
            registry,
            config.system_paths.iter().map(PathBuf::from).collect(),
        )
    }

    pub fn registry(&self) -> &FontRegistry {
        &self.registry
    }

    /// Look up a discovered font by name.
    pub fn resolve(&self, name: &str) -> Result<FontFile, FontError> {
        self.registry
            .get(name)
            .map(|entry| FontFile {
                name: entry.name.clone(),
                path: entry.path.clone(),
            })
            .ok_or_else(|| FontError::NotFound(name.to_string()))
    }

    /// Load `file` at `px` pixels.
    pub fn load(&self, file: &FontFile, px: f32) -> Result<SharedFont, FontError> {
        let face = self.face(&file.path)?;
        Ok(Arc::new(GlyphFont::new(face, px)))
    }

    /// Ordered fallback chain for a request naming `name` (or none).
    pub fn chain_for(&self, name: Option<&str>) -> Vec<FontSource> {
        let mut chain = Vec::with_capacity(self.system_paths.len() + 3);

        match name {
            Some(name) => chain.push(FontSource::Named(name.to_string())),
            None => {
                if let Some(entry) = self.registry.configured_default() {
                    chain.push(FontSource::Named(entry.name.clone()));
                }
            }
        }

        chain.push(FontSource::FirstDiscovered);
        chain.extend(self.system_paths.iter().cloned().map(FontSource::SystemPath));
        chain.push(FontSource::BuiltIn);
        chain
    }

    /// Walk the fallback chain until a source loads.
    ///
    /// The chain ends with the embedded face, so this only fails when the
    /// embedded font data itself is unusable; the last error is returned.
    pub fn load_with_fallback(&self, name: Option<&str>, px: f32) -> Result<LoadedFont, FontError> {
        let mut last_error = FontError::NoneDiscovered;

        for source in self.chain_for(name) {
            match self.try_source(&source, px) {
                Ok(handle) => return Ok(LoadedFont { handle, source }),
                Err(e) => {
                    tracing::warn!(source = %source, error = %e, "Font source unavailable, falling back");
                    last_error = e;
                }
            }
        }

        Err(last_error)
    }

    fn try_source(&self, source: &FontSource, px: f32) -> Result<SharedFont, FontError> {
        match source {
            FontSource::Named(name) => self.load(&self.resolve(name)?, px),
            FontSource::FirstDiscovered => {
                let entry = self.registry.first().ok_or(FontError::NoneDiscovered)?;
                let file = FontFile {
                    name: entry.name.clone(),
                    path: entry.path.clone(),
                };
                self.load(&file, px)
            }
            FontSource::SystemPath(path) => {
                let face = self.face(path)?;
                Ok(Arc::new(GlyphFont::new(face, px)))
            }
            FontSource::BuiltIn => Ok(Arc::new(builtin_font(px)?)),
        }
    }

    fn face(&self, path: &Path) -> Result<FontArc, FontError> {
        if let Some(face) = self.faces.read().get(path) {
            return Ok(face.clone());
        }

        let data = std::fs::read(path).map_err(|e| FontError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let face = FontArc::try_from_vec(data).map_err(|e| FontError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "Loaded font face");
        self.faces
            .write()
            .entry(path.to_path_buf())
            .or_insert(face.clone());
        Ok(face)
    }
}
