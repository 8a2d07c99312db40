//! Font discovery.
//!
//! The registry is built once at startup by scanning the configured
//! directories for font files, then shared read-only (`Arc<FontRegistry>`)
//! with everything that needs to resolve a font name.

use crate::config::FontConfig;
use crate::constants::{BUILTIN_FONT_NAME, FONT_DISCOVERY_MAX_DEPTH};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const FONT_EXTENSIONS: &[&str] = &["ttf", "otf", "ttc"];

/// A discovered font file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontEntry {
    /// Lookup name: lowercase file stem
    pub name: String,
    pub path: PathBuf,
}

/// Listing row reported by `GET /fonts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontListing {
    pub name: String,
    pub file: String,
    pub available: bool,
}

/// Read-only mapping from font name to font file.
#[derive(Debug, Clone, Default)]
pub struct FontRegistry {
    fonts: BTreeMap<String, FontEntry>,
    /// Names in the order they were discovered
    scan_order: Vec<String>,
    default_font: Option<String>,
}

/// Normalize a user-supplied font name for lookup.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl FontRegistry {
    /// Scan `config.directories` in order. The first file found for a name wins.
    pub fn discover(config: &FontConfig) -> Self {
        let mut registry = Self::default();

        for dir in &config.directories {
            let mut files = Vec::new();
            collect_font_files(Path::new(dir), 0, &mut files);
            files.sort();

            let before = registry.fonts.len();
            for path in files {
                registry.insert(path);
            }
            tracing::debug!(
                directory = %dir,
                discovered = registry.fonts.len() - before,
                "Scanned font directory"
            );
        }

        registry.default_font = config
            .default_font
            .as_deref()
            .map(normalize_name)
            .filter(|name| registry.fonts.contains_key(name));

        if let (Some(requested), None) = (&config.default_font, &registry.default_font) {
            tracing::warn!(
                default_font = %requested,
                "Configured default font was not discovered, using first available font"
            );
        }

        tracing::info!(
            fonts = registry.fonts.len(),
            default_font = %registry.default_name(),
            "Font discovery complete"
        );

        registry
    }

    /// Build a registry from explicit paths, in priority order.
    pub fn from_paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut registry = Self::default();
        for path in paths {
            registry.insert(path.into());
        }
        registry
    }

    fn insert(&mut self, path: PathBuf) {
        let Some(name) = path.file_stem().and_then(|s| s.to_str()).map(normalize_name) else {
            return;
        };
        if self.fonts.contains_key(&name) {
            return;
        }
        self.scan_order.push(name.clone());
        self.fonts.insert(name.clone(), FontEntry { name, path });
    }

    pub fn get(&self, name: &str) -> Option<&FontEntry> {
        self.fonts.get(&normalize_name(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Discovered font names, sorted.
    pub fn names(&self) -> Vec<String> {
        self.fonts.keys().cloned().collect()
    }

    /// First font found during discovery: directories in configured order,
    /// files within a directory tree in path order.
    pub fn first(&self) -> Option<&FontEntry> {
        self.scan_order.first().and_then(|name| self.fonts.get(name))
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Font used when a request names none: configured default, else the
    /// first discovered font, else the built-in face.
    pub fn default_name(&self) -> String {
        self.default_font
            .clone()
            .or_else(|| self.first().map(|entry| entry.name.clone()))
            .unwrap_or_else(|| BUILTIN_FONT_NAME.to_string())
    }

    /// Configured default font, if it was discovered.
    pub fn configured_default(&self) -> Option<&FontEntry> {
        self.default_font.as_ref().and_then(|name| self.fonts.get(name))
    }

    /// Listing with per-file availability checked now.
    pub fn listings(&self) -> Vec<FontListing> {
        self.fonts
            .values()
            .map(|entry| FontListing {
                name: entry.name.clone(),
                file: entry
                    .path
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                available: entry.path.is_file(),
            })
            .collect()
    }
}

fn has_font_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn collect_font_files(dir: &Path, depth: usize, out: &mut Vec<PathBuf>) {
    if depth > FONT_DISCOVERY_MAX_DEPTH {
        return;
    }

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(directory = %dir.display(), error = %e, "Skipping font directory");
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_font_files(&path, depth + 1, out);
        } else if has_font_extension(&path) {
            out.push(path);
        }
    }
}
