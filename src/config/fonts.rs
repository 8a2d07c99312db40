//! Font discovery configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_FONT_DIRECTORIES, DEFAULT_SYSTEM_FONT_PATHS};

fn default_directories() -> Vec<String> {
    DEFAULT_FONT_DIRECTORIES.iter().map(|s| s.to_string()).collect()
}

fn default_system_paths() -> Vec<String> {
    DEFAULT_SYSTEM_FONT_PATHS.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FontConfig {
    /// Directories scanned (recursively) for .ttf/.otf/.ttc files, in priority order
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// Font used when a request does not name one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_font: Option<String>,

    /// Font files tried after every discovered font has failed
    #[serde(default = "default_system_paths")]
    pub system_paths: Vec<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            directories: default_directories(),
            default_font: None,
            system_paths: default_system_paths(),
        }
    }
}
