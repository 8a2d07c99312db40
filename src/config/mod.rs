// Configuration module

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub mod fonts;
pub mod server;

pub use fonts::FontConfig;
pub use server::ServerConfig;

/// Log output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per line, for log aggregation
    #[default]
    Json,
    /// Human-readable multi-line output
    Pretty,
    /// Human-readable single-line output
    Compact,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub fonts: FontConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, String> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").map_err(|e| e.to_string())?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                )
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        // An empty document means "all defaults"
        if substituted.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&substituted).map_err(|e| e.to_string())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config file: {}", e))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.server.address.trim().is_empty() {
            return Err("Server address cannot be empty".to_string());
        }

        if self.server.port == 0 {
            return Err("Server port must be between 1 and 65535".to_string());
        }

        if self.server.request_timeout == 0 {
            return Err("Request timeout must be > 0 seconds".to_string());
        }

        if self.server.max_body_size == 0 {
            return Err("max_body_size must be > 0 bytes".to_string());
        }

        for (idx, dir) in self.fonts.directories.iter().enumerate() {
            if dir.trim().is_empty() {
                return Err(format!("Font directory at index {} is empty", idx));
            }
        }

        for (idx, path) in self.fonts.system_paths.iter().enumerate() {
            if path.trim().is_empty() {
                return Err(format!("System font path at index {} is empty", idx));
            }
        }

        if let Some(default_font) = &self.fonts.default_font {
            if default_font.trim().is_empty() {
                return Err("default_font cannot be an empty string".to_string());
            }
        }

        Ok(())
    }
}
