//! Configuration module for mediaman.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::{MediaError, Result};

/// Storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory of the managed media tree.
    #[serde(default = "default_storage_root")]
    pub root: String,
    /// Public URL prefix under which the media tree is served.
    #[serde(default = "default_public_url")]
    pub public_url: String,
}

fn default_storage_root() -> String {
    "data/media".to_string()
}

fn default_public_url() -> String {
    "/storage".to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root: default_storage_root(),
            public_url: default_public_url(),
        }
    }
}

/// A file type detection rule: the first rule whose pattern matches the
/// file extension determines the type. Patterns are anchored, pipe-separated
/// extension alternations, matched case-insensitively (e.g. `jpg|jpeg|png`).
#[derive(Debug, Clone, Deserialize)]
pub struct FileTypeRule {
    /// Type name (e.g. `image`).
    pub name: String,
    /// Extension alternation pattern (e.g. `jpg|jpeg|png`).
    pub pattern: String,
}

/// Display configuration for the listing UI.
#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    /// Route path used to build listing links (`<route_path>?path=...`).
    #[serde(default = "default_route_path")]
    pub route_path: String,
    /// Timezone for displaying timestamps (e.g. "Europe/Paris", "UTC").
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// chrono format template for the displayed modification time.
    #[serde(default = "default_date_format")]
    pub date_format: String,
    /// Ordered file type detection rules; first match wins.
    #[serde(default = "default_filetypes")]
    pub filetypes: Vec<FileTypeRule>,
    /// Type name to icon identifier map. Every detectable type, including
    /// the `file` fallback, must be mapped.
    #[serde(default = "default_icons")]
    pub icons: HashMap<String, String>,
}

fn default_route_path() -> String {
    "/media".to_string()
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_date_format() -> String {
    "%Y/%m/%d %H:%M".to_string()
}

fn default_filetypes() -> Vec<FileTypeRule> {
    [
        ("image", "jpg|jpeg|png|gif|svg|bmp|tif|tiff|webp"),
        ("video", "mp4|m4v|avi|mov|mpg|mpeg|mkv|webm"),
        ("audio", "mp3|wav|ogg|aac|flac"),
        ("pdf", "pdf"),
        ("word", "doc|docx|odt"),
        ("excel", "xls|xlsx|csv|ods"),
        ("powerpoint", "ppt|pptx|odp"),
        ("archive", "zip|rar|gz|tar|7z"),
    ]
    .into_iter()
    .map(|(name, pattern)| FileTypeRule {
        name: name.to_string(),
        pattern: pattern.to_string(),
    })
    .collect()
}

fn default_icons() -> HashMap<String, String> {
    [
        ("image", "fa-file-image"),
        ("video", "fa-file-video"),
        ("audio", "fa-file-audio"),
        ("pdf", "fa-file-pdf"),
        ("word", "fa-file-word"),
        ("excel", "fa-file-excel"),
        ("powerpoint", "fa-file-powerpoint"),
        ("archive", "fa-file-archive"),
        ("file", "fa-file"),
        ("folder", "fa-folder"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            route_path: default_route_path(),
            timezone: default_timezone(),
            date_format: default_date_format(),
            filetypes: default_filetypes(),
            icons: default_icons(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Path to the log file.
    #[serde(default = "default_log_file")]
    pub file: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_file() -> String {
    "logs/mediaman.log".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: default_log_file(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Storage configuration.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Display configuration.
    #[serde(default)]
    pub display: DisplayConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            MediaError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        toml::from_str(&content)
            .map_err(|e| MediaError::Config(format!("invalid TOML in {}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.storage.root, "data/media");
        assert_eq!(config.storage.public_url, "/storage");
        assert_eq!(config.display.route_path, "/media");
        assert_eq!(config.display.timezone, "UTC");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_default_filetypes_ordered() {
        let config = Config::default();
        assert_eq!(config.display.filetypes[0].name, "image");
        assert_eq!(config.display.filetypes[3].name, "pdf");
    }

    #[test]
    fn test_default_icons_cover_fallback() {
        let config = Config::default();
        // Every configured type plus the fallback must have an icon.
        assert!(config.display.icons.contains_key("file"));
        for rule in &config.display.filetypes {
            assert!(
                config.display.icons.contains_key(&rule.name),
                "missing icon for {}",
                rule.name
            );
        }
    }

    #[test]
    fn test_parse_partial_toml() {
        let toml_str = r#"
            [storage]
            root = "/srv/media"

            [display]
            timezone = "Europe/Paris"

            [[display.filetypes]]
            name = "image"
            pattern = "jpg|png"
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.storage.root, "/srv/media");
        // Unspecified fields fall back to defaults.
        assert_eq!(config.storage.public_url, "/storage");
        assert_eq!(config.display.timezone, "Europe/Paris");
        assert_eq!(config.display.filetypes.len(), 1);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/mediaman.toml");
        assert!(matches!(result, Err(MediaError::Config(_))));
    }
}
