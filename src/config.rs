//! Optional `config.toml` with extraction and UI settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::extract::VibrantExtractor;

const APP_DIR: &str = "picpal";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UiTheme {
    #[default]
    Auto,
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sample every n-th pixel.
    pub quality: usize,
    /// Median-cut color budget.
    pub color_count: usize,
    pub ui_theme: UiTheme,
    pub db_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let extractor = VibrantExtractor::default();
        Self {
            quality: extractor.quality,
            color_count: extractor.color_count,
            ui_theme: UiTheme::Auto,
            db_path: None,
        }
    }
}

impl Config {
    pub fn extractor(&self) -> VibrantExtractor {
        VibrantExtractor {
            quality: self.quality.max(1),
            color_count: self.color_count.max(2),
        }
    }

    /// Where the key-value database lives unless overridden.
    pub fn db_path(&self) -> PathBuf {
        self.db_path
            .clone()
            .unwrap_or_else(|| data_dir().join("picpal.db"))
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("config.toml")
}

pub fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

pub fn log_path() -> PathBuf {
    data_dir().join("picpal.log")
}

/// Load config from `path`, or defaults when the file does not exist.
pub fn load(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn parse(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse("").unwrap(), Config::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config = parse("quality = 2\nui_theme = \"dark\"\n").unwrap();
        assert_eq!(config.quality, 2);
        assert_eq!(config.color_count, 64);
        assert_eq!(config.ui_theme, UiTheme::Dark);
    }

    #[test]
    fn db_path_override() {
        let config = parse("db_path = \"/tmp/x/picpal.db\"").unwrap();
        assert_eq!(config.db_path(), PathBuf::from("/tmp/x/picpal.db"));
    }

    #[test]
    fn bad_theme_is_error() {
        assert!(parse("ui_theme = \"purple\"").is_err());
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn extractor_clamps_degenerate_values() {
        let config = Config {
            quality: 0,
            color_count: 0,
            ..Config::default()
        };
        let extractor = config.extractor();
        assert_eq!(extractor.quality, 1);
        assert_eq!(extractor.color_count, 2);
    }
}
