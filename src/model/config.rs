//! Application configuration.
//!
//! Strongly-typed structures mapping to `config.toml`. Defaults give a
//! 50x50 grid rendered with `#` for active cells.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::ui::lang::Language;

/// Grid dimensions handed to the engine.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GridConfig {
    pub rows: usize,
    pub cols: usize,
}

/// How a finished grid is rendered.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DisplayConfig {
    pub alive_glyph: char,
    pub dead_glyph: char,
    pub language: Language,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AppConfig {
    pub grid: GridConfig,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig { rows: 50, cols: 50 },
            display: DisplayConfig {
                alive_glyph: '#',
                dead_glyph: '.',
                language: Language::English,
            },
        }
    }
}

impl AppConfig {
    /// Loads configuration from `path`, falling back to defaults when the
    /// file does not exist. A file that exists but fails to parse is an
    /// error, not a silent fallback.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("parsing config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_fifty_by_fifty() {
        let config = AppConfig::default();
        assert_eq!(config.grid.rows, 50);
        assert_eq!(config.grid.cols, 50);
        assert_eq!(config.display.alive_glyph, '#');
        assert_eq!(config.display.language, Language::English);
    }

    #[test]
    fn toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.grid.rows, config.grid.rows);
        assert_eq!(back.display.dead_glyph, config.display.dead_glyph);
    }

    #[test]
    fn load_missing_file_yields_defaults() {
        let config = AppConfig::load(Path::new("/nonexistent/elementum.toml")).unwrap();
        assert_eq!(config.grid.cols, 50);
    }

    #[test]
    fn load_rejects_malformed_file() {
        let path = std::env::temp_dir().join(format!("elementum-bad-{}.toml", std::process::id()));
        fs::write(&path, "grid = \"not a table\"").unwrap();
        let result = AppConfig::load(&path);
        let _ = fs::remove_file(&path);
        assert!(result.is_err());
    }

    #[test]
    fn language_parses_from_lowercase() {
        let config: AppConfig = toml::from_str(
            r##"
            [grid]
            rows = 10
            cols = 21

            [display]
            alive_glyph = "#"
            dead_glyph = " "
            language = "french"
            "##,
        )
        .unwrap();
        assert_eq!(config.display.language, Language::French);
        assert_eq!(config.grid.cols, 21);
    }
}
