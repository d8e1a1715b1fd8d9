//! Terminal UI configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info, instrument};

/// Config file looked up when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "gridlock.toml";

/// Settings for the interactive front end.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct TuiConfig {
    /// File that receives log output while the TUI owns the terminal.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,

    /// Color name for X marks.
    #[serde(default = "default_x_color")]
    x_color: String,

    /// Color name for O marks.
    #[serde(default = "default_o_color")]
    o_color: String,

    /// Color for the winning line and the focused cell border.
    #[serde(default = "default_highlight_color")]
    highlight_color: String,

    /// Show the key help footer.
    #[serde(default = "default_show_help")]
    show_help: bool,
}

fn default_log_file() -> PathBuf {
    PathBuf::from("gridlock.log")
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_x_color() -> String {
    "blue".to_string()
}

fn default_o_color() -> String {
    "yellow".to_string()
}

fn default_highlight_color() -> String {
    "lightyellow".to_string()
}

fn default_show_help() -> bool {
    true
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            log_filter: default_log_filter(),
            x_color: default_x_color(),
            o_color: default_o_color(),
            highlight_color: default_highlight_color(),
            show_help: default_show_help(),
        }
    }
}

impl TuiConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        // Surface bad color names at load time rather than on first draw.
        config.theme()?;
        Ok(config)
    }

    /// Resolves the config to use.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => Self::from_file(DEFAULT_CONFIG_PATH),
            None => {
                info!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parses the configured color names.
    pub fn theme(&self) -> Result<Theme, ConfigError> {
        Ok(Theme {
            x: parse_color(&self.x_color)?,
            o: parse_color(&self.o_color)?,
            highlight: parse_color(&self.highlight_color)?,
        })
    }
}

fn parse_color(name: &str) -> Result<Color, ConfigError> {
    Color::from_str(name).map_err(|_| ConfigError::new(format!("Unknown color: {}", name)))
}

/// Resolved colors for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// X marks.
    pub x: Color,
    /// O marks.
    pub o: Color,
    /// Winning line and focus border.
    pub highlight: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            x: Color::Blue,
            o: Color::Yellow,
            highlight: Color::LightYellow,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme_matches_default_config() {
        let theme = TuiConfig::default().theme().expect("default colors parse");
        assert_eq!(theme, Theme::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = TuiConfig::from_toml("x_color = \"red\"\nshow_help = false\n").expect("parse");
        assert_eq!(config.x_color(), "red");
        assert!(!*config.show_help());
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.theme().expect("theme").x, Color::Red);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let err = TuiConfig::from_toml("o_color = \"ultraviolet\"").unwrap_err();
        assert!(err.message.contains("ultraviolet"));
    }
}
