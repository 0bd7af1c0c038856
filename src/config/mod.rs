use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors raised while locating, reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not determine home directory")]
    NoHome,
    #[error("could not determine data directory")]
    NoDataDir,
    #[error("failed to read config from {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write config to {path:?}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

/// Global configuration (stored in ~/.config/kanban/)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// UI theme/colors
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Log level and format
    #[serde(default)]
    pub log: LogConfig,
}

/// Theme configuration with hex colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Border color of the focused column (hex, e.g. "#5f5fd7")
    #[serde(default = "default_color_focused_border")]
    pub color_focused_border: String,

    /// Text color for task titles
    #[serde(default = "default_color_title")]
    pub color_title: String,

    /// Text color for task descriptions
    #[serde(default = "default_color_description")]
    pub color_description: String,

    /// Marker and title color of the selected task
    #[serde(default = "default_color_selected")]
    pub color_selected: String,

    /// Help footer color
    #[serde(default = "default_color_help")]
    pub color_help: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_focused_border: default_color_focused_border(),
            color_title: default_color_title(),
            color_description: default_color_description(),
            color_selected: default_color_selected(),
            color_help: default_color_help(),
        }
    }
}

fn default_color_focused_border() -> String {
    "#5f5fd7".to_string() // xterm 62
}

fn default_color_title() -> String {
    "#dddddd".to_string()
}

fn default_color_description() -> String {
    "#777777".to_string()
}

fn default_color_selected() -> String {
    "#ee6ff8".to_string() // Magenta
}

fn default_color_help() -> String {
    "#626262".to_string() // xterm 241
}

impl ThemeConfig {
    /// Parse a hex color string to RGB tuple
    pub fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some((r, g, b))
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Default filter directive when KANBAN_LOG is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Write JSON lines instead of plain text
    #[serde(default)]
    pub json: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl GlobalConfig {
    /// Load global config from default location
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from an explicit path, falling back to defaults when the
    /// file does not exist
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Save global config to default location
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(write_err)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_err)?;

        Ok(())
    }

    /// Get the path to the global config file
    /// Always uses ~/.config/kanban/ on all platforms
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let home = std::env::var("HOME").map_err(|_| ConfigError::NoHome)?;
        Ok(PathBuf::from(home).join(".config").join("kanban").join("config.toml"))
    }

    /// Get the path to the global data directory (log file lives here)
    pub fn data_dir() -> Result<PathBuf, ConfigError> {
        let dirs = directories::ProjectDirs::from("", "", "kanban").ok_or(ConfigError::NoDataDir)?;
        Ok(dirs.data_dir().to_path_buf())
    }
}
