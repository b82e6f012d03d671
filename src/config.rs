use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Placeholder shown on the Welcome tab
pub const DEFAULT_WELCOME_TEXT: &str =
    "Welcome to Text Editor!\n\nPress Ctrl+N for new file or select a file from the tree.";

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default)]
    pub editor: EditorConfig,

    #[serde(default)]
    pub file_explorer: FileExplorerConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

/// Editor behavior configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Interval of the status line refresh tick
    #[serde(default = "default_status_refresh_ms")]
    pub status_refresh_ms: u64,

    /// Read-only text shown on the Welcome tab
    #[serde(default = "default_welcome_text")]
    pub welcome_text: String,

    #[serde(default = "default_true")]
    pub line_numbers: bool,
}

fn default_status_refresh_ms() -> u64 {
    100
}

fn default_welcome_text() -> String {
    DEFAULT_WELCOME_TEXT.to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            status_refresh_ms: default_status_refresh_ms(),
            welcome_text: default_welcome_text(),
            line_numbers: true,
        }
    }
}

/// File explorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileExplorerConfig {
    /// Whether to show hidden files (starting with .)
    #[serde(default = "default_false")]
    pub show_hidden: bool,

    #[serde(default = "default_true")]
    pub show_icons: bool,

    /// Width of the explorer pane in columns
    #[serde(default = "default_explorer_width")]
    pub width: u16,
}

fn default_explorer_width() -> u16 {
    30
}

impl Default for FileExplorerConfig {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_icons: true,
            width: default_explorer_width(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Upper bound on how long a clipboard helper process may run
    #[serde(default = "default_clipboard_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_clipboard_timeout_ms() -> u64 {
    1000
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_clipboard_timeout_ms(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationConfig {
    /// How long a notice stays in the status bar
    #[serde(default = "default_notification_duration_ms")]
    pub duration_ms: u64,
}

fn default_notification_duration_ms() -> u64 {
    3000
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_notification_duration_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            editor: EditorConfig::default(),
            file_explorer: FileExplorerConfig::default(),
            clipboard: ClipboardConfig::default(),
            notifications: NotificationConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// `<config_dir>/tabshell/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("tabshell").join("config.json"))
    }

    /// Load the configuration used at startup
    ///
    /// An explicit path must load. The default location is optional: a missing
    /// file means defaults, a broken one is logged and ignored.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        let Some(path) = Self::default_path().filter(|p| p.exists()) else {
            return Ok(Self::default());
        };

        match Self::load_from_file(&path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring config at {}: {}", path.display(), e);
                Ok(Self::default())
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.editor.status_refresh_ms == 0 {
            return Err(ConfigError::Validation(
                "editor.status_refresh_ms must be greater than 0".to_string(),
            ));
        }

        if self.file_explorer.width == 0 {
            return Err(ConfigError::Validation(
                "file_explorer.width must be greater than 0".to_string(),
            ));
        }

        if self.clipboard.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "clipboard.timeout_ms must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}
