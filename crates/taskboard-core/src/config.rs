use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_COLUMNS: [&str; 3] = ["To Do", "In Progress", "Done"];
const DEFAULT_BOARD_TITLE: &str = "Board";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_columns: Option<Vec<String>>,
    #[serde(default)]
    pub default_board_title: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/taskboard/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("taskboard/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("taskboard\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                if let Ok(content) = std::fs::read_to_string(&config_path) {
                    return Self::from_toml(&content);
                }
            }
        }
        Self::default()
    }

    /// Parse a config file body, falling back to defaults when it is malformed.
    pub fn from_toml(content: &str) -> Self {
        toml::from_str(content).unwrap_or_default()
    }

    pub fn effective_default_columns(&self) -> Vec<String> {
        match self.default_columns.as_deref() {
            Some(columns) if !columns.is_empty() => columns
                .iter()
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect(),
            _ => DEFAULT_COLUMNS.iter().map(|c| c.to_string()).collect(),
        }
    }

    pub fn effective_default_board_title(&self) -> &str {
        self.default_board_title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_BOARD_TITLE)
    }
}
