use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_PROMPT: &str = "Task: ";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasklineConfig {
    /// Text printed before each line is read.
    pub prompt: Option<String>,
    pub show_banner: Option<bool>,
    /// Echo the whole list after a task is added.
    pub list_after_add: Option<bool>,
    /// `tracing` filter directive, e.g. "taskline_core=debug".
    pub log_filter: Option<String>,
}

impl TasklineConfig {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT)
    }

    pub fn show_banner(&self) -> bool {
        self.show_banner.unwrap_or(true)
    }

    pub fn list_after_add(&self) -> bool {
        self.list_after_add.unwrap_or(true)
    }
}

pub fn resolve_user_home_dir() -> Option<PathBuf> {
    for var in ["HOME", "USERPROFILE"] {
        if let Ok(value) = std::env::var(var) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return Some(PathBuf::from(trimmed));
            }
        }
    }
    None
}

pub fn resolve_taskline_home_dir() -> Option<PathBuf> {
    if let Ok(value) = std::env::var("TASKLINE_HOME") {
        let trimmed = value.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    resolve_user_home_dir().map(|home| home.join(".taskline"))
}

pub fn global_config_path() -> Option<PathBuf> {
    resolve_taskline_home_dir().map(|home| home.join("config.toml"))
}

pub fn parse_config(text: &str) -> Result<TasklineConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// Strict load used for an explicitly requested file.
pub fn load_config(path: &Path) -> Result<TasklineConfig, ConfigError> {
    let text = fs::read_to_string(path)?;
    parse_config(&text)
}

/// Best-effort load of the global config; missing or broken files yield defaults.
pub fn load_global_config() -> TasklineConfig {
    let Some(path) = global_config_path() else {
        return TasklineConfig::default();
    };
    if !path.is_file() {
        return TasklineConfig::default();
    }
    match load_config(&path) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "ignoring unreadable config");
            TasklineConfig::default()
        }
    }
}

pub fn resolve_config(explicit: Option<&Path>) -> Result<TasklineConfig, ConfigError> {
    match explicit {
        Some(path) => load_config(path),
        None => Ok(load_global_config()),
    }
}
