//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default tracing filter when neither `RUST_LOG` nor the config sets one
pub const DEFAULT_LOG_FILTER: &str = "job_application_tui=info";

const LOG_FILE_NAME: &str = "job-application-tui.log";

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Tracing filter directive
    pub log_filter: Option<String>,
    /// Log file path, defaults to the data directory
    pub log_file: Option<String>,
    /// Capture the mouse for wheel scrolling
    pub mouse_capture: Option<bool>,
    /// Show key hints in the status bar
    pub show_help_bar: Option<bool>,
}

impl AppConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("io", "jobform", "job-application-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    /// Write the configuration on first run so there is a file to edit.
    /// Returns the path written, `None` when a file already exists.
    pub fn save_if_missing(&self) -> Result<Option<PathBuf>> {
        match Self::config_path() {
            Some(path) => self.save_if_missing_at(&path),
            None => Ok(None),
        }
    }

    fn save_if_missing_at(&self, path: &Path) -> Result<Option<PathBuf>> {
        if path.exists() {
            return Ok(None);
        }
        self.save_to(path)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(Some(path.to_path_buf()))
    }

    fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }

    /// Where to write logs, `None` when no location is available
    pub fn log_path(&self) -> Option<PathBuf> {
        match &self.log_file {
            Some(file) => Some(PathBuf::from(file)),
            None => Self::project_dirs().map(|dirs| dirs.data_dir().join(LOG_FILE_NAME)),
        }
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    pub fn show_help_bar(&self) -> bool {
        self.show_help_bar.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.log_filter(), DEFAULT_LOG_FILTER);
        assert!(config.mouse_capture());
        assert!(config.show_help_bar());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"show_help_bar": false, "unknown_field": "value"}"#;
        let parsed: AppConfig = serde_json::from_str(json).unwrap();
        assert!(!parsed.show_help_bar());
        assert!(parsed.mouse_capture());
    }

    #[test]
    fn test_log_file_override() {
        let config = AppConfig {
            log_file: Some("/tmp/form.log".to_string()),
            log_filter: Some("debug".to_string()),
            ..Default::default()
        };
        assert_eq!(config.log_path(), Some(PathBuf::from("/tmp/form.log")));
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = std::env::temp_dir().join(format!("job-application-tui-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.json");
        let config = AppConfig {
            mouse_capture: Some(false),
            ..Default::default()
        };

        config.save_to(&path).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_save_if_missing_writes_defaults_once() {
        let dir = std::env::temp_dir().join(format!("job-application-tui-{}", uuid::Uuid::new_v4()));
        let path = dir.join("config.json");

        let written = AppConfig::default().save_if_missing_at(&path).unwrap();
        assert_eq!(written, Some(path.clone()));
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());

        // An existing file is never overwritten
        let custom = AppConfig {
            show_help_bar: Some(false),
            ..Default::default()
        };
        assert_eq!(custom.save_if_missing_at(&path).unwrap(), None);
        assert_eq!(AppConfig::load_from(&path).unwrap(), AppConfig::default());

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_from_invalid_json_fails() {
        let dir = std::env::temp_dir().join(format!("job-application-tui-{}", uuid::Uuid::new_v4()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "not json").unwrap();

        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().starts_with("parsing"));

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn test_load_returns_ok() {
        // Missing file means defaults
        assert!(AppConfig::load().is_ok());
    }
}
