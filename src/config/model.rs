//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no config file
//! at all, or with any subset of sections present.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Snapshot storage settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the default snapshot path (`<data_dir>/quickdo/todos.json`).
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

/// UI appearance settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "default_true")]
    pub show_completed_count: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: default_timestamp_format(),
            show_completed_count: true,
        }
    }
}

/// Diagnostic logging settings. Logs go to a file in the data directory
/// because the terminal itself is occupied by the UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_timestamp_format() -> String {
    "%H:%M".to_string()
}
fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_parses_with_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert!(config.storage.data_file.is_none());
        assert_eq!(config.ui.timestamp_format, "%H:%M");
        assert!(config.ui.show_completed_count);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [storage]
            data_file = "/tmp/my-todos.json"

            [logging]
            enabled = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config.storage.data_file.as_deref(),
            Some(std::path::Path::new("/tmp/my-todos.json"))
        );
        assert!(config.logging.enabled);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.ui.timestamp_format, "%H:%M");
    }
}
