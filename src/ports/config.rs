use std::path::PathBuf;

use crate::domain::{AppConfig, DomainError};

/// Configuration store port for persisting and loading app configuration.
pub trait ConfigStore: Send + Sync {
    /// Load configuration from persistent storage.
    /// Creates default config if none exists; falls back to defaults on
    /// unreadable or unparseable content.
    fn load(&self) -> AppConfig;

    /// Save configuration to persistent storage, replacing the previous
    /// record in full.
    fn save(&self, config: &AppConfig) -> Result<(), DomainError>;

    /// Get the path to the configuration file.
    fn config_path(&self) -> PathBuf;

    /// Get the path to the application data directory.
    fn data_dir(&self) -> PathBuf;

    /// Get the path to the logs directory.
    fn logs_dir(&self) -> PathBuf;
}
