use std::fs;
use std::path::PathBuf;

use tracing::{debug, info, warn};

use crate::domain::{AppConfig, DomainError};
use crate::ports::ConfigStore;

/// TOML-based configuration store with OS-specific paths.
pub struct TomlConfigStore {
    data_dir: PathBuf,
}

impl TomlConfigStore {
    /// Create a new TomlConfigStore.
    ///
    /// Resolves the per-user application data directory, creates it (and any
    /// parents), and seeds a default config file if none exists yet. This is
    /// the one place a storage failure is fatal to the caller: an unwritable
    /// location leaves the program with nowhere to keep its record.
    pub fn new() -> Result<Self, DomainError> {
        let data_dir = Self::get_data_dir()?;
        Self::with_data_dir(data_dir)
    }

    /// Create a store rooted at an explicit directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Result<Self, DomainError> {
        fs::create_dir_all(&data_dir).map_err(|e| {
            DomainError::Config(format!(
                "Cannot create application data directory {}: {}",
                data_dir.display(),
                e
            ))
        })?;

        let store = Self { data_dir };

        let config_path = store.config_path();
        if !config_path.exists() {
            store.save(&AppConfig::new()).map_err(|e| {
                DomainError::Config(format!(
                    "Cannot write default config to {}: {}",
                    config_path.display(),
                    e
                ))
            })?;
            info!(path = ?config_path, "Created default config file");
        }

        info!(data_dir = ?store.data_dir, "ConfigStore initialized");
        Ok(store)
    }

    /// Get the OS-specific application data directory.
    /// - macOS: ~/Library/Application Support/BouncePull/
    /// - Windows: %APPDATA%\BouncePull\
    /// - Linux: ~/.config/BouncePull/
    fn get_data_dir() -> Result<PathBuf, DomainError> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir()
                .map(|p| p.join("BouncePull"))
                .ok_or_else(|| {
                    DomainError::Config("Could not find application data directory".to_string())
                })
        }

        #[cfg(not(target_os = "macos"))]
        {
            dirs::config_dir()
                .map(|p| p.join("BouncePull"))
                .ok_or_else(|| {
                    DomainError::Config("Could not find application data directory".to_string())
                })
        }
    }

    /// Read and parse the persisted record. Any failure surfaces as a
    /// `DomainError` for `load` to fall back on.
    fn read_config(&self) -> Result<AppConfig, DomainError> {
        let content = fs::read_to_string(self.config_path())?;
        Ok(toml::from_str(&content)?)
    }
}

impl ConfigStore for TomlConfigStore {
    fn load(&self) -> AppConfig {
        let config_path = self.config_path();

        match self.read_config() {
            Ok(config) => {
                debug!(path = ?config_path, "Configuration loaded");
                config
            }
            Err(e) => {
                warn!(path = ?config_path, error = %e, "Could not read config, using defaults");
                AppConfig::new()
            }
        }
    }

    fn save(&self, config: &AppConfig) -> Result<(), DomainError> {
        let config_path = self.config_path();

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Write to a sibling temp file, then rename over the old record so a
        // partial write never clobbers previously valid state.
        let content = toml::to_string_pretty(config)?;
        let tmp_path = config_path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)?;
        fs::rename(&tmp_path, &config_path)?;

        debug!(path = ?config_path, "Configuration saved");
        Ok(())
    }

    fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.toml")
    }

    fn data_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    fn logs_dir(&self) -> PathBuf {
        self.data_dir.join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn new_store_seeds_default_config_file() {
        let temp = tempdir().unwrap();
        let store = TomlConfigStore::with_data_dir(temp.path().join("BouncePull")).unwrap();

        assert!(store.config_path().is_file());
        assert_eq!(store.load(), AppConfig::new());
    }

    #[test]
    fn config_roundtrip_preserves_all_fields() {
        let temp = tempdir().unwrap();
        let store = TomlConfigStore::with_data_dir(temp.path().to_path_buf()).unwrap();

        let mut config = AppConfig::new();
        config.source_root = "/mnt/opz".to_string();
        config.destination_folder = "/home/me/bounces".to_string();
        config.skip_confirmation = true;
        config.delete_after_transfer = true;

        store.save(&config).unwrap();
        assert_eq!(store.load(), config);
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let temp = tempdir().unwrap();
        let store = TomlConfigStore::with_data_dir(temp.path().to_path_buf()).unwrap();

        fs::write(store.config_path(), "source_root = [not toml").unwrap();
        assert_eq!(store.load(), AppConfig::new());
    }

    #[test]
    fn partial_config_backfills_missing_fields() {
        let temp = tempdir().unwrap();
        let store = TomlConfigStore::with_data_dir(temp.path().to_path_buf()).unwrap();

        fs::write(store.config_path(), "delete_after_transfer = true\n").unwrap();
        let config = store.load();
        assert!(config.delete_after_transfer);
        assert_eq!(config.source_root, "");
        assert_eq!(config.destination_folder, "");
        assert!(!config.skip_confirmation);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let temp = tempdir().unwrap();
        let store = TomlConfigStore::with_data_dir(temp.path().to_path_buf()).unwrap();

        fs::remove_file(store.config_path()).unwrap();
        assert_eq!(store.load(), AppConfig::new());
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let temp = tempdir().unwrap();
        let store = TomlConfigStore::with_data_dir(temp.path().to_path_buf()).unwrap();

        store.save(&AppConfig::new()).unwrap();
        let leftovers: Vec<_> = fs::read_dir(temp.path())
            .unwrap()
            .filter_map(Result::ok)
            .filter(|e| e.path().extension().map_or(false, |ext| ext == "tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }
}
