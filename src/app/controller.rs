use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;

use crate::adapters::{FsTransferEngine, TomlConfigStore};
use crate::domain::{AppConfig, DomainError, PullOutcome};
use crate::infrastructure::init_logging;
use crate::ports::{ConfigStore, ConfirmPrompt, TransferEngine};

/// Application controller that owns the configuration record and
/// orchestrates the transfer engine.
///
/// The in-memory record is the single source of truth; every field edit is
/// persisted in full right away. The engine only ever gets a read snapshot
/// of it per invocation.
pub struct AppController {
    config: RwLock<AppConfig>,
    config_store: Arc<dyn ConfigStore>,
    engine: FsTransferEngine,
    transfer_active: AtomicBool,
    _log_guard: Option<WorkerGuard>,
}

impl AppController {
    /// Initialize the application controller with the on-disk store.
    /// This sets up configuration storage and logging.
    pub fn new() -> Result<Self, DomainError> {
        let config_store = Arc::new(TomlConfigStore::new()?);
        let log_guard = init_logging(&config_store.logs_dir())?;

        info!("BouncePull starting up");
        Ok(Self::with_store(config_store, log_guard))
    }

    /// Build a controller around an existing store. Logging is left to the
    /// caller.
    pub fn with_store(config_store: Arc<dyn ConfigStore>, log_guard: Option<WorkerGuard>) -> Self {
        let config = config_store.load();
        Self {
            config: RwLock::new(config),
            config_store,
            engine: FsTransferEngine::new(),
            transfer_active: AtomicBool::new(false),
            _log_guard: log_guard,
        }
    }

    /// Get a snapshot of the current configuration.
    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    pub fn set_source_root(&self, path: String) {
        self.update(|config| config.source_root = path);
    }

    pub fn set_destination_folder(&self, path: String) {
        self.update(|config| config.destination_folder = path);
    }

    pub fn set_skip_confirmation(&self, value: bool) {
        self.update(|config| config.skip_confirmation = value);
    }

    pub fn set_delete_after_transfer(&self, value: bool) {
        self.update(|config| config.delete_after_transfer = value);
    }

    /// Apply an edit and persist the full record. A failed save is logged
    /// and swallowed; the in-memory record stays the working state.
    fn update(&self, edit: impl FnOnce(&mut AppConfig)) {
        let mut config = self.config.write();
        edit(&mut config);
        if let Err(e) = self.config_store.save(&config) {
            warn!(error = %e, "Could not persist configuration");
        }
    }

    /// Run the pull once. At most one run may be active at a time; a
    /// reentrant call fails fast without touching the filesystem.
    pub fn pull_bounces(&self, confirm: &dyn ConfirmPrompt) -> Result<PullOutcome, DomainError> {
        if self
            .transfer_active
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(DomainError::TransferBusy);
        }

        let snapshot = self.config();
        let outcome = self.engine.pull_bounces(&snapshot, confirm);
        self.transfer_active.store(false, Ordering::SeqCst);

        info!(?outcome, "Pull finished");
        Ok(outcome)
    }

    /// Get the data directory path.
    pub fn data_dir(&self) -> String {
        self.config_store.data_dir().to_string_lossy().to_string()
    }

    /// Get the logs directory path.
    pub fn logs_dir(&self) -> String {
        self.config_store.logs_dir().to_string_lossy().to_string()
    }

    /// Get the config file path.
    pub fn config_path(&self) -> String {
        self.config_store.config_path().to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn controller_in(dir: &std::path::Path) -> AppController {
        let store = Arc::new(TomlConfigStore::with_data_dir(dir.to_path_buf()).unwrap());
        AppController::with_store(store, None)
    }

    #[test]
    fn edits_persist_immediately() {
        let temp = tempdir().unwrap();
        let controller = controller_in(temp.path());

        controller.set_source_root("/mnt/opz".to_string());
        controller.set_delete_after_transfer(true);

        // A fresh controller over the same store sees the saved record.
        let reloaded = controller_in(temp.path()).config();
        assert_eq!(reloaded.source_root, "/mnt/opz");
        assert!(reloaded.delete_after_transfer);
        assert_eq!(reloaded.destination_folder, "");
    }

    #[test]
    fn pull_with_unset_paths_reports_missing_paths() {
        struct NeverAsked;
        impl ConfirmPrompt for NeverAsked {
            fn confirm_delete(&self) -> bool {
                panic!("prompt must not fire for a precondition abort");
            }
        }

        let temp = tempdir().unwrap();
        let controller = controller_in(temp.path());

        let outcome = controller.pull_bounces(&NeverAsked).unwrap();
        assert_eq!(outcome, PullOutcome::MissingPaths);
    }

    #[test]
    fn pull_moves_configured_bounces() {
        struct AlwaysYes;
        impl ConfirmPrompt for AlwaysYes {
            fn confirm_delete(&self) -> bool {
                true
            }
        }

        let temp = tempdir().unwrap();
        let device = temp.path().join("device");
        let dest = temp.path().join("out");
        fs::create_dir_all(device.join("bounces/bounce05")).unwrap();
        fs::create_dir_all(&dest).unwrap();
        fs::write(device.join("bounces/bounce05/bounce.wav"), "five").unwrap();

        let controller = controller_in(&temp.path().join("state"));
        controller.set_source_root(device.to_string_lossy().into_owned());
        controller.set_destination_folder(dest.to_string_lossy().into_owned());

        let outcome = controller.pull_bounces(&AlwaysYes).unwrap();
        assert_eq!(outcome, PullOutcome::Transferred);
        assert_eq!(fs::read_to_string(dest.join("bounce05.wav")).unwrap(), "five");
    }

    #[test]
    fn overlapping_pull_is_rejected_as_busy() {
        use std::sync::Barrier;
        use std::thread;

        /// Parks the run inside the confirmation prompt so a second pull
        /// can be issued mid-flight, then declines.
        struct ParkedDecline {
            entered: Arc<Barrier>,
            release: Arc<Barrier>,
        }
        impl ConfirmPrompt for ParkedDecline {
            fn confirm_delete(&self) -> bool {
                self.entered.wait();
                self.release.wait();
                false
            }
        }

        struct AlwaysNo;
        impl ConfirmPrompt for AlwaysNo {
            fn confirm_delete(&self) -> bool {
                false
            }
        }

        let temp = tempdir().unwrap();
        let device = temp.path().join("device");
        fs::create_dir_all(&device).unwrap();

        let controller = Arc::new(controller_in(&temp.path().join("state")));
        controller.set_source_root(device.to_string_lossy().into_owned());
        controller.set_destination_folder(temp.path().join("out").to_string_lossy().into_owned());
        controller.set_delete_after_transfer(true);

        let entered = Arc::new(Barrier::new(2));
        let release = Arc::new(Barrier::new(2));
        let prompt = ParkedDecline {
            entered: Arc::clone(&entered),
            release: Arc::clone(&release),
        };

        let first = {
            let controller = Arc::clone(&controller);
            thread::spawn(move || controller.pull_bounces(&prompt))
        };

        // First pull is now holding the busy flag inside the prompt.
        entered.wait();
        let second = controller.pull_bounces(&AlwaysNo);
        assert!(matches!(second, Err(DomainError::TransferBusy)));

        release.wait();
        let outcome = first.join().unwrap().unwrap();
        assert_eq!(outcome, PullOutcome::Declined);

        // The guard clears once the run finishes.
        let after = controller.pull_bounces(&AlwaysNo).unwrap();
        assert_eq!(after, PullOutcome::Declined);
    }
}
