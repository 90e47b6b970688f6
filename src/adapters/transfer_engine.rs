use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::{AppConfig, BounceSlot, PullOutcome};
use crate::ports::{ConfirmPrompt, TransferEngine};

/// Filesystem-backed transfer engine.
///
/// Walks the five fixed bounce slots in order and moves whatever renders it
/// finds into the destination folder. Runs synchronously on the calling
/// thread; a slot that is absent or fails to move never aborts the rest of
/// the batch.
pub struct FsTransferEngine;

impl FsTransferEngine {
    pub fn new() -> Self {
        Self
    }

    /// Pick a destination path that does not collide with an existing file.
    ///
    /// The first choice is `<dest>/bounce0N.wav`; while that name is taken,
    /// an 8-hex-char disambiguator is appended to the stem. Existing files
    /// are never overwritten.
    fn free_destination(dest_dir: &Path, slot: BounceSlot) -> PathBuf {
        let mut candidate = dest_dir.join(slot.dest_file_name());
        while candidate.exists() {
            let tag = Uuid::new_v4().simple().to_string();
            candidate = dest_dir.join(format!("{}_{}.wav", slot.dir_name(), &tag[..8]));
        }
        candidate
    }

    /// Move a file, falling back to copy+remove when the destination is on
    /// a different volume and a plain rename fails.
    fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
        match fs::rename(src, dest) {
            Ok(()) => Ok(()),
            Err(e) => {
                debug!(error = %e, "Rename failed, falling back to copy+remove");
                fs::copy(src, dest)?;
                fs::remove_file(src)?;
                Ok(())
            }
        }
    }
}

impl Default for FsTransferEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TransferEngine for FsTransferEngine {
    fn pull_bounces(&self, config: &AppConfig, confirm: &dyn ConfirmPrompt) -> PullOutcome {
        if !config.paths_configured() {
            warn!("Source root or destination folder not configured");
            return PullOutcome::MissingPaths;
        }

        let source_root = Path::new(&config.source_root);
        let dest_dir = Path::new(&config.destination_folder);

        if !source_root.exists() {
            warn!(source_root = %source_root.display(), "Configured source root not found");
            return PullOutcome::SourceNotFound;
        }

        // Deletion is destructive; it always prompts, whatever
        // skip_confirmation says.
        if config.delete_after_transfer && !confirm.confirm_delete() {
            info!("Pull declined by user");
            return PullOutcome::Declined;
        }

        let mut transferred_any = false;

        for slot in BounceSlot::all() {
            let slot_dir = slot.source_dir(source_root);
            if !slot_dir.exists() {
                debug!(slot = %slot, "Slot directory absent, skipping");
                continue;
            }

            let source_file = slot.source_file(source_root);
            if !source_file.is_file() {
                debug!(slot = %slot, "No bounce.wav in slot, skipping");
                continue;
            }

            let dest_file = Self::free_destination(dest_dir, slot);

            match Self::move_file(&source_file, &dest_file) {
                Ok(()) => {
                    info!(
                        src = %source_file.display(),
                        dest = %dest_file.display(),
                        "Moved bounce"
                    );
                    transferred_any = true;

                    if config.delete_after_transfer && slot_dir.exists() {
                        match fs::remove_dir_all(&slot_dir) {
                            Ok(()) => info!(slot = %slot, "Removed slot directory"),
                            Err(e) => {
                                warn!(slot = %slot, error = %e, "Could not remove slot directory")
                            }
                        }
                    }
                }
                Err(e) => {
                    warn!(
                        src = %source_file.display(),
                        dest = %dest_file.display(),
                        error = %e,
                        "Move failed, leaving source in place"
                    );
                }
            }
        }

        if transferred_any {
            PullOutcome::Transferred
        } else {
            PullOutcome::NothingFound
        }
    }
}
