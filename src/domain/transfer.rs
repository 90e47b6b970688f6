use std::path::{Path, PathBuf};

/// One of the OP-Z's five fixed bounce slots.
///
/// The device layout is not configurable: slot `N` renders to
/// `<root>/bounces/bounce0N/bounce.wav`. Exactly these five slots are
/// considered per pull, whatever the device actually contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BounceSlot(u8);

impl BounceSlot {
    /// All five slots, in ascending order.
    pub fn all() -> impl Iterator<Item = BounceSlot> {
        (1..=5).map(BounceSlot)
    }

    /// Slot directory name on the device, e.g. "bounce03".
    pub fn dir_name(&self) -> String {
        format!("bounce{:02}", self.0)
    }

    /// Slot directory on the device: `<root>/bounces/bounce0N`.
    pub fn source_dir(&self, source_root: &Path) -> PathBuf {
        source_root.join("bounces").join(self.dir_name())
    }

    /// Expected render inside the slot directory: `.../bounce0N/bounce.wav`.
    pub fn source_file(&self, source_root: &Path) -> PathBuf {
        self.source_dir(source_root).join("bounce.wav")
    }

    /// Destination filename for this slot, e.g. "bounce03.wav".
    pub fn dest_file_name(&self) -> String {
        format!("{}.wav", self.dir_name())
    }
}

impl std::fmt::Display for BounceSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.dir_name())
    }
}

/// Outcome of a pull run, surfaced to the shell.
///
/// The contract past the engine is deliberately coarse: a run that moved
/// anything at all reports `Transferred`, and empty slots are
/// indistinguishable from failed moves in `NothingFound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullOutcome {
    /// At least one bounce reached the destination.
    Transferred,
    /// No bounce reached the destination; slots were empty or moves failed.
    NothingFound,
    /// Source root or destination folder is not configured.
    MissingPaths,
    /// The configured source root does not exist on the filesystem.
    SourceNotFound,
    /// The user declined the delete-after-transfer confirmation.
    Declined,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_are_five_and_ascending() {
        let names: Vec<String> = BounceSlot::all().map(|s| s.dir_name()).collect();
        assert_eq!(
            names,
            vec!["bounce01", "bounce02", "bounce03", "bounce04", "bounce05"]
        );
    }

    #[test]
    fn slot_paths_follow_device_layout() {
        let slot = BounceSlot::all().nth(2).unwrap();
        let root = Path::new("/mnt/opz");
        assert_eq!(
            slot.source_file(root),
            PathBuf::from("/mnt/opz/bounces/bounce03/bounce.wav")
        );
        assert_eq!(slot.dest_file_name(), "bounce03.wav");
    }
}
