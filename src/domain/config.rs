use serde::{Deserialize, Serialize};

/// Main application configuration.
///
/// Exactly the four fields the persisted record carries. Paths are kept as
/// strings so that "unset" is representable as the empty string, matching
/// what the shell displays and what the transfer preconditions check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Root directory of the mounted OP-Z filesystem (empty = unset).
    pub source_root: String,
    /// Folder that receives pulled bounce files (empty = unset).
    pub destination_folder: String,
    /// Stored for the shell's "remember my choice" checkbox. The transfer
    /// preconditions do not consult it; deletion always prompts.
    pub skip_confirmation: bool,
    /// When true, a successful move also removes the source slot directory.
    pub delete_after_transfer: bool,
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when both the source root and the destination folder are set.
    pub fn paths_configured(&self) -> bool {
        !self.source_root.is_empty() && !self.destination_folder.is_empty()
    }
}
