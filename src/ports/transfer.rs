use crate::domain::{AppConfig, PullOutcome};
use crate::ports::ConfirmPrompt;

/// Transfer engine port: pull the device's bounce slots into the
/// configured destination folder.
pub trait TransferEngine: Send + Sync {
    /// Run the pull once, synchronously, for the given configuration.
    ///
    /// Precondition failures and a declined confirmation abort with zero
    /// side effects; otherwise every slot is attempted and the outcome is
    /// the binary transferred/nothing-found report.
    fn pull_bounces(&self, config: &AppConfig, confirm: &dyn ConfirmPrompt) -> PullOutcome;
}
