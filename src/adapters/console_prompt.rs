use dialoguer::Confirm;
use tracing::warn;

use crate::ports::ConfirmPrompt;

/// Interactive confirmation backed by a terminal prompt.
pub struct DialoguerConfirm;

impl ConfirmPrompt for DialoguerConfirm {
    fn confirm_delete(&self) -> bool {
        let prompt = "This will move all bounces from your OP-Z to the destination folder \
                      and delete the originals from the device. Proceed?";
        match Confirm::new().with_prompt(prompt).default(false).interact() {
            Ok(answer) => answer,
            Err(e) => {
                // No usable terminal counts as a decline; never delete blind.
                warn!(error = %e, "Confirmation prompt unavailable, treating as decline");
                false
            }
        }
    }
}
