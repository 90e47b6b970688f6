/// Yes/no confirmation port.
///
/// The transfer engine consults this before a destructive run
/// (delete-after-transfer). The shell backs it with an interactive prompt;
/// tests back it with a canned answer.
pub trait ConfirmPrompt: Send + Sync {
    /// Ask the user to confirm moving all bounces and deleting the
    /// originals from the device. Returns false on decline.
    fn confirm_delete(&self) -> bool;
}
