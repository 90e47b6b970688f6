pub mod config_store;
pub mod console_prompt;
pub mod transfer_engine;

pub use config_store::TomlConfigStore;
pub use console_prompt::DialoguerConfirm;
pub use transfer_engine::FsTransferEngine;
