pub mod config;
pub mod confirm;
pub mod transfer;

pub use config::ConfigStore;
pub use confirm::ConfirmPrompt;
pub use transfer::TransferEngine;
