pub mod config;
pub mod error;
pub mod transfer;

pub use config::AppConfig;
pub use error::DomainError;
pub use transfer::{BounceSlot, PullOutcome};
