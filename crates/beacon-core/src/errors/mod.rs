//! Error types for request construction, delivery, and configuration.

pub mod collect_error;
pub mod config_error;

pub use collect_error::{BoxError, CollectError};
pub use config_error::ConfigError;

/// Result of a collect operation. `Ok(())` means the endpoint answered.
pub type CollectResult<T> = Result<T, CollectError>;
