//! # beacon-core
//!
//! Foundation crate for the Beacon analytics client.
//! Defines the payload model, errors, config, tracing setup, and constants.
//! `beacon-client` depends on this for everything it puts on the wire.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{BeaconConfig, CollectorConfig};
pub use errors::{BoxError, CollectError, CollectResult, ConfigError};
pub use models::{Event, Hit, HitType, Payload};
