//! Configuration system for Beacon.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod beacon_config;
pub mod collector_config;
pub mod defaults;
pub mod logging_config;

pub use beacon_config::BeaconConfig;
pub use collector_config::CollectorConfig;
pub use logging_config::LoggingConfig;
