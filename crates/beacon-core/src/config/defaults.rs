// Single source of truth for all default values.

use crate::constants;

// --- Collector ---
pub const DEFAULT_ENDPOINT: &str = constants::API_ENDPOINT;
pub const DEFAULT_SESSION_TRACKING_ID: &str = constants::TRACKING_ID;
pub const DEFAULT_SESSION_CLIENT_ID: &str = constants::DEFAULT_CLIENT_ID;

// --- Logging ---
pub const DEFAULT_LOG_FILTER: &str = "info";
pub const LOG_ENV_VAR: &str = "BEACON_LOG";

// --- Files ---
pub const PROJECT_CONFIG_FILENAME: &str = "beacon.toml";
