use serde::{Deserialize, Serialize};

use super::defaults;

/// Where hits go and which ids session events fall back to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectorConfig {
    /// Collect endpoint URL.
    pub endpoint: String,
    /// Tracking id given to session events that have none.
    pub session_tracking_id: String,
    /// Client id forced onto session events.
    pub session_client_id: String,
    /// Request timeout for a dedicated client. `None` shares the default client.
    pub timeout_secs: Option<u64>,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            endpoint: defaults::DEFAULT_ENDPOINT.to_string(),
            session_tracking_id: defaults::DEFAULT_SESSION_TRACKING_ID.to_string(),
            session_client_id: defaults::DEFAULT_SESSION_CLIENT_ID.to_string(),
            timeout_secs: None,
        }
    }
}
