//! `Collector`: the sender and helpers bound to a `CollectorConfig`.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use beacon_core::{CollectError, CollectResult, CollectorConfig, Payload};

use crate::events::apply_session_defaults;
use crate::sender::send_request_to;
use crate::transport::{client_with_timeout, HttpClient};

/// Configured entry point. Cheap to share by reference across threads.
pub struct Collector {
    config: CollectorConfig,
    /// `None` uses the process-wide default client.
    client: Option<Arc<dyn HttpClient>>,
}

impl Collector {
    /// Build from config. A `timeout_secs` gets its own client with that
    /// deadline; otherwise the shared default client is used. A zero
    /// timeout is rejected since every send through it would fail.
    pub fn new(config: CollectorConfig) -> CollectResult<Self> {
        let client: Option<Arc<dyn HttpClient>> = match config.timeout_secs {
            Some(0) => {
                return Err(CollectError::construction(
                    "collector timeout_secs must be greater than 0",
                ))
            }
            Some(secs) => Some(Arc::new(client_with_timeout(Duration::from_secs(secs))?)),
            None => None,
        };
        tracing::debug!(
            endpoint = %config.endpoint,
            dedicated_client = client.is_some(),
            "collect: collector ready"
        );
        Ok(Self { config, client })
    }

    /// Build from config with a caller-supplied client.
    pub fn with_client(config: CollectorConfig, client: Arc<dyn HttpClient>) -> Self {
        Self {
            config,
            client: Some(client),
        }
    }

    pub fn config(&self) -> &CollectorConfig {
        &self.config
    }

    pub fn send(&self, payload: &Payload) -> CollectResult<()> {
        send_request_to(&self.config.endpoint, self.client.as_deref(), payload)
    }

    pub fn ui_event(&self, payload: &Payload) -> CollectResult<()> {
        self.send(payload)
    }

    /// Session event using the configured default ids.
    pub fn session_event(&self, payload: &mut Payload) -> CollectResult<()> {
        apply_session_defaults(
            payload,
            &self.config.session_tracking_id,
            &self.config.session_client_id,
        );
        self.send(payload)
    }
}

impl Default for Collector {
    fn default() -> Self {
        Self {
            config: CollectorConfig::default(),
            client: None,
        }
    }
}

impl fmt::Debug for Collector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collector")
            .field("config", &self.config)
            .field("dedicated_client", &self.client.is_some())
            .finish()
    }
}
