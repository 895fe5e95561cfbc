use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Hit, HitType};
use crate::constants::DEFAULT_CLIENT_VERSION;

/// One trackable occurrence. Built per call and dropped after sending.
///
/// Empty strings mean "not set"; only `hostname` and the hit type are
/// emitted regardless.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Payload {
    pub client_id: String,
    pub client_version: String,
    pub tracking_id: String,
    pub language: String,
    /// Carried for callers, not part of the collect schema.
    pub viewport_size: String,
    /// Carried for callers, not part of the collect schema.
    pub screen_colors: String,
    pub screen_resolution: String,
    pub hostname: String,
    /// Read from the top-level `hitType` key, with event fields beside it.
    /// `None` (absent or unknown `hitType`) sends an empty `t`.
    #[serde(flatten)]
    pub hit: Option<Hit>,
    /// Extra dimensions, keyed by their wire name.
    pub custom_vars: BTreeMap<String, String>,
    /// Forwarded as the `User-Agent` header when non-empty.
    pub user_agent: String,
}

impl Payload {
    /// A payload for `hostname` stamped with the default client version.
    pub fn new(hostname: impl Into<String>, hit: impl Into<Option<Hit>>) -> Self {
        Self {
            client_version: DEFAULT_CLIENT_VERSION.to_string(),
            hostname: hostname.into(),
            hit: hit.into(),
            ..Default::default()
        }
    }

    pub fn hit_type(&self) -> Option<HitType> {
        self.hit.as_ref().map(Hit::hit_type)
    }

    /// Wire value of `t`, empty when no hit is set.
    pub fn hit_type_str(&self) -> &'static str {
        self.hit_type().map(|t| t.as_str()).unwrap_or("")
    }

    pub fn with_custom_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_vars.insert(key.into(), value.into());
        self
    }
}
