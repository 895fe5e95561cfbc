/// Measurement Protocol collect endpoint.
pub const API_ENDPOINT: &str = "https://ssl.google-analytics.com/collect";

/// Measurement Protocol version, sent as `v` on every hit.
pub const PROTOCOL_VERSION: &str = "1";

/// Client version stamped by `Payload::new`.
pub const DEFAULT_CLIENT_VERSION: &str = "1";

/// Tracking id applied to session events that arrive without one.
pub const TRACKING_ID: &str = "UA-21815217-2";

/// Client id forced onto every session event.
pub const DEFAULT_CLIENT_ID: &str = "555";

/// Content type of every collect request body.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
