//! Event Helpers: default-id policy for the two known call sites.

use beacon_core::constants::{DEFAULT_CLIENT_ID, TRACKING_ID};
use beacon_core::{CollectResult, Payload};

use crate::sender::send_request;
use crate::transport::HttpClient;

/// Fired whenever the client opens a new UI session. Sends `payload` as is.
pub fn ui_event(client: Option<&dyn HttpClient>, payload: &Payload) -> CollectResult<()> {
    send_request(client, payload)
}

/// Fired whenever a new application session starts.
///
/// Fills in the default tracking id when missing and always replaces the
/// client id before sending. The caller sees both changes.
pub fn session_event(client: Option<&dyn HttpClient>, payload: &mut Payload) -> CollectResult<()> {
    apply_session_defaults(payload, TRACKING_ID, DEFAULT_CLIENT_ID);
    send_request(client, payload)
}

/// The mutation `session_event` performs, without the send.
pub fn apply_session_defaults(payload: &mut Payload, tracking_id: &str, client_id: &str) {
    if payload.tracking_id.is_empty() {
        payload.tracking_id = tracking_id.to_string();
    }
    payload.client_id = client_id.to_string();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_defaults_fill_missing_tracking_id() {
        let mut payload = Payload {
            client_id: "user-7".into(),
            ..Default::default()
        };
        apply_session_defaults(&mut payload, TRACKING_ID, DEFAULT_CLIENT_ID);
        assert_eq!(payload.tracking_id, "UA-21815217-2");
        assert_eq!(payload.client_id, "555");
    }

    #[test]
    fn session_defaults_keep_existing_tracking_id() {
        let mut payload = Payload {
            tracking_id: "UA-1-1".into(),
            ..Default::default()
        };
        apply_session_defaults(&mut payload, TRACKING_ID, DEFAULT_CLIENT_ID);
        assert_eq!(payload.tracking_id, "UA-1-1");
        assert_eq!(payload.client_id, "555");
    }
}
