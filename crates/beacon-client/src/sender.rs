//! Request Sender: one form POST per payload.

use beacon_core::constants::{API_ENDPOINT, FORM_CONTENT_TYPE};
use beacon_core::{CollectError, CollectResult, Payload};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Url};

use crate::params::encode_payload;
use crate::transport::{default_client, HttpClient, HttpRequest};

/// Send `payload` to the collect endpoint.
///
/// Uses `client` when given, otherwise the shared default client. Returns
/// `Ok(())` as soon as any HTTP response arrives, whatever its status.
pub fn send_request(client: Option<&dyn HttpClient>, payload: &Payload) -> CollectResult<()> {
    send_request_to(API_ENDPOINT, client, payload)
}

/// `send_request` against an explicit endpoint URL.
pub fn send_request_to(
    endpoint: &str,
    client: Option<&dyn HttpClient>,
    payload: &Payload,
) -> CollectResult<()> {
    let client: &dyn HttpClient = match client {
        Some(client) => client,
        None => {
            tracing::trace!("collect: using default HTTP client");
            default_client()
        }
    };

    let request = build_request(endpoint, payload).inspect_err(|e| {
        tracing::error!("collect: error constructing request: {e}");
    })?;

    match client.execute(request) {
        Ok(response) => {
            tracing::debug!(status = response.status, "collect: request delivered");
            Ok(())
        }
        Err(source) => {
            let err = CollectError::transport(source);
            tracing::error!("collect: could not send request: {err}");
            Err(err)
        }
    }
}

/// Assemble the POST for `payload` without sending it.
pub fn build_request(endpoint: &str, payload: &Payload) -> CollectResult<HttpRequest> {
    let url = Url::parse(endpoint).map_err(|e| {
        CollectError::construction(format!("invalid endpoint {endpoint:?}: {e}"))
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
    if !payload.user_agent.is_empty() {
        let agent = HeaderValue::from_str(&payload.user_agent)
            .map_err(|e| CollectError::construction(format!("invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, agent);
    }

    let body = encode_payload(payload);
    tracing::trace!(%url, body_len = body.len(), "collect: built request");

    Ok(HttpRequest {
        method: Method::POST,
        url,
        headers,
        body,
    })
}

#[cfg(test)]
mod tests {
    use beacon_core::Hit;

    use super::*;

    #[test]
    fn request_targets_collect_endpoint_with_form_header() {
        let payload = Payload::new("example.com", Hit::PageView);
        let request = build_request(API_ENDPOINT, &payload).unwrap();

        assert_eq!(request.method, Method::POST);
        assert_eq!(request.url.as_str(), "https://ssl.google-analytics.com/collect");
        assert_eq!(
            request.headers.get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert!(request.headers.get(USER_AGENT).is_none());
        assert_eq!(request.body, "v=1&_v=1&dh=example.com&t=pageview");
    }

    #[test]
    fn user_agent_is_forwarded() {
        let payload = Payload {
            user_agent: "Mozilla/5.0 (X11; Linux x86_64)".into(),
            ..Default::default()
        };
        let request = build_request(API_ENDPOINT, &payload).unwrap();
        assert_eq!(
            request.headers.get(USER_AGENT).unwrap(),
            "Mozilla/5.0 (X11; Linux x86_64)"
        );
    }

    #[test]
    fn malformed_endpoint_is_construction_error() {
        let err = build_request("not a url", &Payload::default()).unwrap_err();
        assert!(err.is_construction());
    }

    #[test]
    fn header_breaking_user_agent_is_construction_error() {
        let payload = Payload {
            user_agent: "agent\r\nX-Injected: 1".into(),
            ..Default::default()
        };
        let err = build_request(API_ENDPOINT, &payload).unwrap_err();
        assert!(err.is_construction());
    }
}
