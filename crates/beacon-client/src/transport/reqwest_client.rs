//! `HttpClient` over `reqwest::blocking`, plus the process-wide default.

use std::io;
use std::sync::LazyLock;
use std::time::Duration;

use beacon_core::{BoxError, CollectError, CollectResult};

use super::{HttpClient, HttpRequest, HttpResponse};

static DEFAULT_CLIENT: LazyLock<reqwest::blocking::Client> =
    LazyLock::new(reqwest::blocking::Client::new);

/// Shared zero-configuration client, built on first use.
///
/// Only holds connection-pool state. Must not be first touched from inside
/// an async runtime; `reqwest::blocking` refuses to start there.
pub fn default_client() -> &'static reqwest::blocking::Client {
    &DEFAULT_CLIENT
}

/// Build a dedicated client that gives up after `timeout`.
pub fn client_with_timeout(timeout: Duration) -> CollectResult<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| CollectError::construction(format!("failed to build HTTP client: {e}")))
}

impl HttpClient for reqwest::blocking::Client {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError> {
        let mut response = self
            .request(request.method, request.url)
            .headers(request.headers)
            .body(request.body)
            .send()?;

        let status = response.status().as_u16();
        // Drain so the connection can go back to the pool. The status is
        // already in hand, so a failed drain does not undo the delivery.
        if let Err(e) = response.copy_to(&mut io::sink()) {
            tracing::trace!("collect: discarding unreadable response body: {e}");
        }
        Ok(HttpResponse { status })
    }
}
