//! Transport seam: the one operation the sender needs from an HTTP stack.

pub mod reqwest_client;

use beacon_core::BoxError;
use reqwest::header::HeaderMap;
use reqwest::{Method, Url};

pub use reqwest_client::{client_with_timeout, default_client};

/// A fully built outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
    pub body: String,
}

/// What the sender keeps of a response. The body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
}

/// Perform a request and return its response, or the error that stopped it.
///
/// Implementations must be safe to share between threads; the sender holds
/// no lock around `execute`.
pub trait HttpClient: Send + Sync {
    fn execute(&self, request: HttpRequest) -> Result<HttpResponse, BoxError>;
}
