//! # beacon-client
//!
//! Sends usage hits to a Measurement Protocol `collect` endpoint as
//! URL-encoded form posts. One request per call, no retries, no batching.
//! Any HTTP response counts as delivered; only construction and transport
//! failures are errors.

pub mod collector;
pub mod events;
pub mod params;
pub mod sender;
pub mod transport;

pub use beacon_core::{CollectError, CollectResult, Event, Hit, HitType, Payload};
pub use collector::Collector;
pub use events::{session_event, ui_event};
pub use params::{collect_params, encode_params, encode_payload};
pub use sender::{send_request, send_request_to};
pub use transport::{default_client, HttpClient, HttpRequest, HttpResponse};
