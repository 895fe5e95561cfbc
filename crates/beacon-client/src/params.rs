//! Payload → collect parameters, driven by a static field table.

use beacon_core::constants::PROTOCOL_VERSION;
use beacon_core::{Event, Payload};

/// When a mapped field is emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emit {
    Always,
    NonEmpty,
}

/// One row of the payload → wire schema.
struct PayloadField {
    key: &'static str,
    emit: Emit,
    get: fn(&Payload) -> &str,
}

struct EventField {
    key: &'static str,
    emit: Emit,
    get: fn(&Event) -> &str,
}

const PAYLOAD_FIELDS: &[PayloadField] = &[
    PayloadField {
        key: "v",
        emit: Emit::Always,
        get: |_| PROTOCOL_VERSION,
    },
    PayloadField {
        key: "_v",
        emit: Emit::NonEmpty,
        get: |p| p.client_version.as_str(),
    },
    PayloadField {
        key: "tid",
        emit: Emit::NonEmpty,
        get: |p| p.tracking_id.as_str(),
    },
    PayloadField {
        key: "cid",
        emit: Emit::NonEmpty,
        get: |p| p.client_id.as_str(),
    },
    PayloadField {
        key: "sr",
        emit: Emit::NonEmpty,
        get: |p| p.screen_resolution.as_str(),
    },
    PayloadField {
        key: "ul",
        emit: Emit::NonEmpty,
        get: |p| p.language.as_str(),
    },
    PayloadField {
        key: "dh",
        emit: Emit::Always,
        get: |p| p.hostname.as_str(),
    },
    PayloadField {
        key: "t",
        emit: Emit::Always,
        get: |p| p.hit_type_str(),
    },
];

// Only consulted for `Hit::Event`.
const EVENT_FIELDS: &[EventField] = &[
    EventField {
        key: "ec",
        emit: Emit::Always,
        get: |e| e.category.as_str(),
    },
    EventField {
        key: "ea",
        emit: Emit::Always,
        get: |e| e.action.as_str(),
    },
    EventField {
        key: "el",
        emit: Emit::NonEmpty,
        get: |e| e.label.as_str(),
    },
    EventField {
        key: "ev",
        emit: Emit::NonEmpty,
        get: |e| e.value.as_str(),
    },
];

fn keep(emit: Emit, value: &str) -> bool {
    emit == Emit::Always || !value.is_empty()
}

/// Map a payload to ordered `(key, value)` pairs.
///
/// Order: fixed fields, then event fields, then custom variables by key.
pub fn collect_params(payload: &Payload) -> Vec<(String, String)> {
    let mut params = Vec::with_capacity(PAYLOAD_FIELDS.len() + payload.custom_vars.len() + 4);

    for field in PAYLOAD_FIELDS {
        let value = (field.get)(payload);
        if keep(field.emit, value) {
            params.push((field.key.to_string(), value.to_string()));
        }
    }

    if let Some(event) = payload.hit.as_ref().and_then(|hit| hit.event()) {
        for field in EVENT_FIELDS {
            let value = (field.get)(event);
            if keep(field.emit, value) {
                params.push((field.key.to_string(), value.to_string()));
            }
        }
    }

    for (dimension, value) in &payload.custom_vars {
        if !value.is_empty() {
            params.push((dimension.clone(), value.clone()));
        }
    }

    params
}

/// Render pairs as an `application/x-www-form-urlencoded` body.
pub fn encode_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// `collect_params` followed by `encode_params`.
pub fn encode_payload(payload: &Payload) -> String {
    encode_params(&collect_params(payload))
}
