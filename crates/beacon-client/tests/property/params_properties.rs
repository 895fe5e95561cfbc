use std::collections::BTreeMap;

use beacon_client::collect_params;
use beacon_core::{Event, Hit, Payload};
use proptest::prelude::*;

const EVENT_KEYS: [&str; 4] = ["ec", "ea", "el", "ev"];
const OPTIONAL_KEYS: [&str; 5] = ["_v", "tid", "cid", "sr", "ul"];

fn field() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[a-zA-Z0-9 ./:&=-]{1,16}"]
}

fn event() -> impl Strategy<Value = Event> {
    (field(), field(), field(), field()).prop_map(|(category, action, label, value)| Event {
        category,
        action,
        label,
        value,
    })
}

fn hit() -> impl Strategy<Value = Option<Hit>> {
    prop_oneof![
        Just(None),
        Just(Some(Hit::PageView)),
        event().prop_map(|e| Some(Hit::Event(e))),
    ]
}

fn custom_vars() -> impl Strategy<Value = BTreeMap<String, String>> {
    prop::collection::btree_map("cd[0-9]{1,3}", field(), 0..5)
}

fn payload() -> impl Strategy<Value = Payload> {
    (
        (field(), field(), field(), field(), field(), field()),
        hit(),
        custom_vars(),
    )
        .prop_map(|(ids, hit, custom_vars)| {
            let (client_id, client_version, tracking_id, language, screen_resolution, hostname) =
                ids;
            Payload {
                client_id,
                client_version,
                tracking_id,
                language,
                screen_resolution,
                hostname,
                hit,
                custom_vars,
                ..Default::default()
            }
        })
}

fn lookup<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

proptest! {
    #[test]
    fn pageview_never_carries_event_keys(mut p in payload()) {
        p.hit = Some(Hit::PageView);
        let params = collect_params(&p);
        for key in EVENT_KEYS {
            prop_assert!(lookup(&params, key).is_none(), "{} leaked into a pageview", key);
        }
        prop_assert_eq!(lookup(&params, "t"), Some("pageview"));
    }

    #[test]
    fn event_keys_follow_event_fields(mut p in payload(), e in event()) {
        p.hit = Some(Hit::Event(e.clone()));
        let params = collect_params(&p);
        prop_assert_eq!(lookup(&params, "t"), Some("event"));
        prop_assert_eq!(lookup(&params, "ec"), Some(e.category.as_str()));
        prop_assert_eq!(lookup(&params, "ea"), Some(e.action.as_str()));
        prop_assert_eq!(lookup(&params, "el").is_some(), !e.label.is_empty());
        prop_assert_eq!(lookup(&params, "ev").is_some(), !e.value.is_empty());
    }

    #[test]
    fn empty_optionals_absent_and_required_present(p in payload()) {
        let params = collect_params(&p);
        let values = [
            &p.client_version,
            &p.tracking_id,
            &p.client_id,
            &p.screen_resolution,
            &p.language,
        ];
        for (key, value) in OPTIONAL_KEYS.iter().zip(values) {
            if value.is_empty() {
                prop_assert!(lookup(&params, key).is_none());
            } else {
                prop_assert_eq!(lookup(&params, key), Some(value.as_str()));
            }
        }
        prop_assert_eq!(lookup(&params, "v"), Some("1"));
        prop_assert_eq!(lookup(&params, "dh"), Some(p.hostname.as_str()));
        prop_assert_eq!(lookup(&params, "t"), Some(p.hit_type_str()));
    }

    #[test]
    fn custom_vars_kept_only_when_non_empty(p in payload()) {
        let params = collect_params(&p);
        for (dimension, value) in &p.custom_vars {
            if value.is_empty() {
                prop_assert!(lookup(&params, dimension).is_none());
            } else {
                prop_assert_eq!(lookup(&params, dimension), Some(value.as_str()));
            }
        }
    }
}
