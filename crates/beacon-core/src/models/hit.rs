use serde::{Deserialize, Serialize};

/// Wire value of the `t` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HitType {
    PageView,
    Event,
}

impl HitType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PageView => "pageview",
            Self::Event => "event",
        }
    }
}

impl std::fmt::Display for HitType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What kind of occurrence a payload reports.
///
/// Event details only exist on the `Event` variant, so a page view can
/// never carry `ec`/`ea`/`el`/`ev`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "hitType", rename_all = "lowercase")]
pub enum Hit {
    PageView,
    Event(Event),
}

impl Hit {
    pub fn hit_type(&self) -> HitType {
        match self {
            Self::PageView => HitType::PageView,
            Self::Event(_) => HitType::Event,
        }
    }

    pub fn event(&self) -> Option<&Event> {
        match self {
            Self::Event(event) => Some(event),
            Self::PageView => None,
        }
    }
}

impl From<Event> for Hit {
    fn from(event: Event) -> Self {
        Self::Event(event)
    }
}

/// Event details. `label` and `value` are omitted from the wire when empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    pub category: String,
    pub action: String,
    pub label: String,
    /// Opaque; the collector parses it, this crate never does.
    pub value: String,
}

impl Event {
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            ..Default::default()
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }
}
