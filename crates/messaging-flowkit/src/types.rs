use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::payload::TransportPayload;
use crate::rules::ElementKind;

/// Simplified caller-facing message shape: envelope text plus an ordered
/// sequence of interactive elements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderDescriptor>,
    #[serde(default)]
    pub buttons: Vec<ButtonInput>,
}

/// Structured header block of a descriptor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HeaderDescriptor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
}

/// One entry in a descriptor's button list: a canonical interactive element,
/// or the legacy `{id, text}` shorthand.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ButtonInput {
    Element(InteractiveElement),
    Legacy(LegacyButton),
}

/// Tagged interactive element: a kind name plus its parameter payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractiveElement {
    pub name: String,
    #[serde(default, alias = "buttonParamsJson", skip_serializing_if = "Option::is_none")]
    pub params: Option<ElementParams>,
}

impl InteractiveElement {
    pub fn new(name: impl Into<String>, params: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            params: Some(ElementParams::Map(params)),
        }
    }

    /// Element whose parameters are still in serialized string form.
    pub fn raw(name: impl Into<String>, params_json: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Some(ElementParams::Raw(params_json.into())),
        }
    }

    pub fn quick_reply(id: impl Into<String>, display_text: impl Into<String>) -> Self {
        let mut params = Map::new();
        params.insert(
            "display_text".to_string(),
            Value::String(display_text.into()),
        );
        params.insert("id".to_string(), Value::String(id.into()));
        Self::new(ElementKind::QuickReply.as_str(), params)
    }

    /// List element from typed sections.
    pub fn single_select(title: impl Into<String>, sections: &[ListSection]) -> Self {
        let mut params = Map::new();
        params.insert("title".to_string(), Value::String(title.into()));
        params.insert(
            "sections".to_string(),
            serde_json::to_value(sections).unwrap_or_else(|_| Value::Array(Vec::new())),
        );
        Self::new(ElementKind::SingleSelect.as_str(), params)
    }

    /// Structured parameters, if already normalized.
    pub fn params_map(&self) -> Option<&Map<String, Value>> {
        match &self.params {
            Some(ElementParams::Map(map)) => Some(map),
            _ => None,
        }
    }
}

/// Element parameters as supplied by the caller: a serialized JSON document
/// that must be parsed before validation, or an already structured mapping.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ElementParams {
    Raw(String),
    Map(Map<String, Value>),
}

/// Legacy `{id, text}` quick-reply shorthand. Exists only at the input
/// boundary; the builder expands it into a `quick_reply` element. Fields are
/// optional at the type level so missing values surface as validation errors
/// rather than deserialization failures.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LegacyButton {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl LegacyButton {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            text: Some(text.into()),
        }
    }
}

/// Named group of list rows inside a `single_select` element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub rows: Vec<ListRow>,
}

/// One selectable row of a list section.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ListRow {
    pub title: String,
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ListRow {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
            header: None,
            description: None,
        }
    }
}

/// Caller-facing input to the dispatcher: the simplified descriptor, or a
/// fully-specified wire envelope (expert escape hatch).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Envelope(TransportPayload),
    Descriptor(MessageDescriptor),
}

impl From<MessageDescriptor> for MessageContent {
    fn from(descriptor: MessageDescriptor) -> Self {
        Self::Descriptor(descriptor)
    }
}

impl From<TransportPayload> for MessageContent {
    fn from(payload: TransportPayload) -> Self {
        Self::Envelope(payload)
    }
}
