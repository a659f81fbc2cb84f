use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::payload::TransportPayload;
use crate::rules::ElementKind;

/// Out-of-band metadata node transmitted next to the message content.
/// Receiving clients look for these before rendering interactive elements;
/// they are never part of the visible message.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attrs: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<BinaryNode>,
}

impl BinaryNode {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: BTreeMap::new(),
            content: Vec::new(),
        }
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(key.into(), value.into());
        self
    }

    pub fn child(mut self, node: BinaryNode) -> Self {
        self.content.push(node);
        self
    }
}

/// Rendering class of an interactive payload; selects the marker node set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageClass {
    List,
    Buttons,
    NativeFlow,
}

impl MessageClass {
    fn marker(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Buttons => "quick_reply",
            Self::NativeFlow => "mixed",
        }
    }
}

/// Classify a payload. A list element switches the receiving client to list
/// rendering for the whole message, so it dominates; a pure quick-reply set
/// is a button message; anything else is generic native flow.
pub fn classify(payload: &TransportPayload) -> MessageClass {
    let buttons = &payload.interactive_message.native_flow_message.buttons;
    if buttons
        .iter()
        .any(|button| button.name == ElementKind::SingleSelect.as_str())
    {
        return MessageClass::List;
    }
    if !buttons.is_empty()
        && buttons
            .iter()
            .all(|button| button.name == ElementKind::QuickReply.as_str())
    {
        return MessageClass::Buttons;
    }
    MessageClass::NativeFlow
}

/// Marker nodes attached alongside the message so the receiving client
/// enables interactive rendering.
pub fn annotation_nodes(class: MessageClass) -> Vec<BinaryNode> {
    vec![
        BinaryNode::new("biz").child(
            BinaryNode::new("interactive")
                .attr("type", "native_flow")
                .attr("v", "1")
                .child(
                    BinaryNode::new("native_flow")
                        .attr("name", class.marker())
                        .attr("v", "9"),
                ),
        ),
    ]
}
