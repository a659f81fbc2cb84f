use serde::{Deserialize, Serialize};

/// Wire envelope for an interactive message, shaped the way the transport
/// expects it. Optional parts are omitted entirely when absent so the
/// receiving client does not render empty blocks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<TextPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<TextPart>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<HeaderPart>,
    pub interactive_message: InteractiveEnvelope,
}

/// Interactive block of the wire envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractiveEnvelope {
    #[serde(default)]
    pub native_flow_message: NativeFlowMessage,
}

/// Native-flow button list carried inside the interactive block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowMessage {
    #[serde(default)]
    pub buttons: Vec<NativeFlowButton>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_params_json: Option<String>,
}

/// One wire-form button: kind name plus serialized parameters.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeFlowButton {
    pub name: String,
    #[serde(default)]
    pub button_params_json: String,
}

/// Plain text part of the envelope (body or footer).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPart {
    pub text: String,
}

/// Header part of the wire envelope.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub has_media_attachment: bool,
}
