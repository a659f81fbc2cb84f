use serde_json::{Map, Value};

use crate::payload::{
    HeaderPart, InteractiveEnvelope, NativeFlowButton, NativeFlowMessage, TextPart,
    TransportPayload,
};
use crate::rules::ElementKind;
use crate::types::{ButtonInput, ElementParams, HeaderDescriptor, LegacyButton, MessageDescriptor};

/// Expand a validated descriptor into the wire envelope. Pure: a descriptor
/// that passed validation always builds.
pub fn build_payload(descriptor: &MessageDescriptor) -> TransportPayload {
    let buttons = descriptor.buttons.iter().map(native_button).collect();
    TransportPayload {
        body: descriptor.text.clone().map(|text| TextPart { text }),
        footer: descriptor.footer.clone().map(|text| TextPart { text }),
        header: descriptor.header.as_ref().map(header_part),
        interactive_message: InteractiveEnvelope {
            native_flow_message: NativeFlowMessage {
                buttons,
                message_params_json: None,
            },
        },
    }
}

fn header_part(header: &HeaderDescriptor) -> HeaderPart {
    HeaderPart {
        title: header.title.clone(),
        subtitle: header.subtitle.clone(),
        has_media_attachment: false,
    }
}

fn native_button(button: &ButtonInput) -> NativeFlowButton {
    match button {
        ButtonInput::Legacy(legacy) => legacy_quick_reply(legacy),
        ButtonInput::Element(element) => {
            let button_params_json = match &element.params {
                Some(ElementParams::Map(map)) => serialize_params(map),
                Some(ElementParams::Raw(raw)) => raw.clone(),
                None => "{}".to_string(),
            };
            NativeFlowButton {
                name: element.name.clone(),
                button_params_json,
            }
        }
    }
}

/// Legacy `{id, text}` becomes a canonical quick reply.
fn legacy_quick_reply(legacy: &LegacyButton) -> NativeFlowButton {
    let mut params = Map::new();
    params.insert(
        "display_text".to_string(),
        Value::String(legacy.text.clone().unwrap_or_default()),
    );
    params.insert(
        "id".to_string(),
        Value::String(legacy.id.clone().unwrap_or_default()),
    );
    NativeFlowButton {
        name: ElementKind::QuickReply.as_str().to_string(),
        button_params_json: serialize_params(&params),
    }
}

fn serialize_params(params: &Map<String, Value>) -> String {
    serde_json::to_string(params).unwrap_or_else(|_| "{}".to_string())
}
