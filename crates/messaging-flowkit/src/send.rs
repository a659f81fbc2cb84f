use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::annotate::{BinaryNode, annotation_nodes, classify};
use crate::build::build_payload;
use crate::errors::{SendError, ValidationFailure};
use crate::payload::TransportPayload;
use crate::types::{ButtonInput, LegacyButton, MessageContent, MessageDescriptor};
use crate::validate::{validate, validate_envelope};

/// Result handed back by the transport collaborator, returned unchanged.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SendReceipt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub response: Value,
}

/// Transport collaborator: constructs and transmits the wire message along
/// with its annotation nodes. Session, encryption and network I/O live
/// behind this trait and are out of scope here.
pub trait Transport {
    fn transmit(
        &self,
        recipient: &str,
        payload: &TransportPayload,
        annotations: &[BinaryNode],
    ) -> anyhow::Result<SendReceipt>;
}

/// Simplified `{text, footer, buttons}` entry shape for [`FlowSender::send_buttons`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SimpleButtons {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(default)]
    pub buttons: Vec<LegacyButton>,
}

/// Dispatcher: runs validate → build → annotate → transmit as one linear
/// pipeline per call. Holds no per-call state, so concurrent sends through
/// one sender stay independent.
pub struct FlowSender<T: Transport> {
    transport: T,
}

impl<T: Transport> FlowSender<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Validate, build and transmit an interactive message. Aborts before
    /// any transport interaction when validation fails; transport errors
    /// propagate unmodified.
    pub fn send(
        &self,
        recipient: &str,
        content: MessageContent,
    ) -> Result<SendReceipt, SendError> {
        let payload = match content {
            MessageContent::Descriptor(descriptor) => {
                let outcome = validate(&descriptor);
                if !outcome.is_ok() {
                    debug!(errors = outcome.errors.len(), "descriptor failed validation");
                }
                build_payload(&outcome.into_result()?)
            }
            MessageContent::Envelope(payload) => {
                let errors = validate_envelope(&payload);
                if !errors.is_empty() {
                    debug!(errors = errors.len(), "raw envelope failed validation");
                    return Err(ValidationFailure { errors }.into());
                }
                payload
            }
        };

        let class = classify(&payload);
        let annotations = annotation_nodes(class);
        debug!(
            recipient,
            ?class,
            buttons = payload.interactive_message.native_flow_message.buttons.len(),
            "transmitting interactive message"
        );
        Ok(self.transport.transmit(recipient, &payload, &annotations)?)
    }

    /// Convenience entry for plain quick-reply buttons.
    pub fn send_buttons(
        &self,
        recipient: &str,
        simple: SimpleButtons,
    ) -> Result<SendReceipt, SendError> {
        let descriptor = MessageDescriptor {
            text: simple.text,
            footer: simple.footer,
            header: None,
            buttons: simple.buttons.into_iter().map(ButtonInput::Legacy).collect(),
        };
        self.send(recipient, MessageContent::Descriptor(descriptor))
    }
}
