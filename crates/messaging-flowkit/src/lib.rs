//! Validation and construction layer for native-flow interactive messages.
//!
//! Translates a simplified button/list descriptor into the nested envelope a
//! messaging transport expects, plus the side-channel annotation nodes the
//! receiving client needs before it renders interactive elements. Transport
//! I/O, sessions and encryption live behind the [`Transport`] trait and are
//! not implemented here.

pub mod annotate;
pub mod build;
pub mod errors;
pub mod payload;
pub mod rules;
pub mod send;
pub mod types;
pub mod validate;

pub use annotate::{BinaryNode, MessageClass, annotation_nodes, classify};
pub use build::build_payload;
pub use errors::{SendError, ValidationError, ValidationFailure};
pub use payload::{
    HeaderPart, InteractiveEnvelope, NativeFlowButton, NativeFlowMessage, TextPart,
    TransportPayload,
};
pub use rules::ElementKind;
pub use send::{FlowSender, SendReceipt, SimpleButtons, Transport};
pub use types::{
    ButtonInput, ElementParams, HeaderDescriptor, InteractiveElement, LegacyButton, ListRow,
    ListSection, MessageContent, MessageDescriptor,
};
pub use validate::{Validation, validate, validate_envelope};
