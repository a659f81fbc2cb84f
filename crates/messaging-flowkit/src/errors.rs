use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One failed constraint from a validation pass.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Index of the offending element in the input sequence; `None` for
    /// descriptor-level errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Missing or malformed field, as a path into the element parameters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub message: String,
}

impl ValidationError {
    pub fn descriptor(message: impl Into<String>) -> Self {
        Self {
            position: None,
            kind: None,
            field: None,
            message: message.into(),
        }
    }

    pub fn element(position: usize, kind: Option<&str>, message: impl Into<String>) -> Self {
        Self {
            position: Some(position),
            kind: kind.map(str::to_string),
            field: None,
            message: message.into(),
        }
    }

    pub fn field(
        position: usize,
        kind: Option<&str>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            position: Some(position),
            kind: kind.map(str::to_string),
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn missing_field(position: usize, kind: Option<&str>, field: &str) -> Self {
        Self::field(
            position,
            kind,
            field,
            format!("missing required field `{field}`"),
        )
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.position, self.kind.as_deref()) {
            (Some(position), Some(kind)) => {
                write!(f, "button[{position}] ({kind}): {}", self.message)
            }
            (Some(position), None) => write!(f, "button[{position}]: {}", self.message),
            _ => write!(f, "message: {}", self.message),
        }
    }
}

/// Aggregate of every violation found in one validation pass, raised before
/// any transport interaction.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}", summarize(.errors))]
pub struct ValidationFailure {
    pub errors: Vec<ValidationError>,
}

fn summarize(errors: &[ValidationError]) -> String {
    let mut out = format!("message failed validation with {} error(s):", errors.len());
    for error in errors {
        out.push_str("\n  - ");
        out.push_str(&error.to_string());
    }
    out
}

/// Errors surfaced by the send pipeline.
#[derive(Debug, Error)]
pub enum SendError {
    /// The message failed validation; nothing was transmitted.
    #[error(transparent)]
    Invalid(#[from] ValidationFailure),
    /// Transport-level failure, passed through unmodified.
    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}
