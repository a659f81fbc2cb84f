//! Full-pass validator: walks a descriptor's element sequence against the
//! kind rule table, accumulating every violation instead of stopping at the
//! first one.

use serde_json::{Map, Value};

use crate::errors::{ValidationError, ValidationFailure};
use crate::payload::TransportPayload;
use crate::rules::ElementKind;
use crate::types::{ButtonInput, ElementParams, InteractiveElement, MessageDescriptor};

/// Outcome of a validation pass: the normalized descriptor plus every
/// violation found, in input order.
#[derive(Clone, Debug)]
pub struct Validation {
    pub descriptor: MessageDescriptor,
    pub errors: Vec<ValidationError>,
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<MessageDescriptor, ValidationFailure> {
        if self.errors.is_empty() {
            Ok(self.descriptor)
        } else {
            Err(ValidationFailure {
                errors: self.errors,
            })
        }
    }
}

/// Validate a descriptor and normalize serialized element parameters into
/// structured mappings. Never short-circuits; errors keep input order, with
/// field-level errors in rule-table order.
pub fn validate(descriptor: &MessageDescriptor) -> Validation {
    let mut normalized = descriptor.clone();
    let mut errors = Vec::new();

    if normalized.buttons.is_empty() {
        errors.push(ValidationError::descriptor(
            "no interactive elements supplied",
        ));
    }

    for (position, button) in normalized.buttons.iter_mut().enumerate() {
        match button {
            ButtonInput::Legacy(legacy) => {
                if is_blank(legacy.id.as_deref()) {
                    errors.push(ValidationError::missing_field(position, None, "id"));
                }
                if is_blank(legacy.text.as_deref()) {
                    errors.push(ValidationError::missing_field(position, None, "text"));
                }
            }
            ButtonInput::Element(element) => check_element(position, element, &mut errors),
        }
    }

    Validation {
        descriptor: normalized,
        errors,
    }
}

/// Apply the per-element rules to a raw envelope's embedded wire buttons.
/// Envelope structure the caller authored is taken as-is; an absent or empty
/// button list is not an error on this path.
pub fn validate_envelope(payload: &TransportPayload) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let buttons = &payload.interactive_message.native_flow_message.buttons;
    for (position, button) in buttons.iter().enumerate() {
        let mut element = InteractiveElement {
            name: button.name.clone(),
            params: Some(ElementParams::Raw(button.button_params_json.clone())),
        };
        check_element(position, &mut element, &mut errors);
    }
    errors
}

fn check_element(
    position: usize,
    element: &mut InteractiveElement,
    errors: &mut Vec<ValidationError>,
) {
    let Some(kind) = ElementKind::parse(&element.name) else {
        errors.push(ValidationError::element(
            position,
            Some(element.name.as_str()),
            format!("unknown button type `{}`", element.name),
        ));
        return;
    };

    let Some(params) = normalize_params(element.params.as_ref()) else {
        errors.push(ValidationError::element(
            position,
            Some(kind.as_str()),
            "invalid parameters payload",
        ));
        return;
    };

    for field in kind.required_fields() {
        if is_missing(params.get(*field)) {
            errors.push(ValidationError::missing_field(
                position,
                Some(kind.as_str()),
                field,
            ));
        }
    }

    if kind.has_sections() {
        check_sections(position, kind, params.get("sections"), errors);
    }

    element.params = Some(ElementParams::Map(params));
}

/// Parse parameters into a structured mapping. `None` means the payload was
/// malformed and the element must be excluded from field checks. A blank
/// serialized document counts as an empty mapping so each required field is
/// still reported individually.
fn normalize_params(params: Option<&ElementParams>) -> Option<Map<String, Value>> {
    match params {
        None => Some(Map::new()),
        Some(ElementParams::Map(map)) => Some(map.clone()),
        Some(ElementParams::Raw(raw)) => {
            if raw.trim().is_empty() {
                return Some(Map::new());
            }
            match serde_json::from_str::<Value>(raw) {
                Ok(Value::Object(map)) => Some(map),
                _ => None,
            }
        }
    }
}

fn check_sections(
    position: usize,
    kind: ElementKind,
    sections: Option<&Value>,
    errors: &mut Vec<ValidationError>,
) {
    let kind = kind.as_str();
    let sections = match sections {
        // Absence was already reported as a missing required field.
        None | Some(Value::Null) => return,
        Some(value) => value,
    };
    let Some(sections) = sections.as_array() else {
        errors.push(ValidationError::field(
            position,
            Some(kind),
            "sections",
            "`sections` must be an array",
        ));
        return;
    };
    if sections.is_empty() {
        errors.push(ValidationError::field(
            position,
            Some(kind),
            "sections",
            "`sections` must not be empty",
        ));
        return;
    }
    for (section_index, section) in sections.iter().enumerate() {
        let rows = section.get("rows").and_then(Value::as_array);
        let Some(rows) = rows.filter(|rows| !rows.is_empty()) else {
            errors.push(ValidationError::field(
                position,
                Some(kind),
                format!("sections[{section_index}].rows"),
                format!("section at index {section_index} has no rows"),
            ));
            continue;
        };
        for (row_index, row) in rows.iter().enumerate() {
            for field in ["title", "id"] {
                if is_missing(row.get(field)) {
                    errors.push(ValidationError::field(
                        position,
                        Some(kind),
                        format!("sections[{section_index}].rows[{row_index}].{field}"),
                        format!(
                            "row {row_index} in section {section_index} is missing `{field}`"
                        ),
                    ));
                }
            }
        }
    }
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::Null) => true,
        Some(Value::String(s)) if s.trim().is_empty() => true,
        _ => false,
    }
}

fn is_blank(value: Option<&str>) -> bool {
    value.map(str::trim).filter(|v| !v.is_empty()).is_none()
}
