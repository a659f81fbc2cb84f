use messaging_flowkit::{
    ButtonInput, InteractiveElement, LegacyButton, ListRow, ListSection, MessageDescriptor,
    validate,
};
use serde_json::{Map, Value, json};

fn descriptor_with(buttons: Vec<ButtonInput>) -> MessageDescriptor {
    MessageDescriptor {
        text: Some("pick one".to_string()),
        footer: None,
        header: None,
        buttons,
    }
}

fn params(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object params")
}

#[test]
fn empty_descriptor_is_rejected() {
    let outcome = validate(&MessageDescriptor::default());
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].position, None);
    assert_eq!(outcome.errors[0].message, "no interactive elements supplied");
}

#[test]
fn quick_reply_missing_id_yields_exactly_one_error() {
    let descriptor = descriptor_with(vec![
        ButtonInput::Element(InteractiveElement::new(
            "quick_reply",
            params(json!({"display_text": "Yes"})),
        )),
        ButtonInput::Element(InteractiveElement::quick_reply("no", "No")),
    ]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    let error = &outcome.errors[0];
    assert_eq!(error.position, Some(0));
    assert_eq!(error.kind.as_deref(), Some("quick_reply"));
    assert_eq!(error.field.as_deref(), Some("id"));
}

#[test]
fn unknown_kind_does_not_stop_the_pass() {
    let descriptor = descriptor_with(vec![
        ButtonInput::Element(InteractiveElement::new("carousel", Map::new())),
        ButtonInput::Element(InteractiveElement::new(
            "cta_call",
            params(json!({"display_text": "Call"})),
        )),
    ]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(
        outcome.errors[0].message,
        "unknown button type `carousel`"
    );
    assert_eq!(outcome.errors[0].position, Some(0));
    assert_eq!(outcome.errors[1].position, Some(1));
    assert_eq!(outcome.errors[1].field.as_deref(), Some("phone_number"));
}

#[test]
fn string_params_normalize_to_a_mapping() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::raw(
        "cta_url",
        r#"{"display_text":"Go","url":"http://x"}"#,
    ))]);
    let normalized = validate(&descriptor).into_result().expect("valid");
    let ButtonInput::Element(element) = &normalized.buttons[0] else {
        panic!("expected element");
    };
    let map = element.params_map().expect("structured params");
    assert_eq!(map.get("display_text"), Some(&json!("Go")));
    assert_eq!(map.get("url"), Some(&json!("http://x")));
}

#[test]
fn string_params_missing_field_names_the_field() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::raw(
        "cta_url",
        r#"{"display_text":"Go"}"#,
    ))]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    let error = &outcome.errors[0];
    assert_eq!(error.position, Some(0));
    assert_eq!(error.kind.as_deref(), Some("cta_url"));
    assert_eq!(error.field.as_deref(), Some("url"));
}

#[test]
fn malformed_string_params_are_excluded_from_field_checks() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::raw(
        "cta_copy",
        "not json{",
    ))]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].message, "invalid parameters payload");
    assert_eq!(outcome.errors[0].field, None);
}

#[test]
fn legacy_button_requires_id_and_text() {
    let descriptor = descriptor_with(vec![ButtonInput::Legacy(LegacyButton {
        id: None,
        text: Some("  ".to_string()),
    })]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 2);
    assert_eq!(outcome.errors[0].field.as_deref(), Some("id"));
    assert_eq!(outcome.errors[1].field.as_deref(), Some("text"));
}

#[test]
fn missing_fields_report_in_rule_table_order() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::new(
        "cta_call",
        Map::new(),
    ))]);
    let outcome = validate(&descriptor);
    let fields: Vec<_> = outcome
        .errors
        .iter()
        .filter_map(|error| error.field.as_deref())
        .collect();
    assert_eq!(fields, ["display_text", "phone_number"]);
}

#[test]
fn absent_params_report_every_required_field() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement {
        name: "mpm".to_string(),
        params: None,
    })]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].field.as_deref(), Some("product_id"));
}

#[test]
fn single_select_empty_sections_fails() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::new(
        "single_select",
        params(json!({"title": "menu", "sections": []})),
    ))]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(outcome.errors[0].field.as_deref(), Some("sections"));
    assert_eq!(outcome.errors[0].message, "`sections` must not be empty");
}

#[test]
fn single_select_section_without_rows_fails() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::new(
        "single_select",
        params(json!({
            "title": "menu",
            "sections": [
                {"title": "first", "rows": [{"title": "Row", "id": "r1"}]},
                {"title": "second", "rows": []}
            ]
        })),
    ))]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(
        outcome.errors[0].field.as_deref(),
        Some("sections[1].rows")
    );
}

#[test]
fn single_select_row_errors_carry_section_and_row_position() {
    let descriptor = descriptor_with(vec![ButtonInput::Element(InteractiveElement::new(
        "single_select",
        params(json!({
            "title": "menu",
            "sections": [
                {"rows": [{"title": "Ok", "id": "ok"}]},
                {"rows": [{"title": "No id"}]}
            ]
        })),
    ))]);
    let outcome = validate(&descriptor);
    assert_eq!(outcome.errors.len(), 1);
    assert_eq!(
        outcome.errors[0].field.as_deref(),
        Some("sections[1].rows[0].id")
    );
}

#[test]
fn single_select_from_typed_sections_is_valid() {
    let sections = vec![
        ListSection {
            title: Some("Drinks".to_string()),
            rows: vec![ListRow::new("tea", "Tea"), ListRow::new("coffee", "Coffee")],
        },
        ListSection {
            title: None,
            rows: vec![ListRow::new("none", "Nothing")],
        },
    ];
    let descriptor = descriptor_with(vec![ButtonInput::Element(
        InteractiveElement::single_select("Order", &sections),
    )]);
    let outcome = validate(&descriptor);
    assert!(outcome.is_ok(), "unexpected errors: {:?}", outcome.errors);
}

#[test]
fn one_element_can_contribute_multiple_errors_in_order() {
    let descriptor = descriptor_with(vec![
        ButtonInput::Element(InteractiveElement::new("cta_url", Map::new())),
        ButtonInput::Legacy(LegacyButton::new("ok", "Fine")),
        ButtonInput::Element(InteractiveElement::new("bogus", Map::new())),
    ]);
    let outcome = validate(&descriptor);
    let positions: Vec<_> = outcome.errors.iter().map(|e| e.position).collect();
    assert_eq!(positions, [Some(0), Some(0), Some(2)]);
}
