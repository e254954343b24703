// Unit tests for types module

use super::*;

#[test]
fn test_viewport_parse_valid() {
    let viewport = Viewport::parse("1280x800").unwrap();
    assert_eq!(viewport.width, 1280.0);
    assert_eq!(viewport.height, 800.0);
}

#[test]
fn test_viewport_parse_with_spaces() {
    let viewport = Viewport::parse("1920 x 1080").unwrap();
    assert_eq!(viewport.width, 1920.0);
    assert_eq!(viewport.height, 1080.0);
}

#[test]
fn test_viewport_parse_invalid_format() {
    assert!(Viewport::parse("1280").is_err());
    assert!(Viewport::parse("1280x800x600").is_err());
    assert!(Viewport::parse("axb").is_err());
}

#[test]
fn test_element_deserializes_from_empty_object() {
    let element: ScrapedElement = serde_json::from_str("{}").unwrap();
    assert!(element.tag.is_none());
    assert!(element.id.is_none());
    assert!(element.data_attributes.is_empty());
    assert!(element.ancestors.is_empty());
    assert!(element.bounding_box.is_none());
}

#[test]
fn test_element_camel_case_keys() {
    let element: ScrapedElement = serde_json::from_str(
        r#"{"ariaLabel": "Email", "ariaLabelledBy": "email-label", "type": "email"}"#,
    )
    .unwrap();
    assert_eq!(element.aria_label.as_deref(), Some("Email"));
    assert_eq!(element.aria_labelledby.as_deref(), Some("email-label"));
    assert_eq!(element.r#type.as_deref(), Some("email"));
}

#[test]
fn test_element_ignores_unknown_keys() {
    let element: ScrapedElement =
        serde_json::from_str(r#"{"id": "email", "xpath": "//input[1]"}"#).unwrap();
    assert_eq!(element.id.as_deref(), Some("email"));
}

#[test]
fn test_element_serialization_skips_absent_fields() {
    let element = ScrapedElement {
        id: Some("email".to_string()),
        ..Default::default()
    };
    let json = serde_json::to_value(&element).unwrap();
    assert_eq!(json, serde_json::json!({"id": "email"}));
}

#[test]
fn test_bounding_box_partial_sides() {
    let bbox: BoundingBox = serde_json::from_str(r#"{"top": 10.0, "left": 20.0}"#).unwrap();
    assert_eq!(bbox.top, Some(10.0));
    assert_eq!(bbox.bottom, None);
    assert!(bbox.has_geometry());
    assert!(!BoundingBox::default().has_geometry());
}

#[test]
fn test_ancestor_class_list_key() {
    let ancestor: AncestorInfo =
        serde_json::from_str(r#"{"tag": "div", "classList": "modal open", "ariaModal": "true"}"#)
            .unwrap();
    assert_eq!(ancestor.class_list.as_deref(), Some("modal open"));
    assert_eq!(ancestor.aria_modal.as_deref(), Some("true"));
}

#[test]
fn test_snapshot_defaults() {
    let snapshot: PageSnapshot = serde_json::from_str("{}").unwrap();
    assert!(snapshot.viewport.is_none());
    assert!(snapshot.elements.is_empty());
}

#[test]
fn test_candidate_new_derives_from_top_match() {
    let top = FieldMatch {
        field: "email".to_string(),
        score: 0.5,
        score_percent: 50.0,
        method: None,
        contributors: Vec::new(),
        breakdown: BTreeMap::new(),
        weights_applied: 0.5,
    };
    let candidate = Candidate::new(
        ScrapedElement::default(),
        RegionLabel::Main,
        vec![top.clone()],
    );
    assert_eq!(candidate.canonical_field.as_deref(), Some("email"));
    assert_eq!(candidate.score, 0.5);
    assert_eq!(candidate.score_percent, 50.0);
}

#[test]
fn test_candidate_new_without_matches() {
    let candidate = Candidate::new(ScrapedElement::default(), RegionLabel::Text, Vec::new());
    assert!(candidate.canonical_field.is_none());
    assert_eq!(candidate.score, 0.0);
    assert_eq!(candidate.score_percent, 0.0);
}

#[test]
fn test_output_format_serde() {
    assert_eq!(
        serde_json::to_string(&OutputFormat::Json).unwrap(),
        "\"json\""
    );
    assert_eq!(
        serde_json::from_str::<OutputFormat>("\"simple\"").unwrap(),
        OutputFormat::Simple
    );
}
