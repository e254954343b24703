// Unit tests for evidence extraction

use super::*;

#[test]
fn test_weights_sum_to_one() {
    assert!((TOTAL_WEIGHT - 1.0).abs() < 1e-12);
}

#[test]
fn test_source_tag_display_and_parse_round_trip() {
    let tags = [
        SourceTag::Id,
        SourceTag::Name,
        SourceTag::Autocomplete,
        SourceTag::DataAttribute("field".to_string()),
        SourceTag::Label,
        SourceTag::Placeholder,
        SourceTag::AriaLabel,
        SourceTag::AriaLabelledBy,
        SourceTag::Text,
        SourceTag::OcrText,
        SourceTag::VisualText,
        SourceTag::Value,
    ];
    for tag in tags {
        let rendered = tag.to_string();
        assert_eq!(SourceTag::parse(&rendered), Some(tag));
    }
    assert_eq!(SourceTag::parse("xpath"), None);
}

#[test]
fn test_data_attribute_display() {
    let tag = SourceTag::DataAttribute("test-id".to_string());
    assert_eq!(tag.to_string(), "data_attributes.test-id");
}

#[test]
fn test_source_tag_serde_as_string() {
    assert_eq!(
        serde_json::to_string(&SourceTag::AriaLabel).unwrap(),
        "\"ariaLabel\""
    );
    let parsed: SourceTag = serde_json::from_str("\"data_attributes.role\"").unwrap();
    assert_eq!(parsed, SourceTag::DataAttribute("role".to_string()));
    assert!(serde_json::from_str::<SourceTag>("\"bogus\"").is_err());
}

#[test]
fn test_category_mapping() {
    assert_eq!(SourceTag::Id.category(), Some(EvidenceCategory::Attribute));
    assert_eq!(
        SourceTag::DataAttribute("x".to_string()).category(),
        Some(EvidenceCategory::Attribute)
    );
    assert_eq!(
        SourceTag::Label.category(),
        Some(EvidenceCategory::Placeholder)
    );
    assert_eq!(
        SourceTag::AriaLabelledBy.category(),
        Some(EvidenceCategory::Placeholder)
    );
    assert_eq!(SourceTag::OcrText.category(), Some(EvidenceCategory::Visual));
    assert_eq!(SourceTag::Value.category(), None);
}

#[test]
fn test_category_weights() {
    assert_eq!(EvidenceCategory::Attribute.weight(), 0.5);
    assert_eq!(EvidenceCategory::Placeholder.weight(), 0.3);
    assert_eq!(EvidenceCategory::Visual.weight(), 0.2);
    assert_eq!(EvidenceCategory::Attribute.name(), "attribute");
}

#[test]
fn test_collect_evidence_order() {
    let element = ScrapedElement {
        id: Some("email-input".to_string()),
        name: Some("email".to_string()),
        label: Some("Email address".to_string()),
        placeholder: Some("you@example.com".to_string()),
        ..Default::default()
    };
    let items = collect_evidence(&element);
    let sources: Vec<String> = items.iter().map(|item| item.source.to_string()).collect();
    assert_eq!(sources, vec!["label", "placeholder", "name", "id"]);
}

#[test]
fn test_collect_evidence_trims_and_normalizes() {
    let element = ScrapedElement {
        label: Some("  First Name  ".to_string()),
        ..Default::default()
    };
    let items = collect_evidence(&element);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].raw, "First Name");
    assert_eq!(items[0].normalized, "first name");
}

#[test]
fn test_collect_evidence_skips_empty_and_symbolic() {
    let element = ScrapedElement {
        label: Some("   ".to_string()),
        placeholder: Some("###".to_string()),
        id: Some("email".to_string()),
        ..Default::default()
    };
    let items = collect_evidence(&element);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source, SourceTag::Id);
}

#[test]
fn test_collect_evidence_includes_value_without_category() {
    let element = ScrapedElement {
        value: Some("prefilled".to_string()),
        ..Default::default()
    };
    let items = collect_evidence(&element);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].source, SourceTag::Value);
    assert_eq!(items[0].source.category(), None);
}

#[test]
fn test_collect_evidence_data_attributes_in_key_order() {
    let mut data_attributes = std::collections::BTreeMap::new();
    data_attributes.insert("zeta".to_string(), "last".to_string());
    data_attributes.insert("alpha".to_string(), "first".to_string());
    let element = ScrapedElement {
        id: Some("x".to_string()),
        data_attributes,
        ..Default::default()
    };

    let items = collect_evidence(&element);
    let sources: Vec<String> = items.iter().map(|item| item.source.to_string()).collect();
    assert_eq!(
        sources,
        vec!["id", "data_attributes.alpha", "data_attributes.zeta"]
    );
}

#[test]
fn test_collect_evidence_empty_element() {
    assert!(collect_evidence(&ScrapedElement::default()).is_empty());
}
