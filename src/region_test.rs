// Unit tests for region classification

use super::*;

fn ancestor(tag: &str) -> AncestorInfo {
    AncestorInfo {
        tag: Some(tag.to_string()),
        ..Default::default()
    }
}

fn element_with_ancestors(ancestors: Vec<AncestorInfo>) -> ScrapedElement {
    ScrapedElement {
        ancestors,
        ..Default::default()
    }
}

fn viewport() -> Viewport {
    Viewport {
        width: 1280.0,
        height: 800.0,
    }
}

#[test]
fn test_no_ancestors_defaults_to_text() {
    let element = ScrapedElement::default();
    assert_eq!(classify_region(&element, Some(&viewport())), RegionLabel::Text);
}

#[test]
fn test_aria_modal_ancestor_is_popup() {
    let element = element_with_ancestors(vec![AncestorInfo {
        tag: Some("div".to_string()),
        aria_modal: Some("true".to_string()),
        ..Default::default()
    }]);
    assert_eq!(classify_region(&element, None), RegionLabel::Popup);
}

#[test]
fn test_dialog_role_is_popup() {
    let element = element_with_ancestors(vec![AncestorInfo {
        tag: Some("div".to_string()),
        role: Some("alertdialog".to_string()),
        ..Default::default()
    }]);
    assert_eq!(classify_region(&element, None), RegionLabel::Popup);
}

#[test]
fn test_modal_class_keyword_is_popup() {
    let element = element_with_ancestors(vec![AncestorInfo {
        tag: Some("div".to_string()),
        class_list: Some("checkout-modal open".to_string()),
        ..Default::default()
    }]);
    assert_eq!(classify_region(&element, None), RegionLabel::Popup);
}

#[test]
fn test_popup_beats_header() {
    // An element inside both a modal and a nav classifies as popup.
    let element = element_with_ancestors(vec![
        AncestorInfo {
            tag: Some("div".to_string()),
            class_list: Some("overlay".to_string()),
            ..Default::default()
        },
        ancestor("nav"),
    ]);
    assert_eq!(classify_region(&element, Some(&viewport())), RegionLabel::Popup);
}

#[test]
fn test_header_tag() {
    let element = element_with_ancestors(vec![ancestor("header"), ancestor("body")]);
    assert_eq!(classify_region(&element, None), RegionLabel::Header);
}

#[test]
fn test_banner_role() {
    let element = element_with_ancestors(vec![AncestorInfo {
        tag: Some("div".to_string()),
        role: Some("banner".to_string()),
        ..Default::default()
    }]);
    assert_eq!(classify_region(&element, None), RegionLabel::Header);
}

#[test]
fn test_near_top_is_header() {
    let mut element = element_with_ancestors(vec![ancestor("div")]);
    element.bounding_box = Some(BoundingBox {
        top: Some(40.0),
        ..Default::default()
    });
    assert_eq!(
        classify_region(&element, Some(&viewport())),
        RegionLabel::Header
    );
}

#[test]
fn test_near_top_threshold_scales_with_viewport() {
    // 15% of a 2000px viewport is 300px, above the 120px floor.
    let tall = Viewport {
        width: 1280.0,
        height: 2000.0,
    };
    let mut element = element_with_ancestors(vec![ancestor("div")]);
    element.bounding_box = Some(BoundingBox {
        top: Some(250.0),
        ..Default::default()
    });
    assert_eq!(classify_region(&element, Some(&tall)), RegionLabel::Header);
    assert_eq!(classify_region(&element, Some(&viewport())), RegionLabel::Text);
}

#[test]
fn test_near_top_without_viewport_uses_floor() {
    let mut element = element_with_ancestors(vec![ancestor("div")]);
    element.bounding_box = Some(BoundingBox {
        top: Some(100.0),
        ..Default::default()
    });
    assert_eq!(classify_region(&element, None), RegionLabel::Header);
    element.bounding_box = Some(BoundingBox {
        top: Some(130.0),
        ..Default::default()
    });
    assert_eq!(classify_region(&element, None), RegionLabel::Text);
}

#[test]
fn test_footer_tag() {
    let element = element_with_ancestors(vec![ancestor("footer")]);
    assert_eq!(classify_region(&element, None), RegionLabel::Footer);
}

#[test]
fn test_near_bottom_requires_viewport() {
    let mut element = element_with_ancestors(vec![ancestor("div")]);
    element.bounding_box = Some(BoundingBox {
        bottom: Some(760.0),
        ..Default::default()
    });
    assert_eq!(
        classify_region(&element, Some(&viewport())),
        RegionLabel::Footer
    );
    // Without viewport height there is no bottom edge to be near.
    assert_eq!(classify_region(&element, None), RegionLabel::Text);
}

#[test]
fn test_sidebar_aside_tag() {
    let element = element_with_ancestors(vec![ancestor("aside")]);
    assert_eq!(classify_region(&element, None), RegionLabel::Sidebar);
}

#[test]
fn test_sidebar_near_left_edge() {
    let mut element = element_with_ancestors(vec![ancestor("div")]);
    element.bounding_box = Some(BoundingBox {
        left: Some(20.0),
        ..Default::default()
    });
    assert_eq!(
        classify_region(&element, Some(&viewport())),
        RegionLabel::Sidebar
    );
}

#[test]
fn test_sidebar_near_right_edge() {
    let mut element = element_with_ancestors(vec![ancestor("div")]);
    element.bounding_box = Some(BoundingBox {
        right: Some(1200.0),
        ..Default::default()
    });
    assert_eq!(
        classify_region(&element, Some(&viewport())),
        RegionLabel::Sidebar
    );
}

#[test]
fn test_main_tag_and_keyword() {
    let element = element_with_ancestors(vec![ancestor("main")]);
    assert_eq!(classify_region(&element, None), RegionLabel::Main);

    let by_class = element_with_ancestors(vec![AncestorInfo {
        tag: Some("div".to_string()),
        class_list: Some("page-content".to_string()),
        ..Default::default()
    }]);
    assert_eq!(classify_region(&by_class, None), RegionLabel::Main);
}

#[test]
fn test_uppercase_signals_are_normalized() {
    let element = element_with_ancestors(vec![AncestorInfo {
        tag: Some("HEADER".to_string()),
        ..Default::default()
    }]);
    assert_eq!(classify_region(&element, None), RegionLabel::Header);
}

#[test]
fn test_plain_div_chain_is_text() {
    let element = element_with_ancestors(vec![ancestor("div"), ancestor("span")]);
    assert_eq!(classify_region(&element, Some(&viewport())), RegionLabel::Text);
}

#[test]
fn test_region_label_serialization() {
    assert_eq!(
        serde_json::to_string(&RegionLabel::Popup).unwrap(),
        "\"popup\""
    );
    assert_eq!(RegionLabel::default(), RegionLabel::Text);
    assert_eq!(RegionLabel::Sidebar.as_str(), "sidebar");
}
