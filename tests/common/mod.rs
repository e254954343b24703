// Common test utilities and fixtures

use std::collections::BTreeMap;

use fieldprobe::{BoundingBox, Candidate, FieldMatch, PageSnapshot, RegionLabel, ScrapedElement};

/// Bounding box carrying just the position the tie-break heuristics read.
#[allow(dead_code)]
pub fn bbox_at(top: f64, left: f64) -> BoundingBox {
    BoundingBox {
        top: Some(top),
        left: Some(left),
        ..Default::default()
    }
}

/// Element with only an id, the evidence most scrapers always have.
#[allow(dead_code)]
pub fn element_with_id(id: &str) -> ScrapedElement {
    ScrapedElement {
        id: Some(id.to_string()),
        ..Default::default()
    }
}

/// Input element with a type attribute and optional geometry.
#[allow(dead_code)]
pub fn typed_element(input_type: &str, bounding_box: Option<BoundingBox>) -> ScrapedElement {
    ScrapedElement {
        tag: Some("INPUT".to_string()),
        r#type: Some(input_type.to_string()),
        bounding_box,
        ..Default::default()
    }
}

/// Minimal ranked match for handcrafted candidates.
#[allow(dead_code)]
pub fn field_match(field: &str, score: f64) -> FieldMatch {
    FieldMatch {
        field: field.to_string(),
        score,
        score_percent: score * 100.0,
        method: None,
        contributors: Vec::new(),
        breakdown: BTreeMap::new(),
        weights_applied: 0.0,
    }
}

/// Candidate in the default region with the given matches.
#[allow(dead_code)]
pub fn candidate_with(element: ScrapedElement, matches: Vec<FieldMatch>) -> Candidate {
    Candidate::new(element, RegionLabel::Text, matches)
}

#[allow(dead_code)]
pub fn snapshot(elements: Vec<ScrapedElement>) -> PageSnapshot {
    PageSnapshot {
        viewport: None,
        elements,
    }
}

/// Snapshot fixtures in the JSON form scrapers emit.
pub mod fixtures {
    /// A login page: email, password, submit button, and a footer
    /// newsletter input that reuses the id "email".
    #[allow(dead_code)]
    pub const LOGIN_PAGE: &str = r#"{
        "viewport": {"width": 1280.0, "height": 800.0},
        "elements": [
            {
                "tag": "input", "type": "email", "id": "email",
                "placeholder": "Email address",
                "bounding_box": {"top": 220.0, "left": 460.0, "width": 360.0, "height": 40.0}
            },
            {
                "tag": "input", "type": "password", "id": "password",
                "label": "Password",
                "bounding_box": {"top": 280.0, "left": 460.0, "width": 360.0, "height": 40.0}
            },
            {
                "tag": "button", "type": "submit", "text": "Sign in",
                "bounding_box": {"top": 340.0, "left": 460.0, "width": 360.0, "height": 44.0}
            },
            {
                "tag": "input", "id": "email",
                "placeholder": "Subscribe to our newsletter",
                "bounding_box": {"top": 760.0, "left": 80.0, "width": 280.0, "height": 32.0},
                "ancestors": [{"tag": "footer"}]
            }
        ]
    }"#;

    /// A signup form with name fields split across two columns.
    #[allow(dead_code)]
    pub const SIGNUP_PAGE: &str = r#"{
        "viewport": {"width": 1280.0, "height": 800.0},
        "elements": [
            {
                "tag": "input", "type": "text", "id": "first-name",
                "name": "firstname", "placeholder": "First Name",
                "bounding_box": {"top": 180.0, "left": 320.0, "width": 300.0, "height": 40.0}
            },
            {
                "tag": "input", "type": "text", "id": "last-name",
                "name": "lastname", "placeholder": "Last Name",
                "bounding_box": {"top": 180.0, "left": 660.0, "width": 300.0, "height": 40.0}
            },
            {
                "tag": "input", "type": "email", "name": "email",
                "ariaLabel": "Work email",
                "bounding_box": {"top": 240.0, "left": 320.0, "width": 640.0, "height": 40.0}
            }
        ]
    }"#;
}
