//! Evidence extraction: which element attributes say what, and how much
//! each kind of attribute is worth.
//!
//! Machine-facing attributes (`id`, `name`, `autocomplete`, `data-*`) are the
//! strongest signal of a control's identity, human-facing labels and
//! placeholders come next, and visible or recognized text is weakest. The
//! scorer fuses the best match from each category using these weights.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::similarity::normalize_text;
use crate::types::ScrapedElement;

pub const ATTRIBUTE_WEIGHT: f64 = 0.5;
pub const PLACEHOLDER_WEIGHT: f64 = 0.3;
pub const VISUAL_WEIGHT: f64 = 0.2;
/// Sum of all category weights; a perfect element scores exactly this.
pub const TOTAL_WEIGHT: f64 = ATTRIBUTE_WEIGHT + PLACEHOLDER_WEIGHT + VISUAL_WEIGHT;

/// Which element attribute a piece of evidence came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceTag {
    Id,
    Name,
    Autocomplete,
    /// A `data-*` attribute, carrying its key.
    DataAttribute(String),
    Label,
    Placeholder,
    AriaLabel,
    AriaLabelledBy,
    Text,
    OcrText,
    VisualText,
    /// Current control value. Reported but never weighted: values reflect
    /// user input, not the control's identity.
    Value,
}

impl SourceTag {
    /// Parse the wire form produced by [`Display`](fmt::Display).
    pub fn parse(raw: &str) -> Option<SourceTag> {
        if let Some(key) = raw.strip_prefix("data_attributes.") {
            return Some(SourceTag::DataAttribute(key.to_string()));
        }
        match raw {
            "id" => Some(SourceTag::Id),
            "name" => Some(SourceTag::Name),
            "autocomplete" => Some(SourceTag::Autocomplete),
            "label" => Some(SourceTag::Label),
            "placeholder" => Some(SourceTag::Placeholder),
            "ariaLabel" => Some(SourceTag::AriaLabel),
            "ariaLabelledBy" => Some(SourceTag::AriaLabelledBy),
            "text" => Some(SourceTag::Text),
            "ocr_text" => Some(SourceTag::OcrText),
            "visual_text" => Some(SourceTag::VisualText),
            "value" => Some(SourceTag::Value),
            _ => None,
        }
    }

    /// The weighted category this source belongs to; `None` for `value`.
    pub fn category(&self) -> Option<EvidenceCategory> {
        match self {
            SourceTag::Id
            | SourceTag::Name
            | SourceTag::Autocomplete
            | SourceTag::DataAttribute(_) => Some(EvidenceCategory::Attribute),
            SourceTag::Label
            | SourceTag::Placeholder
            | SourceTag::AriaLabel
            | SourceTag::AriaLabelledBy => Some(EvidenceCategory::Placeholder),
            SourceTag::Text | SourceTag::OcrText | SourceTag::VisualText => {
                Some(EvidenceCategory::Visual)
            }
            SourceTag::Value => None,
        }
    }
}

impl fmt::Display for SourceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceTag::Id => f.write_str("id"),
            SourceTag::Name => f.write_str("name"),
            SourceTag::Autocomplete => f.write_str("autocomplete"),
            SourceTag::DataAttribute(key) => write!(f, "data_attributes.{}", key),
            SourceTag::Label => f.write_str("label"),
            SourceTag::Placeholder => f.write_str("placeholder"),
            SourceTag::AriaLabel => f.write_str("ariaLabel"),
            SourceTag::AriaLabelledBy => f.write_str("ariaLabelledBy"),
            SourceTag::Text => f.write_str("text"),
            SourceTag::OcrText => f.write_str("ocr_text"),
            SourceTag::VisualText => f.write_str("visual_text"),
            SourceTag::Value => f.write_str("value"),
        }
    }
}

impl Serialize for SourceTag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for SourceTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        SourceTag::parse(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown evidence source: {raw}")))
    }
}

/// Weighted evidence category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EvidenceCategory {
    /// Machine-facing identifiers: id, name, autocomplete, data-*.
    Attribute,
    /// Human-facing labels: label, placeholder, aria text.
    Placeholder,
    /// Visible or recognized text.
    Visual,
}

impl EvidenceCategory {
    pub fn weight(self) -> f64 {
        match self {
            EvidenceCategory::Attribute => ATTRIBUTE_WEIGHT,
            EvidenceCategory::Placeholder => PLACEHOLDER_WEIGHT,
            EvidenceCategory::Visual => VISUAL_WEIGHT,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EvidenceCategory::Attribute => "attribute",
            EvidenceCategory::Placeholder => "placeholder",
            EvidenceCategory::Visual => "visual",
        }
    }
}

/// One piece of evidence extracted from an element.
#[derive(Debug, Clone)]
pub struct EvidenceItem {
    /// Trimmed text exactly as scraped; regex patterns run against this.
    pub raw: String,
    /// Normalized form compared against the synonym vocabulary.
    pub normalized: String,
    pub source: SourceTag,
}

/// Extract every usable piece of evidence from an element, in a fixed order.
///
/// Whitespace-only values and values that normalize to nothing (pure
/// punctuation or non-ASCII) are skipped. `data-*` attributes come last, in
/// key order.
pub fn collect_evidence(element: &ScrapedElement) -> Vec<EvidenceItem> {
    let mut items = Vec::new();
    push(&mut items, element.label.as_deref(), SourceTag::Label);
    push(
        &mut items,
        element.placeholder.as_deref(),
        SourceTag::Placeholder,
    );
    push(&mut items, element.name.as_deref(), SourceTag::Name);
    push(&mut items, element.id.as_deref(), SourceTag::Id);
    push(&mut items, element.text.as_deref(), SourceTag::Text);
    push(
        &mut items,
        element.autocomplete.as_deref(),
        SourceTag::Autocomplete,
    );
    push(&mut items, element.aria_label.as_deref(), SourceTag::AriaLabel);
    push(
        &mut items,
        element.aria_labelledby.as_deref(),
        SourceTag::AriaLabelledBy,
    );
    push(&mut items, element.value.as_deref(), SourceTag::Value);
    push(&mut items, element.ocr_text.as_deref(), SourceTag::OcrText);
    push(
        &mut items,
        element.visual_text.as_deref(),
        SourceTag::VisualText,
    );
    for (key, value) in &element.data_attributes {
        push(
            &mut items,
            Some(value.as_str()),
            SourceTag::DataAttribute(key.clone()),
        );
    }
    items
}

fn push(items: &mut Vec<EvidenceItem>, value: Option<&str>, source: SourceTag) {
    let Some(raw) = value else { return };
    let stripped = raw.trim();
    if stripped.is_empty() {
        return;
    }
    let normalized = normalize_text(stripped);
    if normalized.is_empty() {
        return;
    }
    items.push(EvidenceItem {
        raw: stripped.to_string(),
        normalized,
        source,
    });
}

#[cfg(test)]
#[path = "evidence_test.rs"]
mod evidence_test;
