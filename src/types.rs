//! Core data types: scraped elements, geometry, snapshots, and candidates.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::region::RegionLabel;
use crate::scoring::FieldMatch;

/// A scraped DOM form control with the attributes evidence is drawn from.
///
/// Every attribute is optional; scrapers differ in what they can observe.
/// Unknown JSON keys are ignored so snapshots from newer scrapers still load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrapedElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autocomplete: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(rename = "ariaLabel", skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,
    #[serde(rename = "ariaLabelledBy", skip_serializing_if = "Option::is_none")]
    pub aria_labelledby: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocr_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visual_text: Option<String>,
    /// `data-*` attributes keyed by attribute name. Kept ordered so evidence
    /// collection and serialized output are deterministic.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub data_attributes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Ancestor chain from the element upward, used for region classification.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ancestors: Vec<AncestorInfo>,
}

/// Viewport-relative geometry for a scraped element.
///
/// Scrapers may provide a partial rectangle; each side is optional. An
/// all-`None` box carries no geometry and is ignored by position heuristics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl BoundingBox {
    /// True when at least one side or dimension is present.
    pub fn has_geometry(&self) -> bool {
        self.top.is_some()
            || self.left.is_some()
            || self.right.is_some()
            || self.bottom.is_some()
            || self.width.is_some()
            || self.height.is_some()
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Parse a viewport spec like `1280x800`.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('x').collect();
        if parts.len() != 2 {
            anyhow::bail!("Invalid viewport format. Use WIDTHxHEIGHT (e.g., 1280x800)");
        }
        let width: f64 = parts[0]
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid viewport width: {}", parts[0]))?;
        let height: f64 = parts[1]
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid viewport height: {}", parts[1]))?;
        Ok(Self { width, height })
    }
}

/// One ancestor of a scraped element, from the element upward.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AncestorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "classList", skip_serializing_if = "Option::is_none")]
    pub class_list: Option<String>,
    #[serde(rename = "ariaModal", skip_serializing_if = "Option::is_none")]
    pub aria_modal: Option<String>,
}

/// Everything scraped from one page: viewport plus the elements found on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
    pub elements: Vec<ScrapedElement>,
}

/// A scored element: its region, ranked field matches, and convenience
/// fields derived from the top match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub element: ScrapedElement,
    pub region: RegionLabel,
    pub matches: Vec<FieldMatch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_field: Option<String>,
    pub score: f64,
    pub score_percent: f64,
}

impl Candidate {
    /// Build a candidate, deriving the convenience fields from the top match.
    pub fn new(element: ScrapedElement, region: RegionLabel, matches: Vec<FieldMatch>) -> Self {
        let (canonical_field, score, score_percent) = match matches.first() {
            Some(top) => (Some(top.field.clone()), top.score, top.score_percent),
            None => (None, 0.0, 0.0),
        };
        Self {
            element,
            region,
            matches,
            canonical_field,
            score,
            score_percent,
        }
    }
}

/// Output format for command results
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full JSON output
    Json,
    /// Simplified human-readable output
    Simple,
}

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;
