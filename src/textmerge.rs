//! Merge recognized text boxes (e.g. from an OCR pass over a screenshot)
//! into scraped elements ahead of scoring.
//!
//! Each recognized box is scored against each element by spatial overlap,
//! text similarity and recognition confidence; the best box above the
//! threshold supplies the element's `ocr_text`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::similarity::indel_ratio;
use crate::types::{BoundingBox, ScrapedElement};

const SPATIAL_WEIGHT: f64 = 0.4;
const TEXT_WEIGHT: f64 = 0.4;
const CONFIDENCE_WEIGHT: f64 = 0.2;

/// Default minimum combined score for a recognized box to attach to an
/// element.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.3;

/// One recognized text box.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecognizedText {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
    /// Recognition confidence in 0-1.
    #[serde(default = "default_confidence")]
    pub confidence: f64,
}

fn default_confidence() -> f64 {
    1.0
}

/// Axis-aligned rectangle in x/y/width/height form.
#[derive(Debug, Clone, Copy)]
struct Rect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl Rect {
    /// Accepts both width/height and right/bottom box forms; absent sides
    /// default the way partial geometry is scraped (origin 0, extent 0).
    fn from_bbox(bbox: &BoundingBox) -> Option<Rect> {
        if !bbox.has_geometry() {
            return None;
        }
        let x = bbox.left.unwrap_or(0.0);
        let y = bbox.top.unwrap_or(0.0);
        if let (Some(width), Some(height)) = (bbox.width, bbox.height) {
            return Some(Rect {
                x,
                y,
                width,
                height,
            });
        }
        let x2 = bbox.right.unwrap_or(x);
        let y2 = bbox.bottom.unwrap_or(y);
        Some(Rect {
            x,
            y,
            width: x2 - x,
            height: y2 - y,
        })
    }

    fn x2(self) -> f64 {
        self.x + self.width
    }

    fn y2(self) -> f64 {
        self.y + self.height
    }

    fn center(self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    fn area(self) -> f64 {
        self.width * self.height
    }

    fn intersection_over_union(self, other: Rect) -> f64 {
        let x_left = self.x.max(other.x);
        let y_top = self.y.max(other.y);
        let x_right = self.x2().min(other.x2());
        let y_bottom = self.y2().min(other.y2());
        if x_right < x_left || y_bottom < y_top {
            return 0.0;
        }
        let intersection = (x_right - x_left) * (y_bottom - y_top);
        let union = self.area() + other.area() - intersection;
        if union == 0.0 {
            return 0.0;
        }
        intersection / union
    }

    fn contains_point(self, x: f64, y: f64) -> bool {
        self.x <= x && x <= self.x2() && self.y <= y && y <= self.y2()
    }
}

fn spatial_weight(element: Rect, text_box: Rect) -> f64 {
    let iou = element.intersection_over_union(text_box);
    // Low overlap can still be a contained label, common for buttons.
    if iou < 0.3 {
        let (cx, cy) = text_box.center();
        if element.contains_point(cx, cy) {
            return 0.7;
        }
    }
    iou
}

fn text_weight(element_text: Option<&str>, recognized: &str) -> f64 {
    let element_text = element_text.unwrap_or("").trim().to_lowercase();
    let recognized = recognized.trim().to_lowercase();
    if element_text.is_empty() || recognized.is_empty() {
        return 0.0;
    }
    if element_text == recognized {
        return 1.0;
    }
    if element_text.contains(&recognized) || recognized.contains(&element_text) {
        return 0.8;
    }
    indel_ratio(&element_text, &recognized) / 100.0
}

fn combined_weight(spatial: f64, text: f64, confidence: f64) -> f64 {
    let combined = spatial * SPATIAL_WEIGHT + text * TEXT_WEIGHT + confidence * CONFIDENCE_WEIGHT;
    if spatial > 0.6 && text > 0.6 {
        return (combined * 1.2).min(1.0);
    }
    combined
}

/// Attach recognized text to the elements it visually belongs to.
///
/// Elements that already carry `ocr_text` or have no geometry are left
/// alone; recognized boxes with blank text or no geometry are skipped.
/// Returns the number of elements annotated.
pub fn merge_recognized_text(
    elements: &mut [ScrapedElement],
    recognized: &[RecognizedText],
    threshold: f64,
) -> usize {
    let mut annotated = 0;
    for element in elements.iter_mut() {
        if element.ocr_text.is_some() {
            continue;
        }
        let Some(rect) = element.bounding_box.as_ref().and_then(Rect::from_bbox) else {
            continue;
        };

        let mut best: Option<(f64, &RecognizedText)> = None;
        for candidate in recognized {
            if candidate.text.trim().is_empty() {
                continue;
            }
            let Some(text_rect) = candidate.bounding_box.as_ref().and_then(Rect::from_bbox) else {
                continue;
            };
            let spatial = spatial_weight(rect, text_rect);
            let text = text_weight(element.text.as_deref(), &candidate.text);
            let score = combined_weight(spatial, text, candidate.confidence);
            if score < threshold {
                continue;
            }
            match best {
                Some((existing, _)) if score <= existing => {}
                _ => best = Some((score, candidate)),
            }
        }

        if let Some((score, chosen)) = best {
            debug!(
                "Attached recognized text {:?} to element (score {:.3})",
                chosen.text, score
            );
            element.ocr_text = Some(chosen.text.trim().to_string());
            annotated += 1;
        }
    }
    annotated
}

#[cfg(test)]
#[path = "textmerge_test.rs"]
mod textmerge_test;
