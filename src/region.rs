//! Page-region classification from an element's ancestor chain.
//!
//! Regions answer "where on the page does this control live" so callers can,
//! for example, prefer a main-content login form over the one in the site
//! header. Classification walks structural signals in priority order and the
//! first hit wins; an element with no usable signal lands in the default
//! `text` region. Classification never fails.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::types::{AncestorInfo, BoundingBox, ScrapedElement, Viewport};

const POPUP_KEYWORDS: &[&str] = &[
    "modal", "popup", "popover", "overlay", "dialog", "sheet", "lightbox", "tooltip",
];
const HEADER_KEYWORDS: &[&str] = &[
    "header", "topbar", "masthead", "navbar", "top-nav", "appbar", "site-header",
];
const FOOTER_KEYWORDS: &[&str] = &["footer", "site-footer", "bottom", "copyright"];
const SIDEBAR_KEYWORDS: &[&str] = &[
    "sidebar", "side-bar", "sidenav", "drawer", "rail", "offcanvas",
];
const MAIN_KEYWORDS: &[&str] = &[
    "main", "content", "article", "primary", "body", "text", "page",
];

/// Where on the page an element lives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionLabel {
    Popup,
    Header,
    Footer,
    Sidebar,
    Main,
    /// Default when no structural signal applies.
    #[default]
    Text,
}

impl RegionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLabel::Popup => "popup",
            RegionLabel::Header => "header",
            RegionLabel::Footer => "footer",
            RegionLabel::Sidebar => "sidebar",
            RegionLabel::Main => "main",
            RegionLabel::Text => "text",
        }
    }
}

/// Classify an element by walking its ancestors and geometry.
///
/// Priority order: popup, header, footer, sidebar, main, then the `text`
/// default. An element without ancestor data is always `text`.
pub fn classify_region(element: &ScrapedElement, viewport: Option<&Viewport>) -> RegionLabel {
    let ancestors = &element.ancestors;
    if ancestors.is_empty() {
        return RegionLabel::Text;
    }
    let rect = element.bounding_box.as_ref();

    let label = if is_popup(ancestors) {
        RegionLabel::Popup
    } else if is_header(ancestors, rect, viewport) {
        RegionLabel::Header
    } else if is_footer(ancestors, rect, viewport) {
        RegionLabel::Footer
    } else if is_sidebar(ancestors, rect, viewport) {
        RegionLabel::Sidebar
    } else if is_main(ancestors) {
        RegionLabel::Main
    } else {
        RegionLabel::Text
    };
    debug!("Classified element as region '{}'", label.as_str());
    label
}

/// Lowercased `id` plus `classList`, the haystack for keyword checks.
fn identifier(ancestor: &AncestorInfo) -> String {
    let mut parts = Vec::new();
    if let Some(id) = ancestor.id.as_deref() {
        if !id.is_empty() {
            parts.push(id.to_lowercase());
        }
    }
    if let Some(classes) = ancestor.class_list.as_deref() {
        if !classes.is_empty() {
            parts.push(classes.to_lowercase());
        }
    }
    parts.join(" ")
}

fn any_keyword(ancestors: &[AncestorInfo], keywords: &[&str]) -> bool {
    ancestors.iter().any(|ancestor| {
        let identifier = identifier(ancestor);
        !identifier.is_empty() && keywords.iter().any(|keyword| identifier.contains(keyword))
    })
}

fn any_tag(ancestors: &[AncestorInfo], tags: &[&str]) -> bool {
    ancestors.iter().any(|ancestor| {
        ancestor
            .tag
            .as_deref()
            .is_some_and(|tag| tags.contains(&tag.to_lowercase().as_str()))
    })
}

fn any_role(ancestors: &[AncestorInfo], roles: &[&str]) -> bool {
    ancestors.iter().any(|ancestor| {
        ancestor
            .role
            .as_deref()
            .is_some_and(|role| roles.contains(&role.to_lowercase().as_str()))
    })
}

fn is_popup(ancestors: &[AncestorInfo]) -> bool {
    ancestors.iter().any(|ancestor| {
        if ancestor
            .aria_modal
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case("true"))
        {
            return true;
        }
        if ancestor
            .tag
            .as_deref()
            .is_some_and(|tag| tag.eq_ignore_ascii_case("dialog"))
        {
            return true;
        }
        if ancestor.role.as_deref().is_some_and(|role| {
            role.eq_ignore_ascii_case("dialog") || role.eq_ignore_ascii_case("alertdialog")
        }) {
            return true;
        }
        let identifier = identifier(ancestor);
        POPUP_KEYWORDS
            .iter()
            .any(|keyword| identifier.contains(keyword))
    })
}

fn is_header(
    ancestors: &[AncestorInfo],
    rect: Option<&BoundingBox>,
    viewport: Option<&Viewport>,
) -> bool {
    any_tag(ancestors, &["header", "nav"])
        || any_role(ancestors, &["banner"])
        || any_keyword(ancestors, HEADER_KEYWORDS)
        || near_top(rect, viewport)
}

fn is_footer(
    ancestors: &[AncestorInfo],
    rect: Option<&BoundingBox>,
    viewport: Option<&Viewport>,
) -> bool {
    any_tag(ancestors, &["footer"])
        || any_role(ancestors, &["contentinfo"])
        || any_keyword(ancestors, FOOTER_KEYWORDS)
        || near_bottom(rect, viewport)
}

fn is_sidebar(
    ancestors: &[AncestorInfo],
    rect: Option<&BoundingBox>,
    viewport: Option<&Viewport>,
) -> bool {
    any_tag(ancestors, &["aside"])
        || any_role(ancestors, &["complementary", "navigation"])
        || any_keyword(ancestors, SIDEBAR_KEYWORDS)
        || near_side(rect, viewport)
}

fn is_main(ancestors: &[AncestorInfo]) -> bool {
    any_tag(ancestors, &["main", "article", "section"])
        || any_role(ancestors, &["main"])
        || any_keyword(ancestors, MAIN_KEYWORDS)
}

fn near_top(rect: Option<&BoundingBox>, viewport: Option<&Viewport>) -> bool {
    let Some(top) = rect.and_then(|r| r.top) else {
        return false;
    };
    let height = viewport.map(|v| v.height).unwrap_or(0.0);
    let threshold = if height > 0.0 {
        (height * 0.15).max(120.0)
    } else {
        120.0
    };
    (-threshold..=threshold).contains(&top)
}

fn near_bottom(rect: Option<&BoundingBox>, viewport: Option<&Viewport>) -> bool {
    let Some(bottom) = rect.and_then(|r| r.bottom) else {
        return false;
    };
    let height = viewport.map(|v| v.height).unwrap_or(0.0);
    if height <= 0.0 {
        return false;
    }
    let threshold = (height * 0.15).max(120.0);
    (height - threshold..=height + threshold).contains(&bottom)
}

fn near_side(rect: Option<&BoundingBox>, viewport: Option<&Viewport>) -> bool {
    let width = viewport.map(|v| v.width).unwrap_or(0.0);
    if width <= 0.0 {
        return false;
    }
    let threshold = (width * 0.15).max(160.0);
    let left_match = rect
        .and_then(|r| r.left)
        .is_some_and(|left| (-threshold..=threshold).contains(&left));
    let right_match = rect
        .and_then(|r| r.right)
        .is_some_and(|right| (width - threshold..=width + threshold).contains(&right));
    left_match || right_match
}

#[cfg(test)]
#[path = "region_test.rs"]
mod region_test;
