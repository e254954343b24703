//! Per-field disambiguation: pick one winning element for each canonical
//! field a page's candidates matched.
//!
//! Candidates competing for the same field go through a fixed cascade:
//! score (with a tie tolerance), expected input type or tag, reading-order
//! position from bounding boxes, then an optional external resolver. The
//! first stage that narrows the pool to one decides the winner and is
//! recorded as the resolution method.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::resolver::{AmbiguityResolver, TieEntry, UnknownFieldResolver};
use crate::scoring::FieldMatch;
use crate::types::Candidate;

/// Expected `type` attribute values per field. A candidate of another type
/// is dropped when any candidate in the pool matches the expectation.
static FIELD_TYPE_HINTS: &[(&str, &[&str])] = &[
    ("email", &["email"]),
    ("phone", &["tel", "text", "number"]),
    ("resume", &["file"]),
    ("cover_letter", &["file", "textarea", "text"]),
    ("portfolio", &["url", "text"]),
    ("linkedin", &["url", "text"]),
    ("github", &["url", "text"]),
    ("twitter", &["text"]),
    ("website", &["url", "text"]),
    ("dob", &["date", "text"]),
    ("password", &["password"]),
    ("confirm_password", &["password"]),
    ("search_input", &["search", "text"]),
    ("search_query", &["search", "text"]),
    ("search_button", &["submit", "button"]),
    ("submit_button", &["submit", "button"]),
    ("next_button", &["submit", "button"]),
    ("cancel_button", &["button"]),
    ("login_button", &["submit", "button"]),
    ("signup_button", &["submit", "button"]),
    ("add_to_cart", &["submit", "button"]),
    ("buy_now", &["submit", "button"]),
    ("google_login", &["submit", "button"]),
    ("facebook_login", &["submit", "button"]),
    ("twitter_login", &["submit", "button"]),
    ("github_login", &["submit", "button"]),
    ("linkedin_login", &["submit", "button"]),
    ("apple_login", &["submit", "button"]),
    ("quantity", &["number", "select", "text"]),
    ("price_min", &["number", "text"]),
    ("price_max", &["number", "text"]),
    ("condition", &["select", "text"]),
    ("size", &["select", "text"]),
    ("color", &["select", "text"]),
    ("category", &["select", "text"]),
    ("comment", &["textarea", "text"]),
    ("newsletter", &["email", "text"]),
    ("work_authorization", &["select", "radio", "text"]),
    ("sms_optin", &["checkbox"]),
    ("email_optin", &["checkbox"]),
    ("job_alerts", &["checkbox"]),
    ("remote_work", &["checkbox", "radio", "select"]),
    ("future_consideration", &["checkbox"]),
    ("signature", &["text"]),
    ("acknowledgement", &["checkbox"]),
    ("pronoun", &["select", "text"]),
    ("veteran_status", &["select", "radio"]),
    ("disability_status", &["select", "radio"]),
    ("race_ethnicity", &["select"]),
    ("referral_source", &["text", "select"]),
    ("compensation_expectations", &["text", "number"]),
    ("reason_leaving", &["text", "textarea"]),
    ("employment_type_preference", &["select", "checkbox"]),
    ("education_level", &["select", "text"]),
    ("school_name", &["text"]),
    ("area_of_study", &["text", "select"]),
    ("graduation_status", &["select", "radio", "date"]),
];

/// Expected element tags per field, lowercase.
static FIELD_TAG_HINTS: &[(&str, &[&str])] = &[
    ("gender", &["select", "input"]),
    ("resume", &["input"]),
    ("cover_letter", &["textarea", "input"]),
    ("submit_button", &["button", "input"]),
    ("next_button", &["button", "input"]),
    ("cancel_button", &["button", "input"]),
    ("login_button", &["button", "input"]),
    ("signup_button", &["button", "input"]),
    ("search_button", &["button", "input"]),
    ("add_to_cart", &["button", "input"]),
    ("buy_now", &["button", "input"]),
    ("google_login", &["button", "input"]),
    ("facebook_login", &["button", "input"]),
    ("twitter_login", &["button", "input"]),
    ("github_login", &["button", "input"]),
    ("linkedin_login", &["button", "input"]),
    ("apple_login", &["button", "input"]),
    ("job_type", &["select", "input"]),
    ("experience_level", &["select", "input"]),
    ("salary", &["select", "input"]),
    ("condition", &["select", "input"]),
    ("size", &["select", "input"]),
    ("color", &["select", "input"]),
    ("category", &["select", "input"]),
    ("country", &["select", "input"]),
    ("state", &["select", "input"]),
    ("comment", &["textarea"]),
    ("work_authorization", &["select", "input"]),
    ("sms_optin", &["input"]),
    ("email_optin", &["input"]),
    ("job_alerts", &["input"]),
    ("remote_work", &["input", "select"]),
    ("future_consideration", &["input"]),
    ("signature", &["input"]),
    ("acknowledgement", &["input"]),
    ("pronoun", &["select", "input"]),
    ("veteran_status", &["select", "input"]),
    ("disability_status", &["select", "input"]),
    ("race_ethnicity", &["select"]),
    ("referral_source", &["input", "select", "textarea"]),
    ("compensation_expectations", &["input"]),
    ("reason_leaving", &["input", "textarea"]),
    ("employment_type_preference", &["select", "input"]),
    ("education_level", &["select", "input"]),
    ("school_name", &["input"]),
    ("area_of_study", &["input", "select"]),
    ("graduation_status", &["select", "input"]),
];

fn type_hints(field: &str) -> Option<&'static [&'static str]> {
    FIELD_TYPE_HINTS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, hints)| *hints)
}

fn tag_hints(field: &str) -> Option<&'static [&'static str]> {
    FIELD_TAG_HINTS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, hints)| *hints)
}

/// Which stage of the cascade settled a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolvedBy {
    /// Score ranking alone was decisive.
    Score,
    /// The expected input type or tag narrowed the pool.
    InputType,
    /// Reading-order position picked the winner.
    BoundingBox,
    /// An external [`AmbiguityResolver`] chose.
    Resolver,
    /// An [`UnknownFieldResolver`] assigned the field.
    UnknownResolver,
}

impl fmt::Display for ResolvedBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResolvedBy::Score => "score",
            ResolvedBy::InputType => "input_type",
            ResolvedBy::BoundingBox => "bounding_box",
            ResolvedBy::Resolver => "resolver",
            ResolvedBy::UnknownResolver => "unknown_resolver",
        })
    }
}

/// The disambiguated winner for one canonical field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldResolution {
    /// Index of the winning candidate in the input order.
    pub candidate_index: usize,
    pub score: f64,
    pub score_percent: f64,
    /// The match that won. Unknown-resolver assignments may omit it.
    #[serde(rename = "match", default, skip_serializing_if = "Option::is_none")]
    pub field_match: Option<FieldMatch>,
    pub resolved_by: ResolvedBy,
}

/// Disambiguate candidates into at most one winner per canonical field.
///
/// Every field named by any candidate's matches gets exactly one resolution.
/// Candidates with no matches are offered to the unknown-field resolver,
/// whose assignments fill in fields that are still open.
pub fn select_best_candidates(
    candidates: &[Candidate],
    resolver: Option<&dyn AmbiguityResolver>,
    unknown_resolver: Option<&dyn UnknownFieldResolver>,
    score_tolerance: f64,
) -> BTreeMap<String, FieldResolution> {
    let mut field_entries: BTreeMap<String, Vec<TieEntry<'_>>> = BTreeMap::new();
    let mut unresolved: Vec<(usize, &Candidate)> = Vec::new();

    for (index, candidate) in candidates.iter().enumerate() {
        if candidate.matches.is_empty() {
            unresolved.push((index, candidate));
            continue;
        }
        for field_match in &candidate.matches {
            field_entries
                .entry(field_match.field.clone())
                .or_default()
                .push(TieEntry {
                    index,
                    candidate,
                    field_match,
                });
        }
    }

    let mut results: BTreeMap<String, FieldResolution> = BTreeMap::new();

    for (field, mut entries) in field_entries {
        // Stable sort keeps input order among equal scores.
        entries.sort_by(|a, b| b.field_match.score.total_cmp(&a.field_match.score));
        let top_score = entries[0].field_match.score;
        let tolerance = score_tolerance.max(0.0);
        let mut pool: Vec<TieEntry<'_>> = entries
            .iter()
            .copied()
            .filter(|entry| entry.field_match.score >= top_score - tolerance)
            .collect();

        let mut resolved_by = ResolvedBy::Score;

        if let Some(filtered) = filter_by_type(&field, &pool) {
            if filtered.len() < pool.len() {
                debug!(
                    "Field '{}': type filter narrowed {} candidate(s) to {}",
                    field,
                    pool.len(),
                    filtered.len()
                );
            }
            pool = filtered;
            resolved_by = ResolvedBy::InputType;
        }

        if pool.len() > 1 {
            pool.sort_by(bbox_order);
            if pool.iter().any(has_real_bbox) {
                debug!(
                    "Field '{}': bounding box picked candidate #{}",
                    field, pool[0].index
                );
                pool.truncate(1);
                resolved_by = ResolvedBy::BoundingBox;
            }
        }

        if pool.len() > 1 {
            if let Some(chooser) = resolver {
                if let Some(choice) = chooser.resolve(&field, &pool) {
                    if let Some(entry) = pool.iter().copied().find(|e| e.index == choice) {
                        debug!("Field '{}': resolver picked candidate #{}", field, choice);
                        pool = vec![entry];
                        resolved_by = ResolvedBy::Resolver;
                    }
                }
            }
        }

        let chosen = pool[0];
        results.insert(
            field,
            FieldResolution {
                candidate_index: chosen.index,
                score: chosen.field_match.score,
                score_percent: chosen.field_match.score_percent,
                field_match: Some(chosen.field_match.clone()),
                resolved_by,
            },
        );
    }

    if let Some(assigner) = unknown_resolver {
        if !unresolved.is_empty() {
            for assignment in assigner.resolve(&unresolved) {
                if results.contains_key(&assignment.field) {
                    continue;
                }
                let score = assignment.score;
                let score_percent = assignment.score_percent.unwrap_or(if score <= 1.0 {
                    score * 100.0
                } else {
                    score
                });
                results.insert(
                    assignment.field,
                    FieldResolution {
                        candidate_index: assignment.candidate_index,
                        score,
                        score_percent,
                        field_match: assignment.field_match,
                        resolved_by: ResolvedBy::UnknownResolver,
                    },
                );
            }
        }
    }

    results
}

/// Keep pool entries whose type or tag matches the field's expectation.
///
/// `None` means the filter does not apply: the field has no hints, or no
/// entry satisfies them. The pool is left untouched in that case.
fn filter_by_type<'a>(field: &str, entries: &[TieEntry<'a>]) -> Option<Vec<TieEntry<'a>>> {
    let expected_types = type_hints(field);
    let expected_tags = tag_hints(field);
    if expected_types.is_none() && expected_tags.is_none() {
        return None;
    }

    let filtered: Vec<TieEntry<'a>> = entries
        .iter()
        .copied()
        .filter(|entry| {
            let element = &entry.candidate.element;
            let type_value = element.r#type.as_deref().unwrap_or("").to_lowercase();
            let tag_value = element.tag.as_deref().unwrap_or("").to_lowercase();
            let type_match =
                expected_types.is_some_and(|types| types.contains(&type_value.as_str()));
            let tag_match = expected_tags.is_some_and(|tags| tags.contains(&tag_value.as_str()));
            type_match || tag_match
        })
        .collect();

    if filtered.is_empty() { None } else { Some(filtered) }
}

/// Reading order: top, then left, then input index. Missing coordinates sort
/// last.
fn bbox_order(a: &TieEntry<'_>, b: &TieEntry<'_>) -> std::cmp::Ordering {
    let (a_top, a_left) = bbox_position(a);
    let (b_top, b_left) = bbox_position(b);
    a_top
        .total_cmp(&b_top)
        .then(a_left.total_cmp(&b_left))
        .then(a.index.cmp(&b.index))
}

fn bbox_position(entry: &TieEntry<'_>) -> (f64, f64) {
    let bbox = entry.candidate.element.bounding_box;
    let top = bbox.and_then(|b| b.top).unwrap_or(f64::INFINITY);
    let left = bbox.and_then(|b| b.left).unwrap_or(f64::INFINITY);
    (top, left)
}

fn has_real_bbox(entry: &TieEntry<'_>) -> bool {
    entry
        .candidate
        .element
        .bounding_box
        .is_some_and(|b| b.has_geometry())
}

#[cfg(test)]
#[path = "disambiguate_test.rs"]
mod disambiguate_test;
