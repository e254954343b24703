//! Evidence-fusion scoring: one element's evidence in, ranked canonical
//! field matches out.
//!
//! Each piece of evidence runs two passes against the dictionary: a regex
//! pass over the raw text and a fuzzy pass comparing the normalized text to
//! the synonym vocabulary. Per field, only the best hit from each evidence
//! category survives; a regex hit always outranks a fuzzy hit within its
//! category. Surviving hits are combined with the category weights into a
//! 0-1 aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dictionary::FieldDictionary;
use crate::evidence::{EvidenceCategory, SourceTag, collect_evidence};
use crate::resolver::FallbackResolver;
use crate::similarity::token_similarity;
use crate::types::ScrapedElement;

/// How a contributor matched its evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMethod {
    Regex,
    Fuzzy,
    Fallback,
}

/// The winning hit from one evidence group for one field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchContributor {
    pub source: SourceTag,
    /// Weighted category; `None` for `value` evidence.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EvidenceCategory>,
    pub method: MatchMethod,
    /// Raw similarity on the 0-100 scale; regex hits report 100.
    pub score: f64,
    /// Score rescaled to 0-1; regex hits are exactly 1.0.
    pub normalized_score: f64,
    pub weight: f64,
    pub weighted_score: f64,
    /// The evidence text that matched.
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synonym: Option<String>,
}

/// Per-group scoring detail. Keyed by category name, or `source:<tag>` for
/// unweighted sources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub weight: f64,
    pub normalized_score: f64,
    pub weighted_score: f64,
    pub source: String,
}

/// One ranked canonical-field hypothesis for an element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: String,
    /// Aggregate confidence in 0-1.
    pub score: f64,
    pub score_percent: f64,
    /// Provenance marker on fallback-produced matches; dictionary matches
    /// leave this unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    pub contributors: Vec<MatchContributor>,
    pub breakdown: BTreeMap<String, BreakdownEntry>,
    /// Sum of the category weights that contributed to the score.
    pub weights_applied: f64,
}

/// A candidate hit before per-group reduction.
struct Pending {
    method: MatchMethod,
    score: f64,
    source: SourceTag,
    value: String,
    category: Option<EvidenceCategory>,
    pattern: Option<String>,
    synonym: Option<String>,
}

impl Pending {
    fn group_key(&self) -> String {
        match self.category {
            Some(category) => category.name().to_string(),
            None => format!("source:{}", self.source),
        }
    }
}

/// Regex hits displace fuzzy hits; among equals, a strictly higher score
/// wins, so the first hit seen keeps ties.
fn is_preferred(new: &Pending, existing: &Pending) -> bool {
    if existing.method == MatchMethod::Regex && new.method != MatchMethod::Regex {
        return false;
    }
    if new.method == MatchMethod::Regex && existing.method != MatchMethod::Regex {
        return true;
    }
    new.score > existing.score
}

fn update_best(
    best: &mut BTreeMap<String, BTreeMap<String, Pending>>,
    field: &str,
    pending: Pending,
) {
    let groups = best.entry(field.to_string()).or_default();
    let key = pending.group_key();
    match groups.get(&key) {
        Some(existing) if !is_preferred(&pending, existing) => {}
        _ => {
            groups.insert(key, pending);
        }
    }
}

/// Score one element against the dictionary.
///
/// Returns up to `limit` matches sorted by descending score, field name
/// breaking ties. The fallback resolver is consulted when the element has no
/// usable evidence at all or when no evidence clears the dictionary; its
/// output is adopted as-is apart from a default `method` of `"fallback"`.
pub(crate) fn match_element(
    dictionary: &FieldDictionary,
    element: &ScrapedElement,
    score_cutoff: f64,
    limit: usize,
    fallback: Option<&dyn FallbackResolver>,
) -> Vec<FieldMatch> {
    if limit == 0 {
        return Vec::new();
    }

    let evidence = collect_evidence(element);
    if evidence.is_empty() {
        return invoke_fallback(element, fallback, limit);
    }

    // field name -> evidence group -> best pending hit
    let mut best: BTreeMap<String, BTreeMap<String, Pending>> = BTreeMap::new();

    for item in &evidence {
        let category = item.source.category();

        for entry in dictionary.entries() {
            for pattern in &entry.patterns {
                if pattern.regex.is_match(&item.raw) {
                    update_best(
                        &mut best,
                        &entry.name,
                        Pending {
                            method: MatchMethod::Regex,
                            score: 100.0,
                            source: item.source.clone(),
                            value: item.raw.clone(),
                            category,
                            pattern: Some(pattern.raw.clone()),
                            synonym: None,
                        },
                    );
                    break;
                }
            }
        }

        for entry in dictionary.entries() {
            let mut best_score = 0.0;
            let mut best_synonym: Option<&String> = None;
            for synonym in &entry.synonyms {
                let score = token_similarity(&item.normalized, synonym);
                if score > best_score {
                    best_score = score;
                    best_synonym = Some(synonym);
                }
            }
            if best_score >= score_cutoff {
                if let Some(synonym) = best_synonym {
                    update_best(
                        &mut best,
                        &entry.name,
                        Pending {
                            method: MatchMethod::Fuzzy,
                            score: best_score,
                            source: item.source.clone(),
                            value: item.raw.clone(),
                            category,
                            pattern: None,
                            synonym: Some(synonym.clone()),
                        },
                    );
                }
            }
        }
    }

    if best.is_empty() {
        return invoke_fallback(element, fallback, limit);
    }

    let mut results: Vec<FieldMatch> = Vec::with_capacity(best.len());
    for (field, groups) in &best {
        let mut contributors = Vec::with_capacity(groups.len());
        let mut breakdown = BTreeMap::new();
        let mut weighted_total = 0.0;
        let mut weights_applied = 0.0;

        for (group_key, pending) in groups {
            let normalized_score = if pending.method == MatchMethod::Regex {
                1.0
            } else {
                pending.score / 100.0
            };
            let weight = pending
                .category
                .map(EvidenceCategory::weight)
                .unwrap_or(0.0);
            let weighted_score = weight * normalized_score;
            contributors.push(MatchContributor {
                source: pending.source.clone(),
                category: pending.category,
                method: pending.method,
                score: pending.score,
                normalized_score,
                weight,
                weighted_score,
                value: pending.value.clone(),
                pattern: pending.pattern.clone(),
                synonym: pending.synonym.clone(),
            });
            breakdown.insert(
                group_key.clone(),
                BreakdownEntry {
                    weight,
                    normalized_score,
                    weighted_score,
                    source: pending.source.to_string(),
                },
            );
            if pending.category.is_some() {
                weighted_total += weighted_score;
            }
            weights_applied += weight;
        }

        contributors.sort_by(|a, b| {
            b.weight
                .total_cmp(&a.weight)
                .then(b.normalized_score.total_cmp(&a.normalized_score))
                .then_with(|| a.source.to_string().cmp(&b.source.to_string()))
        });

        let score = weighted_total.min(1.0);
        results.push(FieldMatch {
            field: field.clone(),
            score,
            score_percent: score * 100.0,
            method: None,
            contributors,
            breakdown,
            weights_applied,
        });
    }

    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.field.cmp(&b.field))
    });
    results.truncate(limit);
    results
}

fn invoke_fallback(
    element: &ScrapedElement,
    fallback: Option<&dyn FallbackResolver>,
    limit: usize,
) -> Vec<FieldMatch> {
    let Some(resolver) = fallback else {
        return Vec::new();
    };
    let mut matches = resolver.resolve(element);
    debug!("Fallback resolver produced {} match(es)", matches.len());
    for item in &mut matches {
        if item.method.is_none() {
            item.method = Some("fallback".to_string());
        }
    }
    matches.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.field.cmp(&b.field))
    });
    matches.truncate(limit);
    matches
}

#[cfg(test)]
#[path = "scoring_test.rs"]
mod scoring_test;
