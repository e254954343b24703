//! The resolution engine: a dictionary, tuning options, and the optional
//! resolver hooks, wired into one front door.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::dictionary::{FieldDictionary, GLOBAL_DICTIONARY};
use crate::disambiguate::{self, FieldResolution};
use crate::region::classify_region;
use crate::resolver::{AmbiguityResolver, FallbackResolver, UnknownFieldResolver};
use crate::scoring::{self, FieldMatch};
use crate::types::{Candidate, PageSnapshot, ScrapedElement, Viewport};

/// Tuning knobs for matching and disambiguation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    /// Minimum 0-100 similarity for a fuzzy hit to count.
    pub score_cutoff: f64,
    /// Maximum ranked matches kept per element.
    pub result_limit: usize,
    /// Candidates within this score distance of the best are treated as
    /// tied during disambiguation.
    pub score_tolerance: f64,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            score_cutoff: 75.0,
            result_limit: 5,
            score_tolerance: 0.05,
        }
    }
}

/// Scored candidates and the per-field winners for one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub candidates: Vec<Candidate>,
    pub resolutions: BTreeMap<String, FieldResolution>,
}

/// Resolves scraped elements to canonical form fields.
///
/// The engine owns a shared dictionary and the optional resolver hooks.
/// It holds no per-call state, so one instance can serve many snapshots
/// from many threads.
pub struct ResolutionEngine {
    dictionary: Arc<FieldDictionary>,
    options: EngineOptions,
    fallback_resolver: Option<Box<dyn FallbackResolver>>,
    ambiguity_resolver: Option<Box<dyn AmbiguityResolver>>,
    unknown_field_resolver: Option<Box<dyn UnknownFieldResolver>>,
}

impl ResolutionEngine {
    /// Engine over the built-in dictionary with default options.
    pub fn new() -> Self {
        Self::with_options(EngineOptions::default())
    }

    pub fn with_options(options: EngineOptions) -> Self {
        Self::with_dictionary(GLOBAL_DICTIONARY.clone(), options)
    }

    pub fn with_dictionary(dictionary: Arc<FieldDictionary>, options: EngineOptions) -> Self {
        Self {
            dictionary,
            options,
            fallback_resolver: None,
            ambiguity_resolver: None,
            unknown_field_resolver: None,
        }
    }

    /// Consulted when an element yields no dictionary match at all.
    pub fn with_fallback_resolver(mut self, resolver: impl FallbackResolver + 'static) -> Self {
        self.fallback_resolver = Some(Box::new(resolver));
        self
    }

    /// Consulted when candidates remain tied after the built-in heuristics.
    pub fn with_ambiguity_resolver(mut self, resolver: impl AmbiguityResolver + 'static) -> Self {
        self.ambiguity_resolver = Some(Box::new(resolver));
        self
    }

    /// Consulted once per resolution pass with the candidates nothing
    /// claimed.
    pub fn with_unknown_field_resolver(
        mut self,
        resolver: impl UnknownFieldResolver + 'static,
    ) -> Self {
        self.unknown_field_resolver = Some(Box::new(resolver));
        self
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    pub fn dictionary(&self) -> &FieldDictionary {
        &self.dictionary
    }

    /// Rank canonical fields for one element.
    pub fn match_element(&self, element: &ScrapedElement) -> Vec<FieldMatch> {
        scoring::match_element(
            &self.dictionary,
            element,
            self.options.score_cutoff,
            self.options.result_limit,
            self.fallback_resolver.as_deref(),
        )
    }

    /// Score one element and attach its page region.
    pub fn candidate(&self, element: &ScrapedElement, viewport: Option<&Viewport>) -> Candidate {
        let region = classify_region(element, viewport);
        let matches = self.match_element(element);
        Candidate::new(element.clone(), region, matches)
    }

    /// Score every element in a snapshot, preserving input order.
    pub fn candidates(&self, snapshot: &PageSnapshot) -> Vec<Candidate> {
        snapshot
            .elements
            .iter()
            .map(|element| self.candidate(element, snapshot.viewport.as_ref()))
            .collect()
    }

    /// Pick one winning candidate per field.
    pub fn resolve_fields(&self, candidates: &[Candidate]) -> BTreeMap<String, FieldResolution> {
        disambiguate::select_best_candidates(
            candidates,
            self.ambiguity_resolver.as_deref(),
            self.unknown_field_resolver.as_deref(),
            self.options.score_tolerance,
        )
    }

    /// Score a snapshot and resolve one winner per field.
    pub fn resolve_snapshot(&self, snapshot: &PageSnapshot) -> ResolutionOutcome {
        let candidates = self.candidates(snapshot);
        let resolutions = self.resolve_fields(&candidates);
        info!(
            "Resolved {} field(s) from {} element(s)",
            resolutions.len(),
            candidates.len()
        );
        ResolutionOutcome {
            candidates,
            resolutions,
        }
    }
}

impl Default for ResolutionEngine {
    fn default() -> Self {
        Self::new()
    }
}
