//! Resolver hooks: the seams where an embedding application (typically an
//! LLM-driven agent) plugs into matching and disambiguation.
//!
//! All three hooks are optional. The engine behaves deterministically
//! without them; with them, an application can supply judgment the
//! dictionary heuristics cannot.

use crate::scoring::FieldMatch;
use crate::types::{Candidate, ScrapedElement};

/// One tied candidate handed to an [`AmbiguityResolver`].
#[derive(Debug, Clone, Copy)]
pub struct TieEntry<'a> {
    /// Position of the candidate in the original input order.
    pub index: usize,
    pub candidate: &'a Candidate,
    pub field_match: &'a FieldMatch,
}

/// A field assignment produced by an [`UnknownFieldResolver`].
#[derive(Debug, Clone)]
pub struct UnknownAssignment {
    pub field: String,
    pub candidate_index: usize,
    /// Confidence in 0-1 (values above 1 are treated as percents).
    pub score: f64,
    /// Display score; derived from `score` when absent.
    pub score_percent: Option<f64>,
    pub field_match: Option<FieldMatch>,
}

/// Produces matches for an element the dictionary could not identify.
///
/// Consulted when an element yields no usable evidence, or when its evidence
/// clears neither the regex patterns nor the fuzzy cutoff.
pub trait FallbackResolver: Send + Sync {
    fn resolve(&self, element: &ScrapedElement) -> Vec<FieldMatch>;
}

/// Chooses among candidates still tied after the built-in heuristics.
///
/// Returns the input-order index of the chosen candidate, or `None` to keep
/// the heuristic ordering. An index not present in the pool is ignored.
pub trait AmbiguityResolver: Send + Sync {
    fn resolve(&self, field: &str, entries: &[TieEntry<'_>]) -> Option<usize>;
}

/// Assigns fields to candidates that matched nothing at all.
///
/// Invoked once per resolution pass with every unmatched candidate.
/// Assignments for fields that already have a winner are discarded.
pub trait UnknownFieldResolver: Send + Sync {
    fn resolve(&self, unresolved: &[(usize, &Candidate)]) -> Vec<UnknownAssignment>;
}

impl<F> FallbackResolver for F
where
    F: Fn(&ScrapedElement) -> Vec<FieldMatch> + Send + Sync,
{
    fn resolve(&self, element: &ScrapedElement) -> Vec<FieldMatch> {
        self(element)
    }
}

impl<F> AmbiguityResolver for F
where
    F: Fn(&str, &[TieEntry<'_>]) -> Option<usize> + Send + Sync,
{
    fn resolve(&self, field: &str, entries: &[TieEntry<'_>]) -> Option<usize> {
        self(field, entries)
    }
}

impl<F> UnknownFieldResolver for F
where
    F: Fn(&[(usize, &Candidate)]) -> Vec<UnknownAssignment> + Send + Sync,
{
    fn resolve(&self, unresolved: &[(usize, &Candidate)]) -> Vec<UnknownAssignment> {
        self(unresolved)
    }
}
