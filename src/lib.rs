//! # fieldprobe
#![allow(clippy::uninlined_format_args)]
//!
//! Field resolution engine for scraped web forms, designed for LLM-driven
//! automation.
//!
//! Maps scraped DOM elements to canonical field identities ("email",
//! "first_name", ...) with confidence scores, and picks one winning element
//! per field per page, deterministically.
//!
//! ## Primary Use Case
//!
//! An automation agent scrapes a page into a JSON snapshot (element
//! attributes, geometry, ancestor chains) and needs to know which element is
//! the email input before typing into it. This crate answers that question
//! without touching a browser: the same snapshot always produces the same
//! answer.
//!
//! ## Installation
//!
//! ```bash
//! cargo install fieldprobe
//! ```
//!
//! ## CLI Usage
//!
//! ### Basic Commands
//!
//! ```bash
//! # Resolve every field on a scraped page
//! fieldprobe resolve snapshot.json
//!
//! # Read the snapshot from stdin
//! cat snapshot.json | fieldprobe resolve -
//!
//! # Raise the fuzzy cutoff and keep only the top 3 matches per element
//! fieldprobe resolve snapshot.json --cutoff 85 --limit 3
//!
//! # Human-readable summary instead of JSON
//! fieldprobe resolve snapshot.json --format simple
//!
//! # Rank fields for a single element
//! fieldprobe match snapshot.json --index 2
//!
//! # Inspect the built-in dictionary
//! fieldprobe fields
//! fieldprobe fields --filter email --synonyms
//!
//! # Classify page regions (header, footer, popup, ...)
//! fieldprobe region snapshot.json --viewport 1280x800
//! ```
//!
//! ### JSON Output and Processing with jq
//!
//! ```bash
//! # Winning element index for the email field
//! fieldprobe resolve snapshot.json | jq '.resolutions.email.candidate_index'
//!
//! # All resolved fields with their scores
//! fieldprobe resolve snapshot.json | \
//!   jq -r '.resolutions | to_entries[] | "\(.key): \(.value.score)"'
//!
//! # How each match was decided
//! fieldprobe resolve snapshot.json | \
//!   jq -r '.resolutions | to_entries[] | "\(.key): \(.value.resolved_by)"'
//!
//! # Elements that matched nothing
//! fieldprobe resolve snapshot.json | \
//!   jq '[.candidates[] | select(.matches == [])] | length'
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use fieldprobe::{PageSnapshot, ResolutionEngine};
//!
//! # fn example() -> anyhow::Result<()> {
//! let raw = std::fs::read_to_string("snapshot.json")?;
//! let snapshot: PageSnapshot = serde_json::from_str(&raw)?;
//!
//! let engine = ResolutionEngine::new();
//! let outcome = engine.resolve_snapshot(&snapshot);
//! for (field, resolution) in &outcome.resolutions {
//!     println!("{} -> element #{}", field, resolution.candidate_index);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Ambiguity that the built-in heuristics cannot settle can be delegated to
//! the embedding application through the hooks in [`resolver`].

/// Canonical field dictionary and its synonym vocabulary
pub mod dictionary;

/// Per-field winner selection across a page
pub mod disambiguate;

/// Engine wiring: dictionary, options, and resolver hooks
pub mod engine;

/// Error types and process exit codes
pub mod errors;

/// Evidence extraction from scraped elements
pub mod evidence;

/// Page region classification from ancestor chains
pub mod region;

/// Hooks for plugging application judgment into resolution
pub mod resolver;

/// Evidence-fusion scoring of elements against the dictionary
pub mod scoring;

/// Text normalization and fuzzy similarity ratios
pub mod similarity;

mod synonyms;

/// Merging recognized (OCR) text into snapshots
pub mod textmerge;

/// Core data types for snapshots and candidates
pub mod types;

pub use dictionary::{FieldDictionary, FieldEntry, FieldPattern, GLOBAL_DICTIONARY};
pub use disambiguate::{FieldResolution, ResolvedBy, select_best_candidates};
pub use engine::{EngineOptions, ResolutionEngine, ResolutionOutcome};
pub use errors::FieldprobeError;
pub use evidence::{EvidenceCategory, EvidenceItem, SourceTag, collect_evidence};
pub use region::{RegionLabel, classify_region};
pub use resolver::{
    AmbiguityResolver, FallbackResolver, TieEntry, UnknownAssignment, UnknownFieldResolver,
};
pub use scoring::{BreakdownEntry, FieldMatch, MatchContributor, MatchMethod};
pub use textmerge::{DEFAULT_MATCH_THRESHOLD, RecognizedText, merge_recognized_text};
pub use types::{
    AncestorInfo, BoundingBox, Candidate, OutputFormat, PageSnapshot, ScrapedElement, Viewport,
};
