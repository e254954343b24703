//! Synonym derivation for the field dictionary.
//!
//! Fuzzy matching compares normalized evidence text against a vocabulary of
//! plain-text synonyms. Rather than maintain that vocabulary by hand, it is
//! derived from each field's regex patterns by stripping regex syntax down to
//! the words the pattern was written to catch.

use std::collections::BTreeSet;

use crate::similarity::normalize_text;

/// Trailing compound words worth splitting into their own token, so a
/// concatenated form like `"emailaddress"` also yields `"email address"`.
const SUFFIX_SPLITS: &[&str] = &[
    "address", "number", "name", "letter", "profile", "handle", "url", "site",
    "box", "input", "button",
];

/// Derive the fuzzy-match vocabulary for a field from its name and patterns.
///
/// Output is normalized, deduplicated, and sorted.
pub(crate) fn derive_synonyms(field: &str, patterns: &[&str]) -> Vec<String> {
    let mut variants: BTreeSet<String> = BTreeSet::new();
    variants.insert(field.to_string());
    variants.insert(field.replace('_', " "));
    let normalized_field = normalize_text(field);
    let field_tokens: Vec<&str> = normalized_field.split_whitespace().collect();
    if field_tokens.len() > 1 {
        variants.insert(field_tokens.concat());
    }
    for pattern in patterns {
        variants.extend(pattern_to_synonyms(pattern));
    }
    variants
        .into_iter()
        .map(|v| normalize_text(&v))
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Strip regex syntax from a pattern, leaving the words it matches.
///
/// Handles the constructs the dictionary patterns actually use: `^`/`$`
/// anchors, the `[\s_-]` separator class (optional or not), `\d*`/`\w`
/// escapes, and literal `_`/`-` separators. Everything else non-alphanumeric
/// becomes a space.
fn pattern_to_synonyms(pattern: &str) -> Vec<String> {
    let mut trimmed = pattern.trim();
    if let Some(rest) = trimmed.strip_prefix('^') {
        trimmed = rest;
    }
    if let Some(rest) = trimmed.strip_suffix('$') {
        trimmed = rest;
    }
    let replaced = trimmed
        .replace(r"[\s_-]?", " ")
        .replace(r"[\s_-]", " ")
        .replace('_', " ")
        .replace('-', " ")
        .replace(r"\d*", "")
        .replace(r"\w", "");
    let despecialed: String = replaced
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == ' ' {
                c
            } else {
                ' '
            }
        })
        .collect();
    let cleaned = despecialed
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    if cleaned.is_empty() {
        return Vec::new();
    }

    let mut variants: BTreeSet<String> = BTreeSet::new();
    for split in expand_suffixes(&cleaned) {
        variants.insert(split);
    }
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    if tokens.len() > 1 {
        variants.insert(tokens.concat());
    }
    variants.insert(cleaned);
    variants.into_iter().collect()
}

/// Split a recognized trailing compound word off into its own token.
///
/// The prefix may end up with a trailing space already present; callers
/// normalize afterwards.
fn expand_suffixes(term: &str) -> Vec<String> {
    let mut out = Vec::new();
    for suffix in SUFFIX_SPLITS {
        if term.ends_with(suffix) && term.len() > suffix.len() {
            let prefix = &term[..term.len() - suffix.len()];
            out.push(format!("{} {}", prefix, suffix));
        }
    }
    out
}

#[cfg(test)]
#[path = "synonyms_test.rs"]
mod synonyms_test;
