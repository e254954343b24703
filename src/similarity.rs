//! Token-aware text similarity on the 0-100 scale used by the match scorer.
//!
//! Scraped attribute text is noisy: `"E-mail address"`, `"email_address"`, and
//! `"address email"` should all land close to the synonym `"email address"`.
//! The blend below takes the best of a plain edit-based ratio and two
//! token-rearranging ratios, with the token variants discounted slightly so an
//! exact phrase always outranks a reshuffled one.

use std::collections::BTreeSet;

/// Reduce text to lowercase alphanumeric tokens joined by single spaces.
///
/// This is the canonical form used for synonym tables and fuzzy comparison.
/// Anything that is not ASCII alphanumeric acts as a token separator.
pub fn normalize_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut pending_space = false;
    for c in value.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_space = true;
        }
    }
    out
}

/// Edit-based similarity: `200 * LCS / (len_a + len_b)`, on 0-100.
///
/// Two empty strings are identical (100); otherwise no common subsequence
/// means 0.
pub fn indel_ratio(a: &str, b: &str) -> f64 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();
    if total == 0 {
        return 100.0;
    }
    let common = lcs_length(&a_chars, &b_chars);
    200.0 * common as f64 / total as f64
}

/// Similarity of the two strings with their tokens sorted alphabetically.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    indel_ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Set-based similarity that ignores duplicated and reordered tokens.
///
/// Compares the shared-token core against each side's full token set, so a
/// phrase that wholly contains the other scores near 100.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let sect: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let diff_ab: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let diff_ba: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let sect_joined = sect.join(" ");
    let combined_ab = join_parts(&sect_joined, &diff_ab.join(" "));
    let combined_ba = join_parts(&sect_joined, &diff_ba.join(" "));

    let mut best = indel_ratio(&combined_ab, &combined_ba);
    if !sect_joined.is_empty() {
        best = best.max(indel_ratio(&sect_joined, &combined_ab));
        best = best.max(indel_ratio(&sect_joined, &combined_ba));
    }
    best
}

/// Blended similarity used for synonym matching, on 0-100.
///
/// Returns the best of the plain ratio and the token-sort/token-set ratios,
/// the latter two scaled by 0.95 so exact phrasing wins ties. Empty input on
/// either side scores 0.
pub fn token_similarity(a: &str, b: &str) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let base = indel_ratio(a, b);
    let sort_scaled = 0.95 * token_sort_ratio(a, b);
    let set_scaled = 0.95 * token_set_ratio(a, b);
    base.max(sort_scaled).max(set_scaled)
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_parts(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{} {}", head, tail),
    }
}

fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut current = vec![0usize; b.len() + 1];
    for &ca in a {
        for (j, &cb) in b.iter().enumerate() {
            current[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                current[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut current);
    }
    prev[b.len()]
}

#[cfg(test)]
#[path = "similarity_test.rs"]
mod similarity_test;
