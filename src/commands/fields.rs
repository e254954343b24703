use anyhow::Result;
use serde_json::json;

use fieldprobe::dictionary::GLOBAL_DICTIONARY;

use crate::commands::utils;

pub fn handle_fields(
    patterns: bool,
    synonyms: bool,
    filter: Option<String>,
    pretty: bool,
) -> Result<()> {
    let filter = filter.map(|f| f.to_lowercase());

    let mut rows = Vec::new();
    for entry in GLOBAL_DICTIONARY.entries() {
        if let Some(filter) = &filter {
            if !entry.name.contains(filter.as_str()) {
                continue;
            }
        }
        let mut row = json!({ "field": entry.name });
        if patterns {
            let raw: Vec<&str> = entry.patterns.iter().map(|p| p.raw.as_str()).collect();
            row["patterns"] = json!(raw);
        }
        if synonyms {
            row["synonyms"] = json!(entry.synonyms);
        }
        rows.push(row);
    }

    utils::print_json(&rows, pretty)
}
