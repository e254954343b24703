use std::io::Read;

use anyhow::{Context, Result};
use serde::Serialize;

use fieldprobe::errors::FieldprobeError;
use fieldprobe::types::{PageSnapshot, ScrapedElement};

/// Read snapshot JSON from a file, or from stdin when the path is "-".
pub fn load_snapshot(path: &str) -> Result<PageSnapshot> {
    let raw = if path == "-" {
        let mut buffer = String::new();
        std::io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read snapshot from stdin")?;
        buffer
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read snapshot file: {}", path))?
    };
    parse_snapshot(&raw)
}

/// Parse snapshot JSON. Accepts either a full snapshot object or a bare
/// element array.
pub fn parse_snapshot(raw: &str) -> Result<PageSnapshot> {
    if let Ok(snapshot) = serde_json::from_str::<PageSnapshot>(raw) {
        return Ok(snapshot);
    }
    match serde_json::from_str::<Vec<ScrapedElement>>(raw) {
        Ok(elements) => Ok(PageSnapshot {
            viewport: None,
            elements,
        }),
        Err(err) => Err(FieldprobeError::SnapshotParse(err.to_string()).into()),
    }
}

/// Print a value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", rendered);
    Ok(())
}
