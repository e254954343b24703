use anyhow::Result;
use serde_json::json;

use fieldprobe::region::classify_region;
use fieldprobe::types::Viewport;

use crate::commands::utils;

pub fn handle_region(snapshot: String, viewport: Option<String>, pretty: bool) -> Result<()> {
    let snapshot = utils::load_snapshot(&snapshot)?;
    let viewport = match viewport {
        Some(spec) => Some(Viewport::parse(&spec)?),
        None => snapshot.viewport,
    };

    let rows: Vec<serde_json::Value> = snapshot
        .elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let region = classify_region(element, viewport.as_ref());
            json!({
                "index": index,
                "tag": element.tag,
                "id": element.id,
                "region": region,
            })
        })
        .collect();

    utils::print_json(&rows, pretty)
}
